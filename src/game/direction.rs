use super::board::Board;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the cell one step from `pos` in this direction on `board`.
    /// Stepping past an edge wraps around to the opposite edge.
    pub(super) fn advance(self, pos: Position, board: Board) -> Position {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::North => y = wrap_decrement(y, board.height),
            Direction::East => x = wrap_increment(x, board.width),
            Direction::South => y = wrap_increment(y, board.height),
            Direction::West => x = wrap_decrement(x, board.width),
        }
        Position { x, y }
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

fn wrap_decrement(x: u16, limit: u16) -> u16 {
    x.checked_sub(1).unwrap_or_else(|| limit.saturating_sub(1))
}

fn wrap_increment(x: u16, limit: u16) -> u16 {
    x.checked_add(1).filter(|&x2| x2 < limit).unwrap_or(0)
}
