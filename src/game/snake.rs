use super::board::Board;
use super::direction::Direction;
use super::{Canvas, Drawable};
use crate::consts;
use crate::util::Element;
use ratatui::layout::Position;
use std::collections::{HashSet, VecDeque};

/// Snake state.
///
/// All cells are relative to the top-left corner of the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells occupied by the snake, head first.  Never empty.  The only
    /// duplicate this can ever contain is the head immediately after an
    /// `advance()` into the snake's own body, which the game resolves by
    /// calling `reset()`.
    pub(super) positions: VecDeque<Position>,

    /// The direction in which the snake is currently moving
    pub(super) direction: Direction,

    /// Direction requested by the player since the last tick, applied (and
    /// always cleared) by `update_direction()`
    pub(super) next_direction: Option<Direction>,

    /// Target body length.  `positions.len()` never exceeds this and catches
    /// up to it one cell per tick after the snake grows.
    pub(super) length: usize,

    /// The cell vacated by the tail on the most recent `advance()`, if any.
    /// Renderers may erase just this cell instead of repainting the board.
    pub(super) last_removed: Option<Position>,
}

impl Snake {
    /// Create a length-1 snake at the center of `board`, moving east
    pub(super) fn new(board: Board) -> Snake {
        Snake {
            positions: VecDeque::from([board.center()]),
            direction: Direction::East,
            next_direction: None,
            length: 1,
            last_removed: None,
        }
    }

    pub(super) fn head(&self) -> Position {
        *self
            .positions
            .front()
            .expect("snake should always have a head")
    }

    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Request a direction change for the next tick.  A request for the exact
    /// reverse of the current direction is dropped, as honoring it would drive
    /// the head straight into the second body cell.
    pub(super) fn buffer_direction(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.next_direction = Some(direction);
        }
    }

    /// Adopt the buffered direction, if any.  The buffer is emptied either
    /// way.  Must be called exactly once per tick, before `advance()`.
    pub(super) fn update_direction(&mut self) {
        if let Some(direction) = self.next_direction.take() {
            self.direction = direction;
        }
    }

    /// Move the snake forwards one cell in the current direction, wrapping
    /// around the edges of `board`.  The tail cell is dropped unless the
    /// snake has pending growth to absorb.
    pub(super) fn advance(&mut self, board: Board) {
        let new_head = self.direction.advance(self.head(), board);
        self.positions.push_front(new_head);
        self.last_removed = if self.positions.len() > self.length {
            self.positions.pop_back()
        } else {
            None
        };
    }

    /// Extend the snake's target length in response to eating an apple.  The
    /// body actually lengthens on the next `advance()`.
    pub(super) fn grow(&mut self) {
        self.length += 1;
    }

    /// Reinitialize the snake after a self-collision
    pub(super) fn reset(&mut self, board: Board) {
        *self = Snake::new(board);
    }

    /// Has the snake run into its own body?  True iff `positions` holds the
    /// same cell twice, which only `advance()` can bring about.
    pub(super) fn self_collision(&self) -> bool {
        let distinct = self.positions.iter().collect::<HashSet<_>>();
        distinct.len() < self.positions.len()
    }

    /// Return the glyph to use for drawing the snake's head
    fn head_symbol(&self) -> char {
        match self.direction {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }
}

impl Drawable for Snake {
    fn draw(&self, canvas: &mut Canvas<'_>) {
        if let Some(pos) = self.last_removed {
            canvas.erase_cell(pos);
        }
        for &pos in self.positions.iter().skip(1) {
            canvas.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, Element::SnakeBody);
        }
        canvas.draw_cell(self.head(), self.head_symbol(), Element::SnakeHead);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: Board = Board {
        width: 8,
        height: 6,
    };

    #[test]
    fn new_snake() {
        let snake = Snake::new(BOARD);
        assert_eq!(snake.head(), Position::new(4, 3));
        assert_eq!(snake.positions.len(), 1);
        assert_eq!(snake.direction, Direction::East);
        assert_eq!(snake.next_direction, None);
        assert_eq!(snake.length, 1);
        assert_eq!(snake.last_removed, None);
    }

    #[test]
    fn reversal_is_ignored() {
        let mut snake = Snake::new(BOARD);
        snake.buffer_direction(Direction::West);
        assert_eq!(snake.next_direction, None);
        snake.update_direction();
        assert_eq!(snake.direction, Direction::East);
    }

    #[test]
    fn perpendicular_turn_is_buffered() {
        let mut snake = Snake::new(BOARD);
        snake.buffer_direction(Direction::North);
        assert_eq!(snake.next_direction, Some(Direction::North));
        snake.update_direction();
        assert_eq!(snake.direction, Direction::North);
        assert_eq!(snake.next_direction, None);
    }

    #[test]
    fn later_buffer_wins() {
        let mut snake = Snake::new(BOARD);
        snake.buffer_direction(Direction::North);
        snake.buffer_direction(Direction::South);
        snake.update_direction();
        assert_eq!(snake.direction, Direction::South);
    }

    #[test]
    fn update_without_buffer_is_a_no_op() {
        let mut snake = Snake::new(BOARD);
        snake.update_direction();
        assert_eq!(snake.direction, Direction::East);
        assert_eq!(snake.next_direction, None);
    }

    #[test]
    fn advance_moves_head_and_drops_tail() {
        let mut snake = Snake::new(BOARD);
        snake.advance(BOARD);
        assert_eq!(snake.head(), Position::new(5, 3));
        assert_eq!(snake.positions.len(), 1);
        assert_eq!(snake.last_removed, Some(Position::new(4, 3)));
    }

    #[test]
    fn advance_wraps_around_the_east_edge() {
        let mut snake = Snake::new(BOARD);
        snake.positions = VecDeque::from([Position::new(7, 3)]);
        snake.advance(BOARD);
        assert_eq!(snake.head(), Position::new(0, 3));
    }

    #[test]
    fn growth_takes_effect_on_the_next_advance_only() {
        let mut snake = Snake::new(BOARD);
        snake.grow();
        assert_eq!(snake.positions.len(), 1);
        snake.advance(BOARD);
        assert_eq!(snake.positions.len(), 2);
        assert_eq!(snake.last_removed, None);
        snake.advance(BOARD);
        assert_eq!(snake.positions.len(), 2);
        assert_eq!(snake.last_removed, Some(Position::new(4, 3)));
    }

    #[test]
    fn self_collision_detects_a_duplicate_cell() {
        let mut snake = Snake::new(BOARD);
        snake.positions = VecDeque::from([
            Position::new(3, 2),
            Position::new(4, 2),
            Position::new(4, 1),
            Position::new(3, 1),
        ]);
        snake.length = 5;
        snake.direction = Direction::North;
        assert!(!snake.self_collision());
        snake.advance(BOARD);
        assert_eq!(snake.head(), Position::new(3, 1));
        assert!(snake.self_collision());
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut snake = Snake::new(BOARD);
        snake.grow();
        snake.buffer_direction(Direction::South);
        snake.advance(BOARD);
        snake.reset(BOARD);
        assert_eq!(snake, Snake::new(BOARD));
    }
}
