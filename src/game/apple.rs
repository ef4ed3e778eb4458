use super::{Canvas, Drawable};
use crate::consts;
use crate::util::Element;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::Position;

/// The food cell.  `None` until the first successful placement, which happens
/// as part of game construction on any board with at least one free cell.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(super) struct Apple {
    pub(super) position: Option<Position>,
}

impl Apple {
    pub(super) fn new() -> Apple {
        Apple { position: None }
    }

    pub(super) fn is_at(&self, pos: Position) -> bool {
        self.position == Some(pos)
    }

    /// Move the apple to a cell chosen uniformly at random from `free_cells`.
    /// If there are no free cells (the snake fills the board), the apple is
    /// left where it was.
    pub(super) fn place<I, R>(&mut self, free_cells: I, rng: &mut R)
    where
        I: Iterator<Item = Position>,
        R: Rng,
    {
        if let Some(cell) = free_cells.choose(rng) {
            self.position = Some(cell);
        }
    }
}

impl Drawable for Apple {
    fn draw(&self, canvas: &mut Canvas<'_>) {
        if let Some(pos) = self.position {
            canvas.draw_cell(pos, consts::APPLE_SYMBOL, Element::Apple);
        }
    }
}
