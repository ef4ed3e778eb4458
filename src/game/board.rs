use crate::consts;
use ratatui::layout::{Position, Positions, Rect, Size};

/// A wrap-around grid of cells.  Cell coordinates are relative to the
/// top-left corner and always lie in `[0, width) × [0, height)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Board {
    /// Return the cell at which the snake starts & restarts
    pub(crate) fn center(self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Iterate over every cell of the board
    pub(crate) fn cells(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::from(consts::DEFAULT_GRID_SIZE)
    }
}

impl From<Size> for Board {
    fn from(size: Size) -> Board {
        Board {
            width: size.width,
            height: size.height,
        }
    }
}
