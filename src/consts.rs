//! Assorted constants & hard-coded configuration
use ratatui::{layout::Size, style::Color};

/// Default number of game ticks per second
pub(crate) const DEFAULT_SPEED: u32 = 10;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Board dimensions (in cells) used when the configuration does not say
/// otherwise
pub(crate) const DEFAULT_GRID_SIZE: Size = Size {
    width: 32,
    height: 20,
};

/// Smallest board the game will accept
pub(crate) const MIN_GRID_SIZE: Size = Size {
    width: 2,
    height: 2,
};

/// Largest board that fits inside [`DISPLAY_SIZE`] along with the border
pub(crate) const MAX_GRID_SIZE: Size = Size {
    width: 78,
    height: 22,
};

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '>';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '<';

/// Glyph for the cells of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the apple
pub(crate) const APPLE_SYMBOL: char = '●';

/// Default color for the snake's head and body
pub(crate) const SNAKE_COLOR: Color = Color::Green;

/// Default color for the apple
pub(crate) const APPLE_COLOR: Color = Color::LightRed;

/// Default color for the board border
pub(crate) const BORDER_COLOR: Color = Color::Gray;
