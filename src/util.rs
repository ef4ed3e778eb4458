use crate::config::Theme;
use crate::consts;
use crate::game::Board;
use enum_map::{Enum, EnumMap};
use ratatui::layout::{Flex, Layout, Rect, Size};
use ratatui::style::Style;
use std::time::Duration;

/// The kinds of things drawn on the board, used as keys for the styles in
/// [`Globals::theme`]
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Element {
    SnakeHead,
    SnakeBody,
    Apple,
    Border,
}

/// Values derived from the configuration once at startup and passed
/// explicitly to everything that needs them
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Globals {
    /// The playing board
    pub(crate) board: Board,

    /// Time between movements of the snake
    pub(crate) tick_period: Duration,

    /// Style to draw each board element with
    pub(crate) theme: EnumMap<Element, Style>,
}

impl Default for Globals {
    fn default() -> Globals {
        Globals {
            board: Board::default(),
            tick_period: Duration::from_secs(1) / consts::DEFAULT_SPEED,
            theme: Theme::default().styles(),
        }
    }
}

/// Return a rectangle of size [`DISPLAY_SIZE`][consts::DISPLAY_SIZE]
/// centered within `buffer_area`
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Return a rectangle of the given size centered within `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [inner] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [inner] = Layout::vertical([size.height]).flex(Flex::Center).areas(inner);
    inner
}
