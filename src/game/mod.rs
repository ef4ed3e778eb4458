mod apple;
mod board;
mod direction;
mod snake;
use self::apple::Apple;
use self::direction::Direction;
use self::snake::Snake;
use crate::app::Screen;
use crate::command::Command;
use crate::util::{center_rect, get_display_area, Element, Globals};
use crossterm::event::{poll, read, Event};
use enum_map::EnumMap;
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Position, Rect},
    style::Style,
    widgets::Widget,
    Frame,
};
use std::io;
use std::time::Instant;

pub(crate) use self::board::Board;

/// The running game: the snake, the apple, and the tick machinery that
/// resolves each simulation step
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    snake: Snake,
    apple: Apple,
    globals: Globals,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(globals: Globals) -> Self {
        Game::new_with_rng(globals, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(globals: Globals, rng: R) -> Game<R> {
        let snake = Snake::new(globals.board);
        let mut game = Game {
            rng,
            snake,
            apple: Apple::new(),
            globals,
            next_tick: None,
        };
        game.place_apple();
        game
    }

    /// Wait for the next input event or the next tick, whichever comes
    /// first, and handle it.  Returns `Some` if the app should switch
    /// screens.
    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.next_tick.is_none() {
            self.next_tick = Some(Instant::now() + self.globals.tick_period);
        }
        let when = self.next_tick.expect("next_tick should be Some");
        let wait = when.saturating_duration_since(Instant::now());
        if wait.is_zero() || !poll(wait)? {
            self.advance();
            self.next_tick = None;
            Ok(None)
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Resolve one tick: adopt the buffered direction, move the snake, then
    /// settle eating and self-collision in that order.
    fn advance(&mut self) {
        let board = self.globals.board;
        self.snake.update_direction();
        self.snake.advance(board);
        if self.apple.is_at(self.snake.head()) {
            self.snake.grow();
            self.place_apple();
        }
        if self.snake.self_collision() {
            self.snake.reset(board);
            self.place_apple();
        }
    }

    /// Move the apple to a random cell not currently occupied by the snake.
    /// The free cells are recomputed from scratch on every call.
    fn place_apple(&mut self) {
        let snake = &self.snake;
        let free = self.globals.board.cells().filter(|&p| !snake.occupies(p));
        self.apple.place(free, &mut self.rng);
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit | Command::Q => return Some(Screen::Quit),
            Command::Up => self.snake.buffer_direction(Direction::North),
            Command::Down => self.snake.buffer_direction(Direction::South),
            Command::Left => self.snake.buffer_direction(Direction::West),
            Command::Right => self.snake.buffer_direction(Direction::East),
            Command::Enter | Command::Space => (),
        }
        None
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let mut block_size = self.globals.board.size();
        block_size.width = block_size.width.saturating_add(2);
        block_size.height = block_size.height.saturating_add(2);
        let block_area = center_rect(display, block_size);
        DottedBorder {
            style: self.globals.theme[Element::Border],
        }
        .render(block_area, buf);

        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
            theme: &self.globals.theme,
        };
        self.apple.draw(&mut canvas);
        self.snake.draw(&mut canvas);
    }
}

/// Anything that knows how to paint its cells onto the board canvas
trait Drawable {
    fn draw(&self, canvas: &mut Canvas<'_>);
}

/// A board-sized drawing surface; cell coordinates are translated to buffer
/// coordinates relative to `area`
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
    theme: &'a EnumMap<Element, Style>,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, element: Element) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(self.theme[element]));
        }
    }

    fn erase_cell(&mut self, pos: Position) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.reset();
        }
    }
}

/// The board border.  Dotted, because the edges are permeable: whatever
/// leaves through one side comes back in through the other.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder {
    style: Style,
}

impl DottedBorder {
    fn draw_char(&self, buf: &mut Buffer, area: Rect, x: u16, y: u16, symbol: char) {
        let Some(x) = area.x.checked_add(x) else {
            return;
        };
        let Some(y) = area.y.checked_add(y) else {
            return;
        };
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(self.style));
        }
    }
}

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let size = area.as_size();
        let max_x = size.width.saturating_sub(1);
        let max_y = size.height.saturating_sub(1);
        self.draw_char(buf, area, 0, 0, '·');
        self.draw_char(buf, area, max_x, 0, '·');
        self.draw_char(buf, area, max_x, max_y, '·');
        self.draw_char(buf, area, 0, max_y, '·');
        for x in 1..max_x {
            self.draw_char(buf, area, x, 0, '⋯');
            self.draw_char(buf, area, x, max_y, '⋯');
        }
        for y in 1..max_y {
            self.draw_char(buf, area, 0, y, '⋮');
            self.draw_char(buf, area, max_x, y, '⋮');
        }
    }
}
