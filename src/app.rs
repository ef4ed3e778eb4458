use crate::command::Command;
use crate::game::Game;
use crate::util::Globals;
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::read;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// The top-level application: the game screen plus an optional startup
/// warning shown over it
#[derive(Clone, Debug)]
pub(crate) struct App {
    screen: Screen,
    warning: Option<Warning>,
}

impl App {
    pub(crate) fn new(globals: Globals, warning: Option<Warning>) -> App {
        App {
            screen: Screen::Game(Game::new(globals)),
            warning,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        if let Screen::Game(ref game) = self.screen {
            terminal.draw(|frame| {
                game.draw(frame);
                if let Some(ref warning) = self.warning {
                    frame.render_widget(warning, frame.area());
                }
            })?;
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        // While a warning is up, the game does not tick.
        if let Some(ref warning) = self.warning {
            if let Some(cmd) = read()?
                .as_key_press_event()
                .and_then(Command::from_key_event)
            {
                match warning.handle_command(cmd) {
                    Some(WarningOutcome::Dismissed) => self.warning = None,
                    Some(WarningOutcome::Quit) => self.screen = Screen::Quit,
                    None => (),
                }
            }
        } else if let Screen::Game(ref mut game) = self.screen {
            if let Some(screen) = game.process_input()? {
                self.screen = screen;
            }
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Game(Game),
    Quit,
}
