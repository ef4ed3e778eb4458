use crate::command::Command;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect, Size},
    text::{Line, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};
use std::borrow::Cow;

/// A pop-up reporting a non-fatal startup problem (such as an unreadable
/// configuration file), shown over the game until dismissed
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    lines: Vec<String>,
}

impl Warning {
    const TEXT_WIDTH: u16 = 48;
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;

    /// Build a warning from an error and its chain of sources
    pub(crate) fn new(e: &dyn std::error::Error) -> Warning {
        let mut msgs = vec![e.to_string()];
        let mut source = e.source();
        while let Some(src) = source {
            msgs.push(src.to_string());
            source = src.source();
        }
        Warning::from_error_messages(msgs)
    }

    fn from_error_messages(msgs: Vec<String>) -> Warning {
        let mut lines = Vec::new();
        let opts = textwrap::Options::new(usize::from(Warning::TEXT_WIDTH)).break_words(true);
        if let Some(first) = msgs.first() {
            lines.extend(textwrap::wrap(first, opts).into_iter().map(Cow::into_owned));
        }
        if msgs.len() > 2 {
            lines.push(String::new());
            lines.push(String::from("Caused by:"));
            for (i, m) in msgs.into_iter().skip(1).enumerate() {
                let init_indent = format!("{i:>5}: ");
                let opts = textwrap::Options::new(usize::from(Warning::TEXT_WIDTH))
                    .break_words(true)
                    .initial_indent(&init_indent)
                    .subsequent_indent("       ");
                lines.extend(textwrap::wrap(&m, opts).into_iter().map(Cow::into_owned));
            }
        } else if let Some(cause) = msgs.get(1) {
            lines.push(String::new());
            lines.push(String::from("Caused by:"));
            let opts = textwrap::Options::new(usize::from(Warning::TEXT_WIDTH))
                .break_words(true)
                .initial_indent("    ")
                .subsequent_indent("    ");
            lines.extend(textwrap::wrap(cause, opts).into_iter().map(Cow::into_owned));
        }
        Warning { lines }
    }

    /// Handle an input command.  Returns `Some` if the user made a choice.
    pub(crate) fn handle_command(&self, cmd: Command) -> Option<WarningOutcome> {
        match cmd {
            Command::Enter | Command::Space => Some(WarningOutcome::Dismissed),
            Command::Quit | Command::Q => Some(WarningOutcome::Quit),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WarningOutcome {
    Dismissed,
    Quit,
}

impl Widget for &Warning {
    // `area` is here the area of the entire display in which the program is
    // drawing, not the area for just the widget proper.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = u16::try_from(self.lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(4);
        let block_area = center_rect(
            area,
            Size {
                width: Warning::WIDTH,
                height,
            },
        );
        let block = Block::bordered()
            .title(" WARNING ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let [text_area, ok_area] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
            .flex(Flex::Start)
            .spacing(1)
            .areas(block.inner(block_area));
        Clear.render(block_area, buf);
        block.render(block_area, buf);
        Text::from_iter(self.lines.iter().map(String::as_str)).render(text_area, buf);
        Line::from("[OK]").centered().render(ok_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("failed to parse configuration file")]
    struct OuterError(#[source] InnerError);

    #[derive(Debug, Error)]
    #[error("expected a number, found a string")]
    struct InnerError;

    #[test]
    fn error_chain_renders_a_caused_by_block() {
        let warning = Warning::new(&OuterError(InnerError));
        assert_eq!(
            warning.lines,
            [
                "failed to parse configuration file",
                "",
                "Caused by:",
                "    expected a number, found a string",
            ]
        );
    }

    #[test]
    fn long_error_chains_are_enumerated() {
        let warning = Warning::from_error_messages(vec![
            String::from("first"),
            String::from("second"),
            String::from("third"),
        ]);
        assert_eq!(
            warning.lines,
            ["first", "", "Caused by:", "    0: second", "    1: third"]
        );
    }

    #[test]
    fn overlong_messages_are_wrapped() {
        let warning = Warning::from_error_messages(vec![format!(
            "something went wrong with {}",
            "x".repeat(60)
        )]);
        assert!(warning.lines.len() > 1);
        assert!(warning
            .lines
            .iter()
            .all(|line| line.chars().count() <= usize::from(Warning::TEXT_WIDTH)));
    }

    #[test]
    fn dismiss_and_quit_commands() {
        let warning = Warning::from_error_messages(vec![String::from("oops")]);
        assert_eq!(
            warning.handle_command(Command::Enter),
            Some(WarningOutcome::Dismissed)
        );
        assert_eq!(
            warning.handle_command(Command::Q),
            Some(WarningOutcome::Quit)
        );
        assert_eq!(warning.handle_command(Command::Up), None);
    }

    #[test]
    fn render_single_message() {
        let warning = Warning::from_error_messages(vec![String::from("Terminal broke")]);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        warning.render(area, &mut buffer);
        let expected = Buffer::with_lines([
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "              ┌──────────────────── WARNING ─────────────────────┐              ",
            "              │ Terminal broke                                   │              ",
            "              │                                                  │              ",
            "              │                       [OK]                       │              ",
            "              └──────────────────────────────────────────────────┘              ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
        ]);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
