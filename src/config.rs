use crate::consts;
use crate::game::Board;
use crate::util::{Element, Globals};
use enum_map::{enum_map, EnumMap};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Board dimensions in cells
    grid: GridConfig,

    /// Game ticks per second
    speed: Speed,

    /// Colors for the things drawn on the board
    theme: Theme,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("wrapsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Derive the values handed to the rest of the program
    pub(crate) fn globals(&self) -> Globals {
        Globals {
            board: Board {
                width: self.grid.width,
                height: self.grid.height,
            },
            tick_period: self.speed.tick_period(),
            theme: self.theme.styles(),
        }
    }
}

/// Board dimensions, validated against [`consts::MIN_GRID_SIZE`] and
/// [`consts::MAX_GRID_SIZE`]
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawGridConfig")]
struct GridConfig {
    width: u16,
    height: u16,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            width: consts::DEFAULT_GRID_SIZE.width,
            height: consts::DEFAULT_GRID_SIZE.height,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGridConfig {
    width: u16,
    height: u16,
}

impl Default for RawGridConfig {
    fn default() -> RawGridConfig {
        RawGridConfig {
            width: consts::DEFAULT_GRID_SIZE.width,
            height: consts::DEFAULT_GRID_SIZE.height,
        }
    }
}

impl TryFrom<RawGridConfig> for GridConfig {
    type Error = GridSizeError;

    fn try_from(value: RawGridConfig) -> Result<GridConfig, GridSizeError> {
        let RawGridConfig { width, height } = value;
        if (consts::MIN_GRID_SIZE.width..=consts::MAX_GRID_SIZE.width).contains(&width)
            && (consts::MIN_GRID_SIZE.height..=consts::MAX_GRID_SIZE.height).contains(&height)
        {
            Ok(GridConfig { width, height })
        } else {
            Err(GridSizeError { width, height })
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("unsupported grid size {width}×{height} (must be 2×2 through 78×22)")]
pub(crate) struct GridSizeError {
    width: u16,
    height: u16,
}

/// Game speed in ticks per second
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(transparent)]
struct Speed(NonZeroU32);

impl Speed {
    fn tick_period(self) -> Duration {
        Duration::from_secs(1) / self.0.get()
    }
}

impl Default for Speed {
    fn default() -> Speed {
        Speed(NonZeroU32::new(consts::DEFAULT_SPEED).expect("DEFAULT_SPEED should be nonzero"))
    }
}

/// Colors for the board elements, as color strings understood by
/// [`Color::from_str`] (names, `#rrggbb`, or indexed values)
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Theme {
    snake: ThemeColor,
    apple: ThemeColor,
    border: ThemeColor,
}

impl Theme {
    pub(crate) fn styles(&self) -> EnumMap<Element, Style> {
        enum_map! {
            Element::SnakeHead => Style::new().fg(self.snake.0).add_modifier(Modifier::BOLD),
            Element::SnakeBody => Style::new().fg(self.snake.0).add_modifier(Modifier::BOLD),
            Element::Apple => Style::new().fg(self.apple.0),
            Element::Border => Style::new().fg(self.border.0),
        }
    }
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            snake: ThemeColor(consts::SNAKE_COLOR),
            apple: ThemeColor(consts::APPLE_COLOR),
            border: ThemeColor(consts::BORDER_COLOR),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "String")]
struct ThemeColor(Color);

impl TryFrom<String> for ThemeColor {
    type Error = ratatui::style::ParseColorError;

    fn try_from(s: String) -> Result<ThemeColor, Self::Error> {
        Color::from_str(&s).map(ThemeColor)
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
