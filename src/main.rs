mod app;
mod command;
mod config;
mod consts;
mod game;
mod util;
mod warning;
use crate::app::App;
use crate::config::Config;
use crate::warning::Warning;
use lexopt::prelude::*;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

static USAGE: &str = concat!(
    "Usage: wrapsnake [options]\n",
    "\n",
    "Options:\n",
    "  -c, --config <PATH>  Read configuration from <PATH>\n",
    "  -h, --help           Print this help text\n",
    "  -V, --version        Print the program version\n",
);

fn main() -> ExitCode {
    match Args::parse_env() {
        Ok(Args::Run { config_path }) => run(config_path.as_deref()),
        Ok(Args::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Args::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("wrapsnake: {e}");
            eprint!("{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(config_path: Option<&Path>) -> ExitCode {
    let (config, warning) = load_config(config_path);
    let globals = config.globals();
    let terminal = ratatui::init();
    let r = App::new(globals, warning).run(terminal);
    ratatui::restore();
    io_exit(r)
}

/// Load the configuration file.  A failure to load is reported as an
/// in-terminal warning over a default-configured game rather than aborting.
fn load_config(config_path: Option<&Path>) -> (Config, Option<Warning>) {
    let r = if let Some(p) = config_path {
        Config::load(p, false)
    } else {
        Config::default_path().and_then(|p| Config::load(&p, true))
    };
    match r {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(Warning::new(&e))),
    }
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Args {
    Run { config_path: Option<PathBuf> },
    Help,
    Version,
}

impl Args {
    fn parse_env() -> anyhow::Result<Args> {
        let mut config_path = None;
        let mut parser = lexopt::Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => {
                    config_path = Some(PathBuf::from(parser.value()?));
                }
                Short('h') | Long("help") => return Ok(Args::Help),
                Short('V') | Long("version") => return Ok(Args::Version),
                _ => return Err(arg.unexpected().into()),
            }
        }
        Ok(Args::Run { config_path })
    }
}
