extern crate ansi_term;
extern crate ctrlc;
extern crate mortal;
use crate::lang::Error;
use crate::mach::{Config, Recorder, Runtime};
use ansi_term::Style;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod screen;

pub use screen::TermCanvas;

const USAGE: &str = "Usage: turtle [--check | --trace] <file>";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Mode {
    Draw,
    Check,
    Trace,
}

pub fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    let (mode, filename) = match parse_args(std::env::args().skip(1)) {
        Some(args) => args,
        None => {
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };
    let source = match std::fs::read_to_string(&filename) {
        Ok(source) => source,
        Err(error) => {
            debug!(%error, filename = filename.as_str(), "read failed");
            eprintln!("Could not open file {}", filename);
            std::process::exit(1);
        }
    };
    if let Err(error) = main_loop(mode, &source, interrupted) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

fn main_loop(mode: Mode, source: &str, interrupted: Arc<AtomicBool>) -> Result<(), Fault> {
    let config = Config::from_env();
    let mut runtime = Runtime::new(config.clone());
    match mode {
        Mode::Check => {
            runtime.check(source)?;
            println!("OK");
        }
        Mode::Trace => {
            let mut recorder = Recorder::new();
            let result = runtime.draw(source, &mut recorder);
            for command in recorder.commands() {
                println!("{}", command);
            }
            result?;
        }
        Mode::Draw => {
            let mut canvas = TermCanvas::new(config, interrupted)?;
            let result = runtime.draw(source, &mut canvas);
            if result.is_ok() {
                canvas.wait()?;
            }
            drop(canvas);
            result?;
        }
    }
    Ok(())
}

fn parse_args<I: Iterator<Item = String>>(args: I) -> Option<(Mode, String)> {
    let mut mode = Mode::Draw;
    let mut filename = None;
    for arg in args {
        if arg == "--check" && mode == Mode::Draw {
            mode = Mode::Check;
        } else if arg == "--trace" && mode == Mode::Draw {
            mode = Mode::Trace;
        } else if arg.starts_with("--") || filename.is_some() {
            return None;
        } else {
            filename = Some(arg);
        }
    }
    filename.map(|f| (mode, f))
}

/// Anything that stops the binary.
#[derive(Debug)]
enum Fault {
    Program(Error),
    Io(std::io::Error),
}

impl From<Error> for Fault {
    fn from(error: Error) -> Self {
        Fault::Program(error)
    }
}

impl From<std::io::Error> for Fault {
    fn from(error: std::io::Error) -> Self {
        Fault::Io(error)
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Fault::Program(error) => write!(f, "{}", error),
            Fault::Io(error) => write!(f, "Terminal error: {}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Option<(Mode, String)> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(args(&["a.ttl"]), Some((Mode::Draw, "a.ttl".into())));
        assert_eq!(args(&["--check", "a.ttl"]), Some((Mode::Check, "a.ttl".into())));
        assert_eq!(args(&["a.ttl", "--trace"]), Some((Mode::Trace, "a.ttl".into())));
        assert_eq!(args(&[]), None);
        assert_eq!(args(&["--check"]), None);
        assert_eq!(args(&["--check", "--trace", "a.ttl"]), None);
        assert_eq!(args(&["--fast", "a.ttl"]), None);
        assert_eq!(args(&["a.ttl", "b.ttl"]), None);
    }
}
