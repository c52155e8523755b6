//! Command-line argument parsing for vimodal.
//!
//! This module provides the `Cli` struct which encapsulates all command-line
//! options and methods for parsing them.

use std::path::PathBuf;
use vimodal::config::Config;
use vimodal::core::handle::CursorShape;

/// Command-line interface configuration.
#[derive(Debug, Default, PartialEq)]
pub struct Cli {
    /// File to open
    pub file: Option<PathBuf>,

    /// Disable modal editing
    pub no_vi: bool,

    /// Start in Normal mode
    pub normal: bool,

    /// Cursor shape outside Normal mode
    pub cursor: Option<CursorShape>,

    /// Write debug logs to this file
    pub log_file: Option<PathBuf>,

    /// Print usage and exit
    pub help: bool,
}

pub const USAGE: &str = "\
vimodal - a small modal text editor

Usage: vimodal [OPTIONS] [FILE]

Options:
  -h, --help          Show this help message
      --no-vi         Disable vi-style modal editing
  -n, --normal        Start in Normal mode
  -c, --cursor SHAPE  Insert-mode cursor: block, bar or underline
  -l, --log FILE      Write debug logs to FILE (filter with RUST_LOG)

Keys:
  Esc  Normal mode    ^S  save    ^Q  quit    ^V  toggle vi mode";

impl Cli {
    /// Parse the process arguments.
    pub fn parse() -> Result<Self, Box<dyn std::error::Error>> {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Parse an argument list (without the program name).
    ///
    /// Returns an error if a flag is unknown, a value is missing, or more
    /// than one file is given.
    pub fn parse_from<I>(args: I) -> Result<Self, Box<dyn std::error::Error>>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cli = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => cli.help = true,
                "--no-vi" => cli.no_vi = true,
                "-n" | "--normal" => cli.normal = true,
                "-c" | "--cursor" => {
                    let Some(shape) = args.next() else {
                        return Err("--cursor requires a value".into());
                    };
                    cli.cursor = Some(shape.parse::<CursorShape>()?);
                }
                "-l" | "--log" => {
                    let Some(path) = args.next() else {
                        return Err("--log requires a value".into());
                    };
                    cli.log_file = Some(PathBuf::from(path));
                }
                arg if arg.starts_with('-') && arg != "-" => {
                    return Err(format!("Unknown flag: {}. Use --help for usage.", arg).into());
                }
                _ => {
                    if cli.file.is_some() {
                        return Err("Only one file can be opened".into());
                    }
                    cli.file = Some(PathBuf::from(arg));
                }
            }
        }

        Ok(cli)
    }

    /// Apply CLI overrides to a configuration object.
    pub fn apply_to_config(&self, config: &mut Config) {
        if self.no_vi {
            config.set("vi-mode", false);
        }
        if self.normal {
            config.set("vi-start-normal", true);
        }
        if let Some(shape) = self.cursor {
            config.set("cursor-shape", shape.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, Box<dyn std::error::Error>> {
        Cli::parse_from(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_flags_and_file() {
        let cli = parse(&["--normal", "-c", "underline", "notes.txt"]).unwrap();
        assert!(cli.normal);
        assert_eq!(cli.cursor, Some(CursorShape::Underline));
        assert_eq!(cli.file, Some(PathBuf::from("notes.txt")));
        assert!(!cli.no_vi);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["--cursor"]).is_err());
        assert!(parse(&["--cursor", "hexagon"]).is_err());
        assert!(parse(&["--frobnicate"]).is_err());
        assert!(parse(&["a.txt", "b.txt"]).is_err());
        assert!(parse(&["--log"]).is_err());
    }

    #[test]
    fn test_apply_to_config() {
        let mut config = Config::default();
        vimodal::user_config::configure(&mut config);

        let cli = parse(&["--no-vi", "--cursor", "block"]).unwrap();
        cli.apply_to_config(&mut config);
        assert_eq!(config.get_bool("vi-mode"), Some(false));
        assert_eq!(config.get_string("cursor-shape"), Some("block"));
        assert_eq!(config.get_bool("vi-start-normal"), Some(false));
    }

    #[test]
    fn test_no_args_is_default() {
        assert_eq!(parse(&[]).unwrap(), Cli::default());
    }
}
