//! Command-line interface for the femboysay utility
//!
//! Reads a message from the arguments or stdin, prints it in a speech bubble
//! and prints the art file underneath.

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use femboysay::prelude::*;

/// Femboysay - a speech bubble above some ASCII art
#[derive(Parser, Debug)]
#[command(name = "femboysay")]
#[command(about = "Print a message in a speech bubble above a piece of ASCII art")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(disable_help_flag = true)]
#[command(after_help = "If no message is provided, reads from stdin.")]
pub struct Cli {
    /// Maximum width of the speech bubble
    #[arg(
        short,
        long,
        value_name = "WIDTH",
        default_value_t = DEFAULT_WIDTH as i64,
        allow_negative_numbers = true
    )]
    pub width: i64,

    /// Path to ASCII art file
    #[arg(short = 'f', long = "file", value_name = "ARTFILE", default_value = DEFAULT_ART_FILE)]
    pub art_file: PathBuf,

    /// Show this help message
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error|off)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Message to say
    #[arg(value_name = "MESSAGE", trailing_var_arg = true, allow_hyphen_values = true)]
    pub message: Vec<String>,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Usage text shown for `-h`
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

/// Main CLI application
pub struct FemboysayApp {
    renderer: BubbleRenderer,
    printer: ArtPrinter,
}

impl FemboysayApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self {
            renderer: BubbleRenderer::new(),
            printer: ArtPrinter::new(),
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        if cli.help {
            eprint!("{}", usage());
            return Ok(());
        }

        // Width is checked before any input is read
        let config = SayConfig::new(cli.width, cli.art_file)?;

        if cli.verbose {
            eprintln!("femboysay v{}", env!("CARGO_PKG_VERSION"));
        }

        let text = if cli.message.is_empty() {
            if crossterm::tty::IsTty::is_tty(&io::stdin()) {
                debug!("stdin is a terminal, reading message until EOF");
            }
            resolve_message(&cli.message, io::stdin().lock())?
        } else {
            resolve_message(&cli.message, io::empty())?
        };

        if cli.verbose {
            eprintln!("Read {} bytes of message", text.len());
        }

        let stdout = io::stdout();
        self.say(&text, &config, stdout.lock())?;
        Ok(())
    }

    /// Print the bubble for `text` followed by the configured art file
    ///
    /// The bubble is flushed before the art file is opened, so it reaches
    /// `out` even when printing the art fails.
    pub fn say<W: Write>(&self, text: &str, config: &SayConfig, mut out: W) -> Result<(), SayError> {
        let message = wrap(text, config.width());
        info!(
            lines = message.line_count(),
            width = message.max_width(),
            "Rendering bubble"
        );
        self.renderer.write_to(&message, &mut out)?;

        info!(path = %config.art_path().display(), "Printing art file");
        self.printer.print_to(config.art_path(), &mut out)
    }
}

impl Default for FemboysayApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the message text from positional words, or from `stdin` if there are none
///
/// Words are joined with single spaces. Stdin is read to EOF with its newlines
/// kept. Either way the result is trimmed, and an empty result is an error.
pub fn resolve_message<R: Read>(words: &[String], mut stdin: R) -> Result<String, SayError> {
    let text = if words.is_empty() {
        let mut buf = Vec::new();
        stdin.read_to_end(&mut buf).map_err(SayError::stdin_read)?;
        String::from_utf8_lossy(&buf).into_owned()
    } else {
        words.join(" ")
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(SayError::EmptyMessage);
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["femboysay"]).unwrap();
        assert_eq!(cli.width, 40);
        assert_eq!(cli.art_file, PathBuf::from("/usr/share/femboysay/femboy.txt"));
        assert!(!cli.help);
        assert!(!cli.verbose);
        assert!(cli.log_level.is_none());
        assert!(cli.message.is_empty());
    }

    #[test]
    fn test_cli_parsing_width_and_file() {
        let cli = Cli::try_parse_from(["femboysay", "-w", "20", "-f", "cat.txt", "hello", "there"])
            .unwrap();
        assert_eq!(cli.width, 20);
        assert_eq!(cli.art_file, PathBuf::from("cat.txt"));
        assert_eq!(cli.message, ["hello", "there"]);
    }

    #[test]
    fn test_cli_parsing_negative_width() {
        let cli = Cli::try_parse_from(["femboysay", "-w", "-5", "hi"]).unwrap();
        assert_eq!(cli.width, -5);
    }

    #[test]
    fn test_cli_parsing_help_flag() {
        let cli = Cli::try_parse_from(["femboysay", "-h"]).unwrap();
        assert!(cli.help);
    }

    #[test]
    fn test_cli_message_keeps_hyphen_words() {
        let cli = Cli::try_parse_from(["femboysay", "hi", "-w", "--there"]).unwrap();
        assert_eq!(cli.width, 40);
        assert_eq!(cli.message, ["hi", "-w", "--there"]);
    }

    #[test]
    fn test_cli_parsing_log_options() {
        let cli = Cli::try_parse_from([
            "femboysay",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "hi",
        ])
        .unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert_eq!(cli.log_format, Some(LogFormat::Json));
    }

    #[test]
    fn test_cli_rejects_non_numeric_width() {
        assert!(Cli::try_parse_from(["femboysay", "-w", "wide"]).is_err());
    }

    #[test]
    fn test_usage_mentions_stdin() {
        let text = usage();
        assert!(text.contains("-w"));
        assert!(text.contains("-f"));
        assert!(text.contains("If no message is provided, reads from stdin."));
    }

    #[test]
    fn test_resolve_message_joins_words() {
        let words = vec!["hello".to_string(), "big".to_string(), "world".to_string()];
        let text = resolve_message(&words, io::empty()).unwrap();
        assert_eq!(text, "hello big world");
    }

    #[test]
    fn test_resolve_message_reads_stdin() {
        let text = resolve_message(&[], "\n  line one\nline two\n\n".as_bytes()).unwrap();
        assert_eq!(text, "line one\nline two");
    }

    #[test]
    fn test_resolve_message_ignores_stdin_when_words_given() {
        let words = vec!["args".to_string()];
        let text = resolve_message(&words, "stdin text".as_bytes()).unwrap();
        assert_eq!(text, "args");
    }

    #[test]
    fn test_resolve_message_empty() {
        let err = resolve_message(&[], "   \n\t\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SayError::EmptyMessage));

        let words = vec!["  ".to_string()];
        assert!(matches!(
            resolve_message(&words, io::empty()),
            Err(SayError::EmptyMessage)
        ));
    }

    #[test]
    fn test_say_writes_bubble_then_art() {
        let dir = tempdir().unwrap();
        let art_path = dir.path().join("art.txt");
        fs::write(&art_path, "(=^.^=)\n").unwrap();

        let config = SayConfig::new(40, &art_path).unwrap();
        let mut out = Vec::new();
        FemboysayApp::new().say("hi", &config, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            " ____ \n< hi >\n ---- \n(=^.^=)\n"
        );
    }

    #[test]
    fn test_say_keeps_bubble_when_art_missing() {
        let dir = tempdir().unwrap();
        let config = SayConfig::new(40, dir.path().join("missing.txt")).unwrap();
        let mut out = Vec::new();

        let err = FemboysayApp::new().say("hi", &config, &mut out).unwrap_err();
        assert!(matches!(err, SayError::ArtOpen { .. }));
        assert_eq!(String::from_utf8(out).unwrap(), " ____ \n< hi >\n ---- \n");
    }

    #[test]
    fn test_app_default() {
        // Verify the app can be created via Default without panicking
        let _app = FemboysayApp::default();
    }
}
