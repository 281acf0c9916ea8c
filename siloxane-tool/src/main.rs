mod config;
mod document;
mod error;
mod samples;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use siloxane_core::{message_schema, LayoutMessage};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{load_config, resolve_settings, Settings};
use crate::document::LayoutDocument;
use crate::error::SxlError;

#[derive(Parser)]
#[command(name = "sxl")]
#[command(about = "Build and check Discord layout messages", long_about = None)]
struct Cli {
    /// Log validation decisions (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,

    /// Skip checking output against the wire schema
    #[arg(long, global = true)]
    no_check: bool,

    /// Accent color for containers without one (decimal or 0x hex)
    #[arg(long, global = true, value_parser = parse_color)]
    accent: Option<i64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a TOML layout document as a message body
    Render {
        /// Path to the layout document
        file: PathBuf,
    },
    /// Print a built-in layout
    Sample {
        /// basic-layout, media-and-files or opt-in
        name: String,
    },
    /// Print the wire schema every message body is checked against
    Schema,
}

fn parse_color(raw: &str) -> Result<i64, String> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix('#')) {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => raw.parse(),
    };
    parsed.map_err(|err| format!("invalid color {raw:?}: {err}"))
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit(message: &LayoutMessage, settings: &Settings) -> Result<(), SxlError> {
    let body = message.to_json();
    if settings.check_schema {
        message_schema().check(&body)?;
        debug!("output matches the wire schema");
    }

    let rendered = if settings.pretty {
        serde_json::to_string_pretty(&body)?
    } else {
        serde_json::to_string(&body)?
    };
    println!("{rendered}");

    for filename in message.attachments() {
        eprintln!("attachment: {filename}");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config();
    let settings = resolve_settings(&config, cli.compact, cli.no_check, cli.accent);
    debug!(?settings, "resolved settings");

    match cli.command {
        Command::Render { file } => {
            let message = LayoutDocument::load(&file)?.into_message(settings.accent_color)?;
            emit(&message, &settings)?;
        }
        Command::Sample { name } => {
            let message = samples::sample(&name)?;
            emit(&message, &settings)?;
        }
        Command::Schema => {
            let schema = message_schema();
            let rendered = if settings.pretty {
                serde_json::to_string_pretty(&schema)?
            } else {
                serde_json::to_string(&schema)?
            };
            println!("{rendered}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color_accepts_hex_and_decimal() {
        assert_eq!(parse_color("0x5865F2"), Ok(0x5865F2));
        assert_eq!(parse_color("#ff0000"), Ok(0xFF0000));
        assert_eq!(parse_color("42"), Ok(42));
        assert!(parse_color("blurple").is_err());
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["sxl", "sample", "opt-in", "--compact", "--accent", "0x10"])
            .unwrap();
        assert!(cli.compact);
        assert_eq!(cli.accent, Some(16));
        match cli.command {
            Command::Sample { name } => assert_eq!(name, "opt-in"),
            _ => panic!("Expected Sample"),
        }
    }
}
