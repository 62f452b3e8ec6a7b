//! `tomlb` CLI: convert JSON to TOML and back from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Encode JSON to TOML (stdin → stdout)
//! echo '{"name":"app","server":{"port":8080}}' | tomlb encode
//!
//! # Indent nested tables by 4 spaces, file to file
//! tomlb encode --indent 4 -i config.json -o config.toml
//!
//! # Decode TOML to pretty-printed JSON
//! tomlb decode -i config.toml
//!
//! # Validate a TOML file
//! tomlb check -i config.toml
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use toml_bridge::{decode_str, encode_value, EncodeOptions, HostValue};

#[derive(Parser)]
#[command(name = "tomlb", version, about = "JSON <-> TOML converter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode JSON to TOML
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Spaces per nesting level for table sections (0 = library default)
        #[arg(long, default_value_t = 0)]
        indent: usize,
    },
    /// Decode TOML to JSON
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit minified JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Check that the input is valid TOML
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            output,
            indent,
        } => {
            let json = read_input(input.as_deref())?;
            let parsed: serde_json::Value =
                serde_json::from_str(&json).context("Failed to parse input as JSON")?;
            let value = HostValue::from_json(&parsed);
            let toml = encode_value(&value, &EncodeOptions::with_indent(indent))
                .context("Failed to encode JSON to TOML")?;
            write_output(output.as_deref(), &toml)?;
        }
        Commands::Decode {
            input,
            output,
            compact,
        } => {
            let toml = read_input(input.as_deref())?;
            let value = decode_str(&toml).context("Failed to decode TOML")?;
            let tree = value.to_json().context("Failed to render JSON")?;
            let json = if compact {
                serde_json::to_string(&tree)?
            } else {
                serde_json::to_string_pretty(&tree)?
            };
            write_output(output.as_deref(), &json)?;
        }
        Commands::Check { input } => {
            let toml = read_input(input.as_deref())?;
            let value = decode_str(&toml).context("Invalid TOML")?;
            let keys = value.as_dict().map_or(0, |d| d.len());
            println!("OK: {} top-level keys", keys);
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
