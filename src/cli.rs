//! Command-line argument parsing for the chordmap binary
//!
//! Supports:
//! - Dumping the effective key configuration
//! - Resolving a single chord in a context
//! - Listing key descriptions as text, JSON or YAML
//! - Checking a configuration file for bad lines

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config_paths;
use crate::keymap::{find_context, name_of, ContextMask, KeyMap, KeyMapDesc, KeymapError};

/// Inspect and check feed reader key bindings
#[derive(Parser, Debug)]
#[command(
    name = "chordmap",
    version,
    about = "Inspect and check feed reader key bindings"
)]
pub struct CliArgs {
    /// Key configuration file (defaults to ~/.config/chordmap/config)
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Use the podboat key set instead of the newsboat one
    #[arg(short, long, global = true)]
    pub podboat: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the configuration directives that rebuild the current bindings
    Dump,
    /// Print the operation a chord triggers in a context
    Resolve {
        /// Context name, e.g. feedlist
        context: String,
        /// Chord, e.g. ^R or ENTER
        chord: String,
    },
    /// List every key binding with its help text
    Keys {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Report bad configuration lines and exit non-zero if there are any
    Check,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Where the key configuration comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line; must exist
    Explicit(PathBuf),
    /// The default location; skipped when absent
    Default(PathBuf),
    /// No config directory could be determined
    None,
}

impl CliArgs {
    /// Which application's key set to seed the key map with
    pub fn flavor(&self) -> ContextMask {
        if self.podboat {
            ContextMask::PODBOAT
        } else {
            ContextMask::NEWSBOAT
        }
    }

    pub fn config_source(&self) -> ConfigSource {
        match &self.config {
            Some(path) => ConfigSource::Explicit(path.clone()),
            None => config_paths::config_file()
                .map(ConfigSource::Default)
                .unwrap_or(ConfigSource::None),
        }
    }
}

/// Name of the operation a chord triggers in a concrete context
pub fn resolve_chord(keymap: &KeyMap, context: &str, chord: &str) -> anyhow::Result<&'static str> {
    if find_context(context).is_none() {
        return Err(KeymapError::InvalidContext(context.to_string()).into());
    }
    Ok(name_of(keymap.resolve(chord, context)))
}

fn render_text(descs: &[KeyMapDesc]) -> String {
    let mut out = String::new();
    let mut current_ctx = None;
    for desc in descs {
        if current_ctx != Some(desc.ctx.as_str()) {
            if current_ctx.is_some() {
                out.push('\n');
            }
            let _ = writeln!(out, "{}:", desc.ctx);
            current_ctx = Some(desc.ctx.as_str());
        }
        let line = format!("  {:<12} {:<32} {}", desc.key, desc.cmd, desc.desc);
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Render key descriptions in the requested format
pub fn render_keys(descs: &[KeyMapDesc], format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(descs),
        OutputFormat::Json => serde_json::to_string_pretty(descs)? + "\n",
        OutputFormat::Yaml => serde_yaml::to_string(descs)?,
    })
}
