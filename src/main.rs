use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser;

use chordmap::cli::{render_keys, resolve_chord, CliArgs, CliCommand, ConfigSource};
use chordmap::keymap::{load_config_file, ConfigLineError, KeyMap};

/// Build the key map for the selected flavor and apply the key configuration
fn load_keymap(args: &CliArgs) -> Result<(KeyMap, Vec<ConfigLineError>)> {
    let mut keymap = KeyMap::new(args.flavor());

    let errors = match args.config_source() {
        ConfigSource::Explicit(path) => load_config_file(&mut keymap, &path)
            .with_context(|| format!("loading key configuration {}", path.display()))?,
        ConfigSource::Default(path) if path.exists() => load_config_file(&mut keymap, &path)
            .with_context(|| format!("loading key configuration {}", path.display()))?,
        ConfigSource::Default(path) => {
            tracing::debug!("No key configuration at {}, using defaults", path.display());
            Vec::new()
        }
        ConfigSource::None => {
            tracing::debug!("No config directory available, using defaults");
            Vec::new()
        }
    };

    Ok((keymap, errors))
}

fn run(args: CliArgs) -> Result<ExitCode> {
    let (keymap, errors) = load_keymap(&args)?;

    match &args.command {
        CliCommand::Dump => {
            for line in keymap.dump_config() {
                println!("{line}");
            }
        }
        CliCommand::Resolve { context, chord } => {
            println!("{}", resolve_chord(&keymap, context, chord)?);
        }
        CliCommand::Keys { format } => {
            let descs = keymap.descriptions(args.flavor());
            print!("{}", render_keys(&descs, *format)?);
        }
        CliCommand::Check => {
            for error in &errors {
                println!("{error}");
            }
            if !errors.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    chordmap::tracing::init();

    let args = CliArgs::parse();
    tracing::debug!(?args, "starting");

    run(args)
}
