// src/cli.rs
use anyhow::Result;
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, Command};
use std::env;

use crate::infra::t;
use crate::reporting::OutputFormat;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("metal-ci-commands")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("generate")
                .about(t!("cmd_generate_about", locale = locale).to_string())
                .arg(
                    Arg::new("job")
                        .short('j')
                        .long("job")
                        .help(t!("arg_job", locale = locale).to_string())
                        .value_name("JOB")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("arg_config", locale = locale).to_string())
                        .value_name("CONFIG")
                        .default_value("Pipeline.toml")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .help(t!("arg_format", locale = locale).to_string())
                        .value_name("FORMAT")
                        .default_value("text")
                        .value_parser(OutputFormat::NAMES)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(t!("arg_output", locale = locale).to_string())
                        .value_name("OUTPUT")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("quiet")
                        .short('q')
                        .long("quiet")
                        .help(t!("arg_quiet", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("arg_force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    crate::set_language(&language);
    let locale = rust_i18n::locale().to_string();

    let matches = build_cli(&locale).get_matches();

    match matches.subcommand() {
        Some(("generate", generate_matches)) => {
            let args = commands::generate::GenerateArgs {
                job: required_arg(generate_matches, "job"),
                config: required_arg(generate_matches, "config"),
                config_is_default: generate_matches.value_source("config")
                    == Some(ValueSource::DefaultValue),
                format: required_arg(generate_matches, "format").parse()?,
                output: generate_matches.get_one::<String>("output").cloned(),
                quiet: generate_matches.get_flag("quiet"),
            };
            commands::generate::execute(args, &locale)?;
        }
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");
            let force = init_matches.get_flag("force");

            // Show language detection message if it was auto-detected
            if env::args().all(|arg| arg != "--lang") && !non_interactive {
                println!(
                    "🌐 {}",
                    t!("system_language_detected", locale = &locale, lang = &locale)
                );
            }
            commands::init::run_init_wizard(&locale, non_interactive, force)?;
        }
        _ => {
            // No subcommand: print help.
            build_cli(&locale).print_help()?;
        }
    }
    Ok(())
}

/// Reads an argument that is either required or has a default value.
fn required_arg(matches: &clap::ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}
