// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};
use iced_gallery::config;
use iced_gallery::i18n::fluent::I18n;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    initialise_tracing();

    let mut args = pico_args::Arguments::from_env();
    let show_help = args.contains(["-h", "--help"]);
    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(message) => {
            eprintln!("iced_gallery: {message}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());

    if show_help {
        let (config, _) = config::load();
        print_help(&I18n::new(flags.lang.clone(), &config));
        return Ok(());
    }

    app::run(flags)
}

fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, String> {
    let lang: Option<String> = args.opt_value_from_str("--lang").map_err(|e| e.to_string())?;
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .map_err(|e| e.to_string())?;
    let title: Option<String> = args.opt_value_from_str("--title").map_err(|e| e.to_string())?;
    let subtitle: Option<String> = args
        .opt_value_from_str("--subtitle")
        .map_err(|e| e.to_string())?;

    let mut paths = Vec::new();
    for raw in args.finish() {
        if raw.to_string_lossy().starts_with("--") {
            return Err(format!("unknown option {}", raw.to_string_lossy()));
        }
        paths.push(PathBuf::from(raw));
    }

    Ok(Flags {
        lang,
        paths,
        config_dir,
        title,
        subtitle,
    })
}

fn print_help(i18n: &I18n) {
    let options = [
        ("-h, --help", "help-line-option-help"),
        ("--lang <LOCALE>", "help-line-option-lang"),
        ("--config-dir <DIR>", "help-line-option-config-dir"),
        ("--title <TEXT>", "help-line-option-title"),
        ("--subtitle <TEXT>", "help-line-option-subtitle"),
    ];

    println!("{}: iced_gallery [OPTIONS] [PATH...]", i18n.tr("help-usage"));
    println!();
    println!("{}:", i18n.tr("help-arguments"));
    println!("  {:<22}{}", "[PATH...]", i18n.tr("help-arg-paths"));
    println!();
    println!("{}:", i18n.tr("help-options"));
    for (flag, key) in options {
        println!("  {:<22}{}", flag, i18n.tr(key));
    }
}
