//! Command-line interface for statusbar
//! Parses status markup and layout templates and prints the result.
//!
//! Usage:
//!   statusbar markup `<text>` [--color `<color>`] [--format `<format>`]  - Parse status markup
//!   statusbar template [`<text>`] [--sep `<char>`] [--format `<format>`]  - Parse and resolve a template
//!   statusbar split [`<text>`] [--align-sep `<chars>`]                    - Split a template by alignment
//!
//! `--config <file>` layers a TOML file over the built-in defaults; templates
//! and colors not given on the command line come from there.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::process;

use statusbar::statusbar::config::{BarConfig, Loader};
use statusbar::statusbar::formats::{render_segments, serialize, OutputFormat};
use statusbar::statusbar::markup::parse_markup;
use statusbar::statusbar::template::{parse_template, split_alignment};

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format: json, yaml or tag")
        .default_value("json")
}

fn main() {
    let matches = Command::new("statusbar")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse status bar markup and layout templates")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log parser fallbacks and lookups"),
        )
        .subcommand(
            Command::new("markup")
                .about("Parse status markup into styled segments")
                .arg(
                    Arg::new("text")
                        .help("Markup to parse")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("color")
                        .long("color")
                        .help("Color of text outside <fc> regions"),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("template")
                .about("Parse a layout template and resolve its command references")
                .arg(
                    Arg::new("text")
                        .help("Template to parse (defaults to the configured one)")
                        .index(1),
                )
                .arg(
                    Arg::new("sep")
                        .long("sep")
                        .help("Character delimiting command references"),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("split")
                .about("Split a template into left, center and right parts")
                .arg(
                    Arg::new("text")
                        .help("Template to split (defaults to the configured one)")
                        .index(1),
                )
                .arg(
                    Arg::new("align-sep")
                        .long("align-sep")
                        .help("Two characters marking the center part"),
                )
                .arg(format_arg()),
        )
        .get_matches();

    // Global args propagate down, so read them from the subcommand's matches.
    let (name, sub) = matches.subcommand().expect("subcommand is required");
    init_logging(sub.get_flag("verbose"));
    let config = load_config(sub.get_one::<String>("config"));

    let result = match name {
        "markup" => handle_markup_command(&config, sub),
        "template" => handle_template_command(&config, sub),
        "split" => handle_split_command(&config, sub),
        _ => unreachable!(),
    };

    match result {
        Ok(output) => println!("{}", output.trim_end()),
        Err(message) => {
            eprintln!("Error: {}", message);
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn load_config(path: Option<&String>) -> BarConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        process::exit(1);
    })
}

fn output_format(matches: &ArgMatches) -> Result<OutputFormat, String> {
    matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("json")
        .parse()
        .map_err(|e| format!("{}", e))
}

/// Handle the markup command
fn handle_markup_command(config: &BarConfig, matches: &ArgMatches) -> Result<String, String> {
    let text = matches
        .get_one::<String>("text")
        .ok_or("missing markup text")?;
    let color = matches
        .get_one::<String>("color")
        .unwrap_or(&config.default_color);

    let segments = parse_markup(color, text);
    render_segments(&segments, output_format(matches)?).map_err(|e| e.to_string())
}

/// Handle the template command
fn handle_template_command(config: &BarConfig, matches: &ArgMatches) -> Result<String, String> {
    let text = matches
        .get_one::<String>("text")
        .unwrap_or(&config.template);
    let sep = match matches.get_one::<String>("sep") {
        Some(sep) => single_char(sep)?,
        None => config.separator(),
    };

    let resolved = parse_template(sep, &config.registry(), text);
    serialize(&resolved, output_format(matches)?).map_err(|e| e.to_string())
}

/// Handle the split command
fn handle_split_command(config: &BarConfig, matches: &ArgMatches) -> Result<String, String> {
    let text = matches
        .get_one::<String>("text")
        .unwrap_or(&config.template);
    let align_sep = matches
        .get_one::<String>("align-sep")
        .unwrap_or(&config.align_sep);

    let alignment = split_alignment(align_sep, text);
    serialize(&alignment, output_format(matches)?).map_err(|e| e.to_string())
}

fn single_char(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("--sep must be a single character, got {:?}", value)),
    }
}
