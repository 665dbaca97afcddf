//! Mochi SGR Resolver
//!
//! Resolves a previous and a current SGR attribute list into the effective
//! foreground/background pair and prints the sequence that selects it.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use mochi_ansi::app::Config;
use mochi_ansi::core::{AttributeList, ResolvedStyle};
use mochi_ansi::sequence::{self, RESET};
use serde::Serialize;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Parse command line arguments
    let mut previous_arg = String::new();
    let mut current_arg = String::new();
    let mut config_path: Option<PathBuf> = None;
    let mut output_format = OutputFormat::Text;
    let mut strict = false;
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-p" | "--previous" => {
                i += 1;
                if i < args.len() {
                    previous_arg = args[i].clone();
                }
            },
            "-c" | "--current" => {
                i += 1;
                if i < args.len() {
                    current_arg = args[i].clone();
                }
            },
            "--config" => {
                i += 1;
                if i < args.len() {
                    config_path = Some(PathBuf::from(&args[i]));
                }
            },
            "-j" | "--json" => {
                output_format = OutputFormat::Json;
            },
            "-t" | "--text" => {
                output_format = OutputFormat::Text;
            },
            "-s" | "--strict" => {
                strict = true;
            },
            "-h" | "--help" => {
                show_help = true;
            },
            other => {
                // A bare argument is the current list
                if current_arg.is_empty() && !other.starts_with('-') {
                    current_arg = other.to_string();
                } else {
                    tracing::warn!("Ignoring unexpected argument: {}", other);
                }
            },
        }
        i += 1;
    }

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let config = match &config_path {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            },
        },
        None => Config::load_or_default(),
    };

    let previous: AttributeList = match previous_arg.parse() {
        Ok(list) => list,
        Err(e) => {
            eprintln!("Error in --previous: {}", e);
            return ExitCode::FAILURE;
        },
    };
    let mut current: AttributeList = match current_arg.parse() {
        Ok(list) => list,
        Err(e) => {
            eprintln!("Error in --current: {}", e);
            return ExitCode::FAILURE;
        },
    };

    if strict || config.is_strict() {
        for (name, list) in [("previous", &previous), ("current", &current)] {
            if let Err(e) = list.validate() {
                eprintln!("Error in --{}: {}", name, e);
                return ExitCode::FAILURE;
            }
        }
    }

    let resolver = config.resolver();
    let style = if config.sort_in_place {
        resolver.resolve_in_place(&previous, &mut current)
    } else {
        resolver.resolve(&previous, &current)
    };
    tracing::debug!(fg = style.fg.0, bg = style.bg.0, "resolved colors");

    let report = Report::new(&previous, &current, style);

    match output_format {
        OutputFormat::Text => {
            println!("Previous:   {}", report.previous_codes());
            println!("Current:    {}", report.current_codes());
            println!("Foreground: {}", style.fg);
            println!("Background: {}", style.bg);
            println!("Sequence:   {}", report.sequence.replace('\x1b', "\\x1b"));
            println!("Sample:     {}mochi{}", report.sequence, RESET);
        },
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing result: {}", e);
                return ExitCode::FAILURE;
            },
        },
    }

    ExitCode::SUCCESS
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    previous: &'a AttributeList,
    current: &'a AttributeList,
    #[serde(flatten)]
    style: ResolvedStyle,
    sequence: String,
}

impl<'a> Report<'a> {
    fn new(previous: &'a AttributeList, current: &'a AttributeList, style: ResolvedStyle) -> Self {
        Self {
            previous,
            current,
            style,
            sequence: sequence::set(&[style.fg, style.bg]),
        }
    }

    fn previous_codes(&self) -> String {
        join_codes(self.previous)
    }

    fn current_codes(&self) -> String {
        join_codes(self.current)
    }
}

fn join_codes(list: &AttributeList) -> String {
    if list.is_empty() {
        return "(none)".to_string();
    }
    list.iter()
        .map(|attr| attr.to_string())
        .collect::<Vec<_>>()
        .join(";")
}

fn print_help() {
    println!("Mochi SGR Resolver");
    println!();
    println!("Usage: mochi-sgr [OPTIONS] [CURRENT]");
    println!();
    println!("Options:");
    println!("  -p, --previous <CODES>  Previously active attributes, e.g. \"1;34\"");
    println!("  -c, --current <CODES>   Newly applied attributes, e.g. \"31\"");
    println!("      --config <PATH>     Load config from PATH (default: ~/.config/mochi-ansi/config.json)");
    println!("  -s, --strict            Reject codes outside every SGR category");
    println!("  -j, --json              Output result as JSON");
    println!("  -t, --text              Output result as text (default)");
    println!("  -h, --help              Show this help message");
    println!();
    println!("CODES are decimal attribute codes separated by ';' or ','.");
    println!();
    println!("Examples:");
    println!("  mochi-sgr -c '1;31'");
    println!("  mochi-sgr -p 34 -c 1 --json");
    println!("  RUST_LOG=trace mochi-sgr -p '38;5' -c 44");
}
