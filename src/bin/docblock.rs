//! Command-line interface for docblock
//! This binary reformats block documentation comments and can dump the
//! normalized token sequence for inspection.
//!
//! Usage:
//!   docblock format `<path>` [--indent `<n>`] [--width `<n>`]  - Reformat the comment in a file ('-' for stdin)
//!   docblock tokens `<path>`                                 - Print the normalized token sequence as JSON

use clap::{Arg, Command};
use std::io::Read;

fn main() {
    let matches = Command::new("docblock")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A width-aware reformatter for block documentation comments")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("format")
                .about("Reformat the comment in a file ('-' for stdin)")
                .arg(
                    Arg::new("path")
                        .help("Path to the file holding the comment, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("indent")
                        .long("indent")
                        .short('i')
                        .help("Columns of code indentation the comment sits after")
                        .default_value("0"),
                )
                .arg(
                    Arg::new("width")
                        .long("width")
                        .short('w')
                        .help("Maximum output line width")
                        .default_value("100"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the normalized token sequence as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the file holding the comment, or '-' for stdin")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("format", format_matches)) => {
            let path = format_matches.get_one::<String>("path").unwrap();
            let indent = parse_number(format_matches.get_one::<String>("indent").unwrap());
            let width = parse_number(format_matches.get_one::<String>("width").unwrap());
            handle_format_command(path, indent, width);
        }
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            handle_tokens_command(path);
        }
        _ => unreachable!(),
    }
}

/// Handle the format command
fn handle_format_command(path: &str, indent: usize, width: usize) {
    let source = read_source(path);
    match docblock::format_comment_with_width(source.trim_end(), indent, width) {
        Ok(formatted) => println!("{}", formatted),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str) {
    let source = read_source(path);
    let raw = docblock::scanner::scan(source.trim_end());
    match docblock::normalize::normalize(&raw) {
        Ok(tokens) => {
            let json = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
                eprintln!("Error serializing tokens: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn read_source(path: &str) -> String {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source).unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        });
        source
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        })
    }
}

fn parse_number(value: &str) -> usize {
    value.parse().unwrap_or_else(|_| {
        eprintln!("Error: '{}' is not a number", value);
        std::process::exit(1);
    })
}
