use std::env;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::process;

use personal_name::PersonalName;

#[cfg_attr(rustfmt, rustfmt_skip)]
const USAGE: &str = "
Usage:
    personal_name parse <name> [<config>]
    personal_name parse -
    personal_name format <template> <name> [<config>]
    personal_name format <template> -

With the `parse` command, personal_name will print the parsed name as a JSON
object: the raw name, its canonical configuration string, the main name, the
configured elements, and any alternate names. If '-' is the argument, it will
expect records on stdin, one per line, as a name optionally followed by a tab
and a configuration string.

With the `format` command, it will render each name through the given
template, substituting {TAG} placeholders such as {N1} or {NS} with the
corresponding elements. Names are supplied as with `parse`.

Exits with status 1 if a name or configuration string cannot be parsed.
";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() >= 3 && args.len() <= 4 && args[1] == "parse" {
        parse_mode(&args);
    } else if args.len() >= 4 && args.len() <= 5 && args[1] == "format" {
        format_mode(&args);
    } else {
        writeln!(&mut io::stderr(), "{}", USAGE).ok();
        process::exit(64);
    }
}

fn build(name: &str, config: &str) -> PersonalName {
    match PersonalName::new(name, config) {
        Ok(parsed) => parsed,
        Err(err) => {
            writeln!(&mut io::stderr(), "{}: {}", name, err).ok();
            process::exit(1);
        }
    }
}

/// Splits a stdin record into its name and optional config string.
fn split_record(line: &str) -> (&str, &str) {
    match line.split_once('\t') {
        Some((name, config)) => (name, config),
        None => (line, ""),
    }
}

fn parse_mode(args: &[String]) {
    if args[2] == "-" {
        let reader = BufReader::new(io::stdin());
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            let (name, config) = split_record(&line);
            let parsed = build(name, config);
            let output = serde_json::to_string(&parsed).unwrap_or_default();
            if writeln!(&mut io::stdout(), "{}", output).is_err() {
                break;
            }
        }
    } else {
        let config = args.get(3).map(String::as_str).unwrap_or("");
        let parsed = build(&args[2], config);
        println!("{}", serde_json::to_string(&parsed).unwrap_or_default());
    }
}

fn format_mode(args: &[String]) {
    let template = &args[2];

    if args[3] == "-" {
        let reader = BufReader::new(io::stdin());
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            let (name, config) = split_record(&line);
            let parsed = build(name, config);
            if writeln!(&mut io::stdout(), "{}", parsed.formatted_name(template)).is_err() {
                break;
            }
        }
    } else {
        let config = args.get(4).map(String::as_str).unwrap_or("");
        let parsed = build(&args[3], config);
        println!("{}", parsed.formatted_name(template));
    }
}
