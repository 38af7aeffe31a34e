use nomen::{capitalize, NameRecord};
use std::env;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::process;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "
Usage:
    nomen parse <name>...
    nomen parse -
    nomen capitalize <fragment>...

With the `parse` command, nomen will break a name into title, first, middle,
nickname, last and suffix. If `-` is the argument, it will expect
newline-separated names to parse from stdin, and print one line of JSON for
each (an empty line for names it can't parse). Otherwise, it will parse the
arguments as one name and print it as JSON, exiting with status 1 if it can't
be parsed.

With the `capitalize` command, it will print the arguments, as one fragment,
with name capitalization applied.

Set NOMEN_LOG (e.g. NOMEN_LOG=trace) to see what the parser is doing.
";

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 && args[1] == "parse" {
        parse_mode(&args[2..]);
    } else if args.len() > 2 && args[1] == "capitalize" {
        println!("{}", capitalize(&args[2..].join(" ")));
    } else {
        eprintln!("{}", USAGE);
        process::exit(64);
    }
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var("NOMEN_LOG")
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_mode(args: &[String]) {
    if args[0] == "-" {
        let reader = BufReader::new(io::stdin());
        let mut stdout = io::stdout();
        for line in reader.lines() {
            let input = match line {
                Ok(input) => input,
                Err(_) => break,
            };

            let output = NameRecord::parse(&input)
                .map(|name| name.to_json().to_string())
                .unwrap_or_default();

            if writeln!(stdout, "{}", output).is_err() {
                break;
            }
        }
    } else {
        match NameRecord::parse(&args.join(" ")) {
            Some(name) => println!("{}", name.to_json()),
            None => process::exit(1),
        }
    }
}
