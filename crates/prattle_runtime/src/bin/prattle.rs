//! Prattle CLI entry point.

use prattle_runtime::Console;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        print_help();
        return ExitCode::SUCCESS;
    }
    if args.iter().skip(1).any(|a| a == "-V" || a == "--version") {
        println!("prattle {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> prattle_foundation::Result<()> {
    let mut console = Console::new()?;
    console.run()
}

fn print_help() {
    println!(
        "prattle - grammatical passphrase generator

USAGE:
    prattle [OPTIONS]

OPTIONS:
    -h, --help       Print help information
    -V, --version    Print version information

CONSOLE COMMANDS:
    help                 show command help
    presets              list preset names
    preset <name>        select a preset description
    generate [n]         generate n phrases (default 1)
    combinations         count the current description
    describe             print the current description
    description <text>   parse an inline description
    delimiter <s>        set the word delimiter
    seed <u64>           reseed the random source
    quit                 exit
    Ctrl+D               exit"
    );
}
