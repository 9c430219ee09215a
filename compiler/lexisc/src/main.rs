//! lexis CLI
//!
//! Dumps the token stream of a source file.

use lexisc::commands::{lex_file, LexOptions};
use lexisc::tracing_setup::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: lexis lex <file> [options]");
                eprintln!();
                print_lex_options();
                std::process::exit(1);
            }

            let options = match LexOptions::parse(&args[3..]) {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!();
                    print_lex_options();
                    std::process::exit(1);
                }
            };

            if !lex_file(&args[2], &options) {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("lexis - token stream inspector");
    println!();
    println!("Usage: lexis <command> [arguments]");
    println!();
    println!("Commands:");
    println!("  lex <file> [options]   Print every token in <file>");
    println!("  help                   Show this message");
    println!();
    println!("Set RUST_LOG=lexis_core=trace to log each token as it is scanned.");
}

fn print_lex_options() {
    eprintln!("Options:");
    eprintln!("  --ignore-line-breaks          Omit LineBreak tokens");
    eprintln!("  --line-tracking=<mode>        whitespace (default) or line-break");
    eprintln!("  --buffer-capacity=<n>         Initial token buffer size in characters");
    eprintln!("  --no-buffer-growth            Fail on tokens longer than the buffer");
    eprintln!("  --json                        Print tokens as a JSON array");
}
