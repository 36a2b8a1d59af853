//! siftc: SQL lexical classifier CLI.

use siftc::commands::{run_check, run_symbols, run_tokens, CONFIG_ERROR_EXIT};
use siftc::config::ScanConfig;

fn main() {
    siftc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let code = match command.as_str() {
        "tokens" | "symbols" | "check" => {
            let config = match ScanConfig::from_args(&args[2..]) {
                Ok(config) => config.with_env(|name| std::env::var(name).ok()),
                Err(e) => {
                    eprintln!("error: {e}");
                    eprintln!();
                    print_command_usage(command);
                    std::process::exit(CONFIG_ERROR_EXIT);
                }
            };
            match command.as_str() {
                "tokens" => run_tokens(&config),
                "symbols" => run_symbols(&config),
                _ => run_check(&config),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("siftc {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            1
        }
    };

    std::process::exit(code);
}

fn print_command_usage(command: &str) {
    match command {
        "tokens" => eprintln!("Usage: siftc tokens <file|dir>... [--keywords=<path>]"),
        "symbols" => eprintln!(
            "Usage: siftc symbols <file|dir>... [--keywords=<path>] [--no-parallel] [-v]"
        ),
        _ => eprintln!("Usage: siftc check <file|dir>... [--keywords=<path>] [--no-parallel] [-v]"),
    }
}

fn print_usage() {
    println!("siftc: lexical classifier for SQL sources");
    println!();
    println!("Usage: siftc <command> [options] <file|dir>...");
    println!();
    println!("Commands:");
    println!("  tokens     Print the classification events of each file");
    println!("  symbols    List indexable identifiers as path:line: name");
    println!("  check      Report unterminated strings and comments (exit 1 if any)");
    println!("  help       Show this help message");
    println!("  version    Show version information");
    println!();
    println!("Options:");
    println!("  --keywords=<path>   Keyword list file (default: built-in SQL list)");
    println!("  --no-parallel       Scan files sequentially");
    println!("  --verbose, -v       Print per-file statistics");
    println!();
    println!("Directories are searched for *.sql, *.pls, *.pks and *.pkb files.");
    println!();
    println!("Environment:");
    println!("  SIFT_KEYWORDS       Keyword list file when --keywords is not given");
    println!("  SIFT_LOG            Log filter, e.g. sift_lexer=trace (falls back to RUST_LOG)");
    println!("  SIFT_LOG_TREE=1     Indented span output");
    println!();
    println!("Examples:");
    println!("  siftc tokens schema.sql");
    println!("  siftc symbols src/db --keywords=oracle.txt");
    println!("  siftc check migrations/ --no-parallel");
}
