//! Monkey interpreter CLI.

use std::io::Write;
use std::path::Path;

use monkey_eval::Interpreter;
use monkeyc::commands::{lex_file, parse_file, parse_run_args, run_file, run_repl};
use monkeyc::{init_tracing, CliError, Session};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map_or("repl", String::as_str);

    let result = match command {
        "repl" => repl(),
        "run" => run(&args[2..]),
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: monkey parse <file.mk>");
                std::process::exit(1);
            };
            parse_file(Path::new(path), &mut std::io::stdout().lock())
        }
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: monkey lex <file.mk>");
                std::process::exit(1);
            };
            lex_file(Path::new(path), &mut std::io::stdout().lock()).map(|()| true)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(true)
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn repl() -> Result<bool, CliError> {
    let user = std::env::var("USER").unwrap_or_else(|_| "there".to_string());
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Hello {user}! This is the Monkey programming language!")?;
    writeln!(stdout, "Feel free to type in commands")?;

    let mut session = Session::default();
    run_repl(std::io::stdin().lock(), &mut stdout, &mut session)?;
    Ok(true)
}

fn run(args: &[String]) -> Result<bool, CliError> {
    let run_args = match parse_run_args(args) {
        Ok(run_args) => run_args,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Usage: monkey run <file.mk> [--max-depth=<n|unlimited>] [--step-budget=<n>]");
            std::process::exit(1);
        }
    };
    let mut interpreter = Interpreter::builder().config(run_args.config).build();
    run_file(&run_args.path, &mut interpreter, &mut std::io::stdout().lock())
}

fn print_usage() {
    println!("Monkey interpreter");
    println!();
    println!("Usage: monkey <command> [options]");
    println!();
    println!("Commands:");
    println!("  repl               Start the interactive loop (default)");
    println!("  run <file>         Evaluate a file");
    println!("  parse <file>       Print the parsed program");
    println!("  lex <file>         Print the token stream");
    println!();
    println!("Run options:");
    println!("  --max-depth=<n>    Maximum call depth, or 'unlimited' (default: 10000)");
    println!("  --step-budget=<n>  Abort after evaluating <n> expressions");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=monkey_eval=debug) to trace evaluation.");
}
