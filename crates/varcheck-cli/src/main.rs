use clap::{Parser, Subcommand};
use std::path::Path;
use varcheck_lexer::{LexError, Lexer, Token};

#[derive(Parser)]
#[command(name = "varcheck")]
#[command(about = "varcheck — uninitialized-variable checker for LLVM-style IR")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token stream of an .ll file, one token per line
    Tokens {
        /// Input .ll file
        path: String,
    },

    /// Check that an .ll file scans cleanly without printing tokens
    Check {
        /// Input .ll file
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Tokens { path } => cmd_tokens(&path),
        Command::Check { path } => cmd_check(&path),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn report(path: &str, e: &LexError) -> ! {
    eprintln!("{path}:{}: {e}", e.location);
    std::process::exit(1);
}

/// Pull tokens until the sentinel, handing each one to `visit`.
fn scan(source: &str, mut visit: impl FnMut(&Token)) -> Result<usize, LexError> {
    let mut lexer = Lexer::new(source);
    let mut count = 0;
    loop {
        let token = lexer.next_token()?;
        visit(&token);
        count += 1;
        if token.is_end() {
            return Ok(count);
        }
    }
}

fn cmd_tokens(path: &str) {
    let source = read_source(path);

    if let Err(e) = scan(&source, |token| println!("{token}")) {
        report(path, &e);
    }
}

fn cmd_check(path: &str) {
    let source = read_source(path);

    match scan(&source, |_| {}) {
        Ok(count) => eprintln!("OK: {path} ({count} tokens)"),
        Err(e) => report(path, &e),
    }
}
