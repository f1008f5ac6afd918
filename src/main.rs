// monkey-syntax: tokenize or parse a Monkey source file

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser as _;
use tracing::info;
use tracing_subscriber::EnvFilter;

use monkey_syntax::parser::lexer::{Lexer, Recovery};
use monkey_syntax::parser::parse::Parser;

/// Tokenize and parse Monkey source, printing the canonical rendering.
#[derive(clap::Parser, Debug)]
#[command(name = "monkey-syntax", version)]
struct Args {
    /// Source file to read; stdin when omitted.
    file: Option<PathBuf>,

    /// Print the token stream instead of parsing.
    #[arg(long)]
    tokens: bool,

    /// Keep scanning after an illegal character instead of stopping.
    #[arg(long)]
    resume: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("monkey_syntax={default_level}"))),
        )
        .with_writer(io::stderr)
        .init();

    let source = match &args.file {
        Some(path) => {
            info!(path = %path.display(), "reading source");
            match fs::read_to_string(path) {
                Ok(source) => source,
                Err(e) => {
                    eprintln!("Error: cannot read '{}': {}", path.display(), e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let recovery = if args.resume {
        Recovery::Resume
    } else {
        Recovery::Halt
    };
    let mut lexer = Lexer::with_recovery(&source, recovery);

    if args.tokens {
        for token in lexer.tokenize() {
            println!("{}", token);
        }
        return Ok(());
    }

    let mut parser = Parser::from_lexer(lexer);
    let program = parser.parse_program();
    info!(statements = program.statements.len(), "parsed");

    println!("{}", program);

    if !parser.errors().is_empty() {
        for message in parser.error_messages() {
            eprintln!("parser error: {}", message);
        }
        std::process::exit(1);
    }

    Ok(())
}
