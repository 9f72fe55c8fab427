//! 文本解析命令行工具
//!
//! Tokenizes a text (inline or from a file) and prints the reassembled
//! result, optionally preceded by the token list.

use clap::Parser as ClapParser;
use lexer_framework::{Error, Source};
use parser_framework::Parser;
use std::path::PathBuf;
use std::process;
use text_example::TextReducer;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser, Debug)]
#[command(
    name = "text-parser",
    about = "Tokenize plain text and reassemble it",
    version
)]
struct Cli {
    /// Text to parse
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// File to parse
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Print every token before the result
    #[arg(long)]
    tokens: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Error> {
    let source = Source::from_parts(cli.text, cli.file)?;
    debug!(target: "text_parser", ?source, "Opening source");

    let mut parser = Parser::open(TextReducer, source)?;
    let text = parser.parse()?;

    if cli.tokens {
        for token in parser.tokenizer().tokens() {
            println!(
                "{:<16} {:<12} {:?}",
                token.kind().to_string(),
                token.position().to_string(),
                token.text()
            );
        }
    }
    println!("{text}");
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
