use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use lilx::{
    count_elements_by_name, print_tree,
    parser::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_TOKEN_LENGTH},
    Parser, ParserConfig, QuoteStyle,
};

#[derive(ClapParser)]
#[command(author, version, about = "Parse an XML snippet and print its element tree", long_about = None)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Attribute values are wrapped in single quotes
    #[arg(long)]
    single_quotes: bool,

    /// Longest allowed name, body or attribute value in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_TOKEN_LENGTH)]
    max_token_length: usize,

    /// Node stack capacity (bounds the nesting depth)
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print how many elements have this name instead of the tree
    #[arg(short, long, value_name = "NAME")]
    count: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let text = read_input(&args.input)?;

    let quote_style = if args.single_quotes {
        QuoteStyle::Single
    } else {
        QuoteStyle::Double
    };
    let config = ParserConfig::default()
        .with_max_token_length(args.max_token_length)
        .with_max_depth(args.max_depth)
        .with_quote_style(quote_style);
    info!("Parsing with {}", config);

    let root = Parser::new(config)
        .parse(&text)
        .context("failed to parse input")?;

    match args.count {
        Some(name) => println!("{}", count_elements_by_name(&root, &name)),
        None => print_tree(&root),
    }

    Ok(())
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}
