//! Command-line interface for pushlr-calc
//!
//! Evaluates calculator statements from a file or from the command line and
//! prints one result per statement. Syntax errors the parser recovers from
//! are printed to standard error.

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use pushlr_calc::{CalcParser, Evaluator};
use std::io::Read;

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file with calculator statements (`-` for standard input)
    #[arg(short, long, conflicts_with = "source")]
    input: Option<String>,

    /// Statements to evaluate, e.g. "1 + 2; max(3, 4);"
    source: Option<String>,

    /// Stop at the first syntax error instead of skipping to the next `;`
    #[arg(long)]
    no_recovery: bool,

    /// Maximum parser stack depth
    #[arg(long)]
    stack_capacity: Option<usize>,
}

fn read_source(args: &Args) -> Result<String> {
    match (&args.input, &args.source) {
        (_, Some(source)) => Ok(source.clone()),
        (Some(path), None) if path != "-" => {
            std::fs::read_to_string(path).with_context(|| format!("can't open {:?}", path))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("can't read standard input")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let source = read_source(&args)?;

    let mut config = CalcParser::<Evaluator>::default_config();
    if args.no_recovery {
        config = config.without_recovery();
    }
    if let Some(capacity) = args.stack_capacity {
        config = config.with_stack_capacity(capacity);
    }

    let mut parser = CalcParser::with_config(Evaluator, config);
    let outcome = match parser.parse(&source) {
        Ok(outcome) => outcome,
        Err(pushlr_calc::CalcError::Rejected { diagnostics }) => {
            for d in &diagnostics {
                eprintln!("error: {}", d);
            }
            anyhow::bail!("input rejected");
        }
        Err(err) => return Err(err.into()),
    };

    for d in &outcome.diagnostics {
        eprintln!("error: {}", d);
    }
    for result in &outcome.results {
        match result {
            Some(n) => println!("{}", n),
            None => println!("<error>"),
        }
    }
    log::info!("{:?}", parser.engine().stats());
    Ok(())
}
