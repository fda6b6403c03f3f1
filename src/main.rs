use std::io::{self, BufWriter, Write};

use anyhow::Result;
use charlex::{
    driver,
    lexer::tokens::{Token, TokenKind},
};
use clap::Parser;
use commandline::Options;
use log::info;

mod commandline;

fn main() -> Result<()> {
    let options = Options::parse();

    stderrlog::new()
        .module(module_path!())
        .quiet(options.quiet)
        .verbosity(usize::from(options.verbose) + 1)
        .init()?;

    let lines = match options.input_file() {
        Some(path) => driver::tokenize_file(path)?,
        None => {
            info!("Reading from standard input");
            driver::tokenize_lines(io::stdin().lock())?
        }
    };
    info!("Tokenized {} lines", lines.len());

    let mut out = BufWriter::new(io::stdout().lock());
    for (idx, tokens) in lines.iter().enumerate() {
        if options.summary {
            writeln!(out, "Line {}: {}", idx + 1, describe_counts(tokens))?;
        } else {
            writeln!(out, "Line {}:", idx + 1)?;
            for token in tokens {
                writeln!(out, "  {}", token)?;
            }
        }
    }
    out.flush()?;

    Ok(())
}

/// Describes how many tokens of each kind a line holds, in declaration order.
fn describe_counts(tokens: &[Token]) -> String {
    let counts: Vec<String> = TokenKind::ALL
        .iter()
        .filter_map(|&kind| {
            let count = tokens.iter().filter(|t| t.kind() == kind).count();
            (count > 0).then(|| format!("{} {}", count, kind))
        })
        .collect();

    if counts.is_empty() {
        "0 tokens".to_string()
    } else {
        format!("{} tokens ({})", tokens.len(), counts.join(", "))
    }
}
