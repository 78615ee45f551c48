mod grammar;
mod scanner;
mod token;

use anyhow::Context;
use anyhow::Result;
use clap::ArgMatches;
use clap::Args;
use clap::Command;
use std::io::Read;
use tracing::Level;

use crate::grammar::evaluate;
use crate::grammar::grammar;
use crate::grammar::CalcGrammar;

/// A calculator for integer arithmetic.
#[derive(Args, Debug)]
#[command(version, about)]
struct CalcArgs {
    /// The expression to evaluate (the arguments are joined by spaces)
    #[arg(allow_negative_numbers = true)]
    expression: Vec<String>,
    /// The input file with one expression per line (- is interpreted as stdin)
    #[arg(long, default_value = "-")]
    input: String,
    /// Print debug logs
    #[arg(long)]
    debug: bool,
}

fn cli() -> Command {
    let cli = Command::new("calc");
    let cli = CalcArgs::augment_args(cli);
    cli
}

fn expression_from_args(matches: &ArgMatches) -> Option<String> {
    let parts = matches.get_many::<String>("expression")?;
    let expression = parts.map(|s| s.as_str()).collect::<Vec<&str>>().join(" ");
    Some(expression)
}

fn read_input(input: &str) -> Result<String> {
    let input_text = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(input).context(format!("Failed to read {input}"))?
    };
    Ok(input_text)
}

/// Evaluate the expression like `> 1 + 1` followed by the result.
fn evaluate_expression(grammar: &CalcGrammar, expression: &str) -> Result<String> {
    let value = evaluate(grammar, expression)?;
    Ok(format!("> {expression}\n{value}"))
}

/// Evaluate every non-empty line and return the results, one per line.
fn evaluate_lines(grammar: &CalcGrammar, text: &str) -> Result<String> {
    let mut results = vec![];
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let value = evaluate(grammar, line).context(format!("Failed at line {}", i + 1))?;
        results.push(value.to_string());
    }
    Ok(results.join("\n"))
}

fn run(matches: &ArgMatches) -> Result<String> {
    let grammar = grammar()?;
    match expression_from_args(matches) {
        Some(expression) => evaluate_expression(&grammar, &expression),
        None => {
            let input = matches
                .get_one::<String>("input")
                .context("Missing input")?;
            let input_text = read_input(input)?;
            evaluate_lines(&grammar, &input_text)
        }
    }
}

fn main() -> Result<()> {
    let cli = cli();
    let matches = cli.get_matches();
    if matches.get_flag("debug") {
        pratt::init_subscriber(Level::DEBUG)?;
    }
    let result = run(&matches)?;
    println!("{result}");
    Ok(())
}
