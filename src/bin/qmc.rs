//! Quine-McCluskey logic minimizer - command line interface
//!
//! Parses a boolean expression (or a JSON document describing one),
//! optionally prints its truth table, and emits the minimized form.

use clap::Parser;
use quine_logic::{MinimizeConfig, Simplify, Tree};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "qmc")]
#[command(about = "Exact Quine-McCluskey logic minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// Expression to minimize, e.g. "a and b or not c"
    #[arg(
        value_name = "EXPRESSION",
        required_unless_present = "json_file",
        conflicts_with = "json_file"
    )]
    expression: Option<String>,

    /// Read the expression from a JSON document instead
    #[arg(short = 'j', long = "json-file", value_name = "FILE")]
    json_file: Option<PathBuf>,

    /// Print the truth table before minimizing
    #[arg(short = 't', long = "table")]
    table: bool,

    /// Emit product-of-sums instead of sum-of-products
    #[arg(short = 'p', long = "pos")]
    pos: bool,

    /// Upper bound on distinct variables
    #[arg(
        long = "max-variables",
        value_name = "N",
        default_value_t = MinimizeConfig::default().max_variables
    )]
    max_variables: usize,
}

fn main() {
    let args = Args::parse();

    if let Err(error) = run(&args) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

fn run(args: &Args) -> io::Result<()> {
    let tree = match (&args.expression, &args.json_file) {
        (Some(source), None) => Tree::parse(source)?,
        (None, Some(path)) => {
            let text = fs::read_to_string(path)?;
            Tree::from_json_str(&text)?
        }
        _ => unreachable!("clap enforces exactly one input source"),
    };

    if args.table {
        println!("{}", tree.truth_table());
        println!();
    }

    let config = MinimizeConfig {
        max_variables: args.max_variables,
    };
    let minimized = if args.pos {
        tree.simplify_pos_with_config(&config)?
    } else {
        tree.simplify_with_config(&config)?
    };

    println!("{}", minimized);
    Ok(())
}
