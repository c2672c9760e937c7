//! Entry point for `ic`: evaluate a single expression, or start a REPL.

mod repl;

use clap::Parser;
use ic_kernel::DEFAULT_MAX_STEPS;

/// An interaction-calculus evaluator.
#[derive(Parser)]
#[command(name = "ic")]
#[command(about = "Evaluate interaction-calculus terms", long_about = None)]
#[command(version)]
struct Cli {
    /// Expression to evaluate. With no argument, starts an interactive REPL.
    expression: Option<String>,

    /// Override the reduction step safety bound.
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    steps: u32,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.expression {
        Some(expression) => run_single_shot(&expression, cli.steps),
        None => repl::run(cli.steps),
    }
}

fn run_single_shot(expression: &str, max_steps: u32) {
    let mut budget = ic_kernel::Budget::new(max_steps);
    match ic_syntax::parse(expression) {
        Ok(term) => {
            let result = ic_kernel::normalize(&term, &mut budget);
            println!("{}", ic_syntax::pretty_print(&result));
        }
        Err(err) => {
            eprintln!("{}", ic_syntax::render(&err, expression));
            std::process::exit(1);
        }
    }
}
