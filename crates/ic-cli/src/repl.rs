//! The interactive REPL: a plain synchronous `stdin` line loop, mirroring
//! the teacher's non-wasm CLI path (no async runtime anywhere in this
//! binary).

use std::io::{self, BufRead, Write};

use ic_kernel::{Budget, NormalizeReport, Term};

pub fn run(max_steps: u32) {
    println!("Interaction calculus REPL. Type :help for commands.");

    let stdin = io::stdin();
    let mut debug = false;
    let mut last_report: Option<NormalizeReport> = None;

    let mut lines = stdin.lock().lines();
    loop {
        print!("ic> ");
        let _ = io::stdout().flush();

        let Some(line) = lines.next() else {
            break; // EOF
        };
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("input error: {err}");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            ":help" => print_help(),
            ":quit" | ":q" => break,
            ":debug" => {
                debug = !debug;
                println!("debug mode: {}", if debug { "on" } else { "off" });
            }
            ":steps" => match &last_report {
                Some(report) => println!(
                    "last evaluation: {} step(s), {}",
                    report.steps,
                    if report.exhausted {
                        "safety bound reached"
                    } else {
                        "reached normal form"
                    }
                ),
                None => println!("no evaluation yet"),
            },
            source => {
                last_report = evaluate_line(source, max_steps, debug);
            }
        }
    }
}

fn print_help() {
    println!(":help   show this message");
    println!(":debug  toggle step-by-step trace output");
    println!(":steps  show the step count of the last evaluation");
    println!(":quit, :q  exit the REPL");
}

fn evaluate_line(source: &str, max_steps: u32, debug: bool) -> Option<NormalizeReport> {
    let term = match ic_syntax::parse(source) {
        Ok(term) => term,
        Err(err) => {
            eprintln!("{}", ic_syntax::render(&err, source));
            return None;
        }
    };

    let mut budget = Budget::new(max_steps);
    let result = if debug {
        trace_to_normal_form(&term, &mut budget)
    } else {
        ic_kernel::normalize(&term, &mut budget)
    };

    println!("{}", ic_syntax::pretty_print(&result));
    Some(NormalizeReport {
        steps: budget.steps_taken(),
        exhausted: budget.exhausted(),
    })
}

/// Drives the single-step reducer directly instead of `normalize`,
/// printing every successor term as it's produced.
fn trace_to_normal_form(term: &Term, budget: &mut Budget) -> Term {
    let mut current = term.clone();
    loop {
        if !budget.tick() {
            return current;
        }
        let next = ic_kernel::step(&current, budget);
        if next == current {
            return current;
        }
        println!("  -> {next}");
        current = next;
    }
}
