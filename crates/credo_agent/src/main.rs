use std::convert::TryFrom;
use std::env;
use std::fs;
use std::io::{self, BufRead};
use std::process;

use credo::{parse_prop_formula, BeliefBase, Entailment, ResolutionStep};

const DEFAULT_SEED_PATH: &str = "sampleBeliefs.txt";

enum Command {
    Print,
    Revise,
    Entails,
    Help,
    Quit,
}

impl<'a> TryFrom<&'a str> for Command {
    type Error = &'static str;

    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        match s {
            "print" => Ok(Command::Print),
            "revise" => Ok(Command::Revise),
            "entails" => Ok(Command::Entails),
            "help" => Ok(Command::Help),
            "quit" => Ok(Command::Quit),
            _ => Err("Unknown command"),
        }
    }
}

fn main() {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SEED_PATH.to_string());

    println!("=== Belief Base Revision Agent ===");
    print_commands();

    let base = load_seed(&path);
    log::info!("loaded {} clause(s) from {}", base.clauses().size(), path);

    if !base.is_consistent() {
        println!("Warning: the seed belief base is inconsistent");
    }

    run(base);
}

fn load_seed(path: &str) -> BeliefBase {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Cannot read seed file '{}': {}", path, e);
            process::exit(1);
        }
    };

    match BeliefBase::from_seed(&text) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Invalid seed belief: {}", e);
            process::exit(1);
        }
    }
}

fn run(mut base: BeliefBase) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("Select command:");
        let Some(line) = read_line(&mut lines) else {
            break;
        };

        match Command::try_from(line.trim()) {
            Ok(Command::Print) => print_base(&base),
            Ok(Command::Revise) => {
                println!("Enter new formula:");
                let Some(input) = read_line(&mut lines) else {
                    break;
                };
                base = revise(base, input.trim());
            }
            Ok(Command::Entails) => {
                println!("Enter formula to check:");
                let Some(input) = read_line(&mut lines) else {
                    break;
                };
                query(&base, input.trim());
            }
            Ok(Command::Help) => print_commands(),
            Ok(Command::Quit) => break,
            Err(_) => println!("Command not recognised"),
        }
    }

    println!("=== Closing agent ===");
}

fn revise(base: BeliefBase, input: &str) -> BeliefBase {
    let formula = match parse_prop_formula(input) {
        Ok(f) => f,
        Err(e) => {
            println!("Rejected: {}", e);
            return base;
        }
    };

    match base.revise(&formula) {
        Ok(revision) => {
            print_trace(&revision.trace);
            println!("{}", revision.outcome);
            revision.base
        }
        Err(e) => {
            println!("Rejected: {}", e);
            base
        }
    }
}

fn query(base: &BeliefBase, input: &str) {
    let formula = match parse_prop_formula(input) {
        Ok(f) => f,
        Err(e) => {
            println!("Rejected: {}", e);
            return;
        }
    };

    match base.entails(&formula) {
        Ok((entailment, trace)) => {
            print_trace(&trace);
            match entailment {
                Entailment::Entailed => println!("The belief base entails {}", formula),
                Entailment::NotEntailed => {
                    println!("The belief base does not entail {}", formula)
                }
                Entailment::Undetermined => {
                    println!("Could not determine whether {} is entailed", formula)
                }
            }
        }
        Err(e) => println!("Rejected: {}", e),
    }
}

fn print_base(base: &BeliefBase) {
    if base.is_empty() {
        println!("(the belief base is empty)");
    } else {
        println!("{}", base);
    }
}

fn print_trace(trace: &[ResolutionStep]) {
    for step in trace {
        println!("  {}", step);
    }
}

fn print_commands() {
    println!();
    println!("Available commands:");
    println!("  print    print the current belief base");
    println!("  revise   integrate a new formula into the belief base");
    println!("  entails  check whether a formula follows from the current beliefs");
    println!("  help     print this command list");
    println!("  quit     close the agent");
}

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    match lines.next() {
        Some(Ok(line)) => Some(line),
        Some(Err(e)) => {
            eprintln!("Failed to read input: {}", e);
            None
        }
        None => None,
    }
}
