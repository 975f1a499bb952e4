use colored::*;
use std::{
    io::{self, Read},
    process,
};
use clap::Parser as ClapParser;
use thiserror::Error;

extern crate runtime;
extern crate tools;

use runtime::{run_with, values::Number, ArithError, Stage, ROOT_CONTEXT_NAME};
use tools::errors::ReportCodeErr;


// --------
//   CLI
// --------

#[derive(ClapParser)]
#[command(version)]
#[command(about="Evaluator for arithmetic expressions")]
struct CLI {
    /// Expression to evaluate. Read from stdin if missing
    expr: Option<String>,

    /// File name shown in error messages
    #[arg(short = 'n', long, default_value = "<stdin>")]
    file_name: String,

    /// Prints the tokens
    #[arg(short, long)]
    tokens: bool,

    /// Prints the AST tree
    #[arg(short, long)]
    ast_print: bool,

    /// Prints each step of the evaluation
    #[arg(short, long)]
    verbose: bool,

    /// Disables colors in the output
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{} reading expression from stdin: {0}", "Error".red().bold())]
    ReadInput(#[from] io::Error),

    #[error("{}\n{}", "Error".red().bold(), .0.to_glob_err())]
    Pipeline(#[from] ArithError),
}

fn read_stdin() -> Result<String, CliError> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    Ok(input.trim_end_matches(['\n', '\r']).to_string())
}

fn step(cli: &CLI, name: &str, details: &str) {
    if cli.verbose {
        eprintln!("{} {}", name.cyan().bold(), details);
    }
}

fn interpretation_sequence(code: &str, cli: &CLI) -> Result<Number, ArithError> {
    step(cli, "Scanning", &format!("{} characters", code.chars().count()));

    run_with(&cli.file_name, code, |stage| match stage {
        Stage::Scanned(tokens) => {
            if cli.tokens {
                let rendered: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
                println!("Tokens: [{}]", rendered.join(", "));
            }
            step(cli, "Parsing", &format!("{} tokens", tokens.len()));
        }
        Stage::Parsed(ast) => {
            if cli.ast_print {
                println!("AST: {}", ast);
            }
            step(cli, "Evaluating", &format!("in {}", ROOT_CONTEXT_NAME));
        }
    })
}

fn execute(cli: &CLI) -> Result<Number, CliError> {
    let code = match &cli.expr {
        Some(expr) => expr.clone(),
        None => read_stdin()?,
    };

    Ok(interpretation_sequence(&code, cli)?)
}

fn main() {
    // Manage command line args
    let cli = CLI::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match execute(&cli) {
        Ok(number) => println!("{}", number.to_string().green().bold()),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}
