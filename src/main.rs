mod cli;

use std::io;
use std::process::ExitCode;

use clap::Parser;

use pushdown::acceptor;
use pushdown::grammar::{Grammar, GrammarError};

// The built-in grammar, deriving a^n b^m c^m for n, m >= 1
fn built_in_grammar() -> Result<Grammar, GrammarError> {
    let mut grammar = Grammar::new('S')?;
    grammar.rule('S', &["AB"])?;
    grammar.rule('A', &["aA", "a"])?;
    grammar.rule('B', &["bBc", "bc"])?;
    return Ok(grammar);
}

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    let grammar = match built_in_grammar() {
        Ok(grammar) => grammar,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout();
    if let Err(error) = grammar.dump(&mut stdout) {
        eprintln!("{}", error);
        return ExitCode::FAILURE;
    }

    let start = args.start.unwrap_or(grammar.start_symbol());
    match acceptor::accepts_with(&grammar, start, args.limit, &args.word, &mut stdout) {
        Ok(true) => {
            println!("Yep");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("Nay");
            ExitCode::FAILURE
        }
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}
