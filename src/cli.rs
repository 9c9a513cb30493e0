use clap::Parser;

use pushdown::acceptor::STACK_LIMIT;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Word to test for membership
    pub word: String,

    /// Initial stack symbol (default: the grammar's start symbol)
    #[arg(short, long, value_name = "SYMBOL")]
    pub start: Option<char>,

    /// Derivation stack capacity in symbols
    #[arg(short, long, value_name = "SYMBOLS", default_value_t = STACK_LIMIT)]
    pub limit: usize
}
