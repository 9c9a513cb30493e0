/*
    This module decides whether a word is derivable in a grammar
*/

mod stack;

use std::fmt::Display;
use std::io::Write;

use crate::error_handling::*;
use crate::grammar::*;
use stack::Stack;

// Capacity of the derivation stack unless the caller overrides it
pub const STACK_LIMIT: usize = 1024;

#[derive(Debug)]
pub enum AcceptErrorType {
    // The derivation stack hit its capacity
    StackExhausted(usize),
    // The trace writer failed
    TraceError(std::io::Error),
}

impl ErrorType for AcceptErrorType {}

impl PartialEq for AcceptErrorType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AcceptErrorType::StackExhausted(a), AcceptErrorType::StackExhausted(b)) => a == b,
            (AcceptErrorType::TraceError(a), AcceptErrorType::TraceError(b)) => a.kind() == b.kind(),
            _ => false
        }
    }
}

impl Display for AcceptErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AcceptErrorType::StackExhausted(limit) => write!(f, "Derivation stack exceeded its capacity of {} symbols", limit),
            AcceptErrorType::TraceError(e) => write!(f, "Trace error: {}", e)
        }
    }
}

pub type AcceptError = Error<AcceptErrorType>;
pub type AcceptResult = Result<bool, AcceptError>;

fn locate(error: AcceptErrorType, word: &str, rest: &str) -> AcceptError {
    AcceptError {
        location: Location {
            word: word.to_string(),
            consumed: word.len() - rest.len()
        },
        error
    }
}

// Decides whether the word is derivable from the grammar's start symbol.
// Every step of the search writes a trace line to the given writer.
pub fn accepts(grammar: &Grammar, word: &str, trace: &mut impl Write) -> AcceptResult {
    accepts_with(grammar, grammar.start_symbol(), STACK_LIMIT, word, trace)
}

// Runs the automaton with a chosen initial stack symbol and stack capacity
pub fn accepts_with(grammar: &Grammar, start: char, limit: usize, word: &str, trace: &mut impl Write) -> AcceptResult {
    let mut stack = Stack::with_limit(limit);
    stack.push(Symbol::from_char(start)).map_err(|error| locate(error, word, word))?;

    return search(grammar, word, word, stack, trace);
}

// One branch of the backtracking search. The branch owns its stack;
// sibling branches get clones, so a failed expansion leaves no residue.
fn search(grammar: &Grammar, word: &str, rest: &str, mut stack: Stack, trace: &mut impl Write) -> AcceptResult {
    writeln!(trace, "Word: {}\t\t Stack: {}", rest, stack.contents())
        .map_err(|error| locate(AcceptErrorType::TraceError(error), word, rest))?;

    // An empty stack is a leaf: the branch accepts iff the whole word has
    // been consumed
    let top = match stack.pop() {
        Some(symbol) => symbol,
        None => return Ok(rest.is_empty())
    };

    if top.is_nonterminal() {
        for production in grammar.productions_for(top) {
            let mut expanded = stack.clone();

            // Push the right-hand side in reverse, leftmost symbol on top
            for symbol in production.iter().rev() {
                expanded.push(*symbol).map_err(|error| locate(error, word, rest))?;
            }

            if search(grammar, word, rest, expanded, trace)? {
                return Ok(true);
            }
        }

        return Ok(false);
    }

    let mut input = rest.chars();
    match input.next() {
        Some(c) if c == top.as_char() => search(grammar, word, input.as_str(), stack, trace),
        _ => Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use std::io::sink;
    use std::iter::zip;

    use super::*;

    fn canonical() -> Grammar {
        let mut grammar = Grammar::new('S').unwrap();
        grammar.rule('S', &["AB"]).unwrap();
        grammar.rule('A', &["aA", "a"]).unwrap();
        grammar.rule('B', &["bBc", "bc"]).unwrap();
        return grammar;
    }

    #[test]
    fn decide_canonical_words() {
        let words = vec!["abc", "aabbcc", "aabbbccc", "ab", "", "abcb", "abcc"];
        let answers = vec![true, true, true, false, false, false, false];

        let grammar = canonical();
        for (word, answer) in zip(words, answers) {
            assert_eq!(accepts(&grammar, word, &mut sink()).unwrap(), answer);
        }
    }

    #[test]
    fn repeated_runs_trace_identically() {
        let grammar = canonical();

        let mut first = Vec::new();
        let mut second = Vec::new();
        let first_result = accepts(&grammar, "aabbcc", &mut first).unwrap();
        let second_result = accepts(&grammar, "aabbcc", &mut second).unwrap();

        assert_eq!(first_result, second_result);
        assert_eq!(first, second);
    }

    #[test]
    fn trace_single_expansion() {
        let mut grammar = Grammar::new('S').unwrap();
        grammar.rule('S', &["a"]).unwrap();

        let mut trace = Vec::new();
        assert!(accepts(&grammar, "a", &mut trace).unwrap());

        assert_eq!(String::from_utf8(trace).unwrap(), "Word: a\t\t Stack: S\nWord: a\t\t Stack: a\nWord: \t\t Stack: \n");
    }

    // The first accepting alternative in declaration order wins; the
    // second one is never tried
    #[test]
    fn first_accepting_alternative_short_circuits() {
        let mut grammar = Grammar::new('S').unwrap();
        grammar.rule('S', &["a", "a"]).unwrap();

        let mut trace = Vec::new();
        assert!(accepts(&grammar, "a", &mut trace).unwrap());

        assert_eq!(String::from_utf8(trace).unwrap().lines().count(), 3);
    }

    #[test]
    fn failed_alternative_leaves_no_residue() {
        let mut grammar = Grammar::new('S').unwrap();
        grammar.rule('S', &["aS", "b"]).unwrap();

        assert!(accepts(&grammar, "aab", &mut sink()).unwrap());
        assert!(!accepts(&grammar, "aba", &mut sink()).unwrap());
    }

    #[test]
    fn terminal_mismatch_fails_without_consuming() {
        let mut grammar = Grammar::new('S').unwrap();
        grammar.rule('S', &["b"]).unwrap();

        let mut trace = Vec::new();
        assert!(!accepts(&grammar, "a", &mut trace).unwrap());

        // The initial step plus the expansion to `b`; the mismatch
        // recurses no further
        assert_eq!(String::from_utf8(trace).unwrap(), "Word: a\t\t Stack: S\nWord: a\t\t Stack: b\n");
    }

    #[test]
    fn epsilon_derives_the_empty_word() {
        let mut grammar = Grammar::new('S').unwrap();
        grammar.rule('S', &["aSb", ""]).unwrap();

        let words = vec!["", "ab", "aabb", "aab"];
        let answers = vec![true, true, true, false];

        for (word, answer) in zip(words, answers) {
            assert_eq!(accepts(&grammar, word, &mut sink()).unwrap(), answer);
        }
    }

    #[test]
    fn undeclared_nonterminal_rejects() {
        let mut grammar = Grammar::new('S').unwrap();
        grammar.rule('S', &["aX"]).unwrap();

        assert!(!accepts(&grammar, "a", &mut sink()).unwrap());
    }

    #[test]
    fn start_override_runs_from_another_nonterminal() {
        let grammar = canonical();

        assert!(accepts_with(&grammar, 'B', STACK_LIMIT, "bbcc", &mut sink()).unwrap());
        assert!(!accepts_with(&grammar, 'B', STACK_LIMIT, "abc", &mut sink()).unwrap());
    }

    #[test]
    fn growing_recursion_exhausts_the_stack() {
        let mut grammar = Grammar::new('S').unwrap();
        grammar.rule('S', &["Sa"]).unwrap();

        let result = accepts_with(&grammar, 'S', 8, "b", &mut sink());

        assert_eq!(result.unwrap_err(), AcceptError {
            location: Location {
                word: "b".to_string(),
                consumed: 0
            },
            error: AcceptErrorType::StackExhausted(8)
        });
    }

    #[test]
    fn default_limit_applies() {
        let mut grammar = Grammar::new('S').unwrap();
        grammar.rule('S', &["Sa"]).unwrap();

        let error = accepts(&grammar, "", &mut sink()).unwrap_err();

        assert_eq!(error.error, AcceptErrorType::StackExhausted(STACK_LIMIT));
    }
}
