/*
    This module is for storing and declaring grammars
*/

use std::collections::HashMap;
use std::fmt::Display;
use std::io::{self, Write};

use itertools::Itertools;

// The base unit in a grammar rule. Uppercase ASCII letters name
// nonterminals, every other character is a terminal.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Symbol {
    Terminal(char),
    Nonterminal(char),
}

impl Symbol {
    pub fn from_char(c: char) -> Self {
        if c.is_ascii_uppercase() {
            Symbol::Nonterminal(c)
        } else {
            Symbol::Terminal(c)
        }
    }

    pub fn is_nonterminal(&self) -> bool {
        matches!(self, Symbol::Nonterminal(_))
    }

    pub fn as_char(&self) -> char {
        match self {
            Symbol::Terminal(c) | Symbol::Nonterminal(c) => *c
        }
    }
}

// One right-hand side; empty means epsilon
pub type Production = Vec<Symbol>;

// The alternatives of a rewrite rule, tried in declaration order
pub type Rewrite = Vec<Production>;

#[derive(Debug, PartialEq)]
pub enum GrammarError {
    // A rule was declared under a symbol outside the nonterminal alphabet
    NotANonterminal(char),
}

impl Display for GrammarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrammarError::NotANonterminal(c) => write!(f, "`{}` is not a nonterminal", c)
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Grammar {
    start_symbol: char,
    rules: HashMap<char, Rewrite>,
    // Nonterminals in the order their rules were declared
    declared: Vec<char>,
}

impl Grammar {
    pub fn new(start_symbol: char) -> Result<Self, GrammarError> {
        if !Symbol::from_char(start_symbol).is_nonterminal() {
            return Err(GrammarError::NotANonterminal(start_symbol));
        }

        Ok(Grammar {
            start_symbol,
            rules: HashMap::new(),
            declared: Vec::new()
        })
    }

    // Declares the alternatives of one nonterminal, each right-hand side
    // given as a string of symbol characters. Declaring the same
    // nonterminal again appends to its alternatives.
    pub fn rule(&mut self, nonterminal: char, alternatives: &[&str]) -> Result<(), GrammarError> {
        if !Symbol::from_char(nonterminal).is_nonterminal() {
            return Err(GrammarError::NotANonterminal(nonterminal));
        }

        if !self.rules.contains_key(&nonterminal) {
            self.declared.push(nonterminal);
        }

        let rewrite = self.rules.entry(nonterminal).or_default();
        rewrite.extend(alternatives.iter().map(|rhs| rhs.chars().map(Symbol::from_char).collect::<Production>()));

        return Ok(());
    }

    pub fn start_symbol(&self) -> char {
        self.start_symbol
    }

    // Every symbol has a production list; symbols without declared rules
    // have an empty one.
    pub fn productions_for(&self, symbol: Symbol) -> &[Production] {
        match symbol {
            Symbol::Nonterminal(c) => self.rules.get(&c).map_or(&[], |rewrite| rewrite.as_slice()),
            Symbol::Terminal(_) => &[]
        }
    }

    // Writes one line per production, `A -> aA`, in declaration order.
    // An epsilon right-hand side prints as nothing after the arrow.
    pub fn dump(&self, out: &mut impl Write) -> io::Result<()> {
        for nonterminal in &self.declared {
            for production in &self.rules[nonterminal] {
                writeln!(out, "{} -> {}", nonterminal, production.iter().map(Symbol::as_char).join(""))?;
            }
        }

        return Ok(());
    }
}
