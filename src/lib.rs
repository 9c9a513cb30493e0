/*
    Decides membership of words in a context-free grammar by simulating
    a nondeterministic pushdown automaton with backtracking
*/

pub mod acceptor;
pub mod error_handling;
pub mod grammar;
