use std::fmt::Display;

pub trait ErrorType: Display + PartialEq {}

// How far into the input word the automaton had come when the error
// surfaced
#[derive(Debug, PartialEq, Clone)]
pub struct Location {
    pub word: String,
    pub consumed: usize
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.consumed == 0 {
            write!(f, "{}", self.word)
        } else {
            write!(f, "{}:{}", self.word, self.consumed)
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Error<T: ErrorType> {
    pub location: Location,
    pub error: T
}

impl<T: ErrorType> Display for Error<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b[31;49;1m[{}]\x1b[39;49;1m  {}\x1b[0m", self.location, self.error)
    }
}
