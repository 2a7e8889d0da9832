//! Relation trees: folding a flat run of values into nested pairs.
//!
//! The only combinator is the pair `(a . b)`. A fold halves the sequence
//! level by level: consecutive non-overlapping pairs are combined left to
//! right, and on odd-length levels the last element is carried unchanged
//! to the end of the next level.
//!
//! ```text
//! [a b c d e]  →  [(a . b) (c . d) e]  →  [((a . b) . (c . d)) e]
//!              →  (((a . b) . (c . d)) . e)
//! ```

use std::fmt;

use crate::value::{Value, EMPTY};

/// A binary tree of values: either an atom or a pair `(head . tail)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Noun {
    Atom(Value),
    Cell(Box<Noun>, Box<Noun>),
}

impl Noun {
    pub fn atom(value: Value) -> Self {
        Noun::Atom(value)
    }

    pub fn cell(head: Noun, tail: Noun) -> Self {
        Noun::Cell(Box::new(head), Box::new(tail))
    }

    /// Levels of pairing above the deepest atom (0 for an atom).
    pub fn height(&self) -> usize {
        match self {
            Noun::Atom(_) => 0,
            Noun::Cell(h, t) => 1 + h.height().max(t.height()),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Noun::Atom(_) => 1,
            Noun::Cell(h, t) => h.leaf_count() + t.leaf_count(),
        }
    }
}

impl fmt::Display for Noun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Noun::Atom(v) => write!(f, "{}", v),
            Noun::Cell(h, t) => write!(f, "({} . {})", h, t),
        }
    }
}

/// Combine two values into `(a . b)`.
pub fn pair(a: &Value, b: &Value) -> String {
    format!("({} . {})", a, b)
}

/// Build the pairwise reduction tree; `None` for an empty sequence.
pub fn build(values: Vec<Value>) -> Option<Noun> {
    let mut current: Vec<Noun> = values.into_iter().map(Noun::atom).collect();
    let mut rounds = 0usize;
    while current.len() > 1 {
        let mut next = Vec::with_capacity(current.len().div_ceil(2));
        let mut iter = current.into_iter();
        while let Some(head) = iter.next() {
            match iter.next() {
                Some(tail) => next.push(Noun::cell(head, tail)),
                None => next.push(head),
            }
        }
        current = next;
        rounds += 1;
    }
    tracing::trace!(rounds, "fold complete");
    current.pop()
}

/// Fold `values` into one nested-pair expression; `Ø` when empty.
pub fn fold(values: &[Value]) -> String {
    match build(values.to_vec()) {
        Some(noun) => noun.to_string(),
        None => EMPTY.to_string(),
    }
}
