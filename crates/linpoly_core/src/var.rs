//! Variable identifiers and their allocation.

use core::fmt;

/// Opaque handle naming an unknown of the constraint system.
///
/// Variables are ordered by index; that order determines how a
/// [`Polynomial`](crate::Polynomial) iterates, renders, encodes and compares
/// its terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(pub usize);

impl Var {
    /// Returns the underlying index.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for Var {
    fn from(index: usize) -> Self {
        Var(index)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// Source of fresh [`Var`]s.
///
/// Hands out consecutive identifiers, the same way a circuit elaborator
/// allocates wires. Two allocators started at the same offset produce the
/// same sequence.
#[derive(Clone, Debug, Default)]
pub struct VarAllocator {
    first: usize,
    next: usize,
}

impl VarAllocator {
    /// Creates an allocator whose first variable is `x0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocator whose first variable is `first`, leaving lower
    /// indices to whoever reserved them (e.g. public inputs).
    pub fn starting_at(first: Var) -> Self {
        VarAllocator {
            first: first.0,
            next: first.0,
        }
    }

    /// Allocates a variable that has not been handed out before.
    pub fn fresh(&mut self) -> Var {
        let var = Var(self.next);
        self.next += 1;
        var
    }

    /// The variable the next call to [`fresh`](Self::fresh) will return.
    pub fn next_var(&self) -> Var {
        Var(self.next)
    }

    /// Number of variables allocated so far.
    pub fn count(&self) -> usize {
        self.next - self.first
    }
}
