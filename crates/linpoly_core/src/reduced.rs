use linpoly_arithmetic::Coefficient;

use core::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{Assignment, Polynomial, polynomial::Signed};

/// Outcome of an operation that may cancel every variable term.
///
/// Construction, merging, deletion, scaling and substitution can all drop a
/// polynomial to degree zero. Rather than representing that as an empty
/// [`Polynomial`] (which would violate its invariants) the result is tagged:
///
/// * `Constant(c)`: no variable terms remain. In a constraint `p = 0` this is
///   either trivially satisfied (`c == 0`) or unsatisfiable (`c != 0`).
/// * `Polynomial(p)`: at least one term with a non-zero coefficient remains.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reduced<F: Coefficient> {
    /// Every variable term cancelled.
    Constant(F),

    /// At least one variable term remains.
    Polynomial(Polynomial<F>),
}

impl<F: Coefficient> Reduced<F> {
    /// Returns `true` if no variable terms remain.
    pub fn is_constant(&self) -> bool {
        matches!(self, Reduced::Constant(_))
    }

    /// Returns the collapsed constant, if this is one.
    pub fn as_constant(&self) -> Option<F> {
        match self {
            Reduced::Constant(c) => Some(*c),
            Reduced::Polynomial(_) => None,
        }
    }

    /// Returns the polynomial, if terms remain.
    pub fn as_polynomial(&self) -> Option<&Polynomial<F>> {
        match self {
            Reduced::Constant(_) => None,
            Reduced::Polynomial(p) => Some(p),
        }
    }

    /// Consumes `self`, returning the polynomial if terms remain.
    pub fn into_polynomial(self) -> Option<Polynomial<F>> {
        match self {
            Reduced::Constant(_) => None,
            Reduced::Polynomial(p) => Some(p),
        }
    }

    /// The constant part, whether or not terms remain.
    pub fn constant(&self) -> F {
        match self {
            Reduced::Constant(c) => *c,
            Reduced::Polynomial(p) => p.constant(),
        }
    }

    /// Evaluates under `assignment`; a collapsed constant evaluates to itself.
    pub fn evaluate<A: Assignment<F> + ?Sized>(&self, assignment: &A) -> F {
        match self {
            Reduced::Constant(c) => *c,
            Reduced::Polynomial(p) => p.evaluate(assignment),
        }
    }

    /// Applies a collapsing operation to the polynomial case, passing
    /// constants through.
    pub fn and_then(self, f: impl FnOnce(Polynomial<F>) -> Reduced<F>) -> Reduced<F> {
        match self {
            Reduced::Constant(c) => Reduced::Constant(c),
            Reduced::Polynomial(p) => f(p),
        }
    }
}

impl<F: Coefficient> Hash for Reduced<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Reduced::Constant(c) => {
                state.write_u8(0);
                c.to_canonical().as_ref().hash(state);
            }
            Reduced::Polynomial(p) => {
                state.write_u8(1);
                p.hash(state);
            }
        }
    }
}

impl<F: Coefficient> From<Polynomial<F>> for Reduced<F> {
    fn from(p: Polynomial<F>) -> Self {
        Reduced::Polynomial(p)
    }
}

/// Collects `(var, coeff)` pairs into a polynomial with constant zero,
/// summing duplicate variables.
impl<F: Coefficient> FromIterator<(crate::Var, F)> for Reduced<F> {
    fn from_iter<I: IntoIterator<Item = (crate::Var, F)>>(iter: I) -> Self {
        Polynomial::from_terms(F::ZERO, iter)
    }
}

impl<F: Coefficient> fmt::Display for Reduced<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reduced::Constant(c) => fmt::Display::fmt(&Signed(*c), f),
            Reduced::Polynomial(p) => fmt::Display::fmt(p, f),
        }
    }
}
