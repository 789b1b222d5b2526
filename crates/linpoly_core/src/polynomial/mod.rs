//! The canonical sparse affine-linear polynomial.
//!
//! ## Invariants
//!
//! Every live [`Polynomial`] satisfies:
//!
//! * no term has a zero coefficient, and
//! * there is at least one term.
//!
//! Both are established by the constructors and preserved by every
//! operation; an operation that could violate the second one returns a
//! [`Reduced`] instead.
//!
//! ## Equality and ordering
//!
//! A polynomial denotes the constraint `p = 0`, and `-p = 0` is the same
//! constraint. Equality therefore holds between `p` and `q` when they are
//! structurally identical _or_ when one is the exact negation of the other.
//! [`Hash`] and [`Ord`] are computed on the sign-normalised representative
//! (the one of `p`, `-p` whose lowest-variable coefficient is not negative),
//! which keeps both consistent with equality. Ordering puts polynomials with
//! fewer variables first.

mod algebra;
mod display;
mod ops;
mod substitute;

pub use algebra::merge_coefficients;
pub(crate) use display::Signed;

use linpoly_arithmetic::Coefficient;

use alloc::collections::{BTreeMap, BTreeSet};
use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use crate::{Reduced, Var};

/// `constant + Σ coeff · var` over the field `F`, with at least one term and
/// no zero coefficients.
#[derive(Clone, Debug)]
pub struct Polynomial<F: Coefficient> {
    constant: F,
    terms: BTreeMap<Var, F>,
}

impl<F: Coefficient> Polynomial<F> {
    /// Builds a polynomial from a list of terms, summing coefficients of
    /// repeated variables and dropping those that sum to zero.
    pub fn from_terms(constant: F, terms: impl IntoIterator<Item = (Var, F)>) -> Reduced<F> {
        let mut mapping = BTreeMap::new();
        for (var, coeff) in terms {
            *mapping.entry(var).or_insert(F::ZERO) += coeff;
        }
        Self::from_mapping(constant, mapping)
    }

    /// Builds a polynomial from an already deduplicated term mapping,
    /// dropping zero coefficients.
    pub fn from_mapping(constant: F, mut terms: BTreeMap<Var, F>) -> Reduced<F> {
        terms.retain(|_, coeff| !coeff.is_zero_vartime());
        Self::from_nonzero(constant, terms)
    }

    /// Wraps a mapping the caller guarantees has no zero coefficients.
    pub(crate) fn from_nonzero(constant: F, terms: BTreeMap<Var, F>) -> Reduced<F> {
        debug_assert!(terms.values().all(|coeff| !coeff.is_zero_vartime()));
        if terms.is_empty() {
            Reduced::Constant(constant)
        } else {
            Reduced::Polynomial(Polynomial { constant, terms })
        }
    }

    /// The polynomial `var`.
    pub fn single(var: Var) -> Self {
        Polynomial {
            constant: F::ZERO,
            terms: BTreeMap::from([(var, F::ONE)]),
        }
    }

    /// Encodes the constraint `var = value` as the polynomial `value - var`.
    pub fn bind(var: Var, value: F) -> Self {
        Polynomial {
            constant: value,
            terms: BTreeMap::from([(var, -F::ONE)]),
        }
    }

    /// The constant term.
    pub fn constant(&self) -> F {
        self.constant
    }

    /// The variable terms, in ascending variable order.
    pub fn terms(&self) -> &BTreeMap<Var, F> {
        &self.terms
    }

    /// The variables with a (necessarily non-zero) coefficient, ascending.
    pub fn variables(&self) -> impl Iterator<Item = Var> + '_ {
        self.terms.keys().copied()
    }

    /// The set of variables with a coefficient.
    pub fn variable_set(&self) -> BTreeSet<Var> {
        self.variables().collect()
    }

    /// The number of variable terms; always at least one.
    pub fn variable_count(&self) -> usize {
        self.terms.len()
    }

    /// The coefficient of `var`, or `None` if it does not occur.
    pub fn coefficient(&self, var: Var) -> Option<F> {
        self.terms.get(&var).copied()
    }

    /// Returns `true` if `var` occurs with a non-zero coefficient.
    pub fn contains(&self, var: Var) -> bool {
        self.terms.contains_key(&var)
    }

    /// Whether this polynomial is the negation of its sign-normalised form.
    fn is_sign_flipped(&self) -> bool {
        self.terms
            .values()
            .next()
            .is_some_and(|leading| leading.is_negative())
    }

    /// Returns whichever of `self` and `-self` has a lowest-variable
    /// coefficient that is not negative. Equal polynomials share the same
    /// normalised form.
    pub fn normalize_sign(&self) -> Self {
        if self.is_sign_flipped() {
            self.negate()
        } else {
            self.clone()
        }
    }

    /// Structural comparison of the sign-normalised forms, without
    /// materialising them.
    fn cmp_normalized(&self, other: &Self) -> Ordering {
        let (flip_a, flip_b) = (self.is_sign_flipped(), other.is_sign_flipped());
        let sign = |flip: bool, x: &F| if flip { -*x } else { *x };

        self.terms
            .len()
            .cmp(&other.terms.len())
            .then_with(|| {
                for ((va, ca), (vb, cb)) in self.terms.iter().zip(other.terms.iter()) {
                    let ordering = va
                        .cmp(vb)
                        .then_with(|| sign(flip_a, ca).cmp_canonical(&sign(flip_b, cb)));
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                }
                Ordering::Equal
            })
            .then_with(|| {
                sign(flip_a, &self.constant).cmp_canonical(&sign(flip_b, &other.constant))
            })
    }

    fn is_negation_of(&self, other: &Self) -> bool {
        self.constant == -other.constant
            && self.terms.len() == other.terms.len()
            && self
                .terms
                .iter()
                .zip(other.terms.iter())
                .all(|((va, ca), (vb, cb))| va == vb && *ca == -*cb)
    }
}

impl<F: Coefficient> PartialEq for Polynomial<F> {
    fn eq(&self, other: &Self) -> bool {
        (self.constant == other.constant && self.terms == other.terms) || self.is_negation_of(other)
    }
}

impl<F: Coefficient> Eq for Polynomial<F> {}

impl<F: Coefficient> PartialOrd for Polynomial<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Fewer variables first, then by terms, then by constant (all of the
/// sign-normalised forms). Returns `Equal` exactly when `self == other`.
impl<F: Coefficient> Ord for Polynomial<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_normalized(other)
    }
}

impl<F: Coefficient> Hash for Polynomial<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let flip = self.is_sign_flipped();
        let sign = |x: &F| if flip { -*x } else { *x };

        sign(&self.constant).to_canonical().as_ref().hash(state);
        state.write_usize(self.terms.len());
        for (var, coeff) in &self.terms {
            var.hash(state);
            sign(coeff).to_canonical().as_ref().hash(state);
        }
    }
}
