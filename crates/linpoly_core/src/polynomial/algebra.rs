use linpoly_arithmetic::Coefficient;

use alloc::collections::{BTreeMap, btree_map::Entry};

use super::Polynomial;
use crate::{Assignment, Reduced, Var};

/// Adds two term mappings coefficient-wise, dropping every variable whose
/// coefficients cancel.
///
/// Inputs are expected to be free of zero coefficients, as the term mappings
/// of live polynomials are.
pub fn merge_coefficients<F: Coefficient>(
    a: &BTreeMap<Var, F>,
    b: &BTreeMap<Var, F>,
) -> BTreeMap<Var, F> {
    let (larger, smaller) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut merged = larger.clone();
    accumulate(&mut merged, smaller.iter().map(|(var, coeff)| (*var, *coeff)));
    merged
}

/// Adds each `(var, coeff)` into `terms`, removing entries that reach zero.
pub(super) fn accumulate<F: Coefficient>(
    terms: &mut BTreeMap<Var, F>,
    additions: impl IntoIterator<Item = (Var, F)>,
) {
    for (var, coeff) in additions {
        match terms.entry(var) {
            Entry::Vacant(entry) => {
                if !coeff.is_zero_vartime() {
                    entry.insert(coeff);
                }
            }
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += coeff;
                if entry.get().is_zero_vartime() {
                    entry.remove();
                }
            }
        }
    }
}

impl<F: Coefficient> Polynomial<F> {
    /// Removes the term for `var` entirely. Removing the last term collapses
    /// to the constant.
    pub fn delete(&self, var: Var) -> Reduced<F> {
        let mut terms = self.terms.clone();
        terms.remove(&var);
        Self::from_nonzero(self.constant, terms)
    }

    /// Adds two polynomials.
    pub fn merge(&self, other: &Self) -> Reduced<F> {
        Self::from_nonzero(
            self.constant + other.constant,
            merge_coefficients(&self.terms, &other.terms),
        )
    }

    /// Subtracts `other` from `self`.
    pub fn subtract(&self, other: &Self) -> Reduced<F> {
        self.merge(&other.negate())
    }

    /// Negates the constant and every coefficient. Term count is preserved,
    /// so this never collapses.
    pub fn negate(&self) -> Self {
        Polynomial {
            constant: -self.constant,
            terms: self
                .terms
                .iter()
                .map(|(var, coeff)| (*var, -*coeff))
                .collect(),
        }
    }

    /// Adds `delta` to the constant term.
    pub fn add_constant(&self, delta: F) -> Self {
        Polynomial {
            constant: self.constant + delta,
            terms: self.terms.clone(),
        }
    }

    /// Multiplies the constant and every coefficient by `factor`.
    ///
    /// Scaling by zero collapses to the constant zero. Any other factor is
    /// invertible and so keeps every coefficient non-zero.
    pub fn scale(&self, factor: F) -> Reduced<F> {
        if factor.is_zero_vartime() {
            return Reduced::Constant(F::ZERO);
        }

        Reduced::Polynomial(Polynomial {
            constant: self.constant * factor,
            terms: self
                .terms
                .iter()
                .map(|(var, coeff)| (*var, *coeff * factor))
                .collect(),
        })
    }

    /// Relabels every variable through `f`, leaving coefficients and the
    /// constant untouched.
    ///
    /// `f` must be injective on this polynomial's variables. Debug builds
    /// assert this. In release builds a collision sums the colliding
    /// coefficients, and if they cancel the returned value breaks the
    /// polynomial invariants: it may hold fewer terms than expected, or none
    /// at all. Callers that cannot guarantee injectivity should rebuild with
    /// [`Polynomial::from_terms`], which reports a collapse as a [`Reduced`].
    pub fn renumber(&self, mut f: impl FnMut(Var) -> Var) -> Self {
        let mut terms = BTreeMap::new();
        accumulate(
            &mut terms,
            self.terms.iter().map(|(var, coeff)| (f(*var), *coeff)),
        );
        debug_assert_eq!(
            terms.len(),
            self.terms.len(),
            "renumbering collided two variables"
        );

        Polynomial {
            constant: self.constant,
            terms,
        }
    }

    /// Computes `constant + Σ coeff · assignment[var]`, treating unassigned
    /// variables as zero.
    pub fn evaluate<A: Assignment<F> + ?Sized>(&self, assignment: &A) -> F {
        self.terms
            .iter()
            .filter_map(|(var, coeff)| assignment.value(*var).map(|value| *coeff * value))
            .fold(self.constant, |acc, term| acc + term)
    }
}
