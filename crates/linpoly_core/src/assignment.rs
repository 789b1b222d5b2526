use alloc::{collections::BTreeMap, vec::Vec};

use crate::Var;

/// A (possibly partial) map from variables to values.
///
/// Used both for evaluating polynomials against a witness and for batch
/// substitution. Variables without a value are reported as `None`; what
/// that means is up to the operation (evaluation treats them as zero,
/// substitution leaves their terms in place).
pub trait Assignment<F> {
    /// Returns the value bound to `var`, if any.
    fn value(&self, var: Var) -> Option<F>;
}

impl<F: Copy> Assignment<F> for BTreeMap<Var, F> {
    fn value(&self, var: Var) -> Option<F> {
        self.get(&var).copied()
    }
}

/// Dense witness vectors, indexed by [`Var::index`].
impl<F: Copy> Assignment<F> for [F] {
    fn value(&self, var: Var) -> Option<F> {
        self.get(var.0).copied()
    }
}

impl<F: Copy> Assignment<F> for Vec<F> {
    fn value(&self, var: Var) -> Option<F> {
        self.as_slice().value(var)
    }
}

impl<F, A: Assignment<F> + ?Sized> Assignment<F> for &A {
    fn value(&self, var: Var) -> Option<F> {
        (**self).value(var)
    }
}
