use linpoly_arithmetic::Coefficient;

use alloc::collections::BTreeMap;

use super::{Polynomial, algebra::accumulate};
use crate::{Assignment, Reduced, Var};

impl<F: Coefficient> Polynomial<F> {
    /// Eliminates `var` by replacing it with `replacement`.
    ///
    /// With `self = a·var + rest`, the result is `rest + a·replacement`, so any
    /// assignment satisfying `var = replacement` gives both polynomials the
    /// same value. If `var` does not occur, `self` is returned unchanged.
    ///
    /// `replacement` must not itself mention `var`; debug builds assert this.
    pub fn substitute(&self, var: Var, replacement: &Polynomial<F>) -> Reduced<F> {
        let Some(coeff) = self.coefficient(var) else {
            return Reduced::Polynomial(self.clone());
        };
        debug_assert!(
            !replacement.contains(var),
            "substitution of {var} is self-referential"
        );

        let mut terms = self.terms.clone();
        terms.remove(&var);
        accumulate(
            &mut terms,
            replacement
                .terms
                .iter()
                .map(|(v, c)| (*v, *c * coeff)),
        );

        Self::from_nonzero(self.constant + replacement.constant * coeff, terms)
    }

    /// Substitutes every bound variable in a single pass.
    ///
    /// Each term whose variable has a value in `bindings` is folded into the
    /// constant; the remaining terms are kept as they are. The returned flag
    /// is `true` iff at least one term was folded, which tells the caller
    /// whether this constraint changed and may need another simplification
    /// round, even when the result still has terms.
    pub fn substitute_many<A: Assignment<F> + ?Sized>(&self, bindings: &A) -> (Reduced<F>, bool) {
        let mut constant = self.constant;
        let mut terms = BTreeMap::new();
        let mut changed = false;

        for (&var, &coeff) in &self.terms {
            match bindings.value(var) {
                Some(value) => {
                    constant += coeff * value;
                    changed = true;
                }
                None => {
                    terms.insert(var, coeff);
                }
            }
        }

        (Self::from_nonzero(constant, terms), changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linpoly_arithmetic::{Field, Zp};
    use pasta_curves::Fp;

    type F7 = Zp<7>;

    fn f7(x: i64) -> F7 {
        F7::from_i64(x)
    }

    fn poly<F: Coefficient>(constant: F, terms: &[(usize, F)]) -> Polynomial<F> {
        Polynomial::from_terms(constant, terms.iter().map(|&(v, c)| (Var(v), c)))
            .into_polynomial()
            .unwrap()
    }

    #[test]
    fn test_substitute_absent_variable_is_noop() {
        let p = poly(f7(1), &[(0, f7(2))]);
        let r = poly(f7(3), &[(1, f7(1))]);
        assert_eq!(p.substitute(Var(5), &r), Reduced::Polynomial(p.clone()));
    }

    #[test]
    fn test_substitute_scales_replacement() {
        // p = 1 + 2·x0 + x1, x0 := 3 + x2  =>  7 + x1 + 2·x2
        let p = poly(Fp::ONE, &[(0, Fp::from(2)), (1, Fp::ONE)]);
        let r = poly(Fp::from(3), &[(2, Fp::ONE)]);
        let expected = poly(Fp::from(7), &[(1, Fp::ONE), (2, Fp::from(2))]);
        assert_eq!(p.substitute(Var(0), &r), Reduced::Polynomial(expected));
    }

    #[test]
    fn test_substitute_collapses() {
        // p = 2·x0 - 2·x1, x0 := 4 + x1  =>  8
        let p = poly(F7::ZERO, &[(0, f7(2)), (1, f7(-2))]);
        let r = poly(f7(4), &[(1, F7::ONE)]);
        assert_eq!(p.substitute(Var(0), &r), Reduced::Constant(f7(8)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "self-referential")]
    fn test_self_referential_substitution_is_caught() {
        let p = poly(F7::ZERO, &[(0, f7(2))]);
        let r = poly(f7(4), &[(0, F7::ONE)]);
        let _ = p.substitute(Var(0), &r);
    }

    #[test]
    fn test_substitute_many() {
        let p = poly(f7(1), &[(0, f7(2)), (1, f7(3)), (2, f7(4))]);

        let bindings = BTreeMap::from([(Var(0), f7(1)), (Var(2), f7(2))]);
        let (reduced, changed) = p.substitute_many(&bindings);
        assert!(changed);
        // 1 + 2·1 + 4·2 = 11 = 4 (mod 7)
        assert_eq!(reduced, Reduced::Polynomial(poly(f7(4), &[(1, f7(3))])));

        let unrelated = BTreeMap::from([(Var(9), f7(1))]);
        let (reduced, changed) = p.substitute_many(&unrelated);
        assert!(!changed);
        assert_eq!(reduced, Reduced::Polynomial(p.clone()));

        let everything = vec![f7(1), f7(1), f7(1)];
        let (reduced, changed) = p.substitute_many(&everything);
        assert!(changed);
        assert_eq!(reduced, Reduced::Constant(f7(10)));
    }
}
