//! Operations over whole systems of polynomials.
//!
//! Each polynomial is transformed independently of the others, so with the
//! `parallel` feature these helpers fan out across Rayon's thread pool. The
//! output is always in input order and identical to the sequential result.

use linpoly_arithmetic::Coefficient;

use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use crate::maybe_rayon::ParallelIterator;
use crate::{
    Assignment, Polynomial, Reduced,
    maybe_rayon::{self, MaybeParIter},
};

/// Applies [`Polynomial::substitute_many`] to every polynomial in `polys`.
///
/// Callers driving a fixpoint loop typically keep the entries whose flag is
/// set, inspect any that collapsed to a constant, and repeat until no flag
/// is raised.
pub fn substitute_all<F, A>(polys: &[Polynomial<F>], bindings: &A) -> Vec<(Reduced<F>, bool)>
where
    F: Coefficient,
    A: Assignment<F> + Sync + ?Sized,
{
    polys
        .par_iter()
        .map(|poly| poly.substitute_many(bindings))
        .collect()
}

/// Evaluates every polynomial in `polys` against `assignment`. A witness
/// satisfies the system exactly when every entry is zero.
pub fn evaluate_all<F, A>(polys: &[Polynomial<F>], assignment: &A) -> Vec<F>
where
    F: Coefficient,
    A: Assignment<F> + Sync + ?Sized,
{
    polys
        .par_iter()
        .map(|poly| poly.evaluate(assignment))
        .collect()
}

/// Sorts `polys` and drops every polynomial equal (up to sign) to its
/// predecessor. The survivors keep the sign they were given in.
pub fn dedup_sorted<F: Coefficient>(mut polys: Vec<Polynomial<F>>) -> Vec<Polynomial<F>> {
    maybe_rayon::sort(&mut polys);
    polys.dedup();
    polys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Var;
    use alloc::collections::BTreeMap;
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
    fn test_substitute_all_preserves_order_and_flags() {
        let polys = vec![
            poly(f7(1), &[(0, f7(1))]),
            poly(f7(2), &[(1, f7(3))]),
            poly(f7(3), &[(0, f7(2)), (2, f7(1))]),
        ];
        let bindings = BTreeMap::from([(Var(0), f7(4))]);

        let results = substitute_all(&polys, &bindings);
        assert_eq!(
            results,
            vec![
                (Reduced::Constant(f7(5)), true),
                (Reduced::Polynomial(polys[1].clone()), false),
                (Reduced::Polynomial(poly(f7(11), &[(2, f7(1))])), true),
            ]
        );

        for (poly, result) in polys.iter().zip(&results) {
            assert_eq!(*result, poly.substitute_many(&bindings));
        }
    }

    #[test]
    fn test_evaluate_all() {
        let polys = vec![
            poly(Fp::from(3), &[(0, -Fp::ONE)]),
            poly(Fp::ZERO, &[(0, Fp::ONE), (1, -Fp::ONE)]),
        ];
        assert_eq!(
            evaluate_all(&polys, &[Fp::from(3), Fp::from(3)][..]),
            vec![Fp::ZERO, Fp::ZERO]
        );
        assert_eq!(
            evaluate_all(&polys, &vec![Fp::from(1), Fp::from(5)]),
            vec![Fp::from(2), -Fp::from(4)]
        );
    }

    #[test]
    fn test_dedup_sorted_removes_negations() {
        let p = poly(f7(1), &[(0, f7(2)), (3, f7(-1))]);
        let q = poly(f7(3), &[(1, f7(1))]);
        let deduped = dedup_sorted(vec![p.clone(), q.clone(), p.negate(), q.clone()]);

        assert_eq!(deduped, vec![q, p]);
        assert!(deduped.windows(2).all(|w| w[0] < w[1]));
    }
}
