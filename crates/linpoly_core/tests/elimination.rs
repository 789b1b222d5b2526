//! Drives the polynomial API the way a constraint simplifier does: pivot on
//! the simplest constraint, eliminate its leading variable everywhere else,
//! and treat collapses as "redundant" (zero) or "unsatisfiable" (non-zero).

use std::collections::BTreeMap;

use linpoly_arithmetic::{Coefficient, Field, Zp};
use linpoly_core::{
    Polynomial, Reduced, Var, VarAllocator,
    batch::{dedup_sorted, evaluate_all, substitute_all},
};
use pasta_curves::Fp;

#[derive(Debug, PartialEq)]
enum Outcome<F> {
    Solved(BTreeMap<Var, F>),
    Unsatisfiable,
    Underdetermined,
}

fn solve<F: Coefficient>(system: Vec<Polynomial<F>>) -> Outcome<F> {
    let mut pending = dedup_sorted(system);
    let mut pivots = Vec::new();

    while !pending.is_empty() {
        let pivot = pending.remove(0);
        let (var, coeff) = pivot
            .terms()
            .iter()
            .next()
            .map(|(v, c)| (*v, *c))
            .unwrap();

        // a·var + rest = 0  =>  var = -rest / a
        let factor = -coeff.invert().unwrap();
        let replacement = match pivot.delete(var) {
            Reduced::Constant(c) => Reduced::Constant(c * factor),
            Reduced::Polynomial(rest) => rest.scale(factor),
        };

        let mut next = Vec::new();
        for constraint in pending {
            let reduced = match &replacement {
                Reduced::Constant(value) => {
                    constraint
                        .substitute_many(&BTreeMap::from([(var, *value)]))
                        .0
                }
                Reduced::Polynomial(r) => constraint.substitute(var, r),
            };
            match reduced {
                Reduced::Constant(c) if c.is_zero_vartime() => {}
                Reduced::Constant(_) => return Outcome::Unsatisfiable,
                Reduced::Polynomial(p) => next.push(p),
            }
        }
        pending = dedup_sorted(next);
        pivots.push((var, replacement));
    }

    let mut solution = BTreeMap::new();
    for (var, replacement) in pivots.into_iter().rev() {
        let value = match replacement {
            Reduced::Constant(value) => value,
            Reduced::Polynomial(r) => {
                if r.variables().any(|v| !solution.contains_key(&v)) {
                    return Outcome::Underdetermined;
                }
                r.evaluate(&solution)
            }
        };
        solution.insert(var, value);
    }
    Outcome::Solved(solution)
}

fn poly<F: Coefficient>(constant: F, terms: &[(Var, F)]) -> Polynomial<F> {
    Polynomial::from_terms(constant, terms.iter().copied())
        .into_polynomial()
        .unwrap()
}

#[test]
fn test_solves_small_system() {
    let mut vars = VarAllocator::new();
    let (x, y, z) = (vars.fresh(), vars.fresh(), vars.fresh());

    // x + y = 5, x - y = 1, 2z - x = 0
    let system = vec![
        poly(-Fp::from(5), &[(x, Fp::ONE), (y, Fp::ONE)]),
        poly(-Fp::ONE, &[(x, Fp::ONE), (y, -Fp::ONE)]),
        poly(Fp::ZERO, &[(z, Fp::from(2)), (x, -Fp::ONE)]),
    ];

    let Outcome::Solved(solution) = solve(system.clone()) else {
        panic!("system should be solvable");
    };
    assert_eq!(solution[&x], Fp::from(3));
    assert_eq!(solution[&y], Fp::from(2));
    assert_eq!(solution[&z], Fp::from(3) * Fp::from(2).invert().unwrap());

    assert!(evaluate_all(&system, &solution).iter().all(|v| v.is_zero_vartime()));
}

#[test]
fn test_redundant_constraints_collapse_to_zero() {
    type F7 = Zp<7>;
    let (x, y) = (Var(0), Var(1));

    let system = vec![
        poly(F7::from_i64(-1), &[(x, F7::ONE), (y, F7::ONE)]),
        poly(F7::from_i64(-2), &[(x, F7::new(2)), (y, F7::new(2))]),
        Polynomial::bind(y, F7::new(4)),
        // The negation of the first constraint, removed by deduplication.
        poly(F7::ONE, &[(x, -F7::ONE), (y, -F7::ONE)]),
    ];

    assert_eq!(
        solve(system),
        Outcome::Solved(BTreeMap::from([(x, F7::new(4)), (y, F7::new(4))]))
    );
}

#[test]
fn test_contradiction_collapses_to_nonzero_constant() {
    let (x, y) = (Var(0), Var(1));
    let system = vec![
        poly(-Fp::ONE, &[(x, Fp::ONE), (y, Fp::ONE)]),
        poly(-Fp::from(2), &[(x, Fp::ONE), (y, Fp::ONE)]),
    ];
    assert_eq!(solve(system), Outcome::Unsatisfiable);
}

#[test]
fn test_free_variables_are_reported() {
    let (x, y) = (Var(0), Var(1));
    let system = vec![poly(-Fp::ONE, &[(x, Fp::ONE), (y, Fp::ONE)])];
    assert_eq!(solve(system), Outcome::Underdetermined);
}

#[test]
fn test_known_values_propagate_to_fixpoint() {
    type F7 = Zp<7>;
    let (a, b, c) = (Var(0), Var(1), Var(2));

    // b = a + 1, c = 2b, with a known up front.
    let mut system = vec![
        poly(F7::ONE, &[(a, F7::ONE), (b, -F7::ONE)]),
        poly(F7::ZERO, &[(b, F7::new(2)), (c, -F7::ONE)]),
    ];
    let mut known = BTreeMap::from([(a, F7::new(3))]);

    loop {
        let mut changed_any = false;
        let mut remaining = Vec::new();
        for (reduced, changed) in substitute_all(&system, &known) {
            changed_any |= changed;
            match reduced {
                Reduced::Constant(k) => assert_eq!(k, F7::ZERO),
                Reduced::Polynomial(p) if p.variable_count() == 1 => {
                    let (var, coeff) = p.terms().iter().next().map(|(v, c)| (*v, *c)).unwrap();
                    known.insert(var, -p.constant() * coeff.invert().unwrap());
                }
                Reduced::Polynomial(p) => remaining.push(p),
            }
        }
        system = remaining;
        if !changed_any {
            break;
        }
    }

    assert!(system.is_empty());
    assert_eq!(
        known,
        BTreeMap::from([(a, F7::new(3)), (b, F7::new(4)), (c, F7::new(1))])
    );
}
