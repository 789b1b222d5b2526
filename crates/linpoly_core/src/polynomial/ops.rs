//! Operator sugar over the algebra in [`algebra`](super::algebra).
//!
//! Operations that can collapse (`+`, `-`, scalar `*`) yield a [`Reduced`];
//! negation never does and yields a [`Polynomial`].

use linpoly_arithmetic::Coefficient;

use core::ops::{Add, Mul, Neg, Sub};

use super::Polynomial;
use crate::Reduced;

impl<F: Coefficient> Neg for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn neg(self) -> Polynomial<F> {
        self.negate()
    }
}

impl<F: Coefficient> Neg for Polynomial<F> {
    type Output = Polynomial<F>;

    fn neg(self) -> Polynomial<F> {
        self.negate()
    }
}

impl<F: Coefficient> Add for &Polynomial<F> {
    type Output = Reduced<F>;

    fn add(self, rhs: Self) -> Reduced<F> {
        self.merge(rhs)
    }
}

impl<F: Coefficient> Sub for &Polynomial<F> {
    type Output = Reduced<F>;

    fn sub(self, rhs: Self) -> Reduced<F> {
        self.subtract(rhs)
    }
}

impl<F: Coefficient> Mul<F> for &Polynomial<F> {
    type Output = Reduced<F>;

    fn mul(self, rhs: F) -> Reduced<F> {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Var;
    use linpoly_arithmetic::{Field, Zp};

    type F7 = Zp<7>;

    #[test]
    fn test_operators_match_methods() {
        let x = Polynomial::<F7>::single(Var(0));
        let y = Polynomial::bind(Var(1), F7::new(3));

        assert_eq!(&x + &y, x.merge(&y));
        assert_eq!(&x - &y, x.subtract(&y));
        assert_eq!(&x - &x, Reduced::Constant(F7::ZERO));
        assert_eq!(&y * F7::new(2), y.scale(F7::new(2)));
        assert_eq!(&y * F7::ZERO, Reduced::Constant(F7::ZERO));
        assert_eq!((-&y).constant(), F7::new(4));
        assert_eq!(-y.clone(), y);
    }
}
