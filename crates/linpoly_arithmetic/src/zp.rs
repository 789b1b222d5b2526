//! A prime field with a compile-time modulus.
//!
//! [`Zp<P>`] stores its canonical representative in a single `u64` and is
//! intended for small moduli: worked examples, exhaustive tests, and toy
//! constraint systems. None of its operations are constant time.

use ff::Field;
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use core::{
    cmp::Ordering,
    fmt,
    iter::{Product, Sum},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::Coefficient;

/// An element of $\mathbb{Z}/P\mathbb{Z}$.
///
/// `P` must be a prime in $[2, 2^{63})$. The range is checked at compile time
/// when elements are built through [`Zp::new`], [`Field::random`] or
/// [`Coefficient::from_canonical`]; the [`Field::ZERO`] and [`Field::ONE`]
/// constants alone do not trigger the check. Primality is not checked, and a
/// composite `P` yields a ring in which [`Field::invert`] and square roots
/// are meaningless.
///
/// `P = 2` is supported. In characteristic 2 every element is its own
/// negation, so no element is [negative](Coefficient::is_negative).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Zp<const P: u64>(u64);

impl<const P: u64> Zp<P> {
    const VALID_MODULUS: () = {
        if P < 2 || P >= 1 << 63 {
            panic!("Zp modulus must lie in [2, 2^63)");
        }
    };

    /// The modulus $P$.
    pub const MODULUS: u64 = P;

    /// Reduces `value` modulo $P$.
    pub const fn new(value: u64) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_MODULUS;
        Zp(value % P)
    }

    /// Maps a signed integer into the field, so that `from_i64(-1)` is $P - 1$.
    pub const fn from_i64(value: i64) -> Self {
        let reduced = Self::new(value.unsigned_abs());
        if value < 0 { reduced.neg_const() } else { reduced }
    }

    /// Returns the canonical representative in $[0, P)$.
    pub const fn value(self) -> u64 {
        self.0
    }

    const fn neg_const(self) -> Self {
        if self.0 == 0 { self } else { Zp(P - self.0) }
    }

    fn is_square_vartime(&self) -> bool {
        P == 2 || self.0 == 0 || self.pow_vartime([(P - 1) / 2]) == Self::ONE
    }

    /// Smallest quadratic non-residue, used by Tonelli-Shanks.
    fn non_residue() -> Self {
        (2..P)
            .map(Zp)
            .find(|z| !z.is_square_vartime())
            .expect("an odd prime field always has a quadratic non-residue")
    }

    fn sqrt_vartime(&self) -> Option<Self> {
        if P == 2 || self.0 == 0 {
            return Some(*self);
        }
        if !self.is_square_vartime() {
            return None;
        }

        // P - 1 = q * 2^s with q odd
        let s = (P - 1).trailing_zeros();
        let q = (P - 1) >> s;

        let mut m = s;
        let mut c = Self::non_residue().pow_vartime([q]);
        let mut t = self.pow_vartime([q]);
        let mut r = self.pow_vartime([q.div_ceil(2)]);

        while t != Self::ONE {
            let mut i = 0;
            let mut t2i = t;
            while t2i != Self::ONE {
                t2i = t2i.square();
                i += 1;
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = b.square();
            }

            m = i;
            c = b.square();
            t *= c;
            r *= b;
        }

        Some(r)
    }
}

impl<const P: u64> From<u64> for Zp<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> fmt::Debug for Zp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.0, P)
    }
}

impl<const P: u64> fmt::Display for Zp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const P: u64> ConstantTimeEq for Zp<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl<const P: u64> ConditionallySelectable for Zp<P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Zp(u64::conditional_select(&a.0, &b.0, choice))
    }
}

impl<const P: u64> Neg for Zp<P> {
    type Output = Self;

    fn neg(self) -> Self {
        self.neg_const()
    }
}

impl<'a, const P: u64> Add<&'a Zp<P>> for Zp<P> {
    type Output = Self;

    fn add(self, rhs: &'a Self) -> Self {
        // Both operands are below 2^63, so the sum cannot overflow.
        let sum = self.0 + rhs.0;
        Zp(if sum >= P { sum - P } else { sum })
    }
}

impl<'a, const P: u64> Sub<&'a Zp<P>> for Zp<P> {
    type Output = Self;

    fn sub(self, rhs: &'a Self) -> Self {
        Zp(if self.0 >= rhs.0 {
            self.0 - rhs.0
        } else {
            self.0 + (P - rhs.0)
        })
    }
}

impl<'a, const P: u64> Mul<&'a Zp<P>> for Zp<P> {
    type Output = Self;

    fn mul(self, rhs: &'a Self) -> Self {
        Zp(((self.0 as u128 * rhs.0 as u128) % P as u128) as u64)
    }
}

macro_rules! impl_by_value_ops {
    ($($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident);*) => {
        $(
            impl<const P: u64> $trait<Zp<P>> for Zp<P> {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self {
                    self.$method(&rhs)
                }
            }

            impl<const P: u64> $assign_trait<Zp<P>> for Zp<P> {
                fn $assign_method(&mut self, rhs: Self) {
                    let lhs = *self;
                    *self = lhs.$method(&rhs);
                }
            }

            impl<'a, const P: u64> $assign_trait<&'a Zp<P>> for Zp<P> {
                fn $assign_method(&mut self, rhs: &'a Self) {
                    let lhs = *self;
                    *self = lhs.$method(rhs);
                }
            }
        )*
    };
}

impl_by_value_ops!(
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign
);

impl<const P: u64> Sum for Zp<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a, const P: u64> Sum<&'a Zp<P>> for Zp<P> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<const P: u64> Product for Zp<P> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a, const P: u64> Product<&'a Zp<P>> for Zp<P> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<const P: u64> Field for Zp<P> {
    const ZERO: Self = Zp(0);
    const ONE: Self = Zp(1);

    fn random(mut rng: impl RngCore) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_MODULUS;
        let bits = u64::BITS - (P - 1).leading_zeros();
        loop {
            let candidate = rng.next_u64() >> (u64::BITS - bits);
            if candidate < P {
                return Zp(candidate);
            }
        }
    }

    fn square(&self) -> Self {
        *self * self
    }

    fn double(&self) -> Self {
        *self + self
    }

    fn invert(&self) -> CtOption<Self> {
        // Fermat: x^(P - 2) = x^-1 for x != 0.
        CtOption::new(self.pow_vartime([P - 2]), !self.is_zero())
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        if num.0 == 0 {
            return (Choice::from(1), Self::ZERO);
        }
        if div.0 == 0 {
            return (Choice::from(0), Self::ZERO);
        }

        let ratio = *num * div.pow_vartime([P - 2]);
        match ratio.sqrt_vartime() {
            Some(root) => (Choice::from(1), root),
            None => {
                let root = (ratio * Self::non_residue())
                    .sqrt_vartime()
                    .expect("product of two non-residues is a residue");
                (Choice::from(0), root)
            }
        }
    }
}

impl<const P: u64> Coefficient for Zp<P> {
    type Repr = [u8; 8];

    fn to_canonical(&self) -> Self::Repr {
        self.0.to_le_bytes()
    }

    fn from_canonical(repr: Self::Repr) -> Option<Self> {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_MODULUS;
        let value = u64::from_le_bytes(repr);
        (value < P).then_some(Zp(value))
    }

    fn cmp_canonical(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    fn is_negative(&self) -> bool {
        P > 2 && self.0 > (P - 1) / 2
    }

    fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
