//! [`Coefficient`] implementations for the Pasta scalar fields.

use ff::PrimeField;
use pasta_curves::{Fp, Fq};

use crate::Coefficient;

macro_rules! impl_pasta_coefficient {
    ($($field:ty),*) => {
        $(
            // Pasta representations are already canonical and little-endian.
            impl Coefficient for $field {
                type Repr = [u8; 32];

                fn to_canonical(&self) -> Self::Repr {
                    self.to_repr()
                }

                fn from_canonical(repr: Self::Repr) -> Option<Self> {
                    Self::from_repr(repr).into()
                }
            }
        )*
    };
}

impl_pasta_coefficient!(Fp, Fq);
