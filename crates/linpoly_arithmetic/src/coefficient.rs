use ff::Field;

use core::{cmp::Ordering, fmt};

/// A finite field element usable as the coefficient (or constant) of a
/// linear polynomial.
///
/// Besides the ring operations inherited from [`Field`], implementors expose a
/// canonical little-endian encoding of their integer representative in
/// $[0, p)$. Everything else on this trait is derived from that encoding:
///
/// * [`cmp_canonical`](Self::cmp_canonical) orders elements by representative,
///   which is what makes polynomial ordering and hashing deterministic.
/// * [`is_negative`](Self::is_negative) reports whether the representative
///   lies above the midpoint $(p - 1)/2$, i.e. whether the element is best
///   read as a negative residue.
/// * [`fmt_canonical`](Self::fmt_canonical) prints the representative.
///
/// The `From<u64>` bound embeds lengths and variable indices into the field
/// when a polynomial is streamed as field elements.
pub trait Coefficient: Field + From<u64> {
    /// Fixed-size little-endian encoding of the canonical representative.
    type Repr: Copy + Default + AsRef<[u8]> + AsMut<[u8]> + Send + Sync + 'static;

    /// Returns the canonical little-endian encoding of this element.
    fn to_canonical(&self) -> Self::Repr;

    /// Decodes a canonical encoding, returning `None` if the encoded integer
    /// is not strictly less than the modulus.
    fn from_canonical(repr: Self::Repr) -> Option<Self>;

    /// Compares the canonical integer representatives of two elements.
    fn cmp_canonical(&self, other: &Self) -> Ordering {
        cmp_le(self.to_canonical().as_ref(), other.to_canonical().as_ref())
    }

    /// Returns `true` if the canonical representative exceeds $(p - 1)/2$.
    ///
    /// For odd $p$ this holds exactly when $x > p - x$, so it can be decided
    /// without knowing the modulus. Zero is never negative.
    fn is_negative(&self) -> bool {
        self.cmp_canonical(&-*self) == Ordering::Greater
    }

    /// Returns `-self` if this element [is negative](Self::is_negative), and
    /// `self` otherwise.
    fn magnitude(&self) -> Self {
        if self.is_negative() { -*self } else { *self }
    }

    /// Writes the canonical representative: in decimal when it fits in a
    /// `u64`, otherwise as `0x`-prefixed big-endian hex.
    fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = self.to_canonical();
        let bytes = repr.as_ref();

        if bytes.iter().skip(8).all(|b| *b == 0) {
            let mut word = [0u8; 8];
            for (w, b) in word.iter_mut().zip(bytes) {
                *w = *b;
            }
            return write!(f, "{}", u64::from_le_bytes(word));
        }

        f.write_str("0x")?;
        let mut significant = bytes.iter().rev().skip_while(|b| **b == 0);
        if let Some(first) = significant.next() {
            write!(f, "{first:x}")?;
        }
        for b in significant {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

/// Compares two equal-length little-endian integers.
pub(crate) fn cmp_le(a: &[u8], b: &[u8]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    a.iter().rev().cmp(b.iter().rev())
}
