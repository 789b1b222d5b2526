//! Deterministic structural encoding of polynomials.
//!
//! [`Polynomial::write`] streams a polynomial into any [`Buffer`]: first the
//! constant, then the number of terms, then each `(variable, coefficient)`
//! pair in ascending variable order. Since the term mapping is canonical,
//! structurally equal polynomials always produce identical streams. Two
//! buffers are provided:
//!
//! * `Vec<u8>` receives the byte layout understood by
//!   [`Polynomial::from_bytes`]:
//!
//!   ```text
//!   repr(constant) || u64le(n) || (u64le(var) || repr(coeff)) * n
//!   ```
//!
//!   where `repr` is the field's canonical little-endian encoding.
//! * [`Elements`] collects field elements (lengths and variable indices are
//!   embedded with `From<u64>`), ready to be absorbed by an algebraic hash
//!   or transcript.
//!
//! Note that these encodings are structural: `p` and `-p` are equal as
//! constraints but encode differently. Encode
//! [`normalize_sign`](Polynomial::normalize_sign) when a sign-insensitive
//! encoding is needed.

use linpoly_arithmetic::Coefficient;

use alloc::{collections::BTreeMap, vec::Vec};

use crate::{Error, Polynomial, Reduced, Result, Var};

const TAG_CONSTANT: u8 = 0;
const TAG_POLYNOMIAL: u8 = 1;

/// Destination for the encoded parts of a polynomial.
pub trait Buffer<F: Coefficient> {
    /// Writes a field element.
    fn write_element(&mut self, value: &F) -> Result<()>;

    /// Writes a variable identifier.
    fn write_var(&mut self, var: Var) -> Result<()>;

    /// Writes the length of the sequence that follows.
    fn write_len(&mut self, len: usize) -> Result<()>;
}

impl<F: Coefficient> Buffer<F> for Vec<u8> {
    fn write_element(&mut self, value: &F) -> Result<()> {
        self.extend_from_slice(value.to_canonical().as_ref());
        Ok(())
    }

    fn write_var(&mut self, var: Var) -> Result<()> {
        self.extend_from_slice(&(var.0 as u64).to_le_bytes());
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        self.extend_from_slice(&(len as u64).to_le_bytes());
        Ok(())
    }
}

/// A [`Buffer`] that collects field elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Elements<F>(pub Vec<F>);

impl<F> Elements<F> {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Elements(Vec::new())
    }

    /// Returns the collected elements.
    pub fn into_inner(self) -> Vec<F> {
        self.0
    }
}

impl<F: Coefficient> Buffer<F> for Elements<F> {
    fn write_element(&mut self, value: &F) -> Result<()> {
        self.0.push(*value);
        Ok(())
    }

    fn write_var(&mut self, var: Var) -> Result<()> {
        self.0.push(F::from(var.0 as u64));
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        self.0.push(F::from(len as u64));
        Ok(())
    }
}

impl<F: Coefficient> Polynomial<F> {
    /// Streams this polynomial into `buf`.
    pub fn write<B: Buffer<F> + ?Sized>(&self, buf: &mut B) -> Result<()> {
        buf.write_element(&self.constant())?;
        buf.write_len(self.variable_count())?;
        for (var, coeff) in self.terms() {
            buf.write_var(*var)?;
            buf.write_element(coeff)?;
        }
        Ok(())
    }

    /// Encodes this polynomial as bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        self.write(&mut bytes)
            .expect("writing to a byte vector cannot fail");
        bytes
    }

    /// Decodes the output of [`to_bytes`](Self::to_bytes), rejecting every
    /// input that does not describe a valid polynomial.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = Reader::new(bytes);
        let polynomial = reader.polynomial()?;
        reader.finish()?;
        Ok(polynomial)
    }
}

impl<F: Coefficient> Reduced<F> {
    /// Encodes this value as a tag byte followed by either the constant or
    /// the polynomial encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Reduced::Constant(c) => {
                let mut bytes = alloc::vec![TAG_CONSTANT];
                bytes.extend_from_slice(c.to_canonical().as_ref());
                bytes
            }
            Reduced::Polynomial(p) => {
                let mut bytes = alloc::vec![TAG_POLYNOMIAL];
                p.write(&mut bytes)
                    .expect("writing to a byte vector cannot fail");
                bytes
            }
        }
    }

    /// Decodes the output of [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = Reader::new(bytes);
        let reduced = match reader.u8()? {
            TAG_CONSTANT => Reduced::Constant(reader.element()?),
            TAG_POLYNOMIAL => Reduced::Polynomial(reader.polynomial()?),
            tag => return Err(Error::InvalidTag(tag)),
        };
        reader.finish()?;
        Ok(reduced)
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Reader { bytes }
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8]> {
        if self.bytes.len() < needed {
            return Err(Error::UnexpectedEof {
                needed,
                remaining: self.bytes.len(),
            });
        }
        let (head, tail) = self.bytes.split_at(needed);
        self.bytes = tail;
        Ok(head)
    }

    fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn u64(&mut self) -> Result<u64> {
        let mut word = [0u8; 8];
        word.copy_from_slice(self.take(8)?);
        Ok(u64::from_le_bytes(word))
    }

    fn usize(&mut self) -> Result<usize> {
        let value = self.u64()?;
        usize::try_from(value).map_err(|_| Error::VariableOutOfRange(value))
    }

    fn element<F: Coefficient>(&mut self) -> Result<F> {
        let mut repr = F::Repr::default();
        let len = repr.as_ref().len();
        repr.as_mut().copy_from_slice(self.take(len)?);
        F::from_canonical(repr).ok_or(Error::NonCanonicalElement)
    }

    fn polynomial<F: Coefficient>(&mut self) -> Result<Polynomial<F>> {
        let constant = self.element()?;
        let count = self.usize()?;
        if count == 0 {
            return Err(Error::EmptyTerms);
        }

        let mut terms = BTreeMap::new();
        let mut previous: Option<Var> = None;
        for _ in 0..count {
            let var = Var(self.usize()?);
            if let Some(previous) = previous.filter(|previous| *previous >= var) {
                return Err(Error::UnorderedVariables {
                    previous,
                    next: var,
                });
            }
            let coeff: F = self.element()?;
            if coeff.is_zero_vartime() {
                return Err(Error::ZeroCoefficient(var));
            }
            terms.insert(var, coeff);
            previous = Some(var);
        }

        match Polynomial::from_nonzero(constant, terms) {
            Reduced::Polynomial(polynomial) => Ok(polynomial),
            Reduced::Constant(_) => Err(Error::EmptyTerms),
        }
    }

    fn finish(self) -> Result<()> {
        match self.bytes.len() {
            0 => Ok(()),
            trailing => Err(Error::TrailingBytes(trailing)),
        }
    }
}
