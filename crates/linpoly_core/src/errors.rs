use crate::Var;

/// Result type used by the fallible parts of this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while decoding polynomials.
///
/// The algebra itself is total; only untrusted bytes can fail to describe a
/// valid [`Polynomial`](crate::Polynomial).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input ended before a complete value could be read.
    #[error("unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Bytes required by the value being read.
        needed: usize,
        /// Bytes left in the input.
        remaining: usize,
    },

    /// Bytes remained after a complete value was decoded.
    #[error("{0} trailing bytes after encoded value")]
    TrailingBytes(usize),

    /// A field element encoding was not strictly below the modulus.
    #[error("field element encoding is not canonical")]
    NonCanonicalElement,

    /// A term was encoded with a zero coefficient.
    #[error("zero coefficient for variable {0}")]
    ZeroCoefficient(Var),

    /// Terms were not encoded in strictly ascending variable order.
    #[error("variable {next} does not follow {previous} in ascending order")]
    UnorderedVariables {
        /// The variable of the preceding term.
        previous: Var,
        /// The offending variable.
        next: Var,
    },

    /// A polynomial was encoded without any variable terms.
    #[error("polynomial encoding has no variable terms")]
    EmptyTerms,

    /// An encoded [`Reduced`](crate::Reduced) carried an unknown tag.
    #[error("invalid tag byte {0:#04x}")]
    InvalidTag(u8),

    /// A variable index or length does not fit in `usize` on this target.
    #[error("value {0} exceeds the addressable range")]
    VariableOutOfRange(u64),
}
