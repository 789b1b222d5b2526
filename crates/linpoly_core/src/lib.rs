//! # `linpoly_core`
//!
//! Canonical sparse affine-linear polynomials
//!
//! $$
//! c + \sum_i a_i \cdot x_i
//! $$
//!
//! over a finite field, the atomic unit of an arithmetic constraint system.
//! A [`Polynomial`] always has at least one variable term and never stores a
//! zero coefficient; any operation that could cancel every term returns a
//! [`Reduced`] so that the degenerate "collapsed to a constant" outcome is
//! observable by the caller instead of being smuggled through an empty
//! polynomial.
//!
//! The crate performs no I/O and keeps no shared state: every operation
//! consumes borrowed inputs and returns fresh values, so independent
//! polynomials can be transformed from any number of threads. See [`batch`]
//! for helpers that do exactly that over slices.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

extern crate alloc;

mod assignment;
pub mod batch;
pub mod encoding;
mod errors;
mod maybe_rayon;
mod polynomial;
mod reduced;
mod var;

pub use assignment::Assignment;
pub use errors::{Error, Result};
pub use polynomial::{Polynomial, merge_coefficients};
pub use reduced::Reduced;
pub use var::{Var, VarAllocator};

pub use linpoly_arithmetic::Coefficient;
