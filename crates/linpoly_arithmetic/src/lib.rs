//! # `linpoly_arithmetic`
//!
//! This crate contains the field arithmetic that `linpoly` polynomials are
//! generic over. The [`Coefficient`] trait extends [`ff::Field`] with the few
//! capabilities a sparse linear form needs beyond ring operations: a canonical
//! little-endian encoding, a total order on canonical representatives, and a
//! notion of "negative" residues used when rendering constraints.
//!
//! Two families of fields are provided out of the box: the Pasta scalar
//! fields ([`Fp`], [`Fq`]) used by production circuits, and [`Zp`], a small
//! prime field whose modulus is chosen at compile time.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

mod coefficient;
mod pasta;
mod zp;

pub use coefficient::Coefficient;
pub use ff::Field;
pub use pasta_curves::{Fp, Fq};
pub use zp::Zp;
