//! # `linpoly`
//!
//! Canonical sparse affine-linear polynomials over finite fields, for
//! building and simplifying arithmetic constraint systems.

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

pub extern crate linpoly_arithmetic as arithmetic;

pub use linpoly_core::*;
