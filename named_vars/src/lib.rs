//! Structs of named scalar variables viewed as fixed-size vectors.
//!
//! A type such as `Point<T> { x: T, y: T }` implements
//! [`NamedVars<T, 2>`](NamedVars), usually through
//! `#[derive(NamedVars)]` from `named_vars_derive`. The same struct can then
//! hold plain `f64` inputs or seeded dual numbers, and be converted field by
//! field in declaration order.

pub use nalgebra;

use nalgebra::{SVector, Scalar};

pub trait NamedVars<T: Scalar, const N: usize>: Copy {
    const SIZE: usize = N;

    /// Field names, in declaration order.
    const NAMES: [&'static str; N];

    fn to_svector(&self) -> SVector<T, N>;
    fn from_svector(v: &SVector<T, N>) -> Self;

    /// Index of the field called `name`.
    fn index_of(name: &str) -> Option<usize> {
        Self::NAMES.iter().position(|n| *n == name)
    }
}
