//! Linear algebra routines.

pub mod blas;
pub mod view;
