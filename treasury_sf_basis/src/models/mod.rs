//! Core domain types for the basis pipeline.

pub mod basis;
pub mod tenor;

pub use basis::{BasisRow, BasisTable, TenorPair};
pub use tenor::{ParseTenorError, Tenor};
