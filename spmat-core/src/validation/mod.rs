//! Validation utilities for SPMAT
//!
//! Pure functions over coordinates and shapes, with no I/O.

pub mod bounds;
pub mod shape;

pub use bounds::{validate_coord, validate_stored_coords};
pub use shape::{product_shape, validate_inner_dimension, validate_same_shape};
