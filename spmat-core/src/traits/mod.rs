//! Abstract interfaces for SPMAT
//!
//! The element constraint and the read-only view used by renderers and
//! validators.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::MatrixAccess;
