//! Plain-text matrix layouts
//!
//! Pure string encoding and decoding; reading and writing files is left to
//! the caller.

pub mod constants;
pub mod header;
pub mod text;

pub use header::{Header, HeaderStyle};
pub use text::{
    parse_entry, parse_matrix, parse_matrix_with, render_matrix, write_matrix, ParseOptions,
};
