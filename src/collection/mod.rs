//! Concrete containers.
//!
//! [`ArrayBuffer`] is the growable buffer the other arrays are built through.

mod array_buffer;
mod immutable_array;
mod mutable_array;

pub use array_buffer::*;
pub use immutable_array::*;
pub use mutable_array::*;
