//! Capability traits, the factory protocol and the transformations built on them.
//!
//! Capabilities are layered orthogonally:
//! - [`Traversable`] - elements can be visited in order.
//! - [`Foldable`] - reductions, implemented for every traversable.
//! - [`Functor`] - elements can be mapped.
//! - [`Transformable`] - filtering, spanning, .. into the same family.
//! - [`Seq`] - positional access and rebuilding transformations.
//! - [`MutableSeq`], [`Buffer`] - in place mutation.
//!
//! Concrete containers compose these and pick a [`CollectionFamily`] whose
//! [`Factory`] builds the results of their transformations.

mod error;
mod factory;
mod foldable;
mod functor;
mod mutable;
pub mod ops;
mod seq;
mod transformable;
mod traversable;
mod value;

pub use error::*;
pub use factory::*;
pub use foldable::*;
pub use functor::*;
pub use mutable::*;
pub use seq::*;
pub use transformable::*;
pub use traversable::*;
pub use value::*;
