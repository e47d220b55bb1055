//! # Goal
//! Collections whose transformations stay in the family of the collection they
//! started from, without each operation knowing the concrete collection.
//!
//! # Features
//! - Capabilities, through Traversable family of traits.
//!      - Responsible for: What can be done with a collection? (iterate, fold, map, index, grow)
//! - Construction, through Factory and Builder.
//!      - Responsible for: How is a collection of a family built from elements?
//! - Containers, through ArrayBuffer and the arrays built on it.
//!      - Responsible for: Where are the elements stored and how does storage grow?
//! - Tuples, through fixed arity types and one variable arity fallback.
//!      - Responsible for: Which element is at which position, and of what type?
//!
//! # Architecture
//! - Traversable - iteration by reference and optionally known size.
//! - Foldable - folds and predicates over any Traversable.
//! - Functor - map into the same kind of container.
//! - Transformable - filter, flat_map, span, ... into the same family, through family's Factory.
//! - Seq - positional access and positional transformations.
//! - MutableSeq, Buffer - in place replacement and growth.
//! - Factory - stateless description of how to build a collection, Builder is its single use state.
//! - CollectionFamily - ties a collection type constructor to its Factory.
//!
//! Generic operations live in `core::ops` and are given a Factory, so every family
//! shares them.

//? Important decisions:
//? - Indices are usize, so there are no negative index failures.
//? - Failed validation never leaves a partial mutation behind.
//? - Builders are consumed by build, so they can't be reused.
//? - Lazy views are plain iterators.

pub mod collection;
pub mod core;
#[cfg(feature = "tuple")]
pub mod tuple;
// Generic things
pub mod util;
