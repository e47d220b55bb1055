use super::{erased, Tuple};
use crate::core::{Error, Result};
use std::any::{Any, TypeId};
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

/// Element of a tuple whose static type was erased.
///
/// Equality and hash go through the dynamic type, so values of different
/// types are never equal.
pub trait DynElement: Any + Debug {
    fn as_any(&self) -> &dyn Any;

    fn dyn_eq(&self, other: &dyn DynElement) -> bool;

    fn dyn_hash(&self, state: &mut dyn Hasher);
}

impl<T: Any + PartialEq + Hash + Debug> DynElement for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn DynElement) -> bool {
        other.as_any().downcast_ref::<T>() == Some(self)
    }

    fn dyn_hash(&self, mut state: &mut dyn Hasher) {
        TypeId::of::<T>().hash(&mut state);
        self.hash(&mut state);
    }
}

impl PartialEq for dyn DynElement {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other)
    }
}

impl Eq for dyn DynElement {}

impl Hash for dyn DynElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dyn_hash(state);
    }
}

/// Tuple of any arity, with elements of one type.
///
/// Tuples grown past the largest fixed arity hold `Box<dyn DynElement>`, which
/// [`Tuple::element_at`] looks through.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TupleXXL<E>(Box<[E]>);

impl<E> TupleXXL<E> {
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Result<&E> {
        Error::check_index(index, self.arity())?;
        Ok(&self.0[index])
    }

    pub fn as_slice(&self) -> &[E] {
        &self.0
    }

    pub fn into_values(self) -> Vec<E> {
        self.0.into_vec()
    }

    pub fn cons(self, head: E) -> Self {
        let mut values = Vec::with_capacity(self.arity() + 1);
        values.push(head);
        values.extend(self.into_values());
        Self::from(values)
    }
}

impl<E> From<Vec<E>> for TupleXXL<E> {
    fn from(values: Vec<E>) -> Self {
        Self(values.into_boxed_slice())
    }
}

impl<E: Any> Tuple for TupleXXL<E> {
    fn arity(&self) -> usize {
        self.0.len()
    }

    fn element_at(&self, index: usize) -> Result<&dyn Any> {
        Ok(erased(self.get(index)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed() {
        let tuple = TupleXXL::from((0..20).collect::<Vec<u32>>());
        assert_eq!(tuple.arity(), 20);
        assert_eq!(tuple.get(19), Ok(&19));
        assert_eq!(tuple.element_as::<u32>(7), Ok(&7));
        assert_eq!(
            tuple.get(20),
            Err(Error::IndexOutOfRange {
                index: 20,
                size: 20
            })
        );
    }

    #[test]
    fn erased() {
        let tuple = TupleXXL::from(vec![Box::new(1u8) as Box<dyn Any>, Box::new("b")]);
        assert_eq!(tuple.element_as::<u8>(0), Ok(&1));
        assert_eq!(tuple.element_as::<&str>(1), Ok(&"b"));
        assert!(tuple.element_as::<u8>(1).is_err());
    }

    #[test]
    fn dyn_elements() {
        let tuple = TupleXXL::from(vec![Box::new(1u8) as Box<dyn DynElement>, Box::new('b')]);
        assert_eq!(tuple.element_as::<u8>(0), Ok(&1));
        assert_eq!(tuple.element_as::<char>(1), Ok(&'b'));
        assert_eq!(
            tuple,
            TupleXXL::from(vec![Box::new(1u8) as Box<dyn DynElement>, Box::new('b')])
        );
        assert_ne!(
            tuple,
            TupleXXL::from(vec![Box::new(1u16) as Box<dyn DynElement>, Box::new('b')])
        );
    }

    #[test]
    fn cons() {
        let tuple = TupleXXL::from(vec!['b', 'c']).cons('a');
        assert_eq!(tuple.as_slice(), &['a', 'b', 'c']);
        assert_eq!(tuple, TupleXXL::from(vec!['a', 'b', 'c']));
    }
}
