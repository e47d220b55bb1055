use super::*;
use crate::core::Result;
use std::any::Any;

/// Tuple of elements of one type, of whichever arity it was built with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyTuple<E> {
    T0(Tuple0),
    T1(Tuple1<E>),
    T2(Tuple2<E, E>),
    T3(Tuple3<E, E, E>),
    T4(Tuple4<E, E, E, E>),
    T5(Tuple5<E, E, E, E, E>),
    T6(Tuple6<E, E, E, E, E, E>),
    T7(Tuple7<E, E, E, E, E, E, E>),
    T8(Tuple8<E, E, E, E, E, E, E, E>),
    T9(Tuple9<E, E, E, E, E, E, E, E, E>),
    T10(Tuple10<E, E, E, E, E, E, E, E, E, E>),
    T11(Tuple11<E, E, E, E, E, E, E, E, E, E, E>),
    T12(Tuple12<E, E, E, E, E, E, E, E, E, E, E, E>),
    T13(Tuple13<E, E, E, E, E, E, E, E, E, E, E, E, E>),
    T14(Tuple14<E, E, E, E, E, E, E, E, E, E, E, E, E, E>),
    T15(Tuple15<E, E, E, E, E, E, E, E, E, E, E, E, E, E, E>),
    T16(Tuple16<E, E, E, E, E, E, E, E, E, E, E, E, E, E, E, E>),
    T17(Tuple17<E, E, E, E, E, E, E, E, E, E, E, E, E, E, E, E, E>),
    T18(Tuple18<E, E, E, E, E, E, E, E, E, E, E, E, E, E, E, E, E, E>),
    Xxl(TupleXXL<E>),
}

/// Builds tuple of fixed arity if there is one for the number of values.
pub fn from_values<E>(values: Vec<E>) -> AnyTuple<E> {
    match values.len() {
        0 => AnyTuple::T0(Tuple0),
        1 => fixed::<E, 1, _>(values, AnyTuple::T1),
        2 => fixed::<E, 2, _>(values, AnyTuple::T2),
        3 => fixed::<E, 3, _>(values, AnyTuple::T3),
        4 => fixed::<E, 4, _>(values, AnyTuple::T4),
        5 => fixed::<E, 5, _>(values, AnyTuple::T5),
        6 => fixed::<E, 6, _>(values, AnyTuple::T6),
        7 => fixed::<E, 7, _>(values, AnyTuple::T7),
        8 => fixed::<E, 8, _>(values, AnyTuple::T8),
        9 => fixed::<E, 9, _>(values, AnyTuple::T9),
        10 => fixed::<E, 10, _>(values, AnyTuple::T10),
        11 => fixed::<E, 11, _>(values, AnyTuple::T11),
        12 => fixed::<E, 12, _>(values, AnyTuple::T12),
        13 => fixed::<E, 13, _>(values, AnyTuple::T13),
        14 => fixed::<E, 14, _>(values, AnyTuple::T14),
        15 => fixed::<E, 15, _>(values, AnyTuple::T15),
        16 => fixed::<E, 16, _>(values, AnyTuple::T16),
        17 => fixed::<E, 17, _>(values, AnyTuple::T17),
        18 => fixed::<E, 18, _>(values, AnyTuple::T18),
        _ => AnyTuple::Xxl(TupleXXL::from(values)),
    }
}

fn fixed<E, const N: usize, T: From<[E; N]>>(
    values: Vec<E>,
    variant: fn(T) -> AnyTuple<E>,
) -> AnyTuple<E> {
    match <[E; N]>::try_from(values) {
        Ok(values) => variant(T::from(values)),
        Err(values) => AnyTuple::Xxl(TupleXXL::from(values)),
    }
}

impl<E> AnyTuple<E> {
    pub fn arity(&self) -> usize {
        match self {
            AnyTuple::T0(_) => 0,
            AnyTuple::T1(_) => 1,
            AnyTuple::T2(_) => 2,
            AnyTuple::T3(_) => 3,
            AnyTuple::T4(_) => 4,
            AnyTuple::T5(_) => 5,
            AnyTuple::T6(_) => 6,
            AnyTuple::T7(_) => 7,
            AnyTuple::T8(_) => 8,
            AnyTuple::T9(_) => 9,
            AnyTuple::T10(_) => 10,
            AnyTuple::T11(_) => 11,
            AnyTuple::T12(_) => 12,
            AnyTuple::T13(_) => 13,
            AnyTuple::T14(_) => 14,
            AnyTuple::T15(_) => 15,
            AnyTuple::T16(_) => 16,
            AnyTuple::T17(_) => 17,
            AnyTuple::T18(_) => 18,
            AnyTuple::Xxl(tuple) => tuple.arity(),
        }
    }

    /// Tuple with head prepended, one arity up.
    pub fn cons(self, head: E) -> Self {
        match self {
            AnyTuple::T0(tuple) => AnyTuple::T1(tuple.cons(head)),
            AnyTuple::T1(tuple) => AnyTuple::T2(tuple.cons(head)),
            AnyTuple::T2(tuple) => AnyTuple::T3(tuple.cons(head)),
            AnyTuple::T3(tuple) => AnyTuple::T4(tuple.cons(head)),
            AnyTuple::T4(tuple) => AnyTuple::T5(tuple.cons(head)),
            AnyTuple::T5(tuple) => AnyTuple::T6(tuple.cons(head)),
            AnyTuple::T6(tuple) => AnyTuple::T7(tuple.cons(head)),
            AnyTuple::T7(tuple) => AnyTuple::T8(tuple.cons(head)),
            AnyTuple::T8(tuple) => AnyTuple::T9(tuple.cons(head)),
            AnyTuple::T9(tuple) => AnyTuple::T10(tuple.cons(head)),
            AnyTuple::T10(tuple) => AnyTuple::T11(tuple.cons(head)),
            AnyTuple::T11(tuple) => AnyTuple::T12(tuple.cons(head)),
            AnyTuple::T12(tuple) => AnyTuple::T13(tuple.cons(head)),
            AnyTuple::T13(tuple) => AnyTuple::T14(tuple.cons(head)),
            AnyTuple::T14(tuple) => AnyTuple::T15(tuple.cons(head)),
            AnyTuple::T15(tuple) => AnyTuple::T16(tuple.cons(head)),
            AnyTuple::T16(tuple) => AnyTuple::T17(tuple.cons(head)),
            AnyTuple::T17(tuple) => AnyTuple::T18(tuple.cons(head)),
            AnyTuple::T18(tuple) => {
                let mut values = Vec::with_capacity(19);
                values.push(head);
                values.extend(tuple.into_array());
                AnyTuple::Xxl(TupleXXL::from(values))
            }
            AnyTuple::Xxl(tuple) => AnyTuple::Xxl(tuple.cons(head)),
        }
    }

    pub fn into_values(self) -> Vec<E> {
        match self {
            AnyTuple::T0(_) => Vec::new(),
            AnyTuple::T1(tuple) => tuple.into_array().into(),
            AnyTuple::T2(tuple) => tuple.into_array().into(),
            AnyTuple::T3(tuple) => tuple.into_array().into(),
            AnyTuple::T4(tuple) => tuple.into_array().into(),
            AnyTuple::T5(tuple) => tuple.into_array().into(),
            AnyTuple::T6(tuple) => tuple.into_array().into(),
            AnyTuple::T7(tuple) => tuple.into_array().into(),
            AnyTuple::T8(tuple) => tuple.into_array().into(),
            AnyTuple::T9(tuple) => tuple.into_array().into(),
            AnyTuple::T10(tuple) => tuple.into_array().into(),
            AnyTuple::T11(tuple) => tuple.into_array().into(),
            AnyTuple::T12(tuple) => tuple.into_array().into(),
            AnyTuple::T13(tuple) => tuple.into_array().into(),
            AnyTuple::T14(tuple) => tuple.into_array().into(),
            AnyTuple::T15(tuple) => tuple.into_array().into(),
            AnyTuple::T16(tuple) => tuple.into_array().into(),
            AnyTuple::T17(tuple) => tuple.into_array().into(),
            AnyTuple::T18(tuple) => tuple.into_array().into(),
            AnyTuple::Xxl(tuple) => tuple.into_values(),
        }
    }
}

impl<E: Any> Tuple for AnyTuple<E> {
    fn arity(&self) -> usize {
        AnyTuple::arity(self)
    }

    fn element_at(&self, index: usize) -> Result<&dyn Any> {
        match self {
            AnyTuple::T0(tuple) => tuple.element_at(index),
            AnyTuple::T1(tuple) => tuple.element_at(index),
            AnyTuple::T2(tuple) => tuple.element_at(index),
            AnyTuple::T3(tuple) => tuple.element_at(index),
            AnyTuple::T4(tuple) => tuple.element_at(index),
            AnyTuple::T5(tuple) => tuple.element_at(index),
            AnyTuple::T6(tuple) => tuple.element_at(index),
            AnyTuple::T7(tuple) => tuple.element_at(index),
            AnyTuple::T8(tuple) => tuple.element_at(index),
            AnyTuple::T9(tuple) => tuple.element_at(index),
            AnyTuple::T10(tuple) => tuple.element_at(index),
            AnyTuple::T11(tuple) => tuple.element_at(index),
            AnyTuple::T12(tuple) => tuple.element_at(index),
            AnyTuple::T13(tuple) => tuple.element_at(index),
            AnyTuple::T14(tuple) => tuple.element_at(index),
            AnyTuple::T15(tuple) => tuple.element_at(index),
            AnyTuple::T16(tuple) => tuple.element_at(index),
            AnyTuple::T17(tuple) => tuple.element_at(index),
            AnyTuple::T18(tuple) => tuple.element_at(index),
            AnyTuple::Xxl(tuple) => tuple.element_at(index),
        }
    }
}

impl<E> From<Vec<E>> for AnyTuple<E> {
    fn from(values: Vec<E>) -> Self {
        from_values(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;

    #[test]
    fn dispatch_on_length() {
        assert_eq!(from_values(Vec::<u8>::new()), AnyTuple::T0(Tuple0));
        assert_eq!(from_values(vec![1]), AnyTuple::T1(Tuple1(1)));
        assert_eq!(from_values(vec![1, 2, 3]), AnyTuple::T3(Tuple3(1, 2, 3)));
        assert!(matches!(from_values(vec![0; 18]), AnyTuple::T18(_)));
        assert!(matches!(from_values(vec![0; 19]), AnyTuple::Xxl(_)));
    }

    #[test]
    fn arity_and_elements() {
        for n in 0..25usize {
            let values = (0..n).collect::<Vec<_>>();
            let tuple = from_values(values.clone());
            assert_eq!(Tuple::arity(&tuple), n);
            for i in 0..n {
                assert_eq!(tuple.element_as::<usize>(i), Ok(&i));
            }
            assert_eq!(
                tuple.element_at(n).map(|_| ()),
                Err(Error::IndexOutOfRange { index: n, size: n })
            );
            assert_eq!(tuple.into_values(), values);
        }
    }

    #[test]
    fn boxed_elements_at_any_arity() {
        for n in [2, 18, 19] {
            let tuple = from_values(
                (0..n)
                    .map(|i| Box::new(i as i32) as Box<dyn Any>)
                    .collect::<Vec<_>>(),
            );
            assert_eq!(tuple.element_as::<i32>(0), Ok(&0));
            assert_eq!(tuple.element_as::<i32>(1), Ok(&1));
            assert_eq!(tuple.element_as::<i32>(n - 1), Ok(&(n as i32 - 1)));
        }
    }

    #[test]
    fn cons_walks_arity() {
        let mut tuple = from_values(Vec::<i32>::new());
        for i in (0..20).rev() {
            tuple = tuple.cons(i);
            assert_eq!(tuple.arity(), (20 - i) as usize);
        }
        assert!(matches!(tuple, AnyTuple::Xxl(_)));
        assert_eq!(tuple.into_values(), (0..20).collect::<Vec<_>>());
    }
}
