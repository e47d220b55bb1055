use super::{erased, Component, DynElement, Tuple, TupleXXL};
use crate::core::{Error, Result};
use std::any::Any;

macro_rules! same {
    ($_t:ident, $e:ty) => {
        $e
    };
}

macro_rules! fixed_tuple {
    (@cons [next $next:ident] $name:ident [$($T:ident $i:tt),*]) => {
        impl<$($T),*> $name<$($T),*> {
            /// Tuple with head prepended.
            pub fn cons<H>(self, head: H) -> $next<H, $($T),*> {
                $next(head, $(self.$i),*)
            }
        }
    };
    (@cons [xxl] $name:ident [$($T:ident $i:tt),*]) => {
        impl<$($T: DynElement),*> $name<$($T),*> {
            /// Past the largest fixed arity elements are erased.
            pub fn cons<H: DynElement>(self, head: H) -> TupleXXL<Box<dyn DynElement>> {
                TupleXXL::from(vec![Box::new(head) as Box<dyn DynElement> $(, Box::new(self.$i))*])
            }
        }
    };
    (@component $name:ident $gens:tt; $($T:ident $i:tt $k:tt),*) => {
        $(fixed_tuple!(@component_one $name $gens $T $i $k);)*
    };
    (@component_one $name:ident [$($G:ident),*] $T:ident $i:tt $k:tt) => {
        impl<$($G),*> Component<$k> for $name<$($G),*> {
            type Output = $T;

            fn component(&self) -> &$T {
                &self.$i
            }
        }
    };
    (
        $name:ident, $arity:literal, $prev:ident, $cons:tt;
        $HT:ident $hv:ident $hi:tt $hk:tt $(, $T:ident $v:ident $i:tt $k:tt)*
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name<$HT $(, $T)*>(pub $HT $(, pub $T)*);

        impl<$HT: Any $(, $T: Any)*> Tuple for $name<$HT $(, $T)*> {
            fn arity(&self) -> usize {
                $arity
            }

            fn element_at(&self, index: usize) -> Result<&dyn Any> {
                match index {
                    $hi => Ok(erased(&self.$hi)),
                    $($i => Ok(erased(&self.$i)),)*
                    _ => Err(Error::IndexOutOfRange { index, size: $arity }),
                }
            }
        }

        impl<$HT $(, $T)*> $name<$HT $(, $T)*> {
            pub fn head(&self) -> &$HT {
                &self.$hi
            }

            /// Splits off head from the rest.
            pub fn uncons(self) -> ($HT, $prev<$($T),*>) {
                (self.$hi, $prev::from(($(self.$i,)*)))
            }

            pub fn into_tuple(self) -> ($HT, $($T,)*) {
                (self.$hi, $(self.$i,)*)
            }
        }

        impl<$HT $(, $T)*> From<($HT, $($T,)*)> for $name<$HT $(, $T)*> {
            fn from(tuple: ($HT, $($T,)*)) -> Self {
                Self(tuple.$hi $(, tuple.$i)*)
            }
        }

        impl<E> From<[E; $arity]> for $name<same!($HT, E) $(, same!($T, E))*> {
            fn from(values: [E; $arity]) -> Self {
                let [$hv $(, $v)*] = values;
                Self($hv $(, $v)*)
            }
        }

        impl<E> TryFrom<Vec<E>> for $name<same!($HT, E) $(, same!($T, E))*> {
            type Error = Error;

            fn try_from(values: Vec<E>) -> Result<Self> {
                let values = <[E; $arity]>::try_from(values).map_err(|values| {
                    Error::ArityMismatch {
                        expected: $arity,
                        found: values.len(),
                    }
                })?;
                Ok(Self::from(values))
            }
        }

        impl<E> $name<same!($HT, E) $(, same!($T, E))*> {
            pub fn into_array(self) -> [E; $arity] {
                [self.$hi $(, self.$i)*]
            }
        }

        fixed_tuple!(@component $name [$HT $(, $T)*]; $HT $hi $hk $(, $T $i $k)*);
        fixed_tuple!(@cons $cons $name [$HT $hi $(, $T $i)*]);
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tuple0;

impl Tuple for Tuple0 {
    fn arity(&self) -> usize {
        0
    }

    fn element_at(&self, index: usize) -> Result<&dyn Any> {
        Err(Error::IndexOutOfRange { index, size: 0 })
    }
}

impl Tuple0 {
    pub fn cons<H>(self, head: H) -> Tuple1<H> {
        Tuple1(head)
    }

    pub fn into_tuple(self) {}

    pub fn into_array<E>(self) -> [E; 0] {
        []
    }
}

impl From<()> for Tuple0 {
    fn from(_: ()) -> Self {
        Tuple0
    }
}

impl<E> From<[E; 0]> for Tuple0 {
    fn from(_: [E; 0]) -> Self {
        Tuple0
    }
}

impl<E> TryFrom<Vec<E>> for Tuple0 {
    type Error = Error;

    fn try_from(values: Vec<E>) -> Result<Self> {
        if values.is_empty() {
            Ok(Tuple0)
        } else {
            Err(Error::ArityMismatch {
                expected: 0,
                found: values.len(),
            })
        }
    }
}

fixed_tuple! { Tuple1, 1, Tuple0, [next Tuple2]; T1 t1 0 1 }
fixed_tuple! { Tuple2, 2, Tuple1, [next Tuple3]; T1 t1 0 1, T2 t2 1 2 }
fixed_tuple! { Tuple3, 3, Tuple2, [next Tuple4]; T1 t1 0 1, T2 t2 1 2, T3 t3 2 3 }
fixed_tuple! { Tuple4, 4, Tuple3, [next Tuple5]; T1 t1 0 1, T2 t2 1 2, T3 t3 2 3, T4 t4 3 4 }
fixed_tuple! { Tuple5, 5, Tuple4, [next Tuple6]; T1 t1 0 1, T2 t2 1 2, T3 t3 2 3, T4 t4 3 4, T5 t5 4 5 }
fixed_tuple! { Tuple6, 6, Tuple5, [next Tuple7]; T1 t1 0 1, T2 t2 1 2, T3 t3 2 3, T4 t4 3 4, T5 t5 4 5, T6 t6 5 6 }
fixed_tuple! { Tuple7, 7, Tuple6, [next Tuple8]; T1 t1 0 1, T2 t2 1 2, T3 t3 2 3, T4 t4 3 4, T5 t5 4 5, T6 t6 5 6, T7 t7 6 7 }
fixed_tuple! { Tuple8, 8, Tuple7, [next Tuple9]; T1 t1 0 1, T2 t2 1 2, T3 t3 2 3, T4 t4 3 4, T5 t5 4 5, T6 t6 5 6, T7 t7 6 7, T8 t8 7 8 }
fixed_tuple! { Tuple9, 9, Tuple8, [next Tuple10]; T1 t1 0 1, T2 t2 1 2, T3 t3 2 3, T4 t4 3 4, T5 t5 4 5, T6 t6 5 6, T7 t7 6 7, T8 t8 7 8, T9 t9 8 9 }
fixed_tuple! { Tuple10, 10, Tuple9, [next Tuple11]; T1 t1 0 1, T2 t2 1 2, T3 t3 2 3, T4 t4 3 4, T5 t5 4 5, T6 t6 5 6, T7 t7 6 7, T8 t8 7 8, T9 t9 8 9, T10 t10 9 10 }
fixed_tuple! { Tuple11, 11, Tuple10, [next Tuple12]; T1 t1 0 1, T2 t2 1 2, T3 t3 2 3, T4 t4 3 4, T5 t5 4 5, T6 t6 5 6, T7 t7 6 7, T8 t8 7 8, T9 t9 8 9, T10 t10 9 10, T11 t11 10 11 }
fixed_tuple! { Tuple12, 12, Tuple11, [next Tuple13]; T1 t1 0 1, T2 t2 1 2, T3 t3 2 3, T4 t4 3 4, T5 t5 4 5, T6 t6 5 6, T7 t7 6 7, T8 t8 7 8, T9 t9 8 9, T10 t10 9 10, T11 t11 10 11, T12 t12 11 12 }
fixed_tuple! { Tuple13, 13, Tuple12, [next Tuple14]; T1 t1 0 1, T2 t2 1 2, T3 t3 2 3, T4 t4 3 4, T5 t5 4 5, T6 t6 5 6, T7 t7 6 7, T8 t8 7 8, T9 t9 8 9, T10 t10 9 10, T11 t11 10 11, T12 t12 11 12, T13 t13 12 13 }
fixed_tuple! { Tuple14, 14, Tuple13, [next Tuple15]; T1 t1 0 1, T2 t2 1 2, T3 t3 2 3, T4 t4 3 4, T5 t5 4 5, T6 t6 5 6, T7 t7 6 7, T8 t8 7 8, T9 t9 8 9, T10 t10 9 10, T11 t11 10 11, T12 t12 11 12, T13 t13 12 13, T14 t14 13 14 }
fixed_tuple! { Tuple15, 15, Tuple14, [next Tuple16]; T1 t1 0 1, T2 t2 1 2, T3 t3 2 3, T4 t4 3 4, T5 t5 4 5, T6 t6 5 6, T7 t7 6 7, T8 t8 7 8, T9 t9 8 9, T10 t10 9 10, T11 t11 10 11, T12 t12 11 12, T13 t13 12 13, T14 t14 13 14, T15 t15 14 15 }
fixed_tuple! { Tuple16, 16, Tuple15, [next Tuple17]; T1 t1 0 1, T2 t2 1 2, T3 t3 2 3, T4 t4 3 4, T5 t5 4 5, T6 t6 5 6, T7 t7 6 7, T8 t8 7 8, T9 t9 8 9, T10 t10 9 10, T11 t11 10 11, T12 t12 11 12, T13 t13 12 13, T14 t14 13 14, T15 t15 14 15, T16 t16 15 16 }
fixed_tuple! { Tuple17, 17, Tuple16, [next Tuple18]; T1 t1 0 1, T2 t2 1 2, T3 t3 2 3, T4 t4 3 4, T5 t5 4 5, T6 t6 5 6, T7 t7 6 7, T8 t8 7 8, T9 t9 8 9, T10 t10 9 10, T11 t11 10 11, T12 t12 11 12, T13 t13 12 13, T14 t14 13 14, T15 t15 14 15, T16 t16 15 16, T17 t17 16 17 }
fixed_tuple! { Tuple18, 18, Tuple17, [xxl]; T1 t1 0 1, T2 t2 1 2, T3 t3 2 3, T4 t4 3 4, T5 t5 4 5, T6 t6 5 6, T7 t7 6 7, T8 t8 7 8, T9 t9 8 9, T10 t10 9 10, T11 t11 10 11, T12 t12 11 12, T13 t13 12 13, T14 t14 13 14, T15 t15 14 15, T16 t16 15 16, T17 t17 16 17, T18 t18 17 18 }
