//! Heterogeneous tuples of fixed arity.
//!
//! Arities up to 18 have their own types with statically checked access
//! through [`Component`]. Longer tuples are [`TupleXXL`] and are only accessible
//! through bounds checked [`Tuple::element_at`].

mod any;
mod fixed;
mod xxl;

pub use any::*;
pub use fixed::*;
pub use xxl::*;

use crate::core::{Error, Result};
use std::any::Any;

/// Arity erased view of a tuple.
pub trait Tuple {
    fn arity(&self) -> usize;

    /// Fails with IndexOutOfRange if index isn't in `[0, arity)`.
    fn element_at(&self, index: usize) -> Result<&dyn Any>;

    /// Fails with TypeMismatch if element at index isn't U.
    fn element_as<U: Any>(&self, index: usize) -> Result<&U>
    where
        Self: Sized,
    {
        self.element_at(index)?
            .downcast_ref::<U>()
            .ok_or(Error::TypeMismatch {
                index,
                expected: std::any::type_name::<U>(),
            })
    }
}

/// Element itself, or the value inside it when it is an erased box.
pub(crate) fn erased(element: &dyn Any) -> &dyn Any {
    if let Some(boxed) = element.downcast_ref::<Box<dyn Any>>() {
        &**boxed
    } else if let Some(boxed) = element.downcast_ref::<Box<dyn DynElement>>() {
        DynElement::as_any(&**boxed)
    } else {
        element
    }
}

/// K-th element, 1 based, of a tuple with at least K elements.
pub trait Component<const K: usize> {
    type Output;

    fn component(&self) -> &Self::Output;
}

macro_rules! component_fns {
    ($($name:ident $k:literal,)*) => {
        $(
            #[doc = concat!("Element ", stringify!($k), " of tuple.")]
            pub fn $name<T: Component<$k>>(tuple: &T) -> &T::Output {
                tuple.component()
            }
        )*
    };
}

component_fns! {
    component1 1,
    component2 2,
    component3 3,
    component4 4,
    component5 5,
    component6 6,
    component7 7,
    component8 8,
    component9 9,
    component10 10,
    component11 11,
    component12 12,
    component13 13,
    component14 14,
    component15 15,
    component16 16,
    component17 17,
    component18 18,
}

/// Builds tuple of matching arity from expressions.
///
/// More than 18 elements end up erased in [`TupleXXL`], so each of them must be
/// a [`DynElement`].
#[macro_export]
macro_rules! tuple {
    () => {
        $crate::tuple::Tuple0
    };
    ($e1:expr $(,)?) => {
        $crate::tuple::Tuple1($e1)
    };
    ($e1:expr, $e2:expr $(,)?) => {
        $crate::tuple::Tuple2($e1, $e2)
    };
    ($e1:expr, $e2:expr, $e3:expr $(,)?) => {
        $crate::tuple::Tuple3($e1, $e2, $e3)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr $(,)?) => {
        $crate::tuple::Tuple4($e1, $e2, $e3, $e4)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr, $e5:expr $(,)?) => {
        $crate::tuple::Tuple5($e1, $e2, $e3, $e4, $e5)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr, $e5:expr, $e6:expr $(,)?) => {
        $crate::tuple::Tuple6($e1, $e2, $e3, $e4, $e5, $e6)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr, $e5:expr, $e6:expr, $e7:expr $(,)?) => {
        $crate::tuple::Tuple7($e1, $e2, $e3, $e4, $e5, $e6, $e7)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr, $e5:expr, $e6:expr, $e7:expr, $e8:expr $(,)?) => {
        $crate::tuple::Tuple8($e1, $e2, $e3, $e4, $e5, $e6, $e7, $e8)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr, $e5:expr, $e6:expr, $e7:expr, $e8:expr, $e9:expr $(,)?) => {
        $crate::tuple::Tuple9($e1, $e2, $e3, $e4, $e5, $e6, $e7, $e8, $e9)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr, $e5:expr, $e6:expr, $e7:expr, $e8:expr, $e9:expr, $e10:expr $(,)?) => {
        $crate::tuple::Tuple10($e1, $e2, $e3, $e4, $e5, $e6, $e7, $e8, $e9, $e10)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr, $e5:expr, $e6:expr, $e7:expr, $e8:expr, $e9:expr, $e10:expr, $e11:expr $(,)?) => {
        $crate::tuple::Tuple11($e1, $e2, $e3, $e4, $e5, $e6, $e7, $e8, $e9, $e10, $e11)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr, $e5:expr, $e6:expr, $e7:expr, $e8:expr, $e9:expr, $e10:expr, $e11:expr, $e12:expr $(,)?) => {
        $crate::tuple::Tuple12($e1, $e2, $e3, $e4, $e5, $e6, $e7, $e8, $e9, $e10, $e11, $e12)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr, $e5:expr, $e6:expr, $e7:expr, $e8:expr, $e9:expr, $e10:expr, $e11:expr, $e12:expr, $e13:expr $(,)?) => {
        $crate::tuple::Tuple13($e1, $e2, $e3, $e4, $e5, $e6, $e7, $e8, $e9, $e10, $e11, $e12, $e13)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr, $e5:expr, $e6:expr, $e7:expr, $e8:expr, $e9:expr, $e10:expr, $e11:expr, $e12:expr, $e13:expr, $e14:expr $(,)?) => {
        $crate::tuple::Tuple14($e1, $e2, $e3, $e4, $e5, $e6, $e7, $e8, $e9, $e10, $e11, $e12, $e13, $e14)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr, $e5:expr, $e6:expr, $e7:expr, $e8:expr, $e9:expr, $e10:expr, $e11:expr, $e12:expr, $e13:expr, $e14:expr, $e15:expr $(,)?) => {
        $crate::tuple::Tuple15($e1, $e2, $e3, $e4, $e5, $e6, $e7, $e8, $e9, $e10, $e11, $e12, $e13, $e14, $e15)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr, $e5:expr, $e6:expr, $e7:expr, $e8:expr, $e9:expr, $e10:expr, $e11:expr, $e12:expr, $e13:expr, $e14:expr, $e15:expr, $e16:expr $(,)?) => {
        $crate::tuple::Tuple16($e1, $e2, $e3, $e4, $e5, $e6, $e7, $e8, $e9, $e10, $e11, $e12, $e13, $e14, $e15, $e16)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr, $e5:expr, $e6:expr, $e7:expr, $e8:expr, $e9:expr, $e10:expr, $e11:expr, $e12:expr, $e13:expr, $e14:expr, $e15:expr, $e16:expr, $e17:expr $(,)?) => {
        $crate::tuple::Tuple17($e1, $e2, $e3, $e4, $e5, $e6, $e7, $e8, $e9, $e10, $e11, $e12, $e13, $e14, $e15, $e16, $e17)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr, $e5:expr, $e6:expr, $e7:expr, $e8:expr, $e9:expr, $e10:expr, $e11:expr, $e12:expr, $e13:expr, $e14:expr, $e15:expr, $e16:expr, $e17:expr, $e18:expr $(,)?) => {
        $crate::tuple::Tuple18($e1, $e2, $e3, $e4, $e5, $e6, $e7, $e8, $e9, $e10, $e11, $e12, $e13, $e14, $e15, $e16, $e17, $e18)
    };
    ($($e:expr),+ $(,)?) => {
        $crate::tuple::TupleXXL::<Box<dyn $crate::tuple::DynElement>>::from(vec![
            $(Box::new($e) as Box<dyn $crate::tuple::DynElement>),+
        ])
    };
}
