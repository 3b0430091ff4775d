//! Truthiness for values flowing through pipelines
//!
//! [`Truthy`] gives scalars, strings, and optional values a uniform boolean
//! reading: `false`, zero, `NaN`, empty strings, and `None` are falsy,
//! everything else is truthy. The [`is_truthy`](crate::predicate::is_truthy)
//! predicate accepts any `Truthy` type, which is what lets one filter drop
//! both empty strings and absent fields.
//!
//! # Examples
//!
//! ```
//! use millrace::Truthy;
//!
//! assert!(1.is_truthy());
//! assert!("filled".is_truthy());
//! assert!(Some(7).is_truthy());
//!
//! assert!(!0.is_truthy());
//! assert!(!"".is_truthy());
//! assert!(!f64::NAN.is_truthy());
//! assert!(!None::<i32>.is_truthy());
//! ```

/// A boolean reading of a value.
///
/// Implementations must be pure: checking the same value twice gives the
/// same answer.
pub trait Truthy {
    /// True unless the value is the falsy sentinel for its type.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

/// `None` is falsy; `Some` defers to the wrapped value, so `Some(0)` is
/// still falsy.
impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().map_or(false, Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

// Macro for generating integer implementations
macro_rules! impl_truthy_for_int {
    ($($t:ty),+) => {
        $(
            impl Truthy for $t {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )+
    };
}

impl_truthy_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Macro for generating float implementations; NaN is falsy alongside zero
macro_rules! impl_truthy_for_float {
    ($($t:ty),+) => {
        $(
            impl Truthy for $t {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0.0 && !self.is_nan()
                }
            }
        )+
    };
}

impl_truthy_for_float!(f32, f64);
