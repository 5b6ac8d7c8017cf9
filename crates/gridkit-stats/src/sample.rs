//! Numeric types accepted as samples.

/// A value that can be summarised as an `f64`.
///
/// Implemented for every primitive integer and float type, so path
/// lengths stored as `usize` summarise as readily as `f64` scores.
/// Conversion goes through `as`, so 64-bit integers beyond 2^53 lose
/// precision.
pub trait Sample: Copy {
    /// The value as an `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
