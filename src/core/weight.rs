use std::ops::Add;

mod ordered_float;

pub use ordered_float::OrderedFloat;

/// An edge weight or accumulated distance.
///
/// Floating-point types are only partially ordered, so the trait carries a
/// totally-ordered proxy (`Ord`) that data structures requiring a total
/// order (such as [the heap](crate::common::IndexedHeap)) store internally.
/// For integer types the proxy is the type itself.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    type Ord: Ord + Clone + From<Self> + Into<Self>;

    /// Additive identity, the distance of a vertex to itself.
    fn zero() -> Self;

    /// The value representing "unreachable". Must compare greater than any
    /// distance that actually occurs in a graph.
    fn inf() -> Self;

    /// `true` if the type cannot represent negative values at all, in which
    /// case runtime negativity checks are skipped.
    fn is_unsigned() -> bool;
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            type Ord = Self;

            fn zero() -> Self {
                0
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = OrderedFloat<Self>;

            fn zero() -> Self {
                <$ty>::default()
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn is_unsigned() -> bool {
                false
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);
