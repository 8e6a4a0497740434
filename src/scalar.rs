use num_traits::{AsPrimitive, Float};


/// Scalar types with a floating-point counterpart, used wherever a vector
/// needs a real-valued result (lengths, normals) regardless of its components.
pub trait Scalar: Copy {
    type Real: Float;

    fn to_real(self) -> Self::Real;
}

macro_rules! impl_scalar {
    ($real:ty => $($t:ty),*) => {$(
        impl Scalar for $t {
            type Real = $real;
            #[inline] fn to_real(self) -> $real { AsPrimitive::<$real>::as_(self) }
        }
    )*};
}

impl_scalar!(f32 => i8, i16, i32, u8, u16, u32, f32);
impl_scalar!(f64 => i64, i128, isize, u64, u128, usize, f64);
