use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Mat4x4, Vec3, Vec4};


macro_rules! impl_approx {
    ($ty:ident, |$a:ident, $b:ident| $entries:expr) => {
        impl<T: AbsDiffEq> AbsDiffEq for $ty<T>
        where
            T::Epsilon: Copy,
        {
            type Epsilon = T::Epsilon;

            #[inline]
            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let ($a, $b) = (self, other);
                $entries.all(|(x, y)| x.abs_diff_eq(y, epsilon))
            }
        }

        impl<T: RelativeEq> RelativeEq for $ty<T>
        where
            T::Epsilon: Copy,
        {
            #[inline]
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            #[inline]
            fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
                let ($a, $b) = (self, other);
                $entries.all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
            }
        }

        impl<T: UlpsEq> UlpsEq for $ty<T>
        where
            T::Epsilon: Copy,
        {
            #[inline]
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            #[inline]
            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                let ($a, $b) = (self, other);
                $entries.all(|(x, y)| x.ulps_eq(y, epsilon, max_ulps))
            }
        }
    };
}

impl_approx!(Vec3, |a, b| [(&a.x, &b.x), (&a.y, &b.y), (&a.z, &b.z)].into_iter());
impl_approx!(Vec4, |a, b| [(&a.x, &b.x), (&a.y, &b.y), (&a.z, &b.z), (&a.w, &b.w)].into_iter());
impl_approx!(Mat4x4, |a, b| a.0.iter().flat_map(|row| [&row.x, &row.y, &row.z, &row.w]).zip(b.0.iter().flat_map(|row| [&row.x, &row.y, &row.z, &row.w])));
