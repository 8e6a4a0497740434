use std::ops::{Add, Index, IndexMut, Mul};

use num_traits::{ConstZero, Zero};

use crate::Vec3;


/// Four-component vector. Carries homogeneous coordinates and the rows of a
/// [`Mat4x4`](crate::Mat4x4); it has no arithmetic operators of its own.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, bytemuck::Zeroable)]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vec4<T> {}


impl<T> Vec4<T> {
    #[inline] pub const fn new(x: T, y: T, z: T, w: T) -> Self { Self { x, y, z, w } }

    #[inline] pub fn map<F, U>(self, mut f: F) -> Vec4<U> where F: FnMut(T) -> U { Vec4::new(f(self.x), f(self.y), f(self.z), f(self.w)) }

    /// Drops `w`.
    #[inline] pub fn truncate(self) -> Vec3<T> { Vec3::new(self.x, self.y, self.z) }
}

impl<T: Copy> Vec4<T> {
    #[inline] pub const fn splat(value: T) -> Self { Self::new(value, value, value, value) }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Vec4<T> {
    #[inline] pub fn dot(self, rhs: Self) -> T { self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w }
}


impl<T> From<[T; 4]> for Vec4<T> { fn from([x, y, z, w]: [T; 4]) -> Self { Self::new(x, y, z, w) } }
impl<T> From<(T, T, T, T)> for Vec4<T> { fn from((x, y, z, w): (T, T, T, T)) -> Self { Self::new(x, y, z, w) } }
impl<T> From<(Vec3<T>, T)> for Vec4<T> { fn from((v, w): (Vec3<T>, T)) -> Self { v.extend(w) } }
impl<T> From<Vec4<T>> for [T; 4] { fn from(v: Vec4<T>) -> Self { [v.x, v.y, v.z, v.w] } }


impl<T> Index<usize> for Vec4<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of bounds: {index}"),
        }
    }
}

impl<T> IndexMut<usize> for Vec4<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of bounds: {index}"),
        }
    }
}


impl<T: ConstZero> Vec4<T> {
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);
}

// Inherent rather than `num_traits::Zero`, which would need `Add` on Vec4.
impl<T: Zero> Vec4<T> {
    #[inline] pub fn zero() -> Self { Self::new(T::zero(), T::zero(), T::zero(), T::zero()) }

    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero() && self.w.is_zero()
    }
}
