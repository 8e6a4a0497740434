use std::{cmp::Ordering, ops::{Add, Index, IndexMut, Mul, MulAssign}};

use num_traits::{ConstOne, ConstZero, One, Zero};

use crate::{Vec3, Vec4};


/// Row-major 4x4 matrix: `m[i][j]` is row `i`, column `j`.
///
/// Ordering compares the 16 entries lexicographically, row by row. It exists
/// only for totally ordered scalars; float matrices are not ordered at all.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, bytemuck::Zeroable)]
pub struct Mat4x4<T>(pub [Vec4<T>; 4]);

unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat4x4<T> {}

impl<T: Ord> PartialOrd for Mat4x4<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Mat4x4<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}


impl<T> Mat4x4<T> {
    #[inline] pub const fn from_rows(rows: [Vec4<T>; 4]) -> Self { Self(rows) }

    /// Builds a matrix from 16 values in row-major order.
    pub fn from_flat(values: [T; 16]) -> Self {
        let [
            m00, m01, m02, m03,
            m10, m11, m12, m13,
            m20, m21, m22, m23,
            m30, m31, m32, m33,
        ] = values;
        Self([
            Vec4::new(m00, m01, m02, m03),
            Vec4::new(m10, m11, m12, m13),
            Vec4::new(m20, m21, m22, m23),
            Vec4::new(m30, m31, m32, m33),
        ])
    }

    #[inline] pub fn map<F, U>(self, mut f: F) -> Mat4x4<U> where F: FnMut(T) -> U { Mat4x4(self.0.map(|row| row.map(&mut f))) }
}

impl<T: Copy> Mat4x4<T> {
    #[inline] pub fn row(&self, index: usize) -> Vec4<T> { self.0[index] }

    #[inline]
    pub fn column(&self, index: usize) -> Vec4<T> {
        let [r0, r1, r2, r3] = self.0;
        Vec4::new(r0[index], r1[index], r2[index], r3[index])
    }

    pub fn transpose(&self) -> Self {
        Self([self.column(0), self.column(1), self.column(2), self.column(3)])
    }

    /// Entries in row-major order.
    pub fn to_flat(&self) -> [T; 16] {
        core::array::from_fn(|i| self.0[i / 4][i % 4])
    }
}

impl<T: Copy + Zero> Mat4x4<T> {
    pub fn zero() -> Self {
        Self([Vec4::zero(); 4])
    }
}

impl<T: Copy + Zero + One> Mat4x4<T> {
    pub fn identity() -> Self {
        let (o, l) = (T::zero(), T::one());
        Self([
            Vec4::new(l, o, o, o),
            Vec4::new(o, l, o, o),
            Vec4::new(o, o, l, o),
            Vec4::new(o, o, o, l),
        ])
    }
}

impl<T: Copy + ConstZero + ConstOne> Mat4x4<T> {
    pub const ZERO: Self = Self([Vec4::ZERO; 4]);

    pub const IDENTITY: Self = {
        let (o, l) = (T::ZERO, T::ONE);
        Self([
            Vec4::new(l, o, o, o),
            Vec4::new(o, l, o, o),
            Vec4::new(o, o, l, o),
            Vec4::new(o, o, o, l),
        ])
    };
}

impl<T: bytemuck::Pod> Mat4x4<T> {
    /// Raw bytes, rows first, for uploading as uniform data.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}


impl<T> Index<usize> for Mat4x4<T> {
    type Output = Vec4<T>;
    fn index(&self, index: usize) -> &Vec4<T> {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for Mat4x4<T> {
    fn index_mut(&mut self, index: usize) -> &mut Vec4<T> {
        &mut self.0[index]
    }
}

impl<T> From<[Vec4<T>; 4]> for Mat4x4<T> { fn from(rows: [Vec4<T>; 4]) -> Self { Self(rows) } }
impl<T> From<[T; 16]> for Mat4x4<T> { fn from(values: [T; 16]) -> Self { Self::from_flat(values) } }
impl<T> From<[[T; 4]; 4]> for Mat4x4<T> { fn from(rows: [[T; 4]; 4]) -> Self { Self(rows.map(Vec4::from)) } }


// Matrix multiplication

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Mul for Mat4x4<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let columns = rhs.transpose().0;
        Self(self.0.map(|row| Vec4::new(
            row.dot(columns[0]),
            row.dot(columns[1]),
            row.dot(columns[2]),
            row.dot(columns[3]),
        )))
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> MulAssign for Mat4x4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Column vector on the right: `result[i] = row(i) . v`.
impl<T: Copy + Add<Output = T> + Mul<Output = T>> Mul<Vec4<T>> for Mat4x4<T> {
    type Output = Vec4<T>;
    fn mul(self, rhs: Vec4<T>) -> Vec4<T> {
        self.0.map(|row| row.dot(rhs)).into()
    }
}

/// Row vector on the left: `result[j] = v . column(j)`. This is how the
/// transforms in [`crate::transform`] are meant to be applied.
impl<T: Copy + Add<Output = T> + Mul<Output = T>> Mul<Mat4x4<T>> for Vec4<T> {
    type Output = Vec4<T>;
    fn mul(self, rhs: Mat4x4<T>) -> Vec4<T> {
        rhs.transpose() * self
    }
}


// Applying transforms

impl<T: Copy + Zero + One> Mat4x4<T> {
    /// Transforms `p` as a point (`w = 1`), keeping `xyz` of the result
    /// without dividing by `w`.
    pub fn transform_point(&self, p: Vec3<T>) -> Vec3<T> {
        (p.extend(T::one()) * *self).truncate()
    }

    /// Transforms `d` as a direction (`w = 0`), so translation is ignored.
    pub fn transform_direction(&self, d: Vec3<T>) -> Vec3<T> {
        (d.extend(T::zero()) * *self).truncate()
    }
}


// One trait

impl<T: Copy + Zero + One> One for Mat4x4<T> {
    fn one() -> Self {
        Self::identity()
    }
}

impl<T: Copy + ConstZero + ConstOne> ConstOne for Mat4x4<T> {
    const ONE: Self = Self::IDENTITY;
}
