use std::{ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign}, str::FromStr};

use num_traits::{ConstZero, Float, One, Zero};

use crate::{Scalar, Vec4};


/// Cardinal directions, each mapping to a unit vector along one axis.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
    Forward,
    Back,
}

impl Dir {
    pub const ALL: [Dir; 6] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right, Dir::Forward, Dir::Back];
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("unknown direction {0:?}")]
pub struct ParseDirError(pub String);

impl FromStr for Dir {
    type Err = ParseDirError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Dir::Up),
            "down" => Ok(Dir::Down),
            "left" => Ok(Dir::Left),
            "right" => Ok(Dir::Right),
            "forward" => Ok(Dir::Forward),
            "back" => Ok(Dir::Back),
            _ => Err(ParseDirError(s.to_owned())),
        }
    }
}


#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, bytemuck::Zeroable)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vec3<T> {}


// Construction

impl<T> Vec3<T> {
    #[inline] pub const fn new(x: T, y: T, z: T) -> Self { Self { x, y, z } }

    #[inline] pub fn map<F, U>(self, mut f: F) -> Vec3<U> where F: FnMut(T) -> U { Vec3::new(f(self.x), f(self.y), f(self.z)) }

    #[inline]
    pub fn map_with<F, U, V>(self, rhs: Vec3<U>, mut f: F) -> Vec3<V>
    where F: FnMut(T, U) -> V {
        Vec3::new(f(self.x, rhs.x), f(self.y, rhs.y), f(self.z, rhs.z))
    }

    /// Appends a `w` component.
    #[inline] pub fn extend(self, w: T) -> Vec4<T> { Vec4::new(self.x, self.y, self.z, w) }
}

impl<T: Copy> Vec3<T> {
    /// Every component set to `value`.
    #[inline] pub const fn splat(value: T) -> Self { Self::new(value, value, value) }
}

impl<T: Zero + One + Neg<Output = T>> Vec3<T> {
    /// Unit vector pointing along `dir`.
    pub fn from_dir(dir: Dir) -> Self {
        let (o, l) = (T::zero, T::one);
        match dir {
            Dir::Up      => Self::new( o(),  l(),  o()),
            Dir::Down    => Self::new( o(), -l(),  o()),
            Dir::Left    => Self::new(-l(),  o(),  o()),
            Dir::Right   => Self::new( l(),  o(),  o()),
            Dir::Forward => Self::new( o(),  o(),  l()),
            Dir::Back    => Self::new( o(),  o(), -l()),
        }
    }

    /// Like [`Vec3::from_dir`] for a textual tag; unknown tags give the zero vector.
    pub fn from_dir_name(name: &str) -> Self {
        match name.parse() {
            Ok(dir) => Self::from_dir(dir),
            Err(e) => {
                log::debug!("{e}, falling back to zero vector");
                Self::zero()
            }
        }
    }

    #[inline] pub fn up() -> Self { Self::from_dir(Dir::Up) }
    #[inline] pub fn down() -> Self { Self::from_dir(Dir::Down) }
    #[inline] pub fn left() -> Self { Self::from_dir(Dir::Left) }
    #[inline] pub fn right() -> Self { Self::from_dir(Dir::Right) }
    #[inline] pub fn forward() -> Self { Self::from_dir(Dir::Forward) }
    #[inline] pub fn back() -> Self { Self::from_dir(Dir::Back) }
}

impl<T: Zero + One + Neg<Output = T>> From<Dir> for Vec3<T> {
    fn from(dir: Dir) -> Self {
        Self::from_dir(dir)
    }
}

impl<T> From<[T; 3]> for Vec3<T> { fn from([x, y, z]: [T; 3]) -> Self { Self::new(x, y, z) } }
impl<T> From<(T, T, T)> for Vec3<T> { fn from((x, y, z): (T, T, T)) -> Self { Self::new(x, y, z) } }
impl<T> From<Vec3<T>> for [T; 3] { fn from(v: Vec3<T>) -> Self { [v.x, v.y, v.z] } }


// Length and products

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Vec3<T> {
    /// Sum of the products of matching components.
    #[inline] pub fn dot(self, rhs: Self) -> T { self.x * rhs.x + self.y * rhs.y + self.z * rhs.z }

    /// Squared length, skipping the square root.
    #[inline] pub fn length_sqr(self) -> T { self.dot(self) }
}

impl<T: Copy + Mul<Output = T> + Sub<Output = T>> Vec3<T> {
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl<T: Scalar> Vec3<T> {
    /// Euclidean length, as the floating-point counterpart of `T`.
    #[inline] pub fn length(self) -> T::Real { self.map(T::to_real).length_sqr().sqrt() }

    /// Unit vector in the same direction, in the floating-point counterpart of `T`.
    ///
    /// A zero vector has no direction; the result is NaN in every component.
    #[inline]
    pub fn normal(self) -> Vec3<T::Real> {
        let length = self.length();
        self.map(T::to_real) / length
    }
}


impl<T> Index<usize> for Vec3<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {index}"),
        }
    }
}

impl<T> IndexMut<usize> for Vec3<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {index}"),
        }
    }
}


// Zero trait

impl<T: Zero> Zero for Vec3<T> {
    fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }
    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }
}

impl<T: ConstZero> ConstZero for Vec3<T> {
    const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO);
}


// Operations

impl<T: Neg<Output = T>> Neg for Vec3<T> { type Output = Self; fn neg(self) -> Self { self.map(|t| -t) } }

impl<T: Add<Output = T>> Add for Vec3<T> { type Output = Self; fn add(self, rhs: Self) -> Self { self.map_with(rhs, T::add) } }
impl<T: Sub<Output = T>> Sub for Vec3<T> { type Output = Self; fn sub(self, rhs: Self) -> Self { self.map_with(rhs, T::sub) } }
impl<T: Mul<Output = T>> Mul for Vec3<T> { type Output = Self; fn mul(self, rhs: Self) -> Self { self.map_with(rhs, T::mul) } }
impl<T: Div<Output = T>> Div for Vec3<T> { type Output = Self; fn div(self, rhs: Self) -> Self { self.map_with(rhs, T::div) } }

impl<T: Copy + Mul<Output = T>> Mul<T> for Vec3<T> { type Output = Self; fn mul(self, rhs: T) -> Self { self.map(|t| t * rhs) } }
impl<T: Copy + Div<Output = T>> Div<T> for Vec3<T> { type Output = Self; fn div(self, rhs: T) -> Self { self.map(|t| t / rhs) } }

impl<T: AddAssign> AddAssign for Vec3<T> { fn add_assign(&mut self, rhs: Self) { self.x += rhs.x; self.y += rhs.y; self.z += rhs.z; } }
impl<T: SubAssign> SubAssign for Vec3<T> { fn sub_assign(&mut self, rhs: Self) { self.x -= rhs.x; self.y -= rhs.y; self.z -= rhs.z; } }
impl<T: MulAssign> MulAssign for Vec3<T> { fn mul_assign(&mut self, rhs: Self) { self.x *= rhs.x; self.y *= rhs.y; self.z *= rhs.z; } }
impl<T: DivAssign> DivAssign for Vec3<T> { fn div_assign(&mut self, rhs: Self) { self.x /= rhs.x; self.y /= rhs.y; self.z /= rhs.z; } }

impl<T: Copy + MulAssign> MulAssign<T> for Vec3<T> { fn mul_assign(&mut self, rhs: T) { self.x *= rhs; self.y *= rhs; self.z *= rhs; } }
impl<T: Copy + DivAssign> DivAssign<T> for Vec3<T> { fn div_assign(&mut self, rhs: T) { self.x /= rhs; self.y /= rhs; self.z /= rhs; } }

// Scalar on the left can't be generic over T, so spell out the primitives.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Vec3<$t>> for $t { type Output = Vec3<$t>; fn mul(self, rhs: Vec3<$t>) -> Vec3<$t> { rhs.map(|t| self * t) } }
    )*};
}

impl_scalar_lhs_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
