//! Small 3D math primitives: [`Vec3`], [`Vec4`] and a row-major [`Mat4x4`],
//! plus the floating-point transform builders in [`transform`].
//!
//! Transforms follow the row-vector convention: a point is transformed as
//! `v * m`, so translation lives in row 3 and `a * b` applies `a` first.

mod scalar; #[allow(unused_imports)] pub use scalar::*;
mod vec3; #[allow(unused_imports)] pub use vec3::*;
mod vec4; #[allow(unused_imports)] pub use vec4::*;
mod mat4x4; #[allow(unused_imports)] pub use mat4x4::*;
pub mod transform;

#[cfg(any(test, feature = "approx"))]
mod approx_impls;


pub type Vec3I = Vec3<i32>;
pub type Vec3F = Vec3<f32>;

pub type Vec4I = Vec4<i32>;
pub type Vec4F = Vec4<f32>;

pub type Mat4x4I = Mat4x4<i32>;
pub type Mat4x4F = Mat4x4<f32>;
