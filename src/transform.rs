//! Transform builders for floating-point matrices.
//!
//! Every matrix here is meant for row vectors, `v' = v * m`. Composition reads
//! left to right: `a * b` applies `a` first, then `b`. Angles are in degrees.
//!
//! Multi-axis rotations all share one order: roll about Z first, then pitch
//! about X, then yaw about Y (`roll * pitch * yaw`).

use num_traits::{Float, One, Zero};

use crate::{Mat4x4, Vec3, Vec4};


/// Identity with `offset` in row 3.
pub fn translation<T, V>(offset: V) -> Mat4x4<T>
where
    T: Copy + Zero + One,
    V: Into<Vec3<T>>,
{
    let mut m = Mat4x4::identity();
    m[3] = offset.into().extend(T::one());
    m
}

pub fn translation_xyz<T: Copy + Zero + One>(x: T, y: T, z: T) -> Mat4x4<T> {
    translation(Vec3::new(x, y, z))
}


/// 2D rotation block `[cos, -sin; sin, cos]`.
fn rotate_transform<T: Float>(degrees: T) -> [[T; 2]; 2] {
    let (s, c) = degrees.to_radians().sin_cos();
    [
        [c, -s],
        [s,  c],
    ]
}

/// Embeds a 2D rotation into the plane spanned by `axes`, identity elsewhere.
fn rotate_axes<T: Float>(axes: [usize; 2], degrees: T) -> Mat4x4<T> {
    let block = rotate_transform(degrees);
    let mut m = Mat4x4::identity();
    for i in 0..2 {
        for j in 0..2 {
            m[axes[i]][axes[j]] = block[i][j];
        }
    }
    m
}

/// Rotation about Y: `[cos, 0, sin; 0, 1, 0; -sin, 0, cos]`.
pub fn yaw_rotation<T: Float>(degrees: T) -> Mat4x4<T> {
    rotate_axes([2, 0], degrees)
}

/// Rotation about X: `[1, 0, 0; 0, cos, -sin; 0, sin, cos]`.
pub fn pitch_rotation<T: Float>(degrees: T) -> Mat4x4<T> {
    rotate_axes([1, 2], degrees)
}

/// Rotation about Z: `[cos, -sin, 0; sin, cos, 0; 0, 0, 1]`.
pub fn roll_rotation<T: Float>(degrees: T) -> Mat4x4<T> {
    rotate_axes([0, 1], degrees)
}

/// Pitch then yaw, no roll.
pub fn euler_rotation<T: Float>(pitch: T, yaw: T) -> Mat4x4<T> {
    pitch_rotation(pitch) * yaw_rotation(yaw)
}

pub fn euler_rotation_pyr<T: Float>(pitch: T, yaw: T, roll: T) -> Mat4x4<T> {
    roll_rotation(roll) * pitch_rotation(pitch) * yaw_rotation(yaw)
}

/// `euler.x` is pitch, `euler.y` yaw, `euler.z` roll.
pub fn euler_rotation_vec<T: Float>(euler: Vec3<T>) -> Mat4x4<T> {
    euler_rotation_pyr(euler.x, euler.y, euler.z)
}

/// Rotates by `euler` (see [`euler_rotation_vec`]) and then moves to `pos`.
pub fn transform<T: Float>(pos: Vec3<T>, euler: Vec3<T>) -> Mat4x4<T> {
    let mut m = euler_rotation_vec(euler);
    m[3] = pos.extend(T::one());
    m
}


/// Perspective projection for row vectors. View-space `z` lands in clip-space
/// `w` through entry `[2][3]`.
///
/// `fov` is the full vertical field of view in degrees. Nothing is validated:
/// `near == far` or `aspect == 0` yield infinities.
pub fn perspective<T: Float>(fov: T, aspect: T, near: T, far: T) -> Mat4x4<T> {
    if near == far || aspect.is_zero() {
        let f = |t: T| t.to_f64().unwrap_or(f64::NAN);
        log::warn!("degenerate perspective frustum: aspect {}, near {}, far {}", f(aspect), f(near), f(far));
    }

    let (o, l) = (T::zero(), T::one());
    let two = l + l;
    let scale = l / (fov / two).to_radians().tan();
    let range = far - near;

    Mat4x4::from_rows([
        Vec4::new(scale / aspect, o, o, o),
        Vec4::new(o, scale, o, o),
        Vec4::new(o, o, (-near - far) / range, l),
        Vec4::new(o, o, two * far * near / range, o),
    ])
}
