use approx::assert_abs_diff_eq;
use core3d::{transform, Dir, Mat4x4, Mat4x4F, Mat4x4I, Vec3, Vec3F, Vec3I, Vec4, Vec4F};

fn assert_mat_close(a: Mat4x4F, b: Mat4x4F, epsilon: f32) {
    for (x, y) in a.to_flat().into_iter().zip(b.to_flat()) {
        assert_abs_diff_eq!(x, y, epsilon = epsilon);
    }
}

fn samples() -> Vec<Mat4x4F> {
    vec![
        Mat4x4::from_flat(core::array::from_fn(|i| i as f32 * 0.5 - 3.0)),
        transform::transform(Vec3::new(1.0, 2.0, 3.0), Vec3::new(30.0, 45.0, 60.0)),
        transform::perspective(70.0, 16.0 / 9.0, 0.1, 1000.0),
    ]
}

#[test]
fn identity_is_two_sided() {
    for m in samples() {
        assert_eq!(Mat4x4F::identity() * m, m);
        assert_eq!(m * Mat4x4F::identity(), m);
    }

    let m = Mat4x4I::from_flat(core::array::from_fn(|i| (i as i32 * 7) % 5 - 2));
    assert_eq!(Mat4x4I::identity() * m, m);
    assert_eq!(m * Mat4x4I::identity(), m);
}

#[test]
fn product_is_associative() {
    let [a, b, c] = <[Mat4x4F; 3]>::try_from(samples()).unwrap();
    assert_mat_close((a * b) * c, a * (b * c), 1e-2);
}

#[test]
fn normals_have_unit_length() {
    for v in [Vec3F::new(3.0, 4.0, 0.0), Vec3F::new(-1.0, -1.0, -1.0), Vec3F::new(1e4, 2.0, -7.0)] {
        assert_abs_diff_eq!(v.normal().length_sqr(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn dot_with_self_is_length_sqr() {
    for v in [Vec3F::new(0.5, -2.0, 8.0), Vec3F::splat(3.0), Vec3F::from(Dir::Back)] {
        assert_eq!(Vec3::dot(v, v), v.length_sqr());
    }
    let v = Vec3I::new(-2, 5, 7);
    assert_eq!(v.dot(v), v.length_sqr());
}

#[test]
fn length_scenario() {
    let v = Vec3F::new(3.0, 4.0, 0.0);
    assert_eq!(v.length(), 5.0);
    assert_eq!(v.length_sqr(), 25.0);
}

#[test]
fn direction_scenario() {
    assert_eq!(Vec3F::from(Dir::Up), Vec3F::new(0.0, 1.0, 0.0));
    assert_eq!(Vec3F::from(Dir::Left), Vec3F::new(-1.0, 0.0, 0.0));
}

#[test]
fn default_matrix_is_zero() {
    let m = Mat4x4F::default();
    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(m[i][j], 0.0);
        }
    }
}

#[test]
fn translation_scenario() {
    let m = transform::translation_xyz(1.0f32, 2.0, 3.0);
    assert_eq!(Vec4F::new(0.0, 0.0, 0.0, 1.0) * m, Vec4F::new(1.0, 2.0, 3.0, 1.0));
}

#[test]
fn translations_add() {
    let a = Vec3F::new(-3.0, 0.25, 10.0);
    let b = Vec3F::new(1.5, 1.5, -2.0);
    let point = Vec4::new(2.0, 2.0, 2.0, 1.0);
    let composed = point * (transform::translation(a) * transform::translation(b));
    assert_eq!(composed, point * transform::translation(a + b));
    assert_eq!(composed.truncate(), point.truncate() + a + b);
}

#[test]
fn rotations_are_orthogonal() {
    let rotations: [fn(f32) -> Mat4x4F; 3] = [transform::yaw_rotation, transform::pitch_rotation, transform::roll_rotation];
    for rotation in rotations {
        assert_eq!(rotation(0.0), Mat4x4F::identity());
        for angle in [0.0, 90.0, 180.0, 270.0, 37.0] {
            let m = rotation(angle);
            assert_mat_close(m.transpose() * m, Mat4x4F::identity(), 1e-6);
            let x = m.row(0).truncate();
            let y = m.row(1).truncate();
            let z = m.row(2).truncate();
            assert_abs_diff_eq!(x.cross(y).dot(z), 1.0, epsilon = 1e-5);
        }
    }
}

#[test]
fn perspective_scenario() {
    let m = transform::perspective(90.0f32, 1.0, 1.0, 100.0);
    assert_abs_diff_eq!(m[0][0], 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(m[1][1], 1.0, epsilon = 1e-6);
    assert_eq!(m[2][3], 1.0);
    assert_eq!(m[3][2], 2.0 * 100.0 * 1.0 / 99.0);
    assert_eq!(m[2][2], -101.0 / 99.0);
    assert_eq!((m[3][3], m[3][0], m[0][3]), (0.0, 0.0, 0.0));

    // near plane maps to depth +1, far plane to -1
    let project = |z: f32| {
        let clip = Vec4F::new(0.0, 0.0, z, 1.0) * m;
        clip.z / clip.w
    };
    assert_abs_diff_eq!(project(1.0), 1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(project(100.0), -1.0, epsilon = 1e-5);
}

#[test]
fn matrix_times_column_vector_is_conventional() {
    let m = Mat4x4I::from_flat(core::array::from_fn(|i| i as i32));
    let v = Vec4::new(1, 2, 3, 4);
    let expected: [i32; 4] = core::array::from_fn(|i| (0..4).map(|j| m[i][j] * v[j]).sum());
    assert_eq!(m * v, Vec4::from(expected));
}
