//! Conversions between physics-engine and renderer types
//!
//! Every conversion is a direct field remap. The only arithmetic is the
//! colour conversion: the physics debug pipeline hands out HSLA colours while
//! the renderer wants RGBA.

use rapier3d::math::{Isometry, Point, Real, Rotation, Vector};
use rapier3d::na::{Quaternion as PhysicsQuaternion, Translation3, Unit as PhysicsUnit};

use crate::foundation::math::{Color, Quat, Quaternion, Transform, Unit, Vec3};

/// Renderer vector to physics vector
pub fn to_physics_vector(v: &Vec3) -> Vector<Real> {
    Vector::new(v.x, v.y, v.z)
}

/// Renderer position to physics point
pub fn to_physics_point(v: &Vec3) -> Point<Real> {
    Point::new(v.x, v.y, v.z)
}

/// Renderer quaternion to physics rotation
///
/// The physics quaternion is built from `(w, x, y, z)` like the renderer's,
/// no renormalization happens on the way.
pub fn to_physics_rotation(q: &Quat) -> Rotation<Real> {
    PhysicsUnit::new_unchecked(PhysicsQuaternion::new(q.w, q.i, q.j, q.k))
}

/// Renderer transform to physics isometry; scale is dropped
pub fn to_physics_isometry(t: &Transform) -> Isometry<Real> {
    Isometry::from_parts(
        Translation3::new(t.position.x, t.position.y, t.position.z),
        to_physics_rotation(&t.rotation),
    )
}

/// Physics vector to renderer vector
pub fn to_render_vector(v: &Vector<Real>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

/// Physics point to renderer position
pub fn to_render_point(p: &Point<Real>) -> Vec3 {
    Vec3::new(p.x, p.y, p.z)
}

/// Physics rotation to renderer quaternion
pub fn to_render_rotation(q: &Rotation<Real>) -> Quat {
    Unit::new_unchecked(Quaternion::new(q.w, q.i, q.j, q.k))
}

/// Physics isometry to renderer transform with unit scale
pub fn to_render_transform(iso: &Isometry<Real>) -> Transform {
    Transform::from_position_rotation(
        to_render_vector(&iso.translation.vector),
        to_render_rotation(&iso.rotation),
    )
}

/// Colour handed over as a vector, read as opaque `(r, g, b)`
pub fn rgb_to_render(color: &Vector<Real>) -> Color {
    Color::rgb(color.x, color.y, color.z)
}

/// Physics debug colour (`[hue in degrees, saturation, lightness, alpha]`) to RGBA
// `sector` lies in [0, 6]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn debug_color_to_render(hsla: [f32; 4]) -> Color {
    let [hue, saturation, lightness, alpha] = hsla;

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = lightness - chroma / 2.0;

    let (r, g, b) = match sector.floor() as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Color::new(r + m, g + m, b + m, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::foundation::math::Vector3;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_vector_round_trip() {
        let original = Vec3::new(1.5, -2.25, 1000.125);

        let back = to_render_vector(&to_physics_vector(&original));
        assert_eq!(back, original);

        let back = to_render_point(&to_physics_point(&original));
        assert_eq!(back, original);
    }

    #[test]
    fn test_rotation_keeps_component_order() {
        let q = Quat::from_axis_angle(&Vector3::y_axis(), 0.7);
        let physics = to_physics_rotation(&q);

        assert_relative_eq!(physics.w, q.w, epsilon = EPSILON);
        assert_relative_eq!(physics.i, q.i, epsilon = EPSILON);
        assert_relative_eq!(physics.j, q.j, epsilon = EPSILON);
        assert_relative_eq!(physics.k, q.k, epsilon = EPSILON);

        let back = to_render_rotation(&physics);
        assert_relative_eq!(back, q, epsilon = EPSILON);
    }

    #[test]
    fn test_rotation_rotates_the_same_way() {
        let q = Quat::from_axis_angle(&Vector3::z_axis(), std::f32::consts::FRAC_PI_2);
        let rotated = to_physics_rotation(&q) * Vector::x();

        assert_relative_eq!(to_render_vector(&rotated), Vec3::new(0.0, 1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_transform_round_trip_drops_scale() {
        let mut transform = Transform::from_position_rotation(
            Vec3::new(3.0, 4.0, -5.0),
            Quat::from_axis_angle(&Vector3::x_axis(), 1.2),
        );
        transform.scale = Vec3::new(2.0, 2.0, 2.0);

        let back = to_render_transform(&to_physics_isometry(&transform));

        assert_relative_eq!(back.position, transform.position, epsilon = EPSILON);
        assert_relative_eq!(back.rotation, transform.rotation, epsilon = EPSILON);
        assert_eq!(back.scale, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_rgb_vector_is_opaque() {
        let color = rgb_to_render(&Vector::new(0.1, 0.2, 0.3));
        assert_eq!(color, Color::new(0.1, 0.2, 0.3, 1.0));
    }

    #[test]
    fn test_hsla_primaries() {
        let red = debug_color_to_render([0.0, 1.0, 0.5, 1.0]);
        assert_relative_eq!(red.to_vec4(), Color::new(1.0, 0.0, 0.0, 1.0).to_vec4(), epsilon = EPSILON);

        let green = debug_color_to_render([120.0, 1.0, 0.5, 0.5]);
        assert_relative_eq!(green.to_vec4(), Color::new(0.0, 1.0, 0.0, 0.5).to_vec4(), epsilon = EPSILON);

        let blue = debug_color_to_render([240.0, 1.0, 0.5, 1.0]);
        assert_relative_eq!(blue.to_vec4(), Color::new(0.0, 0.0, 1.0, 1.0).to_vec4(), epsilon = EPSILON);
    }

    #[test]
    fn test_hsla_between_primaries() {
        let chartreuse = debug_color_to_render([90.0, 1.0, 0.5, 1.0]);
        assert_relative_eq!(chartreuse.to_vec4(), Color::new(0.5, 1.0, 0.0, 1.0).to_vec4(), epsilon = EPSILON);

        let rose = debug_color_to_render([330.0, 1.0, 0.5, 1.0]);
        assert_relative_eq!(rose.to_vec4(), Color::new(1.0, 0.0, 0.5, 1.0).to_vec4(), epsilon = EPSILON);
    }

    #[test]
    fn test_hsla_grey_and_wraparound() {
        let grey = debug_color_to_render([200.0, 0.0, 0.25, 1.0]);
        assert_relative_eq!(grey.to_vec4(), Color::new(0.25, 0.25, 0.25, 1.0).to_vec4(), epsilon = EPSILON);

        let wrapped = debug_color_to_render([360.0, 1.0, 0.5, 1.0]);
        assert_relative_eq!(wrapped.to_vec4(), Color::new(1.0, 0.0, 0.0, 1.0).to_vec4(), epsilon = EPSILON);
    }
}
