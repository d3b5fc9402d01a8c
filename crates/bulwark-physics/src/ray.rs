//! Ray casts against tagged bounding spheres.
//!
//! The cast walks every body and keeps the nearest forward intersection, so
//! callers get the *first* body along the ray — occluders shadow anything
//! behind them.

use bulwark_core::enums::BodyTag;
use glam::DVec3;

/// A physics body flattened for queries: a tagged bounding sphere with a
/// stable identifier supplied by the caller.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub id: u64,
    pub tag: BodyTag,
    pub center: DVec3,
    pub radius: f64,
}

/// The nearest body intersected by a ray.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// Index into the body slice the cast ran over.
    pub index: usize,
    /// Distance from the ray origin to the intersection point (meters).
    pub distance: f64,
    /// World-space intersection point.
    pub point: DVec3,
}

/// Cast a ray from `origin` toward `toward`, bounded by `max_range`, and
/// return the nearest intersected body, or `None`.
///
/// Bodies for which `skip` returns true are ignored (callers exclude the
/// casting body itself, and the turret controller excludes in-flight
/// ordnance). A degenerate ray (`toward == origin`) hits nothing.
pub fn cast_ray(
    bodies: &[Body],
    origin: DVec3,
    toward: DVec3,
    max_range: f64,
    skip: impl Fn(&Body) -> bool,
) -> Option<RayHit> {
    let dir = (toward - origin).normalize_or_zero();
    if dir == DVec3::ZERO {
        return None;
    }

    let mut nearest: Option<RayHit> = None;
    for (index, body) in bodies.iter().enumerate() {
        if skip(body) {
            continue;
        }
        if let Some(distance) = ray_sphere_entry(origin, dir, body.center, body.radius) {
            if distance > max_range {
                continue;
            }
            if nearest.as_ref().map_or(true, |hit| distance < hit.distance) {
                nearest = Some(RayHit {
                    index,
                    distance,
                    point: origin + dir * distance,
                });
            }
        }
    }
    nearest
}

/// Distance along the ray at which it enters the sphere, or `None` if the
/// sphere lies entirely behind the origin or is never intersected.
/// An origin inside the sphere reports entry at distance 0.
fn ray_sphere_entry(origin: DVec3, dir: DVec3, center: DVec3, radius: f64) -> Option<f64> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let t_far = -b + sqrt_disc;
    if t_far < 0.0 {
        return None;
    }
    Some((-b - sqrt_disc).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(id: u64, tag: BodyTag, center: DVec3, radius: f64) -> Body {
        Body {
            id,
            tag,
            center,
            radius,
        }
    }

    #[test]
    fn test_direct_hit() {
        let bodies = [body(1, BodyTag::Player, DVec3::new(0.0, 0.0, -50.0), 1.5)];
        let hit = cast_ray(
            &bodies,
            DVec3::ZERO,
            DVec3::new(0.0, 0.0, -50.0),
            100.0,
            |_| false,
        )
        .expect("ray should hit the body");
        assert_eq!(hit.index, 0);
        assert!(
            (hit.distance - 48.5).abs() < 1e-9,
            "Entry at center distance minus radius, got {}",
            hit.distance
        );
    }

    #[test]
    fn test_nearest_body_shadows_the_rest() {
        let bodies = [
            body(1, BodyTag::Player, DVec3::new(0.0, 0.0, -80.0), 1.5),
            body(2, BodyTag::Obstacle, DVec3::new(0.0, 0.0, -40.0), 5.0),
        ];
        let hit = cast_ray(
            &bodies,
            DVec3::ZERO,
            DVec3::new(0.0, 0.0, -80.0),
            100.0,
            |_| false,
        )
        .expect("ray should hit the occluder");
        assert_eq!(bodies[hit.index].tag, BodyTag::Obstacle);
    }

    #[test]
    fn test_out_of_range() {
        let bodies = [body(1, BodyTag::Player, DVec3::new(0.0, 0.0, -150.0), 1.5)];
        let hit = cast_ray(
            &bodies,
            DVec3::ZERO,
            DVec3::new(0.0, 0.0, -150.0),
            100.0,
            |_| false,
        );
        assert!(hit.is_none(), "Body beyond max_range should not be hit");
    }

    #[test]
    fn test_body_behind_origin_ignored() {
        let bodies = [body(1, BodyTag::Obstacle, DVec3::new(0.0, 0.0, 50.0), 5.0)];
        let hit = cast_ray(
            &bodies,
            DVec3::ZERO,
            DVec3::new(0.0, 0.0, -10.0),
            100.0,
            |_| false,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_skip_predicate() {
        let bodies = [
            body(1, BodyTag::Turret, DVec3::ZERO, 2.5),
            body(2, BodyTag::Player, DVec3::new(0.0, 0.0, -50.0), 1.5),
        ];
        // Without skipping, the cast starts inside body 1 and hits it at distance 0.
        let hit = cast_ray(
            &bodies,
            DVec3::ZERO,
            DVec3::new(0.0, 0.0, -50.0),
            100.0,
            |_| false,
        )
        .unwrap();
        assert_eq!(bodies[hit.index].id, 1);
        assert_eq!(hit.distance, 0.0);

        // Skipping the caster reveals the target.
        let hit = cast_ray(
            &bodies,
            DVec3::ZERO,
            DVec3::new(0.0, 0.0, -50.0),
            100.0,
            |b| b.id == 1,
        )
        .unwrap();
        assert_eq!(bodies[hit.index].id, 2);
    }

    #[test]
    fn test_degenerate_ray() {
        let bodies = [body(1, BodyTag::Player, DVec3::ZERO, 1.5)];
        let hit = cast_ray(&bodies, DVec3::ZERO, DVec3::ZERO, 100.0, |_| false);
        assert!(hit.is_none(), "Zero-length ray should hit nothing");
    }

    #[test]
    fn test_grazing_miss() {
        // Sphere offset laterally by more than its radius.
        let bodies = [body(1, BodyTag::Obstacle, DVec3::new(6.0, 0.0, -50.0), 5.0)];
        let hit = cast_ray(
            &bodies,
            DVec3::ZERO,
            DVec3::new(0.0, 0.0, -100.0),
            200.0,
            |_| false,
        );
        assert!(hit.is_none());
    }
}
