//! Contact-enter detection over bounding spheres.
//!
//! The tracker remembers which body pairs were overlapping on the previous
//! frame and reports only *entering* pairs, so a sustained overlap produces
//! exactly one notification.

use std::collections::HashSet;

use crate::ray::Body;

/// Tracks overlapping body pairs across frames by their stable ids.
#[derive(Debug, Default)]
pub struct ContactTracker {
    previous: HashSet<(u64, u64)>,
}

impl ContactTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `bodies` for overlapping pairs and push the index pair of every
    /// contact that was not already present last frame into `out`.
    pub fn detect_entering(&mut self, bodies: &[Body], out: &mut Vec<(usize, usize)>) {
        out.clear();
        let mut current = HashSet::with_capacity(self.previous.len());

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let a = &bodies[i];
                let b = &bodies[j];
                let reach = a.radius + b.radius;
                if a.center.distance_squared(b.center) <= reach * reach {
                    let key = pair_key(a.id, b.id);
                    if !self.previous.contains(&key) {
                        out.push((i, j));
                    }
                    current.insert(key);
                }
            }
        }

        self.previous = current;
    }
}

/// Order-independent pair key.
fn pair_key(a: u64, b: u64) -> (u64, u64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
