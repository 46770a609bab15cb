//! Decorative particle placement, outside the engine's tick path: a pure
//! seed → position-list function computed once per scene mount, so a
//! scene's particles are stable across re-renders and reproducible in
//! tests.

use crate::core::Vec2;

/// One ambient particle. `position` is in percent coordinates of the
/// scene's bounds; `duration` and `delay` are in seconds, for whatever
/// time-based idle drift the host paints (out of engine scope).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Particle {
    pub position: Vec2,
    pub duration: f64,
    pub delay: f64,
}

/// Ambient drift field: particles scattered over the full scene, slow
/// three-to-five second cycles.
pub fn drift_field(seed: u64, count: usize) -> Vec<Particle> {
    let mut rng = SplitMix64::new(seed);
    (0..count)
        .map(|_| Particle {
            position: Vec2::new(rng.unit() * 100.0, rng.unit() * 100.0),
            duration: 3.0 + rng.unit() * 2.0,
            delay: rng.unit() * 2.0,
        })
        .collect()
}

/// Rising field: particles spread horizontally along the bottom edge,
/// eight-to-twelve second ascents with long staggers.
pub fn rising_field(seed: u64, count: usize) -> Vec<Particle> {
    let mut rng = SplitMix64::new(seed);
    (0..count)
        .map(|_| Particle {
            position: Vec2::new(rng.unit() * 100.0, 100.0),
            duration: 8.0 + rng.unit() * 4.0,
            delay: rng.unit() * 5.0,
        })
        .collect()
}

/// Stable per-scene seed from a shared seed and the scene name, so each
/// scene gets an independent stream.
pub fn scene_seed(seed: u64, scene: &str) -> u64 {
    // FNV-1a 64, seeded.
    let mut h = 0xcbf2_9ce4_8422_2325u64 ^ seed;
    for &b in scene.as_bytes() {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x0000_0100_0000_01B3);
    }
    h
}

struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in [0, 1).
    fn unit(&mut self) -> f64 {
        (self.next() >> 11) as f64 / (1u64 << 53) as f64
    }
}
