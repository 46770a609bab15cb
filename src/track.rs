use crate::{
    core::Vec2,
    ease::Ease,
    error::{ScrollError, ScrollResult},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// One (progress breakpoint, output value) pair. The ease shapes
/// interpolation toward the next key and is ignored on the last key.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    pub breakpoint: f64,
    pub value: T,
    #[serde(default)]
    pub ease: Ease,
}

impl<T> Keyframe<T> {
    pub fn new(breakpoint: f64, value: T) -> Self {
        Self {
            breakpoint,
            value,
            ease: Ease::Linear,
        }
    }

    pub fn eased(breakpoint: f64, value: T, ease: Ease) -> Self {
        Self {
            breakpoint,
            value,
            ease,
        }
    }
}

/// An immutable piecewise curve over progress. Invariants checked at
/// construction: at least 2 keys, finite breakpoints, non-decreasing
/// order. Below the first breakpoint the first value holds; above the
/// last, the last value holds (no extrapolation).
#[derive(Clone, Debug, serde::Serialize)]
pub struct KeyframeTrack<T> {
    keys: Vec<Keyframe<T>>,
}

impl<T> KeyframeTrack<T>
where
    T: Lerp + Clone,
{
    pub fn new(keys: Vec<Keyframe<T>>) -> ScrollResult<Self> {
        if keys.len() < 2 {
            return Err(ScrollError::config(
                "keyframe track must have at least 2 keys",
            ));
        }
        if keys.iter().any(|k| !k.breakpoint.is_finite()) {
            return Err(ScrollError::config(
                "keyframe breakpoints must be finite",
            ));
        }
        if !keys.windows(2).all(|w| w[0].breakpoint <= w[1].breakpoint) {
            return Err(ScrollError::config(
                "keyframe breakpoints must be non-decreasing",
            ));
        }
        Ok(Self { keys })
    }

    /// Convenience for plain linear `(breakpoint, value)` lists, the shape
    /// scene declarations are written in.
    pub fn linear(pairs: Vec<(f64, T)>) -> ScrollResult<Self> {
        Self::new(pairs.into_iter().map(|(p, v)| Keyframe::new(p, v)).collect())
    }

    pub fn keys(&self) -> &[Keyframe<T>] {
        &self.keys
    }

    /// Pure function of `(self, progress)`: no state, no time dependency.
    pub fn evaluate(&self, progress: f64) -> T {
        let idx = self.keys.partition_point(|k| k.breakpoint <= progress);

        if idx == 0 {
            return self.keys[0].value.clone();
        }
        if idx >= self.keys.len() {
            return self.keys[self.keys.len() - 1].value.clone();
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.breakpoint - a.breakpoint;
        if span <= 0.0 {
            // Zero-width bracket: hold the earlier key.
            return a.value.clone();
        }

        let t = (progress - a.breakpoint) / span;
        T::lerp(&a.value, &b.value, a.ease.apply(t))
    }
}
