//! Builders for the track shapes scroll narratives use over and over:
//! single ramps, plateaus (fade in, hold, fade out), pulses, and the
//! staggered entrance windows of card grids.

use crate::{
    error::ScrollResult,
    track::{KeyframeTrack, Lerp},
};

/// Single segment from `(p0, a)` to `(p1, b)`.
pub fn ramp<T: Lerp + Clone>(p0: f64, a: T, p1: f64, b: T) -> ScrollResult<KeyframeTrack<T>> {
    KeyframeTrack::linear(vec![(p0, a), (p1, b)])
}

/// Rise to `peak`, hold, fall back to `rest`:
/// `[(p_in0, rest), (p_in1, peak), (p_out0, peak), (p_out1, rest)]`.
pub fn plateau(
    p_in0: f64,
    p_in1: f64,
    p_out0: f64,
    p_out1: f64,
    rest: f64,
    peak: f64,
) -> ScrollResult<KeyframeTrack<f64>> {
    KeyframeTrack::linear(vec![
        (p_in0, rest),
        (p_in1, peak),
        (p_out0, peak),
        (p_out1, rest),
    ])
}

/// Triangular rise-and-fall with the peak at `p_mid`.
pub fn pulse(
    p0: f64,
    p_mid: f64,
    p1: f64,
    rest: f64,
    peak: f64,
) -> ScrollResult<KeyframeTrack<f64>> {
    KeyframeTrack::linear(vec![(p0, rest), (p_mid, peak), (p1, rest)])
}

/// Entrance window for item `index` in a staggered sequence: the segment
/// `[start, start + width]` shifted by `index * step`, going `from -> to`.
pub fn entrance(
    index: usize,
    start: f64,
    width: f64,
    step: f64,
    from: f64,
    to: f64,
) -> ScrollResult<KeyframeTrack<f64>> {
    let delay = step * index as f64;
    ramp(start + delay, from, start + delay + width, to)
}
