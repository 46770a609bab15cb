//! Preset timelines for the six scenes of the continuous-scroll
//! narrative, in document order: hero, transition, roster, grid,
//! companion, exit. Each is pure track/selector wiring; painting them is
//! the host's business.

use crate::{
    error::ScrollResult,
    params::ValueKind,
    sampler::{Anchor, ScrollRegion},
    timeline::SceneTimeline,
    track::KeyframeTrack,
    track_ops,
};

fn scalar(
    tl: &mut SceneTimeline,
    name: impl Into<String>,
    pairs: Vec<(f64, f64)>,
) -> ScrollResult<()> {
    tl.declare(name, ValueKind::Scalar, KeyframeTrack::linear(pairs)?)
}

fn alpha(
    tl: &mut SceneTimeline,
    name: impl Into<String>,
    pairs: Vec<(f64, f64)>,
) -> ScrollResult<()> {
    tl.declare(name, ValueKind::Alpha, KeyframeTrack::linear(pairs)?)
}

/// Opening scene, pinned while its region scrolls past: the title drifts
/// down and fades while the backdrop zooms, then a dark overlay takes
/// over.
pub fn hero() -> ScrollResult<SceneTimeline> {
    let mut tl = SceneTimeline::new(
        "hero",
        ScrollRegion::new(Anchor::EntersViewportTop, Anchor::LeavesViewportTop),
    );
    scalar(&mut tl, "title_y", vec![(0.0, 0.0), (1.0, 200.0)])?;
    alpha(&mut tl, "title_opacity", vec![(0.0, 1.0), (0.5, 0.0)])?;
    scalar(&mut tl, "image_scale", vec![(0.0, 1.0), (1.0, 1.15)])?;
    scalar(&mut tl, "image_y", vec![(0.0, 0.0), (1.0, 100.0)])?;
    alpha(&mut tl, "overlay_alpha", vec![(0.3, 0.0), (0.8, 0.8)])?;
    Ok(tl)
}

/// Interstitial quote: text rises through the viewport while fading in
/// and out, an underline sweeps open, and two light beams pulse.
pub fn transition() -> ScrollResult<SceneTimeline> {
    let mut tl = SceneTimeline::new(
        "transition",
        ScrollRegion::new(Anchor::EntersViewportBottom, Anchor::LeavesViewportTop),
    );
    tl.declare(
        "text_opacity",
        ValueKind::Alpha,
        track_ops::plateau(0.2, 0.4, 0.6, 0.8, 0.0, 1.0)?,
    )?;
    scalar(
        &mut tl,
        "text_y",
        vec![(0.2, 100.0), (0.5, 0.0), (0.8, -100.0)],
    )?;
    tl.declare(
        "line_width",
        ValueKind::Percent,
        KeyframeTrack::linear(vec![(0.3, 0.0), (0.6, 100.0)])?,
    )?;
    tl.declare(
        "beam_left_alpha",
        ValueKind::Alpha,
        track_ops::pulse(0.2, 0.5, 0.8, 0.0, 0.5)?,
    )?;
    tl.declare(
        "beam_right_alpha",
        ValueKind::Alpha,
        track_ops::pulse(0.3, 0.5, 0.7, 0.0, 0.5)?,
    )?;
    Ok(tl)
}

/// Chapter roster: one card visible at a time, selected by scroll
/// position, with a scroll hint that dims mid-scene and disappears at the
/// end.
pub fn roster(item_count: usize) -> ScrollResult<SceneTimeline> {
    let mut tl = SceneTimeline::new(
        "roster",
        ScrollRegion::new(Anchor::EntersViewportTop, Anchor::LeavesViewportBottom),
    )
    .with_selector(item_count)?;
    alpha(
        &mut tl,
        "hint_opacity",
        vec![(0.0, 1.0), (0.15, 0.5), (0.85, 0.5), (1.0, 0.0)],
    )?;
    Ok(tl)
}

/// Card grid: header slides in first, then each card gets a staggered
/// entrance window (opacity, rise, scale), then connection lines reveal.
pub fn grid(card_count: usize) -> ScrollResult<SceneTimeline> {
    let mut tl = SceneTimeline::new(
        "grid",
        ScrollRegion::new(Anchor::EntersViewportBottom, Anchor::LeavesViewportTop),
    );
    alpha(&mut tl, "header_opacity", vec![(0.0, 0.0), (0.15, 1.0)])?;
    scalar(&mut tl, "header_y", vec![(0.0, 50.0), (0.15, 0.0)])?;
    alpha(&mut tl, "lines_alpha", vec![(0.4, 0.0), (0.6, 1.0)])?;
    for i in 0..card_count {
        tl.declare(
            format!("card{i}_opacity"),
            ValueKind::Alpha,
            track_ops::entrance(i, 0.1, 0.1, 0.1, 0.0, 1.0)?,
        )?;
        tl.declare(
            format!("card{i}_y"),
            ValueKind::Scalar,
            track_ops::entrance(i, 0.1, 0.15, 0.1, 100.0, 0.0)?,
        )?;
        tl.declare(
            format!("card{i}_scale"),
            ValueKind::Scalar,
            track_ops::entrance(i, 0.1, 0.15, 0.1, 0.8, 1.0)?,
        )?;
    }
    Ok(tl)
}

/// AI companion panel: content and glow orb scale in, hold, fade out.
pub fn companion() -> ScrollResult<SceneTimeline> {
    let mut tl = SceneTimeline::new(
        "companion",
        ScrollRegion::new(Anchor::EntersViewportBottom, Anchor::LeavesViewportTop),
    );
    tl.declare(
        "content_opacity",
        ValueKind::Alpha,
        track_ops::plateau(0.1, 0.3, 0.7, 0.9, 0.0, 1.0)?,
    )?;
    scalar(&mut tl, "content_y", vec![(0.1, 100.0), (0.3, 0.0)])?;
    scalar(&mut tl, "orb_scale", vec![(0.2, 0.5), (0.5, 1.0)])?;
    alpha(&mut tl, "orb_alpha", vec![(0.1, 0.0), (0.3, 1.0)])?;
    Ok(tl)
}

/// Closing scene: content rises and stays, the backdrop darkens toward
/// the end of the page.
pub fn exit() -> ScrollResult<SceneTimeline> {
    let mut tl = SceneTimeline::new(
        "exit",
        ScrollRegion::new(Anchor::EntersViewportBottom, Anchor::LeavesViewportBottom),
    );
    alpha(
        &mut tl,
        "content_opacity",
        vec![(0.0, 0.0), (0.3, 1.0), (0.8, 1.0), (1.0, 1.0)],
    )?;
    scalar(&mut tl, "content_y", vec![(0.0, 100.0), (0.4, 0.0)])?;
    alpha(&mut tl, "backdrop_alpha", vec![(0.5, 0.0), (1.0, 0.8)])?;
    Ok(tl)
}
