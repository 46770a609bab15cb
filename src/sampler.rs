use crate::core::{RegionGeometry, ViewportGeometry};

/// When a scroll region is considered to start or end, relative to the
/// viewport. Document coordinates, y grows downward; "enters" refers to
/// the region's top edge, "leaves" to its bottom edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// Region top reaches the viewport top.
    EntersViewportTop,
    /// Region top reaches the viewport bottom.
    EntersViewportBottom,
    /// Region bottom reaches the viewport top.
    LeavesViewportTop,
    /// Region bottom reaches the viewport bottom.
    LeavesViewportBottom,
}

impl Anchor {
    /// The scroll offset (viewport top) at which this anchor fires.
    fn scroll_offset(self, region: RegionGeometry, viewport_height: f64) -> f64 {
        match self {
            Self::EntersViewportTop => region.top,
            Self::EntersViewportBottom => region.top - viewport_height,
            Self::LeavesViewportTop => region.bottom(),
            Self::LeavesViewportBottom => region.bottom() - viewport_height,
        }
    }
}

/// A scene's scrollable boundary: progress runs 0 at `start` and 1 at
/// `end`. Owned by the scene; dropped with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRegion {
    pub start: Anchor,
    pub end: Anchor,
}

impl ScrollRegion {
    pub fn new(start: Anchor, end: Anchor) -> Self {
        Self { start, end }
    }
}

/// Maps live geometry to a normalized progress scalar. The result is NOT
/// clamped: consumers that care about out-of-range excursions (a scene not
/// yet in view) see them; keyframe tracks clamp implicitly by holding
/// their end values.
#[derive(Clone, Copy, Debug)]
pub struct ProgressSampler {
    region: ScrollRegion,
}

impl ProgressSampler {
    pub fn new(region: ScrollRegion) -> Self {
        Self { region }
    }

    pub fn region(&self) -> ScrollRegion {
        self.region
    }

    /// Start/end offsets are re-derived from the geometry arguments on
    /// every call; nothing is cached across frames. A zero-span region
    /// (unsettled initial layout) reports 0, healing on the next tick.
    pub fn sample(&self, region: RegionGeometry, viewport: ViewportGeometry) -> f64 {
        let start = self.region.start.scroll_offset(region, viewport.height);
        let end = self.region.end.scroll_offset(region, viewport.height);
        let span = end - start;
        if span == 0.0 || !span.is_finite() {
            tracing::debug!(start, end, "degenerate scroll region span, reporting 0");
            return 0.0;
        }
        (viewport.scroll_y - start) / span
    }
}
