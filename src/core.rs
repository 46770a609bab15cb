#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Shared read-only scroll input: the viewport top in document
/// coordinates (y grows downward) and the viewport height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportGeometry {
    pub scroll_y: f64,
    pub height: f64,
}

impl ViewportGeometry {
    pub fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }
}

/// Placement of one scene's scrollable region in document coordinates.
/// Re-measured by the host on layout changes; never cached by the engine
/// across frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RegionGeometry {
    pub top: f64,
    pub height: f64,
}

impl RegionGeometry {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}
