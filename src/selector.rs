use crate::error::{ScrollError, ScrollResult};

/// Scroll direction hint for transition styling. Does not affect which
/// index is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct IndexState {
    pub active_index: usize,
    pub direction: Direction,
}

/// Converts continuous progress into a stable one-of-N active index.
/// The first update always emits; after that, emission is debounced on
/// value, so consumers never see duplicate transitions to the same index.
/// A jump of more than one bucket in a single tick still emits exactly
/// once, with the direction set by the sign of the jump.
#[derive(Clone, Debug)]
pub struct IndexSelector {
    item_count: usize,
    state: IndexState,
    emitted: bool,
}

impl IndexSelector {
    pub fn new(item_count: usize) -> ScrollResult<Self> {
        if item_count == 0 {
            return Err(ScrollError::config("item_count must be > 0"));
        }
        Ok(Self {
            item_count,
            state: IndexState {
                active_index: 0,
                direction: Direction::Forward,
            },
            emitted: false,
        })
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn state(&self) -> IndexState {
        self.state
    }

    /// Progress outside [0,1] is clamped before bucketing, so the
    /// reported index is always in range. Floor bucketing assigns an
    /// exact boundary `k / item_count` to index `k`.
    pub fn update(&mut self, progress: f64) -> Option<IndexState> {
        let clamped = progress.clamp(0.0, 1.0);
        let raw = (clamped * self.item_count as f64).floor() as usize;
        let new_index = raw.min(self.item_count - 1);

        if self.emitted && new_index == self.state.active_index {
            return None;
        }

        let direction = if new_index < self.state.active_index {
            Direction::Backward
        } else {
            Direction::Forward
        };
        self.emitted = true;
        self.state = IndexState {
            active_index: new_index,
            direction,
        };
        Some(self.state)
    }

    /// Progress-bar fill synced to the active item: up to the center of
    /// the active dot.
    pub fn fill_fraction(&self) -> f64 {
        (self.state.active_index as f64 + 0.5) / self.item_count as f64
    }
}
