#![forbid(unsafe_code)]

pub mod core;
pub mod ease;
pub mod error;
pub mod model;
pub mod params;
pub mod particles;
pub mod sampler;
pub mod scenes;
pub mod scroller;
pub mod selector;
pub mod timeline;
pub mod track;
pub mod track_ops;

pub use crate::core::{RegionGeometry, Vec2, ViewportGeometry};
pub use crate::ease::Ease;
pub use crate::error::{ScrollError, ScrollResult};
pub use crate::model::{KeySpec, SceneSpec, TrackSpec};
pub use crate::params::{ParamSet, Value, ValueKind};
pub use crate::sampler::{Anchor, ProgressSampler, ScrollRegion};
pub use crate::scroller::{Scroller, Subscription};
pub use crate::selector::{Direction, IndexSelector, IndexState};
pub use crate::timeline::SceneTimeline;
pub use crate::track::{Keyframe, KeyframeTrack, Lerp};
