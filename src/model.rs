//! Declarative scene description, the serde surface of the engine. A
//! host (or a JSON fixture) describes a scene's region, tracks, and
//! optional selector as plain data; `build` turns it into a live
//! [`SceneTimeline`], failing at construction on any bad wiring.

use std::collections::BTreeMap;

use crate::{
    ease::Ease,
    error::{ScrollError, ScrollResult},
    params::ValueKind,
    sampler::ScrollRegion,
    timeline::SceneTimeline,
    track::{Keyframe, KeyframeTrack},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneSpec {
    pub name: String,
    pub region: ScrollRegion,
    #[serde(default)]
    pub tracks: BTreeMap<String, TrackSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_count: Option<usize>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TrackSpec {
    pub kind: ValueKind,
    pub keys: Vec<KeySpec>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct KeySpec {
    pub breakpoint: f64,
    pub value: f64,
    #[serde(default)]
    pub ease: Ease,
}

impl TrackSpec {
    fn build(&self) -> ScrollResult<KeyframeTrack<f64>> {
        KeyframeTrack::new(
            self.keys
                .iter()
                .map(|k| Keyframe::eased(k.breakpoint, k.value, k.ease))
                .collect(),
        )
    }
}

impl SceneSpec {
    /// Checks every construction invariant without building. Surfaced to
    /// the caller immediately; nothing is silently corrected.
    pub fn validate(&self) -> ScrollResult<()> {
        if self.name.trim().is_empty() {
            return Err(ScrollError::model("scene name must be non-empty"));
        }
        if self.item_count == Some(0) {
            return Err(ScrollError::model(format!(
                "scene '{}' declares item_count 0",
                self.name
            )));
        }
        for (name, track) in &self.tracks {
            track.build().map_err(|err| {
                ScrollError::model(format!(
                    "scene '{}', track '{name}': {err}",
                    self.name
                ))
            })?;
        }
        Ok(())
    }

    pub fn build(&self) -> ScrollResult<SceneTimeline> {
        self.validate()?;
        let mut timeline = SceneTimeline::new(self.name.clone(), self.region);
        for (name, track) in &self.tracks {
            timeline.declare(name.clone(), track.kind, track.build()?)?;
        }
        if let Some(count) = self.item_count {
            timeline = timeline.with_selector(count)?;
        }
        Ok(timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::Anchor;

    fn basic_spec() -> SceneSpec {
        let mut tracks = BTreeMap::new();
        tracks.insert(
            "title_y".to_string(),
            TrackSpec {
                kind: ValueKind::Scalar,
                keys: vec![
                    KeySpec {
                        breakpoint: 0.0,
                        value: 0.0,
                        ease: Ease::Linear,
                    },
                    KeySpec {
                        breakpoint: 1.0,
                        value: 200.0,
                        ease: Ease::Linear,
                    },
                ],
            },
        );
        SceneSpec {
            name: "hero".to_string(),
            region: ScrollRegion::new(Anchor::EntersViewportTop, Anchor::LeavesViewportTop),
            tracks,
            item_count: None,
        }
    }

    #[test]
    fn json_roundtrip() {
        let spec = basic_spec();
        let s = serde_json::to_string_pretty(&spec).unwrap();
        let de: SceneSpec = serde_json::from_str(&s).unwrap();
        assert_eq!(de.name, "hero");
        assert_eq!(de.tracks.len(), 1);
        assert_eq!(de.region, spec.region);
    }

    #[test]
    fn ease_defaults_to_linear_in_json() {
        let s = r#"{
            "name": "x",
            "region": { "start": "enters-viewport-top", "end": "leaves-viewport-top" },
            "tracks": {
                "a": { "kind": "scalar", "keys": [
                    { "breakpoint": 0.0, "value": 0.0 },
                    { "breakpoint": 1.0, "value": 1.0 }
                ]}
            }
        }"#;
        let spec: SceneSpec = serde_json::from_str(s).unwrap();
        assert_eq!(spec.tracks["a"].keys[0].ease, Ease::Linear);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_name() {
        let mut spec = basic_spec();
        spec.name = "  ".to_string();
        assert!(spec.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_item_count() {
        let mut spec = basic_spec();
        spec.item_count = Some(0);
        assert!(spec.validate().is_err());
    }

    #[test]
    fn validate_rejects_short_track() {
        let mut spec = basic_spec();
        spec.tracks.get_mut("title_y").unwrap().keys.truncate(1);
        let err = spec.validate().unwrap_err();
        assert!(err.to_string().contains("title_y"));
    }

    #[test]
    fn validate_rejects_unsorted_track() {
        let mut spec = basic_spec();
        spec.tracks.get_mut("title_y").unwrap().keys[0].breakpoint = 2.0;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn build_produces_a_working_timeline() {
        let mut spec = basic_spec();
        spec.item_count = Some(7);
        let mut tl = spec.build().unwrap();
        tl.set_region_geometry(crate::core::RegionGeometry::new(0.0, 1000.0));
        tl.tick(crate::core::ViewportGeometry::new(500.0, 800.0));
        assert_eq!(tl.value("title_y").value, 100.0);
        assert_eq!(tl.index_state().unwrap().active_index, 3);
    }
}
