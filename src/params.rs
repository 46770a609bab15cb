use std::collections::BTreeMap;

use crate::{
    error::{ScrollError, ScrollResult},
    track::KeyframeTrack,
};

/// What a parameter's scalar channel means to the consumer. All channels
/// are carried as `f64`; the kind only tags the unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Plain number (pixels, scale factor, degrees).
    Scalar,
    /// 0..100 percentage (widths, offsets).
    Percent,
    /// 0..1 opacity channel.
    Alpha,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Value {
    pub kind: ValueKind,
    pub value: f64,
}

struct Param {
    kind: ValueKind,
    track: KeyframeTrack<f64>,
    current: f64,
}

/// A scene's named animated parameters, all driven by one progress
/// scalar. Tracks are pure and independent; evaluation order between them
/// is unobservable.
#[derive(Default)]
pub struct ParamSet {
    params: BTreeMap<String, Param>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a named track. The initial current value is the track's
    /// value at progress 0. Re-declaring a name is a configuration error.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        kind: ValueKind,
        track: KeyframeTrack<f64>,
    ) -> ScrollResult<()> {
        let name = name.into();
        if self.params.contains_key(&name) {
            return Err(ScrollError::config(format!(
                "parameter '{name}' declared twice"
            )));
        }
        let current = track.evaluate(0.0);
        self.params.insert(
            name,
            Param {
                kind,
                track,
                current,
            },
        );
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Re-evaluates every declared track at `progress`.
    pub fn update(&mut self, progress: f64) {
        for param in self.params.values_mut() {
            param.current = param.track.evaluate(progress);
        }
    }

    /// Fail-fast accessor. Reading a name that was never declared is a
    /// defect in scene wiring and panics.
    ///
    /// # Panics
    ///
    /// If `name` was not declared on this set.
    pub fn value(&self, name: &str) -> Value {
        match self.try_value(name) {
            Ok(v) => v,
            Err(err) => panic!("{err}"),
        }
    }

    /// Non-aborting accessor for callers that degrade a single scene
    /// instead of halting.
    pub fn try_value(&self, name: &str) -> ScrollResult<Value> {
        self.params
            .get(name)
            .map(|p| Value {
                kind: p.kind,
                value: p.current,
            })
            .ok_or_else(|| ScrollError::access(format!("parameter '{name}' was never declared")))
    }

    /// Snapshot of every current value, for consumers that read the whole
    /// set per tick.
    pub fn values(&self) -> BTreeMap<String, Value> {
        self.params
            .iter()
            .map(|(name, p)| {
                (
                    name.clone(),
                    Value {
                        kind: p.kind,
                        value: p.current,
                    },
                )
            })
            .collect()
    }
}
