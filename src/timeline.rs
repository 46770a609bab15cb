use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::{
    core::{RegionGeometry, ViewportGeometry},
    error::ScrollResult,
    params::{ParamSet, Value, ValueKind},
    sampler::{ProgressSampler, ScrollRegion},
    scroller::{Scroller, Subscription},
    selector::{IndexSelector, IndexState},
    track::KeyframeTrack,
};

/// One scene's animation state: a progress sampler, the named parameter
/// tracks bound to it, and (for one-of-N scenes) an index selector. All
/// of it is recomputed synchronously per scroll/resize tick.
pub struct SceneTimeline {
    name: String,
    sampler: ProgressSampler,
    region_geom: RegionGeometry,
    params: ParamSet,
    selector: Option<IndexSelector>,
    progress: f64,
    // Scalar tap for the graphics collaborator; written once per tick,
    // never read back.
    progress_cell: Rc<Cell<f64>>,
}

impl SceneTimeline {
    pub fn new(name: impl Into<String>, region: ScrollRegion) -> Self {
        Self {
            name: name.into(),
            sampler: ProgressSampler::new(region),
            region_geom: RegionGeometry::default(),
            params: ParamSet::new(),
            selector: None,
            progress: 0.0,
            progress_cell: Rc::new(Cell::new(0.0)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> ScrollRegion {
        self.sampler.region()
    }

    /// Registers a named parameter track. Configuration errors surface
    /// here, before the scene ever attaches to a scroller.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        kind: ValueKind,
        track: KeyframeTrack<f64>,
    ) -> ScrollResult<()> {
        self.params.declare(name, kind, track)
    }

    /// Adds the one-of-N selector. `item_count == 0` is a construction
    /// error.
    pub fn with_selector(mut self, item_count: usize) -> ScrollResult<Self> {
        self.selector = Some(IndexSelector::new(item_count)?);
        Ok(self)
    }

    /// Called by the host when the scene's region is (re)measured.
    pub fn set_region_geometry(&mut self, geom: RegionGeometry) {
        self.region_geom = geom;
    }

    pub fn region_geometry(&self) -> RegionGeometry {
        self.region_geom
    }

    /// Recomputes everything from the current viewport: samples progress,
    /// re-evaluates all parameter tracks, updates the progress tap, and
    /// advances the selector. Returns the selector's emission, if any.
    pub fn tick(&mut self, viewport: ViewportGeometry) -> Option<IndexState> {
        self.progress = self.sampler.sample(self.region_geom, viewport);
        self.progress_cell.set(self.progress);
        self.params.update(self.progress);
        self.selector
            .as_mut()
            .and_then(|sel| sel.update(self.progress))
    }

    /// Last sampled progress, unclamped.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn progress_cell(&self) -> Rc<Cell<f64>> {
        self.progress_cell.clone()
    }

    /// Fail-fast parameter accessor; panics on an undeclared name.
    pub fn value(&self, name: &str) -> Value {
        self.params.value(name)
    }

    pub fn try_value(&self, name: &str) -> ScrollResult<Value> {
        self.params.try_value(name)
    }

    pub fn values(&self) -> BTreeMap<String, Value> {
        self.params.values()
    }

    pub fn index_state(&self) -> Option<IndexState> {
        self.selector.as_ref().map(IndexSelector::state)
    }

    pub fn fill_fraction(&self) -> Option<f64> {
        self.selector.as_ref().map(IndexSelector::fill_fraction)
    }

    /// Wires the timeline to a scroller for its mounted lifetime and runs
    /// one immediate tick so the scene reflects the current scroll. Index
    /// emissions are delivered to `on_index` (the scene-local transition
    /// renderer). Dropping the returned subscription is the unmount.
    #[must_use = "dropping the subscription detaches the timeline"]
    pub fn attach_with(
        timeline: Rc<RefCell<SceneTimeline>>,
        scroller: &Scroller,
        mut on_index: impl FnMut(IndexState) + 'static,
    ) -> Subscription {
        if let Some(state) = timeline.borrow_mut().tick(scroller.viewport()) {
            on_index(state);
        }
        let tl = timeline.clone();
        scroller.subscribe(move |viewport| {
            if let Some(state) = tl.borrow_mut().tick(viewport) {
                on_index(state);
            }
        })
    }

    /// [`attach_with`](Self::attach_with) for scenes without a selector
    /// (or ones that poll `index_state` instead).
    #[must_use = "dropping the subscription detaches the timeline"]
    pub fn attach(timeline: Rc<RefCell<SceneTimeline>>, scroller: &Scroller) -> Subscription {
        Self::attach_with(timeline, scroller, |_| {})
    }
}
