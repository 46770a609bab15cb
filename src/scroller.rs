use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::core::ViewportGeometry;

type Handler = Box<dyn FnMut(ViewportGeometry)>;

struct Entry {
    id: u64,
    dead: bool,
    // Taken out of the slot while its handler runs.
    handler: Option<Handler>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

struct ScrollerInner {
    viewport: Cell<ViewportGeometry>,
    registry: RefCell<Registry>,
    dispatching: Cell<bool>,
}

/// The scroll/resize event hub. Single-threaded and synchronous: every
/// geometry change runs all registered handlers, in registration order,
/// before returning. Handlers may subscribe or unsubscribe during a
/// dispatch; handlers added mid-dispatch first run on the next tick, and
/// a handler unsubscribed mid-dispatch never runs again. A handler that
/// panics unwinds out of the notification and is unregistered; the other
/// handlers keep receiving ticks.
#[derive(Clone)]
pub struct Scroller {
    inner: Rc<ScrollerInner>,
}

impl Scroller {
    pub fn new(viewport: ViewportGeometry) -> Self {
        Self {
            inner: Rc::new(ScrollerInner {
                viewport: Cell::new(viewport),
                registry: RefCell::new(Registry::default()),
                dispatching: Cell::new(false),
            }),
        }
    }

    pub fn viewport(&self) -> ViewportGeometry {
        self.inner.viewport.get()
    }

    /// Registers a handler for every scroll/resize notification. The
    /// returned [`Subscription`] is the disposer: dropping it tears the
    /// registration down immediately.
    #[must_use = "dropping the subscription unregisters the handler"]
    pub fn subscribe(&self, handler: impl FnMut(ViewportGeometry) + 'static) -> Subscription {
        let mut registry = self.inner.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push(Entry {
            id,
            dead: false,
            handler: Some(Box::new(handler)),
        });
        Subscription {
            id,
            scroller: Rc::downgrade(&self.inner),
        }
    }

    /// Scroll notification.
    pub fn set_scroll(&self, scroll_y: f64) {
        let mut viewport = self.inner.viewport.get();
        viewport.scroll_y = scroll_y;
        self.inner.viewport.set(viewport);
        self.dispatch(viewport);
    }

    /// Resize notification. Anchors depend on viewport height, so this
    /// re-dispatches like a scroll tick.
    #[tracing::instrument(skip(self))]
    pub fn set_viewport_height(&self, height: f64) {
        let mut viewport = self.inner.viewport.get();
        viewport.height = height;
        self.inner.viewport.set(viewport);
        self.dispatch(viewport);
    }

    fn dispatch(&self, viewport: ViewportGeometry) {
        if self.inner.dispatching.replace(true) {
            // A handler moved the scroll position mid-dispatch. The
            // engine never does this itself (it is read-only w.r.t.
            // scroll); the outer dispatch carries on with the updated
            // geometry on its next tick.
            return;
        }

        // Cleanup runs in the guard's Drop, so a panicking handler still
        // leaves the scroller dispatchable: the unwound entry (its slot
        // is empty at that point) is purged and siblings keep animating.
        let _guard = DispatchGuard { inner: &self.inner };

        // Dead entries are only marked during dispatch, never removed, so
        // indices up to this snapshot stay stable.
        let snapshot_len = self.inner.registry.borrow().entries.len();

        for i in 0..snapshot_len {
            let taken = {
                let mut registry = self.inner.registry.borrow_mut();
                let entry = &mut registry.entries[i];
                if entry.dead {
                    None
                } else {
                    entry.handler.take().map(|h| (entry.id, h))
                }
            };
            let Some((id, mut handler)) = taken else {
                continue;
            };

            // Registry borrow is released while the handler runs.
            handler(viewport);

            let mut registry = self.inner.registry.borrow_mut();
            if let Some(entry) = registry.entries.iter_mut().find(|e| e.id == id)
                && !entry.dead
            {
                entry.handler = Some(handler);
            }
        }
    }

    #[cfg(test)]
    fn handler_count(&self) -> usize {
        self.inner.registry.borrow().entries.len()
    }
}

struct DispatchGuard<'a> {
    inner: &'a ScrollerInner,
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        let mut registry = self.inner.registry.borrow_mut();
        // On the normal path only dead entries match; after an unwind the
        // panicked handler's slot is also still empty and goes with them.
        let (kept, purged): (Vec<Entry>, Vec<Entry>) = std::mem::take(&mut registry.entries)
            .into_iter()
            .partition(|e| !e.dead && e.handler.is_some());
        registry.entries = kept;
        drop(registry);
        self.inner.dispatching.set(false);
        // Purged handlers may own subscriptions of their own; drop them
        // only once the registry borrow is released and the flag is down.
        drop(purged);
    }
}

/// RAII disposer for one handler registration. Owned by the scene for its
/// mounted lifetime; dropping it on unmount guarantees no further
/// recomputation touches that scene.
pub struct Subscription {
    id: u64,
    scroller: Weak<ScrollerInner>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.scroller.upgrade() else {
            return;
        };
        let mut registry = inner.registry.borrow_mut();
        if inner.dispatching.get() {
            if let Some(entry) = registry.entries.iter_mut().find(|e| e.id == self.id) {
                entry.dead = true;
            }
        } else {
            registry.entries.retain(|e| e.id != self.id);
        }
    }
}
