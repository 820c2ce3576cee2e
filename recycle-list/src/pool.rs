use alloc::vec::Vec;

/// Handle to a view stored in a [`RecyclePool`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(usize);

impl ViewId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// An arena of every view ever constructed, with a free list of the ones currently parked.
///
/// Views are never evicted: a released view stays in its slot until [`RecyclePool::drain`]
/// tears the whole pool down. `len() == active_len() + pooled_len()` always holds.
#[derive(Clone, Debug)]
pub struct RecyclePool<V> {
    views: Vec<V>,
    free: Vec<ViewId>,
    parked: Vec<bool>,
}

impl<V> Default for RecyclePool<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RecyclePool<V> {
    pub fn new() -> Self {
        Self {
            views: Vec::new(),
            free: Vec::new(),
            parked: Vec::new(),
        }
    }

    /// Stores a freshly constructed view and hands it out as active.
    pub fn insert(&mut self, view: V) -> ViewId {
        let id = ViewId(self.views.len());
        self.views.push(view);
        self.parked.push(false);
        rdebug!(total = self.views.len(), "recycle pool grew");
        id
    }

    /// Takes the most recently parked view, if any.
    pub fn acquire(&mut self) -> Option<ViewId> {
        let id = self.free.pop()?;
        self.parked[id.0] = false;
        Some(id)
    }

    /// Parks an active view so a later [`RecyclePool::acquire`] can hand it out again.
    ///
    /// Releasing a view that is already parked (or was never handed out) is ignored.
    pub fn release(&mut self, id: ViewId) {
        let len = self.parked.len();
        let Some(parked) = self.parked.get_mut(id.0) else {
            rwarn!(id = id.0, "recycle pool: unknown view released");
            debug_assert!(id.0 < len, "RecyclePool: unknown view (id={}, len={len})", id.0);
            return;
        };
        if *parked {
            rwarn!(id = id.0, "recycle pool: view released twice");
            debug_assert!(!*parked, "RecyclePool: view released twice (id={})", id.0);
            return;
        }
        *parked = true;
        self.free.push(id);
    }

    pub fn get(&self, id: ViewId) -> Option<&V> {
        self.views.get(id.0)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut V> {
        self.views.get_mut(id.0)
    }

    pub fn is_parked(&self, id: ViewId) -> bool {
        self.parked.get(id.0).copied().unwrap_or(false)
    }

    /// Number of views ever constructed (active + parked).
    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn pooled_len(&self) -> usize {
        self.free.len()
    }

    pub fn active_len(&self) -> usize {
        self.views.len() - self.free.len()
    }

    /// Removes every view, active or parked, leaving the pool empty.
    pub fn drain(&mut self) -> impl Iterator<Item = V> + '_ {
        self.free.clear();
        self.parked.clear();
        self.views.drain(..)
    }
}
