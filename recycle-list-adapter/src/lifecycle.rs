use alloc::vec::Vec;

use recycle_list::{ItemLayoutInfo, RecyclePool, ViewId, VisibleRange};

use crate::{ItemHost, ItemView, RenderCallback, SelectionController};

/// Owns every view a list has constructed and decides, per index, whether to create, reuse,
/// update or park one.
///
/// Active views are kept in the order they were bound. Lookups by index are linear, which is
/// fine because the active set is bounded by what fits in the viewport.
#[derive(Debug)]
pub struct ItemLifecycleManager<V> {
    pool: RecyclePool<V>,
    active: Vec<(usize, ViewId)>,
    rendered: Vec<usize>,
}

impl<V> Default for ItemLifecycleManager<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ItemLifecycleManager<V> {
    pub fn new() -> Self {
        Self {
            pool: RecyclePool::new(),
            active: Vec::new(),
            rendered: Vec::new(),
        }
    }

    /// Makes sure an active view represents `info.index`.
    ///
    /// A view that is already active is only touched when `force` is set. Returns `true` when
    /// a view was bound.
    pub fn create_or_update<T, H>(
        &mut self,
        info: &ItemLayoutInfo,
        record: &T,
        host: &mut H,
        selection: &SelectionController,
        force: bool,
        on_render: Option<&RenderCallback<V>>,
    ) -> bool
    where
        V: ItemView<T>,
        H: ItemHost<T, View = V>,
    {
        let index = info.index;
        if !self.rendered.contains(&index) {
            self.rendered.push(index);
        }

        if let Some(id) = self.active_id(index) {
            if !force {
                return false;
            }
            let Some(view) = self.pool.get_mut(id) else {
                return false;
            };
            bind_view(view, info, record, selection, on_render);
            return true;
        }

        let id = match self.pool.acquire() {
            Some(id) => id,
            None => self.pool.insert(host.create_view()),
        };
        let Some(view) = self.pool.get_mut(id) else {
            rwarn!(index, "lifecycle: pooled view vanished");
            return false;
        };
        host.attach_view(view);
        view.set_index(index);
        bind_view(view, info, record, selection, on_render);
        self.active.push((index, id));
        debug_assert_eq!(self.active.len(), self.pool.active_len());
        true
    }

    /// Parks every active view whose index falls outside `range` (all of them for `None`).
    ///
    /// Returns how many views were parked.
    pub fn recycle_outside<T, H>(&mut self, range: Option<VisibleRange>, host: &mut H) -> usize
    where
        H: ItemHost<T, View = V>,
    {
        let mut parked = 0;
        let pool = &mut self.pool;
        self.active.retain(|&(index, id)| {
            if range.is_some_and(|r| r.contains(index)) {
                return true;
            }
            if let Some(view) = pool.get_mut(id) {
                host.detach_view(view);
            }
            pool.release(id);
            parked += 1;
            false
        });
        if parked > 0 {
            rtrace!(parked, pooled = self.pool.pooled_len(), "views recycled");
        }
        parked
    }

    pub fn recycle_all<T, H>(&mut self, host: &mut H) -> usize
    where
        H: ItemHost<T, View = V>,
    {
        self.recycle_outside::<T, H>(None, host)
    }

    /// `true` when `items` covers the same indexes the previous pass rendered.
    ///
    /// Display lists are contiguous and ordered, so comparing the length and both ends is
    /// enough.
    pub fn is_same_pass(&self, items: &[ItemLayoutInfo]) -> bool {
        match (items.first(), items.last()) {
            (Some(first), Some(last)) => {
                items.len() == self.rendered.len()
                    && self.rendered.first() == Some(&first.index)
                    && self.rendered.last() == Some(&last.index)
            }
            _ => false,
        }
    }

    /// Forgets which indexes the previous pass rendered.
    pub fn begin_pass(&mut self) {
        self.rendered.clear();
    }

    fn active_id(&self, index: usize) -> Option<ViewId> {
        self.active
            .iter()
            .find_map(|&(i, id)| (i == index).then_some(id))
    }

    pub fn view_for(&self, index: usize) -> Option<&V> {
        self.pool.get(self.active_id(index)?)
    }

    pub fn view_for_mut(&mut self, index: usize) -> Option<&mut V> {
        let id = self.active_id(index)?;
        self.pool.get_mut(id)
    }

    /// Indexes of the active views, in binding order.
    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.active.iter().map(|&(index, _)| index)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn pooled_count(&self) -> usize {
        self.pool.pooled_len()
    }

    pub fn constructed_count(&self) -> usize {
        self.pool.len()
    }

    /// Destroys every view, active or pooled, through the host.
    pub fn teardown<T, H>(&mut self, host: &mut H)
    where
        H: ItemHost<T, View = V>,
    {
        rdebug!(destroyed = self.pool.len(), "destroying views");
        self.active.clear();
        self.rendered.clear();
        for view in self.pool.drain() {
            host.destroy_view(view);
        }
    }
}

fn bind_view<T, V: ItemView<T>>(
    view: &mut V,
    info: &ItemLayoutInfo,
    record: &T,
    selection: &SelectionController,
    on_render: Option<&RenderCallback<V>>,
) {
    view.set_position(info.position);
    view.bind(record);
    view.set_selected(selection.is_selected(info.index));
    if let Some(cb) = on_render {
        cb(view, info.index);
    }
}
