use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use kurbo::{Size, Vec2};
use recycle_list::{
    ConfigError, ItemLayoutInfo, LayoutGeometry, ScrollViewInfo, ViewportBounds, VisibleRange,
    position_of, resolve_visible_range,
};

use crate::{
    BatchOutcome, FrameBudgetScheduler, ItemHost, ItemLifecycleManager, ItemView, ListError,
    ListOptions, ScrollEvent, SelectionController, SelectionEvent, SelectionMode,
};

/// A frame-driven recycling list.
///
/// The list holds no scene objects of its own. A host drives it by calling:
/// - [`RecycleList::init`] once the scroll container is available
/// - [`RecycleList::set_data`] whenever the backing records change
/// - [`RecycleList::on_scroll_event`] for scroll container signals
/// - [`RecycleList::tick`] once per frame (only does work when frame budgeting is enabled)
///
/// Views are created, attached, detached and destroyed through the [`ItemHost`].
pub struct RecycleList<T, H: ItemHost<T>> {
    host: H,
    options: ListOptions<H::View>,
    geometry: Option<LayoutGeometry>,
    view_size: Size,
    content_size: Size,
    scroll_offset: Vec2,
    viewport: ViewportBounds,
    data: Arc<[T]>,
    display: Vec<ItemLayoutInfo>,
    visible: Option<VisibleRange>,
    items: ItemLifecycleManager<H::View>,
    scheduler: FrameBudgetScheduler,
    selection: SelectionController,
    force_update: bool,
    scroll_counter: Option<u32>,
    is_scrolling: bool,
}

impl<T, H: ItemHost<T>> RecycleList<T, H> {
    pub fn new(host: H, options: ListOptions<H::View>) -> Self {
        let scheduler = FrameBudgetScheduler::new(options.render_count_per_frame);
        let selection = SelectionController::new(options.selected_mode);
        Self {
            host,
            options,
            geometry: None,
            view_size: Size::ZERO,
            content_size: Size::ZERO,
            scroll_offset: Vec2::ZERO,
            viewport: ViewportBounds::default(),
            data: Arc::from(Vec::new()),
            display: Vec::new(),
            visible: None,
            items: ItemLifecycleManager::new(),
            scheduler,
            selection,
            force_update: false,
            scroll_counter: None,
            is_scrolling: false,
        }
    }

    pub fn options(&self) -> &ListOptions<H::View> {
        &self.options
    }

    /// Resolves layout geometry from the host's scroll view and runs a first pass.
    ///
    /// Fails with [`ConfigError::AlreadyInitialized`] on an initialized list; use
    /// [`RecycleList::reinitialize`] to resolve geometry again.
    pub fn init(&mut self, scroll_view: Option<&ScrollViewInfo>) -> Result<(), ListError> {
        if self.geometry.is_some() {
            rwarn!("list is already initialized");
            return Err(ConfigError::AlreadyInitialized.into());
        }
        self.apply_scroll_view(scroll_view)
    }

    /// Resolves geometry again, for example after the content size or layout declaration
    /// changed.
    ///
    /// Every active view is parked and any in-flight batch is dropped before a forced pass
    /// renders the list under the new geometry. On error the list is left untouched.
    pub fn reinitialize(&mut self, scroll_view: Option<&ScrollViewInfo>) -> Result<(), ListError> {
        LayoutGeometry::from_scroll_view(scroll_view)?;
        self.items.recycle_all::<T, H>(&mut self.host);
        self.items.begin_pass();
        self.scheduler.reset();
        self.display.clear();
        self.visible = None;
        self.viewport = ViewportBounds::default();
        self.scroll_counter = None;
        self.apply_scroll_view(scroll_view)
    }

    fn apply_scroll_view(&mut self, scroll_view: Option<&ScrollViewInfo>) -> Result<(), ListError> {
        let geometry = LayoutGeometry::from_scroll_view(scroll_view)?;
        let Some(info) = scroll_view else {
            return Err(ConfigError::MissingScrollView.into());
        };
        self.view_size = info.view_size;
        self.geometry = Some(geometry);
        rdebug!(
            alignment = ?geometry.alignment,
            cross_count = geometry.cross_count,
            "list initialized"
        );
        self.resize_content();
        self.force_update = true;
        self.refresh()
    }

    /// Replaces the backing records and forces a full pass.
    pub fn set_data(&mut self, data: impl Into<Arc<[T]>>) -> Result<(), ListError> {
        if self.geometry.is_none() {
            rwarn!("set_data called before init");
            return Err(ConfigError::NotInitialized.into());
        }
        self.data = data.into();
        rdebug!(len = self.data.len(), "data replaced");
        self.force_update = true;
        self.resize_content();
        self.refresh()
    }

    /// Handles a scroll container signal. `offset` is the content's current position.
    pub fn on_scroll_event(&mut self, event: ScrollEvent, offset: Vec2) -> Result<(), ListError> {
        if self.geometry.is_none() {
            rwarn!(event = ?event, "scroll event before init");
            return Err(ConfigError::NotInitialized.into());
        }
        self.scroll_offset = offset;
        match event {
            ScrollEvent::Began => {
                self.is_scrolling = true;
                Ok(())
            }
            ScrollEvent::Scrolling => {
                self.is_scrolling = true;
                if self.throttled() {
                    return Ok(());
                }
                self.run_pass()
            }
            ScrollEvent::Ended => {
                self.is_scrolling = false;
                self.refresh()
            }
            ScrollEvent::TouchUp => Ok(()),
        }
    }

    /// Runs a visibility pass at the current offset, bypassing the scroll throttle.
    pub fn refresh(&mut self) -> Result<(), ListError> {
        self.scroll_counter = Some(self.options.scroll_update_rate);
        self.run_pass()
    }

    fn throttled(&mut self) -> bool {
        let rate = self.options.scroll_update_rate;
        let counter = self.scroll_counter.get_or_insert(rate);
        if !self.force_update && *counter > 0 {
            *counter -= 1;
            return true;
        }
        *counter = rate;
        false
    }

    fn resize_content(&mut self) {
        let Some(geometry) = self.geometry else {
            return;
        };
        self.content_size = geometry.content_size_for(self.data.len(), self.view_size);
        rtrace!(
            width = self.content_size.width,
            height = self.content_size.height,
            "content resized"
        );
        self.host.resize_content(self.content_size);
    }

    fn run_pass(&mut self) -> Result<(), ListError> {
        let Some(geometry) = self.geometry else {
            return Err(ConfigError::NotInitialized.into());
        };
        self.viewport = ViewportBounds::compute(
            self.scroll_offset,
            self.view_size,
            self.content_size,
            geometry.alignment,
        );
        self.visible = resolve_visible_range(&self.viewport, &geometry, self.data.len());
        self.display.clear();
        if let Some(range) = self.visible {
            self.display
                .extend(range.iter().map(|index| position_of(index, &geometry)));
        }

        if self.display.is_empty() {
            self.items.recycle_all::<T, H>(&mut self.host);
            self.items.begin_pass();
            self.scheduler.reset();
            self.force_update = false;
            return Ok(());
        }

        if !self.force_update && self.items.is_same_pass(&self.display) {
            return Ok(());
        }

        self.items.begin_pass();
        if self.scheduler.is_enabled() {
            self.scheduler.enqueue(self.display.len());
            return Ok(());
        }

        self.render_range(0..self.display.len())?;
        self.items.recycle_outside::<T, H>(self.visible, &mut self.host);
        self.force_update = false;
        Ok(())
    }

    fn render_range(&mut self, range: Range<usize>) -> Result<(), ListError> {
        let force = self.force_update;
        let on_render = self.options.on_render.as_ref();
        for info in self.display.get(range).unwrap_or(&[]) {
            let Some(record) = self.data.get(info.index) else {
                rwarn!(index = info.index, len = self.data.len(), "visible index has no record");
                return Err(ListError::MissingRecord {
                    index: info.index,
                    len: self.data.len(),
                });
            };
            self.items.create_or_update(
                info,
                record,
                &mut self.host,
                &self.selection,
                force,
                on_render,
            );
        }
        Ok(())
    }

    /// Advances frame-budgeted rendering by one batch.
    ///
    /// Returns `None` when frame budgeting is off or there is nothing left to render.
    pub fn tick(&mut self) -> Result<Option<BatchOutcome>, ListError> {
        if !self.scheduler.is_enabled() {
            return Ok(None);
        }
        let Some(batch) = self.scheduler.advance(self.is_scrolling) else {
            return Ok(None);
        };
        self.render_range(batch.range.clone())?;
        rtrace!(
            start = batch.range.start,
            end = batch.range.end,
            "batch rendered"
        );
        if batch.outcome == BatchOutcome::Done {
            self.items.recycle_outside::<T, H>(self.visible, &mut self.host);
            self.force_update = false;
        }
        Ok(Some(batch.outcome))
    }

    /// Requests selection of `id`, updating whichever views are active.
    ///
    /// Returns the event passed to the selection callback, or `None` when nothing changed.
    pub fn set_select_id(&mut self, id: usize) -> Option<SelectionEvent> {
        let event = self.selection.select(id)?;
        if let Some(view) = self.items.view_for_mut(id) {
            view.set_selected(event.selected);
        }
        if self.selection.mode() == SelectionMode::Single {
            if let Some(previous) = event.previous {
                if let Some(view) = self.items.view_for_mut(previous) {
                    view.set_selected(false);
                }
            }
        }
        rdebug!(id, previous = ?event.previous, selected = event.selected, "selection changed");
        if let Some(cb) = self.options.on_select.as_ref() {
            cb(self.items.view_for_mut(id), &event);
        }
        Some(event)
    }

    /// Maps a click on the view representing `index` to a selection request.
    pub fn on_item_activated(&mut self, index: usize) -> Option<SelectionEvent> {
        self.set_select_id(index)
    }

    /// Deselects everything without emitting a selection event.
    pub fn clear_selection(&mut self) {
        for id in self.selection.clear() {
            if let Some(view) = self.items.view_for_mut(id) {
                view.set_selected(false);
            }
        }
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        self.is_scrolling = is_scrolling;
    }

    /// Destroys every view and drops any in-flight batch. The list can be used again; the next
    /// pass constructs fresh views.
    pub fn teardown(&mut self) {
        self.items.teardown::<T, H>(&mut self.host);
        self.scheduler.reset();
        self.display.clear();
        self.visible = None;
        self.force_update = false;
        rdebug!("list torn down");
    }

    pub fn is_initialized(&self) -> bool {
        self.geometry.is_some()
    }

    pub fn geometry(&self) -> Option<&LayoutGeometry> {
        self.geometry.as_ref()
    }

    pub fn viewport(&self) -> &ViewportBounds {
        &self.viewport
    }

    pub fn visible_range(&self) -> Option<VisibleRange> {
        self.visible
    }

    /// Placements computed by the latest pass.
    pub fn display_items(&self) -> &[ItemLayoutInfo] {
        &self.display
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn scroll_offset(&self) -> Vec2 {
        self.scroll_offset
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// The active view representing `index`, if any.
    pub fn item_by_index(&self, index: usize) -> Option<&H::View> {
        self.items.view_for(index)
    }

    pub fn item_by_index_mut(&mut self, index: usize) -> Option<&mut H::View> {
        self.items.view_for_mut(index)
    }

    /// Indexes represented by active views, ascending.
    pub fn active_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.items.active_indices().collect();
        indices.sort_unstable();
        indices
    }

    pub fn active_count(&self) -> usize {
        self.items.active_count()
    }

    pub fn pooled_count(&self) -> usize {
        self.items.pooled_count()
    }

    pub fn constructed_count(&self) -> usize {
        self.items.constructed_count()
    }

    pub fn selected_id(&self) -> Option<usize> {
        self.selection.selected_id()
    }

    pub fn selected_ids(&self) -> Vec<usize> {
        self.selection.selected_ids()
    }

    /// `true` while a frame-budgeted pass is in flight.
    pub fn is_rendering(&self) -> bool {
        !self.scheduler.is_idle()
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<T, H> core::fmt::Debug for RecycleList<T, H>
where
    H: ItemHost<T>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecycleList")
            .field("options", &self.options)
            .field("geometry", &self.geometry)
            .field("len", &self.data.len())
            .field("visible", &self.visible)
            .field("active", &self.items.active_count())
            .field("pooled", &self.items.pooled_count())
            .field("scheduler", &self.scheduler.state())
            .field("is_scrolling", &self.is_scrolling)
            .finish_non_exhaustive()
    }
}
