use alloc::sync::Arc;

use crate::{SelectionEvent, SelectionMode};

/// Called after a view is bound to an index, for caller-side customization.
pub type RenderCallback<V> = Arc<dyn Fn(&mut V, usize) + Send + Sync>;

/// Called after selection changes. The view is `None` when the selected index has no active
/// view.
pub type SelectCallback<V> = Arc<dyn Fn(Option<&mut V>, &SelectionEvent) + Send + Sync>;

/// Configuration for [`crate::RecycleList`].
pub struct ListOptions<V> {
    /// Scroll ticks skipped between passes while scrolling continuously. 0 runs a pass on
    /// every tick.
    pub scroll_update_rate: u32,

    /// Items created or updated per [`crate::RecycleList::tick`]. 0 renders every pass
    /// immediately.
    pub render_count_per_frame: usize,

    pub selected_mode: SelectionMode,

    pub on_render: Option<RenderCallback<V>>,

    pub on_select: Option<SelectCallback<V>>,
}

impl<V> Clone for ListOptions<V> {
    fn clone(&self) -> Self {
        Self {
            scroll_update_rate: self.scroll_update_rate,
            render_count_per_frame: self.render_count_per_frame,
            selected_mode: self.selected_mode,
            on_render: self.on_render.clone(),
            on_select: self.on_select.clone(),
        }
    }
}

impl<V> Default for ListOptions<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ListOptions<V> {
    pub fn new() -> Self {
        Self {
            scroll_update_rate: 1,
            render_count_per_frame: 0,
            selected_mode: SelectionMode::None,
            on_render: None,
            on_select: None,
        }
    }

    pub fn with_scroll_update_rate(mut self, rate: u32) -> Self {
        self.scroll_update_rate = rate;
        self
    }

    pub fn with_render_count_per_frame(mut self, count: usize) -> Self {
        self.render_count_per_frame = count;
        self
    }

    pub fn with_selected_mode(mut self, mode: SelectionMode) -> Self {
        self.selected_mode = mode;
        self
    }

    pub fn with_on_render(
        mut self,
        on_render: impl Fn(&mut V, usize) + Send + Sync + 'static,
    ) -> Self {
        self.on_render = Some(Arc::new(on_render));
        self
    }

    pub fn with_on_select(
        mut self,
        on_select: impl Fn(Option<&mut V>, &SelectionEvent) + Send + Sync + 'static,
    ) -> Self {
        self.on_select = Some(Arc::new(on_select));
        self
    }
}

impl<V> core::fmt::Debug for ListOptions<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("scroll_update_rate", &self.scroll_update_rate)
            .field("render_count_per_frame", &self.render_count_per_frame)
            .field("selected_mode", &self.selected_mode)
            .field("on_render", &self.on_render.is_some())
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}
