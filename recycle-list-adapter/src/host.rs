use kurbo::{Point, Size};

/// A single recyclable item view, as seen by the list.
///
/// Views are reused across indexes: every call to [`ItemView::bind`] may carry a different
/// record than the last one.
pub trait ItemView<T> {
    /// Tags the view with the data index it now represents.
    fn set_index(&mut self, index: usize);

    /// Moves the view's anchor to `position` (content-local, y up).
    fn set_position(&mut self, position: Point);

    fn bind(&mut self, record: &T);

    fn set_selected(&mut self, selected: bool);

    fn is_selected(&self) -> bool;
}

/// The scene side of a list: constructs views and owns the content node they live in.
///
/// Only `create_view` is required. The remaining hooks default to no-ops for hosts that keep
/// every view attached and let position alone decide what is drawn.
pub trait ItemHost<T> {
    type View: ItemView<T>;

    /// Instantiates a new view from the item template.
    fn create_view(&mut self) -> Self::View;

    /// Called when a view (fresh or pooled) is put into the content node.
    fn attach_view(&mut self, _view: &mut Self::View) {}

    /// Called when a view is parked in the pool.
    fn detach_view(&mut self, _view: &mut Self::View) {}

    /// Called for every view on teardown.
    fn destroy_view(&mut self, _view: Self::View) {}

    /// The content node should take `size` so the scroll container can scroll the whole list.
    fn resize_content(&mut self, _size: Size) {}
}

/// Scroll container lifecycle signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollEvent {
    Began,
    Scrolling,
    Ended,
    TouchUp,
}
