use crate::{LayoutGeometry, ViewportBounds, VisibleRange};

/// Maps a viewport window to the contiguous range of indexes that overlap it.
///
/// Returns `None` when nothing is visible (no items, or the window lies entirely outside the
/// content). Callers should park every active view in that case.
///
/// An item touching the window only at an edge is not visible. In grids the range covers whole
/// lines, so every cell of a partially visible row (or column) is included.
pub fn resolve_visible_range(
    bounds: &ViewportBounds,
    geometry: &LayoutGeometry,
    num_items: usize,
) -> Option<VisibleRange> {
    if num_items == 0 {
        return None;
    }

    let (near, far) = bounds.main_span(geometry.alignment);
    let pad = geometry.main_padding_start();
    let extent = geometry.main_extent();
    let stride = geometry.main_stride();

    // Line `l` spans `[pad + l*stride, pad + l*stride + extent]` from the start edge.
    let first_line = ((near - pad - extent) / stride).floor() + 1.0;
    let last_line = ((far - pad) / stride).ceil() - 1.0;
    if !(first_line.is_finite() && last_line.is_finite()) || last_line < first_line {
        rtrace!(near, far, "no visible lines");
        return None;
    }
    if last_line < 0.0 {
        return None;
    }

    let cross = geometry.cross_count.max(1);
    let last_index = num_items - 1;
    let line_count = geometry.line_count(num_items);
    let first_line = first_line.max(0.0);
    if first_line >= line_count as f64 {
        return None;
    }

    let first_line = first_line as usize;
    let last_line = (last_line as usize).min(line_count - 1);
    let start = first_line * cross;
    let end = ((last_line + 1) * cross - 1).min(last_index);
    if start > end {
        return None;
    }

    rtrace!(start, end, "visible range resolved");
    Some(VisibleRange { start, end })
}
