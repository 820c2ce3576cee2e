//! Item placement for every layout kind and alignment.
//!
//! Coordinates are content-local with the y axis pointing up. Along the scroll axis the origin
//! is the content's start edge, so lines advancing left or down get negative coordinates. In
//! grids, the cross-axis coordinate is additionally relative to the content anchor.

use kurbo::{Point, Rect};

use crate::{
    Alignment, HorizontalDirection, ItemLayoutInfo, LayoutGeometry, LayoutKind, VerticalDirection,
};

/// Computes where the item at `index` goes.
///
/// Pure and deterministic: the same `(index, geometry)` always yields the same placement.
pub fn position_of(index: usize, geometry: &LayoutGeometry) -> ItemLayoutInfo {
    let g = geometry;
    let size = g.item_size;
    let anchor = g.item_anchor;
    let sx = size.width + g.spacing.column;
    let sy = size.height + g.spacing.line;

    let (x, y) = match (g.kind, g.alignment) {
        (LayoutKind::Line, Alignment::LeftToRight) => {
            let left = g.padding.x0 + sx * index as f64;
            (left + anchor.x * size.width, 0.0)
        }
        (LayoutKind::Line, Alignment::RightToLeft) => {
            let right = -g.padding.x1 - sx * index as f64;
            let left = right - size.width;
            (left + anchor.x * size.width, 0.0)
        }
        (LayoutKind::Line, Alignment::TopToBottom) => {
            let top = -g.padding.y0 - sy * index as f64;
            let bottom = top - size.height;
            (0.0, bottom + anchor.y * size.height)
        }
        (LayoutKind::Line, Alignment::BottomToTop) => {
            let bottom = g.padding.y1 + sy * index as f64;
            (0.0, bottom + anchor.y * size.height)
        }
        (LayoutKind::Grid, Alignment::TopToBottom) => {
            let (line, cross) = split(index, g.cross_count);
            let top = -g.padding.y0 - sy * line as f64;
            let bottom = top - size.height;
            (grid_x(cross, g), bottom + anchor.y * size.height)
        }
        (LayoutKind::Grid, Alignment::BottomToTop) => {
            let (line, cross) = split(index, g.cross_count);
            let bottom = g.padding.y1 + sy * line as f64;
            (grid_x(cross, g), bottom + anchor.y * size.height)
        }
        (LayoutKind::Grid, Alignment::LeftToRight) => {
            let (line, cross) = split(index, g.cross_count);
            let left = g.padding.x0 + sx * line as f64;
            (left + anchor.x * size.width, grid_y(cross, g))
        }
        (LayoutKind::Grid, Alignment::RightToLeft) => {
            let (line, cross) = split(index, g.cross_count);
            let right = -g.padding.x1 - sx * line as f64;
            let left = right - size.width;
            (left + anchor.x * size.width, grid_y(cross, g))
        }
    };

    let x0 = x - anchor.x * size.width;
    let y0 = y - anchor.y * size.height;
    ItemLayoutInfo {
        index,
        position: Point::new(x, y),
        bounds: Rect::new(x0, y0, x0 + size.width, y0 + size.height),
    }
}

fn split(index: usize, cross_count: usize) -> (usize, usize) {
    let n = cross_count.max(1);
    (index / n, index % n)
}

/// Anchor x of a grid cell `cross` columns away from the start edge.
fn grid_x(cross: usize, g: &LayoutGeometry) -> f64 {
    let w = g.item_size.width;
    let step = cross as f64 * (w + g.spacing.column);
    let content_w = g.content_cross_extent;
    match g.horizontal_direction {
        HorizontalDirection::LeftToRight => {
            g.padding.x0 + step + g.item_anchor.x * w - g.content_anchor.x * content_w
        }
        HorizontalDirection::RightToLeft => {
            let from_right = g.padding.x1 + step + (1.0 - g.item_anchor.x) * w;
            (1.0 - g.content_anchor.x) * content_w - from_right
        }
    }
}

/// Anchor y of a grid cell `cross` rows away from the start edge.
fn grid_y(cross: usize, g: &LayoutGeometry) -> f64 {
    let h = g.item_size.height;
    let step = cross as f64 * (h + g.spacing.line);
    let content_h = g.content_cross_extent;
    match g.vertical_direction {
        VerticalDirection::TopToBottom => {
            let from_top = g.padding.y0 + step + (1.0 - g.item_anchor.y) * h;
            (1.0 - g.content_anchor.y) * content_h - from_top
        }
        VerticalDirection::BottomToTop => {
            g.padding.y1 + step + g.item_anchor.y * h - g.content_anchor.y * content_h
        }
    }
}
