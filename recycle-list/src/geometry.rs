use kurbo::{Insets, Size, Vec2};

use crate::{
    Alignment, Axis, ConfigError, ContentInfo, HorizontalDirection, LayoutDeclaration, LayoutKind,
    LayoutType, ScrollViewInfo, Spacing, VerticalDirection,
};

/// Keeps a content node that is shorter than its view from overshooting the view by a rounding
/// error, which would make the scroll container think there is something to scroll.
const CONTENT_EPSILON: f64 = 0.1;

/// Direction-agnostic description of a layout, resolved once from the layout declaration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutGeometry {
    pub kind: LayoutKind,
    pub alignment: Alignment,
    pub horizontal_direction: HorizontalDirection,
    pub vertical_direction: VerticalDirection,
    pub item_size: Size,
    /// Item anchor as a fraction of `item_size`.
    pub item_anchor: Vec2,
    pub padding: Insets,
    pub spacing: Spacing,
    /// Columns (grid filling rows) or rows (grid filling columns). Always 1 for lines.
    pub cross_count: usize,
    /// Content anchor as a fraction of the content size.
    pub content_anchor: Vec2,
    /// Extent of the content node across the scroll axis.
    pub content_cross_extent: f64,
}

impl LayoutGeometry {
    /// Resolves geometry from whatever the host found on its scroll view.
    pub fn from_scroll_view(scroll_view: Option<&ScrollViewInfo>) -> Result<Self, ConfigError> {
        let Some(scroll_view) = scroll_view else {
            rwarn!("scroll view is missing");
            return Err(ConfigError::MissingScrollView);
        };
        let view = scroll_view.view_size;
        if !(view.width.is_finite() && view.height.is_finite())
            || view.width < 0.0
            || view.height < 0.0
        {
            rwarn!(width = view.width, height = view.height, "invalid view size");
            return Err(ConfigError::InvalidViewSize {
                width: view.width,
                height: view.height,
            });
        }
        let Some(content) = scroll_view.content.as_ref() else {
            rwarn!("scroll view has no content node");
            return Err(ConfigError::MissingContent);
        };
        Self::from_content(content)
    }

    pub fn from_content(content: &ContentInfo) -> Result<Self, ConfigError> {
        let Some(layout) = content.layout.as_ref() else {
            rwarn!("content node has no layout declaration");
            return Err(ConfigError::MissingLayout);
        };
        Self::resolve(layout, content.size, content.anchor)
    }

    /// Resolves `layout` against the content node's size.
    ///
    /// For grids the cross count is found by packing items greedily into the content's cross
    /// extent (minus padding); a content node narrower than one item still gets one column.
    pub fn resolve(
        layout: &LayoutDeclaration,
        content_size: Size,
        content_anchor: Vec2,
    ) -> Result<Self, ConfigError> {
        let item_size = layout.item_size();
        if !(item_size.width.is_finite() && item_size.height.is_finite())
            || item_size.width <= 0.0
            || item_size.height <= 0.0
        {
            rwarn!(
                width = item_size.width,
                height = item_size.height,
                "invalid item size"
            );
            return Err(ConfigError::InvalidItemSize {
                width: item_size.width,
                height: item_size.height,
            });
        }
        let p = layout.padding;
        let s = layout.spacing;
        if [p.x0, p.y0, p.x1, p.y1, s.column, s.line]
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            rwarn!("invalid padding or spacing");
            return Err(ConfigError::InvalidSpacing);
        }

        let (kind, alignment) = match layout.layout_type {
            LayoutType::Horizontal => (
                LayoutKind::Line,
                horizontal_alignment(layout.horizontal_direction),
            ),
            LayoutType::Vertical => (
                LayoutKind::Line,
                vertical_alignment(layout.vertical_direction),
            ),
            LayoutType::Grid => match layout.start_axis {
                // Filling rows means lines stack vertically.
                Axis::Horizontal => (
                    LayoutKind::Grid,
                    vertical_alignment(layout.vertical_direction),
                ),
                Axis::Vertical => (
                    LayoutKind::Grid,
                    horizontal_alignment(layout.horizontal_direction),
                ),
            },
        };

        let cross_axis = alignment.scroll_axis().cross();
        let content_cross_extent = match cross_axis {
            Axis::Horizontal => content_size.width,
            Axis::Vertical => content_size.height,
        };

        let cross_count = match kind {
            LayoutKind::Line => 1,
            LayoutKind::Grid => {
                let (pad_a, pad_b, item, gap) = match cross_axis {
                    Axis::Horizontal => (p.x0, p.x1, item_size.width, s.column),
                    Axis::Vertical => (p.y0, p.y1, item_size.height, s.line),
                };
                fit_cross_count(content_cross_extent - pad_a - pad_b, item, gap)
            }
        };

        let geometry = Self {
            kind,
            alignment,
            horizontal_direction: layout.horizontal_direction,
            vertical_direction: layout.vertical_direction,
            item_size,
            item_anchor: layout.template.anchor,
            padding: p,
            spacing: s,
            cross_count,
            content_anchor,
            content_cross_extent,
        };
        rdebug!(
            kind = ?geometry.kind,
            alignment = ?geometry.alignment,
            cross_count = geometry.cross_count,
            "layout geometry resolved"
        );
        Ok(geometry)
    }

    pub fn scroll_axis(&self) -> Axis {
        self.alignment.scroll_axis()
    }

    /// Item extent along the scroll axis.
    pub fn main_extent(&self) -> f64 {
        match self.scroll_axis() {
            Axis::Horizontal => self.item_size.width,
            Axis::Vertical => self.item_size.height,
        }
    }

    /// Gap between consecutive lines along the scroll axis.
    pub fn main_spacing(&self) -> f64 {
        self.spacing.along(self.scroll_axis())
    }

    /// Distance from the start of one line to the start of the next.
    pub fn main_stride(&self) -> f64 {
        self.main_extent() + self.main_spacing()
    }

    /// Padding at the edge lines start from.
    pub fn main_padding_start(&self) -> f64 {
        match self.alignment {
            Alignment::LeftToRight => self.padding.x0,
            Alignment::RightToLeft => self.padding.x1,
            Alignment::TopToBottom => self.padding.y0,
            Alignment::BottomToTop => self.padding.y1,
        }
    }

    /// Padding at the edge lines run toward.
    pub fn main_padding_end(&self) -> f64 {
        match self.alignment {
            Alignment::LeftToRight => self.padding.x1,
            Alignment::RightToLeft => self.padding.x0,
            Alignment::TopToBottom => self.padding.y1,
            Alignment::BottomToTop => self.padding.y0,
        }
    }

    /// Number of lines needed for `num_items` items.
    pub fn line_count(&self, num_items: usize) -> usize {
        num_items.div_ceil(self.cross_count.max(1))
    }

    /// Exact content extent along the scroll axis for `num_items` items.
    pub fn content_extent(&self, num_items: usize) -> f64 {
        let lines = self.line_count(num_items) as f64;
        self.main_padding_start()
            + self.main_extent() * lines
            + self.main_spacing() * (lines - 1.0)
            + self.main_padding_end()
    }

    /// The size the content node should take for `num_items` items inside a view of
    /// `view_size`.
    ///
    /// Along the scroll axis content never ends up shorter than the view (minus a small
    /// epsilon); across it the declared extent is kept.
    pub fn content_size_for(&self, num_items: usize, view_size: Size) -> Size {
        let extent = self.content_extent(num_items);
        let view_extent = match self.scroll_axis() {
            Axis::Horizontal => view_size.width,
            Axis::Vertical => view_size.height,
        };
        let main = if extent < view_extent {
            view_extent - CONTENT_EPSILON
        } else {
            extent
        }
        .max(0.0);
        match self.scroll_axis() {
            Axis::Horizontal => Size::new(main, self.content_cross_extent),
            Axis::Vertical => Size::new(self.content_cross_extent, main),
        }
    }
}

fn horizontal_alignment(direction: HorizontalDirection) -> Alignment {
    match direction {
        HorizontalDirection::LeftToRight => Alignment::LeftToRight,
        HorizontalDirection::RightToLeft => Alignment::RightToLeft,
    }
}

fn vertical_alignment(direction: VerticalDirection) -> Alignment {
    match direction {
        VerticalDirection::TopToBottom => Alignment::TopToBottom,
        VerticalDirection::BottomToTop => Alignment::BottomToTop,
    }
}

/// Greedily counts how many `item`-sized cells separated by `gap` fit in `available`.
///
/// Never returns less than 1.
pub fn fit_cross_count(available: f64, item: f64, gap: f64) -> usize {
    debug_assert!(item > 0.0, "fit_cross_count: item extent must be positive");
    if !(available.is_finite() && available >= item) {
        return 1;
    }
    let used = |n: usize| n as f64 * item + (n as f64 - 1.0) * gap;
    let mut n = (((available + gap) / (item + gap)).floor() as usize).max(1);
    // The quotient can land one off an exact fit.
    if n > 1 && available - used(n) < 0.0 {
        n -= 1;
    } else if n < usize::MAX && available - used(n + 1) >= 0.0 {
        n += 1;
    }
    n
}
