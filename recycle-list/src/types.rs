use kurbo::{Point, Rect};

/// Axis of a 2D layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Order in which children are placed along the x axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Order in which children are placed along the y axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalDirection {
    #[default]
    TopToBottom,
    BottomToTop,
}

/// Whether a resolved layout is a single strip or a wrapping grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutKind {
    Line,
    Grid,
}

/// The direction in which lines advance along the scroll axis.
///
/// Every layout (horizontal line, vertical line, and both grid orientations) collapses onto one
/// of these four values. Viewport tracking, range resolution, and item placement all branch on
/// it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Horizontal line, or a grid whose columns advance to the right.
    LeftToRight,
    /// Horizontal line, or a grid whose columns advance to the left.
    RightToLeft,
    /// Vertical line, or a grid whose rows advance downward.
    TopToBottom,
    /// Vertical line, or a grid whose rows advance upward.
    BottomToTop,
}

impl Alignment {
    /// The axis the content scrolls along.
    pub fn scroll_axis(self) -> Axis {
        match self {
            Self::LeftToRight | Self::RightToLeft => Axis::Horizontal,
            Self::TopToBottom | Self::BottomToTop => Axis::Vertical,
        }
    }

    /// `true` when lines advance toward negative coordinates (content-local, y up).
    pub fn is_reversed(self) -> bool {
        matches!(self, Self::RightToLeft | Self::TopToBottom)
    }
}

/// Placement of one item, computed per visibility pass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemLayoutInfo {
    /// Data index this placement belongs to.
    pub index: usize,
    /// Where the item's anchor point goes, in content-local coordinates.
    pub position: Point,
    /// The item's edges in content-local coordinates (y up, so `y1` is the top edge).
    pub bounds: Rect,
}

impl ItemLayoutInfo {
    /// Edges along `axis` as `(low, high)` coordinates.
    pub fn edges(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::Horizontal => (self.bounds.x0, self.bounds.x1),
            Axis::Vertical => (self.bounds.y0, self.bounds.y1),
        }
    }
}

/// Inclusive, contiguous range of visible indexes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize, // inclusive
}

impl VisibleRange {
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    pub fn iter(&self) -> core::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}
