use kurbo::{Insets, Size, Vec2};

use crate::{Axis, HorizontalDirection, VerticalDirection};

/// How children are arranged inside the content node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutType {
    /// A single row.
    Horizontal,
    /// A single column.
    #[default]
    Vertical,
    /// Rows or columns that wrap; see [`LayoutDeclaration::start_axis`].
    Grid,
}

/// How item sizes are determined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResizeMode {
    /// Items keep the template size.
    #[default]
    None,
    /// The container adapts to its children; items keep the template size.
    Container,
    /// Children are forced to [`LayoutDeclaration::cell_size`].
    Children,
}

/// Gaps between neighbouring items.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacing {
    /// Horizontal gap between columns.
    pub column: f64,
    /// Vertical gap between rows.
    pub line: f64,
}

impl Spacing {
    pub fn new(column: f64, line: f64) -> Self {
        Self { column, line }
    }

    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.column,
            Axis::Vertical => self.line,
        }
    }
}

/// The item prototype every view is instantiated from.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTemplate {
    pub size: Size,
    /// Anchor as a fraction of `size` (`(0.5, 0.5)` is the center).
    pub anchor: Vec2,
}

impl ItemTemplate {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            anchor: Vec2::new(0.5, 0.5),
        }
    }

    pub fn with_anchor(mut self, anchor: Vec2) -> Self {
        self.anchor = anchor;
        self
    }
}

impl Default for ItemTemplate {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

/// Static layout parameters declared on the content node.
///
/// This is read once when the list is initialized. Changing it afterwards has no effect until
/// the list is explicitly re-initialized.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutDeclaration {
    pub layout_type: LayoutType,
    /// For grids: the axis items fill first before wrapping to the next line.
    ///
    /// `Horizontal` fills rows (the grid scrolls vertically), `Vertical` fills columns (the
    /// grid scrolls horizontally). Ignored for line layouts.
    pub start_axis: Axis,
    pub horizontal_direction: HorizontalDirection,
    pub vertical_direction: VerticalDirection,
    /// Content padding (`x0` left, `y0` top, `x1` right, `y1` bottom).
    pub padding: Insets,
    pub spacing: Spacing,
    pub resize_mode: ResizeMode,
    /// Item size used when `resize_mode` is [`ResizeMode::Children`].
    pub cell_size: Size,
    pub template: ItemTemplate,
}

impl LayoutDeclaration {
    pub fn new(layout_type: LayoutType, template: ItemTemplate) -> Self {
        Self {
            layout_type,
            template,
            ..Self::default()
        }
    }

    /// A single column of `item_size` items, filled top to bottom.
    pub fn vertical(item_size: Size) -> Self {
        Self::new(LayoutType::Vertical, ItemTemplate::new(item_size))
    }

    /// A single row of `item_size` items, filled left to right.
    pub fn horizontal(item_size: Size) -> Self {
        Self::new(LayoutType::Horizontal, ItemTemplate::new(item_size))
    }

    /// A wrapping grid that fills along `start_axis` first.
    pub fn grid(start_axis: Axis, item_size: Size) -> Self {
        Self::new(LayoutType::Grid, ItemTemplate::new(item_size)).with_start_axis(start_axis)
    }

    pub fn with_start_axis(mut self, start_axis: Axis) -> Self {
        self.start_axis = start_axis;
        self
    }

    pub fn with_horizontal_direction(mut self, direction: HorizontalDirection) -> Self {
        self.horizontal_direction = direction;
        self
    }

    pub fn with_vertical_direction(mut self, direction: VerticalDirection) -> Self {
        self.vertical_direction = direction;
        self
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_spacing(mut self, column: f64, line: f64) -> Self {
        self.spacing = Spacing::new(column, line);
        self
    }

    pub fn with_resize_mode(mut self, resize_mode: ResizeMode) -> Self {
        self.resize_mode = resize_mode;
        self
    }

    pub fn with_cell_size(mut self, cell_size: Size) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_template(mut self, template: ItemTemplate) -> Self {
        self.template = template;
        self
    }

    /// The size every item is laid out with.
    pub fn item_size(&self) -> Size {
        match self.resize_mode {
            ResizeMode::Children => self.cell_size,
            ResizeMode::None | ResizeMode::Container => self.template.size,
        }
    }
}

/// The content node of a scroll view, as seen at initialization.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentInfo {
    pub size: Size,
    /// Anchor of the content node as a fraction of its size.
    ///
    /// Item coordinates are relative to this point. Along the scroll axis the anchor is assumed
    /// to sit on the start edge, so only its cross-axis component shifts grid cells.
    pub anchor: Vec2,
    pub layout: Option<LayoutDeclaration>,
}

impl ContentInfo {
    pub fn new(size: Size, layout: LayoutDeclaration) -> Self {
        Self {
            size,
            anchor: Vec2::new(0.5, 0.5),
            layout: Some(layout),
        }
    }

    pub fn with_anchor(mut self, anchor: Vec2) -> Self {
        self.anchor = anchor;
        self
    }
}

/// The host's scroll container, as seen at initialization.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollViewInfo {
    /// Size of the visible viewport.
    pub view_size: Size,
    pub content: Option<ContentInfo>,
}

impl ScrollViewInfo {
    pub fn new(view_size: Size, content: ContentInfo) -> Self {
        Self {
            view_size,
            content: Some(content),
        }
    }
}
