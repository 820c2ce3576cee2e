use kurbo::{Size, Vec2};

use crate::Alignment;

/// The visible window in content-local coordinates, plus how far the content is currently
/// overscrolled ("elastic") past either end.
///
/// Only the fields of the scroll axis are meaningful; the others are zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportBounds {
    pub view_top: f64,
    pub view_bottom: f64,
    pub view_left: f64,
    pub view_right: f64,
    pub elastic_top: f64,
    pub elastic_right: f64,
    pub elastic_bottom: f64,
    pub elastic_left: f64,
}

impl ViewportBounds {
    /// Recomputes the window from the content's offset inside the view.
    ///
    /// `scroll_offset` is the content origin relative to the view's start edge, as reported by
    /// the scroll container (y up).
    pub fn compute(
        scroll_offset: Vec2,
        view_size: Size,
        content_size: Size,
        alignment: Alignment,
    ) -> Self {
        let Vec2 { x, y } = scroll_offset;
        let mut b = Self::default();
        match alignment {
            Alignment::LeftToRight => {
                b.elastic_left = x.max(0.0);
                b.view_left = (-x).max(0.0) - b.elastic_left;
                b.view_right = b.view_left + view_size.width;
                b.elastic_right = (b.view_right - content_size.width).max(0.0);
                b.view_right += b.elastic_right;
            }
            Alignment::RightToLeft => {
                b.elastic_right = (-x).max(0.0);
                b.view_right = (-x).min(0.0) + b.elastic_right;
                b.view_left = b.view_right - view_size.width;
                b.elastic_left = (-content_size.width - b.view_left).max(0.0);
                b.view_left -= b.elastic_left;
            }
            Alignment::TopToBottom => {
                b.elastic_top = (-y).max(0.0);
                b.view_top = (-y).min(0.0) + b.elastic_top;
                b.view_bottom = b.view_top - view_size.height;
                b.elastic_bottom = (-content_size.height - b.view_bottom).max(0.0);
                b.view_bottom += b.elastic_bottom;
            }
            Alignment::BottomToTop => {
                b.elastic_bottom = y.max(0.0);
                b.view_bottom = (-y).max(0.0) - b.elastic_bottom;
                b.view_top = b.view_bottom + view_size.height;
                b.elastic_top = (b.view_top - content_size.height).max(0.0);
                b.view_top -= b.elastic_top;
            }
        }
        b
    }

    /// The window as `(near, far)` distances from the content's start edge along the scroll
    /// axis.
    pub fn main_span(&self, alignment: Alignment) -> (f64, f64) {
        match alignment {
            Alignment::LeftToRight => (self.view_left, self.view_right),
            Alignment::RightToLeft => (-self.view_right, -self.view_left),
            Alignment::TopToBottom => (-self.view_top, -self.view_bottom),
            Alignment::BottomToTop => (self.view_bottom, self.view_top),
        }
    }
}
