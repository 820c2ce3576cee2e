// Example: resolve a grid, then print what a scrolled viewport would show.
use kurbo::{Insets, Size, Vec2};
use recycle_list::{
    Axis, ContentInfo, LayoutDeclaration, LayoutGeometry, ScrollViewInfo, ViewportBounds,
    position_of, resolve_visible_range,
};

fn main() {
    let view_size = Size::new(327.0, 480.0);
    let layout = LayoutDeclaration::grid(Axis::Horizontal, Size::new(100.0, 100.0))
        .with_padding(Insets::new(10.0, 10.0, 10.0, 10.0))
        .with_spacing(10.0, 10.0);
    let info = ScrollViewInfo::new(view_size, ContentInfo::new(view_size, layout));

    let geometry = match LayoutGeometry::from_scroll_view(Some(&info)) {
        Ok(g) => g,
        Err(err) => {
            eprintln!("bad layout: {err}");
            return;
        }
    };
    let count = 1_000;
    let content = geometry.content_size_for(count, view_size);
    println!(
        "alignment={:?} columns={} content={:?}",
        geometry.alignment, geometry.cross_count, content
    );

    for scroll_y in [0.0, 250.0, 5_000.0, -80.0] {
        let bounds =
            ViewportBounds::compute(Vec2::new(0.0, scroll_y), view_size, content, geometry.alignment);
        let Some(range) = resolve_visible_range(&bounds, &geometry, count) else {
            println!("y={scroll_y}: nothing visible");
            continue;
        };
        let first = position_of(range.start, &geometry);
        let last = position_of(range.end, &geometry);
        println!(
            "y={scroll_y}: {range:?} ({} views) first_at={:?} last_at={:?}",
            range.len(),
            first.position,
            last.position
        );
    }
}
