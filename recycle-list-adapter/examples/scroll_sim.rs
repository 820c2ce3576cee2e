use kurbo::{Point, Size, Vec2};
use recycle_list::{ContentInfo, LayoutDeclaration, ScrollViewInfo};
use recycle_list_adapter::{
    ItemHost, ItemView, ListOptions, RecycleList, ScrollEvent, SelectionMode,
};

#[derive(Debug, Default)]
struct Label {
    index: usize,
    text: String,
    at: Point,
    selected: bool,
}

impl ItemView<String> for Label {
    fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    fn set_position(&mut self, position: Point) {
        self.at = position;
    }

    fn bind(&mut self, record: &String) {
        self.text.clone_from(record);
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn is_selected(&self) -> bool {
        self.selected
    }
}

#[derive(Default)]
struct Scene {
    created: usize,
}

impl ItemHost<String> for Scene {
    type View = Label;

    fn create_view(&mut self) -> Label {
        self.created += 1;
        Label::default()
    }

    fn resize_content(&mut self, size: Size) {
        println!("content resized to {size:?}");
    }
}

fn main() {
    // Example: a chat-like vertical list fed by a fake scroll container, with frame budgeting.
    //
    // A real adapter would forward its scroll container's events to `on_scroll_event` and call
    // `tick` from its frame callback.
    let view = Size::new(320.0, 480.0);
    let info = ScrollViewInfo::new(
        view,
        ContentInfo::new(
            view,
            LayoutDeclaration::vertical(Size::new(320.0, 48.0)).with_spacing(0.0, 4.0),
        ),
    );
    let options = ListOptions::new()
        .with_render_count_per_frame(4)
        .with_selected_mode(SelectionMode::Single)
        .with_on_select(|view: Option<&mut Label>, event| {
            let text = view.map(|v| v.text.clone()).unwrap_or_default();
            println!("selected {} (was {:?}) {text}", event.id, event.previous);
        });

    let mut list = RecycleList::new(Scene::default(), options);
    if let Err(err) = list.init(Some(&info)) {
        eprintln!("init failed: {err}");
        return;
    }
    let messages: Vec<String> = (0..500).map(|i| format!("message #{i}")).collect();
    if let Err(err) = list.set_data(messages) {
        eprintln!("set_data failed: {err}");
        return;
    }

    let mut y = 0.0;
    let _ = list.on_scroll_event(ScrollEvent::Began, Vec2::new(0.0, y));
    for frame in 0..60 {
        if frame < 40 {
            y += 37.0;
            let _ = list.on_scroll_event(ScrollEvent::Scrolling, Vec2::new(0.0, y));
        } else if frame == 40 {
            let _ = list.on_scroll_event(ScrollEvent::Ended, Vec2::new(0.0, y));
        }
        let outcome = list.tick().ok().flatten();
        if frame % 10 == 0 || (outcome.is_some() && frame >= 40) {
            println!(
                "frame={frame} y={y} visible={:?} active={} pooled={} outcome={outcome:?}",
                list.visible_range(),
                list.active_count(),
                list.pooled_count(),
            );
        }
    }

    if let Some(range) = list.visible_range() {
        list.on_item_activated(range.start + 1);
    }
    println!(
        "views constructed: {} for {} records",
        list.host().created,
        list.len()
    );
    list.teardown();
}
