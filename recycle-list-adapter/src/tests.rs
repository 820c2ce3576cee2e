use crate::*;

use kurbo::{Insets, Point, Size, Vec2};
use recycle_list::{Axis, ConfigError, ContentInfo, LayoutDeclaration, ScrollViewInfo};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct FakeView {
    serial: usize,
    index: Option<usize>,
    position: Point,
    record: Option<u32>,
    selected: bool,
    attached: bool,
    binds: usize,
    moves: usize,
}

impl ItemView<u32> for FakeView {
    fn set_index(&mut self, index: usize) {
        self.index = Some(index);
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
        self.moves += 1;
    }

    fn bind(&mut self, record: &u32) {
        self.record = Some(*record);
        self.binds += 1;
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn is_selected(&self) -> bool {
        self.selected
    }
}

#[derive(Debug, Default)]
struct FakeHost {
    created: usize,
    attached: usize,
    detached: usize,
    destroyed: usize,
    content: Size,
}

impl ItemHost<u32> for FakeHost {
    type View = FakeView;

    fn create_view(&mut self) -> FakeView {
        self.created += 1;
        FakeView {
            serial: self.created,
            ..FakeView::default()
        }
    }

    fn attach_view(&mut self, view: &mut FakeView) {
        self.attached += 1;
        view.attached = true;
    }

    fn detach_view(&mut self, view: &mut FakeView) {
        self.detached += 1;
        view.attached = false;
    }

    fn destroy_view(&mut self, _view: FakeView) {
        self.destroyed += 1;
    }

    fn resize_content(&mut self, size: Size) {
        self.content = size;
    }
}

type TestList = RecycleList<u32, FakeHost>;

fn vertical_view(height: f64) -> ScrollViewInfo {
    ScrollViewInfo::new(
        Size::new(100.0, height),
        ContentInfo::new(
            Size::new(100.0, height),
            LayoutDeclaration::vertical(Size::new(100.0, 50.0)),
        ),
    )
}

fn records(n: u32) -> Vec<u32> {
    (0..n).collect()
}

fn eager() -> ListOptions<FakeView> {
    ListOptions::new().with_scroll_update_rate(0)
}

fn list_with(options: ListOptions<FakeView>, view_height: f64, n: u32) -> TestList {
    let mut list = RecycleList::new(FakeHost::default(), options);
    list.init(Some(&vertical_view(view_height))).unwrap();
    list.set_data(records(n)).unwrap();
    list
}

fn scroll_to(list: &mut TestList, y: f64) {
    list.on_scroll_event(ScrollEvent::Scrolling, Vec2::new(0.0, y))
        .unwrap();
}

fn range(start: usize, end: usize) -> Vec<usize> {
    (start..=end).collect()
}

fn assert_consistent(list: &TestList) {
    let active = list.active_indices();
    let mut unique = active.clone();
    unique.dedup();
    assert_eq!(unique, active, "two active views share an index");

    assert_eq!(
        list.active_count() + list.pooled_count(),
        list.constructed_count()
    );
    let host = list.host();
    assert_eq!(host.attached - host.detached, list.active_count());
    assert_eq!(host.created, list.constructed_count());

    if !list.is_rendering() {
        let expected: Vec<usize> = list
            .visible_range()
            .map(|r| r.iter().collect())
            .unwrap_or_default();
        assert_eq!(active, expected);
    }
    for index in active {
        let view = list.item_by_index(index).unwrap();
        assert_eq!(view.index, Some(index));
        assert!(view.attached);
    }
}

#[test]
fn first_pass_binds_visible_range() {
    let list = list_with(eager(), 300.0, 100);
    assert_eq!(list.active_indices(), range(0, 5));
    assert_eq!(list.host().content, Size::new(100.0, 5000.0));
    assert_eq!(list.content_size(), Size::new(100.0, 5000.0));
    assert_eq!(list.len(), 100);

    let view = list.item_by_index(2).unwrap();
    assert_eq!(view.record, Some(2));
    assert_eq!(view.position, Point::new(0.0, -125.0));
    assert!(list.item_by_index(6).is_none());
    assert_eq!(list.display_items().len(), 6);
    assert_consistent(&list);
}

#[test]
fn content_is_resized_for_item_count() {
    let info = ScrollViewInfo::new(
        Size::new(100.0, 300.0),
        ContentInfo::new(
            Size::new(100.0, 300.0),
            LayoutDeclaration::vertical(Size::new(100.0, 50.0)).with_spacing(0.0, 5.0),
        ),
    );
    let mut list = RecycleList::new(FakeHost::default(), eager());
    list.init(Some(&info)).unwrap();

    list.set_data(records(10)).unwrap();
    assert_eq!(list.host().content, Size::new(100.0, 545.0));

    list.set_data(records(3)).unwrap();
    assert_eq!(list.host().content.height, 299.9);
    assert_eq!(list.active_indices(), range(0, 2));
}

#[test]
fn scrolling_recycles_and_reuses_views() {
    let mut list = list_with(eager(), 300.0, 100);
    let first = list.item_by_index(0).unwrap().serial;
    let second = list.item_by_index(1).unwrap().serial;

    scroll_to(&mut list, 10.0);
    assert_eq!(list.active_indices(), range(0, 6));
    assert_eq!(list.constructed_count(), 7);
    assert_consistent(&list);

    scroll_to(&mut list, 110.0);
    assert_eq!(list.active_indices(), range(2, 8));
    assert_eq!(list.constructed_count(), 9);
    assert_eq!(list.pooled_count(), 2);
    assert_consistent(&list);

    // Pool has two views parked: no new construction needed.
    scroll_to(&mut list, 210.0);
    assert_eq!(list.active_indices(), range(4, 10));
    assert_eq!(list.constructed_count(), 9);
    assert_eq!(list.pooled_count(), 2);
    assert_consistent(&list);

    let mut reused = [
        list.item_by_index(9).unwrap().serial,
        list.item_by_index(10).unwrap().serial,
    ];
    reused.sort_unstable();
    let mut parked = [first, second];
    parked.sort_unstable();
    assert_eq!(reused, parked);
    assert_eq!(list.item_by_index(10).unwrap().record, Some(10));
}

#[test]
fn unchanged_range_is_a_no_op() {
    let mut list = list_with(eager(), 300.0, 100);
    let snapshot = |list: &TestList| -> Vec<(usize, usize)> {
        list.active_indices()
            .into_iter()
            .map(|i| {
                let v = list.item_by_index(i).unwrap();
                (v.binds, v.moves)
            })
            .collect()
    };
    let before = snapshot(&list);

    list.refresh().unwrap();
    // Rubber-banded a little past the top: same range.
    scroll_to(&mut list, -20.0);
    assert_eq!(list.visible_range().map(|r| (r.start, r.end)), Some((0, 5)));

    assert_eq!(snapshot(&list), before);
    assert_eq!(list.host().created, 6);
}

#[test]
fn set_data_forces_rebind_of_active_views() {
    let rendered = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&rendered);
    let options = eager().with_on_render(move |view: &mut FakeView, index| {
        assert_eq!(view.index, Some(index));
        log.lock().unwrap().push(index);
    });
    let mut list = list_with(options, 300.0, 100);
    assert_eq!(*rendered.lock().unwrap(), range(0, 5));

    list.set_data((100..200).collect::<Vec<u32>>()).unwrap();
    assert_eq!(rendered.lock().unwrap().len(), 12);
    for index in 0..=5 {
        let view = list.item_by_index(index).unwrap();
        assert_eq!(view.record, Some(100 + index as u32));
        assert_eq!(view.binds, 2);
    }
    assert_eq!(list.constructed_count(), 6);

    // Ordinary scroll passes do not re-emit for views that stay put.
    scroll_to(&mut list, 10.0);
    assert_eq!(rendered.lock().unwrap().len(), 13);
}

#[test]
fn empty_range_parks_every_view() {
    let mut list = list_with(eager(), 300.0, 100);
    scroll_to(&mut list, -1000.0);
    assert_eq!(list.visible_range(), None);
    assert_eq!(list.active_count(), 0);
    assert_eq!(list.pooled_count(), 6);
    assert_consistent(&list);

    scroll_to(&mut list, 0.0);
    assert_eq!(list.active_indices(), range(0, 5));
    assert_eq!(list.constructed_count(), 6);
    assert_consistent(&list);

    list.set_data(Vec::<u32>::new()).unwrap();
    assert!(list.is_empty());
    assert_eq!(list.active_count(), 0);
    assert_eq!(list.host().content.height, 299.9);
}

#[test]
fn scheduler_issues_ceil_n_over_b_batches() {
    for (n, budget) in [(10usize, 3usize), (9, 3), (1, 4), (6, 2), (7, 7), (100, 1)] {
        let mut s = FrameBudgetScheduler::new(budget);
        s.enqueue(n);
        let mut covered = 0;
        let mut batches = 0;
        loop {
            let batch = s.advance(false).unwrap();
            assert_eq!(batch.range.start, covered);
            assert!(batch.range.len() <= budget);
            covered = batch.range.end;
            batches += 1;
            if batch.outcome == BatchOutcome::Done {
                break;
            }
            assert_eq!(batch.outcome, BatchOutcome::Continue);
        }
        assert_eq!(covered, n);
        assert_eq!(batches, n.div_ceil(budget), "n={n} budget={budget}");
        assert!(s.is_idle());
        assert_eq!(s.advance(false), None);
    }
}

#[test]
fn scheduler_restarts_while_input_is_active() {
    let mut s = FrameBudgetScheduler::new(2);
    s.enqueue(4);
    assert_eq!(s.advance(true).unwrap().range, 0..2);

    s.enqueue(5);
    assert_eq!(
        s.state(),
        SchedulerState::BatchingWithPendingRestart { cursor: 2 }
    );
    assert_eq!(s.advance(true).unwrap().outcome, BatchOutcome::Continue);
    let batch = s.advance(true).unwrap();
    assert_eq!((batch.range, batch.outcome), (4..5, BatchOutcome::Restarted));

    // Still scrolling: keeps cycling.
    for _ in 0..10 {
        assert_ne!(s.advance(true).unwrap().outcome, BatchOutcome::Done);
    }
    assert!(!s.is_idle());

    // Input stopped: finish the current pass, run one more, then stop.
    let mut outcomes = Vec::new();
    while let Some(batch) = s.advance(false) {
        outcomes.push(batch.outcome);
    }
    assert_eq!(outcomes.last(), Some(&BatchOutcome::Done));
    assert_eq!(
        outcomes
            .iter()
            .filter(|o| **o == BatchOutcome::Restarted)
            .count(),
        1
    );
    assert!(outcomes.len() <= 6);

    s.enqueue(3);
    s.reset();
    assert!(s.is_idle());
    assert!(s.is_empty());
}

#[test]
fn frame_budget_spreads_binding_across_ticks() {
    let options = eager().with_render_count_per_frame(2);
    let mut list = list_with(options, 300.0, 100);
    assert!(list.is_rendering());
    assert_eq!(list.active_count(), 0);

    let mut outcomes = Vec::new();
    while let Some(outcome) = list.tick().unwrap() {
        outcomes.push(outcome);
        assert!(list.active_count() <= 2 * outcomes.len());
    }
    assert_eq!(
        outcomes,
        [
            BatchOutcome::Continue,
            BatchOutcome::Continue,
            BatchOutcome::Done
        ]
    );
    assert!(!list.is_rendering());
    assert_eq!(list.active_indices(), range(0, 5));
    assert_consistent(&list);
}

#[test]
fn frame_budget_restarts_while_scrolling() {
    use BatchOutcome::{Continue, Done, Restarted};

    let options = eager().with_render_count_per_frame(2);
    let mut list = list_with(options, 300.0, 100);
    assert_eq!(list.tick().unwrap(), Some(Continue));
    assert_eq!(list.active_indices(), range(0, 1));

    scroll_to(&mut list, 110.0);
    assert!(list.is_scrolling());
    let mut outcomes = Vec::new();
    for _ in 0..3 {
        outcomes.push(list.tick().unwrap().unwrap());
    }
    list.set_is_scrolling(false);
    while let Some(outcome) = list.tick().unwrap() {
        outcomes.push(outcome);
    }

    assert_eq!(
        outcomes,
        [
            Continue, Continue, Restarted, // first pass over the new range
            Continue, Continue, Continue, Restarted, // input still active at the end
            Continue, Continue, Continue, Done, // final pass
        ]
    );
    assert_eq!(list.active_indices(), range(2, 8));
    assert_eq!(list.constructed_count(), 9);
    assert_eq!(list.pooled_count(), 2);
    assert_consistent(&list);
}

#[test]
fn set_data_mid_batch_supersedes_in_flight_pass() {
    use BatchOutcome::{Continue, Done, Restarted};

    let options = eager().with_render_count_per_frame(2);
    let mut list = list_with(options, 300.0, 100);
    assert_eq!(list.tick().unwrap(), Some(Continue));
    assert_eq!(list.tick().unwrap(), Some(Continue));
    assert_eq!(list.active_indices(), range(0, 3));

    list.set_data((500..503).collect::<Vec<u32>>()).unwrap();
    let mut outcomes = Vec::new();
    while let Some(outcome) = list.tick().unwrap() {
        outcomes.push(outcome);
    }
    assert_eq!(outcomes, [Restarted, Continue, Done]);
    assert!(!list.is_rendering());
    assert_eq!(list.active_indices(), range(0, 2));
    assert_eq!(list.pooled_count(), 1);
    assert_eq!(list.constructed_count(), 4);
    assert_consistent(&list);
    for index in 0..=2 {
        let view = list.item_by_index(index).unwrap();
        assert_eq!(view.record, Some(500 + index as u32));
    }
}

#[test]
fn scroll_updates_are_throttled() {
    let mut list = list_with(ListOptions::new().with_scroll_update_rate(2), 300.0, 100);
    let visible = |list: &TestList| list.visible_range().map(|r| (r.start, r.end));

    list.on_scroll_event(ScrollEvent::Began, Vec2::ZERO).unwrap();
    assert!(list.is_scrolling());

    scroll_to(&mut list, 10.0);
    scroll_to(&mut list, 110.0);
    assert_eq!(visible(&list), Some((0, 5)));

    scroll_to(&mut list, 210.0);
    assert_eq!(visible(&list), Some((4, 10)));

    scroll_to(&mut list, 310.0);
    assert_eq!(visible(&list), Some((4, 10)));

    list.on_scroll_event(ScrollEvent::TouchUp, Vec2::new(0.0, 500.0))
        .unwrap();
    assert!(list.is_scrolling());
    assert_eq!(visible(&list), Some((4, 10)));

    list.on_scroll_event(ScrollEvent::Ended, Vec2::new(0.0, 500.0))
        .unwrap();
    assert!(!list.is_scrolling());
    assert_eq!(visible(&list), Some((10, 15)));
    assert_consistent(&list);
}

#[test]
fn single_selection_moves_between_views() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&events);
    let options = eager()
        .with_selected_mode(SelectionMode::Single)
        .with_on_select(move |view: Option<&mut FakeView>, event: &SelectionEvent| {
            log.lock().unwrap().push((view.and_then(|v| v.index), *event));
        });
    let mut list = list_with(options, 400.0, 100);
    assert_eq!(list.active_indices(), range(0, 7));

    let ev5 = SelectionEvent {
        id: 5,
        previous: None,
        selected: true,
    };
    assert_eq!(list.set_select_id(5), Some(ev5));
    assert!(list.item_by_index(5).unwrap().is_selected());

    assert_eq!(list.set_select_id(5), None);

    let ev7 = SelectionEvent {
        id: 7,
        previous: Some(5),
        selected: true,
    };
    assert_eq!(list.on_item_activated(7), Some(ev7));
    assert!(!list.item_by_index(5).unwrap().is_selected());
    assert!(list.item_by_index(7).unwrap().is_selected());
    assert_eq!(
        *events.lock().unwrap(),
        [(Some(5), ev5), (Some(7), ev7)]
    );

    // Selecting an index without an active view still works.
    let ev20 = list.set_select_id(20).unwrap();
    assert_eq!(ev20.previous, Some(7));
    assert_eq!(events.lock().unwrap().last(), Some(&(None, ev20)));
    assert!(!list.item_by_index(7).unwrap().is_selected());

    // ...and shows once the index scrolls into view on a recycled view.
    scroll_to(&mut list, 1000.0);
    assert_eq!(list.active_indices(), range(20, 27));
    assert!(list.item_by_index(20).unwrap().is_selected());
    assert!(!list.item_by_index(21).unwrap().is_selected());
    assert_eq!(list.selected_id(), Some(20));
    assert_eq!(list.selected_ids(), [20]);
}

#[test]
fn multi_selection_toggles_membership() {
    let options = eager().with_selected_mode(SelectionMode::Multi);
    let mut list = list_with(options, 300.0, 100);

    let ev = list.set_select_id(1).unwrap();
    assert_eq!((ev.previous, ev.selected), (None, true));
    let ev = list.set_select_id(2).unwrap();
    assert_eq!((ev.previous, ev.selected), (Some(1), true));
    let ev = list.set_select_id(1).unwrap();
    assert_eq!((ev.previous, ev.selected), (Some(2), false));

    assert_eq!(list.selected_ids(), [2]);
    assert!(!list.item_by_index(1).unwrap().is_selected());
    assert!(list.item_by_index(2).unwrap().is_selected());

    list.clear_selection();
    assert!(list.selected_ids().is_empty());
    assert!(!list.item_by_index(2).unwrap().is_selected());
}

#[test]
fn selection_disabled_emits_nothing() {
    let mut list = list_with(eager(), 300.0, 100);
    assert_eq!(list.set_select_id(1), None);
    assert!(!list.item_by_index(1).unwrap().is_selected());
    assert_eq!(list.selected_id(), None);
}

#[test]
fn calls_before_init_are_rejected() {
    let mut list: TestList = RecycleList::new(FakeHost::default(), eager());
    let not_init = Err(ListError::Config(ConfigError::NotInitialized));
    assert_eq!(list.set_data(records(3)), not_init);
    assert!(list.is_empty());
    assert_eq!(
        list.on_scroll_event(ScrollEvent::Scrolling, Vec2::new(0.0, 50.0)),
        not_init
    );
    assert_eq!(list.scroll_offset(), Vec2::ZERO);
    assert!(!list.is_scrolling());

    assert_eq!(
        list.init(None),
        Err(ListError::Config(ConfigError::MissingScrollView))
    );
    assert!(!list.is_initialized());

    list.init(Some(&vertical_view(300.0))).unwrap();
    assert_eq!(
        list.init(Some(&vertical_view(300.0))),
        Err(ListError::Config(ConfigError::AlreadyInitialized))
    );
}

#[test]
fn reinitialize_resolves_new_geometry() {
    let mut list = list_with(eager(), 300.0, 100);

    assert_eq!(
        list.reinitialize(None),
        Err(ListError::Config(ConfigError::MissingScrollView))
    );
    assert_eq!(list.active_indices(), range(0, 5));

    let grid = LayoutDeclaration::grid(Axis::Horizontal, Size::new(100.0, 100.0))
        .with_padding(Insets::new(10.0, 0.0, 10.0, 0.0))
        .with_spacing(10.0, 10.0);
    let info = ScrollViewInfo::new(
        Size::new(327.0, 300.0),
        ContentInfo::new(Size::new(327.0, 300.0), grid),
    );
    list.reinitialize(Some(&info)).unwrap();

    assert_eq!(list.geometry().unwrap().cross_count, 2);
    assert_eq!(list.host().content, Size::new(327.0, 5490.0));
    assert_eq!(list.active_indices(), range(0, 5));
    // Every view came back out of the pool.
    assert_eq!(list.constructed_count(), 6);
    assert_eq!(list.pooled_count(), 0);
    assert_eq!(list.item_by_index(3).unwrap().position, Point::new(6.5, -160.0));
    assert_consistent(&list);
}

#[test]
fn teardown_destroys_every_view() {
    let mut list = list_with(eager(), 300.0, 100);
    scroll_to(&mut list, 110.0);
    assert_eq!(list.constructed_count(), 9);

    list.teardown();
    assert_eq!(list.host().destroyed, 9);
    assert_eq!(
        (
            list.active_count(),
            list.pooled_count(),
            list.constructed_count()
        ),
        (0, 0, 0)
    );
    assert_eq!(list.visible_range(), None);

    list.refresh().unwrap();
    assert_eq!(list.active_indices(), range(2, 8));
    assert_eq!(list.host().created, 16);
}
