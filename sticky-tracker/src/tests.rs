use crate::*;

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

use sticky_container::{
    Dimension, HostProps, Layout, LayoutType, ScrollEvent, StickyContainer,
    StickyContainerOptions, TrackerRef, VirtualHost,
};

type Container = StickyContainer<String, (), String>;

/// Ten rows of height 10 in a 40-high viewport.
struct RowsHost {
    count: usize,
    unmeasured: Vec<usize>,
}

impl RowsHost {
    fn new(count: usize) -> Rc<Self> {
        Rc::new(Self {
            count,
            unmeasured: Vec::new(),
        })
    }
}

impl VirtualHost for RowsHost {
    fn layout(&self, index: usize) -> Option<Layout> {
        if index >= self.count || self.unmeasured.contains(&index) {
            return None;
        }
        Some(Layout {
            x: 0.0,
            y: index as f64 * 10.0,
            width: 100.0,
            height: 10.0,
        })
    }

    fn rendered_size(&self) -> Option<Dimension> {
        Some(Dimension {
            width: 100.0,
            height: 40.0,
        })
    }

    fn content_dimension(&self) -> Option<Dimension> {
        Some(Dimension {
            width: 100.0,
            height: self.count as f64 * 10.0,
        })
    }
}

fn child(count: usize) -> HostProps<String, (), String> {
    let rows: Vec<String> = (0..count).map(|i| format!("item {i}")).collect();
    HostProps::new(
        rows,
        |_: usize| LayoutType::Id(0),
        |_: &LayoutType, d: &String, _: usize, _: Option<&()>| d.clone(),
    )
}

fn visible_at(offset: f64) -> Vec<usize> {
    let first = (offset / 10.0).floor() as usize;
    let last = ((offset + 40.0) / 10.0).ceil() as usize;
    (first..last.min(10)).collect()
}

struct Harness {
    container: Container,
    header: Rc<RefCell<StickyHeader>>,
    footer: Rc<RefCell<StickyFooter>>,
}

impl Harness {
    fn new(host: Rc<RowsHost>, headers: Vec<usize>, footers: Vec<usize>) -> Self {
        let options = StickyContainerOptions::new()
            .with_sticky_header_indices(Some(headers.clone()))
            .with_sticky_footer_indices(Some(footers.clone()))
            .with_override_row_renderer(Some(
                |_: &LayoutType, d: &String, _: usize, _: Option<&()>| format!("pinned {d}"),
            ));
        let count = host.count;
        let mut container = Container::new(options, [child(count)]).unwrap();
        container.set_host_ref(Some(host));

        let header = Rc::new(RefCell::new(StickyHeader::header(headers)));
        let footer = Rc::new(RefCell::new(StickyFooter::footer(footers)));
        let header_ref: TrackerRef<String, (), String> = header.clone();
        let footer_ref: TrackerRef<String, (), String> = footer.clone();
        container.set_header_ref(Some(&header_ref));
        container.set_footer_ref(Some(&footer_ref));
        Self {
            container,
            header,
            footer,
        }
    }

    fn scroll_to(&mut self, offset: f64) {
        self.container
            .on_scroll(&ScrollEvent::new(0.0, offset), 0.0, offset);
        let all = visible_at(offset);
        self.container.on_visible_indices_changed(&all, &[], &[]);
    }

    fn header(&self) -> StickySnapshot {
        self.header.borrow().snapshot()
    }

    fn footer(&self) -> StickySnapshot {
        self.footer.borrow().snapshot()
    }
}

#[test]
fn header_pick_uses_smallest_visible_index() {
    assert_eq!(HeaderPolicy.pick(&[2, 5], 1, 4), None);
    assert_eq!(HeaderPolicy.pick(&[2, 5], 2, 4), Some(0));
    assert_eq!(HeaderPolicy.pick(&[2, 5], 3, 6), Some(0));
    assert_eq!(HeaderPolicy.pick(&[2, 5], 7, 9), Some(1));
    assert_eq!(HeaderPolicy.pick(&[], 7, 9), None);
}

#[test]
fn footer_pick_uses_largest_visible_index() {
    let footer = FooterPolicy::default();
    assert_eq!(footer.pick(&[4, 8], 0, 3), Some(0));
    assert_eq!(footer.pick(&[4, 8], 2, 5), Some(1));
    assert_eq!(footer.pick(&[4, 8], 6, 9), None);
}

#[test]
fn header_is_hidden_at_top_and_before_first_sticky_index() {
    let mut h = Harness::new(RowsHost::new(10), vec![2, 5], vec![]);
    h.scroll_to(0.0);
    assert!(!h.header().visible);

    h.scroll_to(10.0);
    assert!(!h.header().visible);
}

#[test]
fn header_scenario_pins_then_pushes_then_replaces() {
    let mut h = Harness::new(RowsHost::new(10), vec![2, 5], vec![]);

    h.container.on_scroll(&ScrollEvent::new(0.0, 30.0), 0.0, 30.0);
    h.container
        .on_visible_indices_changed(&[3, 4, 5, 6], &[3, 4, 5, 6], &[]);
    assert_eq!(
        h.header(),
        StickySnapshot {
            visible: true,
            sticky_index: Some(2),
            translate_y: 0.0,
        }
    );

    // Index 5 approaches: the pinned header is pushed up.
    h.container.on_scroll(&ScrollEvent::new(0.0, 45.0), 0.0, 45.0);
    assert_eq!(h.header().sticky_index, Some(2));
    assert_eq!(h.header().translate_y, -5.0);

    // Index 5 reaches the top edge and takes over, before the host reports new visibility.
    h.container.on_scroll(&ScrollEvent::new(0.0, 50.0), 0.0, 50.0);
    assert_eq!(h.container.visible_indices(), &[3, 4, 5, 6]);
    assert_eq!(
        h.header(),
        StickySnapshot {
            visible: true,
            sticky_index: Some(5),
            translate_y: 0.0,
        }
    );
    let source = h.container.accessor();
    assert_eq!(
        h.header.borrow().render(&source),
        Some(String::from("pinned item 5"))
    );
    assert_eq!(source.layout_for_index(5).map(|l| l.y), Some(50.0));

    // Scrolling back restores the previous header.
    h.scroll_to(35.0);
    assert_eq!(h.header().sticky_index, Some(2));
    assert_eq!(h.header().translate_y, 0.0);
}

#[test]
fn header_skips_fast_scroll_over_several_sticky_indices() {
    let mut h = Harness::new(RowsHost::new(10), vec![1, 3, 5, 7], vec![]);
    h.scroll_to(15.0);
    assert_eq!(h.header().sticky_index, Some(1));
    h.container.on_scroll(&ScrollEvent::new(0.0, 58.0), 0.0, 58.0);
    assert_eq!(h.header().sticky_index, Some(5));
}

#[test]
fn footer_pins_next_sticky_below_viewport() {
    let mut h = Harness::new(RowsHost::new(10), vec![], vec![4, 8]);
    h.container.on_visible_indices_changed(&[0, 1, 2, 3], &[], &[]);
    assert_eq!(
        h.footer(),
        StickySnapshot {
            visible: true,
            sticky_index: Some(4),
            translate_y: 0.0,
        }
    );

    // Item 4 has fully scrolled into view: the footer moves on to 8.
    h.scroll_to(15.0);
    assert_eq!(h.footer().sticky_index, Some(8));

    // Scrolling back up, item 4's bottom overlaps the pinned footer and pushes it down.
    h.container.on_scroll(&ScrollEvent::new(0.0, 12.0), 0.0, 12.0);
    assert_eq!(h.footer().sticky_index, Some(8));
    assert_eq!(h.footer().translate_y, 8.0);

    h.container.on_scroll(&ScrollEvent::new(0.0, 5.0), 0.0, 5.0);
    assert_eq!(h.footer().sticky_index, Some(4));
}

#[test]
fn footer_hides_at_end_of_content() {
    let mut h = Harness::new(RowsHost::new(10), vec![], vec![9]);
    h.scroll_to(20.0);
    assert!(h.footer().visible);
    h.scroll_to(60.0);
    assert!(!h.footer().visible);
}

#[test]
fn always_sticky_footer_stays_on_non_scrollable_window() {
    // Four rows exactly fill the viewport.
    let mut container = Container::new(
        StickyContainerOptions::new().with_sticky_footer_indices(Some(vec![3])),
        [child(4)],
    )
    .unwrap();
    container.set_host_ref(Some(RowsHost::new(4)));

    let plain = Rc::new(RefCell::new(StickyFooter::footer(vec![3])));
    let plain_ref: TrackerRef<String, (), String> = plain.clone();
    container.set_footer_ref(Some(&plain_ref));
    container.on_visible_indices_changed(&[0, 1, 2, 3], &[], &[]);
    assert_eq!(plain.borrow().sticky_index(), Some(3));
    assert!(!plain.borrow().is_visible());

    let always = Rc::new(RefCell::new(
        StickyFooter::footer(vec![3]).with_always_sticky(true),
    ));
    let always_ref: TrackerRef<String, (), String> = always.clone();
    container.set_footer_ref(Some(&always_ref));
    assert_eq!(always.borrow().sticky_index(), Some(3));
    assert!(always.borrow().is_visible());
}

#[test]
fn unmeasured_sticky_index_is_not_pinned() {
    let host = Rc::new(RowsHost {
        count: 10,
        unmeasured: vec![2],
    });
    let mut h = Harness::new(host, vec![2, 5], vec![]);
    h.scroll_to(30.0);
    assert_eq!(h.header().sticky_index, Some(2));
    assert!(!h.header().visible);
    assert_eq!(h.header.borrow().render(&h.container.accessor()), None);
}

#[test]
fn out_of_range_sticky_index_renders_nothing() {
    // The layout engine knows 12 rows but the data source only has 10.
    let mut h = Harness::new(RowsHost::new(12), vec![11], vec![]);
    h.container.update(
        StickyContainerOptions::new().with_sticky_header_indices(Some(vec![11])),
        [child(10)],
    )
    .unwrap();
    h.container.on_scroll(&ScrollEvent::new(0.0, 115.0), 0.0, 115.0);
    h.container.on_visible_indices_changed(&[11], &[], &[]);
    assert!(h.header().visible);
    assert_eq!(h.header.borrow().render(&h.container.accessor()), None);
}

#[test]
fn edge_offset_shifts_header_edge() {
    let child = child(10).with_distance_from_window(Some(10.0));
    let mut container = Container::new(
        StickyContainerOptions::new().with_sticky_header_indices(Some(vec![2, 5])),
        [child],
    )
    .unwrap();
    container.set_host_ref(Some(RowsHost::new(10)));
    let header = Rc::new(RefCell::new(StickyHeader::header(vec![2, 5])));
    let header_ref: TrackerRef<String, (), String> = header.clone();
    container.set_header_ref(Some(&header_ref));

    container.on_scroll(&ScrollEvent::new(0.0, 40.0), 0.0, 40.0);
    container.on_visible_indices_changed(&[4, 5, 6, 7], &[], &[]);
    assert_eq!(header.borrow().sticky_index(), Some(5));
}

#[test]
fn changing_sticky_indices_recomputes_from_last_state() {
    let mut h = Harness::new(RowsHost::new(10), vec![2, 5], vec![]);
    h.scroll_to(30.0);
    assert_eq!(h.header().sticky_index, Some(2));

    let source = h.container.accessor();
    h.header.borrow_mut().set_sticky_indices(vec![3], &source);
    assert_eq!(h.header().sticky_index, Some(3));
    assert!(h.header().visible);
}

#[test]
fn boundary_accounts_for_edge_offset() {
    assert!(HeaderPolicy.reached_boundary(8.0, None, 10.0));
    assert!(!HeaderPolicy.reached_boundary(12.0, None, 10.0));

    let footer = FooterPolicy::default();
    assert!(!footer.reached_boundary(45.0, Some(60.0), 10.0));
    assert!(footer.reached_boundary(50.0, Some(60.0), 10.0));
    assert!(!footer.reached_boundary(50.0, None, 10.0));

    let always = FooterPolicy {
        always_sticky: true,
    };
    assert!(footer.reached_boundary(0.0, Some(-10.0), 0.0));
    assert!(!always.reached_boundary(0.0, Some(-10.0), 0.0));
}

#[test]
fn repeated_sticky_index_does_not_stall_header() {
    let mut h = Harness::new(RowsHost::new(10), vec![2, 2, 5], vec![]);
    h.scroll_to(30.0);
    assert_eq!(h.header().sticky_index, Some(2));
    assert!(h.header().visible);

    h.container.on_scroll(&ScrollEvent::new(0.0, 52.0), 0.0, 52.0);
    assert_eq!(h.header().sticky_index, Some(5));
}
