// Example: a sticky header and footer following a scrolling list.
use std::cell::RefCell;
use std::rc::Rc;

use sticky_container::{
    Dimension, HostProps, Layout, LayoutType, ScrollEvent, StickyContainer,
    StickyContainerOptions, TrackerRef, VirtualHost,
};
use sticky_tracker::{StickyFooter, StickyHeader};

const ROW: f64 = 24.0;
const COUNT: usize = 200;
const VIEWPORT: f64 = 240.0;

struct Rows;

impl VirtualHost for Rows {
    fn layout(&self, index: usize) -> Option<Layout> {
        (index < COUNT).then(|| Layout {
            x: 0.0,
            y: index as f64 * ROW,
            width: 360.0,
            height: ROW,
        })
    }

    fn rendered_size(&self) -> Option<Dimension> {
        Some(Dimension {
            width: 360.0,
            height: VIEWPORT,
        })
    }

    fn content_dimension(&self) -> Option<Dimension> {
        Some(Dimension {
            width: 360.0,
            height: COUNT as f64 * ROW,
        })
    }
}

fn main() {
    let sections: Vec<usize> = (0..COUNT).step_by(25).collect();
    let totals: Vec<usize> = (0..COUNT).skip(24).step_by(25).collect();

    let rows: Vec<String> = (0..COUNT).map(|i| format!("item {i}")).collect();
    let child = HostProps::new(
        rows,
        |i: usize| LayoutType::Id((i % 25 == 0) as u32),
        |_: &LayoutType, d: &String, _: usize, _: Option<&()>| d.clone(),
    );
    let options = StickyContainerOptions::new()
        .with_sticky_header_indices(Some(sections.clone()))
        .with_sticky_footer_indices(Some(totals.clone()))
        .with_override_row_renderer(Some(
            |_: &LayoutType, d: &String, _: usize, _: Option<&()>| format!("[{d}]"),
        ));

    let mut container = match StickyContainer::new(options, [child]) {
        Ok(container) => container,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    container.set_host_ref(Some(Rc::new(Rows)));

    let header = Rc::new(RefCell::new(StickyHeader::header(sections)));
    let footer = Rc::new(RefCell::new(StickyFooter::footer(totals)));
    let header_ref: TrackerRef<String, (), String> = header.clone();
    let footer_ref: TrackerRef<String, (), String> = footer.clone();
    container.set_header_ref(Some(&header_ref));
    container.set_footer_ref(Some(&footer_ref));

    for offset in [0.0, 100.0, 580.0, 600.0, 1_200.0, 4_560.0] {
        container.on_scroll(&ScrollEvent::new(0.0, offset), 0.0, offset);
        let first = (offset / ROW) as usize;
        let last = (((offset + VIEWPORT) / ROW).ceil() as usize).min(COUNT);
        let visible: Vec<usize> = (first..last).collect();
        container.on_visible_indices_changed(&visible, &[], &[]);

        let source = container.accessor();
        println!(
            "offset={offset:>6} header={:?} {:?} footer={:?} {:?}",
            header.borrow().snapshot(),
            header.borrow().render(&source),
            footer.borrow().snapshot(),
            footer.borrow().render(&source),
        );
    }
}
