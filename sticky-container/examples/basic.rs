// Example: attach a host, bind a tracker and relay host events.
use std::cell::RefCell;
use std::rc::Rc;

use sticky_container::{
    Dimension, EdgeTracker, HostProps, Layout, LayoutType, ScrollEvent, StickyAccessor,
    StickyContainer, StickyContainerOptions, TrackerRef, VirtualHost,
};

struct FixedRows;

impl VirtualHost for FixedRows {
    fn layout(&self, index: usize) -> Option<Layout> {
        (index < 100).then(|| Layout {
            x: 0.0,
            y: index as f64 * 20.0,
            width: 320.0,
            height: 20.0,
        })
    }

    fn rendered_size(&self) -> Option<Dimension> {
        Some(Dimension {
            width: 320.0,
            height: 200.0,
        })
    }

    fn content_dimension(&self) -> Option<Dimension> {
        Some(Dimension {
            width: 320.0,
            height: 2_000.0,
        })
    }
}

// Prints what it is told; a real tracker would decide which row to pin.
struct Printer;

impl EdgeTracker<String, (), String> for Printer {
    fn on_visible_indices_changed(
        &mut self,
        all: &[usize],
        source: &StickyAccessor<'_, String, (), String>,
    ) {
        let first = all.first().copied();
        println!(
            "visible={all:?} first_row={:?}",
            first.and_then(|i| source.render_index(i).ok())
        );
    }

    fn on_scroll(&mut self, offset_y: f64, source: &StickyAccessor<'_, String, (), String>) {
        println!("offset_y={offset_y} viewport={:?}", source.rendered_viewport_size());
    }
}

fn main() {
    let rows: Vec<String> = (0..100).map(|i| format!("row {i}")).collect();
    let child = HostProps::new(
        rows,
        |i: usize| LayoutType::from(if i % 10 == 0 { "section" } else { "row" }),
        |t: &LayoutType, d: &String, _: usize, _: Option<&()>| format!("<{t}> {d}"),
    )
    .with_on_scroll(Some(|e: &ScrollEvent, _: f64, _: f64| {
        println!("listener: scroll to {}", e.content_offset.y);
    }));

    let options = StickyContainerOptions::new().with_sticky_header_indices(Some(vec![0, 10, 20]));
    let mut container = match StickyContainer::new(options, [child]) {
        Ok(container) => container,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    container.set_host_ref(Some(Rc::new(FixedRows)));

    // Visibility arrives before the tracker mounts; it is replayed on bind.
    container.on_visible_indices_changed(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9], &[], &[]);
    let printer: TrackerRef<String, (), String> = Rc::new(RefCell::new(Printer));
    container.set_header_ref(Some(&printer));

    container.on_scroll(&ScrollEvent::new(0.0, 130.0), 0.0, 130.0);
    container.on_visible_indices_changed(&[6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16], &[10], &[]);

    let frame = container.render();
    println!("frame header={:?} footer={:?}", frame.header, frame.footer);
}
