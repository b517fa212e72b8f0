use sticky_container::{EdgeKind, Layout};

/// Edge-specific rules for a [`crate::StickyObject`].
///
/// Positions are measured in *edge coordinates*: a one-dimensional axis that grows in the
/// direction items travel past the edge while the tracker advances. For headers that is plain
/// content `y`; for footers it is the negated bottom of an item, so both edges share one
/// settle/push-off algorithm.
pub trait EdgePolicy {
    const EDGE: EdgeKind;

    /// Direction of "next" within the sticky index list (`1` for headers, `-1` for footers).
    const STEP: isize;

    /// Picks the position (into `sticky`) to pin for a visible range, or `None` when nothing
    /// should be pinned.
    fn pick(
        &self,
        sticky: &[usize],
        smallest_visible: usize,
        largest_visible: usize,
    ) -> Option<usize>;

    /// Where an item sits on the edge axis.
    fn item_position(&self, layout: &Layout) -> f64;

    /// Where the pinned edge sits on the edge axis.
    fn edge_position(
        &self,
        offset_y: f64,
        viewport_height: Option<f64>,
        edge_offset: f64,
    ) -> Option<f64>;

    /// Whether the scroll offset is in the overscroll zone at this edge, where nothing is
    /// pinned.
    fn reached_boundary(
        &self,
        offset_y: f64,
        window_bound: Option<f64>,
        edge_offset: f64,
    ) -> bool;

    /// Converts an edge-axis translation to a screen-space `y` translation.
    fn to_screen(&self, translate: f64) -> f64 {
        translate * Self::STEP as f64
    }
}

/// Pins the last sticky index at or above the top of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderPolicy;

impl EdgePolicy for HeaderPolicy {
    const EDGE: EdgeKind = EdgeKind::Header;
    const STEP: isize = 1;

    fn pick(&self, sticky: &[usize], smallest_visible: usize, _: usize) -> Option<usize> {
        let first = *sticky.first()?;
        if smallest_visible < first {
            return None;
        }
        Some(sticky.partition_point(|&s| s <= smallest_visible) - 1)
    }

    fn item_position(&self, layout: &Layout) -> f64 {
        layout.y
    }

    fn edge_position(&self, offset_y: f64, _: Option<f64>, edge_offset: f64) -> Option<f64> {
        Some(offset_y + edge_offset)
    }

    fn reached_boundary(&self, offset_y: f64, _: Option<f64>, edge_offset: f64) -> bool {
        offset_y <= edge_offset
    }
}

/// Pins the first sticky index at or below the bottom of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FooterPolicy {
    /// Keep the footer pinned at offset `0` even when the window cannot scroll.
    pub always_sticky: bool,
}

impl EdgePolicy for FooterPolicy {
    const EDGE: EdgeKind = EdgeKind::Footer;
    const STEP: isize = -1;

    fn pick(&self, sticky: &[usize], _: usize, largest_visible: usize) -> Option<usize> {
        let last = *sticky.last()?;
        if largest_visible > last {
            return None;
        }
        Some(sticky.partition_point(|&s| s < largest_visible))
    }

    fn item_position(&self, layout: &Layout) -> f64 {
        -layout.bottom()
    }

    fn edge_position(
        &self,
        offset_y: f64,
        viewport_height: Option<f64>,
        edge_offset: f64,
    ) -> Option<f64> {
        viewport_height.map(|h| -(offset_y + h - edge_offset))
    }

    fn reached_boundary(
        &self,
        offset_y: f64,
        window_bound: Option<f64>,
        edge_offset: f64,
    ) -> bool {
        let at_end = window_bound.is_some_and(|bound| offset_y - bound >= -edge_offset);
        if at_end && self.always_sticky && offset_y == 0.0 {
            return false;
        }
        at_end
    }
}
