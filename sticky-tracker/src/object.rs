use alloc::vec::Vec;

use sticky_container::{EdgeKind, EdgeTracker, Layout, StickyAccessor};

use crate::{EdgePolicy, FooterPolicy, HeaderPolicy};

/// What a tracker currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StickySnapshot {
    pub visible: bool,
    /// The item index currently pinned, if any.
    pub sticky_index: Option<usize>,
    /// Screen-space `y` translation of the pinned view (push-off by the next sticky item).
    pub translate_y: f64,
}

/// A sticky edge tracker, generic over its edge policy.
///
/// Feed it events through [`EdgeTracker`] (usually by binding it to a
/// [`sticky_container::StickyContainer`]) and read the outcome with [`Self::snapshot`] /
/// [`Self::render`].
#[derive(Clone, Debug)]
pub struct StickyObject<P> {
    policy: P,
    sticky_indices: Vec<usize>,

    offset_y: f64,
    smallest_visible: Option<usize>,
    largest_visible: Option<usize>,
    viewport_height: Option<f64>,
    window_bound: Option<f64>,
    edge_offset: f64,
    bounce: bool,

    position: Option<usize>,
    visible: bool,
    translate: f64,
}

pub type StickyHeader = StickyObject<HeaderPolicy>;
pub type StickyFooter = StickyObject<FooterPolicy>;

impl StickyHeader {
    pub fn header(sticky_indices: Vec<usize>) -> Self {
        Self::new(HeaderPolicy, sticky_indices)
    }
}

impl StickyFooter {
    pub fn footer(sticky_indices: Vec<usize>) -> Self {
        Self::new(FooterPolicy::default(), sticky_indices)
    }

    pub fn with_always_sticky(mut self, always_sticky: bool) -> Self {
        self.policy.always_sticky = always_sticky;
        self
    }
}

impl<P: EdgePolicy> StickyObject<P> {
    /// Creates a tracker for `sticky_indices`, which should be sorted ascending.
    pub fn new(policy: P, sticky_indices: Vec<usize>) -> Self {
        warn_unsorted::<P>(&sticky_indices);
        Self {
            policy,
            sticky_indices,
            offset_y: 0.0,
            smallest_visible: None,
            largest_visible: None,
            viewport_height: None,
            window_bound: None,
            edge_offset: 0.0,
            bounce: false,
            position: None,
            visible: false,
            translate: 0.0,
        }
    }

    pub fn edge(&self) -> EdgeKind {
        P::EDGE
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn sticky_indices(&self) -> &[usize] {
        &self.sticky_indices
    }

    pub fn snapshot(&self) -> StickySnapshot {
        StickySnapshot {
            visible: self.visible,
            sticky_index: self.sticky_index(),
            translate_y: if self.visible {
                self.policy.to_screen(self.translate)
            } else {
                0.0
            },
        }
    }

    /// The item index currently pinned, whether or not it is shown.
    pub fn sticky_index(&self) -> Option<usize> {
        self.position.map(|p| self.sticky_indices[p])
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Renders the pinned item with the preferred renderer.
    ///
    /// Returns `None` when nothing is pinned, or when the data source has no item at the pinned
    /// index (that index is skipped).
    pub fn render<D, E, C>(&self, source: &StickyAccessor<'_, D, E, C>) -> Option<C> {
        if !self.visible {
            return None;
        }
        let index = self.sticky_index()?;
        source
            .render_index(index)
            .map_err(|_err| {
                swarn!(edge = ?P::EDGE, err = %_err, "skipping sticky index without data");
            })
            .ok()
    }

    /// Replaces the sticky indices and recomputes the pinned item from the last known state.
    pub fn set_sticky_indices<D, E, C>(
        &mut self,
        sticky_indices: Vec<usize>,
        source: &StickyAccessor<'_, D, E, C>,
    ) {
        warn_unsorted::<P>(&sticky_indices);
        self.sticky_indices = sticky_indices;
        self.repick();
        self.settle(source);
    }

    fn update_dimensions<D, E, C>(&mut self, source: &StickyAccessor<'_, D, E, C>) {
        self.edge_offset = source.edge_offset();
        if let Some(viewport) = source.rendered_viewport_size() {
            self.viewport_height = Some(viewport.height);
        }
        if let (Some(content), Some(viewport)) = (source.content_size(), self.viewport_height) {
            self.window_bound = Some(content.height - viewport);
        }
    }

    fn repick(&mut self) {
        self.position = match (self.smallest_visible, self.largest_visible) {
            (Some(smallest), Some(largest)) => {
                self.policy.pick(&self.sticky_indices, smallest, largest)
            }
            _ => None,
        };
    }

    fn step(&self, position: usize, direction: isize) -> Option<usize> {
        let next = position.checked_add_signed(direction * P::STEP)?;
        (next < self.sticky_indices.len()).then_some(next)
    }

    fn layout_at<D, E, C>(
        &self,
        position: usize,
        source: &StickyAccessor<'_, D, E, C>,
    ) -> Option<Layout> {
        source.layout_for_index(self.sticky_indices[position])
    }

    /// Moves the pinned position to match the current edge, then derives visibility and the
    /// push-off translation.
    fn settle<D, E, C>(&mut self, source: &StickyAccessor<'_, D, E, C>) {
        self.translate = 0.0;
        let Some(mut position) = self.position else {
            self.visible = false;
            return;
        };
        let edge = self
            .policy
            .edge_position(self.offset_y, self.viewport_height, self.edge_offset);

        if let Some(edge) = edge {
            for _ in 0..self.sticky_indices.len() {
                if let Some(next) = self.step(position, 1) {
                    let passed = self
                        .layout_at(next, source)
                        .is_some_and(|l| self.policy.item_position(&l) <= edge);
                    if passed {
                        position = next;
                        continue;
                    }
                }
                if let Some(previous) = self.step(position, -1) {
                    let ahead = self
                        .layout_at(position, source)
                        .is_some_and(|l| self.policy.item_position(&l) > edge);
                    if ahead {
                        position = previous;
                        continue;
                    }
                }
                break;
            }
        }

        if self.position != Some(position) {
            sdebug!(
                edge = ?P::EDGE,
                from = ?self.position.map(|p| self.sticky_indices[p]),
                to = self.sticky_indices[position],
                "sticky index changed"
            );
        }
        self.position = Some(position);

        // An unmeasured item is never pinned.
        let Some(current) = self.layout_at(position, source) else {
            self.visible = false;
            return;
        };
        self.visible = !self.bounce;

        let Some(edge) = edge else {
            return;
        };
        if self.policy.item_position(&current) > edge {
            self.visible = false;
            return;
        }
        let Some(next) = self
            .step(position, 1)
            .and_then(|n| self.layout_at(n, source))
        else {
            return;
        };
        let next_position = self.policy.item_position(&next);
        let pinned_end = edge + current.height;
        if pinned_end > next_position {
            self.translate = next_position - pinned_end;
        }
    }
}

fn warn_unsorted<P: EdgePolicy>(sticky_indices: &[usize]) {
    if !sticky_indices.windows(2).all(|w| w[0] <= w[1]) {
        swarn!(edge = ?P::EDGE, ?sticky_indices, "sticky indices are not sorted ascending");
    }
}

impl<P: EdgePolicy, D, E, C> EdgeTracker<D, E, C> for StickyObject<P> {
    fn on_visible_indices_changed(&mut self, all: &[usize], source: &StickyAccessor<'_, D, E, C>) {
        self.smallest_visible = all.first().copied();
        self.largest_visible = all.last().copied();
        self.update_dimensions(source);
        self.bounce = self
            .policy
            .reached_boundary(self.offset_y, self.window_bound, self.edge_offset);
        self.repick();
        self.settle(source);
    }

    fn on_scroll(&mut self, offset_y: f64, source: &StickyAccessor<'_, D, E, C>) {
        self.offset_y = offset_y;
        self.update_dimensions(source);
        let bounce = self
            .policy
            .reached_boundary(offset_y, self.window_bound, self.edge_offset);
        if bounce != self.bounce {
            strace!(edge = ?P::EDGE, bounce, "boundary");
            self.bounce = bounce;
        }
        self.settle(source);
    }
}
