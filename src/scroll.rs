//! Scroll targeting for form fields
//!
//! Geometry is kept pure: [`compute_scroll`] decides where a container should
//! scroll to reveal an element, and [`ScrollHost`] is the seam to whatever owns
//! the real element tree (the DOM in the browser binding, a fake in tests).

use serde::{Deserialize, Serialize};
use tracing::trace;

// ============================================================================
// Geometry
// ============================================================================

/// Axis-aligned box in document coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Scroll offsets of a container
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollPosition {
    pub left: f64,
    pub top: f64,
}

/// Visible area of a scroll container.
///
/// `rect` is the client box (inside borders) in document coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub rect: Rect,
    pub scroll: ScrollPosition,
}

/// Extra room to keep around the element once it is revealed
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollMargins {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
}

/// How to scroll an element into view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollOptions {
    /// Leave a fully visible element alone
    #[serde(default = "default_true")]
    pub only_scroll_if_needed: bool,
    /// `Some(true)` aligns the top edge, `Some(false)` the bottom edge,
    /// `None` picks whichever edge is out of view
    #[serde(default)]
    pub align_with_top: Option<bool>,
    #[serde(default)]
    pub align_with_left: Option<bool>,
    #[serde(default = "default_true")]
    pub allow_horizontal_scroll: bool,
    #[serde(default)]
    pub margins: ScrollMargins,
}

fn default_true() -> bool {
    true
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            only_scroll_if_needed: true,
            align_with_top: None,
            align_with_left: None,
            allow_horizontal_scroll: true,
            margins: ScrollMargins::default(),
        }
    }
}

fn resolve_axis(
    current: f64,
    diff_start: f64,
    diff_end: f64,
    align_start: Option<bool>,
    only_if_needed: bool,
) -> f64 {
    if diff_start < 0.0 || diff_end > 0.0 {
        match align_start {
            Some(true) => current + diff_start,
            Some(false) => current + diff_end,
            None if diff_start < 0.0 => current + diff_start,
            None => current + diff_end,
        }
    } else if only_if_needed {
        current
    } else if align_start.unwrap_or(true) {
        current + diff_start
    } else {
        current + diff_end
    }
}

/// Scroll position that brings `element` into `viewport`.
///
/// Returns `None` when the container should stay where it is.
pub fn compute_scroll(
    element: Rect,
    viewport: &Viewport,
    options: &ScrollOptions,
) -> Option<ScrollPosition> {
    let m = &options.margins;
    let view = &viewport.rect;

    let diff_top = element.top - view.top - m.top;
    let diff_bottom = element.bottom() - view.bottom() + m.bottom;
    let top = resolve_axis(
        viewport.scroll.top,
        diff_top,
        diff_bottom,
        options.align_with_top,
        options.only_scroll_if_needed,
    );

    let left = if options.allow_horizontal_scroll {
        let diff_left = element.left - view.left - m.left;
        let diff_right = element.right() - view.right() + m.right;
        resolve_axis(
            viewport.scroll.left,
            diff_left,
            diff_right,
            options.align_with_left,
            options.only_scroll_if_needed,
        )
    } else {
        viewport.scroll.left
    };

    let next = ScrollPosition { left, top };
    if next == viewport.scroll {
        None
    } else {
        Some(next)
    }
}

// ============================================================================
// Host Seam
// ============================================================================

/// Computed `overflow-y` of an element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Scroll,
    Auto,
}

impl Overflow {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "hidden" => Overflow::Hidden,
            "clip" => Overflow::Clip,
            "scroll" => Overflow::Scroll,
            "auto" | "overlay" => Overflow::Auto,
            _ => Overflow::Visible,
        }
    }

    pub fn scrolls(&self) -> bool {
        matches!(self, Overflow::Scroll | Overflow::Auto)
    }
}

/// Where a scroll gets applied
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollContainer<N> {
    /// The document viewport
    Document,
    /// A scrollable element
    Element(N),
}

/// Access to a rendered element tree
pub trait ScrollHost {
    type Node: Clone + PartialEq;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;
    fn is_body(&self, node: &Self::Node) -> bool;
    fn overflow_y(&self, node: &Self::Node) -> Overflow;
    fn scroll_height(&self, node: &Self::Node) -> f64;
    fn client_height(&self, node: &Self::Node) -> f64;
    /// Border box of `node` in document coordinates
    fn element_rect(&self, node: &Self::Node) -> Rect;
    fn viewport(&self, container: &ScrollContainer<Self::Node>) -> Viewport;
    fn scroll_to(&self, container: &ScrollContainer<Self::Node>, position: ScrollPosition);
}

/// Nearest ancestor of `node` that actually scrolls.
///
/// The node itself is never its own container. Reaching `body` means the
/// document scrolls; falling off the tree (a detached node) yields `None`.
pub fn scrollable_container<H: ScrollHost>(
    host: &H,
    node: &H::Node,
) -> Option<ScrollContainer<H::Node>> {
    let mut current = Some(node.clone());

    while let Some(candidate) = current {
        if host.is_body(&candidate) {
            return Some(ScrollContainer::Document);
        }
        if &candidate != node
            && host.overflow_y(&candidate).scrolls()
            && host.scroll_height(&candidate) > host.client_height(&candidate)
        {
            return Some(ScrollContainer::Element(candidate));
        }
        current = host.parent(&candidate);
    }

    None
}

/// Scroll the nearest container of `node` so it becomes visible.
///
/// Returns the applied position, or `None` if nothing moved.
pub fn scroll_into_view<H: ScrollHost>(
    host: &H,
    node: &H::Node,
    options: &ScrollOptions,
) -> Option<ScrollPosition> {
    let Some(container) = scrollable_container(host, node) else {
        trace!("Element is detached, not scrolling");
        return None;
    };

    let viewport = host.viewport(&container);
    let position = compute_scroll(host.element_rect(node), &viewport, options)?;
    trace!("Scrolling container to {:?}", position);
    host.scroll_to(&container, position);
    Some(position)
}
