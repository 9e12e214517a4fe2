//! Browser DOM implementation of the scroll host

use antform::{Overflow, Rect, ScrollContainer, ScrollHost, ScrollPosition, Viewport};
use web_sys::{Document, Element, Window};

/// Reads geometry from, and scrolls, the live document
pub struct DomScrollHost {
    window: Window,
    document: Document,
}

impl DomScrollHost {
    /// `None` outside a browser window
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn window_scroll(&self) -> ScrollPosition {
        ScrollPosition {
            left: self.window.scroll_x().unwrap_or(0.0),
            top: self.window.scroll_y().unwrap_or(0.0),
        }
    }

    fn style_value(&self, node: &Element, property: &str) -> Option<String> {
        self.window
            .get_computed_style(node)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value(property).ok())
    }

    /// Computed length in px, 0 when absent or not a px value
    fn style_px(&self, node: &Element, property: &str) -> f64 {
        self.style_value(node, property)
            .and_then(|v| v.trim().trim_end_matches("px").parse::<f64>().ok())
            .unwrap_or(0.0)
    }
}

impl ScrollHost for DomScrollHost {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn is_body(&self, node: &Element) -> bool {
        node.node_name().eq_ignore_ascii_case("body")
    }

    fn overflow_y(&self, node: &Element) -> Overflow {
        self.style_value(node, "overflow-y")
            .map(|v| Overflow::parse(&v))
            .unwrap_or_default()
    }

    fn scroll_height(&self, node: &Element) -> f64 {
        node.scroll_height() as f64
    }

    fn client_height(&self, node: &Element) -> f64 {
        node.client_height() as f64
    }

    fn element_rect(&self, node: &Element) -> Rect {
        let r = node.get_bounding_client_rect();
        let scroll = self.window_scroll();
        Rect::new(r.left() + scroll.left, r.top() + scroll.top, r.width(), r.height())
    }

    fn viewport(&self, container: &ScrollContainer<Element>) -> Viewport {
        match container {
            ScrollContainer::Document => {
                let scroll = self.window_scroll();
                let width = self.window.inner_width().ok().and_then(|v| v.as_f64());
                let height = self.window.inner_height().ok().and_then(|v| v.as_f64());
                Viewport {
                    rect: Rect::new(
                        scroll.left,
                        scroll.top,
                        width.unwrap_or(0.0),
                        height.unwrap_or(0.0),
                    ),
                    scroll,
                }
            }
            ScrollContainer::Element(node) => {
                let outer = self.element_rect(node);
                Viewport {
                    rect: Rect::new(
                        outer.left + self.style_px(node, "border-left-width"),
                        outer.top + self.style_px(node, "border-top-width"),
                        node.client_width() as f64,
                        node.client_height() as f64,
                    ),
                    scroll: ScrollPosition {
                        left: node.scroll_left() as f64,
                        top: node.scroll_top() as f64,
                    },
                }
            }
        }
    }

    fn scroll_to(&self, container: &ScrollContainer<Element>, position: ScrollPosition) {
        match container {
            ScrollContainer::Document => {
                self.window.scroll_to_with_x_and_y(position.left, position.top);
            }
            ScrollContainer::Element(node) => {
                node.set_scroll_left(position.left.round() as i32);
                node.set_scroll_top(position.top.round() as i32);
            }
        }
    }
}
