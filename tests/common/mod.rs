#![allow(dead_code)]

use antform::{Overflow, Rect, ScrollContainer, ScrollHost, ScrollPosition, Viewport};
use std::cell::RefCell;
use std::collections::HashMap;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// One element of the fake tree
#[derive(Debug, Clone)]
pub struct FakeNode {
    pub id: Option<String>,
    pub parent: Option<usize>,
    pub is_body: bool,
    pub overflow_y: Overflow,
    pub scroll_height: f64,
    pub client_height: f64,
    pub rect: Rect,
    pub scroll: ScrollPosition,
}

impl FakeNode {
    fn plain(parent: Option<usize>, rect: Rect) -> Self {
        Self {
            id: None,
            parent,
            is_body: false,
            overflow_y: Overflow::Visible,
            scroll_height: rect.height,
            client_height: rect.height,
            rect,
            scroll: ScrollPosition::default(),
        }
    }
}

/// Minimal element tree with a document viewport, recording every scroll
pub struct FakeDom {
    pub nodes: Vec<FakeNode>,
    pub window: Viewport,
    pub scrolls: RefCell<Vec<(ScrollContainer<usize>, ScrollPosition)>>,
}

impl FakeDom {
    /// A document whose body holds nothing yet
    pub fn new(window_height: f64) -> Self {
        let mut body = FakeNode::plain(None, Rect::new(0.0, 0.0, 800.0, 4000.0));
        body.is_body = true;
        Self {
            nodes: vec![body],
            window: Viewport {
                rect: Rect::new(0.0, 0.0, 800.0, window_height),
                scroll: ScrollPosition::default(),
            },
            scrolls: RefCell::new(Vec::new()),
        }
    }

    pub fn body(&self) -> usize {
        0
    }

    pub fn add(&mut self, parent: usize, rect: Rect) -> usize {
        self.nodes.push(FakeNode::plain(Some(parent), rect));
        self.nodes.len() - 1
    }

    pub fn add_field(&mut self, parent: usize, id: &str, rect: Rect) -> usize {
        let idx = self.add(parent, rect);
        self.nodes[idx].id = Some(id.to_string());
        idx
    }

    /// A panel with `overflow-y: auto` whose content is `content_height` tall
    pub fn add_scroll_panel(&mut self, parent: usize, rect: Rect, content_height: f64) -> usize {
        let idx = self.add(parent, rect);
        let node = &mut self.nodes[idx];
        node.overflow_y = Overflow::Auto;
        node.scroll_height = content_height;
        idx
    }

    pub fn detach(&mut self, idx: usize) {
        self.nodes[idx].parent = None;
    }

    pub fn recorded(&self) -> Vec<(ScrollContainer<usize>, ScrollPosition)> {
        self.scrolls.borrow().clone()
    }
}

impl ScrollHost for FakeDom {
    type Node = usize;

    fn element_by_id(&self, id: &str) -> Option<usize> {
        let by_id: HashMap<&str, usize> = self
            .nodes
            .iter()
            .enumerate()
            .filter_map(|(idx, n)| n.id.as_deref().map(|id| (id, idx)))
            .collect();
        by_id.get(id).copied()
    }

    fn parent(&self, node: &usize) -> Option<usize> {
        self.nodes[*node].parent
    }

    fn is_body(&self, node: &usize) -> bool {
        self.nodes[*node].is_body
    }

    fn overflow_y(&self, node: &usize) -> Overflow {
        self.nodes[*node].overflow_y
    }

    fn scroll_height(&self, node: &usize) -> f64 {
        self.nodes[*node].scroll_height
    }

    fn client_height(&self, node: &usize) -> f64 {
        self.nodes[*node].client_height
    }

    fn element_rect(&self, node: &usize) -> Rect {
        self.nodes[*node].rect
    }

    fn viewport(&self, container: &ScrollContainer<usize>) -> Viewport {
        match container {
            ScrollContainer::Document => self.window,
            ScrollContainer::Element(idx) => {
                let node = &self.nodes[*idx];
                Viewport {
                    rect: node.rect,
                    scroll: node.scroll,
                }
            }
        }
    }

    fn scroll_to(&self, container: &ScrollContainer<usize>, position: ScrollPosition) {
        self.scrolls.borrow_mut().push((container.clone(), position));
    }
}
