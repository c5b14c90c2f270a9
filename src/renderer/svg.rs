//! SVG backend
//!
//! Keeps one SVG element per body inside the page's `<svg>` canvas: a green
//! circle for the frog, violet rectangles for vehicles and brown ones for
//! platforms.

use std::collections::HashMap;

use web_sys::{Document, Element};

use super::Renderer;
use super::scene::{SceneSync, Shape};
use crate::sim::{BodyKind, GameState, GameStatus};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub struct SvgRenderer {
    document: Document,
    canvas: Element,
    scene: SceneSync,
    nodes: HashMap<u32, Element>,
}

impl SvgRenderer {
    pub fn new(document: Document, canvas: Element) -> Self {
        Self {
            document,
            canvas,
            scene: SceneSync::new(),
            nodes: HashMap::new(),
        }
    }

    fn create(&mut self, shape: &Shape) {
        let tag = match shape.kind {
            BodyKind::Frog => "circle",
            BodyKind::Vehicle | BodyKind::Platform => "rect",
        };
        let el = match self.document.create_element_ns(Some(SVG_NS), tag) {
            Ok(el) => el,
            Err(e) => {
                log::warn!("Could not create <{}>: {:?}", tag, e);
                return;
            }
        };

        match shape.kind {
            BodyKind::Frog => {
                let _ = el.set_attribute("r", &(shape.width / 2.0).to_string());
                let _ = el.set_attribute("style", "fill: green");
            }
            BodyKind::Vehicle => {
                let _ = el.set_attribute("fill", "violet");
            }
            BodyKind::Platform => {
                let _ = el.set_attribute("fill", "peru");
            }
        }
        if shape.kind != BodyKind::Frog {
            let _ = el.set_attribute("width", &shape.width.to_string());
            let _ = el.set_attribute("height", &shape.height.to_string());
        }

        place(&el, shape);
        let _ = self.canvas.append_child(&el);
        self.nodes.insert(shape.id, el);
    }

    fn show_status(&self, status: GameStatus) {
        if let Some(el) = self.document.get_element_by_id("status") {
            let text = match status {
                GameStatus::Playing => "",
                GameStatus::Won => "You made it!",
                GameStatus::Crushed => "Squashed!",
                GameStatus::Drowned => "Sploosh!",
            };
            el.set_text_content(Some(text));
        }
        if let Some(el) = self.document.get_element_by_id("restart-btn") {
            let class = if status.is_terminal() { "" } else { "hidden" };
            let _ = el.set_attribute("class", class);
        }
    }
}

/// Write the position attributes for a shape
fn place(el: &Element, shape: &Shape) {
    if shape.kind == BodyKind::Frog {
        let (cx, cy) = shape.center();
        let _ = el.set_attribute("cx", &cx.to_string());
        let _ = el.set_attribute("cy", &cy.to_string());
    } else {
        let _ = el.set_attribute("x", &shape.x.to_string());
        let _ = el.set_attribute("y", &shape.y.to_string());
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, state: &GameState) {
        let diff = self.scene.sync(state);
        if diff.is_empty() {
            return;
        }

        for id in &diff.removed {
            if let Some(el) = self.nodes.remove(id) {
                el.remove();
            }
        }
        for shape in &diff.added {
            self.create(shape);
        }
        for shape in &diff.moved {
            if let Some(el) = self.nodes.get(&shape.id) {
                place(el, shape);
            }
        }
        if let Some(status) = diff.status {
            self.show_status(status);
        }
    }

    fn reset(&mut self) {
        self.scene.reset();
        for (_, el) in self.nodes.drain() {
            el.remove();
        }
    }
}
