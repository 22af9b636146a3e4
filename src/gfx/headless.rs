//! Headless provider and surface
//!
//! Back the demo binary and the test suite: assets "load" instantly and the
//! surface records what was asked of it instead of rasterizing anything.

use std::sync::mpsc::{Receiver, channel};

use super::{Resources, Surface, TextAlign};

/// Provider whose images are their own sprite labels, ready immediately
#[derive(Debug)]
pub struct HeadlessResources {
    loaded: Vec<String>,
    missing: String,
}

impl HeadlessResources {
    pub fn new() -> Self {
        Self {
            loaded: Vec::new(),
            missing: String::from("missing-sprite"),
        }
    }
}

impl Default for HeadlessResources {
    fn default() -> Self {
        Self::new()
    }
}

impl Resources for HeadlessResources {
    type Image = String;

    fn load(&mut self, ids: &[&'static str]) -> Receiver<()> {
        self.loaded = ids.iter().map(|id| id.to_string()).collect();
        log::debug!("Loaded {} sprites", self.loaded.len());

        // Nothing to fetch, the ready signal fires right away
        let (tx, rx) = channel();
        let _ = tx.send(());
        rx
    }

    fn get(&self, id: &str) -> &Self::Image {
        self.loaded
            .iter()
            .find(|label| label.as_str() == id)
            .unwrap_or(&self.missing)
    }
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Image { label: String, x: f32, y: f32 },
    Text { text: String, x: f32, y: f32 },
}

/// Surface that records draw calls instead of rasterizing
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    pub size: (u32, u32),
    pub ops: Vec<DrawOp>,
    pub font: String,
    pub align: TextAlign,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded ops of a given kind
    pub fn text_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { .. }))
            .count()
    }
}

impl Surface for HeadlessSurface {
    type Image = String;

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        log::debug!("Surface resized to {}x{}", width, height);
    }

    fn draw_image(&mut self, image: &Self::Image, x: f32, y: f32) {
        self.ops.push(DrawOp::Image {
            label: image.clone(),
            x,
            y,
        });
    }

    fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
        });
    }
}
