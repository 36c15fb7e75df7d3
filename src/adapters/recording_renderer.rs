//! Recording renderer adapter for tests

use crate::ports::{BoardView, Renderer};

/// Test double that captures every rendered view in order
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    views: Vec<BoardView>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn views(&self) -> &[BoardView] {
        &self.views
    }

    pub fn last(&self) -> Option<&BoardView> {
        self.views.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &BoardView) {
        self.views.push(view.clone());
    }
}
