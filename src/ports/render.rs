//! Renderer port - abstraction for the display collaborator

use crate::{board::Cell, session::Session, state::GameState};

/// Everything a renderer needs to draw one frame: the nine cells, the
/// status line, and whether clicks are currently accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub cells: [Cell; 9],
    pub status: String,
    pub accepts_input: bool,
}

impl BoardView {
    /// Snapshot a session into a view
    pub fn of(session: &Session) -> Self {
        Self::from_parts(session.state(), session.accepts_input())
    }

    pub fn from_parts(state: &GameState, accepts_input: bool) -> Self {
        BoardView {
            cells: *state.board().cells(),
            status: state.status_line(),
            accepts_input,
        }
    }
}

/// Port for the rendering collaborator.
///
/// The core hands over a [`BoardView`] per frame; how the grid becomes
/// clickable is entirely the adapter's business.
pub trait Renderer {
    fn render(&mut self, view: &BoardView);
}
