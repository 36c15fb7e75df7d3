//! Terminal renderer adapter

use std::io::Write;

use crate::{
    board::Cell,
    ports::{BoardView, Renderer},
};

/// Renders the grid and status line to a terminal.
///
/// Empty cells show their index so the player knows what to type; occupied
/// cells show the mark. Writes go through an owned writer so tests can
/// capture output.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn cell_label(view: &BoardView, pos: usize) -> char {
        match view.cells[pos] {
            Cell::Empty => char::from_digit(pos as u32, 10).unwrap_or('.'),
            occupied => occupied.to_char(),
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, view: &BoardView) {
        let mut draw = || -> std::io::Result<()> {
            writeln!(self.out)?;
            for row in 0..3 {
                let labels: Vec<String> = (0..3)
                    .map(|col| Self::cell_label(view, row * 3 + col).to_string())
                    .collect();
                writeln!(self.out, " {} ", labels.join(" | "))?;
                if row < 2 {
                    writeln!(self.out, "---+---+---")?;
                }
            }
            writeln!(self.out, "\n{}", view.status)
        };
        // A failed write to the terminal leaves nothing sensible to do.
        let _ = draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameState;

    #[test]
    fn test_render_shows_marks_and_indices() {
        let mut state = GameState::new();
        state.apply_move(0);
        state.apply_move(4);

        let view = crate::ports::BoardView::from_parts(&state, true);
        let mut buf = Vec::new();
        TerminalRenderer::new(&mut buf).render(&view);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains(" X | 1 | 2 "));
        assert!(output.contains(" 3 | O | 5 "));
        assert!(output.contains("Next player: X"));
    }
}
