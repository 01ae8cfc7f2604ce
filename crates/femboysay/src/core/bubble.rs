//! Speech bubble renderer
//!
//! Draws the wrapped message inside a bordered bubble:
//!
//! ```text
//!  ______________
//! / hello world  \
//! | this is a    |
//! \ bubble       /
//!  --------------
//! ```

use std::io::Write;

use tracing::trace;

use super::box_drawing::{BorderChars, LinePosition};
use super::message::{display_width, Message};
use super::SayError;

/// Renders a [`Message`] as a speech bubble
#[derive(Debug, Clone, Copy)]
pub struct BubbleRenderer {
    top: BorderChars,
    bottom: BorderChars,
}

impl BubbleRenderer {
    pub fn new() -> Self {
        Self {
            top: BorderChars::top(),
            bottom: BorderChars::bottom(),
        }
    }

    /// Render the bubble as a list of lines without terminators
    ///
    /// Every line has the same display width, `message.max_width() + 4`.
    pub fn render_lines(&self, message: &Message) -> Vec<String> {
        let width = message.max_width();
        let total = message.line_count();
        trace!(lines = total, width, "Rendering bubble");

        let mut out = Vec::with_capacity(total + 2);
        out.push(self.top.draw(width));

        for (i, line) in message.lines().iter().enumerate() {
            let edges = LinePosition::of(i, total).glyphs();
            let padding = width.saturating_sub(display_width(line));
            out.push(format!(
                "{} {}{} {}",
                edges.left,
                line,
                " ".repeat(padding),
                edges.right
            ));
        }

        out.push(self.bottom.draw(width));
        out
    }

    /// Render the bubble as a single string, one `\n` after every line
    pub fn render(&self, message: &Message) -> String {
        let mut out = String::new();
        for line in self.render_lines(message) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Write the rendered bubble to `writer`
    pub fn write_to<W: Write>(&self, message: &Message, mut writer: W) -> Result<(), SayError> {
        writer.write_all(self.render(message).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for BubbleRenderer {
    fn default() -> Self {
        Self::new()
    }
}
