//! Greedy word wrapping of message text
//!
//! Text is split into paragraphs on `\n`. Blank paragraphs are dropped, and
//! every other paragraph is filled word by word into lines no wider than the
//! wrap width. A word wider than the limit is never split; it gets a line of
//! its own and the bubble grows to fit it.

use tracing::{debug, trace};

use super::message::{display_width, Message};

/// Wrap `text` into a new message with lines at most `width` columns wide.
///
/// # Example
/// ```
/// use femboysay::core::wrap;
///
/// let message = wrap("This is a long label", 10);
/// assert_eq!(message.lines(), ["This is a", "long label"]);
/// assert_eq!(message.max_width(), 10);
/// ```
pub fn wrap(text: &str, width: usize) -> Message {
    let mut message = Message::new();
    message.wrap_text(text, width);
    message
}

impl Message {
    /// Wrap `text` and append the resulting lines to this message
    pub fn wrap_text(&mut self, text: &str, width: usize) {
        for paragraph in text.split('\n') {
            if paragraph.trim().is_empty() {
                trace!("Skipping blank paragraph");
                continue;
            }
            self.wrap_paragraph(paragraph, width);
        }

        debug!(
            lines = self.line_count(),
            max_width = self.max_width(),
            width,
            "Wrapped message text"
        );
    }

    fn wrap_paragraph(&mut self, paragraph: &str, width: usize) {
        let mut current_line = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = display_width(word);

            if current_line.is_empty() {
                // First word on line
                current_line.push_str(word);
                current_width = word_width;
            } else if current_width + 1 + word_width <= width {
                current_line.push(' ');
                current_line.push_str(word);
                current_width += 1 + word_width;
            } else {
                self.add_line(std::mem::take(&mut current_line));
                current_line.push_str(word);
                current_width = word_width;
            }
        }

        if !current_line.is_empty() {
            self.add_line(current_line);
        }
    }
}
