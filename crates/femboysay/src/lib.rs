//! Femboysay - say something in a speech bubble above some ASCII art
//!
//! A cowsay-style library: a message is word-wrapped, drawn inside a speech
//! bubble, and followed by the contents of an art file.
//!
//! # Quick Start
//!
//! ```rust
//! use femboysay::say;
//!
//! let bubble = say("hi", 40).unwrap();
//! assert_eq!(bubble, " ____ \n< hi >\n ---- \n");
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use femboysay::prelude::*;
//!
//! let config = SayConfig::with_width(10).unwrap();
//! let message = wrap("hello world, how are you", config.width());
//! assert_eq!(message.line_count(), 3);
//!
//! let lines = BubbleRenderer::new().render_lines(&message);
//! assert!(lines[1].starts_with('/'));
//! assert!(lines[3].starts_with('\\'));
//! ```

pub mod core;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        wrap, ArtPrinter, BubbleRenderer, LinePosition, Message, SayConfig, SayError,
        DEFAULT_ART_FILE, DEFAULT_WIDTH, MAX_WIDTH, MIN_WIDTH,
    };
}

/// Wrap `text` and render it as a speech bubble
///
/// Surrounding whitespace is trimmed first. The width must lie in
/// `MIN_WIDTH..=MAX_WIDTH`.
///
/// # Returns
/// * `Ok(String)` - The bubble, one `\n` after each line
/// * `Err` - [`SayError::InvalidWidth`] or [`SayError::EmptyMessage`]
///
/// # Example
/// ```rust
/// use femboysay::say;
///
/// let bubble = say("hello world this is a longer message than ten chars", 10).unwrap();
/// assert!(bubble.lines().nth(1).unwrap().starts_with("/ "));
/// assert!(say("   ", 40).is_err());
/// ```
pub fn say(text: &str, width: usize) -> anyhow::Result<String> {
    let width = i64::try_from(width).unwrap_or(i64::MAX);
    let config = SayConfig::with_width(width)?;

    let text = text.trim();
    if text.is_empty() {
        return Err(SayError::EmptyMessage.into());
    }

    let message = wrap(text, config.width());
    Ok(BubbleRenderer::new().render(&message))
}
