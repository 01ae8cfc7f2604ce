//! Core building blocks of the speech bubble pipeline
//!
//! Text flows through these modules in order: [`wrap`] builds a [`Message`],
//! [`BubbleRenderer`] draws it, and [`ArtPrinter`] prints the art underneath.

mod art;
mod box_drawing;
mod bubble;
mod config;
mod error;
pub mod logging;
mod message;
mod text;

pub use art::*;
pub use box_drawing::*;
pub use bubble::*;
pub use config::*;
pub use error::*;
pub use message::*;
pub use text::*;
