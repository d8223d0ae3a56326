//! Karaoke-style lyric colorization.
//!
//! The core ([`color`], [`easing`], [`render`]) maps word timings and a
//! playback clock to colored text every UI tick. [`renderer`] wraps it in a
//! long-lived object holding the palette and mode; [`ui`] hosts the terminal
//! preview used by the binary.

pub mod color;
pub mod config;
pub mod demo;
pub mod easing;
pub mod lyrics;
pub mod render;
pub mod renderer;
pub mod timer;
pub mod ui;

pub use color::{Palette, Rgb, blend};
pub use config::Config;
pub use easing::ease_in_out_cubic;
pub use lyrics::{Word, WordState};
pub use render::{LineMode, RenderMode, Segment, Signals, render_line, render_words};
pub use renderer::LyricRenderer;
