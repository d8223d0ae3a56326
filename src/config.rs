//! Command line configuration for the preview binary.
//!
//! Values that shape rendering (mode, palette) are resolved here once at
//! startup; malformed values are logged and replaced by fallbacks instead of
//! aborting.

use crate::color::{MID_GRAY, Palette, Rgb};
use crate::render::RenderMode;
use clap::Parser;
use thiserror::Error;

/// Environment variable consulted when `--mode` is not given.
pub const MODE_ENV: &str = "LYRIC_RENDER_MODE";

/// Preview synchronized, colorized lyrics in the terminal
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Config {
    /// Lyric lines to preview; each line's words are timed evenly
    #[arg(value_name = "LINE")]
    pub lines: Vec<String>,
    /// Render mode: simple, smooth, wave or glow (falls back to LYRIC_RENDER_MODE)
    #[arg(long)]
    pub mode: Option<String>,
    /// Color for sung lyrics (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub active_color: Option<String>,
    /// Accent color for pre-heat, wave and glow effects (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub transition_color: Option<String>,
    /// Color for lyrics not yet sung (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub inactive_color: Option<String>,
    /// Glow highlight color (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub white_color: Option<String>,
    /// Refresh rate of the preview, in frames per second
    #[arg(long, default_value_t = 30)]
    pub fps: u32,
    /// Duration of each word in the preview, in milliseconds
    #[arg(long, default_value_t = 450)]
    pub word_ms: u64,
    /// Treat lines as plain LRC lines (line-level modes) instead of word-timed lines
    #[arg(long)]
    pub lrc: bool,
    /// Translation for each line, in order (repeatable)
    #[arg(long = "translation", value_name = "TEXT")]
    pub translations: Vec<String>,
    /// Hide translations
    #[arg(long)]
    pub no_translation: bool,
    /// Number of rows shown around the current line (3 or 5)
    #[arg(long, default_value_t = 3)]
    pub rows: usize,
    /// Print frames to stdout instead of the full-screen view
    #[arg(long)]
    pub pipe: bool,
    /// In pipe mode, emit [#RRGGBB]text[/] markup instead of ANSI escapes
    #[arg(long)]
    pub markup: bool,
    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug_log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lines: vec![],
            mode: None,
            active_color: None,
            transition_color: None,
            inactive_color: None,
            white_color: None,
            fps: 30,
            word_ms: 450,
            lrc: false,
            translations: vec![],
            no_translation: false,
            rows: 3,
            pipe: false,
            markup: false,
            debug_log: false,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("frame rate must be between 1 and 240, got {0}")]
    FrameRate(u32),
    #[error("word duration must be positive")]
    WordDuration,
    #[error("rows must be 3 or 5, got {0}")]
    Rows(usize),
}

pub fn mode_from_env_if_empty(cfg: &mut Config) {
    if cfg.mode.is_none()
        && let Ok(s) = std::env::var(MODE_ENV)
        && !s.trim().is_empty()
    {
        cfg.mode = Some(s);
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=240).contains(&self.fps) {
            return Err(ConfigError::FrameRate(self.fps));
        }
        if self.word_ms == 0 {
            return Err(ConfigError::WordDuration);
        }
        if self.rows != 3 && self.rows != 5 {
            return Err(ConfigError::Rows(self.rows));
        }
        Ok(())
    }

    /// Configured render mode; unknown names fall back to smooth.
    pub fn render_mode(&self) -> RenderMode {
        match self.mode.as_deref().map(str::parse::<RenderMode>) {
            None => RenderMode::default(),
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                tracing::warn!(error = %e, fallback = %RenderMode::default(), "Ignoring render mode");
                RenderMode::default()
            }
        }
    }

    /// Palette from the color flags; unset colors keep their defaults and
    /// malformed ones become mid-gray.
    pub fn palette(&self) -> Palette {
        let defaults = Palette::default();
        Palette {
            active: resolve_color("active", self.active_color.as_deref(), defaults.active),
            transition: resolve_color("transition", self.transition_color.as_deref(), defaults.transition),
            inactive: resolve_color("inactive", self.inactive_color.as_deref(), defaults.inactive),
            white: resolve_color("white", self.white_color.as_deref(), defaults.white),
        }
    }

    /// Duration of one refresh tick in milliseconds.
    pub fn frame_ms(&self) -> u64 {
        1000 / u64::from(self.fps.max(1))
    }
}

fn resolve_color(name: &str, value: Option<&str>, default: Rgb) -> Rgb {
    let Some(value) = value else {
        return default;
    };
    match Rgb::from_hex(value) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(color = name, error = %e, "Malformed palette color, using mid-gray");
            MID_GRAY
        }
    }
}
