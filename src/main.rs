use clap::Parser;
use lyricglow::config::{Config, mode_from_env_if_empty};
use lyricglow::render::{AnsiSink, MarkupSink, StyleSink};
use lyricglow::renderer::LyricRenderer;
use lyricglow::ui::Track;
use std::error::Error;
use std::io;
use std::time::Duration;

fn init_logging(debug: bool) {
    let default = if debug { "lyricglow=debug" } else { "lyricglow=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut cfg = Config::parse();
    mode_from_env_if_empty(&mut cfg);
    init_logging(cfg.debug_log);
    cfg.validate()?;

    let mode = cfg.render_mode();
    let renderer = LyricRenderer::new(cfg.palette(), mode)
        .with_frame_duration_ms(cfg.frame_ms())
        .with_translation(!cfg.no_translation);
    let track = Track::from_config(&cfg);
    let frame = Duration::from_millis(cfg.frame_ms());
    tracing::debug!(%mode, fps = cfg.fps, lrc = cfg.lrc, "Configured preview");

    let result = if cfg.pipe {
        let sink: &dyn StyleSink = if cfg.markup { &MarkupSink } else { &AnsiSink };
        let mut stdout = io::stdout();
        lyricglow::ui::pipe::display_lyrics_pipe(&track, &renderer, sink, frame, &mut stdout).await
    } else {
        lyricglow::ui::modern::display_lyrics_modern(track, renderer, cfg.rows, frame).await
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Preview failed");
        eprintln!("Error: {}", e);
        return Err(e);
    }
    Ok(())
}
