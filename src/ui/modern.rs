//! Full-screen preview of the lyric renderer.
//!
//! This module implements a terminal user interface with:
//! - The current line centered between its neighbours (3 or 5 rows)
//! - Continuous color animation driven by a fixed refresh tick
//! - Runtime controls for the render mode, translations and pause
//!
//! The event loop uses `tokio::select!` to handle:
//! - Refresh ticks
//! - User keyboard input (q/ESC to quit, space to pause, m to cycle modes,
//!   t to toggle translations, r to restart)

use crate::lyrics::timing::line_index_at;
use crate::render::to_spans;
use crate::renderer::{LyricRenderer, window};
use crate::timer::PlaybackTimer;
use crate::ui::Track;
use crossterm::{
    event::{Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::io;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;

/// Pause after the last line before the preview starts over.
const LOOP_PAUSE_MS: i64 = 1500;

/// UI state for the full-screen preview
pub struct ModernUIState {
    pub renderer: LyricRenderer,
    pub clock: PlaybackTimer,
    pub rows: usize,
    pub should_exit: bool,
}

impl ModernUIState {
    pub fn new(renderer: LyricRenderer, rows: usize) -> Self {
        Self {
            renderer,
            clock: PlaybackTimer::started_at(0.0),
            rows,
            should_exit: false,
        }
    }
}

/// Run the full-screen preview until the user quits.
pub async fn display_lyrics_modern(
    track: Track,
    renderer: LyricRenderer,
    rows: usize,
    frame: Duration,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    enable_raw_mode().map_err(to_boxed_err)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(to_boxed_err)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(to_boxed_err)?;
    let mut state = ModernUIState::new(renderer, rows);

    // Single background thread polls crossterm and forwards events into the
    // async loop; it exits once the receiver is dropped.
    let (event_tx, mut event_rx) = mpsc::channel(32);
    thread::spawn(move || {
        loop {
            match crossterm::event::poll(Duration::from_millis(100)) {
                Ok(true) => {
                    if let Ok(ev) = crossterm::event::read()
                        && event_tx.blocking_send(ev).is_err()
                    {
                        break;
                    }
                }
                Ok(false) => {
                    if event_tx.is_closed() {
                        break;
                    }
                }
                Err(_) => thread::sleep(Duration::from_millis(100)),
            }
        }
    });

    let mut ticker = tokio::time::interval(frame);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    tracing::debug!(mode = %state.renderer.mode(), rows, "Starting full-screen preview");

    let result = async {
        while !state.should_exit {
            tokio::select! {
                biased;

                maybe_event = event_rx.recv() => {
                    match maybe_event {
                        Some(event) => process_event(event, &mut state),
                        None => state.should_exit = true,
                    }
                    draw(&mut terminal, &track, &state)?;
                }

                _ = ticker.tick() => {
                    loop_if_finished(&track, &mut state);
                    draw(&mut terminal, &track, &state)?;
                }
            }
        }
        Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
    }
    .await;

    disable_raw_mode().map_err(to_boxed_err)?;
    execute!(io::stdout(), LeaveAlternateScreen).map_err(to_boxed_err)?;
    result
}

/// Restart from the top once the track and a short pause have elapsed.
fn loop_if_finished(track: &Track, state: &mut ModernUIState) {
    if state.clock.now_ms() > track.end_ms() + LOOP_PAUSE_MS {
        state.clock.seek(0.0);
    }
}

/// Handle user input events (keyboard)
fn process_event(event: Event, state: &mut ModernUIState) {
    let Event::Key(key) = event else {
        return;
    };
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_exit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_exit = true;
        }
        KeyCode::Char(' ') => state.clock.toggle(),
        KeyCode::Char('r') => state.clock.seek(0.0),
        KeyCode::Char('m') => {
            let next = state.renderer.mode().next();
            tracing::debug!(mode = %next, "Switching render mode");
            state.renderer.set_mode(next);
        }
        KeyCode::Char('t') => {
            let show = !state.renderer.show_translation();
            state.renderer.set_show_translation(show);
        }
        _ => {}
    }
}

/// Styled rows around the current line at `time_ms`.
pub fn window_lines(track: &Track, renderer: &LyricRenderer, time_ms: i64, rows: usize) -> Vec<Line<'static>> {
    let inactive = Style::default().fg(Color::from(renderer.palette().inactive));
    let translation_span = |t: Option<&str>| {
        t.filter(|t| renderer.show_translation() && !t.is_empty())
            .map(|t| Span::styled(format!(" [{t}]"), inactive))
    };
    match track {
        Track::Timed(lines) => {
            let current = line_index_at(lines, time_ms, |l| l.start_ms);
            window(rows, current, lines.len(), |idx| {
                let line = &lines[idx];
                let mut spans = if Some(idx) == current {
                    let frame = renderer.frame(line, time_ms);
                    into_owned_spans(to_spans(&renderer.current_timed_segments(&frame)))
                } else {
                    vec![Span::styled(line.text(), inactive)]
                };
                spans.extend(translation_span(line.translation.as_deref()));
                Line::from(spans)
            })
        }
        Track::Lrc(lines) => {
            let current = line_index_at(lines, time_ms, |l| l.start_ms);
            window(rows, current, lines.len(), |idx| {
                let line = &lines[idx];
                let segment = (Some(idx) == current)
                    .then(|| renderer.current_lrc_segment(lines, idx, time_ms))
                    .flatten();
                let mut spans = match segment {
                    Some(seg) => into_owned_spans(to_spans(&[seg])),
                    None => vec![Span::styled(line.text.clone(), inactive)],
                };
                spans.extend(translation_span(line.translation.as_deref()));
                Line::from(spans)
            })
        }
    }
}

fn into_owned_spans(spans: Vec<Span<'_>>) -> Vec<Span<'static>> {
    spans
        .into_iter()
        .map(|s| Span::styled(s.content.into_owned(), s.style))
        .collect()
}

fn draw<B: Backend>(
    terminal: &mut Terminal<B>,
    track: &Track,
    state: &ModernUIState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let lines = window_lines(track, &state.renderer, state.clock.now_ms(), state.rows);
    let status = Line::from(Span::styled(
        format!(
            "{}{}  ·  space pause  m mode  t translation  r restart  q quit",
            state.renderer.mode(),
            if state.clock.is_playing() { "" } else { " (paused)" }
        ),
        Style::default().fg(Color::from(state.renderer.palette().inactive)),
    ));
    terminal
        .draw(|f| {
            let size = f.area();
            let height = lines.len() as u16;
            let top_padding = size.height.saturating_sub(height) / 2;
            let lyrics_area = Rect {
                x: size.x,
                y: size.y + top_padding,
                width: size.width,
                height: height.min(size.height),
            };
            f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), lyrics_area);
            if size.height > height + 1 {
                let status_area = Rect {
                    x: size.x,
                    y: size.y + size.height - 1,
                    width: size.width,
                    height: 1,
                };
                f.render_widget(Paragraph::new(status).alignment(Alignment::Center), status_area);
            }
        })
        .map_err(to_boxed_err)?;
    Ok(())
}

fn to_boxed_err<E: std::error::Error + Send + Sync + 'static>(
    e: E,
) -> Box<dyn std::error::Error + Send + Sync> {
    Box::new(e)
}
