//! Run drivers: pump events from a [`SortRun`] into a frontend.
//!
//! The headless driver is a plain pump loop. The interactive driver
//! multiplexes the run against terminal input so keys keep working
//! while the sort is animating.

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use engine::{RunEvent, SortRun, SpeedControl};
use futures_util::StreamExt;
use tracing::debug;

use crate::error::{ViewerError, ViewerResult};
use crate::headless::TraceRecorder;
use crate::render::TerminalRenderer;
use crate::traits::Frontend;

/// Speed step per keypress, in percent.
const SPEED_STEP: u8 = 10;

/// Forwards every event to the frontend (and the recorder, when given)
/// until the run reports a terminal event, which is returned.
///
/// Returns [`ViewerError::StreamEnded`] if the channel closes first;
/// a healthy engine always ends a run with a terminal event.
pub async fn drive_run<F: Frontend>(
    run: &mut SortRun,
    frontend: &mut F,
    mut recorder: Option<&mut TraceRecorder>,
) -> ViewerResult<RunEvent> {
    while let Some(event) = run.next_event().await {
        if let Some(recorder) = recorder.as_deref_mut() {
            recorder.record(&event).await?;
        }
        frontend.handle_event(event.clone()).await?;
        if event.is_terminal() {
            return Ok(event);
        }
    }
    Err(ViewerError::StreamEnded)
}

/// Interactive variant of [`drive_run`]: renders events while reacting
/// to key presses. `q`, `Esc` and `Ctrl+C` cancel the run, `+` and `-`
/// adjust the speed. After the terminal event the final frame stays up
/// until the next key press.
pub async fn drive_run_interactive(
    run: &mut SortRun,
    renderer: &mut TerminalRenderer,
    speed: &SpeedControl,
    mut recorder: Option<&mut TraceRecorder>,
) -> ViewerResult<RunEvent> {
    let mut keys = EventStream::new();
    let mut keys_open = true;

    loop {
        tokio::select! {
            maybe_event = run.next_event() => {
                let Some(event) = maybe_event else {
                    return Err(ViewerError::StreamEnded);
                };
                if let Some(recorder) = recorder.as_deref_mut() {
                    recorder.record(&event).await?;
                }
                renderer.handle_event(event.clone()).await?;
                if event.is_terminal() {
                    wait_for_key(&mut keys).await?;
                    return Ok(event);
                }
            }
            maybe_key = keys.next(), if keys_open => {
                match maybe_key {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => {
                                debug!("cancel requested from keyboard");
                                run.cancel();
                            }
                            KeyCode::Char('c')
                                if key.modifiers.contains(KeyModifiers::CONTROL) =>
                            {
                                run.cancel();
                            }
                            KeyCode::Char('+') | KeyCode::Char('=') => {
                                speed.set_percent(speed.percent().saturating_add(SPEED_STEP));
                                renderer.refresh()?;
                            }
                            KeyCode::Char('-') => {
                                speed.set_percent(speed.percent().saturating_sub(SPEED_STEP));
                                renderer.refresh()?;
                            }
                            _ => {}
                        }
                    }
                    Some(Ok(Event::Resize(_, _))) => renderer.refresh()?,
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    // Input stream gone; keep draining the run.
                    None => keys_open = false,
                }
            }
        }
    }
}

async fn wait_for_key(keys: &mut EventStream) -> ViewerResult<()> {
    while let Some(event) = keys.next().await {
        if let Event::Key(key) = event? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
    Ok(())
}
