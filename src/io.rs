use std::io;
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use crossterm::event;
use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use tracing::debug;
use tracing::warn;

use crate::events::Event;
use crate::simulation::StopHandle;

/// How long the input thread waits for an event before checking whether the loop is still running
const POLL_TIME: Duration = Duration::from_millis(100);

/// Converts a crossterm event into a lifegrid event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                kind: KeyEventKind::Press,
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                kind: KeyEventKind::Press,
                ..
            } => Some(Event::Exit),
            _ => None,
        },
        CrossTermEvent::Resize(cols, rows) => Some(Event::Resize { cols, rows }),
        _ => None,
    }
}

/// Watch the terminal for an exit key on a separate thread, and stop the simulation once it's
/// pressed. The thread ends on its own once the simulation is stopped by anyone.
///
/// If reading the terminal fails, the simulation is stopped as well and the error is returned
/// from the thread.
pub fn listen(handle: StopHandle) -> JoinHandle<io::Result<()>> {
    thread::spawn(move || {
        let res = poll_events(&handle);

        if let Err(e) = &res {
            warn!("Failed to read terminal events, stopping: {e}");
        }

        // stop on every way out, nothing else would ever get the exit key
        handle.stop();

        res
    })
}

fn poll_events(handle: &StopHandle) -> io::Result<()> {
    while !handle.is_stopped() {
        if !event::poll(POLL_TIME)? {
            continue;
        }

        match convert_event(event::read()?) {
            Some(Event::Exit) => {
                debug!("exit requested");
                handle.stop();
            }
            Some(Event::Resize { cols, rows }) => {
                debug!(cols, rows, "terminal resized, keeping the grid as is");
            }
            None => {}
        }
    }

    Ok(())
}
