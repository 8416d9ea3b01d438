//! Terminal events and the crossterm poller feeding them to the runtime

use std::time::Duration;

use crossterm::event::{self, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Raw event from crossterm before processing
#[derive(Debug)]
pub enum RawEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// The event payload handed to components
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse event other than scrolling
    Mouse(MouseEvent),
    /// Scroll event with position and delta
    Scroll { column: u16, row: u16, delta: isize },
    /// Terminal resize
    Resize(u16, u16),
}

impl EventKind {
    /// Position of a left button press, if this is one
    pub fn left_click(&self) -> Option<Position> {
        match self {
            EventKind::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => Some(Position::new(*column, *row)),
            _ => None,
        }
    }

    /// Whether this is a left click landing inside `area`
    pub fn is_click_in(&self, area: Rect) -> bool {
        self.left_click()
            .map(|pos| area.contains(pos))
            .unwrap_or(false)
    }
}

/// Convert a raw crossterm event into an [`EventKind`]
pub fn process_raw_event(raw: RawEvent) -> EventKind {
    match raw {
        RawEvent::Key(key) => EventKind::Key(key),
        RawEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => EventKind::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta: 1,
            },
            MouseEventKind::ScrollUp => EventKind::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta: -1,
            },
            _ => EventKind::Mouse(mouse),
        },
        RawEvent::Resize(w, h) => EventKind::Resize(w, h),
    }
}

/// Spawn the event polling task
///
/// Polls crossterm in short batches and forwards key, mouse and resize events
/// into `tx` until `cancel_token` fires or the receiver is dropped.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("Event poller cancelled, draining buffer");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut events_processed = 0;
                    while events_processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        events_processed += 1;
                        let raw = match event::read() {
                            Ok(event::Event::Key(key)) => RawEvent::Key(key),
                            Ok(event::Event::Mouse(mouse)) => RawEvent::Mouse(mouse),
                            Ok(event::Event::Resize(w, h)) => RawEvent::Resize(w, h),
                            _ => continue,
                        };
                        if tx.send(raw).is_err() {
                            debug!("Event channel closed, stopping poller");
                            return;
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_process_raw_event_scroll() {
        let kind = process_raw_event(RawEvent::Mouse(mouse(MouseEventKind::ScrollUp, 3, 7)));
        match kind {
            EventKind::Scroll { column, row, delta } => {
                assert_eq!((column, row, delta), (3, 7, -1));
            }
            other => panic!("Expected Scroll event, got {:?}", other),
        }
    }

    #[test]
    fn test_process_raw_event_resize() {
        let kind = process_raw_event(RawEvent::Resize(80, 24));
        assert!(matches!(kind, EventKind::Resize(80, 24)));
    }

    #[test]
    fn test_click_hit_testing() {
        let button = Rect::new(10, 5, 12, 1);

        let inside = process_raw_event(RawEvent::Mouse(mouse(
            MouseEventKind::Down(MouseButton::Left),
            12,
            5,
        )));
        assert!(inside.is_click_in(button));

        let outside = process_raw_event(RawEvent::Mouse(mouse(
            MouseEventKind::Down(MouseButton::Left),
            12,
            6,
        )));
        assert!(!outside.is_click_in(button));

        let right_button = process_raw_event(RawEvent::Mouse(mouse(
            MouseEventKind::Down(MouseButton::Right),
            12,
            5,
        )));
        assert!(!right_button.is_click_in(button));
    }
}
