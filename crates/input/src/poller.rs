//! Background event poller.
//!
//! A dedicated thread blocks on the terminal's event read and forwards each
//! event, translated and in arrival order, into an unbounded channel. The
//! thread is never joined: it ends when the receiver goes away or the process
//! exits.

use std::thread;

use tokio::sync::mpsc;

use crate::map::translate;
use crate::types::InputEvent;

/// Spawn the poller and return the consuming end of its channel.
pub fn spawn() -> mpsc::UnboundedReceiver<InputEvent> {
    spawn_with(crossterm::event::read)
}

/// Spawn a poller over an arbitrary blocking event source.
///
/// The thread stops on the first read error or once the receiver is dropped.
pub fn spawn_with<F>(mut read: F) -> mpsc::UnboundedReceiver<InputEvent>
where
    F: FnMut() -> std::io::Result<crossterm::event::Event> + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();

    let spawned = thread::Builder::new()
        .name("event-poller".to_string())
        .spawn(move || loop {
            let event = match read() {
                Ok(event) => event,
                Err(err) => {
                    log::warn!("event poller stopped: {err}");
                    break;
                }
            };
            if tx.send(translate(event)).is_err() {
                log::debug!("event poller stopped: receiver closed");
                break;
            }
        });

    // On spawn failure the sender is dropped with the closure, so the caller
    // just sees a closed channel.
    if let Err(err) = spawned {
        log::warn!("failed to spawn event poller: {err}");
    }

    rx
}
