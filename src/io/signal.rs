//! Ctrl-C watcher feeding the terminal input channel.

use super::InputEvent;
use std::sync::mpsc::Sender;
use std::thread;
use tracing::{debug, warn};

/// Spawn a thread that sends `InputEvent::Interrupt` on the first Ctrl-C.
///
/// Installing the handler replaces the default SIGINT disposition, so the
/// process keeps running until the session loop sees the event.
pub fn watch_ctrl_c(events: Sender<InputEvent>) {
    let spawned = thread::Builder::new()
        .name("ctrl-c".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    warn!(%err, "could not start signal runtime");
                    return;
                }
            };

            match runtime.block_on(tokio::signal::ctrl_c()) {
                Ok(()) => {
                    debug!("ctrl-c received");
                    if events.send(InputEvent::Interrupt).is_err() {
                        debug!("session already ended");
                    }
                }
                Err(err) => warn!(%err, "could not listen for ctrl-c"),
            }
        });

    if let Err(err) = spawned {
        warn!(%err, "could not spawn ctrl-c watcher");
    }
}
