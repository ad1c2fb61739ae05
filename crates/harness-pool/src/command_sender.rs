use crate::ScaleCommand;

use log::warn;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Worker-side handle to the command channel.
///
/// `send` is fire-and-forget: it never blocks a request handler, and a
/// command is dropped when the controller end is gone.
#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<ScaleCommand>,
}

impl CommandSender {
    /// Channel backed by the process stdout, one JSON object per line.
    ///
    /// The returned task owns stdout for the rest of the process life;
    /// all logging must stay on stderr.
    pub fn stdout() -> (Self, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::unbounded_channel::<ScaleCommand>();
        let writer = tokio::spawn(async move {
            let mut out = tokio::io::stdout();
            while let Some(command) = rx.recv().await {
                let mut line = match serde_json::to_vec(&command) {
                    Ok(line) => line,
                    Err(e) => {
                        warn!("Failed to encode scale command: {e}");
                        continue;
                    }
                };
                line.push(b'\n');
                if out.write_all(&line).await.is_err() || out.flush().await.is_err() {
                    // Controller end is closed; nothing left to deliver to.
                    break;
                }
            }
        });
        (Self { tx }, writer)
    }

    /// Channel backed by an in-process receiver, for tests.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ScaleCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn send(&self, command: ScaleCommand) {
        if self.tx.send(command).is_err() {
            warn!("Command channel closed, dropping {command:?}");
        }
    }
}
