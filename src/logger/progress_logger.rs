use std::io::Write;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL_MS: u64 = 150;

/// Spinner shown on stderr while a backend call is in flight.
pub struct ProgressLogger {
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl ProgressLogger {
    pub fn start(message: &str) -> Self {
        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = message.to_string();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval =
                tokio::time::interval(tokio::time::Duration::from_millis(FRAME_INTERVAL_MS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ", message, FRAMES[frame]);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % FRAMES.len();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        Self {
            stop_sender: Some(stop_tx),
            task_handle: Some(handle),
        }
    }

    pub async fn finish(mut self, final_message: &str) {
        self.halt().await;
        eprint!("\r\x1b[K✅ {final_message}\n");
        let _ = std::io::stderr().flush();
    }

    pub async fn fail(mut self, error_message: &str) {
        self.halt().await;
        eprint!("\r\x1b[K❌ {error_message}\n");
        let _ = std::io::stderr().flush();
    }

    async fn halt(&mut self) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }
        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }
    }
}
