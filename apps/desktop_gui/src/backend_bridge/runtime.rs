//! Runtime bridge between UI command queue and backend event intake.

use std::thread::{self, JoinHandle};

use client_core::PostSource;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Runs `source` on a dedicated thread with its own tokio runtime.
///
/// The thread exits once every command sender has been dropped.
pub fn spawn_backend_thread<S>(
    source: S,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> JoinHandle<()>
where
    S: PostSource + 'static,
{
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));
        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                tracing::debug!(command = cmd.name(), "backend: handling command");
                match cmd {
                    BackendCommand::FetchPosts => {
                        let outcome = source.fetch_posts().await;
                        if ui_tx.send(UiEvent::PostsLoaded(outcome)).is_err() {
                            tracing::warn!("ui event channel closed; dropping posts outcome");
                            break;
                        }
                    }
                }
            }
        });
        tracing::debug!("backend worker stopped");
    })
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
        time::Duration,
    };

    use async_trait::async_trait;
    use crossbeam_channel::bounded;
    use shared::{domain::Post, error::FetchError};

    use super::*;

    struct CountingSource {
        calls: Arc<AtomicUsize>,
        outcome: Result<Vec<Post>, FetchError>,
    }

    #[async_trait]
    impl PostSource for CountingSource {
        async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    fn next_posts_event(ui_rx: &Receiver<UiEvent>) -> Result<Vec<Post>, FetchError> {
        loop {
            match ui_rx
                .recv_timeout(Duration::from_secs(5))
                .expect("backend event")
            {
                UiEvent::PostsLoaded(outcome) => return outcome,
                UiEvent::Info(_) => continue,
                UiEvent::BackendFailed(reason) => panic!("backend failed: {reason}"),
            }
        }
    }

    #[test]
    fn fetch_command_delivers_one_outcome() {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = CountingSource {
            calls: Arc::clone(&calls),
            outcome: Ok(vec![Post::new(1, "a", "b")]),
        };
        let (cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(16);
        let handle = spawn_backend_thread(source, cmd_rx, ui_tx);

        cmd_tx.send(BackendCommand::FetchPosts).expect("queue");
        let posts = next_posts_event(&ui_rx).expect("posts");
        assert_eq!(posts, vec![Post::new(1, "a", "b")]);

        drop(cmd_tx);
        handle.join().expect("worker exits");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(ui_rx.try_recv().is_err());
    }

    #[test]
    fn fetch_failure_is_forwarded_as_event() {
        let source = CountingSource {
            calls: Arc::new(AtomicUsize::new(0)),
            outcome: Err(FetchError::new("404 - Not Found")),
        };
        let (cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(16);
        let handle = spawn_backend_thread(source, cmd_rx, ui_tx);

        cmd_tx.send(BackendCommand::FetchPosts).expect("queue");
        let err = next_posts_event(&ui_rx).expect_err("failure");
        assert_eq!(err.message(), "404 - Not Found");

        drop(cmd_tx);
        handle.join().expect("worker exits");
    }
}
