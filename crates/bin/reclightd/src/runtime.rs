//! Daemon event loop — drives the controller across event-source outages.
//!
//! One shutdown future is pinned for the lifetime of the loop and polled
//! at every await point, including the backoff waits between reconnect
//! attempts. A stop request therefore interrupts the daemon even while
//! the event source is unavailable; creating a fresh signal listener per
//! iteration would drop requests that arrive in between.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;

use reclight_app::controller::Controller;
use reclight_app::debounce::ActuationSink;

/// Delay before retrying after the event source goes away.
pub const RECONNECT_BACKOFF: Duration = Duration::from_secs(2);

/// Drive `controller` from successive event sources until `shutdown`
/// completes.
///
/// When the current source ends, `connect` is called to reopen it;
/// failures are retried with [`RECONNECT_BACKOFF`] between attempts.
/// `listener` is the handle keeping the current source alive — it is
/// dropped before reconnecting and replaced on success.
pub async fn run_until_shutdown<S, L, E, C, F>(
    controller: &mut Controller<S>,
    mut listener: L,
    mut events: mpsc::UnboundedReceiver<Vec<u8>>,
    mut connect: C,
    shutdown: F,
) where
    S: ActuationSink + 'static,
    E: std::fmt::Display,
    C: FnMut() -> Result<(L, mpsc::UnboundedReceiver<Vec<u8>>), E>,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    'daemon: loop {
        tokio::select! {
            () = controller.run(&mut events) => {
                tracing::warn!("event source disconnected, reconnecting");
                drop(listener);
                loop {
                    tokio::select! {
                        () = tokio::time::sleep(RECONNECT_BACKOFF) => {}
                        () = &mut shutdown => {
                            tracing::info!("shutting down");
                            break 'daemon;
                        }
                    }
                    match connect() {
                        Ok((reopened, rx)) => {
                            listener = reopened;
                            events = rx;
                            break;
                        }
                        Err(err) => tracing::warn!(%err, "reconnect failed, retrying"),
                    }
                }
            }
            () = &mut shutdown => {
                tracing::info!("shutting down");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use reclight_app::debounce::DebounceScheduler;
    use reclight_app::interpreter::SignalInterpreter;

    #[derive(Default)]
    struct SpySink {
        fired: Mutex<Vec<bool>>,
    }

    impl ActuationSink for SpySink {
        fn fire(&self, on: bool) -> impl Future<Output = ()> + Send {
            self.fired.lock().unwrap().push(on);
            async {}
        }
    }

    fn controller() -> (Controller<SpySink>, Arc<SpySink>) {
        let sink = Arc::new(SpySink::default());
        let scheduler = DebounceScheduler::new(Arc::clone(&sink), Duration::from_millis(250));
        let interpreter = SignalInterpreter::new(117, 118);
        (Controller::new(interpreter, scheduler), sink)
    }

    fn closed_channel() -> mpsc::UnboundedReceiver<Vec<u8>> {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(tx);
        rx
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_on_shutdown_while_connected() {
        let (mut controller, _sink) = controller();
        let (_tx, rx) = mpsc::unbounded_channel();

        run_until_shutdown(
            &mut controller,
            (),
            rx,
            || Err::<((), _), _>("unused"),
            tokio::time::sleep(Duration::from_secs(1)),
        )
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_on_shutdown_while_reconnecting() {
        let (mut controller, _sink) = controller();

        // The source is already gone and every reconnect attempt fails,
        // so the loop sits in backoff; shutdown must still get through.
        run_until_shutdown(
            &mut controller,
            (),
            closed_channel(),
            || Err::<((), _), _>("backend unavailable"),
            tokio::time::sleep(Duration::from_secs(30)),
        )
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_resume_processing_after_reconnect() {
        let (mut controller, sink) = controller();

        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(vec![0xB0, 118, 127]).unwrap();
        tx.send(vec![0xB0, 117, 127]).unwrap();
        let mut replacement = Some(rx);
        let connect = move || replacement.take().map(|rx| ((), rx)).ok_or("exhausted");

        run_until_shutdown(
            &mut controller,
            (),
            closed_channel(),
            connect,
            tokio::time::sleep(Duration::from_secs(30)),
        )
        .await;

        // Events sent through the reopened source were processed.
        assert_eq!(sink.fired.lock().unwrap().clone(), vec![true]);
    }
}
