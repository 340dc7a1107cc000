use crossterm::event::{Event, KeyEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::content::{CountryGuide, Testimonial};

/// Events delivered to the UI thread.
///
/// Fetch completions arrive here from the tokio tasks so all state
/// mutation stays on the single UI thread.
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    GuidesLoaded(Vec<CountryGuide>),
    /// Guide fetch failed; degrades to an empty collection.
    GuidesUnavailable,
    TestimonialsLoaded(Vec<Testimonial>),
    /// Testimonial fetch failed; degrades to an empty collection.
    TestimonialsUnavailable,
}

/// Input reader and tick generator.
///
/// A background thread polls crossterm for key/resize events and emits a
/// `Tick` every `tick_rate`; `stop()` shuts the thread down at teardown.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if stop_flag.load(Ordering::Relaxed) {
                    break;
                }

                // Short poll timeout so the stop flag is checked frequently
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match crossterm::event::poll(timeout) {
                    Ok(true) => match crossterm::event::read() {
                        Ok(Event::Key(key)) => {
                            let _ = event_tx.send(AppEvent::Key(key));
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            let _ = event_tx.send(AppEvent::Resize(cols, rows));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            warn!(error = %err, "input read failed");
                            break;
                        }
                    },
                    Ok(false) => {
                        // Timeout — no event
                    }
                    Err(err) => {
                        warn!(error = %err, "input poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    let _ = event_tx.send(AppEvent::Tick);
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx, stop }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Sender handle for the fetch tasks.
    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }

    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
