use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::config::Config;
use crate::content::{CountryGuide, HttpContentSource, Testimonial};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: Config) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);

    // Fetch tasks live on this runtime; it must outlive the UI loop.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let source = Arc::new(HttpContentSource::new(&config.api));
    spawn_initial_load(&runtime, &source, &config, events.sender());

    let mut app = App::new(&config);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::GuidesLoaded(records)) => {
                info!(count = records.len(), "country guides loaded");
                app.guides_loaded(records);
            }
            Ok(AppEvent::GuidesUnavailable) => app.guides_failed(),
            Ok(AppEvent::TestimonialsLoaded(records)) => {
                info!(count = records.len(), "testimonials loaded");
                app.testimonials_loaded(records, Instant::now());
            }
            Ok(AppEvent::TestimonialsUnavailable) => app.testimonials_failed(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    app.teardown();
    events.stop();
    drop(guard);
    Ok(())
}

/// Kick off the one-per-mount collection fetches. Failures are logged and
/// delivered as "unavailable" events; the UI renders them as empty.
fn spawn_initial_load(
    runtime: &tokio::runtime::Runtime,
    source: &Arc<HttpContentSource>,
    config: &Config,
    tx: Sender<AppEvent>,
) {
    let guides_source = Arc::clone(source);
    let guides_path = config.api.countries_path.clone();
    let guides_tx = tx.clone();
    runtime.spawn(async move {
        match guides_source
            .fetch_records::<CountryGuide>(&guides_path)
            .await
        {
            Ok(records) => {
                let _ = guides_tx.send(AppEvent::GuidesLoaded(records));
            }
            Err(err) => {
                warn!(error = %err, "country guide fetch failed");
                let _ = guides_tx.send(AppEvent::GuidesUnavailable);
            }
        }
    });

    let testimonials_source = Arc::clone(source);
    let testimonials_path = config.api.testimonials_path.clone();
    runtime.spawn(async move {
        match testimonials_source
            .fetch_records::<Testimonial>(&testimonials_path)
            .await
        {
            Ok(records) => {
                let _ = tx.send(AppEvent::TestimonialsLoaded(records));
            }
            Err(err) => {
                warn!(error = %err, "testimonial fetch failed");
                let _ = tx.send(AppEvent::TestimonialsUnavailable);
            }
        }
    });
}
