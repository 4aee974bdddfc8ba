use crate::api::OmdbClient;
use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::{App, AppServices};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::title::TerminalTitle;
use crate::watched::WatchedStore;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Runs the interactive session until the user quits or a signal arrives.
pub fn run(config: Config, client: OmdbClient, store: WatchedStore) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("popcorn-fetch")
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .context("failed to install signal handlers")?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(1));
    let events = EventHandler::new(tick_rate, shutdown.clone());
    let services = AppServices {
        client,
        store,
        runtime: runtime.handle().clone(),
        events: events.sender(),
        title: Box::new(TerminalTitle),
    };
    // Load the list before touching the terminal so errors print cleanly.
    let mut app = App::new(config, services).context("failed to load watched list")?;

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    tracing::info!("Interactive session started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Search(intent)) => app.on_search_event(intent),
            Ok(AppEvent::Detail(intent)) => app.on_detail_event(intent),
            Ok(AppEvent::Shutdown) => {
                shutdown.signal();
                app.request_quit();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Restores the default title while the terminal is still ours.
    drop(app);
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("Interactive session ended");
    Ok(())
}
