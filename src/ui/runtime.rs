use crate::config::Config;
use crate::source::{run_worker, DataSource};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

const COMMAND_QUEUE: usize = 16;

/// Runs the interactive board until the user quits.
///
/// The draw/input loop stays on the calling thread; fetches run on `runtime`.
pub fn run(config: &Config, source: DataSource, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(config);
    app.on_resize(terminal.size()?.height);
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    runtime.spawn(run_worker(source, command_rx, events.sender()));
    app.set_command_sender(command_tx);
    app.request_students();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(rows)) => app.on_resize(rows),
            Ok(AppEvent::StudentsLoaded(students)) => app.on_students_loaded(students),
            Ok(AppEvent::StudentsFailed(message)) => app.on_students_failed(message),
            Ok(AppEvent::RollSaved) => app.on_roll_saved(),
            Ok(AppEvent::RollSaveFailed(message)) => app.on_roll_save_failed(message),
            Ok(AppEvent::ActivitiesLoaded(activities)) => app.on_activities_loaded(activities),
            Ok(AppEvent::ActivitiesFailed(message)) => app.on_activities_failed(message),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
