use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::model::{Activity, Student};

pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    /// New terminal height in rows.
    Resize(u16),
    StudentsLoaded(Vec<Student>),
    StudentsFailed(String),
    RollSaved,
    RollSaveFailed(String),
    ActivitiesLoaded(Vec<Activity>),
    ActivitiesFailed(String),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                let polled = match event::poll(timeout) {
                    Ok(true) => event::read().map(Some),
                    Ok(false) => Ok(None),
                    Err(err) => Err(err),
                };

                let forwarded = match polled {
                    Ok(Some(Event::Key(key))) if key.kind != KeyEventKind::Release => {
                        event_tx.send(AppEvent::Input(key))
                    }
                    Ok(Some(Event::Resize(_, rows))) => event_tx.send(AppEvent::Resize(rows)),
                    Ok(_) => Ok(()),
                    Err(err) => {
                        tracing::error!(error = %err, "terminal event read failed");
                        break;
                    }
                };
                if forwarded.is_err() {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
