use std::sync::mpsc;
use tokio::sync::mpsc::Receiver;

use crate::source::DataSource;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Serves UI commands one at a time until either channel closes.
pub async fn run_worker(
    source: DataSource,
    mut commands: Receiver<UiCommand>,
    events: mpsc::Sender<AppEvent>,
) {
    tracing::info!(source = %source.describe(), "data source worker started");

    while let Some(command) = commands.recv().await {
        let event = match command {
            UiCommand::LoadStudents => match source.fetch_students().await {
                Ok(students) => AppEvent::StudentsLoaded(students),
                Err(err) => AppEvent::StudentsFailed(err.to_string()),
            },
            UiCommand::SaveRoll(input) => match source.save_roll(&input).await {
                Ok(()) => AppEvent::RollSaved,
                Err(err) => AppEvent::RollSaveFailed(err.to_string()),
            },
            UiCommand::LoadActivities => match source.fetch_activities().await {
                Ok(activities) => AppEvent::ActivitiesLoaded(activities),
                Err(err) => AppEvent::ActivitiesFailed(err.to_string()),
            },
        };

        if events.send(event).is_err() {
            break;
        }
    }

    tracing::debug!("data source worker stopped");
}
