use chrono::Utc;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::model::{ActivitiesResponse, Activity, Roll, RollInput, Student, StudentsResponse};
use crate::source::error::SourceError;

const ACTIVITIES_FILE: &str = "activities.json";

/// Offline roster: students from a JSON file, completed rolls in a sibling
/// `activities.json`.
#[derive(Debug)]
pub struct FileStore {
    students_path: PathBuf,
    activities_path: PathBuf,
    /// Serializes read-modify-write of the activity file.
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(students_path: impl Into<PathBuf>) -> Self {
        let students_path = students_path.into();
        let activities_path = students_path
            .parent()
            .map(|dir| dir.join(ACTIVITIES_FILE))
            .unwrap_or_else(|| PathBuf::from(ACTIVITIES_FILE));
        Self {
            students_path,
            activities_path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn students_path(&self) -> &Path {
        &self.students_path
    }

    pub fn activities_path(&self) -> &Path {
        &self.activities_path
    }

    pub async fn fetch_students(&self) -> Result<Vec<Student>, SourceError> {
        let body: StudentsResponse = read_json(&self.students_path).await?;
        Ok(body.students)
    }

    /// Appends the roll to the activity file as `Roll <n>` with the next id.
    pub async fn save_roll(&self, input: &RollInput) -> Result<(), SourceError> {
        let _guard = self.write_lock.lock().await;

        let mut activities = self.read_activities().await?;
        let id = activities
            .iter()
            .map(|activity| activity.entity.id)
            .max()
            .unwrap_or(0)
            + 1;
        activities.push(Activity::from_roll(Roll {
            id,
            name: format!("Roll {id}"),
            completed_at: Utc::now(),
            student_roll_states: input.student_roll_states.clone(),
        }));

        let body = ActivitiesResponse {
            activity: activities,
        };
        let json = serde_json::to_vec_pretty(&body).map_err(|source| SourceError::Json {
            path: self.activities_path.clone(),
            source,
        })?;
        tokio::fs::write(&self.activities_path, json)
            .await
            .map_err(|source| SourceError::Io {
                path: self.activities_path.clone(),
                source,
            })?;

        tracing::info!(roll_id = id, path = %self.activities_path.display(), "roll stored");
        Ok(())
    }

    pub async fn fetch_activities(&self) -> Result<Vec<Activity>, SourceError> {
        self.read_activities().await
    }

    /// Missing activity file means no rolls yet.
    async fn read_activities(&self) -> Result<Vec<Activity>, SourceError> {
        match read_json::<ActivitiesResponse>(&self.activities_path).await {
            Ok(body) => Ok(body.activity),
            Err(SourceError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SourceError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| SourceError::Json {
        path: path.to_path_buf(),
        source,
    })
}
