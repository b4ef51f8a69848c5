//! Where the roster comes from and where completed rolls go.
//!
//! [`DataSource`] picks between the HTTP API and a local JSON file;
//! [`run_worker`] serves the UI's [`UiCommand`](crate::ui::app::UiCommand)s
//! against it on the tokio runtime.

mod api;
mod error;
mod file;
mod worker;

pub use api::ApiClient;
pub use error::SourceError;
pub use file::FileStore;
pub use worker::run_worker;

use crate::model::{Activity, RollInput, Student};

#[derive(Debug)]
pub enum DataSource {
    Api(ApiClient),
    File(FileStore),
}

impl DataSource {
    pub fn describe(&self) -> String {
        match self {
            DataSource::Api(client) => client.base_url().to_string(),
            DataSource::File(store) => store.students_path().display().to_string(),
        }
    }

    pub async fn fetch_students(&self) -> Result<Vec<Student>, SourceError> {
        match self {
            DataSource::Api(client) => client.fetch_students().await,
            DataSource::File(store) => store.fetch_students().await,
        }
    }

    pub async fn save_roll(&self, input: &RollInput) -> Result<(), SourceError> {
        match self {
            DataSource::Api(client) => client.save_roll(input).await,
            DataSource::File(store) => store.save_roll(input).await,
        }
    }

    pub async fn fetch_activities(&self) -> Result<Vec<Activity>, SourceError> {
        match self {
            DataSource::Api(client) => client.fetch_activities().await,
            DataSource::File(store) => store.fetch_activities().await,
        }
    }
}
