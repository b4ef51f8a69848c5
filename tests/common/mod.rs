//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use rollcall::config::Config;
use rollcall::model::{RollState, Student, StudentsResponse};
use rollcall::ui::app::App;
use rollcall::ui::mvi::Reducer;
use rollcall::ui::roster::{RosterIntent, RosterReducer, RosterState};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn student(id: u64, first_name: &str, last_name: &str) -> Student {
    Student::new(id, first_name, last_name)
}

/// Bob Zed (present, id 1) and Amy Young (absent, id 2).
pub fn bob_and_amy() -> Vec<Student> {
    vec![
        student(1, "Bob", "Zed").with_state(RollState::Present),
        student(2, "Amy", "Young").with_state(RollState::Absent),
    ]
}

pub fn class_of_five() -> Vec<Student> {
    vec![
        student(1, "Olivia", "Brown"),
        student(2, "liam", "Adams"),
        student(3, "Noah", "Clark"),
        student(4, "Emma", "Davis"),
        student(5, "Ava", "Evans"),
    ]
}

/// Apply intents in order starting from an empty store.
pub fn reduce_all(intents: impl IntoIterator<Item = RosterIntent>) -> RosterState {
    intents
        .into_iter()
        .fold(RosterState::default(), RosterReducer::reduce)
}

pub fn loaded(students: Vec<Student>) -> RosterState {
    reduce_all([RosterIntent::Load { students }])
}

pub fn view_ids(state: &RosterState) -> Vec<u64> {
    state.view().iter().map(|s| s.id).collect()
}

/// Create a temporary config file with the given TOML body.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Write a `{ "students": [...] }` file into `dir`.
pub fn students_file(dir: &Path, students: Vec<Student>) -> PathBuf {
    let path = dir.join("students.json");
    let body = serde_json::to_string_pretty(&StudentsResponse { students })
        .expect("Failed to encode students");
    std::fs::write(&path, body).expect("Failed to write students");
    path
}

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> App {
    App::new(&Config::default())
}

pub fn loaded_app(students: Vec<Student>) -> App {
    let mut app = make_app();
    app.on_students_loaded(students);
    app
}
