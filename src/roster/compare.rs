use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::model::Student;

/// Sort key and direction for the home board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortConfig {
    pub ascending: bool,
    pub by_first_name: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            ascending: true,
            by_first_name: true,
        }
    }
}

/// Partial update for [`SortConfig`]; unset fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SortPatch {
    #[serde(alias = "asc")]
    pub ascending: Option<bool>,
    pub by_first_name: Option<bool>,
}

impl SortPatch {
    pub fn ascending(ascending: bool) -> Self {
        Self {
            ascending: Some(ascending),
            ..Self::default()
        }
    }

    pub fn by_first_name(by_first_name: bool) -> Self {
        Self {
            by_first_name: Some(by_first_name),
            ..Self::default()
        }
    }
}

impl SortConfig {
    pub fn apply(self, patch: SortPatch) -> Self {
        Self {
            ascending: patch.ascending.unwrap_or(self.ascending),
            by_first_name: patch.by_first_name.unwrap_or(self.by_first_name),
        }
    }

    fn key<'a>(&self, student: &'a Student) -> &'a str {
        if self.by_first_name {
            &student.first_name
        } else {
            &student.last_name
        }
    }
}

/// Orders two students by the configured name key and direction.
///
/// Identical keys compare `Equal`; callers rely on a stable sort to keep
/// equal-key runs in their original order.
pub fn compare(a: &Student, b: &Student, config: &SortConfig) -> Ordering {
    let ordering = collate(config.key(a), config.key(b));
    if config.ascending {
        ordering
    } else {
        ordering.reverse()
    }
}

/// Sorts in place with a stable sort.
pub fn sort_students(students: &mut [Student], config: &SortConfig) {
    students.sort_by(|a, b| compare(a, b, config));
}

/// Case-insensitive Unicode ordering with exact code-point order as tiebreak,
/// so "adam" and "Adam" sit together but still order deterministically.
fn collate(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| a.cmp(b))
}
