use serde::Serialize;

use crate::model::{RollState, Student};
use crate::roster::filter::StateFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryKind {
    All,
    Present,
    Late,
    Absent,
}

impl SummaryKind {
    /// Fixed display order of the summary buckets.
    pub const ORDER: [SummaryKind; 4] = [
        SummaryKind::All,
        SummaryKind::Present,
        SummaryKind::Late,
        SummaryKind::Absent,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SummaryKind::All => "all",
            SummaryKind::Present => "present",
            SummaryKind::Late => "late",
            SummaryKind::Absent => "absent",
        }
    }

    /// Attendance filter selected by clicking this bucket.
    pub fn filter(&self) -> StateFilter {
        match self {
            SummaryKind::All => StateFilter::All,
            SummaryKind::Present => StateFilter::Only(RollState::Present),
            SummaryKind::Late => StateFilter::Only(RollState::Late),
            SummaryKind::Absent => StateFilter::Only(RollState::Absent),
        }
    }

    fn index(state: RollState) -> Option<usize> {
        match state {
            RollState::Present => Some(1),
            RollState::Late => Some(2),
            RollState::Absent => Some(3),
            RollState::Unmarked => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryBucket {
    #[serde(rename = "type")]
    pub kind: SummaryKind,
    pub count: usize,
}

/// Four buckets, always in `all, present, late, absent` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RollSummary {
    buckets: [SummaryBucket; 4],
}

impl Default for RollSummary {
    fn default() -> Self {
        Self {
            buckets: SummaryKind::ORDER.map(|kind| SummaryBucket { kind, count: 0 }),
        }
    }
}

impl RollSummary {
    /// Single pass over the states; unmarked entries only count towards `all`.
    pub fn from_states<I>(states: I) -> Self
    where
        I: IntoIterator<Item = RollState>,
    {
        let mut summary = Self::default();
        for state in states {
            summary.buckets[0].count += 1;
            if let Some(index) = SummaryKind::index(state) {
                summary.buckets[index].count += 1;
            }
        }
        summary
    }

    pub fn buckets(&self) -> &[SummaryBucket; 4] {
        &self.buckets
    }

    pub fn count(&self, kind: SummaryKind) -> usize {
        self.buckets
            .iter()
            .find(|bucket| bucket.kind == kind)
            .map(|bucket| bucket.count)
            .unwrap_or(0)
    }

    pub fn all(&self) -> usize {
        self.buckets[0].count
    }

    pub fn present(&self) -> usize {
        self.buckets[1].count
    }

    pub fn late(&self) -> usize {
        self.buckets[2].count
    }

    pub fn absent(&self) -> usize {
        self.buckets[3].count
    }

    pub fn marked(&self) -> usize {
        self.present() + self.late() + self.absent()
    }
}

pub fn summarize(students: &[Student]) -> RollSummary {
    RollSummary::from_states(students.iter().map(|student| student.roll_state))
}
