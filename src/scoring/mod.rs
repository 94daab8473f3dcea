//! Audit score engine.
//!
//! Scores are completion percentages: the share of criteria whose status is
//! `validated`. They are always derived from the criteria passed in and never
//! stored, so a status change is reflected on the next read.

pub mod progress;

pub use progress::{AuditProgress, SeverityCounts};

use crate::core::{AuditCriterion, CriterionGroup};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole-number percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0);

    /// Clamps values above 100.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// `round(100 * part / whole)` with halves rounded up. A zero `whole`
    /// yields 0.
    pub fn of(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let part = part.min(whole) as u64;
        let whole = whole as u64;
        let rounded = (200 * part + whole) / (2 * whole);
        Self(rounded as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::classify(*self)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}

/// Traffic-light classification used when rendering a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn classify(score: Percentage) -> Self {
        match score.value() {
            80.. => Self::Good,
            60..=79 => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Hex color matching the dashboard palette.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Good => "#22c55e",
            Self::Fair => "#f59e0b",
            Self::Poor => "#ef4444",
        }
    }
}

/// Completion score for one group, restricted to criteria tagged with `group`.
pub fn group_score<'a, I>(criteria: I, group: CriterionGroup) -> Percentage
where
    I: IntoIterator<Item = &'a AuditCriterion>,
{
    let (validated, total) = count_validated(criteria.into_iter().filter(|c| c.group == group));
    Percentage::of(validated, total)
}

/// Completion score over every criterion.
///
/// This is not an average of group scores: a group with more criteria weighs
/// proportionally more.
pub fn global_score<'a, I>(criteria: I) -> Percentage
where
    I: IntoIterator<Item = &'a AuditCriterion>,
{
    let (validated, total) = count_validated(criteria);
    Percentage::of(validated, total)
}

fn count_validated<'a, I>(criteria: I) -> (usize, usize)
where
    I: IntoIterator<Item = &'a AuditCriterion>,
{
    criteria
        .into_iter()
        .fold((0, 0), |(validated, total), criterion| {
            (validated + usize::from(criterion.is_validated()), total + 1)
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupScore {
    pub group: CriterionGroup,
    pub validated: usize,
    pub total: usize,
    pub score: Percentage,
}

/// One row per group in canonical order, whatever order the criteria are in.
pub fn group_breakdown<'a, I>(criteria: I) -> Vec<GroupScore>
where
    I: IntoIterator<Item = &'a AuditCriterion>,
{
    let criteria: Vec<&AuditCriterion> = criteria.into_iter().collect();
    CriterionGroup::ALL
        .into_iter()
        .map(|group| {
            let (validated, total) =
                count_validated(criteria.iter().copied().filter(|c| c.group == group));
            GroupScore {
                group,
                validated,
                total,
                score: Percentage::of(validated, total),
            }
        })
        .collect()
}
