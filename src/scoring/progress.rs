//! Status and severity tallies shown next to the scores.

use crate::core::{Anomaly, AuditCriterion, AuditStatus, Severity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditProgress {
    pub validated: usize,
    pub not_validated: usize,
    pub not_checked: usize,
}

impl AuditProgress {
    pub fn from_criteria<'a, I>(criteria: I) -> Self
    where
        I: IntoIterator<Item = &'a AuditCriterion>,
    {
        criteria
            .into_iter()
            .fold(Self::default(), |mut acc, criterion| {
                match criterion.status {
                    AuditStatus::Validated => acc.validated += 1,
                    AuditStatus::NotValidated => acc.not_validated += 1,
                    AuditStatus::NotChecked => acc.not_checked += 1,
                }
                acc
            })
    }

    pub fn total(&self) -> usize {
        self.validated + self.not_validated + self.not_checked
    }

    /// Criteria that have been looked at, whatever the verdict.
    pub fn completed(&self) -> usize {
        self.validated + self.not_validated
    }

    pub fn pending(&self) -> usize {
        self.not_checked
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl SeverityCounts {
    pub fn from_anomalies<'a, I>(anomalies: I) -> Self
    where
        I: IntoIterator<Item = &'a Anomaly>,
    {
        anomalies
            .into_iter()
            .fold(Self::default(), |mut acc, anomaly| {
                *acc.slot(anomaly.severity) += 1;
                acc
            })
    }

    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
            Severity::Critical => self.critical,
        }
    }

    fn slot(&mut self, severity: Severity) -> &mut usize {
        match severity {
            Severity::Low => &mut self.low,
            Severity::Medium => &mut self.medium,
            Severity::High => &mut self.high,
            Severity::Critical => &mut self.critical,
        }
    }

    pub fn highest(&self) -> Option<Severity> {
        Severity::ALL
            .into_iter()
            .rev()
            .find(|severity| self.get(*severity) > 0)
    }
}
