//! Compliance summaries: per-day work/rest totals and violations.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Externally configured work/rest limits for one ship day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thresholds {
    pub max_work_minutes: u32,
    pub min_rest_minutes: u32,
}

impl Default for Thresholds {
    /// 14 hours of work, 10 hours of rest.
    fn default() -> Self {
        Self {
            max_work_minutes: 14 * 60,
            min_rest_minutes: 10 * 60,
        }
    }
}

/// A breached limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Violation {
    /// More work than `max_work_minutes`.
    ExcessiveWork,

    /// Less rest than `min_rest_minutes`.
    InsufficientRest,
}

/// Work and rest for one ship day.
///
/// `total_work_minutes + total_rest_minutes == day_length_minutes` always.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceSummary {
    pub total_work_minutes: u32,
    pub total_rest_minutes: u32,
    pub day_length_minutes: u32,
    pub violations: BTreeSet<Violation>,
}

impl ComplianceSummary {
    pub fn is_compliant(&self) -> bool {
        self.violations.is_empty()
    }
}
