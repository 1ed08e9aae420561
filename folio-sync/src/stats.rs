//! Derived portfolio statistics.
//!
//! Empty collections fall back to fixed non-zero defaults so the site
//! never renders an empty-looking portfolio before the owner has added
//! content. The constants are presentation-motivated, not derived from
//! any rule, and are configurable through [`StatFallbacks`].

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use folio_types::{Certificate, Project, Skill, WorkExperience};

/// Fallback values used when a collection is empty.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatFallbacks {
    pub years_experience: u32,
    pub projects: usize,
    pub skills: usize,
    pub certificates: usize,
    pub technologies: usize,
}

impl Default for StatFallbacks {
    fn default() -> Self {
        Self {
            years_experience: 2,
            projects: 8,
            skills: 12,
            certificates: 3,
            technologies: 6,
        }
    }
}

/// Statistics derived from one aggregated snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioStats {
    pub years_experience: u32,
    pub projects_count: usize,
    pub skills_count: usize,
    pub certificates_count: usize,
    /// Count of distinct skill categories.
    pub technologies_count: usize,
}

/// Computes the derived statistics for a snapshot as of `today`.
pub fn compute_stats(
    projects: &[Project],
    skills: &[Skill],
    work_experiences: &[WorkExperience],
    certificates: &[Certificate],
    today: NaiveDate,
    fallbacks: &StatFallbacks,
) -> PortfolioStats {
    let categories: BTreeSet<&str> = skills.iter().map(|s| s.category.as_str()).collect();

    PortfolioStats {
        years_experience: years_experience(work_experiences, today, fallbacks.years_experience),
        projects_count: non_zero(projects.len(), fallbacks.projects),
        skills_count: non_zero(skills.len(), fallbacks.skills),
        certificates_count: non_zero(certificates.len(), fallbacks.certificates),
        technologies_count: non_zero(categories.len(), fallbacks.technologies),
    }
}

/// Whole years across all experience intervals, minimum 1.
///
/// Each row contributes the calendar-month difference between its start
/// and effective end, floored at zero so malformed or future-dated rows
/// cannot drag the total down. `current` rows run to `today`.
fn years_experience(work: &[WorkExperience], today: NaiveDate, fallback: u32) -> u32 {
    if work.is_empty() {
        return fallback;
    }

    let total_months: i32 = work
        .iter()
        .map(|exp| {
            let end = exp.effective_end(today);
            let months = (end.year() - exp.start_date.year()) * 12
                + (end.month() as i32 - exp.start_date.month() as i32);
            months.max(0)
        })
        .sum();

    ((total_months / 12) as u32).max(1)
}

fn non_zero(count: usize, fallback: usize) -> usize {
    if count == 0 { fallback } else { count }
}
