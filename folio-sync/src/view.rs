//! Aggregated portfolio view.

use chrono::Utc;

use folio_store::{Repository, TableClient};
use folio_types::{Certificate, Profile, Project, Skill, WorkExperience};

use crate::error::AggregationError;
use crate::stats::{PortfolioStats, StatFallbacks, compute_stats};

/// Tables whose changes invalidate the aggregated view.
pub const WATCHED_TABLES: [&str; 5] = [
    "profiles",
    "projects",
    "skills",
    "work_experiences",
    "certificates",
];

/// One complete, consistent snapshot of the public collections plus
/// derived statistics. Either every collection is present or the build
/// failed; there is no partial view.
#[derive(Debug, Clone)]
pub struct PortfolioView {
    pub profile: Option<Profile>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub work_experiences: Vec<WorkExperience>,
    pub certificates: Vec<Certificate>,
    pub stats: PortfolioStats,
}

/// Fetches the public collections and derives the view.
pub struct ViewBuilder {
    profiles: Repository<Profile>,
    projects: Repository<Project>,
    skills: Repository<Skill>,
    work_experiences: Repository<WorkExperience>,
    certificates: Repository<Certificate>,
    fallbacks: StatFallbacks,
}

impl ViewBuilder {
    pub fn new(client: TableClient) -> Self {
        Self::with_fallbacks(client, StatFallbacks::default())
    }

    pub fn with_fallbacks(client: TableClient, fallbacks: StatFallbacks) -> Self {
        Self {
            profiles: Repository::new(client.clone()),
            projects: Repository::new(client.clone()),
            skills: Repository::new(client.clone()),
            work_experiences: Repository::new(client.clone()),
            certificates: Repository::new(client),
            fallbacks,
        }
    }

    /// Fetches all five collections concurrently and merges them.
    ///
    /// Fail-fast: the first failing fetch aborts the join and the whole
    /// aggregation errors. Callers never observe a partial snapshot.
    pub async fn build(&self) -> Result<PortfolioView, AggregationError> {
        let (profile, projects, skills, work_experiences, certificates) = tokio::try_join!(
            self.profiles.get_one(),
            self.projects.list(),
            self.skills.list(),
            self.work_experiences.list(),
            self.certificates.list(),
        )?;

        let stats = compute_stats(
            &projects,
            &skills,
            &work_experiences,
            &certificates,
            Utc::now().date_naive(),
            &self.fallbacks,
        );

        Ok(PortfolioView {
            profile,
            projects,
            skills,
            work_experiences,
            certificates,
            stats,
        })
    }
}
