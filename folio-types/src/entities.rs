//! Row and draft types for every content collection.
//!
//! Rows mirror the store's column sets; drafts are the writable shapes
//! the admin console submits. The adapter stamps `user_id` and
//! `updated_at` on write, so drafts never carry them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::coerce::DEFAULT_PROFICIENCY;
use crate::error::{RequiredFields, ValidationError};
use crate::record::{Draft, TableRecord};

fn default_proficiency() -> i32 {
    DEFAULT_PROFICIENCY
}

// ── Profile ──────────────────────────────────────────────────────

/// The visitor-facing "about" record. At most one row is meaningful;
/// the adapter picks the lowest `display_order` (earliest created on
/// ties) when more than one exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TableRecord for Profile {
    const TABLE: &'static str = "profiles";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

impl Draft for ProfileDraft {
    type Record = Profile;

    // Every profile field is optional; partial profiles save fine.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

// ── Project ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub title: String,
    pub description: String,
    /// Ordered list; forms enter it comma-separated (`coerce::split_list`).
    #[serde(default)]
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TableRecord for Project {
    const TABLE: &'static str = "projects";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub display_order: i32,
}

impl Draft for ProjectDraft {
    type Record = Project;

    fn validate(&self) -> Result<(), ValidationError> {
        let mut req = RequiredFields::new();
        req.text("title", &self.title);
        req.text("description", &self.description);
        req.finish()
    }
}

// ── Skill ────────────────────────────────────────────────────────

/// Grouping by `category` is a read-time projection; the store keeps a
/// flat list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub category: String,
    #[serde(default = "default_proficiency")]
    pub proficiency_level: i32,
    #[serde(default)]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TableRecord for Skill {
    const TABLE: &'static str = "skills";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDraft {
    pub name: String,
    pub category: String,
    #[serde(default = "default_proficiency")]
    pub proficiency_level: i32,
    #[serde(default)]
    pub display_order: i32,
}

impl Default for SkillDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            proficiency_level: DEFAULT_PROFICIENCY,
            display_order: 0,
        }
    }
}

impl Draft for SkillDraft {
    type Record = Skill;

    fn validate(&self) -> Result<(), ValidationError> {
        let mut req = RequiredFields::new();
        req.text("name", &self.name);
        req.text("category", &self.category);
        req.finish()
    }
}

// ── WorkExperience ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperience {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub company: String,
    pub title: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkExperience {
    /// End of the interval for duration math. A `current` position runs
    /// to `today` no matter what `end_date` holds; a stored end date is
    /// only honored once the position is no longer current.
    pub fn effective_end(&self, today: NaiveDate) -> NaiveDate {
        if self.current {
            today
        } else {
            self.end_date.unwrap_or(today)
        }
    }
}

impl TableRecord for WorkExperience {
    const TABLE: &'static str = "work_experiences";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkExperienceDraft {
    pub company: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub display_order: i32,
}

impl Draft for WorkExperienceDraft {
    type Record = WorkExperience;

    fn validate(&self) -> Result<(), ValidationError> {
        let mut req = RequiredFields::new();
        req.text("company", &self.company);
        req.text("title", &self.title);
        req.present("start_date", self.start_date.as_ref());
        req.finish()
    }
}

// ── Education ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub grade: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Education {
    /// Same `current` rule as [`WorkExperience::effective_end`].
    pub fn effective_end(&self, today: NaiveDate) -> NaiveDate {
        if self.current {
            today
        } else {
            self.end_date.unwrap_or(today)
        }
    }
}

impl TableRecord for Education {
    const TABLE: &'static str = "education";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationDraft {
    pub institution: String,
    pub degree: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub display_order: i32,
}

impl Draft for EducationDraft {
    type Record = Education;

    fn validate(&self) -> Result<(), ValidationError> {
        let mut req = RequiredFields::new();
        req.text("institution", &self.institution);
        req.text("degree", &self.degree);
        req.finish()
    }
}

// ── Certificate ──────────────────────────────────────────────────

/// `expiry_date` is informational only; expired certificates stay
/// visible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub title: String,
    pub issuer: String,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TableRecord for Certificate {
    const TABLE: &'static str = "certificates";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificateDraft {
    pub title: String,
    pub issuer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

impl Draft for CertificateDraft {
    type Record = Certificate;

    fn validate(&self) -> Result<(), ValidationError> {
        let mut req = RequiredFields::new();
        req.text("title", &self.title);
        req.text("issuer", &self.issuer);
        req.finish()
    }
}

// ── Reference ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub title: String,
    pub company: String,
    pub relationship: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub recommendation: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TableRecord for Reference {
    const TABLE: &'static str = "references";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceDraft {
    pub name: String,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

impl Draft for ReferenceDraft {
    type Record = Reference;

    fn validate(&self) -> Result<(), ValidationError> {
        let mut req = RequiredFields::new();
        req.text("name", &self.name);
        req.text("title", &self.title);
        req.text("company", &self.company);
        req.finish()
    }
}

// ── ContactMessage ───────────────────────────────────────────────

/// Visitor-submitted message. Write-only from the public side; the
/// owner may read it, flip `read`, and delete it. Nothing else is
/// mutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl TableRecord for ContactMessage {
    const TABLE: &'static str = "contact_messages";
    const ORDER_BY: &'static str = "created_at.desc";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

impl Draft for ContactDraft {
    type Record = ContactMessage;

    fn validate(&self) -> Result<(), ValidationError> {
        let mut req = RequiredFields::new();
        req.text("name", &self.name);
        req.text("email", &self.email);
        req.text("message", &self.message);
        req.finish()
    }
}
