//! The Course entity. Courses reference their parent bootcamp by id; the
//! relationship is never stored on the bootcamp side and is computed on
//! read via [`CourseFilter::ByBootcamp`].

use crate::model::BootcampId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

const MAX_TITLE_LEN: usize = 100;

/// Type-safe identifier for Courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(pub u32);

impl From<u32> for CourseId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "course_{}", self.0)
    }
}

/// Skill level expected of incoming students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub weeks: u32,
    pub tuition: f64,
    pub minimum_skill: Skill,
    pub scholarship_available: bool,
    /// Back-reference to the owning bootcamp.
    pub bootcamp: BootcampId,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a course. The `bootcamp` reference comes from the
/// route path, not the request body.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseCreate {
    pub title: String,
    pub description: String,
    pub weeks: u32,
    pub tuition: f64,
    pub minimum_skill: Skill,
    #[serde(default)]
    pub scholarship_available: bool,
    #[serde(default)]
    pub bootcamp: Option<BootcampId>,
}

impl CourseCreate {
    pub fn validate(&self) -> Result<(), String> {
        validate_title(&self.title)?;
        validate_description(&self.description)?;
        validate_weeks(self.weeks)?;
        validate_tuition(self.tuition)?;
        if self.bootcamp.is_none() {
            return Err("a course must belong to a bootcamp".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub weeks: Option<u32>,
    #[serde(default)]
    pub tuition: Option<f64>,
    #[serde(default)]
    pub minimum_skill: Option<Skill>,
    #[serde(default)]
    pub scholarship_available: Option<bool>,
}

impl CourseUpdate {
    /// Validates only the fields present in the payload, with the same
    /// checks the create path applies.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        if let Some(weeks) = self.weeks {
            validate_weeks(weeks)?;
        }
        if let Some(tuition) = self.tuition {
            validate_tuition(tuition)?;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("please add a course title".to_string());
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(format!(
            "title cannot be more than {MAX_TITLE_LEN} characters"
        ));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), String> {
    if description.trim().is_empty() {
        return Err("please add a description".to_string());
    }
    Ok(())
}

fn validate_weeks(weeks: u32) -> Result<(), String> {
    if weeks == 0 {
        return Err("course duration must be at least one week".to_string());
    }
    Ok(())
}

fn validate_tuition(tuition: f64) -> Result<(), String> {
    if tuition < 0.0 {
        return Err("tuition must not be negative".to_string());
    }
    Ok(())
}

/// Query filters understood by the course store.
#[derive(Debug, Clone)]
pub enum CourseFilter {
    /// Courses whose `bootcamp` reference equals the given id. Drives both
    /// the reverse relationship view and the cascade delete.
    ByBootcamp(BootcampId),
}
