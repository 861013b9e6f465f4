use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locale::TemplateVars;

pub const MAX_YEARS_OF_EXPERIENCE: u8 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Years of experience must be a whole number, got '{0}'")]
    InvalidExperience(String),

    #[error("Years of experience must be between 0 and {max}, got {0}", max = MAX_YEARS_OF_EXPERIENCE)]
    ExperienceOutOfRange(u32),

    #[error("Unknown qualification '{0}'")]
    UnknownQualification(String),
}

/// Highest completed qualification. `Unset` is the form's placeholder choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualification {
    #[default]
    Unset,
    Diploma,
    Bachelor,
    Master,
    Phd,
}

impl Qualification {
    pub fn label(self) -> &'static str {
        match self {
            Qualification::Unset => "Not specified",
            Qualification::Diploma => "Diploma",
            Qualification::Bachelor => "Bachelor's Degree",
            Qualification::Master => "Master's Degree",
            Qualification::Phd => "PhD",
        }
    }
}

impl fmt::Display for Qualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Qualification {
    type Err = ProfileError;

    /// Accepts both the form labels ("Bachelor's Degree") and short codes ("bachelor").
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized: String = raw
            .to_lowercase()
            .replace("degree", "")
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();

        match normalized.as_str() {
            "" | "select" | "unset" | "none" => Ok(Qualification::Unset),
            "diploma" => Ok(Qualification::Diploma),
            "bachelor" | "bachelors" => Ok(Qualification::Bachelor),
            "master" | "masters" => Ok(Qualification::Master),
            "phd" | "doctorate" => Ok(Qualification::Phd),
            _ => Err(ProfileError::UnknownQualification(raw.to_string())),
        }
    }
}

/// Raw form submission, exactly as typed by the candidate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub position: String,
    pub location: String,
    pub qualification: String,
    pub college_name: String,
    pub tech_stack: String,
}

/// Validated candidate details. Built once per profile submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub years_of_experience: u8,
    /// Free text; several positions may be comma-separated.
    pub desired_position: String,
    pub location: String,
    pub qualification: Qualification,
    pub college_name: String,
    pub tech_stack: Vec<String>,
}

impl CandidateProfile {
    pub fn from_form(form: &ProfileForm) -> Result<Self, ProfileError> {
        Ok(Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            years_of_experience: parse_experience(&form.experience)?,
            desired_position: form.position.trim().to_string(),
            location: form.location.trim().to_string(),
            qualification: form.qualification.parse()?,
            college_name: form.college_name.trim().to_string(),
            tech_stack: parse_tech_stack(&form.tech_stack),
        })
    }

    pub fn template_vars(&self) -> TemplateVars<'_> {
        TemplateVars {
            name: &self.name,
            location: &self.location,
            qualification: self.qualification.label(),
            college_name: &self.college_name,
        }
    }
}

/// Splits comma-separated skills, trimming each and dropping empty entries.
/// Order is preserved.
pub fn parse_tech_stack(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Blank input means zero years, matching the form's default.
fn parse_experience(raw: &str) -> Result<u8, ProfileError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    let years: u32 = raw
        .parse()
        .map_err(|_| ProfileError::InvalidExperience(raw.to_string()))?;
    if years > MAX_YEARS_OF_EXPERIENCE as u32 {
        return Err(ProfileError::ExperienceOutOfRange(years));
    }
    Ok(years as u8)
}
