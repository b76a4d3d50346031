//! Portfolio content: everything the TUI presents.
//!
//! The model is plain serde data so a different person's portfolio can be
//! loaded from a JSON file with `--content`. The built-in content ships
//! compiled in. Validation runs at load time and fails fast on content
//! the animators cannot drive (an empty role list, a percentage past
//! 100).

mod builtin;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Content that cannot be presented.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentError {
    /// The hero typing animation needs at least one role string.
    #[error("profile.roles must not be empty")]
    NoRoles,
    /// A skill bar cannot fill past 100 percent.
    #[error("skill `{name}` has percent {percent}, maximum is 100")]
    PercentOutOfRange {
        /// Name of the offending skill.
        name: String,
        /// The out-of-range value.
        percent: u8,
    },
}

/// A labelled external link (GitHub, LinkedIn, a project demo).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Display label.
    pub label: String,
    /// Target URL.
    pub url: String,
}

/// The hero section: who this is and what the typewriter cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name.
    pub name: String,
    /// Short tagline shown above the typed line.
    pub tagline: String,
    /// Role strings cycled by the typing animation, in order.
    pub roles: Vec<String>,
    /// Social links.
    #[serde(default)]
    pub links: Vec<Link>,
}

/// One education entry in the about section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    /// Institution name.
    pub school: String,
    /// Free-form detail lines (results, ranks, degree, GPA).
    pub lines: Vec<String>,
}

/// The about section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    /// The biography paragraph.
    pub summary: String,
    /// Education entries.
    pub education: Vec<Education>,
}

/// One technical skill with its bar target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name.
    pub name: String,
    /// Bar target percentage, 0–100.
    pub percent: u8,
}

/// The skills section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    /// Technical skills rendered as animated bars.
    pub technical: Vec<Skill>,
    /// Soft skills rendered as a checklist.
    #[serde(default)]
    pub soft: Vec<String>,
    /// Tools rendered as a grid of names.
    #[serde(default)]
    pub tools: Vec<String>,
}

/// One certification entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    /// Course or certificate name.
    pub name: String,
    /// Issuing organization.
    pub issuer: String,
    /// Issue date as displayed.
    pub date: String,
}

/// One work experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Role title.
    pub role: String,
    /// Employer.
    pub company: String,
    /// Display period, e.g. "Apr 2025 - Present".
    pub period: String,
    /// What the role involved.
    pub description: String,
}

/// One project entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Source repository URL.
    pub github: String,
    /// Live demo URL, if any.
    #[serde(default)]
    pub demo: Option<String>,
}

/// One contact channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Channel label (Email, LinkedIn, Phone).
    pub label: String,
    /// Displayed value.
    pub value: String,
    /// Link target for the channel.
    pub link: String,
}

/// The whole portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Hero section.
    pub profile: Profile,
    /// About section.
    pub about: About,
    /// Skills section.
    pub skills: Skills,
    /// Certifications section.
    pub certifications: Vec<Certification>,
    /// Experience section.
    pub experience: Vec<Experience>,
    /// Projects section.
    pub projects: Vec<Project>,
    /// Contact channels.
    pub contact: Vec<ContactInfo>,
}

impl Portfolio {
    /// The compiled-in portfolio content.
    #[must_use]
    pub fn builtin() -> Self {
        builtin::portfolio()
    }

    /// Load and validate a portfolio from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// content fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content from {}", path.display()))?;
        let portfolio: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse content from {}", path.display()))?;
        portfolio
            .validate()
            .with_context(|| format!("Invalid content in {}", path.display()))?;
        Ok(portfolio)
    }

    /// Check the invariants the animators rely on.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContentError`] found.
    pub fn validate(&self) -> std::result::Result<(), ContentError> {
        if self.profile.roles.is_empty() {
            return Err(ContentError::NoRoles);
        }
        for skill in &self.skills.technical {
            if skill.percent > 100 {
                return Err(ContentError::PercentOutOfRange {
                    name: skill.name.clone(),
                    percent: skill.percent,
                });
            }
        }
        Ok(())
    }
}
