//! Portfolio content configuration.
//!
//! Text and figures shown on the dashboard live in `content/portfolio.json`,
//! embedded at build time. Numeric fields accept numbers or numeric strings;
//! anything else reads as 0.
//!
//! ERROR HANDLING
//! ==============
//! A malformed document is reported as [`ContentError`]; [`load`] logs it and
//! falls back to [`PortfolioContent::default`] so the page still renders.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde::Deserialize;

use crate::util::number::deserialize_counter;

const EMBEDDED: &str = include_str!("../content/portfolio.json");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("portfolio content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("portfolio content has no owner name")]
    MissingOwner,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioContent {
    pub owner: OwnerContent,
    pub stats: Vec<StatContent>,
    pub analytics: AnalyticsContent,
    pub activities: Vec<ActivityContent>,
    pub projects: Vec<ProjectContent>,
    pub skills: Vec<SkillContent>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OwnerContent {
    pub name: String,
    pub role: String,
    pub location: String,
    pub email: String,
    pub bio: String,
}

impl OwnerContent {
    /// Up to two uppercase initials for the avatar badge.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Hero stat card: label plus the value its counter animates to.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatContent {
    pub label: String,
    #[serde(deserialize_with = "deserialize_counter")]
    pub target: u64,
    pub suffix: String,
}

/// Starting values of the four analytics tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalyticsContent {
    #[serde(deserialize_with = "deserialize_counter")]
    pub visitors: u64,
    #[serde(deserialize_with = "deserialize_counter")]
    pub projects_viewed: u64,
    #[serde(deserialize_with = "deserialize_counter")]
    pub resume_downloads: u64,
    #[serde(deserialize_with = "deserialize_counter")]
    pub skills_views: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ActivityContent {
    pub icon: String,
    pub title: String,
    pub time: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectContent {
    pub name: String,
    pub summary: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkillContent {
    pub name: String,
    /// Proficiency in percent, clamped to 100 when rendered.
    #[serde(deserialize_with = "deserialize_counter")]
    pub level: u64,
}

impl PortfolioContent {
    /// Parse a content document.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Parse`] for malformed JSON and
    /// [`ContentError::MissingOwner`] when the owner name is blank.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        if content.owner.name.trim().is_empty() {
            return Err(ContentError::MissingOwner);
        }
        Ok(content)
    }
}

/// Load the embedded content, falling back to defaults on error.
#[must_use]
pub fn load() -> PortfolioContent {
    match PortfolioContent::from_json(EMBEDDED) {
        Ok(content) => content,
        Err(err) => {
            leptos::logging::warn!("{err}; rendering with empty content");
            PortfolioContent::default()
        }
    }
}
