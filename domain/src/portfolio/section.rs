//! Navigable portfolio sections

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A top-level page of the portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Home,
    Skills,
    Projects,
    AiExperience,
    Contact,
}

impl Section {
    /// All sections in navigation order
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::Skills,
            Section::Projects,
            Section::AiExperience,
            Section::Contact,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Skills => "Technical Skills",
            Section::Projects => "Projects",
            Section::AiExperience => "AI Experience & Interests",
            Section::Contact => "Get In Touch",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::AiExperience => "ai-experience",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Section {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "home" | "about" => Ok(Section::Home),
            "skills" => Ok(Section::Skills),
            "projects" => Ok(Section::Projects),
            "ai" | "ai-experience" => Ok(Section::AiExperience),
            "contact" => Ok(Section::Contact),
            _ => Err(DomainError::UnknownSection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_order() {
        assert_eq!(Section::all().first(), Some(&Section::Home));
        assert_eq!(Section::all().last(), Some(&Section::Contact));
        assert_eq!(Section::all().len(), 5);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("AI".parse::<Section>(), Ok(Section::AiExperience));
        assert_eq!("ai_experience".parse::<Section>(), Ok(Section::AiExperience));
        assert_eq!(" Skills ".parse::<Section>(), Ok(Section::Skills));
        assert_eq!(
            "blog".parse::<Section>(),
            Err(DomainError::UnknownSection("blog".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for section in Section::all() {
            assert_eq!(section.to_string().parse::<Section>().unwrap(), *section);
        }
    }
}
