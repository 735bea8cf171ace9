//! Portfolio content entities
//!
//! Plain data; rendering lives in the presentation layer.

use serde::{Deserialize, Serialize};

/// Identity and contact details shown in the hero banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: Option<String>,
    pub coursework: Vec<String>,
    pub period: String,
    /// Grade lines, e.g. "CGPA 8.15"
    pub grades: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub mode: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

/// A tab of related skills with optional per-skill notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
    /// (skill, note) pairs in display order
    pub details: Vec<(String, String)>,
}

/// Self-assessed proficiency, 0..=100
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSkillProficiency")]
pub struct SkillProficiency {
    pub name: String,
    level: u8,
}

/// Unvalidated form; deserialization goes through [`SkillProficiency::new`]
#[derive(Deserialize)]
struct RawSkillProficiency {
    name: String,
    level: u8,
}

impl From<RawSkillProficiency> for SkillProficiency {
    fn from(raw: RawSkillProficiency) -> Self {
        Self::new(raw.name, raw.level)
    }
}

impl SkillProficiency {
    /// Levels above 100 are clamped
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level: level.min(100),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Level as a 0.0..=1.0 fraction
    pub fn ratio(&self) -> f64 {
        f64::from(self.level) / 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub heading: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub tech_stack: Vec<String>,
    pub summary: String,
    pub highlights: Vec<String>,
    pub details: Vec<ProjectDetail>,
    /// Featured projects are shown expanded; the rest under "More Projects"
    pub featured: bool,
}

/// AI/ML background shown above the Q&A panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiExperience {
    /// (topic, description) pairs
    pub knowledge: Vec<(String, String)>,
    pub interests: Vec<String>,
    pub focused_projects: Vec<Project>,
}

/// The whole portfolio, built once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub achievements: Vec<Achievement>,
    pub certifications: Vec<String>,
    pub skill_categories: Vec<SkillCategory>,
    pub proficiencies: Vec<SkillProficiency>,
    pub projects: Vec<Project>,
    pub ai_experience: AiExperience,
    pub availability: Vec<String>,
}

impl Portfolio {
    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    pub fn other_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| !p.featured)
    }

    pub fn skill_category(&self, name: &str) -> Option<&SkillCategory> {
        self.skill_categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}
