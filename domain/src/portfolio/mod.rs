//! Portfolio content model and the built-in profile.

pub mod entities;
mod profile;
pub mod section;

pub use entities::{
    Achievement, AiExperience, Education, Experience, Portfolio, Profile, Project, ProjectDetail,
    SkillCategory, SkillProficiency,
};
pub use section::Section;
