//! JSON output formatter

use super::formatter::PortfolioFormatter;
use folio_domain::{ContactMessage, Interaction, Portfolio, PresetQuestions, Section};
use serde_json::{Value, json};

/// Formats portfolio content as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn section_value(portfolio: &Portfolio, section: Section, presets: &PresetQuestions) -> Value {
        let body = match section {
            Section::Home => json!({
                "profile": portfolio.profile,
                "education": portfolio.education,
                "experience": portfolio.experience,
                "achievements": portfolio.achievements,
                "certifications": portfolio.certifications,
            }),
            Section::Skills => json!({
                "categories": portfolio.skill_categories,
                "proficiency": portfolio.proficiencies,
            }),
            Section::Projects => json!({
                "featured": portfolio.featured_projects().collect::<Vec<_>>(),
                "more": portfolio.other_projects().collect::<Vec<_>>(),
            }),
            Section::AiExperience => json!({
                "knowledge": portfolio.ai_experience.knowledge,
                "interests": portfolio.ai_experience.interests,
                "projects": portfolio.ai_experience.focused_projects,
                "preset_questions": presets,
            }),
            Section::Contact => json!({
                "email": portfolio.profile.email,
                "phone": portfolio.profile.phone,
                "location": portfolio.profile.location,
                "linkedin": portfolio.profile.linkedin,
                "availability": portfolio.availability,
            }),
        };
        json!({ "section": section, "title": section.title(), "content": body })
    }

    fn pretty(value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl PortfolioFormatter for JsonFormatter {
    fn format_section(
        &self,
        portfolio: &Portfolio,
        section: Section,
        presets: &PresetQuestions,
    ) -> String {
        Self::pretty(&Self::section_value(portfolio, section, presets))
    }

    fn format_interaction(&self, interaction: &Interaction) -> String {
        Self::pretty(&json!({
            "question": interaction.question.content(),
            "answer": interaction.answer_text(),
            "rule": interaction.matched_rule(),
        }))
    }

    fn format_presets(&self, presets: &PresetQuestions) -> String {
        let items: Vec<Value> = presets
            .iter()
            .enumerate()
            .map(|(i, q)| json!({ "number": i + 1, "question": q }))
            .collect();
        Self::pretty(&Value::Array(items))
    }

    fn format_message_sent(&self, message: &ContactMessage) -> String {
        Self::pretty(&json!({ "status": "queued", "message": message }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::{Question, RuleSet};

    #[test]
    fn test_section_json_shape() {
        let portfolio = Portfolio::default_profile();
        let presets = PresetQuestions::standard();
        let out = JsonFormatter.format_section(&portfolio, Section::Skills, &presets);
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["section"], "skills");
        assert_eq!(value["content"]["categories"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_ai_section_includes_presets() {
        let portfolio = Portfolio::default_profile();
        let presets = PresetQuestions::standard();
        let out = JsonFormatter.format_section(&portfolio, Section::AiExperience, &presets);
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["section"], "ai-experience");
        assert_eq!(value["content"]["preset_questions"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_interaction_json() {
        let question = Question::try_new("What's your favorite color?").unwrap();
        let answer = RuleSet::standard().respond(&question);
        let out = JsonFormatter.format_interaction(&Interaction::new(question, answer));
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["question"], "What's your favorite color?");
        assert!(value["rule"].is_null());
    }

    #[test]
    fn test_presets_are_numbered_from_one() {
        let out = JsonFormatter.format_presets(&PresetQuestions::standard());
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["number"], 1);
        assert_eq!(value[4]["number"], 5);
    }
}
