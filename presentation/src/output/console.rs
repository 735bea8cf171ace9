//! Console output formatter for portfolio sections

use super::formatter::PortfolioFormatter;
use colored::Colorize;
use folio_domain::portfolio::{Project, SkillProficiency};
use folio_domain::{ContactMessage, Interaction, Portfolio, PresetQuestions, Section};

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 30;

/// Formats portfolio content for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn format_home(portfolio: &Portfolio) -> String {
        let profile = &portfolio.profile;
        let mut output = String::new();

        output.push_str(&Self::banner(&profile.name, &profile.headline));
        output.push_str(&format!(
            "{}\n",
            format!("{} | {} | {}", profile.email, profile.phone, profile.location).dimmed()
        ));

        output.push_str(&Self::section_header("About Me"));
        output.push_str(&Self::wrap(&profile.summary, WIDTH));
        output.push('\n');

        output.push_str(&Self::section_header("Education"));
        for edu in &portfolio.education {
            output.push_str(&format!(
                "\n{}  {}\n",
                edu.institution.bold(),
                edu.period.dimmed()
            ));
            if let Some(degree) = &edu.degree {
                output.push_str(&format!("{}\n", degree));
            }
            if !edu.coursework.is_empty() {
                output.push_str(&format!(
                    "{} {}\n",
                    "Relevant Coursework:".italic(),
                    edu.coursework.join(", ")
                ));
            }
            for grade in &edu.grades {
                output.push_str(&format!("  {}\n", grade));
            }
        }

        output.push_str(&Self::section_header("Experience"));
        for exp in &portfolio.experience {
            output.push_str(&format!(
                "\n{} | {}\n{}\n",
                exp.role.bold(),
                exp.organization,
                format!("{} | {}", exp.period, exp.mode).italic()
            ));
            output.push_str(&Self::bullets(&exp.highlights));
        }

        output.push_str(&Self::section_header("Achievements & Extra-Curricular"));
        for achievement in &portfolio.achievements {
            output.push_str(&format!(
                "\n{}\n{}\n",
                achievement.title.bold(),
                Self::wrap(&achievement.description, WIDTH)
            ));
        }

        output.push_str(&Self::section_header("Certifications"));
        output.push_str(&Self::bullets(&portfolio.certifications));

        output
    }

    fn format_skills(portfolio: &Portfolio) -> String {
        let mut output = Self::header(Section::Skills.title());

        for category in &portfolio.skill_categories {
            output.push_str(&Self::section_header(&category.name));
            let badges: Vec<String> = category
                .skills
                .iter()
                .map(|s| format!("[{}]", s).cyan().to_string())
                .collect();
            output.push_str(&format!("{}\n", badges.join(" ")));

            if !category.details.is_empty() {
                output.push_str(&format!("\n{}\n", "Skill Details".dimmed()));
                for (skill, note) in &category.details {
                    output.push_str(&format!("  * {}: {}\n", skill.bold(), note));
                }
            }
        }

        output.push_str(&Self::section_header("Skill Proficiency"));
        let label_width = portfolio
            .proficiencies
            .iter()
            .map(|p| p.name.chars().count())
            .max()
            .unwrap_or(0);
        for proficiency in &portfolio.proficiencies {
            output.push_str(&Self::proficiency_line(proficiency, label_width));
        }

        output
    }

    fn format_projects(portfolio: &Portfolio) -> String {
        let mut output = Self::header(Section::Projects.title());

        for project in portfolio.featured_projects() {
            output.push_str(&Self::project(project, true));
        }

        let others: Vec<_> = portfolio.other_projects().collect();
        if !others.is_empty() {
            output.push_str(&Self::section_header("More Projects"));
            for project in others {
                output.push_str(&Self::project(project, false));
            }
        }

        output
    }

    fn format_ai_experience(portfolio: &Portfolio, presets: &PresetQuestions) -> String {
        let ai = &portfolio.ai_experience;
        let mut output = Self::header(Section::AiExperience.title());

        output.push_str(&Self::section_header("AI/ML Skills & Knowledge"));
        for (topic, description) in &ai.knowledge {
            output.push_str(&format!("  * {} {}\n", format!("{}:", topic).bold(), description));
        }

        output.push_str(&Self::section_header("Areas of Interest"));
        output.push_str(&Self::bullets(&ai.interests));

        output.push_str(&Self::section_header("AI-Focused Projects"));
        for project in &ai.focused_projects {
            output.push_str(&Self::project(project, false));
        }

        output.push_str(&Self::section_header("Ask About My AI Experience"));
        output.push_str("Pick a preset with --preset N, or type your own question.\n\n");
        output.push_str(&Self::numbered_presets(presets));

        output
    }

    fn format_contact(portfolio: &Portfolio) -> String {
        let profile = &portfolio.profile;
        let mut output = Self::header(Section::Contact.title());

        output.push_str(&Self::section_header("Contact Information"));
        for (label, value) in [
            ("Email:", &profile.email),
            ("Phone:", &profile.phone),
            ("Location:", &profile.location),
            ("LinkedIn:", &profile.linkedin),
            ("GitHub:", &profile.github),
        ] {
            output.push_str(&format!("{:<10} {}\n", label.bold(), value));
        }

        output.push_str(&Self::section_header("Availability"));
        output.push_str("I'm currently open to:\n");
        output.push_str(&Self::bullets(&portfolio.availability));

        output.push_str(&Self::section_header("Send Me a Message"));
        output.push_str(&format!(
            "{}\n",
            "folio --send-message --name <NAME> --email <EMAIL> --message <TEXT>".dimmed()
        ));

        output
    }

    fn project(project: &Project, with_details: bool) -> String {
        let mut output = format!("\n{}\n", format!("── {} ──", project.title).yellow().bold());
        if !project.tech_stack.is_empty() {
            output.push_str(&format!("{}\n", project.tech_stack.join(", ").italic()));
        }
        output.push_str(&Self::wrap(&project.summary, WIDTH));
        output.push('\n');
        output.push_str(&Self::bullets(&project.highlights));

        if with_details {
            for detail in &project.details {
                output.push_str(&format!("\n  {}\n", detail.heading.cyan()));
                for item in &detail.items {
                    output.push_str(&format!("    - {}\n", item));
                }
            }
        }
        output
    }

    fn numbered_presets(presets: &PresetQuestions) -> String {
        presets
            .iter()
            .enumerate()
            .map(|(i, q)| format!("  {}. {}\n", i + 1, q))
            .collect()
    }

    /// Text progress bar, e.g. `[#####-----]  50%`
    pub fn bar(ratio: f64, width: usize) -> String {
        let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
        format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
    }

    fn proficiency_line(proficiency: &SkillProficiency, label_width: usize) -> String {
        format!(
            "{:<width$}  {} {:>3}%\n",
            proficiency.name,
            Self::bar(proficiency.ratio(), BAR_WIDTH).green(),
            proficiency.level(),
            width = label_width
        )
    }

    fn banner(name: &str, headline: &str) -> String {
        let line = "=".repeat(WIDTH);
        format!(
            "{}\n{:^WIDTH$}\n{:^WIDTH$}\n{}\n",
            line.cyan(),
            name.bold(),
            headline,
            line.cyan()
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(WIDTH);
        format!("{}\n{:^WIDTH$}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn bullets(items: &[String]) -> String {
        items.iter().map(|item| format!("  * {}\n", item)).collect()
    }

    /// Greedy word wrap at `width` columns
    pub fn wrap(text: &str, width: usize) -> String {
        let mut lines = Vec::new();
        let mut current = String::new();
        for word in text.split_whitespace() {
            if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines.join("\n")
    }
}

impl PortfolioFormatter for ConsoleFormatter {
    fn format_section(
        &self,
        portfolio: &Portfolio,
        section: Section,
        presets: &PresetQuestions,
    ) -> String {
        match section {
            Section::Home => Self::format_home(portfolio),
            Section::Skills => Self::format_skills(portfolio),
            Section::Projects => Self::format_projects(portfolio),
            Section::AiExperience => Self::format_ai_experience(portfolio, presets),
            Section::Contact => Self::format_contact(portfolio),
        }
    }

    fn format_interaction(&self, interaction: &Interaction) -> String {
        format!(
            "{} {}\n\n{}\n",
            "Q:".bold(),
            interaction.question.content(),
            interaction.answer_text()
        )
    }

    fn format_presets(&self, presets: &PresetQuestions) -> String {
        format!(
            "{}\n{}",
            "Preset questions:".cyan().bold(),
            Self::numbered_presets(presets)
        )
    }

    fn format_message_sent(&self, message: &ContactMessage) -> String {
        format!(
            "{} Thanks {}, your message has been sent. I'll reply to {} soon.",
            "v".green(),
            message.name(),
            message.email()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::responder::answers;
    use folio_domain::{Question, RuleSet};

    fn render(section: Section) -> String {
        colored::control::set_override(false);
        ConsoleFormatter.format_section(
            &Portfolio::default_profile(),
            section,
            &PresetQuestions::standard(),
        )
    }

    #[test]
    fn test_home_has_hero_and_education() {
        let out = render(Section::Home);
        assert!(out.contains("Prince Jindal"));
        assert!(out.contains("MERN/AI Fullstack Developer & DevOps Engineer"));
        assert!(out.contains("Manipal University Jaipur"));
        assert!(out.contains("CGPA 8.15"));
        assert!(out.contains("Front End Intern"));
    }

    #[test]
    fn test_skills_has_badges_and_bars() {
        let out = render(Section::Skills);
        assert!(out.contains("[PostgreSQL]"));
        assert!(out.contains("Skill Proficiency"));
        assert!(out.contains(" 85%"));
    }

    #[test]
    fn test_projects_lists_more_projects() {
        let out = render(Section::Projects);
        assert!(out.contains("GradePro"));
        assert!(out.contains("More Projects"));
        assert!(out.contains("Task Management API"));
        assert!(out.contains("Challenges & Solutions"));
    }

    #[test]
    fn test_ai_section_numbers_presets() {
        let out = render(Section::AiExperience);
        assert!(out.contains("1. What do you know about transformer architecture?"));
        assert!(out.contains("5. What interests you about generative AI?"));
    }

    #[test]
    fn test_contact_lists_availability() {
        let out = render(Section::Contact);
        assert!(out.contains("j.prince0410@gmail.com"));
        assert!(out.contains("Freelance projects"));
    }

    #[test]
    fn test_interaction_shows_question_and_answer() {
        colored::control::set_override(false);
        let question = Question::try_new("Favorite color?").unwrap();
        let answer = RuleSet::standard().respond(&question);
        let out = ConsoleFormatter.format_interaction(&Interaction::new(question, answer));
        assert!(out.starts_with("Q: Favorite color?"));
        assert_eq!(out, format!("Q: Favorite color?\n\n{}\n", answers::FALLBACK));
    }

    #[test]
    fn test_bar() {
        assert_eq!(ConsoleFormatter::bar(0.5, 10), "[#####-----]");
        assert_eq!(ConsoleFormatter::bar(1.5, 4), "[####]");
        assert_eq!(ConsoleFormatter::bar(0.0, 3), "[---]");
    }

    #[test]
    fn test_wrap() {
        assert_eq!(ConsoleFormatter::wrap("aa bb cc", 5), "aa bb\ncc");
        assert_eq!(ConsoleFormatter::wrap("  single  ", 80), "single");
    }
}
