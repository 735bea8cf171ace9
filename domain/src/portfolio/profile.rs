//! The built-in portfolio content

use super::entities::{
    Achievement, AiExperience, Education, Experience, Portfolio, Profile, Project, ProjectDetail,
    SkillCategory, SkillProficiency,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

fn detail(heading: &str, items: &[&str]) -> ProjectDetail {
    ProjectDetail {
        heading: heading.to_string(),
        items: strings(items),
    }
}

impl Portfolio {
    /// Prince Jindal's portfolio
    pub fn default_profile() -> Self {
        Self {
            profile: profile(),
            education: education(),
            experience: experience(),
            achievements: achievements(),
            certifications: strings(&[
                "MERN Full-stack Guide by Maximilian Schwarzmüller",
                "AWS Academy Cloud Foundations",
                "Microsoft Azure Fundamentals: Describe Cloud Concepts",
            ]),
            skill_categories: skill_categories(),
            proficiencies: vec![
                SkillProficiency::new("MERN Stack", 85),
                SkillProficiency::new("Python Development", 80),
                SkillProficiency::new("AI/ML", 70),
                SkillProficiency::new("DevOps", 65),
                SkillProficiency::new("Database Management", 75),
                SkillProficiency::new("UI/UX Design", 60),
            ],
            projects: projects(),
            ai_experience: ai_experience(),
            availability: strings(&[
                "Full-time positions in MERN Stack Development",
                "AI/ML Engineering opportunities",
                "DevOps Engineering roles",
                "Freelance projects",
                "Remote work opportunities",
            ]),
        }
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::default_profile()
    }
}

fn profile() -> Profile {
    Profile {
        name: "Prince Jindal".to_string(),
        headline: "MERN/AI Fullstack Developer & DevOps Engineer".to_string(),
        email: "j.prince0410@gmail.com".to_string(),
        phone: "(+91) 8307261678".to_string(),
        location: "Gurgaon, India".to_string(),
        linkedin: "https://linkedin.com/in/princejindal10".to_string(),
        github: "https://github.com/princejindal".to_string(),
        summary: "Passionate full-stack developer with hands-on experience in the MERN stack, RESTful APIs, and AI-powered systems. \
Built real-time grade prediction and recommendation platforms using React, Node.js, Python, and MongoDB. \
Adept in frontend optimization, API integration, and scalable backend design. \
Eager to contribute to dynamic product teams with a startup mindset and strong DevOps practices."
            .to_string(),
    }
}

fn education() -> Vec<Education> {
    vec![
        Education {
            institution: "Manipal University Jaipur".to_string(),
            degree: Some("Bachelor's degree in Information Technology".to_string()),
            coursework: strings(&[
                "Data Structures and Algorithms",
                "Design and Analysis of Algorithms",
                "Database Management Systems",
                "Computer Organization & Architecture",
                "Object-Oriented Programming",
                "Computer Networks",
                "Operating System",
                "Software Development",
            ]),
            period: "September 2022 - Present".to_string(),
            grades: strings(&["CGPA 8.15"]),
        },
        Education {
            institution: "GD Goenka Signature School, Gurgaon".to_string(),
            degree: None,
            coursework: Vec::new(),
            period: "July 2022".to_string(),
            grades: strings(&["Class 12: 85%", "Class 10: 85.2%"]),
        },
    ]
}

fn experience() -> Vec<Experience> {
    vec![Experience {
        role: "Front End Intern".to_string(),
        organization: "Mistify AI Technologies".to_string(),
        period: "June 2024 - August 2024".to_string(),
        mode: "Remote".to_string(),
        highlights: strings(&[
            "Constructed a library of 15+ modular React components (buttons, forms, tables) with a standardized API, enabling developers to build consistent user interfaces 50% faster and improving code reuse rates by 60%.",
            "Integrated RESTful APIs for seamless data retrieval and real-time updates, improving application responsiveness, and reducing data fetch errors by 40%.",
            "Optimized front-end performance by implementing lazy loading and code splitting, reducing page load time by 30% and improving user experience.",
            "Collaborated with the design team to implement UI/UX improvements, resulting in a 15% increase in user engagement and higher customer satisfaction.",
            "Conducted A/B testing for new features and iterated on the basis of user feedback, ensuring a user-centric design approach.",
        ]),
    }]
}

fn achievements() -> Vec<Achievement> {
    [
        (
            "Operations Lead – Google for Startups, Startup Weekend Jaipur (2024)",
            "Spearheaded event logistics for a high-profile startup event, ensuring an engaging experience for 200+ participants and 30+ mentors.",
        ),
        (
            "Production Lead – Under 25 Summit (2023)",
            "Led a team of 50+ crew members to manage event logistics, crew coordination, and on-site production for one of India's largest youth events, attracting 10,000+ attendees, achieving a 90% on-time delivery rate.",
        ),
        (
            "Organizer – Blood Donation Camp (2023)",
            "Organized and coordinated a highly successful blood donation camp in collaboration with medical teams and 50+ volunteers, increasing camp participation by 40% through strategic marketing and community outreach efforts.",
        ),
    ]
    .into_iter()
    .map(|(title, description)| Achievement {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn skill_categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            name: "Programming Languages".to_string(),
            skills: strings(&["Python", "JavaScript", "TypeScript", "C", "C++", "Java", "SQL"]),
            details: pairs(&[
                ("Python", "Used for AI/ML projects, including recommendation systems and grade prediction"),
                ("JavaScript/TypeScript", "Core language for MERN stack development"),
                ("C/C++", "Data structures and algorithm implementation"),
                ("Java", "Object-oriented programming and application development"),
                ("SQL", "Database queries and data manipulation"),
            ]),
        },
        SkillCategory {
            name: "Web Development".to_string(),
            skills: strings(&[
                "React.js",
                "Next.js",
                "TailwindCSS",
                "Node.js",
                "Express.js",
                "Flask",
                "HTML",
                "CSS",
            ]),
            details: pairs(&[
                ("React.js", "Component-based UI development with hooks and context API"),
                ("Next.js", "Server-side rendering and static site generation"),
                ("TailwindCSS", "Utility-first CSS framework for rapid UI development"),
                ("Node.js", "Server-side JavaScript runtime"),
                ("Express.js", "Web application framework for Node.js"),
                ("Flask", "Lightweight Python web framework for API development"),
            ]),
        },
        SkillCategory {
            name: "Databases".to_string(),
            skills: strings(&["MongoDB", "PostgreSQL", "MySQL"]),
            details: pairs(&[
                ("MongoDB", "NoSQL database used in MERN stack applications"),
                ("PostgreSQL", "Relational database for structured data"),
                ("MySQL", "Database management and query optimization"),
            ]),
        },
        SkillCategory {
            name: "AI/ML".to_string(),
            skills: strings(&[
                "Scikit-learn",
                "Pandas",
                "NumPy",
                "Flask APIs",
                "LLM experimentation (OpenAI)",
            ]),
            details: pairs(&[
                ("Scikit-learn", "Machine learning algorithms for predictive modeling"),
                ("Pandas/NumPy", "Data manipulation and numerical computing"),
                ("Flask APIs", "Deployment of machine learning models"),
                ("LLM experimentation", "Theoretical knowledge of large language models"),
            ]),
        },
        SkillCategory {
            name: "DevOps & Cloud".to_string(),
            skills: strings(&["GitHub Actions", "Docker (basic)", "GCP", "AWS"]),
            details: pairs(&[
                ("GitHub Actions", "CI/CD pipeline automation"),
                ("Docker", "Containerization of applications (basic knowledge)"),
                ("GCP/AWS", "Cloud deployment and service utilization"),
            ]),
        },
        SkillCategory {
            name: "Tools".to_string(),
            skills: strings(&["Git", "Power BI", "SAP/Oracle (Basic)", "Figma", "Microsoft Office"]),
            details: pairs(&[
                ("Git", "Version control and collaborative development"),
                ("Power BI", "Data visualization and business intelligence"),
                ("Figma", "UI/UX design and prototyping"),
            ]),
        },
    ]
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Personalised YouTube Recommendation System".to_string(),
            tech_stack: strings(&["Python", "Flask", "JavaScript", "Power BI", "SQL", "HTML", "CSS"]),
            summary: "An intelligent system that provides personalized video recommendations based on user preferences and viewing history.".to_string(),
            highlights: strings(&[
                "Created a scalable recommendation system using Python and YouTube Data API",
                "Integrated Power BI dashboards to visualize user engagement metrics",
                "Implemented OAuth 2.0 authentication for secure access",
                "Applied SQL for data storage and efficient query execution",
                "Developed a Flask API with 95% recommendation accuracy",
            ]),
            details: vec![
                detail(
                    "Technical Implementation",
                    &[
                        "Data Collection: Leveraged YouTube Data API for collecting video metadata and user interaction data",
                        "Database Design: SQL database structure for storing user preferences and video details",
                        "Security: OAuth 2.0 for secure authentication and API access",
                        "API Development: Flask-based RESTful API for serving recommendations to the frontend",
                        "Performance Optimization: Query optimization for faster data retrieval",
                    ],
                ),
                detail(
                    "Challenges & Solutions",
                    &[
                        "Managing API rate limits: implemented caching and batch processing",
                        "Ensuring recommendation relevance: applied content-based filtering algorithms",
                        "Handling large datasets: optimized database queries and implemented pagination",
                    ],
                ),
            ],
            featured: true,
        },
        Project {
            title: "GradePro: AI-Powered University Grade Predictor & Advisor".to_string(),
            tech_stack: strings(&[
                "React",
                "Node.js",
                "Python",
                "Machine Learning",
                "MongoDB",
                "Express.js",
            ]),
            summary: "An intelligent system that helps students predict their grades and provides personalized academic advice.".to_string(),
            highlights: strings(&[
                "Built a scalable, real-time AI analytics system using MongoDB and Express.js",
                "Created interactive dashboards with React to visualize student performance",
                "Engineered a machine learning model in Python for grade prediction",
                "Automated data processing workflows for real-time updates",
                "Developed MongoDB-based data pipelines, improving retrieval speed by 40%",
            ]),
            details: vec![
                detail(
                    "Technical Implementation",
                    &[
                        "Frontend: React-based interactive dashboards with real-time updates",
                        "Backend: Node.js and Express.js for API management",
                        "Database: MongoDB for flexible data storage and retrieval",
                        "ML Pipeline: Python-based machine learning model for grade prediction",
                        "Integration: RESTful API connecting the ML model with the MERN stack",
                    ],
                ),
                detail(
                    "Features",
                    &[
                        "Personalized grade predictions based on historical data",
                        "Course recommendations based on student strengths",
                        "Interactive visualization of academic performance",
                        "Customizable study plans and improvement strategies",
                        "Real-time updates and notifications",
                    ],
                ),
            ],
            featured: true,
        },
        Project {
            title: "Personal Portfolio Website".to_string(),
            tech_stack: strings(&["React", "Next.js", "TailwindCSS"]),
            summary: "A modern, responsive portfolio website to showcase my projects and skills.".to_string(),
            highlights: strings(&[
                "Implemented responsive design using TailwindCSS",
                "Added dark/light mode toggle with theme persistence",
                "Optimized for SEO and performance",
            ]),
            details: Vec::new(),
            featured: false,
        },
        Project {
            title: "Task Management API".to_string(),
            tech_stack: strings(&["Node.js", "Express.js", "MongoDB", "JWT"]),
            summary: "A RESTful API for task management with authentication and authorization.".to_string(),
            highlights: strings(&[
                "Implemented JWT-based authentication",
                "Created CRUD operations for task management",
                "Added role-based access control",
            ]),
            details: Vec::new(),
            featured: false,
        },
    ]
}

fn ai_experience() -> AiExperience {
    AiExperience {
        knowledge: pairs(&[
            ("Libraries & Tools", "Scikit-learn, Pandas, NumPy, Flask APIs"),
            (
                "LLM Theory",
                "Foundational understanding of transformer architecture, prompt engineering, and fine-tuning",
            ),
            (
                "Generative AI",
                "Knowledge of text generation models, diffusion models, and their applications",
            ),
            (
                "Data Processing",
                "Experience with data preparation, cleaning, and feature engineering",
            ),
        ]),
        interests: strings(&[
            "Large Language Models",
            "Multimodal AI Systems",
            "AI for Education",
            "Recommendation Systems",
            "AI Ethics & Safety",
        ]),
        focused_projects: vec![
            Project {
                title: "GradePro: AI-Powered Grade Prediction System".to_string(),
                tech_stack: Vec::new(),
                summary: "Machine learning model that analyzes student performance data to predict future grades and provide personalized improvement recommendations.".to_string(),
                highlights: strings(&[
                    "Developed predictive models using Python and scikit-learn",
                    "Integrated ML pipeline with MERN stack application",
                    "Implemented data processing workflows for continuous model improvement",
                ]),
                details: Vec::new(),
                featured: true,
            },
            Project {
                title: "YouTube Recommendation Engine".to_string(),
                tech_stack: Vec::new(),
                summary: "Content-based filtering algorithm that suggests videos based on user preferences and viewing history.".to_string(),
                highlights: strings(&[
                    "Implemented recommendation algorithms with Python",
                    "Integrated with YouTube Data API for content metadata",
                    "Created visualization dashboards with Power BI",
                ]),
                details: Vec::new(),
                featured: true,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_identity() {
        let portfolio = Portfolio::default_profile();
        assert_eq!(portfolio.profile.name, "Prince Jindal");
        assert_eq!(portfolio.profile.location, "Gurgaon, India");
    }

    #[test]
    fn test_skill_categories_in_tab_order() {
        let portfolio = Portfolio::default_profile();
        let names: Vec<_> = portfolio
            .skill_categories
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Programming Languages",
                "Web Development",
                "Databases",
                "AI/ML",
                "DevOps & Cloud",
                "Tools"
            ]
        );
    }

    #[test]
    fn test_featured_and_other_projects() {
        let portfolio = Portfolio::default_profile();
        assert_eq!(portfolio.featured_projects().count(), 2);
        assert_eq!(portfolio.other_projects().count(), 2);
    }

    #[test]
    fn test_skill_category_lookup_ignores_case() {
        let portfolio = Portfolio::default_profile();
        let dbs = portfolio.skill_category("databases").unwrap();
        assert_eq!(dbs.skills, vec!["MongoDB", "PostgreSQL", "MySQL"]);
    }
}
