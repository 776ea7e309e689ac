//! Canned response rules for the portfolio assistant.

use serde::Serialize;

/// Topic a visitor message was classified under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Services,
    Projects,
    Skills,
    Contact,
    Experience,
    Greeting,
    Default,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Services => "services",
            Intent::Projects => "projects",
            Intent::Skills => "skills",
            Intent::Contact => "contact",
            Intent::Experience => "experience",
            Intent::Greeting => "greeting",
            Intent::Default => "default",
        }
    }
}

/// One keyword-triggered canned answer.
#[derive(Debug, Clone)]
pub struct ResponseRule {
    pub intent: Intent,
    /// Lower-case substrings; any one of them triggers the rule.
    pub keywords: Vec<String>,
    pub response: String,
}

impl ResponseRule {
    pub fn new(intent: Intent, keywords: &[&str], response: &str) -> Self {
        Self {
            intent,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            response: response.to_string(),
        }
    }

    /// Whether the (already lower-cased) text contains any trigger keyword.
    pub fn matches(&self, lower: &str) -> bool {
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }
}

/// Ordered rule list plus the fallback answer. Rules are tried first to last.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<ResponseRule>,
    fallback: String,
}

impl RuleTable {
    pub fn new(rules: Vec<ResponseRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    pub fn rules(&self) -> &[ResponseRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Answers about the portfolio owner's services, projects, skills,
    /// contact details and background.
    pub fn portfolio() -> Self {
        Self::new(
            vec![
                ResponseRule::new(
                    Intent::Services,
                    &["service", "what do you do"],
                    "I offer four main services: AI Solutions, 3D Design, Content Creation, and Data Solutions. Each service combines technical expertise with creative vision to deliver exceptional results.",
                ),
                ResponseRule::new(
                    Intent::Projects,
                    &["project", "work"],
                    "My portfolio includes projects like NeuralScript AI, Quantum Visualization, Content AI Platform, and DataFlow AI. Each project showcases different aspects of my skills in AI, design, and development.",
                ),
                ResponseRule::new(
                    Intent::Skills,
                    &["skill", "expert"],
                    "My technical proficiency includes AI & Machine Learning (94%), 3D Design (88%), Content Strategy (96%), Data Analysis (91%), Web Development (86%), and Graphic Design (89%).",
                ),
                ResponseRule::new(
                    Intent::Contact,
                    &["contact", "email", "phone"],
                    "You can reach me at contact@itsmearif.info or +880 1234 567890. I'm based in Dhaka, Bangladesh and available for freelance projects and collaborations.",
                ),
                ResponseRule::new(
                    Intent::Experience,
                    &["experience", "background"],
                    "With over 7 years in the industry, I've served as Lead AI Solutions Architect, 3D Design Director, and Content Strategy Lead, working on diverse projects across multiple domains.",
                ),
                // Plain substring match: "hi" also fires inside words like "this".
                ResponseRule::new(
                    Intent::Greeting,
                    &["hello", "hi", "hey"],
                    "Hello! I'm your AI assistant. I can help you learn more about Md Ariful Islam's work, projects, and services.",
                ),
            ],
            "I understand you're asking about my work. I specialize in creating AI-powered solutions combined with compelling design and content. How can I assist you further?",
        )
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::portfolio()
    }
}
