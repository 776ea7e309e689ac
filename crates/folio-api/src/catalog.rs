//! Project recommendation catalog and interest-based ranking.

use std::path::Path;

use folio_protocol::RecommendationItem;

/// Skill level echoed back when the caller does not send one.
pub const DEFAULT_SKILL_LEVEL: &str = "intermediate";

/// Immutable list of recommendable projects, in insertion order.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<RecommendationItem>,
}

impl Catalog {
    pub fn new(items: Vec<RecommendationItem>) -> Self {
        Self { items }
    }

    /// Load a catalog from a JSON array of items.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let items: Vec<RecommendationItem> = serde_json::from_str(&contents)?;
        Ok(Self::new(items))
    }

    pub fn items(&self) -> &[RecommendationItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items matching any of `interests`, best score first.
    ///
    /// An item matches when an interest equals its category, or equals one of
    /// its skills lower-cased. No interests (or an empty list) selects the whole
    /// catalog. Equal scores keep catalog order.
    pub fn recommend(&self, interests: Option<&[String]>) -> Vec<&RecommendationItem> {
        let mut picked: Vec<&RecommendationItem> = match interests {
            Some(wanted) if !wanted.is_empty() => self
                .items
                .iter()
                .filter(|item| matches_interest(item, wanted))
                .collect(),
            _ => self.items.iter().collect(),
        };

        // `sort_by` is stable.
        picked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        picked
    }

    /// The four featured portfolio projects.
    pub fn portfolio() -> Self {
        Self::new(vec![
            item(
                1,
                "NeuralScript Pro",
                "AI-powered scriptwriting assistant",
                "ai",
                95,
                &["Python", "TensorFlow", "NLP"],
                "3-4 months",
                "Advanced",
            ),
            item(
                2,
                "Quantum Architecture",
                "3D visualization of futuristic designs",
                "design",
                88,
                &["Blender", "Three.js", "WebGL"],
                "2-3 months",
                "Intermediate",
            ),
            item(
                3,
                "Content AI Platform",
                "AI-assisted content creation system",
                "content",
                92,
                &["React", "Node.js", "OpenAI API"],
                "3-4 months",
                "Intermediate",
            ),
            item(
                4,
                "DataFlow AI",
                "Intelligent data processing platform",
                "data",
                90,
                &["Python", "Pandas", "FastAPI"],
                "2-3 months",
                "Advanced",
            ),
        ])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::portfolio()
    }
}

fn matches_interest(item: &RecommendationItem, interests: &[String]) -> bool {
    interests.iter().any(|i| *i == item.category)
        || item
            .skills
            .iter()
            .any(|skill| interests.contains(&skill.to_lowercase()))
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: u32,
    title: &str,
    description: &str,
    category: &str,
    match_score: u32,
    skills: &[&str],
    estimated_time: &str,
    complexity: &str,
) -> RecommendationItem {
    RecommendationItem {
        id,
        title: title.into(),
        description: description.into(),
        category: category.into(),
        match_score,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        estimated_time: estimated_time.into(),
        complexity: complexity.into(),
    }
}
