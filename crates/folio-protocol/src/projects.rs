use serde::{Deserialize, Serialize};

/// One entry of the project recommendation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Category tag (e.g., "ai", "design").
    pub category: String,
    /// Precomputed relevance score, higher ranks first.
    pub match_score: u32,
    /// Skill tags as displayed (mixed case, e.g., "TensorFlow").
    pub skills: Vec<String>,
    /// Human-readable duration (e.g., "3-4 months").
    pub estimated_time: String,
    /// Complexity label (e.g., "Advanced").
    pub complexity: String,
}

/// Body of `POST /api/projects/recommend`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub skill_level: Option<String>,
}

/// Ranked recommendations plus the echoed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendReply {
    pub success: bool,
    pub recommendations: Vec<RecommendationItem>,
    pub total_matches: usize,
    /// Echo of the requested interests (`null` when none were sent).
    pub interests: Option<Vec<String>>,
    /// Echo of the requested skill level. Not used for ranking.
    pub skill_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_uses_camel_case_fields() {
        let item = RecommendationItem {
            id: 7,
            title: "Demo".into(),
            description: "A demo".into(),
            category: "ai".into(),
            match_score: 80,
            skills: vec!["Rust".into()],
            estimated_time: "1 month".into(),
            complexity: "Beginner".into(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["matchScore"], 80);
        assert_eq!(json["estimatedTime"], "1 month");
    }

    #[test]
    fn reply_serializes_absent_interests_as_null() {
        let reply = RecommendReply {
            success: true,
            recommendations: vec![],
            total_matches: 0,
            interests: None,
            skill_level: "intermediate".into(),
        };
        let json = serde_json::to_value(&reply).unwrap();
        assert!(json["interests"].is_null());
        assert_eq!(json["totalMatches"], 0);
        assert_eq!(json["skillLevel"], "intermediate");
    }
}
