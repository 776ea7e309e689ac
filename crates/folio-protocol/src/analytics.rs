use serde::{Deserialize, Serialize};

/// Site traffic summary returned by `GET /api/analytics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub total_visitors: u64,
    pub unique_visitors: u64,
    /// Average session length as `m:ss`.
    pub avg_session_time: String,
    pub page_views: u64,
    /// Bounce rate as a percentage string (e.g., "32%").
    pub bounce_rate: String,
    pub popular_sections: Vec<SectionViews>,
    pub ai_interactions: u64,
    pub form_submissions: u64,
    pub performance_score: u8,
}

/// View count for one section of the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionViews {
    pub section: String,
    pub views: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReply {
    pub success: bool,
    pub analytics: AnalyticsSnapshot,
    /// Reporting window (e.g., "last-30-days").
    pub period: String,
}
