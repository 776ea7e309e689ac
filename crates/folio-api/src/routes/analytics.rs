//! Site analytics endpoint (static snapshot).

use axum::Json;
use folio_protocol::{AnalyticsReply, AnalyticsSnapshot, SectionViews};

/// GET /api/analytics — traffic summary for the last 30 days.
pub async fn analytics() -> Json<AnalyticsReply> {
    Json(AnalyticsReply {
        success: true,
        analytics: snapshot(),
        period: "last-30-days".into(),
    })
}

fn snapshot() -> AnalyticsSnapshot {
    let sections = [
        ("Projects", 1250),
        ("Services", 980),
        ("AI Assistant", 850),
        ("Skills", 720),
    ];

    AnalyticsSnapshot {
        total_visitors: 1520,
        unique_visitors: 1124,
        avg_session_time: "4:15".into(),
        page_views: 4580,
        bounce_rate: "32%".into(),
        popular_sections: sections
            .into_iter()
            .map(|(section, views)| SectionViews {
                section: section.into(),
                views,
            })
            .collect(),
        ai_interactions: 425,
        form_submissions: 89,
        performance_score: 96,
    }
}
