//! Messages pushed over the live status WebSocket.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-to-client message on the status channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChannelMessage {
    /// Client text echoed back verbatim.
    Echo {
        data: String,
        timestamp: DateTime<Utc>,
    },

    /// Periodic live status snapshot.
    Update {
        data: LiveStats,
        timestamp: DateTime<Utc>,
    },
}

impl ChannelMessage {
    pub fn echo(data: impl Into<String>) -> Self {
        Self::Echo {
            data: data.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn update(data: LiveStats) -> Self {
        Self::Update {
            data,
            timestamp: Utc::now(),
        }
    }
}

/// Synthetic live metrics shown on the site dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStats {
    pub visitors: u32,
    pub ai_requests: u32,
    pub system_status: String,
}
