//! Shared application state for the Axum servers.
//!
//! Everything here is either immutable after startup (rule table, catalog,
//! timings) or internally synchronized (connection registry), so handlers
//! only ever take `&self`.

use std::sync::Arc;
use std::time::Duration;

use rand::RngExt;

use crate::assistant::RuleTable;
use crate::bridge::{CommandRunner, ProcessBridge, ProcessRunner};
use crate::catalog::Catalog;
use crate::channel::ConnectionRegistry;
use crate::config::ApiConfig;

/// Simulated inference latency applied to every chat reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatDelay {
    pub min: Duration,
    pub max: Duration,
}

impl ChatDelay {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }

    /// No artificial latency.
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// A uniformly random duration within `[min, max]`.
    pub fn sample(&self) -> Duration {
        if self.max == self.min {
            return self.min;
        }
        rand::rng().random_range(self.min..=self.max)
    }
}

impl Default for ChatDelay {
    fn default() -> Self {
        Self::new(Duration::from_millis(800), Duration::from_millis(1200))
    }
}

/// Shared application state, cheap to clone into each handler.
#[derive(Clone)]
pub struct AppState {
    /// Canned assistant answers.
    pub rules: Arc<RuleTable>,
    /// Project recommendation catalog.
    pub catalog: Arc<Catalog>,
    /// External AI service bridge.
    pub bridge: ProcessBridge,
    /// Open status channel connections.
    pub connections: ConnectionRegistry,
    pub chat_delay: ChatDelay,
    /// Interval between live status pushes.
    pub update_interval: Duration,
}

impl AppState {
    /// Default tables, default timings, and the default AI service command.
    pub fn new() -> Self {
        let config = ApiConfig::default();
        let runner = CommandRunner::new("python", vec!["ai-service.py".into()])
            .with_timeout(config.bridge_timeout());
        Self::with_runner(Arc::new(runner))
    }

    /// Default tables and timings with a custom service runner.
    pub fn with_runner(runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            rules: Arc::new(RuleTable::portfolio()),
            catalog: Arc::new(Catalog::portfolio()),
            bridge: ProcessBridge::new(runner),
            connections: ConnectionRegistry::new(),
            chat_delay: ChatDelay::default(),
            update_interval: Duration::from_secs(5),
        }
    }

    /// Build state from configuration, loading the catalog file if one is set.
    pub fn from_config(config: &ApiConfig) -> anyhow::Result<Self> {
        let runner = CommandRunner::from_command_line(&config.bridge_command)?
            .with_timeout(config.bridge_timeout());

        let mut state = Self::with_runner(Arc::new(runner));
        if let Some(path) = &config.catalog_path {
            let catalog = Catalog::from_file(path)?;
            tracing::info!(path = %path.display(), items = catalog.len(), "catalog loaded");
            state.catalog = Arc::new(catalog);
        }
        state.chat_delay = ChatDelay::new(
            Duration::from_millis(config.chat_delay_min_ms),
            Duration::from_millis(config.chat_delay_max_ms),
        );
        state.update_interval = config.update_interval();
        Ok(state)
    }

    pub fn with_chat_delay(mut self, delay: ChatDelay) -> Self {
        self.chat_delay = delay;
        self
    }

    pub fn with_update_interval(mut self, interval: Duration) -> Self {
        self.update_interval = interval;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
