//! Bot state shared by all event handlers.
//!
//! Holds only immutable, cheaply cloneable handles. Each command invocation
//! builds its own working data and never writes back here.

use std::sync::Arc;

use crate::{command::CommandRegistry, service::metrics::Metrics};

#[derive(Clone)]
pub struct AppState {
    /// Commands the bot registers and dispatches to.
    pub commands: Arc<CommandRegistry>,

    /// Receives per-invocation latency measurements.
    pub metrics: Arc<dyn Metrics>,

    /// Guild to register commands on, or `None` for global registration.
    pub guild_id: Option<u64>,
}

impl AppState {
    /// Creates a new bot state.
    ///
    /// # Arguments
    /// - `commands` - Registry of the commands to serve
    /// - `metrics` - Metrics sink
    /// - `guild_id` - Optional development guild for command registration
    pub fn new(commands: CommandRegistry, metrics: Arc<dyn Metrics>, guild_id: Option<u64>) -> Self {
        Self {
            commands: Arc::new(commands),
            metrics,
            guild_id,
        }
    }
}
