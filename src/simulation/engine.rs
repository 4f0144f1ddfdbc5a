//! High-level runtime engine settings
//!
//! Selects the body update order and the real-time tick rate
//! used when building and running a `Scenario`

use crate::configuration::config::UpdateOrderConfig;

/// How force reads interleave with position writes inside one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateOrder {
    /// Bodies move one at a time in collection order; later bodies see
    /// earlier bodies' new positions
    #[default]
    Sequential,
    /// Every force reads the positions from the end of the previous step,
    /// then all bodies commit together
    Synchronized,
}

impl From<UpdateOrderConfig> for UpdateOrder {
    fn from(cfg: UpdateOrderConfig) -> Self {
        match cfg {
            UpdateOrderConfig::Sequential => UpdateOrder::Sequential,
            UpdateOrderConfig::Synchronized => UpdateOrder::Synchronized,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Engine {
    pub update_order: UpdateOrder,
    pub tick_hz: f64, // render/driver ticks per real second, not the physics step
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            update_order: UpdateOrder::Sequential,
            tick_hz: 60.0,
        }
    }
}
