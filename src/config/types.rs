//! Configuration types

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::common::errors::{EngineError, Result};
use crate::common::types::Leg;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Spread engine parameters
    #[serde(default)]
    pub engine: EngineConfig,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;
        self.settings.validate()
    }
}

/// One instrument of the pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegConfig {
    /// Symbol used by the quote feed and in fill reports
    pub symbol: String,
    /// Contracts traded on this leg per decision
    pub quantity: u32,
}

impl LegConfig {
    pub fn new(symbol: impl Into<String>, quantity: u32) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
        }
    }
}

/// Fixed parameters of a spread engine, validated at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum price increment shared by both legs
    #[serde(default = "default_tick_size")]
    pub tick_size: Decimal,
    /// Executable spread (in ticks) that opens a position
    #[serde(default = "default_entry_threshold")]
    pub entry_threshold_ticks: i64,
    /// Executable spread (in ticks) at or through which a position closes
    #[serde(default = "default_exit_threshold")]
    pub exit_threshold_ticks: i64,
    #[serde(default = "default_leg_a")]
    pub leg_a: LegConfig,
    #[serde(default = "default_leg_b")]
    pub leg_b: LegConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_size: default_tick_size(),
            entry_threshold_ticks: default_entry_threshold(),
            exit_threshold_ticks: default_exit_threshold(),
            leg_a: default_leg_a(),
            leg_b: default_leg_b(),
        }
    }
}

impl EngineConfig {
    pub fn leg(&self, leg: Leg) -> &LegConfig {
        match leg {
            Leg::A => &self.leg_a,
            Leg::B => &self.leg_b,
        }
    }

    /// Resolve a feed symbol to its leg
    pub fn leg_for_symbol(&self, symbol: &str) -> Option<Leg> {
        if symbol == self.leg_a.symbol {
            Some(Leg::A)
        } else if symbol == self.leg_b.symbol {
            Some(Leg::B)
        } else {
            None
        }
    }

    /// Reject parameters that would make the threshold comparisons meaningless
    pub fn validate(&self) -> Result<()> {
        if self.tick_size <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig(format!(
                "tick size must be positive, got {}",
                self.tick_size
            )));
        }

        if self.entry_threshold_ticks <= self.exit_threshold_ticks {
            return Err(EngineError::InvalidConfig(format!(
                "entry threshold ({} ticks) must exceed exit threshold ({} ticks)",
                self.entry_threshold_ticks, self.exit_threshold_ticks
            )));
        }

        for (leg, cfg) in [(Leg::A, &self.leg_a), (Leg::B, &self.leg_b)] {
            if cfg.quantity == 0 {
                return Err(EngineError::InvalidConfig(format!(
                    "leg {} quantity must be positive",
                    leg
                )));
            }
            if cfg.symbol.trim().is_empty() {
                return Err(EngineError::InvalidConfig(format!(
                    "leg {} symbol must not be empty",
                    leg
                )));
            }
        }

        for (name, ticks) in [
            ("entry", self.entry_threshold_ticks),
            ("exit", self.exit_threshold_ticks),
        ] {
            if Decimal::from(ticks).checked_mul(self.tick_size).is_none() {
                return Err(EngineError::InvalidConfig(format!(
                    "{} threshold of {} ticks overflows at tick size {}",
                    name, ticks, self.tick_size
                )));
            }
        }

        if self.leg_a.symbol == self.leg_b.symbol {
            return Err(EngineError::InvalidConfig(format!(
                "both legs use symbol {}",
                self.leg_a.symbol
            )));
        }

        Ok(())
    }
}

fn default_tick_size() -> Decimal {
    dec!(0.25)
}

fn default_entry_threshold() -> i64 {
    6
}

fn default_exit_threshold() -> i64 {
    1
}

fn default_leg_a() -> LegConfig {
    LegConfig::new("MES", 10)
}

fn default_leg_b() -> LegConfig {
    LegConfig::new("ES", 1)
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit logs as JSON
    #[serde(default)]
    pub json_logs: bool,
    /// Buffer size of the inbound event and outbound intent channels
    #[serde(default = "default_channel_size")]
    pub channel_size: usize,
}

impl AppSettings {
    /// Bounded channels need room for at least one message
    pub fn validate(&self) -> Result<()> {
        if self.channel_size == 0 {
            return Err(EngineError::InvalidConfig(
                "channel size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
            channel_size: default_channel_size(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_channel_size() -> usize {
    crate::common::channels::DEFAULT_CHANNEL_SIZE
}
