use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::strategy::quote_store::SpreadSnapshot;
use crate::strategy::types::{Signal, SpreadDecision, TradeDirection};

/// Executable spreads of both directions for one snapshot
///
/// Both are expressed as "leg B minus leg A" at one-tick-improved limit
/// prices, so a rich leg B shows up positive in `long_cheap` and a rich leg A
/// shows up negative in `short_cheap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutableSpreads {
    /// Sell B at `bid - tick`, buy A at `ask + tick`
    pub long_cheap: Decimal,
    /// Buy B at `ask + tick`, sell A at `bid - tick`
    pub short_cheap: Decimal,
}

/// Pure spread classification against entry/exit thresholds
///
/// Thresholds are tick counts; the evaluator converts them to price units once
/// at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpreadEvaluator {
    tick_size: Decimal,
    entry_threshold: Decimal,
    exit_threshold: Decimal,
}

impl SpreadEvaluator {
    /// Callers validate that `tick_size > 0` and `entry_ticks > exit_ticks`.
    pub fn new(tick_size: Decimal, entry_ticks: i64, exit_ticks: i64) -> Self {
        Self {
            tick_size,
            entry_threshold: Decimal::from(entry_ticks) * tick_size,
            exit_threshold: Decimal::from(exit_ticks) * tick_size,
        }
    }

    pub fn tick_size(&self) -> Decimal {
        self.tick_size
    }

    /// Both executable spreads, or `None` if the prices overflow `Decimal`
    pub fn executable_spreads(&self, snapshot: &SpreadSnapshot) -> Option<ExecutableSpreads> {
        let tick = self.tick_size;
        let a_buy = snapshot.a.ask.checked_add(tick)?;
        let a_sell = snapshot.a.bid.checked_sub(tick)?;
        let b_buy = snapshot.b.ask.checked_add(tick)?;
        let b_sell = snapshot.b.bid.checked_sub(tick)?;

        Some(ExecutableSpreads {
            long_cheap: b_sell.checked_sub(a_buy)?,
            short_cheap: b_buy.checked_sub(a_sell)?,
        })
    }

    /// Classify the snapshot for the given held direction.
    ///
    /// From `Flat` only entry is considered, checking `LongCheapLeg` first.
    /// From a held direction only that direction's exit is considered.
    /// Returns `None` when the quoted prices are too large to price the spread.
    pub fn evaluate(&self, snapshot: &SpreadSnapshot, direction: TradeDirection) -> Option<SpreadDecision> {
        let spreads = self.executable_spreads(snapshot)?;

        let (candidate, executable_spread) = match direction {
            TradeDirection::Flat => {
                if spreads.long_cheap >= self.entry_threshold {
                    (Signal::Enter(TradeDirection::LongCheapLeg), spreads.long_cheap)
                } else if spreads.short_cheap <= -self.entry_threshold {
                    (Signal::Enter(TradeDirection::ShortCheapLeg), spreads.short_cheap)
                } else {
                    (Signal::Hold, spreads.long_cheap)
                }
            }
            TradeDirection::LongCheapLeg => {
                let exit = spreads.long_cheap <= self.exit_threshold;
                (if exit { Signal::Exit } else { Signal::Hold }, spreads.long_cheap)
            }
            TradeDirection::ShortCheapLeg => {
                let exit = spreads.short_cheap >= -self.exit_threshold;
                (if exit { Signal::Exit } else { Signal::Hold }, spreads.short_cheap)
            }
        };

        Some(SpreadDecision {
            candidate,
            executable_spread,
            spread_in_ticks: executable_spread.checked_div(self.tick_size)?,
        })
    }
}
