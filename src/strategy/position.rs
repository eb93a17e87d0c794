use crate::strategy::types::{Phase, Signal, TradeDirection};

/// A state change applied by [`PositionStateMachine::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// `Flat` to the given direction
    Entered(TradeDirection),
    /// The given direction to `Flat`
    Exited(TradeDirection),
}

impl Transition {
    /// The direction whose legs are traded by this transition
    pub fn direction(self) -> TradeDirection {
        match self {
            Transition::Entered(direction) | Transition::Exited(direction) => direction,
        }
    }

    pub fn phase(self) -> Phase {
        match self {
            Transition::Entered(_) => Phase::Entry,
            Transition::Exited(_) => Phase::Exit,
        }
    }
}

/// Tracks the direction of the last submitted intent pair
///
/// The state follows order submission, not confirmed fills: an exit returns
/// to `Flat` immediately, so a new entry may be emitted before the previous
/// exit has filled.
#[derive(Debug, Clone, Default)]
pub struct PositionStateMachine {
    direction: TradeDirection,
}

impl PositionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self) -> TradeDirection {
        self.direction
    }

    /// Apply an evaluator signal. Entry is only taken from `Flat` and exit
    /// only from a held direction; anything else is ignored.
    pub fn apply(&mut self, signal: Signal) -> Option<Transition> {
        match (self.direction, signal) {
            (TradeDirection::Flat, Signal::Enter(target)) if !target.is_flat() => {
                self.direction = target;
                Some(Transition::Entered(target))
            }
            (held, Signal::Exit) if !held.is_flat() => {
                self.direction = TradeDirection::Flat;
                Some(Transition::Exited(held))
            }
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.direction = TradeDirection::Flat;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_flat() {
        assert_eq!(PositionStateMachine::new().direction(), TradeDirection::Flat);
    }

    #[test]
    fn test_entry_then_exit() {
        let mut sm = PositionStateMachine::new();

        let t = sm.apply(Signal::Enter(TradeDirection::ShortCheapLeg));
        assert_eq!(t, Some(Transition::Entered(TradeDirection::ShortCheapLeg)));
        assert_eq!(sm.direction(), TradeDirection::ShortCheapLeg);

        let t = sm.apply(Signal::Exit);
        assert_eq!(t, Some(Transition::Exited(TradeDirection::ShortCheapLeg)));
        assert_eq!(t.map(Transition::phase), Some(Phase::Exit));
        assert_eq!(sm.direction(), TradeDirection::Flat);
    }

    #[test]
    fn test_entry_ignored_while_held() {
        let mut sm = PositionStateMachine::new();
        sm.apply(Signal::Enter(TradeDirection::LongCheapLeg));

        assert_eq!(sm.apply(Signal::Enter(TradeDirection::ShortCheapLeg)), None);
        assert_eq!(sm.apply(Signal::Enter(TradeDirection::LongCheapLeg)), None);
        assert_eq!(sm.direction(), TradeDirection::LongCheapLeg);
    }

    #[test]
    fn test_exit_ignored_while_flat() {
        let mut sm = PositionStateMachine::new();
        assert_eq!(sm.apply(Signal::Exit), None);
        assert_eq!(sm.apply(Signal::Hold), None);
        assert_eq!(sm.apply(Signal::Enter(TradeDirection::Flat)), None);
        assert_eq!(sm.direction(), TradeDirection::Flat);
    }

    #[test]
    fn test_reentry_right_after_exit() {
        let mut sm = PositionStateMachine::new();
        sm.apply(Signal::Enter(TradeDirection::LongCheapLeg));
        sm.apply(Signal::Exit);

        let t = sm.apply(Signal::Enter(TradeDirection::LongCheapLeg));
        assert_eq!(t, Some(Transition::Entered(TradeDirection::LongCheapLeg)));
    }

    #[test]
    fn test_reset() {
        let mut sm = PositionStateMachine::new();
        sm.apply(Signal::Enter(TradeDirection::LongCheapLeg));
        sm.reset();
        assert_eq!(sm.direction(), TradeDirection::Flat);
    }
}
