//! Dispatcher action tiers.

use std::fmt;

use serde::Serialize;

/// Delays below this many minutes are only monitored.
pub const REROUTE_THRESHOLD_MINS: u32 = 15;

/// Delays of at least this many minutes hold the train.
pub const HOLD_THRESHOLD_MINS: u32 = 45;

/// What the dispatcher should do with a delayed train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DispatchAction {
    /// Keep running on the current route.
    Monitor,
    /// Move onto an alternative path.
    Reroute,
    /// Wait for the track to clear.
    Hold,
}

impl DispatchAction {
    /// Tier name, e.g. `"HOLD"`.
    pub fn as_str(self) -> &'static str {
        match self {
            DispatchAction::Monitor => "MONITOR",
            DispatchAction::Reroute => "REROUTE",
            DispatchAction::Hold => "HOLD",
        }
    }

    /// Instruction shown to the dispatcher alongside the tier.
    pub fn directive(self) -> &'static str {
        match self {
            DispatchAction::Monitor => "Continue on current route",
            DispatchAction::Reroute => "Take alternative path",
            DispatchAction::Hold => "Wait for track clearance",
        }
    }

    /// Tier and directive, e.g. `"HOLD - Wait for track clearance"`.
    pub fn label(self) -> String {
        format!("{} - {}", self.as_str(), self.directive())
    }

    /// Divisor turning delay minutes into recovery minutes.
    fn recovery_divisor(self) -> u32 {
        match self {
            DispatchAction::Monitor => 2,
            DispatchAction::Reroute => 3,
            DispatchAction::Hold => 4,
        }
    }
}

impl fmt::Display for DispatchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action tier and its expected recovery time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDecision {
    pub action: DispatchAction,
    pub recovery_minutes: u32,
}

/// Pick an action for a delay. Total over all delays.
pub fn decide(delay_minutes: u32) -> ActionDecision {
    let action = if delay_minutes < REROUTE_THRESHOLD_MINS {
        DispatchAction::Monitor
    } else if delay_minutes < HOLD_THRESHOLD_MINS {
        DispatchAction::Reroute
    } else {
        DispatchAction::Hold
    };

    ActionDecision {
        action,
        recovery_minutes: delay_minutes / action.recovery_divisor(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision(action: DispatchAction, recovery_minutes: u32) -> ActionDecision {
        ActionDecision {
            action,
            recovery_minutes,
        }
    }

    #[test]
    fn tiers() {
        assert_eq!(decide(10), decision(DispatchAction::Monitor, 5));
        assert_eq!(decide(30), decision(DispatchAction::Reroute, 10));
        assert_eq!(decide(60), decision(DispatchAction::Hold, 15));
    }

    #[test]
    fn boundaries() {
        assert_eq!(decide(0), decision(DispatchAction::Monitor, 0));
        assert_eq!(decide(14), decision(DispatchAction::Monitor, 7));
        assert_eq!(decide(15), decision(DispatchAction::Reroute, 5));
        assert_eq!(decide(44), decision(DispatchAction::Reroute, 14));
        assert_eq!(decide(45), decision(DispatchAction::Hold, 11));
        assert_eq!(decide(50), decision(DispatchAction::Hold, 12));
    }

    #[test]
    fn huge_delay() {
        assert_eq!(decide(u32::MAX).action, DispatchAction::Hold);
    }

    #[test]
    fn labels() {
        assert_eq!(
            DispatchAction::Monitor.label(),
            "MONITOR - Continue on current route"
        );
        assert_eq!(
            DispatchAction::Reroute.label(),
            "REROUTE - Take alternative path"
        );
        assert_eq!(
            DispatchAction::Hold.label(),
            "HOLD - Wait for track clearance"
        );
        assert_eq!(DispatchAction::Hold.to_string(), "HOLD");
    }
}
