//! Rule identities and per-rule enablement.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three Legend-State checks, in the order the engine runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    /// Observable bindings must end with `$`.
    ObservableNaming,
    /// `.use()` only inside a component.
    UseOutsideComponent,
    /// `useSelector(() => x$.get())` should be `x$.use()`.
    SelectorSingleGet,
}

impl RuleKind {
    pub const ALL: [RuleKind; 3] = [
        RuleKind::ObservableNaming,
        RuleKind::UseOutsideComponent,
        RuleKind::SelectorSingleGet,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RuleKind::ObservableNaming => "observable-naming",
            RuleKind::UseOutsideComponent => "use-outside-component",
            RuleKind::SelectorSingleGet => "selector-single-get",
        }
    }

    pub fn from_name(name: &str) -> Option<RuleKind> {
        RuleKind::ALL.into_iter().find(|rule| rule.name() == name)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleKind::from_name(s).ok_or_else(|| {
            let known: Vec<&str> = RuleKind::ALL.iter().map(|r| r.name()).collect();
            format!("unknown rule '{s}' (expected one of: {})", known.join(", "))
        })
    }
}

/// Which rules run. All are on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    enabled: [bool; 3],
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet { enabled: [true; 3] }
    }
}

impl RuleSet {
    pub fn none() -> RuleSet {
        RuleSet { enabled: [false; 3] }
    }

    pub fn only(rules: &[RuleKind]) -> RuleSet {
        let mut set = RuleSet::none();
        for &rule in rules {
            set.set(rule, true);
        }
        set
    }

    pub fn is_enabled(&self, rule: RuleKind) -> bool {
        self.enabled[rule as usize]
    }

    pub fn set(&mut self, rule: RuleKind, enabled: bool) {
        self.enabled[rule as usize] = enabled;
    }

    /// Enabled rules in engine order.
    pub fn iter(&self) -> impl Iterator<Item = RuleKind> + '_ {
        RuleKind::ALL.into_iter().filter(|&rule| self.is_enabled(rule))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_names_round_trip() {
        for rule in RuleKind::ALL {
            assert_eq!(rule.name().parse::<RuleKind>(), Ok(rule));
        }
        assert!("no-such-rule".parse::<RuleKind>().is_err());
    }

    #[test]
    fn rule_set_keeps_engine_order() {
        let set = RuleSet::only(&[RuleKind::SelectorSingleGet, RuleKind::ObservableNaming]);
        let rules: Vec<RuleKind> = set.iter().collect();
        assert_eq!(rules, vec![RuleKind::ObservableNaming, RuleKind::SelectorSingleGet]);
        assert!(!set.is_enabled(RuleKind::UseOutsideComponent));
    }

    #[test]
    fn serde_uses_rule_names() {
        let json = serde_json::to_string(&RuleKind::UseOutsideComponent).unwrap();
        assert_eq!(json, "\"use-outside-component\"");
    }
}
