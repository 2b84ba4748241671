use crate::update_graph::domain::ConditionalEdgeGroup;
use std::collections::BTreeSet;

/// RiskAcceptance policy deciding whether conditional edges may be taken
///
/// A group is accepted only when every risk it names is in the accepted
/// set. Containment is exact and order-independent; a group without risks
/// is always accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiskAcceptance {
    accepted: BTreeSet<String>,
}

impl RiskAcceptance {
    pub fn new<I, S>(accepted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accepted: accepted.into_iter().map(Into::into).collect(),
        }
    }

    /// Accepts nothing but risk-free groups
    pub fn none() -> Self {
        Self::default()
    }

    pub fn accepts_risk(&self, name: &str) -> bool {
        self.accepted.contains(name)
    }

    pub fn accepts(&self, group: &ConditionalEdgeGroup) -> bool {
        group.risk_names().all(|name| self.accepts_risk(name))
    }
}
