//! Plan / Billing Toggle State

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Premium,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Billing {
    #[default]
    Monthly,
    Annual,
}

/// Which half of a segmented control the sliding pill covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PillSide {
    Left,
    Right,
}

impl PillSide {
    pub fn class(self) -> &'static str {
        match self {
            PillSide::Left => "pill-left",
            PillSide::Right => "pill-right",
        }
    }
}

/// Plan and billing are separate axes. Billing is stored while the plan is
/// Free and only shown once Premium is picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanToggle {
    plan: Plan,
    billing: Billing,
}

impl PlanToggle {
    pub fn plan(&self) -> Plan {
        self.plan
    }

    pub fn set_plan(&mut self, plan: Plan) {
        self.plan = plan;
        tracing::debug!(?plan, "plan set");
    }

    pub fn set_billing(&mut self, billing: Billing) {
        self.billing = billing;
        tracing::debug!(?billing, plan = ?self.plan, "billing set");
    }

    /// Stored billing choice, regardless of plan
    pub fn billing(&self) -> Billing {
        self.billing
    }

    pub fn displayed_billing(&self) -> Option<Billing> {
        match self.plan {
            Plan::Premium => Some(self.billing),
            Plan::Free => None,
        }
    }

    pub fn plan_pill(&self) -> PillSide {
        match self.plan {
            Plan::Free => PillSide::Left,
            Plan::Premium => PillSide::Right,
        }
    }

    pub fn billing_pill(&self) -> PillSide {
        match self.billing {
            Billing::Monthly => PillSide::Left,
            Billing::Annual => PillSide::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let toggle = PlanToggle::default();
        assert_eq!(toggle.plan(), Plan::Free);
        assert_eq!(toggle.displayed_billing(), None);
        assert_eq!(toggle.plan_pill(), PillSide::Left);
    }

    #[test]
    fn test_billing_stored_while_hidden() {
        let mut toggle = PlanToggle::default();
        toggle.set_billing(Billing::Annual);
        assert_eq!(toggle.displayed_billing(), None);

        toggle.set_plan(Plan::Premium);
        assert_eq!(toggle.displayed_billing(), Some(Billing::Annual));
        assert_eq!(toggle.billing_pill(), PillSide::Right);
    }

    #[test]
    fn test_billing_survives_plan_switch() {
        let mut toggle = PlanToggle::default();
        toggle.set_plan(Plan::Premium);
        toggle.set_billing(Billing::Annual);
        toggle.set_plan(Plan::Free);
        assert_eq!(toggle.billing(), Billing::Annual);
        toggle.set_plan(Plan::Premium);
        assert_eq!(toggle.displayed_billing(), Some(Billing::Annual));
    }
}
