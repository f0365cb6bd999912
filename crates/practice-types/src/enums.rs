//! Enumeration types for the practice administration directory.
//!
//! Closed vocabularies used inside the entity value objects: dependent
//! relationships, coverage categories, billing terms, and subscription
//! state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Dependents
// ---------------------------------------------------------------------------

/// How a dependent is related to the employee who covers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum DependentRelationship {
    /// Legally married partner.
    Spouse,
    /// Son, daughter, or legal ward.
    Child,
    /// Registered domestic partner.
    DomesticPartner,
    /// Parent supported by the employee.
    Parent,
    /// Any other qualifying relationship.
    Other,
}

// ---------------------------------------------------------------------------
// Coverage
// ---------------------------------------------------------------------------

/// A benefit category an insurance plan reimburses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum CoverageCategory {
    /// Physician visits, hospital stays, procedures.
    Medical,
    /// Cleanings, fillings, oral surgery.
    Dental,
    /// Eye exams, lenses, frames.
    Vision,
    /// Prescription drugs.
    Prescription,
}

// ---------------------------------------------------------------------------
// Billing
// ---------------------------------------------------------------------------

/// How a company pays its subscription invoices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum PaymentMethod {
    /// Card on file, charged automatically.
    CreditCard,
    /// Direct bank transfer (ACH / wire).
    BankTransfer,
    /// Net-terms invoice paid manually.
    Invoice,
}

/// How often a company is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum BillingCycle {
    /// Billed every month.
    Monthly,
    /// Billed every three months.
    Quarterly,
    /// Billed once a year.
    Annually,
}

// ---------------------------------------------------------------------------
// Subscription
// ---------------------------------------------------------------------------

/// The product tier a company subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SubscriptionTier {
    /// Entry tier for small practices.
    Basic,
    /// Mid tier with reporting and integrations.
    Professional,
    /// Full tier with dedicated support.
    Enterprise,
}

/// Lifecycle state of a company's subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SubscriptionStatus {
    /// Evaluation period, not yet billed.
    Trial,
    /// Paid and in good standing.
    Active,
    /// An invoice is overdue.
    PastDue,
    /// Terminated; kept for history.
    Cancelled,
}

impl SubscriptionStatus {
    /// Whether the subscription currently grants access to the product.
    pub const fn is_current(self) -> bool {
        matches!(self, Self::Trial | Self::Active | Self::PastDue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_subscription_is_not_current() {
        assert!(SubscriptionStatus::Active.is_current());
        assert!(SubscriptionStatus::PastDue.is_current());
        assert!(!SubscriptionStatus::Cancelled.is_current());
    }

    #[test]
    fn enums_serialize_as_variant_names() {
        let json = serde_json::to_string(&DependentRelationship::DomesticPartner).unwrap_or_default();
        assert_eq!(json, "\"DomesticPartner\"");
        let cycle: Result<BillingCycle, _> = serde_json::from_str("\"Quarterly\"");
        assert_eq!(cycle.ok(), Some(BillingCycle::Quarterly));
    }
}
