//! Shared entity schemas for the practice administration directory.
//!
//! This crate is the single source of truth for the records the admin UI
//! reads: insurance plans, client companies, and their employees. Types
//! defined here flow downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe string wrappers for entity identifiers
//! - [`enums`] -- Closed vocabularies (relationships, billing, subscription)
//! - [`structs`] -- Entity records and their owned value objects

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    BillingCycle, CoverageCategory, DependentRelationship, PaymentMethod, SubscriptionStatus,
    SubscriptionTier,
};
pub use ids::{CompanyId, EmployeeId, InsurancePlanId};
pub use structs::{
    Address, BillingInfo, Company, ContactPerson, Coverage, Dependent, EmergencyContact, Employee,
    InsurancePlan, MedicalHistory, Premium, Subscription,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs writes one `.ts` file per type into `bindings/` relative to
        // the crate root when `export_all` is called.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::CompanyId::export_all();
        let _ = crate::ids::EmployeeId::export_all();
        let _ = crate::ids::InsurancePlanId::export_all();

        // Enums
        let _ = crate::enums::DependentRelationship::export_all();
        let _ = crate::enums::CoverageCategory::export_all();
        let _ = crate::enums::PaymentMethod::export_all();
        let _ = crate::enums::BillingCycle::export_all();
        let _ = crate::enums::SubscriptionTier::export_all();
        let _ = crate::enums::SubscriptionStatus::export_all();

        // Structs
        let _ = crate::structs::Address::export_all();
        let _ = crate::structs::ContactPerson::export_all();
        let _ = crate::structs::EmergencyContact::export_all();
        let _ = crate::structs::Coverage::export_all();
        let _ = crate::structs::Premium::export_all();
        let _ = crate::structs::InsurancePlan::export_all();
        let _ = crate::structs::Dependent::export_all();
        let _ = crate::structs::MedicalHistory::export_all();
        let _ = crate::structs::Employee::export_all();
        let _ = crate::structs::BillingInfo::export_all();
        let _ = crate::structs::Subscription::export_all();
        let _ = crate::structs::Company::export_all();
    }
}
