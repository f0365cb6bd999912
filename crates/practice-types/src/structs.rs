//! Entity structs for the practice administration directory.
//!
//! Three entities carry identity: [`InsurancePlan`], [`Employee`], and
//! [`Company`]. Everything else here is a value object owned by exactly one
//! entity (addresses, contacts, coverage, billing) and has no identity of
//! its own.
//!
//! Field names serialize in `camelCase`, the shape the admin UI consumes.
//! Currency amounts are [`Decimal`] (serialized as strings) and calendar
//! dates are [`NaiveDate`] (serialized as `YYYY-MM-DD`).

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    BillingCycle, CoverageCategory, DependentRelationship, PaymentMethod, SubscriptionStatus,
    SubscriptionTier,
};
use crate::ids::{CompanyId, EmployeeId, InsurancePlanId};

// ---------------------------------------------------------------------------
// Shared value objects
// ---------------------------------------------------------------------------

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Address {
    /// Street line, including unit number.
    pub street: String,
    /// City or locality.
    pub city: String,
    /// State, province, or region code.
    pub state: String,
    /// Postal code.
    pub zip_code: String,
    /// Country name or ISO code.
    pub country: String,
}

/// The person at a company the practice deals with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ContactPerson {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Job title at the company.
    pub position: String,
}

/// Who to call if something happens to an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct EmergencyContact {
    /// Full name.
    pub name: String,
    /// Free-form relationship to the employee (e.g. "Sister").
    pub relationship: String,
    /// Phone number.
    pub phone: String,
}

// ---------------------------------------------------------------------------
// InsurancePlan
// ---------------------------------------------------------------------------

/// Reimbursement percentages per benefit category, each 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Coverage {
    /// Medical coverage percentage.
    pub medical: u8,
    /// Dental coverage percentage.
    pub dental: u8,
    /// Vision coverage percentage.
    pub vision: u8,
    /// Prescription coverage percentage.
    pub prescription: u8,
}

impl Coverage {
    /// Return every category paired with its percentage, in declaration order.
    pub const fn entries(&self) -> [(CoverageCategory, u8); 4] {
        [
            (CoverageCategory::Medical, self.medical),
            (CoverageCategory::Dental, self.dental),
            (CoverageCategory::Vision, self.vision),
            (CoverageCategory::Prescription, self.prescription),
        ]
    }

    /// Return the percentage for a single category.
    pub const fn for_category(&self, category: CoverageCategory) -> u8 {
        match category {
            CoverageCategory::Medical => self.medical,
            CoverageCategory::Dental => self.dental,
            CoverageCategory::Vision => self.vision,
            CoverageCategory::Prescription => self.prescription,
        }
    }
}

/// Monthly premium and how it is split between employee and employer.
///
/// The two contribution percentages are expected to sum to 100. The type
/// does not enforce this; the directory integrity audit reports plans
/// where they do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Premium {
    /// Total monthly premium.
    #[ts(as = "String")]
    pub monthly: Decimal,
    /// Percentage of the premium paid by the employee.
    pub employee_contribution: u8,
    /// Percentage of the premium paid by the employer.
    pub employer_contribution: u8,
}

impl Premium {
    /// Sum of both contribution percentages.
    pub fn contribution_total(&self) -> u16 {
        u16::from(self.employee_contribution).saturating_add(u16::from(self.employer_contribution))
    }
}

/// An insurance plan that companies can offer to their employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct InsurancePlan {
    /// Unique plan identifier.
    pub id: InsurancePlanId,
    /// Display name.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// Per-category reimbursement percentages.
    pub coverage: Coverage,
    /// Monthly premium and contribution split.
    pub premium: Premium,
    /// Annual deductible.
    #[ts(as = "String")]
    pub deductible: Decimal,
    /// Annual out-of-pocket maximum; expected to be at least the deductible.
    #[ts(as = "String")]
    pub out_of_pocket_max: Decimal,
}

// ---------------------------------------------------------------------------
// Employee
// ---------------------------------------------------------------------------

/// A person covered under an employee's plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Dependent {
    /// Full name.
    pub name: String,
    /// Relationship to the employee.
    pub relationship: DependentRelationship,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
}

/// Self-reported medical history kept on file for an employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct MedicalHistory {
    /// Chronic or ongoing conditions.
    #[serde(default)]
    pub conditions: BTreeSet<String>,
    /// Known allergies.
    #[serde(default)]
    pub allergies: BTreeSet<String>,
    /// Current medications.
    #[serde(default)]
    pub medications: BTreeSet<String>,
}

impl MedicalHistory {
    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.allergies.is_empty() && self.medications.is_empty()
    }
}

/// An employee of a client company, enrolled in one insurance plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Employee {
    /// Unique employee identifier.
    pub id: EmployeeId,
    /// The employing company.
    pub company_id: CompanyId,
    /// The plan this employee is enrolled in. Should be one the employing
    /// company offers.
    pub insurance_plan_id: InsurancePlanId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Work email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Job title.
    pub position: String,
    /// Department within the company.
    pub department: String,
    /// First day of employment.
    pub hire_date: NaiveDate,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Home address.
    pub address: Address,
    /// Emergency contact.
    pub emergency_contact: EmergencyContact,
    /// Covered dependents, in the order they were added.
    #[serde(default)]
    pub dependents: Vec<Dependent>,
    /// Medical history on file.
    #[serde(default)]
    pub medical_history: MedicalHistory,
}

impl Employee {
    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ---------------------------------------------------------------------------
// Company
// ---------------------------------------------------------------------------

/// How and when a company is invoiced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct BillingInfo {
    /// Payment method on file.
    pub payment_method: PaymentMethod,
    /// Invoice frequency.
    pub billing_cycle: BillingCycle,
    /// Where invoices are sent.
    pub billing_email: String,
    /// Billing address, when it differs from the company address.
    #[serde(default)]
    pub billing_address: Option<Address>,
}

/// A company's subscription to the practice product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Subscription {
    /// Product tier.
    pub tier: SubscriptionTier,
    /// Current lifecycle state.
    pub status: SubscriptionStatus,
    /// When the subscription started.
    pub start_date: NaiveDate,
    /// Next renewal, if one is scheduled.
    #[serde(default)]
    pub renewal_date: Option<NaiveDate>,
}

/// A client company whose employees receive coverage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Company {
    /// Unique company identifier.
    pub id: CompanyId,
    /// Legal or trading name.
    pub name: String,
    /// Industry sector.
    pub industry: String,
    /// Head office address.
    pub address: Address,
    /// Primary contact at the company.
    pub contact_person: ContactPerson,
    /// Public website.
    pub website: String,
    /// Headcount as declared by the company. Independent of the number of
    /// employee records on file.
    pub employee_count: u32,
    /// Date the company registered with the practice.
    pub registered_date: NaiveDate,
    /// Plans the company offers, in display order.
    #[serde(default)]
    pub insurance_plans: Vec<InsurancePlanId>,
    /// Billing terms.
    pub billing_info: BillingInfo,
    /// Subscription state.
    pub subscription: Subscription,
}

impl Company {
    /// Whether `plan` appears in this company's offered plans.
    pub fn offers_plan(&self, plan: &InsurancePlanId) -> bool {
        self.insurance_plans.contains(plan)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn coverage() -> Coverage {
        Coverage {
            medical: 90,
            dental: 80,
            vision: 70,
            prescription: 85,
        }
    }

    #[test]
    fn coverage_entries_follow_category_order() {
        let c = coverage();
        let entries = c.entries();
        assert_eq!(entries.first(), Some(&(CoverageCategory::Medical, 90)));
        assert_eq!(entries.last(), Some(&(CoverageCategory::Prescription, 85)));
        assert_eq!(c.for_category(CoverageCategory::Vision), 70);
    }

    #[test]
    fn contribution_total_does_not_wrap() {
        let premium = Premium {
            monthly: dec!(450.00),
            employee_contribution: 200,
            employer_contribution: 200,
        };
        assert_eq!(premium.contribution_total(), 400);
    }

    #[test]
    fn plan_serializes_camel_case_with_string_amounts() {
        let plan = InsurancePlan {
            id: InsurancePlanId::from("plan-001"),
            name: String::from("Premium Health Plus"),
            description: String::from("Comprehensive coverage"),
            coverage: coverage(),
            premium: Premium {
                monthly: dec!(450.00),
                employee_contribution: 20,
                employer_contribution: 80,
            },
            deductible: dec!(500),
            out_of_pocket_max: dec!(3000),
        };
        let value = serde_json::to_value(&plan).unwrap_or_default();
        assert_eq!(value["outOfPocketMax"], "3000");
        assert_eq!(value["premium"]["employeeContribution"], 20);
        assert_eq!(value["premium"]["monthly"], "450.00");

        let restored: Result<InsurancePlan, _> = serde_json::from_value(value);
        assert_eq!(restored.ok(), Some(plan));
    }

    #[test]
    fn employee_optional_collections_default_when_missing() {
        let json = r#"{
            "id": "emp-900",
            "companyId": "demo",
            "insurancePlanId": "plan-001",
            "firstName": "Ada",
            "lastName": "Byron",
            "email": "ada@example.com",
            "phone": "555-0100",
            "position": "Analyst",
            "department": "Finance",
            "hireDate": "2021-03-01",
            "dateOfBirth": "1990-12-10",
            "address": {
                "street": "1 Main St",
                "city": "Springfield",
                "state": "IL",
                "zipCode": "62701",
                "country": "USA"
            },
            "emergencyContact": { "name": "Ann", "relationship": "Mother", "phone": "555-0101" }
        }"#;
        let employee: Result<Employee, _> = serde_json::from_str(json);
        let employee = employee.ok();
        assert!(employee.is_some());
        if let Some(e) = employee {
            assert!(e.dependents.is_empty());
            assert!(e.medical_history.is_empty());
            assert_eq!(e.full_name(), "Ada Byron");
            assert_eq!(e.hire_date, NaiveDate::from_ymd_opt(2021, 3, 1).unwrap_or_default());
        }
    }
}
