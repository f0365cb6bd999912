//! Built-in demo dataset for the admin UI.
//!
//! Four insurance plans, three client companies, and eight employees. The
//! `demo` company offers every plan; the other two offer a subset. Every
//! employee is enrolled in a plan their employer offers, so the dataset
//! passes the soft-invariant audit except for declared headcounts, which
//! are company-reported figures and deliberately larger than the handful
//! of employee records on file.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use practice_types::{
    Address, BillingCycle, BillingInfo, Company, ContactPerson, Coverage, Dependent,
    DependentRelationship, EmergencyContact, Employee, InsurancePlan, InsurancePlanId,
    MedicalHistory, PaymentMethod, Premium, Subscription, SubscriptionStatus, SubscriptionTier,
};
use rust_decimal::Decimal;

use crate::directory::Directory;
use crate::error::DirectoryError;
use crate::fixture::SeedData;

/// Calendar date from literal parts. Invalid parts fall back to the epoch,
/// which the hard-coded data below never hits.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Helper to build an [`Address`].
fn address(street: &str, city: &str, state: &str, zip_code: &str) -> Address {
    Address {
        street: street.to_owned(),
        city: city.to_owned(),
        state: state.to_owned(),
        zip_code: zip_code.to_owned(),
        country: "USA".to_owned(),
    }
}

/// Helper to build an [`InsurancePlan`]. Amounts are whole dollars except
/// the premium, which is given in cents.
#[allow(clippy::too_many_arguments)]
fn plan(
    id: &str,
    name: &str,
    description: &str,
    coverage: [u8; 4],
    premium_cents: i64,
    split: (u8, u8),
    deductible: i64,
    out_of_pocket_max: i64,
) -> InsurancePlan {
    let [medical, dental, vision, prescription] = coverage;
    InsurancePlan {
        id: id.into(),
        name: name.to_owned(),
        description: description.to_owned(),
        coverage: Coverage {
            medical,
            dental,
            vision,
            prescription,
        },
        premium: Premium {
            monthly: Decimal::new(premium_cents, 2),
            employee_contribution: split.0,
            employer_contribution: split.1,
        },
        deductible: Decimal::new(deductible, 0),
        out_of_pocket_max: Decimal::new(out_of_pocket_max, 0),
    }
}

/// Identity and employment fields of a seed employee.
struct Person<'a> {
    id: &'a str,
    company: &'a str,
    plan: &'a str,
    first: &'a str,
    last: &'a str,
    position: &'a str,
    department: &'a str,
    hired: NaiveDate,
    born: NaiveDate,
}

/// Helper to build an [`Employee`] with derived contact details.
fn employee(
    person: &Person<'_>,
    home: Address,
    emergency: (&str, &str),
    dependents: Vec<Dependent>,
    medical_history: MedicalHistory,
) -> Employee {
    let email_local = format!("{}.{}", person.first, person.last).to_lowercase();
    Employee {
        id: person.id.into(),
        company_id: person.company.into(),
        insurance_plan_id: person.plan.into(),
        first_name: person.first.to_owned(),
        last_name: person.last.to_owned(),
        email: format!("{email_local}@{}.example.com", person.company),
        phone: format!("(555) 01{}", person.id.trim_start_matches("emp-")),
        position: person.position.to_owned(),
        department: person.department.to_owned(),
        hire_date: person.hired,
        date_of_birth: person.born,
        address: home,
        emergency_contact: EmergencyContact {
            name: emergency.0.to_owned(),
            relationship: emergency.1.to_owned(),
            phone: "(555) 0199".to_owned(),
        },
        dependents,
        medical_history,
    }
}

fn dependent(name: &str, relationship: DependentRelationship, born: NaiveDate) -> Dependent {
    Dependent {
        name: name.to_owned(),
        relationship,
        date_of_birth: born,
    }
}

fn history(conditions: &[&str], allergies: &[&str], medications: &[&str]) -> MedicalHistory {
    let owned = |items: &[&str]| -> BTreeSet<String> { items.iter().map(|s| (*s).to_owned()).collect() };
    MedicalHistory {
        conditions: owned(conditions),
        allergies: owned(allergies),
        medications: owned(medications),
    }
}

/// The four seed insurance plans, `plan-001` through `plan-004`.
pub fn demo_insurance_plans() -> Vec<InsurancePlan> {
    vec![
        plan(
            "plan-001",
            "Premium Health Plus",
            "Comprehensive coverage with low deductibles and a broad provider network.",
            [90, 80, 70, 85],
            45_000,
            (20, 80),
            500,
            3_000,
        ),
        plan(
            "plan-002",
            "Standard Care",
            "Balanced coverage for everyday medical needs.",
            [80, 60, 50, 70],
            32_000,
            (30, 70),
            1_000,
            5_000,
        ),
        plan(
            "plan-003",
            "Basic Coverage",
            "Essential medical protection at an affordable premium.",
            [70, 40, 30, 50],
            18_000,
            (40, 60),
            2_500,
            7_500,
        ),
        plan(
            "plan-004",
            "Family Shield",
            "Family-oriented plan with strong pediatric, dental, and vision benefits.",
            [85, 85, 80, 80],
            61_000,
            (25, 75),
            750,
            4_000,
        ),
    ]
}

/// The three seed companies.
pub fn demo_companies() -> Vec<Company> {
    let plans = |ids: &[&str]| -> Vec<InsurancePlanId> {
        ids.iter().map(|id| InsurancePlanId::from(*id)).collect()
    };
    vec![
        Company {
            id: "demo".into(),
            name: "Demo Medical Group".to_owned(),
            industry: "Healthcare".to_owned(),
            address: address("100 Wellness Ave", "Austin", "TX", "78701"),
            contact_person: ContactPerson {
                name: "Maria Gonzalez".to_owned(),
                email: "maria.gonzalez@demo.example.com".to_owned(),
                phone: "(555) 0100".to_owned(),
                position: "HR Director".to_owned(),
            },
            website: "https://demo.example.com".to_owned(),
            employee_count: 150,
            registered_date: ymd(2019, 3, 12),
            insurance_plans: plans(&["plan-001", "plan-002", "plan-003", "plan-004"]),
            billing_info: BillingInfo {
                payment_method: PaymentMethod::CreditCard,
                billing_cycle: BillingCycle::Monthly,
                billing_email: "billing@demo.example.com".to_owned(),
                billing_address: None,
            },
            subscription: Subscription {
                tier: SubscriptionTier::Enterprise,
                status: SubscriptionStatus::Active,
                start_date: ymd(2019, 4, 1),
                renewal_date: Some(ymd(2026, 4, 1)),
            },
        },
        Company {
            id: "company-002".into(),
            name: "Northwind Logistics".to_owned(),
            industry: "Transportation".to_owned(),
            address: address("42 Harbor Blvd", "Seattle", "WA", "98101"),
            contact_person: ContactPerson {
                name: "James Whitaker".to_owned(),
                email: "james.whitaker@company-002.example.com".to_owned(),
                phone: "(555) 0200".to_owned(),
                position: "Benefits Manager".to_owned(),
            },
            website: "https://northwind.example.com".to_owned(),
            employee_count: 85,
            registered_date: ymd(2020, 9, 3),
            insurance_plans: plans(&["plan-002", "plan-003"]),
            billing_info: BillingInfo {
                payment_method: PaymentMethod::BankTransfer,
                billing_cycle: BillingCycle::Quarterly,
                billing_email: "ap@company-002.example.com".to_owned(),
                billing_address: Some(address("PO Box 4410", "Seattle", "WA", "98111")),
            },
            subscription: Subscription {
                tier: SubscriptionTier::Professional,
                status: SubscriptionStatus::Active,
                start_date: ymd(2020, 10, 1),
                renewal_date: Some(ymd(2026, 10, 1)),
            },
        },
        Company {
            id: "company-003".into(),
            name: "Brightside Dental Studio".to_owned(),
            industry: "Dental Care".to_owned(),
            address: address("7 Elm Street", "Denver", "CO", "80202"),
            contact_person: ContactPerson {
                name: "Priya Raman".to_owned(),
                email: "priya.raman@company-003.example.com".to_owned(),
                phone: "(555) 0300".to_owned(),
                position: "Practice Owner".to_owned(),
            },
            website: "https://brightside.example.com".to_owned(),
            employee_count: 12,
            registered_date: ymd(2023, 1, 20),
            insurance_plans: plans(&["plan-001", "plan-004"]),
            billing_info: BillingInfo {
                payment_method: PaymentMethod::Invoice,
                billing_cycle: BillingCycle::Annually,
                billing_email: "office@company-003.example.com".to_owned(),
                billing_address: None,
            },
            subscription: Subscription {
                tier: SubscriptionTier::Basic,
                status: SubscriptionStatus::Trial,
                start_date: ymd(2023, 2, 1),
                renewal_date: None,
            },
        },
    ]
}

/// The eight seed employees, `emp-001` through `emp-008`.
#[allow(clippy::too_many_lines)]
pub fn demo_employees() -> Vec<Employee> {
    vec![
        employee(
            &Person {
                id: "emp-001",
                company: "demo",
                plan: "plan-001",
                first: "John",
                last: "Smith",
                position: "Physician",
                department: "Internal Medicine",
                hired: ymd(2019, 5, 6),
                born: ymd(1980, 7, 14),
            },
            address("12 Oak Lane", "Austin", "TX", "78702"),
            ("Jane Smith", "Spouse"),
            vec![
                dependent("Jane Smith", DependentRelationship::Spouse, ymd(1982, 2, 9)),
                dependent("Lily Smith", DependentRelationship::Child, ymd(2012, 11, 30)),
            ],
            history(&["Hypertension"], &["Penicillin"], &["Lisinopril"]),
        ),
        employee(
            &Person {
                id: "emp-002",
                company: "demo",
                plan: "plan-002",
                first: "Emily",
                last: "Chen",
                position: "Registered Nurse",
                department: "Emergency",
                hired: ymd(2020, 1, 13),
                born: ymd(1991, 3, 22),
            },
            address("88 Cedar Court", "Austin", "TX", "78704"),
            ("David Chen", "Brother"),
            Vec::new(),
            history(&[], &["Latex"], &[]),
        ),
        employee(
            &Person {
                id: "emp-003",
                company: "company-002",
                plan: "plan-002",
                first: "Marcus",
                last: "Johnson",
                position: "Fleet Coordinator",
                department: "Operations",
                hired: ymd(2021, 2, 1),
                born: ymd(1987, 9, 5),
            },
            address("310 Pine Street", "Seattle", "WA", "98104"),
            ("Alicia Johnson", "Spouse"),
            vec![dependent(
                "Alicia Johnson",
                DependentRelationship::Spouse,
                ymd(1988, 6, 17),
            )],
            history(&["Asthma"], &[], &["Albuterol"]),
        ),
        employee(
            &Person {
                id: "emp-004",
                company: "company-002",
                plan: "plan-003",
                first: "Sofia",
                last: "Martinez",
                position: "Dispatcher",
                department: "Operations",
                hired: ymd(2022, 7, 18),
                born: ymd(1995, 12, 1),
            },
            address("57 Lakeview Drive", "Tacoma", "WA", "98402"),
            ("Rosa Martinez", "Mother"),
            Vec::new(),
            MedicalHistory::default(),
        ),
        employee(
            &Person {
                id: "emp-005",
                company: "demo",
                plan: "plan-004",
                first: "Robert",
                last: "Williams",
                position: "Practice Administrator",
                department: "Administration",
                hired: ymd(2019, 8, 26),
                born: ymd(1976, 1, 30),
            },
            address("4 Birch Road", "Round Rock", "TX", "78664"),
            ("Karen Williams", "Spouse"),
            vec![
                dependent("Karen Williams", DependentRelationship::Spouse, ymd(1978, 5, 4)),
                dependent("Ethan Williams", DependentRelationship::Child, ymd(2008, 8, 19)),
                dependent("Mia Williams", DependentRelationship::Child, ymd(2011, 3, 2)),
            ],
            history(&["Type 2 Diabetes"], &["Shellfish"], &["Metformin"]),
        ),
        employee(
            &Person {
                id: "emp-006",
                company: "company-003",
                plan: "plan-001",
                first: "Aisha",
                last: "Patel",
                position: "Dental Hygienist",
                department: "Clinical",
                hired: ymd(2023, 3, 6),
                born: ymd(1993, 10, 11),
            },
            address("920 Aspen Way", "Denver", "CO", "80205"),
            ("Nikhil Patel", "Father"),
            Vec::new(),
            history(&[], &[], &[]),
        ),
        employee(
            &Person {
                id: "emp-007",
                company: "demo",
                plan: "plan-003",
                first: "Daniel",
                last: "Kim",
                position: "Medical Billing Specialist",
                department: "Finance",
                hired: ymd(2021, 11, 8),
                born: ymd(1989, 4, 27),
            },
            address("65 Willow Bend", "Austin", "TX", "78745"),
            ("Grace Kim", "Partner"),
            vec![dependent(
                "Grace Kim",
                DependentRelationship::DomesticPartner,
                ymd(1990, 1, 15),
            )],
            history(&["Seasonal allergies"], &["Pollen"], &["Cetirizine"]),
        ),
        employee(
            &Person {
                id: "emp-008",
                company: "company-003",
                plan: "plan-004",
                first: "Olivia",
                last: "Brown",
                position: "Front Desk Coordinator",
                department: "Reception",
                hired: ymd(2023, 5, 15),
                born: ymd(1998, 2, 8),
            },
            address("18 Spruce Circle", "Aurora", "CO", "80010"),
            ("Henry Brown", "Father"),
            vec![dependent(
                "Noah Brown",
                DependentRelationship::Child,
                ymd(2021, 9, 23),
            )],
            MedicalHistory::default(),
        ),
    ]
}

/// The complete built-in dataset.
pub fn demo_seed() -> SeedData {
    SeedData {
        companies: demo_companies(),
        employees: demo_employees(),
        insurance_plans: demo_insurance_plans(),
    }
}

/// Build a [`Directory`] from the built-in dataset.
///
/// # Errors
///
/// Returns [`DirectoryError`] if the hard-coded records are inconsistent
/// (should not happen; the crate's tests build this dataset).
pub fn demo_directory() -> Result<Directory, DirectoryError> {
    demo_seed().into_directory()
}

#[cfg(test)]
mod tests {
    use practice_types::{CompanyId, EmployeeId};

    use super::*;
    use crate::integrity::{Severity, audit};

    #[test]
    fn demo_seed_builds() {
        let dir = demo_directory();
        assert!(dir.is_ok());
        let dir = dir.unwrap_or_default();
        assert_eq!(dir.insurance_plan_count(), 4);
        assert_eq!(dir.company_count(), 3);
        assert_eq!(dir.employee_count(), 8);
    }

    #[test]
    fn demo_seed_only_drifts_on_headcount() {
        let dir = demo_directory().unwrap_or_default();
        let report = audit(&dir);
        assert_eq!(report.count(Severity::Warning), 0);
        assert_eq!(report.count(Severity::Info), 3);
    }

    #[test]
    fn derived_contact_details() {
        let dir = demo_directory().unwrap_or_default();
        let emp = dir.employee_by_id(&EmployeeId::from("emp-003"));
        assert_eq!(
            emp.map(|e| e.email.as_str()),
            Some("marcus.johnson@company-002.example.com")
        );
        assert_eq!(emp.map(|e| e.phone.as_str()), Some("(555) 01003"));
        assert_eq!(
            dir.company_by_id(&CompanyId::from("demo")).map(|c| c.employee_count),
            Some(150)
        );
    }
}
