//! Minimal record builders shared by the unit tests in this crate.

use chrono::NaiveDate;
use practice_types::{
    Address, BillingCycle, BillingInfo, Company, ContactPerson, Coverage, EmergencyContact,
    Employee, InsurancePlan, InsurancePlanId, MedicalHistory, PaymentMethod, Premium,
    Subscription, SubscriptionStatus, SubscriptionTier,
};
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn address() -> Address {
    Address {
        street: "1 Test Way".to_owned(),
        city: "Testville".to_owned(),
        state: "TS".to_owned(),
        zip_code: "00000".to_owned(),
        country: "USA".to_owned(),
    }
}

/// A well-formed plan: 20/80 split, deductible below the out-of-pocket max.
pub fn plan(id: &str, name: &str) -> InsurancePlan {
    InsurancePlan {
        id: id.into(),
        name: name.to_owned(),
        description: format!("{name} test plan"),
        coverage: Coverage {
            medical: 80,
            dental: 50,
            vision: 50,
            prescription: 70,
        },
        premium: Premium {
            monthly: Decimal::new(30_000, 2),
            employee_contribution: 20,
            employer_contribution: 80,
        },
        deductible: Decimal::new(1_000, 0),
        out_of_pocket_max: Decimal::new(5_000, 0),
    }
}

/// A company declaring 50 employees and offering `plans` in that order.
pub fn company(id: &str, plans: &[&str]) -> Company {
    Company {
        id: id.into(),
        name: format!("{id} Inc."),
        industry: "Testing".to_owned(),
        address: address(),
        contact_person: ContactPerson {
            name: "Pat Contact".to_owned(),
            email: format!("pat@{id}.test"),
            phone: "555-0000".to_owned(),
            position: "Office Manager".to_owned(),
        },
        website: format!("https://{id}.test"),
        employee_count: 50,
        registered_date: date(2020, 1, 15),
        insurance_plans: plans.iter().map(|p| InsurancePlanId::from(*p)).collect(),
        billing_info: BillingInfo {
            payment_method: PaymentMethod::Invoice,
            billing_cycle: BillingCycle::Monthly,
            billing_email: format!("billing@{id}.test"),
            billing_address: None,
        },
        subscription: Subscription {
            tier: SubscriptionTier::Basic,
            status: SubscriptionStatus::Active,
            start_date: date(2020, 2, 1),
            renewal_date: None,
        },
    }
}

/// An employee of `company` enrolled in `plan`.
pub fn employee(id: &str, company: &str, plan: &str) -> Employee {
    Employee {
        id: id.into(),
        company_id: company.into(),
        insurance_plan_id: plan.into(),
        first_name: "Test".to_owned(),
        last_name: id.to_owned(),
        email: format!("{id}@{company}.test"),
        phone: "555-0001".to_owned(),
        position: "Associate".to_owned(),
        department: "Operations".to_owned(),
        hire_date: date(2022, 6, 1),
        date_of_birth: date(1990, 4, 20),
        address: address(),
        emergency_contact: EmergencyContact {
            name: "Sam Contact".to_owned(),
            relationship: "Sibling".to_owned(),
            phone: "555-0002".to_owned(),
        },
        dependents: Vec::new(),
        medical_history: MedicalHistory::default(),
    }
}
