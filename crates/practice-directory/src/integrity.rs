//! Soft-invariant audit over a built [`Directory`].
//!
//! Construction already guarantees hard referential integrity: every
//! foreign key resolves and every id is unique. The rules checked here are
//! ones the data is expected to follow but that do not make the directory
//! unusable when broken:
//!
//! - an employee's plan is one their employer offers,
//! - a plan's employee and employer contributions sum to 100,
//! - coverage percentages are at most 100,
//! - currency amounts are not negative,
//! - the deductible does not exceed the out-of-pocket maximum,
//! - a company's declared headcount matches the employee records on file.
//!
//! [`audit`] never fails; it returns an [`IntegrityReport`] listing every
//! [`IntegrityAnomaly`] found, in a stable order (plans, then companies,
//! then employees, each in seed order).

use practice_types::{CompanyId, CoverageCategory, EmployeeId, InsurancePlan, InsurancePlanId};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

use crate::directory::Directory;

/// How much attention an anomaly deserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    /// Expected drift; reported for visibility only.
    Info,
    /// Data that is probably wrong and should be corrected.
    Warning,
}

/// Which currency field of a plan an amount came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AmountField {
    /// `premium.monthly`
    MonthlyPremium,
    /// `deductible`
    Deductible,
    /// `out_of_pocket_max`
    OutOfPocketMax,
}

/// A single soft-invariant violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum IntegrityAnomaly {
    /// An employee is enrolled in a plan their employer does not offer.
    PlanNotOfferedByEmployer {
        /// The employee.
        employee: EmployeeId,
        /// Their employer.
        company: CompanyId,
        /// The plan they are enrolled in.
        plan: InsurancePlanId,
    },

    /// Employee and employer contributions do not sum to 100.
    ContributionMismatch {
        /// The plan.
        plan: InsurancePlanId,
        /// Employee contribution percentage.
        employee_share: u8,
        /// Employer contribution percentage.
        employer_share: u8,
    },

    /// A coverage percentage exceeds 100.
    CoverageOutOfRange {
        /// The plan.
        plan: InsurancePlanId,
        /// The offending category.
        category: CoverageCategory,
        /// The recorded percentage.
        value: u8,
    },

    /// A currency amount is negative.
    NegativeAmount {
        /// The plan.
        plan: InsurancePlanId,
        /// Which amount.
        field: AmountField,
        /// The recorded amount.
        amount: Decimal,
    },

    /// The deductible is larger than the out-of-pocket maximum.
    DeductibleExceedsOutOfPocket {
        /// The plan.
        plan: InsurancePlanId,
        /// The deductible.
        deductible: Decimal,
        /// The out-of-pocket maximum.
        out_of_pocket_max: Decimal,
    },

    /// A company's declared headcount differs from its employee records.
    EmployeeCountMismatch {
        /// The company.
        company: CompanyId,
        /// `Company.employee_count`.
        declared: u32,
        /// Employee records on file.
        actual: usize,
    },
}

impl IntegrityAnomaly {
    /// Severity of this anomaly.
    ///
    /// Declared headcount is an independently maintained field, so a
    /// mismatch is informational. Everything else is a warning.
    pub const fn severity(&self) -> Severity {
        match self {
            Self::EmployeeCountMismatch { .. } => Severity::Info,
            Self::PlanNotOfferedByEmployer { .. }
            | Self::ContributionMismatch { .. }
            | Self::CoverageOutOfRange { .. }
            | Self::NegativeAmount { .. }
            | Self::DeductibleExceedsOutOfPocket { .. } => Severity::Warning,
        }
    }
}

/// Everything [`audit`] found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    /// Anomalies in discovery order.
    pub anomalies: Vec<IntegrityAnomaly>,
}

impl IntegrityReport {
    /// Whether nothing at all was found.
    pub fn is_clean(&self) -> bool {
        self.anomalies.is_empty()
    }

    /// Number of anomalies at exactly `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.anomalies
            .iter()
            .filter(|a| a.severity() == severity)
            .count()
    }

    /// Whether any warning-level anomaly was found.
    pub fn has_warnings(&self) -> bool {
        self.anomalies
            .iter()
            .any(|a| a.severity() == Severity::Warning)
    }
}

/// Check every soft invariant across the directory.
pub fn audit(directory: &Directory) -> IntegrityReport {
    let mut anomalies = Vec::new();

    for plan in directory.insurance_plans() {
        check_plan(plan, &mut anomalies);
    }

    for company in directory.companies() {
        let actual = directory.actual_employee_count(&company.id);
        let matches = usize::try_from(company.employee_count).is_ok_and(|declared| declared == actual);
        if !matches {
            anomalies.push(IntegrityAnomaly::EmployeeCountMismatch {
                company: company.id.clone(),
                declared: company.employee_count,
                actual,
            });
        }
    }

    for employee in directory.employees() {
        let Some(company) = directory.company_by_id(&employee.company_id) else {
            continue;
        };
        if !company.offers_plan(&employee.insurance_plan_id) {
            anomalies.push(IntegrityAnomaly::PlanNotOfferedByEmployer {
                employee: employee.id.clone(),
                company: company.id.clone(),
                plan: employee.insurance_plan_id.clone(),
            });
        }
    }

    let report = IntegrityReport { anomalies };
    for anomaly in report
        .anomalies
        .iter()
        .filter(|a| a.severity() == Severity::Warning)
    {
        warn!(?anomaly, "Directory integrity anomaly");
    }
    info!(
        warnings = report.count(Severity::Warning),
        info = report.count(Severity::Info),
        "Directory audit complete"
    );
    report
}

/// Per-plan checks, appended in a fixed order.
fn check_plan(plan: &InsurancePlan, anomalies: &mut Vec<IntegrityAnomaly>) {
    if plan.premium.contribution_total() != 100 {
        anomalies.push(IntegrityAnomaly::ContributionMismatch {
            plan: plan.id.clone(),
            employee_share: plan.premium.employee_contribution,
            employer_share: plan.premium.employer_contribution,
        });
    }

    for (category, value) in plan.coverage.entries() {
        if value > 100 {
            anomalies.push(IntegrityAnomaly::CoverageOutOfRange {
                plan: plan.id.clone(),
                category,
                value,
            });
        }
    }

    let amounts = [
        (AmountField::MonthlyPremium, plan.premium.monthly),
        (AmountField::Deductible, plan.deductible),
        (AmountField::OutOfPocketMax, plan.out_of_pocket_max),
    ];
    for (field, amount) in amounts {
        if amount < Decimal::ZERO {
            anomalies.push(IntegrityAnomaly::NegativeAmount {
                plan: plan.id.clone(),
                field,
                amount,
            });
        }
    }

    if plan.deductible > plan.out_of_pocket_max {
        anomalies.push(IntegrityAnomaly::DeductibleExceedsOutOfPocket {
            plan: plan.id.clone(),
            deductible: plan.deductible,
            out_of_pocket_max: plan.out_of_pocket_max,
        });
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::test_support::{company, employee, plan};

    fn headcount(id: &str, declared: u32, plans: &[&str]) -> practice_types::Company {
        let mut c = company(id, plans);
        c.employee_count = declared;
        c
    }

    #[test]
    fn consistent_directory_is_clean() {
        let dir = Directory::new(
            vec![headcount("acme", 1, &["p1"])],
            vec![employee("e1", "acme", "p1")],
            vec![plan("p1", "Bronze")],
        )
        .unwrap_or_default();
        let report = audit(&dir);
        assert!(report.is_clean());
        assert!(!report.has_warnings());
    }

    #[test]
    fn flags_plan_not_offered_by_employer() {
        let dir = Directory::new(
            vec![headcount("acme", 1, &["p1"])],
            vec![employee("e1", "acme", "p2")],
            vec![plan("p1", "Bronze"), plan("p2", "Silver")],
        )
        .unwrap_or_default();
        let report = audit(&dir);
        assert_eq!(
            report.anomalies,
            vec![IntegrityAnomaly::PlanNotOfferedByEmployer {
                employee: "e1".into(),
                company: "acme".into(),
                plan: "p2".into(),
            }]
        );
        assert!(report.has_warnings());
    }

    #[test]
    fn flags_plan_shape_problems_in_order() {
        let mut bad = plan("p1", "Broken");
        bad.premium.employee_contribution = 30;
        bad.coverage.dental = 120;
        bad.deductible = dec!(6000);
        bad.premium.monthly = dec!(-1);
        let dir = Directory::new(Vec::new(), Vec::new(), vec![bad]).unwrap_or_default();
        let kinds: Vec<&'static str> = audit(&dir)
            .anomalies
            .iter()
            .map(|a| match a {
                IntegrityAnomaly::ContributionMismatch { .. } => "contribution",
                IntegrityAnomaly::CoverageOutOfRange { .. } => "coverage",
                IntegrityAnomaly::NegativeAmount { .. } => "negative",
                IntegrityAnomaly::DeductibleExceedsOutOfPocket { .. } => "deductible",
                IntegrityAnomaly::PlanNotOfferedByEmployer { .. }
                | IntegrityAnomaly::EmployeeCountMismatch { .. } => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["contribution", "coverage", "negative", "deductible"]);
    }

    #[test]
    fn headcount_mismatch_is_informational() {
        let dir = Directory::new(
            vec![headcount("acme", 250, &["p1"])],
            vec![employee("e1", "acme", "p1")],
            vec![plan("p1", "Bronze")],
        )
        .unwrap_or_default();
        let report = audit(&dir);
        assert_eq!(report.count(Severity::Info), 1);
        assert_eq!(report.count(Severity::Warning), 0);
        assert!(!report.is_clean());
        assert!(!report.has_warnings());
    }

    #[test]
    fn report_serializes_with_kind_tag() {
        let report = IntegrityReport {
            anomalies: vec![IntegrityAnomaly::EmployeeCountMismatch {
                company: "acme".into(),
                declared: 3,
                actual: 1,
            }],
        };
        let value = serde_json::to_value(&report).unwrap_or_default();
        assert_eq!(value["anomalies"][0]["kind"], "employeeCountMismatch");
        assert_eq!(value["anomalies"][0]["company"], "acme");
    }
}
