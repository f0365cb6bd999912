//! Error types for the `practice-directory` crate.
//!
//! Every variant is a construction-time integrity violation or a rejected
//! edit. Lookup misses are never errors; they are `None` or an empty `Vec`.

use practice_types::{CompanyId, EmployeeId, InsurancePlanId};

/// Errors that can occur while building or editing a [`Directory`].
///
/// [`Directory`]: crate::Directory
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// Two insurance plans share an identifier.
    #[error("duplicate insurance plan id: {0}")]
    DuplicateInsurancePlan(InsurancePlanId),

    /// Two companies share an identifier.
    #[error("duplicate company id: {0}")]
    DuplicateCompany(CompanyId),

    /// Two employees share an identifier.
    #[error("duplicate employee id: {0}")]
    DuplicateEmployee(EmployeeId),

    /// A company lists a plan that does not exist.
    #[error("company {company} offers unknown insurance plan {plan}")]
    UnknownCompanyPlan {
        /// The offering company.
        company: CompanyId,
        /// The dangling plan reference.
        plan: InsurancePlanId,
    },

    /// A company lists the same plan more than once.
    #[error("company {company} lists insurance plan {plan} more than once")]
    DuplicateCompanyPlan {
        /// The offering company.
        company: CompanyId,
        /// The repeated plan.
        plan: InsurancePlanId,
    },

    /// An employee belongs to a company that does not exist.
    #[error("employee {employee} references unknown company {company}")]
    UnknownEmployeeCompany {
        /// The employee.
        employee: EmployeeId,
        /// The dangling company reference.
        company: CompanyId,
    },

    /// An employee is enrolled in a plan that does not exist.
    #[error("employee {employee} references unknown insurance plan {plan}")]
    UnknownEmployeePlan {
        /// The employee.
        employee: EmployeeId,
        /// The dangling plan reference.
        plan: InsurancePlanId,
    },

    /// An edit targeted a company that is not in the directory.
    #[error("company not found: {0}")]
    CompanyNotFound(CompanyId),

    /// An edit targeted an employee that is not in the directory.
    #[error("employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    /// An edit targeted an insurance plan that is not in the directory.
    #[error("insurance plan not found: {0}")]
    InsurancePlanNotFound(InsurancePlanId),

    /// A company cannot be removed while employees still reference it.
    #[error("company {company} still has {employees} employee(s)")]
    CompanyHasEmployees {
        /// The company.
        company: CompanyId,
        /// How many employees reference it.
        employees: usize,
    },

    /// A plan cannot be removed while a company offers it or an employee
    /// is enrolled in it.
    #[error("insurance plan {0} is still offered or enrolled")]
    InsurancePlanInUse(InsurancePlanId),
}
