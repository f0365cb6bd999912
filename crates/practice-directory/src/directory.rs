//! The directory: companies, employees, and insurance plans with indices.
//!
//! A [`Directory`] owns the three record collections in seed order and the
//! secondary indices built alongside them:
//!
//! - one `id -> position` map per entity type for point lookups,
//! - `employees_by_company`: `company id -> positions of its employees`,
//!   built in a single pass so each list keeps seed order.
//!
//! The plans offered by a company need no index of their own; they are
//! resolved on demand from `Company.insurance_plans` through the plan map.
//!
//! Construction validates referential integrity and uniqueness and fails on
//! the first violation, so every handle a caller holds is consistent. No
//! method mutates a built directory. Edits (see [`crate::edit`]) produce a
//! new, re-validated directory instead.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use practice_types::{Company, CompanyId, Employee, EmployeeId, InsurancePlan, InsurancePlanId};
use tracing::debug;

use crate::error::DirectoryError;

/// Immutable, validated store of companies, employees, and insurance plans.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    /// All companies, in seed order.
    companies: Vec<Company>,
    /// All employees, in seed order.
    employees: Vec<Employee>,
    /// All insurance plans, in seed order.
    insurance_plans: Vec<InsurancePlan>,
    /// Company id -> position in `companies`.
    company_index: HashMap<CompanyId, usize>,
    /// Employee id -> position in `employees`.
    employee_index: HashMap<EmployeeId, usize>,
    /// Plan id -> position in `insurance_plans`.
    plan_index: HashMap<InsurancePlanId, usize>,
    /// Company id -> positions in `employees`, ascending.
    employees_by_company: HashMap<CompanyId, Vec<usize>>,
}

impl Directory {
    /// Build a directory from three record sequences.
    ///
    /// Checks, in order: plan ids are unique; company ids are unique; every
    /// plan a company offers exists and is listed once; employee ids are
    /// unique; every employee's company exists; every employee's plan
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns the first [`DirectoryError`] found. A directory is never
    /// built from inconsistent records.
    pub fn new(
        companies: Vec<Company>,
        employees: Vec<Employee>,
        insurance_plans: Vec<InsurancePlan>,
    ) -> Result<Self, DirectoryError> {
        let plan_index = index_unique(&insurance_plans, |p| &p.id, |id| {
            DirectoryError::DuplicateInsurancePlan(id.clone())
        })?;
        let company_index = index_unique(&companies, |c| &c.id, |id| {
            DirectoryError::DuplicateCompany(id.clone())
        })?;

        for company in &companies {
            let mut seen = HashSet::new();
            for plan in &company.insurance_plans {
                if !plan_index.contains_key(plan) {
                    return Err(DirectoryError::UnknownCompanyPlan {
                        company: company.id.clone(),
                        plan: plan.clone(),
                    });
                }
                if !seen.insert(plan) {
                    return Err(DirectoryError::DuplicateCompanyPlan {
                        company: company.id.clone(),
                        plan: plan.clone(),
                    });
                }
            }
        }

        let employee_index = index_unique(&employees, |e| &e.id, |id| {
            DirectoryError::DuplicateEmployee(id.clone())
        })?;

        let mut employees_by_company: HashMap<CompanyId, Vec<usize>> = HashMap::new();
        for (position, employee) in employees.iter().enumerate() {
            if !company_index.contains_key(&employee.company_id) {
                return Err(DirectoryError::UnknownEmployeeCompany {
                    employee: employee.id.clone(),
                    company: employee.company_id.clone(),
                });
            }
            if !plan_index.contains_key(&employee.insurance_plan_id) {
                return Err(DirectoryError::UnknownEmployeePlan {
                    employee: employee.id.clone(),
                    plan: employee.insurance_plan_id.clone(),
                });
            }
            employees_by_company
                .entry(employee.company_id.clone())
                .or_default()
                .push(position);
        }

        debug!(
            companies = companies.len(),
            employees = employees.len(),
            insurance_plans = insurance_plans.len(),
            "Directory built"
        );

        Ok(Self {
            companies,
            employees,
            insurance_plans,
            company_index,
            employee_index,
            plan_index,
            employees_by_company,
        })
    }

    // -------------------------------------------------------------------
    // Collections
    // -------------------------------------------------------------------

    /// All companies, in seed order.
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// All employees, in seed order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// All insurance plans, in seed order.
    pub fn insurance_plans(&self) -> &[InsurancePlan] {
        &self.insurance_plans
    }

    /// Number of companies.
    pub const fn company_count(&self) -> usize {
        self.companies.len()
    }

    /// Number of employees.
    pub const fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Number of insurance plans.
    pub const fn insurance_plan_count(&self) -> usize {
        self.insurance_plans.len()
    }

    // -------------------------------------------------------------------
    // Point lookups
    // -------------------------------------------------------------------

    /// Look up a company by id.
    pub fn company_by_id(&self, id: &CompanyId) -> Option<&Company> {
        self.company_index
            .get(id)
            .and_then(|&position| self.companies.get(position))
    }

    /// Look up an employee by id.
    pub fn employee_by_id(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employee_index
            .get(id)
            .and_then(|&position| self.employees.get(position))
    }

    /// Look up an insurance plan by id.
    pub fn insurance_plan_by_id(&self, id: &InsurancePlanId) -> Option<&InsurancePlan> {
        self.plan_index
            .get(id)
            .and_then(|&position| self.insurance_plans.get(position))
    }

    // -------------------------------------------------------------------
    // Relationship queries
    // -------------------------------------------------------------------

    /// Employees of a company, in seed order.
    ///
    /// Empty for an unknown company or one with no employees on file.
    pub fn employees_by_company(&self, company: &CompanyId) -> Vec<&Employee> {
        let Some(positions) = self.employees_by_company.get(company) else {
            return Vec::new();
        };
        positions
            .iter()
            .filter_map(|&position| self.employees.get(position))
            .collect()
    }

    /// Insurance plans a company offers, in the order the company lists them.
    ///
    /// Empty for an unknown company. Plan ids are guaranteed to resolve by
    /// construction; one that somehow did not would be skipped.
    pub fn insurance_plans_for_company(&self, company: &CompanyId) -> Vec<&InsurancePlan> {
        let Some(company) = self.company_by_id(company) else {
            return Vec::new();
        };
        company
            .insurance_plans
            .iter()
            .filter_map(|plan| self.insurance_plan_by_id(plan))
            .collect()
    }

    /// The company an employee works for.
    pub fn employer_of(&self, employee: &EmployeeId) -> Option<&Company> {
        self.employee_by_id(employee)
            .and_then(|e| self.company_by_id(&e.company_id))
    }

    /// The plan an employee is enrolled in.
    pub fn insurance_plan_of(&self, employee: &EmployeeId) -> Option<&InsurancePlan> {
        self.employee_by_id(employee)
            .and_then(|e| self.insurance_plan_by_id(&e.insurance_plan_id))
    }

    /// Companies offering a plan, in seed order.
    pub fn companies_offering(&self, plan: &InsurancePlanId) -> Vec<&Company> {
        self.companies
            .iter()
            .filter(|c| c.offers_plan(plan))
            .collect()
    }

    /// Employees enrolled in a plan, in seed order.
    pub fn enrolled_employees(&self, plan: &InsurancePlanId) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| &e.insurance_plan_id == plan)
            .collect()
    }

    /// Number of employee records on file for a company.
    ///
    /// This is derived from the employee collection and may differ from the
    /// company's declared `employee_count`.
    pub fn actual_employee_count(&self, company: &CompanyId) -> usize {
        self.employees_by_company.get(company).map_or(0, Vec::len)
    }
}

/// Build an `id -> position` map, rejecting the first repeated id.
fn index_unique<T, K, F, E>(
    records: &[T],
    key: F,
    duplicate: E,
) -> Result<HashMap<K, usize>, DirectoryError>
where
    K: Clone + Eq + Hash,
    F: Fn(&T) -> &K,
    E: Fn(&K) -> DirectoryError,
{
    let mut index = HashMap::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        let id = key(record);
        if index.insert(id.clone(), position).is_some() {
            return Err(duplicate(id));
        }
    }
    Ok(index)
}
