//! Copy-on-write edits that return a new, re-validated [`Directory`].
//!
//! A built directory is never mutated. Each edit clones the record
//! collections, applies one insert, replace, or removal, and runs the full
//! construction checks again. The original handle stays valid, so a caller
//! that shares a directory behind an `Arc` publishes an edit by swapping
//! the `Arc`.
//!
//! Replacing a record keeps its position in seed order; inserting appends.

use practice_types::{Company, CompanyId, Employee, EmployeeId, InsurancePlan, InsurancePlanId};
use tracing::debug;

use crate::directory::Directory;
use crate::error::DirectoryError;

impl Directory {
    /// Insert a company, or replace the one with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] if the result fails validation, e.g. the
    /// company offers an unknown plan.
    pub fn with_company(&self, company: Company) -> Result<Self, DirectoryError> {
        debug!(company = %company.id, "Upserting company");
        let mut companies = self.companies().to_vec();
        upsert(&mut companies, company, |c| &c.id);
        Self::new(
            companies,
            self.employees().to_vec(),
            self.insurance_plans().to_vec(),
        )
    }

    /// Insert an employee, or replace the one with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] if the employee's company or plan does
    /// not exist.
    pub fn with_employee(&self, employee: Employee) -> Result<Self, DirectoryError> {
        debug!(employee = %employee.id, "Upserting employee");
        let mut employees = self.employees().to_vec();
        upsert(&mut employees, employee, |e| &e.id);
        Self::new(
            self.companies().to_vec(),
            employees,
            self.insurance_plans().to_vec(),
        )
    }

    /// Insert an insurance plan, or replace the one with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] if the result fails validation.
    pub fn with_insurance_plan(&self, plan: InsurancePlan) -> Result<Self, DirectoryError> {
        debug!(plan = %plan.id, "Upserting insurance plan");
        let mut plans = self.insurance_plans().to_vec();
        upsert(&mut plans, plan, |p| &p.id);
        Self::new(self.companies().to_vec(), self.employees().to_vec(), plans)
    }

    /// Remove an employee.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::EmployeeNotFound`] if no such employee exists.
    pub fn without_employee(&self, id: &EmployeeId) -> Result<Self, DirectoryError> {
        if self.employee_by_id(id).is_none() {
            return Err(DirectoryError::EmployeeNotFound(id.clone()));
        }
        debug!(employee = %id, "Removing employee");
        let employees = self
            .employees()
            .iter()
            .filter(|e| &e.id != id)
            .cloned()
            .collect();
        Self::new(
            self.companies().to_vec(),
            employees,
            self.insurance_plans().to_vec(),
        )
    }

    /// Remove a company that has no employees on file.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::CompanyNotFound`] if no such company exists,
    /// or [`DirectoryError::CompanyHasEmployees`] if employees still
    /// reference it.
    pub fn without_company(&self, id: &CompanyId) -> Result<Self, DirectoryError> {
        if self.company_by_id(id).is_none() {
            return Err(DirectoryError::CompanyNotFound(id.clone()));
        }
        let employees = self.actual_employee_count(id);
        if employees > 0 {
            return Err(DirectoryError::CompanyHasEmployees {
                company: id.clone(),
                employees,
            });
        }
        debug!(company = %id, "Removing company");
        let companies = self
            .companies()
            .iter()
            .filter(|c| &c.id != id)
            .cloned()
            .collect();
        Self::new(
            companies,
            self.employees().to_vec(),
            self.insurance_plans().to_vec(),
        )
    }

    /// Remove an insurance plan that no company offers and no employee is
    /// enrolled in.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::InsurancePlanNotFound`] if no such plan
    /// exists, or [`DirectoryError::InsurancePlanInUse`] if it is still
    /// referenced.
    pub fn without_insurance_plan(&self, id: &InsurancePlanId) -> Result<Self, DirectoryError> {
        if self.insurance_plan_by_id(id).is_none() {
            return Err(DirectoryError::InsurancePlanNotFound(id.clone()));
        }
        if !self.companies_offering(id).is_empty() || !self.enrolled_employees(id).is_empty() {
            return Err(DirectoryError::InsurancePlanInUse(id.clone()));
        }
        debug!(plan = %id, "Removing insurance plan");
        let plans = self
            .insurance_plans()
            .iter()
            .filter(|p| &p.id != id)
            .cloned()
            .collect();
        Self::new(self.companies().to_vec(), self.employees().to_vec(), plans)
    }
}

/// Replace the record whose key matches `record`'s, or append it.
fn upsert<T, K, F>(records: &mut Vec<T>, record: T, key: F)
where
    K: PartialEq,
    F: Fn(&T) -> &K,
{
    if let Some(slot) = records.iter_mut().find(|r| key(r) == key(&record)) {
        *slot = record;
    } else {
        records.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{company, employee, plan};

    fn base() -> Directory {
        Directory::new(
            vec![company("acme", &["p1"]), company("idle", &[])],
            vec![employee("e1", "acme", "p1"), employee("e2", "acme", "p1")],
            vec![plan("p1", "Bronze"), plan("p2", "Silver")],
        )
        .unwrap_or_default()
    }

    #[test]
    fn with_employee_appends_and_leaves_original_untouched() {
        let dir = base();
        let edited = dir.with_employee(employee("e3", "idle", "p2"));
        assert!(edited.is_ok());
        let edited = edited.unwrap_or_default();
        assert_eq!(edited.employee_count(), 3);
        assert_eq!(dir.employee_count(), 2);
        assert_eq!(edited.employees().last().map(|e| e.id.as_str()), Some("e3"));
        assert_eq!(edited.actual_employee_count(&CompanyId::from("idle")), 1);
    }

    #[test]
    fn with_employee_replaces_in_place() {
        let dir = base();
        let mut moved = employee("e1", "idle", "p2");
        moved.position = "Director".to_owned();
        let edited = dir.with_employee(moved).unwrap_or_default();
        assert_eq!(edited.employee_count(), 2);
        assert_eq!(edited.employees().first().map(|e| e.position.as_str()), Some("Director"));
        let acme: Vec<&str> = edited
            .employees_by_company(&CompanyId::from("acme"))
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(acme, vec!["e2"]);
    }

    #[test]
    fn with_employee_rejects_dangling_company() {
        let result = base().with_employee(employee("e9", "ghost", "p1"));
        assert!(matches!(result, Err(DirectoryError::UnknownEmployeeCompany { .. })));
    }

    #[test]
    fn with_company_validates_offered_plans() {
        let dir = base();
        assert!(dir.with_company(company("new", &["p2", "p1"])).is_ok());
        let result = dir.with_company(company("new", &["p7"]));
        assert!(matches!(result, Err(DirectoryError::UnknownCompanyPlan { .. })));
    }

    #[test]
    fn with_insurance_plan_replaces_by_id() {
        let edited = base().with_insurance_plan(plan("p1", "Bronze Plus")).unwrap_or_default();
        assert_eq!(edited.insurance_plan_count(), 2);
        assert_eq!(
            edited.insurance_plan_by_id(&InsurancePlanId::from("p1")).map(|p| p.name.as_str()),
            Some("Bronze Plus")
        );
    }

    #[test]
    fn removals_guard_references() {
        let dir = base();
        assert!(matches!(
            dir.without_company(&CompanyId::from("acme")),
            Err(DirectoryError::CompanyHasEmployees { employees: 2, .. })
        ));
        assert_eq!(
            dir.without_company(&CompanyId::from("ghost")).err(),
            Some(DirectoryError::CompanyNotFound(CompanyId::from("ghost")))
        );
        assert_eq!(
            dir.without_insurance_plan(&InsurancePlanId::from("p1")).err(),
            Some(DirectoryError::InsurancePlanInUse(InsurancePlanId::from("p1")))
        );
        assert_eq!(
            dir.without_employee(&EmployeeId::from("e9")).err(),
            Some(DirectoryError::EmployeeNotFound(EmployeeId::from("e9")))
        );
    }

    #[test]
    fn removals_succeed_when_unreferenced() {
        let dir = base();
        let dir = dir.without_company(&CompanyId::from("idle")).unwrap_or_default();
        assert_eq!(dir.company_count(), 1);
        let dir = dir.without_insurance_plan(&InsurancePlanId::from("p2")).unwrap_or_default();
        assert_eq!(dir.insurance_plan_count(), 1);
        let dir = dir.without_employee(&EmployeeId::from("e1")).unwrap_or_default();
        assert_eq!(dir.employee_count(), 1);
        assert!(dir.employee_by_id(&EmployeeId::from("e1")).is_none());
    }
}
