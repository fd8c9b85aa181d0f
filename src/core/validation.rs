use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::models::{
    Draft,
    NewCat,
};

static DIGITS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern is valid"));

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name must contain letters, not just numbers")]
    Name,

    #[error("Experience must be > 0")]
    ExperienceYears,

    #[error("Experience must be a whole number of years")]
    ExperienceYearsFraction,

    #[error("Breed is required")]
    Breed,

    #[error("Salary must be > 0")]
    Salary,
}

impl ValidationError {
    pub fn rule(&self) -> &'static str {
        match self {
            ValidationError::Name => "name",
            ValidationError::ExperienceYears | ValidationError::ExperienceYearsFraction => {
                "experience_years"
            }
            ValidationError::Breed => "breed",
            ValidationError::Salary => "salary",
        }
    }
}

/// Checks the draft field by field, in form order, and stops at the first failure.
pub fn validate_draft(draft: &Draft) -> Result<NewCat, ValidationError> {
    if draft.name.trim().is_empty() || DIGITS_ONLY.is_match(&draft.name) {
        return Err(ValidationError::Name);
    }

    let experience_years = match draft.experience_years {
        Some(years) if years.is_finite() && years > 0.0 => years,
        _ => return Err(ValidationError::ExperienceYears),
    };
    if experience_years.fract() != 0.0 || experience_years > i64::MAX as f64 {
        return Err(ValidationError::ExperienceYearsFraction);
    }
    let experience_years = experience_years as i64;

    if draft.breed.is_empty() {
        return Err(ValidationError::Breed);
    }

    let salary = match draft.salary {
        Some(salary) if salary.is_finite() && salary > 0.0 => salary,
        _ => return Err(ValidationError::Salary),
    };

    Ok(NewCat { name: draft.name.clone(), experience_years, breed: draft.breed.clone(), salary })
}
