use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// Server-assigned identifier of a cat record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatId(pub i64);

impl fmt::Display for CatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CatId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(CatId)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cat {
    pub id: CatId,
    pub name: String,
    pub experience_years: i64,
    pub breed: String,
    pub salary: f64,
}

/// Create payload. Only produced by [`crate::core::validation::validate_draft`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCat {
    pub name: String,
    pub experience_years: i64,
    pub breed: String,
    pub salary: f64,
}

/// Non-finite salaries serialize as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalaryUpdate {
    pub salary: f64,
}

/// Reads the longest leading decimal number from free text, the way a
/// browser's `parseFloat` does: `"1200 USD"` is 1200, `"abc"` is NaN.
pub fn parse_leading_number(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if has_digits || frac_end > end + 1 {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// One entry of the breed reference response. Every other field is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Breed {
    pub name: String,
}

/// Uncommitted form input for a new cat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub experience_years: Option<f64>,
    pub breed: String,
    pub salary: Option<f64>,
}

impl Draft {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Text that isn't a number clears the field, like an empty number input.
    /// Fractions are kept so validation can reject them with their own message.
    pub fn set_experience_years(&mut self, raw: &str) {
        self.experience_years = raw.trim().parse().ok();
    }

    pub fn set_breed(&mut self, breed: impl Into<String>) {
        self.breed = breed.into();
    }

    pub fn set_salary(&mut self, raw: &str) {
        self.salary = raw.trim().parse().ok();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
