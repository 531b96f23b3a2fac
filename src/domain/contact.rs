use std::hash::{Hash, Hasher};

use super::*;
pub use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Contact {
    #[serde(default = "Uuid::new_v4")] // Files written before ids existed.
    pub id: Uuid,

    pub name: String,
    pub phone: String,

    #[serde(default)]
    pub email: String,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

pub const NAME_REQUIREMENT: &str = "Name must start with a letter and be at most 50 characters; \
    spaces, dots, hyphens and apostrophes are allowed inside it";

pub const PHONE_REQUIREMENT: &str =
    "Number must contain 7 to 15 digits, may begin with + and may be grouped with spaces or hyphens";

pub const EMAIL_REQUIREMENT: &str =
    "Email is optional; when given it must look like user@host.tld and be at most 254 characters";

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        let now = Utc::now();
        Contact {
            id: Uuid::new_v4(),
            name: name.into(),
            phone: phone.into(),
            email: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn validate_name(&self) -> Result<bool, AppError> {
        // Must begin with alphabet
        // Name may contain spaces, hyphens, and apostrophe between alphabets
        // Name may end with number or alphabet
        let re = Regex::new(r"^[A-Za-z][A-Za-z\s'\-\.]*\w*$")?;
        Ok((self.name.len() <= 50) && re.is_match(&self.name))
    }

    pub fn validate_number(&self) -> Result<bool, AppError> {
        // Optional "+" then digits, spaces and hyphens only
        let re = Regex::new(r"^\+?[\d\s\-]+$")?;
        let digits = self.phone.chars().filter(|c| c.is_ascii_digit()).count();
        Ok(re.is_match(&self.phone) && (7..=15).contains(&digits))
    }

    pub fn validate_email(&self) -> Result<bool, AppError> {
        // Email can be empty
        // Or email must contain '@' char and contain '.' char somewhere after
        let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")?;
        Ok(self.email.is_empty() || (re.is_match(&self.email) && self.email.len() <= 254))
    }

    /// Runs every field check and reports the first requirement that fails.
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.validate_name()? {
            return Err(AppError::Validation(NAME_REQUIREMENT.to_string()));
        }
        if !self.validate_number()? {
            return Err(AppError::Validation(PHONE_REQUIREMENT.to_string()));
        }
        if !self.validate_email()? {
            return Err(AppError::Validation(EMAIL_REQUIREMENT.to_string()));
        }
        Ok(())
    }
}

// Numbers without significant digits ("", "0", "+234") only equal the same raw text.
impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && (phone_number_matches(&self.phone, &other.phone) || self.phone == other.phone)
    }
}

impl Eq for Contact {}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        let digits = significant_digits(&self.phone);
        if digits.is_empty() {
            self.phone.hash(state);
        } else {
            digits.hash(state);
        }
    }
}

/// Two numbers match when their digits agree once the country code
/// ("+" followed by three digits) or a single trunk "0" is dropped.
pub fn phone_number_matches(phone1: &str, phone2: &str) -> bool {
    let rest_of_phone1 = significant_digits(phone1);
    let rest_of_phone2 = significant_digits(phone2);

    if rest_of_phone1.is_empty() || rest_of_phone2.is_empty() {
        return false;
    }
    rest_of_phone1 == rest_of_phone2
}

fn significant_digits(phone: &str) -> Vec<char> {
    let digits: Vec<char> = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if phone.trim_start().starts_with('+') {
        let [_code1, _code2, _code3, rest @ ..] = digits.as_slice() else {
            return Vec::new();
        };
        return rest.to_vec();
    }

    match digits.as_slice() {
        ['0', rest @ ..] => rest.to_vec(),
        all => all.to_vec(),
    }
}
