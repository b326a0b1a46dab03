use regex::Regex;

use crate::domain::ContactInfo;

pub const DEFAULT_EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.\w+\b";

pub const DEFAULT_PHONE_PATTERN: &str =
    r"\b(?:\+?\(?\d{1,3}\)?[\s.-]?)?(?:\d{10}|\d{5}[\s.-]?\d{5})\b";

#[derive(Debug, Clone)]
pub struct ContactPatterns {
    email: Regex,
    phone: Regex,
}

impl ContactPatterns {
    pub fn new(email_pattern: &str, phone_pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            email: Regex::new(email_pattern)?,
            phone: Regex::new(phone_pattern)?,
        })
    }
}

impl Default for ContactPatterns {
    fn default() -> Self {
        Self::new(DEFAULT_EMAIL_PATTERN, DEFAULT_PHONE_PATTERN)
            .expect("default contact patterns are valid regexes")
    }
}

pub fn extract_contact_info(text: &str, patterns: &ContactPatterns) -> ContactInfo {
    let emails = patterns
        .email
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    let phones = patterns
        .phone
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    ContactInfo { emails, phones }
}
