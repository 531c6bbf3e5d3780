//! Field scanning over extracted resume text.
//!
//! The scan is deliberately simple: first regex match wins for email and
//! phone, and skills come from a fixed keyword list checked by case-sensitive
//! substring. Name extraction is out of scope, so `name` is always `None`.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+").unwrap());

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d\-\s]{7,}\d").unwrap());

/// Skills we recognize, checked in this order.
const SKILL_KEYWORDS: &[&str] = &["Rust", "Actix"];

/// Structured result of parsing one resume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseResult {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub text: String,
}

/// Scan extracted text for contact details and known skills.
pub fn extract_fields(text: String) -> ParseResult {
    let email = EMAIL_RE.find(&text).map(|m| m.as_str().to_string());
    let phone = PHONE_RE.find(&text).map(|m| m.as_str().to_string());

    let mut skills = Vec::new();
    for &skill in SKILL_KEYWORDS {
        if text.contains(skill) {
            skills.push(skill.to_string());
        }
    }

    ParseResult {
        name: None,
        email,
        phone,
        skills,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_contact_block() {
        let text = "Contact: a.b@example.com, call +1 555-123-4567. Skilled in Rust and Actix.";
        let result = extract_fields(text.to_string());

        assert_eq!(result.name, None);
        assert_eq!(result.email.as_deref(), Some("a.b@example.com"));
        assert_eq!(result.phone.as_deref(), Some("+1 555-123-4567"));
        assert_eq!(result.skills, vec!["Rust", "Actix"]);
        assert_eq!(result.text, text);
    }

    #[test]
    fn test_no_email_yields_none() {
        let result = extract_fields("call me maybe".to_string());
        assert_eq!(result.email, None);
    }

    #[test]
    fn test_first_email_wins() {
        let result = extract_fields("first@a.com then second@b.com".to_string());
        assert_eq!(result.email.as_deref(), Some("first@a.com"));
    }

    #[test]
    fn test_no_phone_yields_none() {
        let result = extract_fields("email only: hi@example.com".to_string());
        assert_eq!(result.phone, None);
    }

    #[test]
    fn test_first_phone_wins() {
        let result = extract_fields("home +1 555-123-4567 office +44 20 7946 0958".to_string());
        assert_eq!(result.phone.as_deref(), Some("+1 555-123-4567"));
    }

    #[test]
    fn test_short_digit_run_is_not_a_phone() {
        let result = extract_fields("room 12345".to_string());
        assert_eq!(result.phone, None);
    }

    #[test]
    fn test_phone_without_plus_prefix() {
        let result = extract_fields("reach me on 020 7946 0958 anytime".to_string());
        assert_eq!(result.phone.as_deref(), Some("020 7946 0958"));
    }

    #[test]
    fn test_skill_match_is_case_sensitive() {
        let result = extract_fields("i write rust and actix services".to_string());
        assert!(result.skills.is_empty());
    }

    #[test]
    fn test_skills_keep_keyword_order() {
        let result = extract_fields("Actix experience first, Rust second".to_string());
        assert_eq!(result.skills, vec!["Rust", "Actix"]);
    }

    #[test]
    fn test_skill_matches_inside_larger_word() {
        let result = extract_fields("proud Rustacean".to_string());
        assert_eq!(result.skills, vec!["Rust"]);
    }

    #[test]
    fn test_name_is_never_populated() {
        let result = extract_fields("Jane Doe\njane@doe.dev".to_string());
        assert_eq!(result.name, None);
    }

    #[test]
    fn test_empty_text() {
        let result = extract_fields(String::new());
        assert_eq!(
            result,
            ParseResult {
                name: None,
                email: None,
                phone: None,
                skills: vec![],
                text: String::new(),
            }
        );
    }
}
