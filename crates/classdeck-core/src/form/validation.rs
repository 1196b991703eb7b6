//! Local form validation: required fields, format checks, and the
//! age-gated guardian rules for enrollment.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::client::EnrollmentPayload;
use crate::error::{Error, Result};
use crate::util::is_http_url;

use super::FieldErrors;

/// Students younger than this enroll through a guardian
pub const ADULT_AGE_YEARS: u32 = 18;

pub fn is_valid_email(value: &str) -> bool {
    let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid regex");
    re.is_match(value.trim())
}

pub fn is_valid_phone(value: &str) -> bool {
    let re = Regex::new(r"^\+?[0-9][0-9 \-]{6,14}$").expect("Invalid regex");
    re.is_match(value.trim())
}

/// Meeting/submission links must be plain http(s) URLs
pub fn is_valid_meeting_link(value: &str) -> bool {
    let value = value.trim();
    is_http_url(value) && value.len() > "https://".len()
}

/// Whole years between `date_of_birth` and `today`
#[must_use]
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    u32::try_from(age.max(0)).unwrap_or(0)
}

/// Enrollment (signup) form state; persisted as an in-progress draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub password_confirmation: String,
    pub date_of_birth: Option<NaiveDate>,
    pub guardian_name: String,
    pub guardian_email: String,
    pub guardian_phone: String,
    pub course_code: String,
}

impl EnrollmentForm {
    /// Build the wire payload from a validated form.
    pub fn to_payload(&self) -> Result<EnrollmentPayload> {
        let date_of_birth = self
            .date_of_birth
            .ok_or_else(|| Error::InvalidInput("Date of birth is required".to_string()))?;

        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        Ok(EnrollmentPayload {
            full_name: self.full_name.trim().to_string(),
            email: optional(&self.email),
            phone: optional(&self.phone),
            date_of_birth: date_of_birth.format("%Y-%m-%d").to_string(),
            guardian_name: optional(&self.guardian_name),
            guardian_email: optional(&self.guardian_email),
            guardian_phone: optional(&self.guardian_phone),
            course_code: self.course_code.trim().to_string(),
        })
    }
}

fn require(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field.to_string(), message.to_string());
    }
}

/// Validate the enrollment form against `today`.
///
/// Age < 18 requires the guardian contact fields and not the student's
/// own; age >= 18 is the inverse. Contact formats are checked whenever a
/// value is present, required or not.
#[must_use]
pub fn validate_enrollment(form: &EnrollmentForm, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();

    require(&mut errors, "full_name", &form.full_name, "Full name is required");
    require(&mut errors, "course_code", &form.course_code, "Course is required");
    require(&mut errors, "password", &form.password, "Password is required");

    if !form.password.is_empty() && form.password != form.password_confirmation {
        errors.insert(
            "password_confirmation".to_string(),
            "Passwords do not match".to_string(),
        );
    }

    let Some(date_of_birth) = form.date_of_birth else {
        errors.insert(
            "date_of_birth".to_string(),
            "Date of birth is required".to_string(),
        );
        return errors;
    };

    if age_on(date_of_birth, today) < ADULT_AGE_YEARS {
        require(
            &mut errors,
            "guardian_name",
            &form.guardian_name,
            "Guardian name is required",
        );
        require(
            &mut errors,
            "guardian_email",
            &form.guardian_email,
            "Guardian email is required",
        );
        require(
            &mut errors,
            "guardian_phone",
            &form.guardian_phone,
            "Guardian phone is required",
        );
    } else {
        require(&mut errors, "email", &form.email, "Email is required");
        require(&mut errors, "phone", &form.phone, "Phone is required");
    }

    let format_checks = [
        ("email", &form.email, is_valid_email as fn(&str) -> bool, "Enter a valid email"),
        ("guardian_email", &form.guardian_email, is_valid_email, "Enter a valid email"),
        ("phone", &form.phone, is_valid_phone, "Enter a valid phone number"),
        ("guardian_phone", &form.guardian_phone, is_valid_phone, "Enter a valid phone number"),
    ];
    for (field, value, check, message) in format_checks {
        if !value.trim().is_empty() && !check(value) && !errors.contains_key(field) {
            errors.insert(field.to_string(), message.to_string());
        }
    }

    errors
}

/// Validate an assignment submission before it goes to the network
#[must_use]
pub fn validate_submission(submission_url: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if submission_url.trim().is_empty() {
        errors.insert(
            "submission_url".to_string(),
            "Submission link is required".to_string(),
        );
    } else if !is_valid_meeting_link(submission_url) {
        errors.insert(
            "submission_url".to_string(),
            "Enter a valid http(s) link".to_string(),
        );
    }
    errors
}

/// Grades are percentages
#[must_use]
pub fn validate_grade(grade: f64) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if !(0.0..=100.0).contains(&grade) {
        errors.insert(
            "grade".to_string(),
            "Grade must be between 0 and 100".to_string(),
        );
    }
    errors
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
    }

    fn base_form() -> EnrollmentForm {
        EnrollmentForm {
            full_name: "Amina Yusuf".to_string(),
            password: "s3cret-pass".to_string(),
            password_confirmation: "s3cret-pass".to_string(),
            course_code: "PHY-101".to_string(),
            ..EnrollmentForm::default()
        }
    }

    #[test]
    fn email_and_phone_formats() {
        assert!(is_valid_email("amina@example.com"));
        assert!(!is_valid_email("amina@example"));
        assert!(!is_valid_email("not-an-email"));

        assert!(is_valid_phone("+254 700 123456"));
        assert!(is_valid_phone("0712345678"));
        assert!(!is_valid_phone("phone"));

        assert!(is_valid_meeting_link("https://meet.example.com/abc"));
        assert!(!is_valid_meeting_link("meet.example.com/abc"));
    }

    #[test]
    fn age_counts_whole_years() {
        let dob = NaiveDate::from_ymd_opt(2008, 8, 28).unwrap();
        assert_eq!(age_on(dob, today()), 17); // birthday tomorrow
        let dob = NaiveDate::from_ymd_opt(2008, 8, 27).unwrap();
        assert_eq!(age_on(dob, today()), 18); // birthday today
    }

    #[test]
    fn minor_requires_guardian_fields_not_student_contact() {
        let mut form = base_form();
        form.date_of_birth = NaiveDate::from_ymd_opt(2012, 1, 15);

        let errors = validate_enrollment(&form, today());
        assert!(errors.contains_key("guardian_name"));
        assert!(errors.contains_key("guardian_email"));
        assert!(errors.contains_key("guardian_phone"));
        assert!(!errors.contains_key("email"));
        assert!(!errors.contains_key("phone"));
    }

    #[test]
    fn adult_requires_own_contact_not_guardian() {
        let mut form = base_form();
        form.date_of_birth = NaiveDate::from_ymd_opt(2000, 1, 15);

        let errors = validate_enrollment(&form, today());
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("phone"));
        assert!(!errors.contains_key("guardian_name"));
        assert!(!errors.contains_key("guardian_email"));
        assert!(!errors.contains_key("guardian_phone"));
    }

    #[test]
    fn clean_adult_form_passes() {
        let mut form = base_form();
        form.date_of_birth = NaiveDate::from_ymd_opt(2000, 1, 15);
        form.email = "amina@example.com".to_string();
        form.phone = "0712345678".to_string();
        assert!(validate_enrollment(&form, today()).is_empty());

        let payload = form.to_payload().unwrap();
        assert_eq!(payload.date_of_birth, "2000-01-15");
        assert_eq!(payload.guardian_email, None);
    }

    #[test]
    fn mismatched_passwords_are_flagged() {
        let mut form = base_form();
        form.date_of_birth = NaiveDate::from_ymd_opt(2000, 1, 15);
        form.password_confirmation = "different".to_string();
        let errors = validate_enrollment(&form, today());
        assert!(errors.contains_key("password_confirmation"));
    }

    #[test]
    fn provided_contact_values_are_format_checked_even_when_optional() {
        let mut form = base_form();
        form.date_of_birth = NaiveDate::from_ymd_opt(2012, 1, 15);
        form.guardian_name = "Halima Yusuf".to_string();
        form.guardian_email = "not-an-email".to_string();
        form.guardian_phone = "0712345678".to_string();
        form.email = "also-bad".to_string(); // optional for minors, still checked

        let errors = validate_enrollment(&form, today());
        assert_eq!(errors.get("guardian_email").unwrap(), "Enter a valid email");
        assert_eq!(errors.get("email").unwrap(), "Enter a valid email");
    }

    #[test]
    fn grade_bounds() {
        assert!(validate_grade(0.0).is_empty());
        assert!(validate_grade(100.0).is_empty());
        assert!(!validate_grade(-1.0).is_empty());
        assert!(!validate_grade(101.0).is_empty());
    }

    #[test]
    fn submission_link_is_required_and_checked() {
        assert!(validate_submission("   ").contains_key("submission_url"));
        assert!(validate_submission("ftp://x").contains_key("submission_url"));
        assert!(validate_submission("https://drive.example.com/f/1").is_empty());
    }
}
