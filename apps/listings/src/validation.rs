//! Input-contract validation at trust boundaries.
//!
//! Validators never stop at the first problem: every field error is
//! collected, in field order, and returned with the rejected value dropped.

use serde::{Deserialize, Serialize};

use crate::models::{Job, Recruiter};

pub const MIN_PASSWORD_CHARS: usize = 8;
pub const MIN_NAME_CHARS: usize = 2;
pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Tagged outcome of a validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Validation<T> {
    Valid(T),
    Invalid(Vec<FieldError>),
}

impl<T> Validation<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Validation::Valid(_) => &[],
            Validation::Invalid(errors) => errors,
        }
    }

    pub fn into_result(self) -> Result<T, Vec<FieldError>> {
        match self {
            Validation::Valid(value) => Ok(value),
            Validation::Invalid(errors) => Err(errors),
        }
    }
}

#[derive(Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn check(&mut self, ok: bool, path: &str, message: &str) {
        if !ok {
            self.errors.push(FieldError::new(path, message));
        }
    }

    fn finish<T>(self, value: T) -> Validation<T> {
        if self.errors.is_empty() {
            Validation::Valid(value)
        } else {
            Validation::Invalid(self.errors)
        }
    }
}

/// Loose address shape check: one `@`, a non-empty local part, and a dotted
/// domain with no empty labels. No whitespace anywhere.
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}

/// Length in UTF-16 code units, the unit the form schemas count in.
fn has_min_chars(value: &str, min: usize) -> bool {
    value.encode_utf16().count() >= min
}

fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

// ────────────────────────────────────────────────────────────────────────────
// Auth form shapes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginPurpose {
    Landing,
    Backoffice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub purpose: LoginPurpose,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub age: i64,
}

/// Name + email body accepted by the demo contact endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
}

fn check_credentials(checker: &mut Checker, email: &str, password: &str) {
    checker.check(is_plausible_email(email), "email", "Invalid email address");
    checker.check(
        has_min_chars(password, MIN_PASSWORD_CHARS),
        "password",
        "Password must be at least 8 characters",
    );
}

pub fn validate_login(request: LoginRequest) -> Validation<LoginRequest> {
    let mut checker = Checker::default();
    check_credentials(&mut checker, &request.email, &request.password);
    checker.finish(request)
}

pub fn validate_register(request: RegisterRequest) -> Validation<RegisterRequest> {
    let mut checker = Checker::default();
    check_credentials(&mut checker, &request.email, &request.password);
    checker.check(
        request.password == request.confirm_password,
        "confirmPassword",
        "Passwords don't match",
    );
    checker.finish(request)
}

pub fn validate_user(user: User) -> Validation<User> {
    let mut checker = Checker::default();
    checker.check(is_plausible_email(&user.email), "email", "Invalid email address");
    checker.check(
        has_min_chars(&user.name, MIN_NAME_CHARS),
        "name",
        "Name must be at least 2 characters",
    );
    checker.check(user.age > 0, "age", "Age must be a positive integer");
    checker.finish(user)
}

pub fn validate_contact(request: ContactRequest) -> Validation<ContactRequest> {
    let mut checker = Checker::default();
    checker.check(
        has_min_chars(&request.name, MIN_NAME_CHARS),
        "name",
        "Name must be at least 2 characters",
    );
    checker.check(is_plausible_email(&request.email), "email", "Invalid email address");
    checker.finish(request)
}

// ────────────────────────────────────────────────────────────────────────────
// Listing records
// ────────────────────────────────────────────────────────────────────────────

pub fn validate_job(job: Job) -> Validation<Job> {
    let mut checker = Checker::default();
    checker.check(not_blank(&job.id), "id", "Id is required");
    checker.check(not_blank(&job.title), "title", "Title is required");
    checker.check(not_blank(&job.company), "company", "Company is required");
    checker.check(not_blank(&job.location), "location", "Location is required");
    checker.check(
        job.tags.iter().all(|t| not_blank(t)),
        "tags",
        "Tags must not be blank",
    );
    checker.finish(job)
}

pub fn validate_recruiter(recruiter: Recruiter) -> Validation<Recruiter> {
    let mut checker = Checker::default();
    checker.check(not_blank(&recruiter.id), "id", "Id is required");
    checker.check(not_blank(&recruiter.name), "name", "Name is required");
    checker.check(not_blank(&recruiter.company), "company", "Company is required");
    checker.check(not_blank(&recruiter.location), "location", "Location is required");
    checker.check(
        recruiter.rating.is_finite() && (0.0..=MAX_RATING).contains(&recruiter.rating),
        "rating",
        "Rating must be between 0 and 5",
    );
    checker.finish(recruiter)
}

/// Validates every record, prefixing each error path with the record's index.
pub fn validate_all<R, V>(records: Vec<R>, validate: V) -> Validation<Vec<R>>
where
    V: Fn(R) -> Validation<R>,
{
    let mut valid = Vec::with_capacity(records.len());
    let mut errors = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        match validate(record) {
            Validation::Valid(record) => valid.push(record),
            Validation::Invalid(found) => errors.extend(
                found
                    .into_iter()
                    .map(|e| FieldError::new(format!("[{index}].{}", e.path), e.message)),
            ),
        }
    }

    if errors.is_empty() {
        Validation::Valid(valid)
    } else {
        Validation::Invalid(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample_jobs, sample_recruiters};

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            purpose: LoginPurpose::Landing,
        }
    }

    #[test]
    fn test_plausible_emails() {
        assert!(is_plausible_email("jane@example.com"));
        assert!(is_plausible_email("a.b+c@sub.example.co"));
    }

    #[test]
    fn test_implausible_emails() {
        for email in ["", "jane", "@example.com", "jane@", "jane@example", "jane@@x.com", "ja ne@x.com", "jane@x..com"] {
            assert!(!is_plausible_email(email), "{email} accepted");
        }
    }

    #[test]
    fn test_login_valid() {
        let result = validate_login(login("jane@example.com", "hunter22!"));
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_login_collects_all_errors_in_field_order() {
        let result = validate_login(login("not-an-email", "short"));
        let paths: Vec<&str> = result.errors().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["email", "password"]);
        assert_eq!(result.errors()[1].message, "Password must be at least 8 characters");
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        assert!(validate_login(login("jane@example.com", "pässwörd")).is_valid());
        assert!(!validate_login(login("jane@example.com", "ääääääa")).is_valid());
        // Four astral-plane keys are eight UTF-16 units.
        assert!(validate_login(login("jane@example.com", "🔑🔑🔑🔑")).is_valid());
        assert!(!validate_login(login("jane@example.com", "🔑🔑🔑")).is_valid());
    }

    #[test]
    fn test_name_length_counts_utf16_units() {
        let request = ContactRequest {
            name: "😀".to_string(),
            email: "jo@example.com".to_string(),
        };
        assert!(validate_contact(request).is_valid());
    }

    #[test]
    fn test_login_purpose_is_restricted() {
        let json = r#"{"email": "a@b.co", "password": "12345678", "purpose": "admin"}"#;
        assert!(serde_json::from_str::<LoginRequest>(json).is_err());
        let json = r#"{"email": "a@b.co", "password": "12345678", "purpose": "backoffice"}"#;
        let parsed: LoginRequest = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.purpose, LoginPurpose::Backoffice);
    }

    #[test]
    fn test_register_password_mismatch_reported_on_confirm_field() {
        let result = validate_register(RegisterRequest {
            email: "jane@example.com".to_string(),
            password: "longenough".to_string(),
            confirm_password: "different1".to_string(),
        });
        assert_eq!(
            result.errors(),
            &[FieldError::new("confirmPassword", "Passwords don't match")]
        );
    }

    #[test]
    fn test_register_deserializes_camel_case() {
        let json = r#"{"email": "a@b.co", "password": "12345678", "confirmPassword": "12345678"}"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();
        assert!(validate_register(request).is_valid());
    }

    #[test]
    fn test_user_rules() {
        let result = validate_user(User {
            id: "u1".to_string(),
            email: "jane@example.com".to_string(),
            name: "J".to_string(),
            age: 0,
        });
        let paths: Vec<&str> = result.errors().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["name", "age"]);
    }

    #[test]
    fn test_contact_valid_round_trips_value() {
        let request = ContactRequest {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
        };
        assert_eq!(validate_contact(request.clone()).into_result(), Ok(request));
    }

    #[test]
    fn test_validation_serializes_tagged() {
        let invalid: Validation<ContactRequest> =
            Validation::Invalid(vec![FieldError::new("name", "too short")]);
        let json = serde_json::to_value(&invalid).unwrap();
        assert_eq!(json["status"], "invalid");
        assert_eq!(json["data"][0]["path"], "name");
    }

    #[test]
    fn test_sample_records_are_valid() {
        assert!(validate_all(sample_jobs(), validate_job).is_valid());
        assert!(validate_all(sample_recruiters(), validate_recruiter).is_valid());
    }

    #[test]
    fn test_record_errors_are_prefixed_with_index() {
        let mut jobs = sample_jobs();
        jobs[3].title = "  ".to_string();
        jobs[7].tags.push(String::new());
        let errors = validate_all(jobs, validate_job).into_result().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::new("[3].title", "Title is required"),
                FieldError::new("[7].tags", "Tags must not be blank"),
            ]
        );
    }

    #[test]
    fn test_recruiter_rating_bounds() {
        let mut recruiter = sample_recruiters().remove(0);
        recruiter.rating = 5.1;
        assert!(!validate_recruiter(recruiter.clone()).is_valid());
        recruiter.rating = f64::NAN;
        assert!(!validate_recruiter(recruiter.clone()).is_valid());
        recruiter.rating = 0.0;
        assert!(validate_recruiter(recruiter).is_valid());
    }
}
