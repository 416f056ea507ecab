//! Public registration form payload and its validation.
//!
//! Fields are checked for presence in a fixed order and the first absent one
//! is reported by its wire name. Only once every field is present is the
//! grade parsed, so a missing later field wins over a malformed grade.

use serde::Deserialize;

use crate::error::CoreError;

/// Required fields, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 9] = [
    "firstName",
    "lastName",
    "email",
    "phone",
    "school",
    "grade",
    "projectTitle",
    "projectDescription",
    "category",
];

pub const MIN_GRADE: i32 = 1;
pub const MAX_GRADE: i32 = 12;

/// Raw form body as posted by the client. Every field is optional here so
/// that absence can be reported as a validation error rather than a
/// deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationSubmission {
    pub first_name: Option<FormValue>,
    pub last_name: Option<FormValue>,
    pub email: Option<FormValue>,
    pub phone: Option<FormValue>,
    /// School id as chosen from the schools list.
    pub school: Option<FormValue>,
    pub grade: Option<FormValue>,
    pub project_title: Option<FormValue>,
    pub project_description: Option<FormValue>,
    pub category: Option<FormValue>,
}

/// A single form value. The form posts strings (`"10"`); API clients may
/// send numbers for fields such as `grade` or `phone`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Number(serde_json::Number),
    Text(String),
}

impl FormValue {
    /// Numeric zero and whitespace-only strings count as absent.
    fn is_blank(&self) -> bool {
        match self {
            Self::Number(n) => n.as_f64() == Some(0.0),
            Self::Text(s) => s.trim().is_empty(),
        }
    }

    fn into_text(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.trim().to_string(),
        }
    }

    fn parse_grade(&self) -> Result<i32, CoreError> {
        let parsed = match self {
            Self::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
            Self::Text(s) => s.trim().parse::<i32>().ok(),
        };
        parsed
            .filter(|g| (MIN_GRADE..=MAX_GRADE).contains(g))
            .ok_or_else(|| CoreError::Validation(format!("Invalid grade: {}", self.raw())))
    }

    fn raw(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// A submission with every field present, trimmed, and the grade parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub school_id: String,
    pub grade: i32,
    pub project_title: String,
    pub project_description: String,
    pub category: String,
}

impl RegistrationSubmission {
    pub fn validate(self) -> Result<ValidSubmission, CoreError> {
        let first_name = required(self.first_name, "firstName")?.into_text();
        let last_name = required(self.last_name, "lastName")?.into_text();
        let email = required(self.email, "email")?.into_text();
        let phone = required(self.phone, "phone")?.into_text();
        let school_id = required(self.school, "school")?.into_text();
        let grade = required(self.grade, "grade")?;
        let project_title = required(self.project_title, "projectTitle")?.into_text();
        let project_description =
            required(self.project_description, "projectDescription")?.into_text();
        let category = required(self.category, "category")?.into_text();

        Ok(ValidSubmission {
            first_name,
            last_name,
            email,
            phone,
            school_id,
            grade: grade.parse_grade()?,
            project_title,
            project_description,
            category,
        })
    }
}

fn required(value: Option<FormValue>, field: &'static str) -> Result<FormValue, CoreError> {
    value
        .filter(|v| !v.is_blank())
        .ok_or(CoreError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn full_payload() -> serde_json::Value {
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "phone": "555-0100",
            "school": "school1",
            "grade": "10",
            "projectTitle": "Difference Engines",
            "projectDescription": "Mechanical computation of polynomials",
            "category": "computer",
        })
    }

    fn submission(value: serde_json::Value) -> RegistrationSubmission {
        serde_json::from_value(value).expect("payload should deserialize")
    }

    #[test]
    fn test_full_payload_validates() {
        let valid = submission(full_payload()).validate().unwrap();
        assert_eq!(valid.first_name, "Ada");
        assert_eq!(valid.school_id, "school1");
        assert_eq!(valid.grade, 10);
    }

    #[test]
    fn test_each_missing_field_is_named() {
        for field in REQUIRED_FIELDS {
            let mut payload = full_payload();
            payload.as_object_mut().unwrap().remove(field);

            let result = submission(payload).validate();
            assert_matches!(result, Err(CoreError::MissingField(f)) if f == field);
        }
    }

    #[test]
    fn test_first_missing_field_in_order_is_reported() {
        let mut payload = full_payload();
        let obj = payload.as_object_mut().unwrap();
        obj.remove("category");
        obj.remove("phone");

        let result = submission(payload).validate();
        assert_matches!(result, Err(CoreError::MissingField("phone")));
    }

    #[test]
    fn test_blank_and_null_count_as_missing() {
        let mut payload = full_payload();
        payload["lastName"] = json!("   ");
        assert_matches!(
            submission(payload).validate(),
            Err(CoreError::MissingField("lastName"))
        );

        let mut payload = full_payload();
        payload["email"] = serde_json::Value::Null;
        assert_matches!(
            submission(payload).validate(),
            Err(CoreError::MissingField("email"))
        );
    }

    #[test]
    fn test_numeric_zero_grade_is_missing() {
        let mut payload = full_payload();
        payload["grade"] = json!(0);
        assert_matches!(
            submission(payload).validate(),
            Err(CoreError::MissingField("grade"))
        );
    }

    #[test]
    fn test_numeric_grade_accepted() {
        let mut payload = full_payload();
        payload["grade"] = json!(12);
        assert_eq!(submission(payload).validate().unwrap().grade, 12);
    }

    #[test]
    fn test_non_numeric_grade_is_validation_error() {
        let mut payload = full_payload();
        payload["grade"] = json!("tenth");
        assert_matches!(
            submission(payload).validate(),
            Err(CoreError::Validation(msg)) if msg == "Invalid grade: tenth"
        );
    }

    #[test]
    fn test_out_of_range_grade_rejected() {
        for grade in [json!("13"), json!(-1), json!(9.5)] {
            let mut payload = full_payload();
            payload["grade"] = grade;
            assert_matches!(submission(payload).validate(), Err(CoreError::Validation(_)));
        }
    }

    #[test]
    fn test_missing_field_reported_before_bad_grade() {
        let mut payload = full_payload();
        payload["grade"] = json!("abc");
        payload.as_object_mut().unwrap().remove("category");
        assert_matches!(
            submission(payload).validate(),
            Err(CoreError::MissingField("category"))
        );
    }

    #[test]
    fn test_values_are_trimmed() {
        let mut payload = full_payload();
        payload["firstName"] = json!("  Ada ");
        payload["grade"] = json!(" 9 ");
        let valid = submission(payload).validate().unwrap();
        assert_eq!(valid.first_name, "Ada");
        assert_eq!(valid.grade, 9);
    }

    #[test]
    fn test_numeric_text_field_is_stringified() {
        let mut payload = full_payload();
        payload["phone"] = json!(5550123);
        let valid = submission(payload).validate().unwrap();
        assert_eq!(valid.phone, "5550123");
    }

    #[test]
    fn test_numeric_field_does_not_mask_earlier_missing_field() {
        let mut payload = full_payload();
        payload["phone"] = json!(5550123);
        payload.as_object_mut().unwrap().remove("firstName");
        assert_matches!(
            submission(payload).validate(),
            Err(CoreError::MissingField("firstName"))
        );
    }

    #[test]
    fn test_numeric_zero_text_field_is_missing() {
        let mut payload = full_payload();
        payload["phone"] = json!(0);
        assert_matches!(
            submission(payload).validate(),
            Err(CoreError::MissingField("phone"))
        );
    }
}
