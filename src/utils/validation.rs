use super::response;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::Response,
};
use axum_typed_multipart::TypedMultipartError;
use serde::{de::DeserializeOwned, Deserialize};
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

/// Returns the message of the first failing field, checking `fields` in order.
pub fn first_message(errors: &ValidationErrors, fields: &[&str]) -> String {
    let field_errors = errors.field_errors();

    fields
        .iter()
        .filter_map(|field| field_errors.get(field))
        .chain(field_errors.values())
        .flat_map(|errors| errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| String::from("Invalid payload"))
}

pub fn into_response(errors: ValidationErrors, fields: &[&str]) -> Response {
    response::message(StatusCode::BAD_REQUEST, first_message(&errors, fields))
}

/// Requires a dot inside the domain part: `a@b` fails, `a@b.mn` passes.
pub fn has_dotted_domain(email: &str) -> Result<(), ValidationError> {
    let dotted = email
        .rsplit_once('@')
        .map(|(_, domain)| {
            domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        })
        .unwrap_or(false);

    if dotted {
        Ok(())
    } else {
        Err(ValidationError::new("INVALID_USER_EMAIL")
            .with_message(Cow::from("Invalid email format")))
    }
}

/// JSON body extractor answering malformed bodies with `{"message": ...}` and 400.
pub struct Json<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Json(value)),
            Err(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                Err(rejection_into_response(rejection))
            }
        }
    }
}

fn rejection_into_response(rejection: JsonRejection) -> Response {
    response::message(StatusCode::BAD_REQUEST, rejection.body_text())
}

pub fn multipart_rejection(err: TypedMultipartError) -> Response {
    tracing::warn!("Rejected multipart body: {}", err);
    match err {
        TypedMultipartError::FieldTooLarge { .. } => {
            response::message(StatusCode::BAD_REQUEST, "File too large")
        }
        err => response::message(StatusCode::BAD_REQUEST, err.to_string()),
    }
}

/// Deserializes a present field (including an explicit `null`) into `Some`.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Accepts either a JSON string or a JSON number and yields its text.
pub fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or a number, found {}",
            other
        ))),
    }
}

/// Missing, empty and whitespace-only strings all count as absent.
pub fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Query flags such as `?all=true` are compared case-insensitively.
pub fn is_true(value: &Option<String>) -> bool {
    value
        .as_deref()
        .map(|value| value.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Credentials {
        #[validate(email(message = "Invalid email format"))]
        email: String,
        #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
        password: String,
    }

    #[test]
    fn first_message_follows_field_order() {
        let errors = Credentials {
            email: String::from("nope"),
            password: String::from("123"),
        }
        .validate()
        .unwrap_err();

        assert_eq!(
            first_message(&errors, &["email", "password"]),
            "Invalid email format"
        );
        assert_eq!(
            first_message(&errors, &["password", "email"]),
            "Password must be at least 6 characters"
        );
    }

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_some")]
        phone: Option<Option<String>>,
    }

    #[test]
    fn deserialize_some_distinguishes_null_from_missing() {
        let missing: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"phone": null}"#).unwrap();
        let set: Patch = serde_json::from_str(r#"{"phone": "123"}"#).unwrap();

        assert_eq!(missing.phone, None);
        assert_eq!(null.phone, Some(None));
        assert_eq!(set.phone, Some(Some(String::from("123"))));
    }

    #[derive(Deserialize)]
    struct Code {
        #[serde(default, deserialize_with = "deserialize_string_or_number")]
        otp: Option<String>,
    }

    #[test]
    fn codes_may_be_sent_as_numbers() {
        let text: Code = serde_json::from_str(r#"{"otp": "012345"}"#).unwrap();
        let number: Code = serde_json::from_str(r#"{"otp": 123456}"#).unwrap();
        let missing: Code = serde_json::from_str("{}").unwrap();

        assert_eq!(text.otp.as_deref(), Some("012345"));
        assert_eq!(number.otp.as_deref(), Some("123456"));
        assert_eq!(missing.otp, None);
        assert!(serde_json::from_str::<Code>(r#"{"otp": [1]}"#).is_err());
    }

    #[test]
    fn email_domains_need_a_dot() {
        assert!(has_dotted_domain("user@example.com").is_ok());
        assert!(has_dotted_domain("a@b.mn").is_ok());
        assert!(has_dotted_domain("a@b").is_err());
        assert!(has_dotted_domain("a@.com").is_err());
        assert!(has_dotted_domain("a@example.").is_err());
        assert!(has_dotted_domain("no-at-sign.com").is_err());
    }

    #[test]
    fn only_true_enables_flags() {
        assert!(is_true(&Some(String::from("TRUE"))));
        assert!(!is_true(&Some(String::from("1"))));
        assert!(!is_true(&None));
    }

    #[test]
    fn blank_strings_are_not_present() {
        assert_eq!(present(&None), None);
        assert_eq!(present(&Some(String::from("   "))), None);
        assert_eq!(present(&Some(String::from(" Pizza "))), Some("Pizza"));
    }
}
