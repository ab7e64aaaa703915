use crafters_models::{
    contact::ContactSubmission, recaptcha::RecaptchaResponse, sanitize, sanitize_optional,
};
use serde::{Deserialize, Deserializer};

/// Fields of the contact form. Values that are missing or not strings are
/// treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactSubmission {
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub locale: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub recaptcha_token: Option<String>,
}

impl ApiContactSubmission {
    /// Reads the form from a JSON body. Empty bodies (`null`, `false`, `0`,
    /// `""`) yield `None`. Any other value that is not an object carries no
    /// fields.
    pub fn from_json(body: serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        match body {
            Value::Null | Value::Bool(false) => None,
            Value::Number(ref n) if n.as_f64() == Some(0.0) => None,
            Value::String(ref s) if s.is_empty() => None,
            Value::Object(_) => Some(serde_json::from_value(body).unwrap_or_default()),
            _ => Some(Self::default()),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(value) => Some(value),
        _ => None,
    })
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            first_name: sanitize(value.first_name),
            last_name: sanitize(value.last_name),
            email: sanitize(value.email).to_lowercase(),
            message: sanitize(value.message),
            locale: sanitize_optional(value.locale),
            recaptcha_response: value
                .recaptcha_token
                .and_then(|x| RecaptchaResponse::try_new(x).ok()),
        }
    }
}
