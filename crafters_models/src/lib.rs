use std::ops::Deref;

use serde::{Deserialize, Serialize};

pub mod careers;
pub mod contact;
pub mod email_address;
pub mod recaptcha;
pub mod validation;

/// Wrapper for values that must never show up in logs or debug output.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sensitive<T>(pub T);

impl<T> std::fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[sensitive]")
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Sensitive<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Trims a submitted text field. Absent fields become the empty string.
pub fn sanitize(value: Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_owned()
}

/// Trims an optional submitted text field. Blank fields become `None`.
pub fn sanitize_optional(value: Option<String>) -> Option<String> {
    Some(sanitize(value)).filter(|x| !x.is_empty())
}
