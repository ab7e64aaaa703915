use std::str::FromStr;

use nutype::nutype;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress(pub lettre::Address);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddressWithName(pub lettre::message::Mailbox);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl EmailAddressWithName {
    pub fn email(&self) -> &str {
        self.0.email.as_ref()
    }
}

impl std::fmt::Display for EmailAddressWithName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EmailAddress {
    type Err = <lettre::Address as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl FromStr for EmailAddressWithName {
    type Err = <lettre::message::Mailbox as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, Deref, TryFrom, Display, Serialize, Deserialize)
)]
pub struct RecipientAddress(String);

/// Ordered list of notification recipients.
///
/// Parsed from a comma separated string. Entries are trimmed and blank entries
/// are dropped, so the list may end up empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientList(Vec<RecipientAddress>);

impl RecipientList {
    pub fn parse(s: &str) -> Self {
        Self(
            s.split(',')
                .filter_map(|x| RecipientAddress::try_new(x).ok())
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecipientAddress> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a RecipientList {
    type Item = &'a RecipientAddress;
    type IntoIter = std::slice::Iter<'a, RecipientAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
