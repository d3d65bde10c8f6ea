//! Response bodies shared by every route.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// `{ "success": true }` acknowledgement for deletions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Error body: a flat object of `{ <errorKey>: <message> }`.
///
/// Validation failures carry one entry per failing field; every other failure
/// carries exactly one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorResponse(BTreeMap<String, String>);

impl ErrorResponse {
    pub fn single(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self(BTreeMap::from([(key.into(), message.into())]))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ErrorResponse {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
