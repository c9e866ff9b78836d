//! Contact form submission handling.
//!
//! Submissions never leave the browser: fields are collected, logged, and
//! acknowledged locally. Nothing is sent over the network.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use serde::Serialize;

/// Default text of the blocking confirmation shown after submit.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// Named fields of one submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Submission {
    fields: BTreeMap<String, String>,
}

impl Submission {
    /// Collect `(name, value)` pairs in document order. A repeated name keeps
    /// its last value.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<BTreeMap<_, _>>();
        Self { fields }
    }

    /// Build from raw form entries where either half may not be text. File
    /// inputs arrive as blobs and are dropped along with any nameless entry.
    pub fn from_form_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Option<String>, Option<String>)>,
    {
        Self::from_entries(entries.into_iter().filter_map(|(name, value)| Some((name?, value?))))
    }

    #[cfg(test)]
    fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// JSON rendering used for the diagnostic log line.
    #[must_use]
    pub fn to_log_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable submission: {e}>"))
    }
}
