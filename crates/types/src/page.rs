//! The page-data payload that drives a single documentation page render.

use crate::document::HeadingEntry;
use serde::{Deserialize, Deserializer, Serialize};

/// Data for one native plugin documentation page.
///
/// Text fields that may be left blank by the site build are modelled as
/// `Option<String>`; an empty string carries the same meaning as `None`.
/// Use the accessor methods, which apply that rule, rather than reading the
/// raw fields when deciding whether a section should be rendered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub title: String,
    /// Base path used to resolve in-page anchor links.
    #[serde(default)]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headings: Vec<HeadingEntry>,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cordova: Option<String>,
    /// Install package identifier, expected as `scope/name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platforms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_usage: Option<String>,
}

impl Page {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn repo(&self) -> Option<&str> {
        non_empty(self.repo.as_deref())
    }

    pub fn cordova(&self) -> Option<&str> {
        non_empty(self.cordova.as_deref())
    }

    pub fn package(&self) -> Option<&str> {
        non_empty(self.package.as_deref())
    }

    pub fn code_usage(&self) -> Option<&str> {
        non_empty(self.code_usage.as_deref())
    }
}

/// Treats an empty string the same as a missing value.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
