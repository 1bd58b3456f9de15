//! Request option types

use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Option Values
// ============================================================================

/// A single option value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Text(String),
    /// Comma-joined on the wire
    List(Vec<String>),
    /// Compact JSON on the wire
    Json(JsonValue),
}

impl OptionValue {
    /// Render the value as it appears (before percent-encoding) in the query
    pub fn render(&self) -> String {
        match self {
            OptionValue::Bool(b) => b.to_string(),
            OptionValue::Int(i) => i.to_string(),
            OptionValue::Text(s) => s.clone(),
            OptionValue::List(items) => items.join(","),
            OptionValue::Json(JsonValue::String(s)) => s.clone(),
            OptionValue::Json(value) => value.to_string(),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Int(i64::from(value))
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        OptionValue::List(value)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(value: Vec<&str>) -> Self {
        OptionValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<JsonValue> for OptionValue {
    fn from(value: JsonValue) -> Self {
        OptionValue::Json(value)
    }
}

// ============================================================================
// Sort
// ============================================================================

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// One column of an ordering expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub order: SortOrder,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.order {
            SortOrder::Ascending => write!(f, "{}", self.field),
            SortOrder::Descending => write!(f, "-{}", self.field),
        }
    }
}

/// Ordering expression such as `-id,title`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Sort {
    keys: Vec<SortKey>,
}

impl Sort {
    /// Parse a comma-separated ordering expression
    pub fn parse(expr: &str) -> Self {
        let keys = expr
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix('-') {
                Some(field) => SortKey {
                    field: field.to_string(),
                    order: SortOrder::Descending,
                },
                None => SortKey {
                    field: s.to_string(),
                    order: SortOrder::Ascending,
                },
            })
            .collect();
        Self { keys }
    }

    /// Append a column
    #[must_use]
    pub fn then(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.keys.push(SortKey {
            field: field.into(),
            order,
        });
        self
    }

    /// Columns in order of precedence
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Whether there is nothing to sort by
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

impl From<String> for Sort {
    fn from(value: String) -> Self {
        Sort::parse(&value)
    }
}

impl From<&str> for Sort {
    fn from(value: &str) -> Self {
        Sort::parse(value)
    }
}

impl From<Sort> for String {
    fn from(value: Sort) -> Self {
        value.to_string()
    }
}

// ============================================================================
// Request Options
// ============================================================================

/// Query modifiers for a collection or single-resource call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomies: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<OptionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jfilters: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catfilters: Option<OptionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
    /// Keys this crate does not know about, sent verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, OptionValue>,
}

impl RequestOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Embed a relationship
    #[must_use]
    pub fn include(mut self, relation: impl Into<String>) -> Self {
        self.include = Some(relation.into());
        self
    }

    /// Attach attributes to the response
    #[must_use]
    pub fn attributes(mut self, attach: bool) -> Self {
        self.attributes = Some(attach);
        self
    }

    /// Attach categories to the response
    #[must_use]
    pub fn categories(mut self, attach: bool) -> Self {
        self.categories = Some(attach);
        self
    }

    /// Attach tags to the response
    #[must_use]
    pub fn tags(mut self, attach: bool) -> Self {
        self.tags = Some(attach);
        self
    }

    /// Attach taxonomies to the response
    #[must_use]
    pub fn taxonomies(mut self, attach: bool) -> Self {
        self.taxonomies = Some(attach);
        self
    }

    /// Filter by a search word
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Filter by a named scope
    #[must_use]
    pub fn scopes(mut self, scopes: impl Into<String>) -> Self {
        self.scopes = Some(scopes.into());
        self
    }

    /// Simple where clauses
    #[must_use]
    pub fn filters(mut self, filters: impl Into<OptionValue>) -> Self {
        self.filters = Some(filters.into());
        self
    }

    /// Complex condition objects
    #[must_use]
    pub fn jfilters(mut self, filters: JsonValue) -> Self {
        self.jfilters = Some(filters);
        self
    }

    /// Category filter
    #[must_use]
    pub fn catfilters(mut self, filters: impl Into<OptionValue>) -> Self {
        self.catfilters = Some(filters.into());
        self
    }

    /// Columns to select, as a raw comma-separated list
    #[must_use]
    pub fn fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    /// Columns to select
    #[must_use]
    pub fn field_list<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = fields
            .into_iter()
            .map(|f| f.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.fields = Some(joined);
        self
    }

    /// Ordering expression, e.g. `"-id"` or `Sort::default().then("title", SortOrder::Ascending)`
    #[must_use]
    pub fn sort(mut self, sort: impl Into<Sort>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Any other key, passed through unmodified
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Whether encoding would produce an empty query string
    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }

    /// Key/value pairs in canonical order, before percent-encoding
    ///
    /// Recognized keys come first in a fixed order, then pass-through keys
    /// sorted by name.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                pairs.push((key.to_string(), value));
            }
        };

        push("include", self.include.clone());
        push("attributes", self.attributes.map(|b| b.to_string()));
        push("categories", self.categories.map(|b| b.to_string()));
        push("tags", self.tags.map(|b| b.to_string()));
        push("taxonomies", self.taxonomies.map(|b| b.to_string()));
        push("search", self.search.clone());
        push("scopes", self.scopes.clone());
        push("filters", self.filters.as_ref().map(OptionValue::render));
        push(
            "jfilters",
            self.jfilters
                .as_ref()
                .map(|v| OptionValue::Json(v.clone()).render()),
        );
        push("catfilters", self.catfilters.as_ref().map(OptionValue::render));
        push("fields", self.fields.clone());
        push(
            "sort",
            self.sort
                .as_ref()
                .filter(|s| !s.is_empty())
                .map(ToString::to_string),
        );

        for (key, value) in &self.extra {
            pairs.push((key.clone(), value.render()));
        }
        pairs
    }
}
