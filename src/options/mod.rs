//! Request option encoding
//!
//! Turns the typed query modifiers accepted by every collection and
//! single-resource call into a query string, and request payloads into a
//! serialized body.
//!
//! # Recognized options
//!
//! | key          | meaning                                  |
//! |--------------|------------------------------------------|
//! | `include`    | relationship to embed                    |
//! | `attributes` | attach attributes                        |
//! | `categories` | attach categories                        |
//! | `tags`       | attach tags                              |
//! | `taxonomies` | attach taxonomies                        |
//! | `search`     | free-text filter                         |
//! | `scopes`     | named server-side filter                 |
//! | `filters`    | simple where clauses                     |
//! | `jfilters`   | complex condition objects (sent as JSON) |
//! | `catfilters` | category filter                          |
//! | `fields`     | column selection                         |
//! | `sort`       | ordering, `-` prefix for descending      |
//!
//! Anything else goes through the `extra` pass-through bag untouched.
//!
//! Encoding is pure: the same options always produce the same string.

mod encoder;
mod types;

pub use encoder::{
    encode_body, encode_query, DataEnvelope, JsonPayload, NormalizedJson, PayloadEncoder,
};
pub use types::{OptionValue, RequestOptions, Sort, SortKey, SortOrder};

#[cfg(test)]
mod tests;
