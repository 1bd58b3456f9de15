//! Tests for the options module

use super::*;
use crate::error::ErrorKind;
use crate::types::HttpMethod;
use pretty_assertions::assert_eq;
use serde_json::json;
use url::form_urlencoded;

fn decode(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

#[test]
fn test_absent_and_empty_options_encode_to_nothing() {
    assert_eq!(encode_query(None), "");
    assert_eq!(encode_query(Some(&RequestOptions::new())), "");
    assert!(RequestOptions::new().is_empty());
}

#[test]
fn test_fields_comma_is_percent_encoded() {
    let options = RequestOptions::new().fields("id,title");
    assert_eq!(encode_query(Some(&options)), "fields=id%2Ctitle");
}

#[test]
fn test_field_list_joins_with_comma() {
    let options = RequestOptions::new().field_list(["id", "title", "slug"]);
    assert_eq!(encode_query(Some(&options)), "fields=id%2Ctitle%2Cslug");
}

#[test]
fn test_recognized_keys_in_canonical_order() {
    // Built in scrambled order on purpose
    let options = RequestOptions::new()
        .sort("-id")
        .search("red shoes")
        .tags(true)
        .include("variants")
        .attributes(false)
        .fields("id");

    assert_eq!(
        encode_query(Some(&options)),
        "include=variants&attributes=false&tags=true&search=red+shoes&fields=id&sort=-id"
    );
}

#[test]
fn test_pass_through_keys_sorted_after_recognized() {
    let options = RequestOptions::new()
        .param("template", "blog_post")
        .param("page", 2u32)
        .scopes("published");

    assert_eq!(
        encode_query(Some(&options)),
        "scopes=published&page=2&template=blog_post"
    );
}

#[test]
fn test_encoding_is_deterministic() {
    let build = || {
        RequestOptions::new()
            .param("zeta", "1")
            .param("alpha", vec!["a", "b"])
            .jfilters(json!({"and": [{"field": "price", "op": ">", "value": 10}]}))
            .catfilters("shoes")
            .sort("title,-id")
    };

    let first = encode_query(Some(&build()));
    let second = encode_query(Some(&build()));
    assert_eq!(first, second);
    assert_eq!(encode_query(Some(&build())), first);
}

#[test]
fn test_complex_filter_round_trips() {
    let filter = json!({
        "or": [
            {"field": "title", "op": "like", "value": "%shirt%"},
            {"field": "stock", "op": ">=", "value": 3}
        ],
        "nested": {"flag": true, "list": [1, 2, 3]}
    });
    let options = RequestOptions::new().jfilters(filter.clone());

    let query = encode_query(Some(&options));
    let pairs = decode(&query);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, "jfilters");

    let parsed: serde_json::Value = serde_json::from_str(&pairs[0].1).unwrap();
    assert_eq!(parsed, filter);
}

#[test]
fn test_json_string_filter_passes_verbatim() {
    let options = RequestOptions::new().jfilters(json!("{\"a\":1}"));
    let pairs = decode(&encode_query(Some(&options)));
    assert_eq!(pairs, vec![("jfilters".to_string(), "{\"a\":1}".to_string())]);
}

#[test]
fn test_option_value_rendering() {
    assert_eq!(OptionValue::from(true).render(), "true");
    assert_eq!(OptionValue::from(42i64).render(), "42");
    assert_eq!(OptionValue::from("x y").render(), "x y");
    assert_eq!(OptionValue::from(vec!["a", "b"]).render(), "a,b");
    assert_eq!(OptionValue::from(json!({"k": [1]})).render(), r#"{"k":[1]}"#);
}

#[test]
fn test_sort_parsing() {
    let sort = Sort::parse("-created_at, title");
    assert_eq!(
        sort.keys(),
        &[
            SortKey {
                field: "created_at".to_string(),
                order: SortOrder::Descending
            },
            SortKey {
                field: "title".to_string(),
                order: SortOrder::Ascending
            },
        ]
    );
    assert_eq!(sort.to_string(), "-created_at,title");

    let built = Sort::default()
        .then("price", SortOrder::Descending)
        .then("id", SortOrder::Ascending);
    assert_eq!(built.to_string(), "-price,id");
}

#[test]
fn test_empty_sort_is_skipped() {
    let options = RequestOptions::new().sort("");
    assert!(options.is_empty());
    assert_eq!(encode_query(Some(&options)), "");
}

#[test]
fn test_options_deserialize_with_pass_through() {
    let options: RequestOptions = serde_json::from_value(json!({
        "fields": "id,title",
        "sort": "-id",
        "tags": true,
        "template": "landing",
        "page": 3
    }))
    .unwrap();

    assert_eq!(options.fields.as_deref(), Some("id,title"));
    assert_eq!(options.sort, Some(Sort::parse("-id")));
    assert_eq!(options.tags, Some(true));
    assert_eq!(
        options.extra.get("template"),
        Some(&OptionValue::Text("landing".to_string()))
    );
    assert_eq!(options.extra.get("page"), Some(&OptionValue::Int(3)));
    assert_eq!(
        encode_query(Some(&options)),
        "tags=true&fields=id%2Ctitle&sort=-id&page=3&template=landing"
    );
}

// ============================================================================
// Body encoding
// ============================================================================

#[test]
fn test_get_and_delete_never_carry_body() {
    let data = json!({"email": "a@b.com"});
    assert_eq!(
        encode_body(HttpMethod::Get, Some(&data), &JsonPayload).unwrap(),
        None
    );
    assert_eq!(
        encode_body(HttpMethod::Delete, Some(&data), &JsonPayload).unwrap(),
        None
    );
}

#[test]
fn test_post_serializes_json() {
    let data = json!({"email": "a@b.com"});
    let body = encode_body(HttpMethod::Post, Some(&data), &JsonPayload).unwrap();
    assert_eq!(body.as_deref(), Some(r#"{"email":"a@b.com"}"#));

    assert_eq!(encode_body(HttpMethod::Put, None, &JsonPayload).unwrap(), None);
}

#[test]
fn test_json_payload_sends_strings_as_strings() {
    let body = JsonPayload.encode(&json!("{\"a\":1}")).unwrap();
    assert_eq!(body, r#""{\"a\":1}""#);
}

#[test]
fn test_normalized_json_parses_strings() {
    let body = NormalizedJson.encode(&json!("{\"title\": \"x\"}")).unwrap();
    assert_eq!(body, r#"{"title":"x"}"#);

    let body = NormalizedJson.encode(&json!({"title": "x"})).unwrap();
    assert_eq!(body, r#"{"title":"x"}"#);
}

#[test]
fn test_data_envelope_wraps_object() {
    let wrapped = DataEnvelope::wrap(&json!({"title": "New Calendar"})).unwrap();
    assert_eq!(wrapped, json!({"data": {"title": "New Calendar"}}));
}

#[test]
fn test_data_envelope_keeps_existing_envelope() {
    let payload = json!({"data": {"title": "x"}});
    assert_eq!(DataEnvelope::wrap(&payload).unwrap(), payload);
}

#[test]
fn test_data_envelope_parses_json_strings() {
    let payload = json!(r#"{"time_zone":"GMT-5"}"#);
    let body = encode_body(HttpMethod::Patch, Some(&payload), &DataEnvelope).unwrap();
    assert_eq!(body.as_deref(), Some(r#"{"data":{"time_zone":"GMT-5"}}"#));
}

#[test]
fn test_data_envelope_rejects_malformed_json_string() {
    let err = DataEnvelope.encode(&json!("{not json")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Encoding);
}
