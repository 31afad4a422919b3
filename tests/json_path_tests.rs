//! Integration tests for the `JsonPath` DSL.

#![forbid(unsafe_code)]

use json_optics::codec::{Decoder, DecodingError, Encoder, FunctionDecoder, FunctionEncoder};
use json_optics::json::{Json, JsonNumber};
use json_optics::optics::{Optional, Traversal};
use json_optics::path::JsonPath;
use rstest::{fixture, rstest};

#[fixture]
fn document() -> Json {
    Json::object([
        (
            "a",
            Json::object([(
                "b",
                Json::array([Json::from(1), Json::from(2), Json::from(3)]),
            )]),
        ),
        ("c", Json::from("x")),
    ])
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[rstest]
fn test_select_then_array(document: Json) {
    let b = JsonPath::root().select("a").select("b").array();
    assert_eq!(
        b.get_option(&document),
        Some(vec![Json::from(1), Json::from(2), Json::from(3)])
    );
}

#[rstest]
fn test_every_int_modify(document: Json) {
    let numbers = JsonPath::root().select("a").select("b").every().int();
    let expected = Json::object([
        (
            "a",
            Json::object([(
                "b",
                Json::array([Json::from(2), Json::from(3), Json::from(4)]),
            )]),
        ),
        ("c", Json::from("x")),
    ]);
    assert_eq!(numbers.modify_all(document, |n| n + 1), expected);
}

#[rstest]
fn test_select_string_present_and_missing(document: Json) {
    assert_eq!(
        JsonPath::root().select("c").string().get_option(&document),
        Some("x".to_string())
    );
    assert_eq!(
        JsonPath::root().select("missing").string().get_option(&document),
        None
    );
}

#[rstest]
fn test_filter_index_int(document: Json) {
    let first = JsonPath::root()
        .select("a")
        .select("b")
        .filter_index(|index| index == 0)
        .int();
    assert_eq!(first.get_all(&document), vec![1]);
}

// =============================================================================
// Projections
// =============================================================================

#[rstest]
#[case(Json::from(5), Some(5), Some(5.0))]
#[case(Json::from(2.5), None, Some(2.5))]
#[case(Json::from("5"), None, None)]
fn test_numeric_projections(
    #[case] json: Json,
    #[case] expected_int: Option<i32>,
    #[case] expected_double: Option<f64>,
) {
    let root = JsonPath::root();
    assert_eq!(root.int().get_option(&json), expected_int);
    assert_eq!(root.long().get_option(&json), expected_int.map(i64::from));
    assert_eq!(root.double().get_option(&json), expected_double);
}

#[rstest]
fn test_long_rejects_values_outside_i32() {
    let big = Json::from(i64::from(i32::MAX) + 1);
    assert_eq!(JsonPath::root().int().get_option(&big), None);
    assert_eq!(
        JsonPath::root().long().get_option(&big),
        Some(i64::from(i32::MAX) + 1)
    );
}

#[rstest]
fn test_decimal_and_number_projections() {
    let json = Json::Number(JsonNumber::Decimal("12.50".parse().unwrap()));
    assert_eq!(
        JsonPath::root()
            .decimal()
            .get_option(&json)
            .map(|decimal| decimal.to_string()),
        Some("12.50".to_string())
    );
    assert_eq!(
        JsonPath::root().number().get_option(&json),
        Some(JsonNumber::Float(12.5))
    );
    assert_eq!(JsonPath::root().float().get_option(&json), Some(12.5));
}

#[rstest]
fn test_null_and_boolean_projections() {
    let json = Json::object([("n", Json::Null), ("t", Json::from(true))]);
    assert_eq!(JsonPath::root().select("n").null().get_option(&json), Some(()));
    assert_eq!(JsonPath::root().select("t").null().get_option(&json), None);
    assert_eq!(
        JsonPath::root().select("t").boolean().get_option(&json),
        Some(true)
    );

    let flipped = JsonPath::root().select("t").boolean().modify(json, |flag| !flag);
    assert_eq!(
        JsonPath::root().select("t").boolean().get_option(&flipped),
        Some(false)
    );
}

#[rstest]
fn test_object_projection_reads_entries(document: Json) {
    let a = JsonPath::root().select("a").object();
    let keys: Option<Vec<String>> = a
        .get_option(&document)
        .map(|object| object.keys().map(ToString::to_string).collect());
    assert_eq!(keys, Some(vec!["b".to_string()]));
}

#[rstest]
#[case("3.0000000000000000001")]
#[case("1e-400")]
#[case("2.5")]
fn test_int_rejects_fractional_decimal_literals(#[case] text: &str) {
    let json = Json::Number(JsonNumber::Decimal(text.parse().unwrap()));
    assert_eq!(JsonPath::root().int().get_option(&json), None);
    assert_eq!(JsonPath::root().long().get_option(&json), None);
    assert_ne!(json, Json::from(0));
}

#[rstest]
fn test_float_skips_values_it_cannot_hold() {
    let json = Json::array([Json::from(0.1), Json::from(1.5)]);
    let floats = JsonPath::root().every().float();
    assert_eq!(floats.get_all(&json), vec![1.5]);
    assert_eq!(floats.modify_all(json.clone(), |x| x), json);
}

// =============================================================================
// Select versus At
// =============================================================================

#[rstest]
fn test_select_conflates_null_and_missing() {
    let json = Json::object([("present", Json::Null)]);
    let present = JsonPath::root().select("present").null();
    let missing = JsonPath::root().select("missing").null();

    assert_eq!(present.get_option(&json), Some(()));
    assert_eq!(missing.get_option(&json), None);
    assert_eq!(
        JsonPath::root().select("missing").optional().set(json.clone(), Json::from(1)),
        json
    );
}

#[rstest]
fn test_at_distinguishes_null_from_missing() {
    let json = Json::object([("present", Json::Null)]);
    assert_eq!(
        JsonPath::root().at("present").get_option(&json),
        Some(Some(Json::Null))
    );
    assert_eq!(JsonPath::root().at("missing").get_option(&json), Some(None));
    assert_eq!(JsonPath::root().at("missing").get_option(&Json::from(1)), None);
}

#[rstest]
fn test_nested_at_inserts_under_existing_object(document: Json) {
    let d = JsonPath::root().select("a").at("d");
    let updated = d.set(document, Some(Json::from("new")));
    assert_eq!(
        JsonPath::root().select("a").select("d").string().get_option(&updated),
        Some("new".to_string())
    );
}

// =============================================================================
// Traversal Mode
// =============================================================================

#[rstest]
fn test_every_over_object_values(document: Json) {
    let kinds: Vec<String> = JsonPath::root()
        .every()
        .traversal()
        .get_all(&document)
        .iter()
        .map(|value| value.kind().to_string())
        .collect();
    assert_eq!(kinds, vec!["object".to_string(), "string".to_string()]);
}

#[rstest]
fn test_every_on_scalar_is_empty() {
    let every = JsonPath::root().every().traversal();
    assert!(every.get_all(&Json::from(1)).is_empty());
    assert_eq!(every.modify_all(Json::from(1), |_| Json::Null), Json::from(1));
}

#[rstest]
fn test_filter_keys_set_all(document: Json) {
    let cleared = JsonPath::root()
        .filter_keys(|key| key.starts_with('c'))
        .traversal()
        .set_all(document, Json::Null);
    assert_eq!(
        JsonPath::root().at("c").get_option(&cleared),
        Some(Some(Json::Null))
    );
    assert!(JsonPath::root().select("a").object().is_present(&cleared));
}

#[rstest]
fn test_traversal_select_extract() {
    let people = Json::array([
        Json::object([("age", Json::from(30))]),
        Json::object([("age", Json::from("unknown"))]),
        Json::object([("age", Json::from(45))]),
    ]);
    let ages = JsonPath::root().every().select_extract::<i32>("age");
    assert_eq!(ages.get_all(&people), vec![30, 45]);
    assert_eq!(ages.fold(&people, 0, |sum, age| sum + age), 75);
    assert!(ages.exists(&people, |age| *age > 40));
    assert!(!ages.for_all(&people, |age| *age > 40));
}

// =============================================================================
// Extraction
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

fn decode_point(json: &Json) -> Result<Point, DecodingError> {
    let field = |name: &str| {
        json.as_object()
            .and_then(|object| object.get(name))
            .and_then(|value| value.as_number())
            .and_then(JsonNumber::to_int)
            .ok_or_else(|| DecodingError::Object(json.clone()))
    };
    Ok(Point {
        x: field("x")?,
        y: field("y")?,
    })
}

fn encode_point(point: &Point) -> Json {
    Json::object([("x", Json::from(point.x)), ("y", Json::from(point.y))])
}

#[rstest]
fn test_extract_with_user_codec() {
    let decoder = FunctionDecoder::new(decode_point);
    let encoder = FunctionEncoder::new(encode_point);
    let json = Json::object([(
        "origin",
        Json::object([("x", Json::from(0)), ("y", Json::from(0))]),
    )]);

    let origin =
        JsonPath::root().select_extract_with("origin", decoder.clone(), encoder.clone());
    assert_eq!(origin.get_option(&json), Some(Point { x: 0, y: 0 }));

    let moved = origin.modify(json, |point| Point { x: point.x + 1, ..point });
    assert_eq!(
        JsonPath::root().select("origin").select("x").int().get_option(&moved),
        Some(1)
    );
    assert_eq!(
        decoder.decode(&encoder.encode(&Point { x: 3, y: 4 })),
        Ok(Point { x: 3, y: 4 })
    );
}

#[rstest]
fn test_extract_discards_decoding_error() {
    let json = Json::array([Json::from(1), Json::from("two")]);
    let pair = JsonPath::root().extract::<(i32, i32)>();
    assert_eq!(pair.get_option(&json), None);
    assert_eq!(pair.set(json.clone(), (5, 6)), json);
}

#[rstest]
fn test_paths_are_reusable_values(document: Json) {
    let a = JsonPath::root().select("a");
    let b = a.select("b");
    let first = b.get(0).int();
    let last = b.get(2).int();

    let swapped = last.set(first.set(document.clone(), 3), 1);
    assert_eq!(first.get_option(&swapped), Some(3));
    assert_eq!(last.get_option(&swapped), Some(1));
    assert!(a.optional().is_present(&document));
}
