//! Contract tests for codecs built with `create_codec` / `create_simple_codec`.

use nebula_codec::DEFAULT_TAG;
use nebula_codec::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

// ============================================================================
// FIXTURES
// ============================================================================

fn expect_number(value: &Value, ctx: &ValidationContext) -> ValidationResult<f64> {
    match value.as_f64() {
        Some(n) => Ok(n),
        None => ctx.fail("type_mismatch", "expected number"),
    }
}

fn number() -> SimpleFnCodec<f64, fn(&Value, &ValidationContext) -> ValidationResult<f64>> {
    create_simple_codec(SimpleCodecConfig::new(
        expect_number as fn(&Value, &ValidationContext) -> ValidationResult<f64>,
    ))
}

// Decodes ISO-like "HH:MM" strings into minutes past midnight.
fn clock_minutes(value: &Value, ctx: &ValidationContext) -> ValidationResult<u32> {
    let Some(text) = value.as_str() else {
        return ctx.type_mismatch("string", value);
    };
    let parsed = text
        .split_once(':')
        .and_then(|(h, m)| Some((h.parse::<u32>().ok()?, m.parse::<u32>().ok()?)));
    match parsed {
        Some((h, m)) if h < 24 && m < 60 => Ok(h * 60 + m),
        _ => Err(Issues::single(
            ctx.issue("invalid_format", "expected HH:MM").with_param("actual", text.to_owned()),
        )),
    }
}

fn format_clock(minutes: u32) -> Value {
    Value::String(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}

// ============================================================================
// SCENARIO
// ============================================================================

#[test]
fn number_codec_scenario() {
    let codec = number();

    assert_eq!(codec.decode(&json!(5)), Ok(5.0));

    let expected = Issues::single(Issue::new(Path::root(), "type_mismatch", "expected number"));
    assert_eq!(codec.decode(&json!("x")), Err(expected.clone()));

    let error = codec.parse(&json!("x")).unwrap_err();
    assert_eq!(error.issues(), &expected);
    assert_eq!(error.first_issue().path.to_string(), "");

    assert_eq!(codec.encode(5.0), 5.0);
}

// ============================================================================
// ROOT-CONTEXT EQUIVALENCE & PARSE AGREEMENT
// ============================================================================

#[rstest]
#[case(json!("00:00"))]
#[case(json!("23:59"))]
#[case(json!("24:00"))]
#[case(json!("noon"))]
#[case(json!(1200))]
#[case(json!(null))]
fn decode_matches_root_validate(#[case] input: Value) {
    let codec = create_codec(CodecConfig::new(clock_minutes, format_clock));
    assert_eq!(
        codec.decode(&input),
        codec.validate(&input, &ValidationContext::new(""))
    );
}

#[rstest]
#[case(json!("07:30"))]
#[case(json!("7h30"))]
#[case(json!([]))]
fn parse_agrees_with_decode(#[case] input: Value) {
    let codec = create_codec(CodecConfig::new(clock_minutes, format_clock));
    match codec.decode(&input) {
        Ok(value) => assert_eq!(codec.parse(&input), Ok(value)),
        Err(issues) => assert_eq!(codec.parse(&input).unwrap_err().into_issues(), issues),
    }
}

#[test]
fn parse_error_works_with_question_mark() {
    fn read_start(raw: &Value) -> Result<u32, ParseError> {
        let codec = create_codec(CodecConfig::new(clock_minutes, format_clock));
        let minutes = codec.parse(raw)?;
        Ok(minutes)
    }

    assert_eq!(read_start(&json!("01:15")), Ok(75));

    let error = read_start(&json!("99:99")).unwrap_err();
    assert_eq!(error.first_issue().code, "invalid_format");
    assert_eq!(error.first_issue().param("actual"), Some("99:99"));
    assert_eq!(
        error.to_string(),
        "decode failed with 1 issue(s): invalid_format: expected HH:MM"
    );
}

#[test]
fn encode_inverts_decode() {
    let codec = create_codec(CodecConfig::new(clock_minutes, format_clock));
    for raw in ["00:00", "09:05", "23:59"] {
        let decoded = codec.decode(&json!(raw)).unwrap();
        assert_eq!(codec.encode(decoded), json!(raw));
    }
}

// ============================================================================
// METADATA
// ============================================================================

#[test]
fn metadata_defaults() {
    let general = create_codec(CodecConfig::new(clock_minutes, format_clock));
    assert_eq!(general.metadata().tag, DEFAULT_TAG);
    assert!(!general.metadata().simple);

    let simple = number();
    assert_eq!(simple.metadata().tag, "unknown");
    assert!(simple.is_simple());
}

#[test]
fn custom_metadata_type() {
    #[derive(Debug)]
    struct Documented {
        tag: &'static str,
        summary: &'static str,
    }

    impl CodecMetadata for Documented {
        fn tag(&self) -> &str {
            self.tag
        }

        fn is_simple(&self) -> bool {
            false
        }
    }

    let codec = create_codec(
        CodecConfig::new(clock_minutes, format_clock).with_metadata(Documented {
            tag: "clock",
            summary: "minutes past midnight",
        }),
    );

    assert_eq!(codec.tag(), "clock");
    assert_eq!(codec.metadata().summary, "minutes past midnight");
}

// ============================================================================
// CONSTRUCTION PURITY
// ============================================================================

#[test]
fn equivalent_constructions_behave_identically() {
    let first = create_codec(CodecConfig::new(clock_minutes, format_clock));
    let second = create_codec(CodecConfig::new(clock_minutes, format_clock));
    let ctx = ValidationContext::root().field("opens_at");

    for input in [json!("08:00"), json!("8"), json!(false)] {
        assert_eq!(first.decode(&input), second.decode(&input));
        assert_eq!(first.validate(&input, &ctx), second.validate(&input, &ctx));
    }
    assert_eq!(first.encode(61), second.encode(61));
    assert_eq!(first.metadata(), second.metadata());
}

#[test]
fn boxed_codecs_share_one_type() {
    let codecs: Vec<BoxCodec<f64, f64, SimpleMetadata>> = vec![
        number().boxed(),
        create_simple_codec(SimpleCodecConfig::new(|value: &Value, ctx: &ValidationContext| {
            match value.as_f64() {
                Some(n) if n >= 0.0 => Ok(n),
                Some(_) => ctx.fail("negative", "expected a non-negative number"),
                None => ctx.type_mismatch("number", value),
            }
        }))
        .boxed(),
    ];

    let results: Vec<_> = codecs.iter().map(|c| c.decode(&json!(-1)).is_ok()).collect();
    assert_eq!(results, vec![true, false]);
}

#[test]
fn codecs_are_shareable_across_threads() {
    let codec = std::sync::Arc::new(number());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let codec = std::sync::Arc::clone(&codec);
            std::thread::spawn(move || codec.decode(&json!(i)))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Ok(i as f64));
    }
}
