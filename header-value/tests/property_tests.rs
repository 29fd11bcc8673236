use header_value::{FieldParser, FieldValue, Grammar, Header, ValueType, catalog::ACCEPT};
use proptest::prelude::*;

static PARAMETERIZED: ValueType = ValueType::with_params("ParameterizedValue", Some("X-Params"), false);
static PARAMETERIZED_LIST: ValueType =
    ValueType::with_params("ParameterizedList", Some("X-Params-List"), true);

fn grammar_strategy() -> impl Strategy<Value = Grammar> {
    prop_oneof![
        Just(Grammar::SIMPLE),
        Just(Grammar::LIST),
        Just(Grammar::PARAMS),
        Just(Grammar::LIST_PARAMS),
        Just(Grammar::QUALITY),
        Just(Grammar::DIRECTIVE),
    ]
}

fn media_range_strategy() -> impl Strategy<Value = String> {
    (
        "\\*|[a-z]{1,8}",
        "\\*|[a-z]{1,8}",
        prop::option::of("0(\\.[0-9]{1,3})?|1(\\.0{1,3})?"),
        prop::collection::vec(("[a-z]{1,4}", "[a-z0-9]{1,4}"), 0..3),
    )
        .prop_map(|(kind, subtype, quality, params)| {
            let mut range = format!("{kind}/{subtype}");
            for (name, value) in params {
                range.push_str(&format!(";{name}={value}"));
            }
            if let Some(quality) = quality {
                range.push_str(&format!(";q={quality}"));
            }
            range
        })
}

fn list_item_strategy() -> impl Strategy<Value = (String, Vec<(String, String)>)> {
    (
        "[a-zA-Z0-9_.*-]{0,10}",
        prop::collection::vec(("[a-z]{1,6}", "[ -~]{0,12}"), 0..4),
    )
}

proptest! {
    #[test]
    fn prop_parser_always_yields_an_item(
        grammar in grammar_strategy(),
        body in "\\PC{0,40}",
    ) {
        let items = FieldParser::new(grammar).parse(&body);
        prop_assert!(!items.is_empty());
    }

    #[test]
    fn prop_param_value_roundtrip(value in "[ -~]{0,20}") {
        let rendered = FieldValue::new(&PARAMETERIZED, "v")
            .with_params([("a", value.as_str())])
            .unwrap()
            .to_string();

        let header = Header::of(&PARAMETERIZED).unwrap().with_value(&rendered);
        let values = header.values(false);

        prop_assert_eq!(values.len(), 1);
        prop_assert!(!values[0].has_error(), "{rendered}: {:?}", values[0].error());
        prop_assert_eq!(values[0].value(), "v");
        prop_assert_eq!(values[0].params().get("a"), Some(value.as_str()));
    }

    #[test]
    fn prop_serialization_is_idempotent(items in prop::collection::vec(list_item_strategy(), 1..5)) {
        let records = items
            .iter()
            .map(|(value, params)| {
                FieldValue::new(&PARAMETERIZED_LIST, value)
                    .with_params(params.iter().map(|(name, value)| (name.as_str(), value.as_str())))
                    .unwrap()
            })
            .collect::<Vec<_>>();
        let header = Header::of(&PARAMETERIZED_LIST)
            .unwrap()
            .with_records(records)
            .unwrap();

        let first = header.strings(false);
        let reparsed = Header::of(&PARAMETERIZED_LIST)
            .unwrap()
            .with_values(&first)
            .strings(false);

        prop_assert_eq!(first, reparsed);
    }

    #[test]
    fn prop_accept_quality_never_increases(
        ranges in prop::collection::vec(media_range_strategy(), 1..8),
    ) {
        let header = Header::accept(&ACCEPT).unwrap().with_value(&ranges.join(", "));

        prop_assert_eq!(header.len(), ranges.len());
        let weights = header
            .values(false)
            .into_iter()
            .map(|value| value.quality().parse::<f64>().unwrap())
            .collect::<Vec<_>>();
        prop_assert!(weights.windows(2).all(|pair| pair[0] >= pair[1]), "{weights:?}");
    }

    #[test]
    fn prop_quality_canonical_form(quality in "0(\\.[0-9]{1,3})?|1(\\.0{1,3})?") {
        let value = FieldValue::new(&ACCEPT, "*/*").with_quality(&quality).unwrap();

        prop_assert!(!value.quality().ends_with('0') || value.quality() == "0");
        prop_assert!(!value.quality().ends_with('.'));
        prop_assert_eq!(
            value.quality().parse::<f64>().unwrap(),
            quality.parse::<f64>().unwrap()
        );
    }
}
