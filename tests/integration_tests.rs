//! Integration tests for tomlsx document conversion

use pretty_assertions::assert_eq;
use tomlsx::{
    transpile, transpile_source, transpile_value, transpile_with_options, ConversionError,
    SourceFormat, TranspileOptions, Value,
};

// ============================================================================
// End-to-end TOML documents
// ============================================================================

mod documents {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_constants() {
        let input = r#"
        [const]
        base_number = 41
        "#;
        assert_eq!(transpile(input).unwrap(), "(define base_number 41);\n$[\n\n]");
    }

    #[test]
    fn test_nested_structures() {
        let input = r#"
        [nested]
        key1 = 42
        key2 = { subkey1 = 10, subkey2 = [1, 2, 3] }
        "#;
        let expected = "\
$[
  nested : $[
    key1 : 42,
    key2 : $[
      subkey1 : 10,
      subkey2 : (list 1 2 3)
    ]
  ]
]";
        assert_eq!(transpile(input).unwrap(), expected);
    }

    #[test]
    fn test_array_sort() {
        let input = r#"
        [data]
        sorted_values = "=sort([3, 1, 2])"
        "#;
        let expected = "\
$[
  data : $[
    sorted_values : |sort((list 3 1 2))|
  ]
]";
        assert_eq!(transpile(input).unwrap(), expected);
    }

    #[test]
    fn test_invalid_name_is_normalized() {
        let input = r#"
        ["invalid-name"]
        value = 10
        "#;
        let expected = "\
$[
  invalid_name : $[
    value : 10
  ]
]";
        assert_eq!(transpile(input).unwrap(), expected);
    }

    #[test]
    fn test_constants_in_expressions() {
        let input = r#"
        [const]
        base_number = 41

        [data]
        computed_value = "=base_number + 1"
        "#;
        let expected = "\
(define base_number 41);
$[
  data : $[
    computed_value : |base_number + 1|
  ]
]";
        assert_eq!(transpile(input).unwrap(), expected);
    }

    #[test]
    fn test_complex_nested() {
        let input = r#"
        [complex]
        level1 = { level2 = { level3 = [1, 2, 3] } }
        "#;
        let expected = "\
$[
  complex : $[
    level1 : $[
      level2 : $[
        level3 : (list 1 2 3)
      ]
    ]
  ]
]";
        assert_eq!(transpile(input).unwrap(), expected);
    }

    #[test]
    fn test_empty_structure() {
        let input = "[empty]\n";
        let expected = "\
$[
  empty : $[

  ]
]";
        assert_eq!(transpile(input).unwrap(), expected);
    }

    #[test]
    fn test_expression_is_not_evaluated() {
        let input = r#"
        [data]
        expr = "=base_number / 0"
        "#;
        let expected = "\
$[
  data : $[
    expr : |base_number / 0|
  ]
]";
        assert_eq!(transpile(input).unwrap(), expected);
    }

    #[test]
    fn test_mixed_values() {
        let input = r#"
        [const]
        limit = 10
        hosts = ["10.0.0.1", "10.0.0.2"]

        [server]
        host = "127.0.0.1"
        port = 8080
        ratio = 0.75
        debug = false
        mode = "Fast-Path"
        window = "=range([0, limit])"
        empty = []
        "#;
        let expected = "\
(define limit 10);
(define hosts (list \"10.0.0.1\" \"10.0.0.2\"));
$[
  server : $[
    host : \"127.0.0.1\",
    port : 8080,
    ratio : 0.75,
    debug : false,
    mode : fast_path,
    window : |range((list 0 limit))|,
    empty : (list )
  ]
]";
        assert_eq!(transpile(input).unwrap(), expected);
    }

    #[test]
    fn test_key_order_is_preserved() {
        let input = "b = 2\na = 1\n";
        assert_eq!(transpile(input).unwrap(), "$[\n  b : 2,\n  a : 1\n]");
    }

    #[test]
    fn test_const_section_position_does_not_matter() {
        let input = r#"
        first = 1

        [const]
        answer = 42
        "#;
        assert_eq!(
            transpile(input).unwrap(),
            "(define answer 42);\n$[\n  first : 1\n]"
        );
    }
}

// ============================================================================
// Options
// ============================================================================

mod options {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strict_rejects_hyphenated_table() {
        let input = r#"
        ["invalid-name"]
        value = 10
        "#;
        let err = transpile_with_options(input, &TranspileOptions::strict()).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidIdentifier { .. }));
        assert!(err.to_string().contains("invalid-name"));
    }

    #[test]
    fn test_leading_digit_under_both_policies() {
        let input = r#"
        [data]
        2fa = "3des"
        "#;
        assert_eq!(
            transpile(input).unwrap(),
            "$[\n  data : $[\n    n_2fa : n_3des\n  ]\n]"
        );
        assert!(transpile_with_options(input, &TranspileOptions::strict()).is_err());
    }

    #[test]
    fn test_compact_omits_empty_document() {
        let input = "[const]\nbase = 41\n";
        assert_eq!(
            transpile_with_options(input, &TranspileOptions::compact()).unwrap(),
            "(define base 41);"
        );
    }

    #[test]
    fn test_indent_width() {
        let input = "[a]\nb = 1\n";
        let options = TranspileOptions::new().with_indent(4);
        assert_eq!(
            transpile_with_options(input, &options).unwrap(),
            "$[\n    a : $[\n        b : 1\n    ]\n]"
        );
    }
}

// ============================================================================
// Errors
// ============================================================================

mod errors {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_const_error_names_section() {
        let input = r#"
        [const]
        Bad-Key = 1
        "#;
        let err = transpile_with_options(input, &TranspileOptions::strict()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Bad-Key"), "{}", msg);
        assert!(msg.contains("[const] section"), "{}", msg);
    }

    #[test]
    fn test_bare_word_error_names_path() {
        let input = r#"
        [data]
        mode = "Not Valid"
        "#;
        let err = transpile_with_options(input, &TranspileOptions::strict()).unwrap_err();
        assert!(err.to_string().contains("data.mode"));
    }

    #[test]
    fn test_parse_error_is_surfaced() {
        let err = transpile("[data\nx = 1").unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_const_must_be_a_table() {
        let err = transpile("const = 5\n").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidConstSection { .. }));
    }
}

// ============================================================================
// Other entry points
// ============================================================================

mod entry_points {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_source() {
        let input = r#"{"const": {"base": 41}, "data": {"sorted": "=sort([3,1,2])"}}"#;
        let output =
            transpile_source(input, SourceFormat::Json, &TranspileOptions::default()).unwrap();
        assert_eq!(
            output,
            "(define base 41);\n$[\n  data : $[\n    sorted : |sort((list 3 1 2))|\n  ]\n]"
        );
    }

    #[test]
    fn test_value_tree_input() {
        let doc = Value::dict([(
            "data",
            Value::dict([("sorted", Value::from("=sort([3,1,2])"))]),
        )]);
        assert_eq!(
            transpile_value(doc, &TranspileOptions::default()).unwrap(),
            "$[\n  data : $[\n    sorted : |sort((list 3 1 2))|\n  ]\n]"
        );
    }

    #[test]
    fn test_value_tree_scalar_root() {
        let output = transpile_value(Value::from("10.1.1.1"), &TranspileOptions::default());
        assert_eq!(output.unwrap(), "\"10.1.1.1\"");
    }
}
