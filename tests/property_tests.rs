//! Property-based tests using proptest
//!
//! These tests verify invariants across randomized inputs, helping catch
//! edge cases that might be missed by example-based testing.

use model_attrs::{
    SENTINEL, detect_quantization, format_file_size, parse_model_family, parse_param_size,
    parse_quantization,
};
use proptest::prelude::*;

// =============================================================================
// Totality and Determinism
// =============================================================================

proptest! {
    /// Every helper returns a non-empty string and the same output for the same input
    #[test]
    fn helpers_are_total_and_deterministic(input in any::<String>()) {
        let param = parse_param_size(&input);
        let family = parse_model_family(&input);
        let quant = parse_quantization(&input);
        let size = format_file_size(input.as_str());

        prop_assert!(!param.is_empty());
        prop_assert!(!family.is_empty());
        prop_assert!(!quant.is_empty());
        prop_assert!(!size.is_empty());

        prop_assert_eq!(param, parse_param_size(&input));
        prop_assert_eq!(family, parse_model_family(&input));
        prop_assert_eq!(quant, parse_quantization(&input));
        prop_assert_eq!(size, format_file_size(input.as_str()));
    }

    /// Name-shaped strings exercise the pattern paths more often than random text
    #[test]
    fn helpers_handle_name_shaped_input(input in "[a-zA-Z0-9./:_-]{0,40}") {
        let param = parse_param_size(&input);
        let family = parse_model_family(&input);
        let quant = parse_quantization(&input);
        let size = format_file_size(input.as_str());

        prop_assert!(!param.is_empty());
        prop_assert!(!family.is_empty());
        prop_assert!(!quant.is_empty());
        prop_assert!(!size.is_empty());

        prop_assert_eq!(param, parse_param_size(&input));
        prop_assert_eq!(family, parse_model_family(&input));
        prop_assert_eq!(quant, parse_quantization(&input));
        prop_assert_eq!(size, format_file_size(input.as_str()));
    }

    /// Numeric sizes never panic, including non-finite values
    #[test]
    fn numeric_sizes_are_total(bytes in any::<f64>()) {
        prop_assert!(!format_file_size(bytes).is_empty());
    }
}

// =============================================================================
// Parameter Size
// =============================================================================

proptest! {
    /// A `:<digits>b` tag yields the digits with an uppercase `B`
    #[test]
    fn param_size_from_tag(
        base in "[a-z][a-z0-9.-]{0,15}",
        count in "[0-9]{1,4}",
        unit in "[bB]",
        rest in "(-[a-z0-9_]{1,8})?",
    ) {
        let name = format!("{}:{}{}{}", base, count, unit, rest);
        prop_assert_eq!(parse_param_size(&name), format!("{}B", count));
    }

    /// Names without a colon never carry a parameter size
    #[test]
    fn param_size_requires_colon(name in "[a-zA-Z0-9./_-]{0,30}") {
        prop_assert_eq!(parse_param_size(&name), SENTINEL);
    }
}

// =============================================================================
// Family
// =============================================================================

proptest! {
    /// Family never contains separators
    #[test]
    fn family_has_no_separators(input in any::<String>()) {
        let family = parse_model_family(&input);
        if family != SENTINEL {
            prop_assert!(!family.contains('/'));
            prop_assert!(!family.contains(':'));
            prop_assert!(!family.contains('-'));
        }
    }

    /// The family is the name part before any hyphen or tag
    #[test]
    fn family_of_namespaced_name(
        namespace in "[a-z0-9.]{1,10}",
        family in "[a-z][a-z0-9._]{0,10}",
        suffix in "(-[a-z0-9]{1,6})?",
        tag in "(:[a-z0-9-]{1,8})?",
    ) {
        let name = format!("{}/{}{}{}", namespace, family, suffix, tag);
        prop_assert_eq!(parse_model_family(&name), family);
    }

    /// Without a namespace there is no family
    #[test]
    fn family_requires_namespace(name in "[a-zA-Z0-9.:_-]{0,30}") {
        prop_assert_eq!(parse_model_family(&name), SENTINEL);
    }
}

// =============================================================================
// Quantization
// =============================================================================

proptest! {
    /// Hyphen-suffixed multi-segment codes are returned without the hyphen
    #[test]
    fn hyphen_multi_segment_code(
        base in "[a-z]{1,10}",
        bits in 2u8..9,
        segments in prop::collection::vec("[A-Z]{1,2}", 1..3),
    ) {
        let code = format!("q{}_{}", bits, segments.join("_"));
        let name = format!("{}-{}", base, code);
        prop_assert_eq!(parse_quantization(&name), code);
    }

    /// Float precision tags after the colon are detected
    #[test]
    fn colon_float_precision(base in "[a-z]{1,10}", bits in prop::sample::select(vec![8u8, 16, 32])) {
        let name = format!("{}:fp{}", base, bits);
        prop_assert_eq!(parse_quantization(&name), format!("fp{}", bits));
    }

    /// Any detected code is a substring of the name
    #[test]
    fn detected_code_is_substring(input in "[a-zA-Z0-9:_-]{0,30}") {
        if let Some(found) = detect_quantization(&input) {
            prop_assert!(input.contains(&found.code));
        }
    }
}

// =============================================================================
// File Size
// =============================================================================

proptest! {
    /// Counts below 1024 are printed as raw bytes
    #[test]
    fn small_counts_are_bytes(bytes in 1u64..1024) {
        prop_assert_eq!(format_file_size(bytes.to_string().as_str()), format!("{}B", bytes));
    }

    /// Text and numeric inputs agree for positive integers
    #[test]
    fn text_and_numeric_agree(bytes in 1u64..(1u64 << 52)) {
        prop_assert_eq!(format_file_size(bytes), format_file_size(bytes.to_string().as_str()));
    }

    /// Scaled values carry two decimals and stay within rounding of the true value
    #[test]
    fn scaled_values_round_to_hundredths(bytes in 1024u64..(1u64 << 45)) {
        let rendered = format_file_size(bytes);
        let (number, unit) = rendered.split_at(rendered.len() - 1);
        let divisor = match unit {
            "G" => 1_073_741_824.0,
            "M" => 1_048_576.0,
            "K" => 1024.0,
            other => return Err(TestCaseError::fail(format!("unexpected unit {}", other))),
        };

        let (_, decimals) = number.split_once('.').expect("two decimals");
        prop_assert_eq!(decimals.len(), 2);

        let value: f64 = number.parse().expect("numeric prefix");
        prop_assert!((value - bytes as f64 / divisor).abs() <= 0.005 + 1e-9);
    }

    /// Each threshold maps to the larger unit
    #[test]
    fn thresholds_use_larger_unit(power in prop::sample::select(vec![(10u32, "1.00K"), (20, "1.00M"), (30, "1.00G")])) {
        let (shift, expected) = power;
        prop_assert_eq!(format_file_size(1u64 << shift), expected);
        prop_assert_eq!(format_file_size((1u64 << shift).to_string().as_str()), expected);
    }
}
