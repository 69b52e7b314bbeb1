//! End-to-end behavior of the style registry through the public API.

use proptest::prelude::*;
use serial_test::serial;
use standout_style::{
    content_length, ContentMeasure, ExtensionMap, OutputRendering, ProgressView, StyleError,
    StyleRegistry, StyleString,
};

// =========================================================================
// Validation gate
// =========================================================================

#[test]
fn error_style_with_text_is_rejected() {
    let mut registry = StyleRegistry::new();
    let err = registry
        .formatting_mut()
        .set_error("\x1b[31mBOOM")
        .unwrap_err();
    assert!(matches!(err, StyleError::ContentViolation { ref plain_text } if plain_text == "BOOM"));
    assert_eq!(registry.formatting().error(), "\x1b[31;1m");
}

#[test]
fn error_style_without_text_is_accepted() {
    let mut registry = StyleRegistry::new();
    registry.formatting_mut().set_error("\x1b[31m").unwrap();
    assert_eq!(registry.formatting().error(), "\x1b[31m");
}

#[test]
fn every_style_setter_shares_the_gate() {
    let mut registry = StyleRegistry::new();
    let before = registry.clone();
    let bad = "\x1b[1mvisible";

    let results = [
        registry.formatting_mut().set_format_accent(bad),
        registry.formatting_mut().set_table_header(bad),
        registry.formatting_mut().set_error_accent(bad),
        registry.formatting_mut().set_error(bad),
        registry.formatting_mut().set_warning(bad),
        registry.formatting_mut().set_verbose(bad),
        registry.formatting_mut().set_debug(bad),
        registry.progress_mut().set_style(bad),
        registry.file_info_mut().set_directory(bad),
        registry.file_info_mut().set_symbolic_link(bad),
        registry.file_info_mut().set_executable(bad),
        registry.file_info_mut().extension_mut().add(".new", bad),
        registry.file_info_mut().extension_mut().set(".zip", bad),
    ];

    for result in results {
        assert!(matches!(result, Err(StyleError::ContentViolation { .. })));
    }
    assert_eq!(registry, before);
}

#[test]
fn custom_measure_builds_values_for_setters() {
    struct NoDigits;

    impl ContentMeasure for NoDigits {
        fn content_length(&self, text: &str) -> usize {
            text.chars().filter(|c| c.is_ascii_digit()).count()
        }

        fn plain_text(&self, text: &str) -> String {
            text.chars().filter(|c| c.is_ascii_digit()).collect()
        }
    }

    let accepted = StyleString::parse_with("<bold>", &NoDigits).unwrap();
    let mut registry = StyleRegistry::new();
    registry.formatting_mut().set_verbose(&accepted).unwrap();
    assert_eq!(registry.formatting().verbose(), "<bold>");

    let err = StyleString::parse_with("\x1b[1m", &NoDigits).unwrap_err();
    assert_eq!(
        err,
        StyleError::ContentViolation {
            plain_text: "1".to_string()
        }
    );
}

// =========================================================================
// Colors
// =========================================================================

#[test]
fn rgb_forms_agree() {
    let registry = StyleRegistry::new();
    let fg = registry.foreground();
    assert_eq!(fg.from_rgb_packed(0xFF0000), fg.from_rgb(255, 0, 0));
    assert_eq!(fg.from_rgb(255, 0, 0), "\x1b[38;2;255;0;0m");
    assert_eq!(
        registry.background().from_rgb_packed(0xFF0000),
        "\x1b[48;2;255;0;0m"
    );
}

#[test]
fn rgb_output_is_a_valid_style() {
    let mut registry = StyleRegistry::new();
    let teal = registry.foreground().from_rgb(0, 128, 128);
    registry.formatting_mut().set_table_header(teal).unwrap();
    assert_eq!(registry.formatting().table_header(), "\x1b[38;2;0;128;128m");
}

// =========================================================================
// Extension map
// =========================================================================

#[test]
fn extension_add_is_strict_set_is_upsert() {
    let mut map = ExtensionMap::empty();
    map.add(".txt", "\x1b[36m").unwrap();
    assert!(map.contains_key(".TXT").unwrap());

    assert!(matches!(
        map.add(".txt", "\x1b[35m"),
        Err(StyleError::DuplicateExtension { .. })
    ));
    map.set(".txt", "\x1b[35m").unwrap();
    assert_eq!(map.get(".TXT").unwrap().map(StyleString::as_str), Some("\x1b[35m"));
}

#[test]
fn extension_remove_absent_and_clear() {
    let mut registry = StyleRegistry::new();
    let map = registry.file_info_mut().extension_mut();
    map.remove(".nothing").unwrap();
    map.clear();
    assert_eq!(map.keys().count(), 0);
}

// =========================================================================
// Progress
// =========================================================================

#[test]
fn progress_width_boundary() {
    let mut registry = StyleRegistry::new();
    assert_eq!(
        registry.progress_mut().set_max_width(17),
        Err(StyleError::WidthOutOfRange { width: 17, min: 18 })
    );
    registry.progress_mut().set_max_width(18).unwrap();
    assert_eq!(registry.progress().max_width(), 18);
}

#[test]
fn progress_view_and_indicator() {
    let mut registry = StyleRegistry::new();
    registry.progress_mut().set_view(ProgressView::Classic);
    registry.progress_mut().set_use_osc_indicator(true);
    assert_eq!(registry.progress().view(), ProgressView::Classic);
    assert!(registry.progress().use_osc_indicator());
}

// =========================================================================
// Registry
// =========================================================================

#[test]
fn hyperlink_is_not_validated() {
    let registry = StyleRegistry::new();
    let link = registry.format_hyperlink("click", "https://example.com/a?b=c");
    assert_eq!(
        link,
        "\x1b]8;;https://example.com/a?b=c\x1b\\click\x1b]8;;\x1b\\"
    );
}

#[test]
#[serial]
fn global_instance_is_shared() {
    assert!(std::ptr::eq(StyleRegistry::global(), StyleRegistry::global()));

    let previous = {
        let mut registry = StyleRegistry::global().lock().unwrap();
        let previous = registry.output_rendering();
        registry.set_output_rendering(OutputRendering::Host);
        previous
    };

    let observed = std::thread::spawn(|| StyleRegistry::global().lock().unwrap().output_rendering())
        .join()
        .unwrap();
    assert_eq!(observed, OutputRendering::Host);

    StyleRegistry::global()
        .lock()
        .unwrap()
        .set_output_rendering(previous);
}

// =========================================================================
// Properties
// =========================================================================

fn sgr_sequence() -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..=107, 1..4).prop_map(|params| {
        let params: Vec<String> = params.iter().map(|p| p.to_string()).collect();
        format!("\x1b[{}m", params.join(";"))
    })
}

proptest! {
    #[test]
    fn setter_accepts_iff_no_content(
        prefix in sgr_sequence(),
        text in "[a-zA-Z0-9 !?#]{0,8}",
    ) {
        let value = format!("{}{}", prefix, text);
        let mut registry = StyleRegistry::new();
        let before = registry.formatting().warning().clone();

        let result = registry.formatting_mut().set_warning(value.as_str());

        if content_length(&value) == 0 {
            prop_assert!(result.is_ok());
            prop_assert_eq!(registry.formatting().warning().as_str(), value.as_str());
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(registry.formatting().warning(), &before);
        }
    }

    #[test]
    fn extension_keys_fold_case(ext in "\\.[a-z0-9]{1,6}") {
        let mut map = ExtensionMap::empty();
        map.add(&ext, "\x1b[1m").unwrap();
        let upper = ext.to_uppercase();
        prop_assert!(map.contains_key(&upper).unwrap());
        let is_duplicate = matches!(
            map.add(&upper, "\x1b[2m"),
            Err(StyleError::DuplicateExtension { .. })
        );
        prop_assert!(is_duplicate);
    }

    #[test]
    fn widths_at_or_above_minimum_round_trip(width in 18usize..10_000) {
        let mut registry = StyleRegistry::new();
        registry.progress_mut().set_max_width(width).unwrap();
        prop_assert_eq!(registry.progress().max_width(), width);
    }
}
