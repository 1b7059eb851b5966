//! Property-based tests for event rendering.

use chrono::{FixedOffset, TimeZone};
use glowlog::{
    BuiltinTheme, ConsoleOptions, Level, LogEvent, OutputTemplateRenderer, PropertyValue,
    Structure, Template, Theme,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn level() -> impl Strategy<Value = Level> {
    prop::sample::select(Level::ALL.to_vec())
}

fn builtin_theme() -> impl Strategy<Value = BuiltinTheme> {
    prop::sample::select(BuiltinTheme::ALL.to_vec())
}

fn scalar() -> impl Strategy<Value = PropertyValue> {
    prop_oneof![
        Just(PropertyValue::null()),
        any::<bool>().prop_map(PropertyValue::from),
        any::<i64>().prop_map(PropertyValue::from),
        any::<f64>().prop_map(PropertyValue::from),
        "[a-zA-Z0-9 \"\\\\]{0,12}".prop_map(PropertyValue::from),
    ]
}

fn value() -> impl Strategy<Value = PropertyValue> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(PropertyValue::Sequence),
            prop::collection::vec(("[A-Z][a-z]{0,5}", inner.clone()), 0..4).prop_map(|fields| {
                PropertyValue::from(
                    fields
                        .into_iter()
                        .fold(Structure::new(None), |s, (name, value)| s.field(name, value)),
                )
            }),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4)
                .prop_map(PropertyValue::dictionary),
        ]
    })
}

fn event() -> impl Strategy<Value = LogEvent> {
    (
        level(),
        "[a-zA-Z {}0-9]{0,24}",
        prop::collection::vec(("[A-Za-z]{1,6}", value()), 0..4),
        prop::option::of("[a-z \n]{0,20}"),
        0i64..4_000_000_000,
    )
        .prop_map(|(level, message, properties, exception, seconds)| {
            let timestamp = FixedOffset::east_opt(0)
                .unwrap()
                .timestamp_opt(seconds, 0)
                .unwrap();
            let event = properties
                .into_iter()
                .fold(LogEvent::new(level, &message).at(timestamp), |e, (n, v)| {
                    e.with_property(n, v)
                });
            match exception {
                Some(text) => event.with_exception(text),
                None => event,
            }
        })
}

fn has_escape(text: &str) -> bool {
    text.contains('\x1b')
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// A template without tokens renders as its own text, whatever the event.
    #[test]
    fn literal_template_round_trips(text in "[^{}]{0,40}", event in event(), themed in any::<bool>()) {
        let renderer = OutputTemplateRenderer::new(Template::parse(&text), Theme::literate());
        let out = renderer.render(&event, themed);
        prop_assert_eq!(out, text);
    }

    /// Two compilations of the same template render the same bytes.
    #[test]
    fn compilation_is_idempotent(event in event(), theme in builtin_theme(), themed in any::<bool>()) {
        let options = ConsoleOptions::new()
            .output_template("{Timestamp} {Level,-5:u3} {Message:lj} {Properties}{NewLine}{Exception}")
            .theme(theme)
            .skip_null_values_in_output(true);
        prop_assert_eq!(
            options.renderer().render(&event, themed),
            options.renderer().render(&event, themed)
        );
    }

    /// Unthemed output never carries escape sequences.
    #[test]
    fn unthemed_output_is_plain(event in event(), theme in builtin_theme()) {
        let options = ConsoleOptions::new()
            .output_template("{Timestamp:o} {Level:w4} {Message} {Properties:j}{NewLine}")
            .theme(theme);
        prop_assert!(!has_escape(&options.renderer().render(&event, false)));
    }

    /// Padding is computed on the visible width, themed or not.
    #[test]
    fn aligned_level_has_visible_width(level in level(), width in 1usize..16, left in any::<bool>()) {
        let alignment = if left { format!("-{}", width) } else { width.to_string() };
        let template = format!("{{Level,{}:u3}}", alignment);
        let renderer = OutputTemplateRenderer::new(Template::parse(&template), Theme::literate());
        let event = LogEvent::new(level, "");

        let plain = renderer.render(&event, false);
        let themed = renderer.render(&event, true);
        prop_assert_eq!(plain.chars().count(), width.max(3));
        prop_assert_eq!(console::strip_ansi_codes(&themed).into_owned(), plain);
    }

    /// Skipping nulls never leaves a null entry in a dictionary dump.
    #[test]
    fn skipped_nulls_do_not_appear(keys in prop::collection::vec("[a-z]{1,6}", 1..5)) {
        let dictionary = PropertyValue::dictionary(keys.iter().map(|k| (k.clone(), PropertyValue::null())));
        let event = LogEvent::new(Level::Information, "{@D}").with_property("D", dictionary);
        let options = ConsoleOptions::new()
            .output_template("{Message:j}")
            .theme(BuiltinTheme::None)
            .skip_null_values_in_output(true);
        prop_assert_eq!(options.renderer().render(&event, false), "{}");
    }
}
