//! Property-based tests for the template parser.

use glowlog_template::{Alignment, Direction, Node, Template};
use proptest::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

/// Re-serializes compiled nodes back into template syntax.
fn unparse(template: &Template) -> String {
    let mut out = String::new();
    for node in template.nodes() {
        match node {
            Node::Text(text) => out.push_str(&text.replace('{', "{{").replace('}', "}}")),
            Node::Property(token) => out.push_str(token.raw()),
        }
    }
    out
}

fn literal_text(template: &Template) -> String {
    template
        .nodes()
        .iter()
        .map(|node| match node {
            Node::Text(text) => text.as_str(),
            Node::Property(_) => "",
        })
        .collect()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Any input compiles, whatever it contains.
    #[test]
    fn parse_never_panics(input in ".{0,64}") {
        let _ = Template::parse(&input);
    }

    /// Text without braces compiles to exactly itself.
    #[test]
    fn brace_free_text_is_one_literal(input in "[^{}]{1,64}") {
        let template = Template::parse(&input);
        prop_assert!(template.is_literal());
        prop_assert_eq!(literal_text(&template), input);
    }

    /// Escaping every brace yields a literal template reproducing the input.
    #[test]
    fn escaped_text_round_trips(input in ".{0,64}") {
        let escaped = input.replace('{', "{{").replace('}', "}}");
        let template = Template::parse(&escaped);
        prop_assert!(template.is_literal());
        prop_assert_eq!(literal_text(&template), input);
    }

    /// Compiling the same source twice gives equal templates.
    #[test]
    fn parse_is_deterministic(input in "[a-zA-Z0-9{}:,@$ -]{0,48}") {
        prop_assert_eq!(Template::parse(&input), Template::parse(&input));
    }

    /// Unparsing and reparsing a compiled template is stable.
    #[test]
    fn reparse_is_stable(input in "[a-zA-Z0-9{}:,@ -]{0,48}") {
        let first = Template::parse(&input);
        let second = Template::parse(&unparse(&first));
        prop_assert_eq!(first.nodes(), second.nodes());
    }

    /// Well-formed tokens always come back as properties.
    #[test]
    fn valid_tokens_parse(name in "[A-Za-z_][A-Za-z0-9_]{0,12}", width in 1usize..40, left in any::<bool>()) {
        let sign = if left { "-" } else { "" };
        let source = format!("{{{},{}{}:fmt}}", name, sign, width);
        let template = Template::parse(&source);
        let token = template.properties().next().expect("token");
        prop_assert_eq!(token.name(), name.as_str());
        prop_assert_eq!(token.format(), Some("fmt"));
        let alignment = token.alignment().expect("alignment");
        prop_assert_eq!(alignment.width(), width);
        let expected = if left { Direction::Left } else { Direction::Right };
        prop_assert_eq!(alignment.direction(), expected);
    }

    /// Padding plus content always reaches the alignment width.
    #[test]
    fn padding_fills_to_width(width in 1usize..80, visible in 0usize..80, left in any::<bool>()) {
        let direction = if left { Direction::Left } else { Direction::Right };
        let padding = Alignment::new(direction, width).padding_for(visible);
        prop_assert_eq!(padding.left + padding.right + visible, width.max(visible));
    }
}
