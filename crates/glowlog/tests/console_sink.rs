//! Integration tests for the console sink.
//!
//! Targets are in-memory buffers or temporary files with an explicit
//! redirection flag, so the results do not depend on whether the test run
//! is attached to a terminal.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::thread;

use chrono::{FixedOffset, NaiveDate, TimeZone};
use glowlog::{
    BuiltinTheme, ConsoleOptions, ConsoleSink, ConsoleTarget, Level, LogEvent, PropertyValue,
    Structure,
};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Accepts at most a few bytes per call, so `write_all` loops many times.
#[derive(Clone, Default)]
struct TrickleBuffer(SharedBuffer);

impl Write for TrickleBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = buf.len().min(3);
        thread::yield_now();
        self.0.write(&buf[..n])
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn render(options: &ConsoleOptions, redirected: bool, event: &LogEvent) -> String {
    let buffer = SharedBuffer::default();
    let sink = ConsoleSink::new(options, ConsoleTarget::new(buffer.clone(), redirected));
    sink.emit(event).unwrap();
    buffer.text()
}

fn control_characters(text: &str) -> usize {
    text.chars()
        .filter(|c| c.is_control() && !c.is_whitespace())
        .count()
}

fn sample_event() -> LogEvent {
    LogEvent::new(Level::Warning, "User {Name} has {Count} items in {@Cart}")
        .at(
            FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2021, 6, 1, 8, 15, 0)
                .unwrap(),
        )
        .with_property("Name", "ada")
        .with_property("Count", 3)
        .with_property(
            "Cart",
            Structure::new(Some("Cart".into()))
                .field("Total", 12.5)
                .field("Coupon", PropertyValue::null()),
        )
        .with_exception("System.Exception: boom\n   at Checkout()")
}

// ============================================================================
// Theme gating on redirected output
// ============================================================================

#[test]
fn redirected_output_is_not_themed_by_default() {
    let options = ConsoleOptions::new()
        .theme(BuiltinTheme::Literate)
        .newline("\r\n")
        .apply_theme_to_redirected_output(false);

    let out = render(&options, true, &sample_event());
    assert!(!out.is_empty());
    assert_eq!(control_characters(&out), 0, "{:?}", out);
}

#[test]
fn redirected_output_is_themed_when_requested() {
    let options = ConsoleOptions::new()
        .theme(BuiltinTheme::Literate)
        .newline("\r\n")
        .apply_theme_to_redirected_output(true);

    let out = render(&options, true, &sample_event());
    assert!(control_characters(&out) > 0, "{:?}", out);
}

#[test]
fn terminal_output_is_themed() {
    let options = ConsoleOptions::new().theme(BuiltinTheme::Sixteen);
    let out = render(&options, false, &sample_event());
    assert!(control_characters(&out) > 0);
}

#[test]
fn none_theme_never_writes_escapes() {
    let options = ConsoleOptions::new()
        .theme(BuiltinTheme::None)
        .apply_theme_to_redirected_output(true);
    assert_eq!(control_characters(&render(&options, false, &sample_event())), 0);
    assert_eq!(control_characters(&render(&options, true, &sample_event())), 0);
}

#[test]
fn themed_runs_are_closed() {
    let options = ConsoleOptions::new().theme(BuiltinTheme::Code);
    let out = render(&options, false, &sample_event());
    let stripped = console::strip_ansi_codes(&out);
    assert!(out.ends_with(&format!("\x1b[0m{}", glowlog::LINE_ENDING)));
    assert!(stripped.contains("User ada has 3 items"));
}

// ============================================================================
// Null handling in structured values
// ============================================================================

fn dictionary_event() -> LogEvent {
    let first = NaiveDate::from_ymd_opt(2020, 12, 24)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    LogEvent::new(Level::Error, "Test: {@0}").with_property(
        "0",
        PropertyValue::dictionary([
            ("FirstKey", PropertyValue::from(first)),
            ("SecondKey", PropertyValue::null()),
        ]),
    )
}

fn null_options(skip: bool) -> ConsoleOptions {
    ConsoleOptions::new()
        .output_template("[{Level:u3}] {Message:lj}{NewLine}{Exception}")
        .theme(BuiltinTheme::None)
        .newline("\r\n")
        .skip_null_values_in_output(skip)
}

#[test]
fn null_dictionary_entries_are_skipped() {
    let out = render(&null_options(true), true, &dictionary_event());
    assert_eq!(
        out,
        "[ERR] Test: {\"FirstKey\": \"2020-12-24T00:00:00.0000000\"}\r\n"
    );
}

#[test]
fn null_dictionary_entries_are_kept() {
    let out = render(&null_options(false), true, &dictionary_event());
    assert_eq!(
        out,
        "[ERR] Test: {\"FirstKey\": \"2020-12-24T00:00:00.0000000\", \"SecondKey\": null}\r\n"
    );
}

#[test]
fn null_structure_fields_are_skipped() {
    let options = ConsoleOptions::new()
        .output_template("{Message:j}")
        .theme(BuiltinTheme::None)
        .skip_null_values_in_output(true);
    let out = render(&options, true, &sample_event().with_exception(""));
    assert_eq!(out, r#"User "ada" has 3 items in Cart {"Total": 12.5}"#);
}

// ============================================================================
// Output template behavior
// ============================================================================

#[test]
fn alignment_is_measured_without_escapes() {
    let options = ConsoleOptions::new()
        .output_template("{Level,10:u3}|{Level,-10:u3}|")
        .theme(BuiltinTheme::Literate);
    let out = render(&options, false, &LogEvent::new(Level::Error, ""));

    assert!(out.contains('\x1b'));
    assert_eq!(console::strip_ansi_codes(&out), "       ERR|ERR       |");
}

#[test]
fn exception_is_appended_without_token() {
    let options = ConsoleOptions::new()
        .output_template("{Message:l}{NewLine}")
        .theme(BuiltinTheme::None)
        .newline("\n");
    let event = LogEvent::new(Level::Error, "failed").with_exception("E: bad\n  at x");
    assert_eq!(render(&options, true, &event), "failed\nE: bad\n  at x\n");
}

#[test]
fn literal_template_ignores_event() {
    let options = ConsoleOptions::new()
        .output_template("--- {{static}} ---")
        .theme(BuiltinTheme::Literate)
        .apply_theme_to_redirected_output(true);
    let event = LogEvent::new(Level::Fatal, "{A}").with_property("A", 1);
    assert_eq!(render(&options, true, &event), "--- {static} ---");
    assert_eq!(
        render(&options, true, &event.with_exception("boom")),
        "--- {static} ---"
    );
}

#[test]
fn compiling_twice_renders_identically() {
    let template = "{Timestamp:o} [{Level,-11}] {Message} {Properties:j}{NewLine}";
    let options = ConsoleOptions::new()
        .output_template(template)
        .theme(BuiltinTheme::Grayscale);
    let event = sample_event().with_property("Extra", vec![1, 2]);

    let first = options.renderer();
    let second = options.clone().renderer();
    assert_eq!(first.render(&event, true), second.render(&event, true));
    assert_eq!(first.render(&event, false), second.render(&event, false));
}

// ============================================================================
// Targets and concurrency
// ============================================================================

#[test]
fn writes_to_a_file_target() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let target = ConsoleTarget::new(file.reopen().unwrap(), true);
    let options = ConsoleOptions::new()
        .output_template("{Level:w3}: {Message:l}{NewLine}")
        .newline("\n");
    let sink = ConsoleSink::new(&options, target);

    sink.emit(&LogEvent::new(Level::Information, "one")).unwrap();
    sink.emit(&LogEvent::new(Level::Debug, "two")).unwrap();

    let written = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(written, "inf: one\ndbg: two\n");
}

#[test]
fn concurrent_events_do_not_interleave() {
    const THREADS: usize = 8;
    const EVENTS: usize = 50;

    let buffer = TrickleBuffer::default();
    let options = ConsoleOptions::new()
        .output_template("{Message:l}{NewLine}")
        .newline("\n");
    let sink = Arc::new(ConsoleSink::new(
        &options,
        ConsoleTarget::new(buffer.clone(), true),
    ));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || {
                for n in 0..EVENTS {
                    let event = LogEvent::new(Level::Information, "{Payload}")
                        .with_property("Payload", format!("thread-{t}-event-{n}-{}", "x".repeat(40)));
                    sink.emit(&event).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let text = buffer.0.text();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), THREADS * EVENTS);
    for line in lines {
        assert!(line.starts_with("thread-"), "{:?}", line);
        assert!(line.ends_with(&"x".repeat(40)), "{:?}", line);
        assert_eq!(line.matches("thread-").count(), 1, "{:?}", line);
    }
}
