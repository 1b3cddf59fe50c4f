use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Directive, Template, render_local_timestamp};
use crate::level::{DEFAULT_LEVEL_NAMES, Level, LevelNames};

#[test]
fn default_template_matches_the_stock_line_shape() {
    let template = Template::default();
    assert_eq!(template.segment_count(), 2);
    assert_eq!(
        template.segment(0),
        Some(
            [
                Directive::Text,
                Directive::Timestamp,
                Directive::Text,
                Directive::Level,
                Directive::Text,
            ]
            .as_slice()
        )
    );
    assert_eq!(template.segment(1), Some([].as_slice()));
    assert_eq!(template.texts, ["[", "] ", ": "]);
    assert!(template.closures.is_empty());
}

#[test]
fn payload_splits_the_directive_stream_into_segments() {
    let template = Template::builder()
        .text("a")
        .payload()
        .text("b")
        .payload()
        .text("c")
        .build();
    assert_eq!(template.segment_count(), 3);
    assert_eq!(template.texts, ["a", "b", "c"]);
    for index in 0..3 {
        assert_eq!(template.segment(index), Some([Directive::Text].as_slice()));
    }
    assert_eq!(template.segment(3), None);
}

#[test]
fn template_without_payload_is_a_single_prefix_segment() {
    let template = Template::builder().text("only").level().build();
    assert_eq!(template.segment_count(), 1);
    assert_eq!(
        template.segment(0),
        Some([Directive::Text, Directive::Level].as_slice())
    );
}

#[test]
fn building_never_invokes_closures() {
    let calls = Arc::new(AtomicUsize::new(0));
    let witness = Arc::clone(&calls);
    let template = Template::builder()
        .closure(move || {
            witness.fetch_add(1, Ordering::Relaxed);
            0
        })
        .payload()
        .build();
    assert_eq!(template.closures.len(), 1);
    assert_eq!(calls.load(Ordering::Relaxed), 0);
}

#[test]
fn stored_closure_renders_through_display() {
    let template = Template::builder().closure(|| 42).payload().build();
    assert_eq!((template.closures[0])(), "42");
}

#[test]
fn level_names_default_to_the_colored_table() {
    let template = Template::builder().level().payload().build();
    for level in Level::ALL {
        assert_eq!(
            template.level_name(level),
            DEFAULT_LEVEL_NAMES[level.ordinal()]
        );
    }
}

#[test]
fn level_names_override_replaces_every_label() {
    const PLAIN: LevelNames = ["F", "E", "W", "N", "I", "D"];
    let template = Template::builder()
        .level()
        .payload()
        .level_names(PLAIN)
        .build();
    for level in Level::ALL {
        assert_eq!(template.level_name(level), PLAIN[level.ordinal()]);
    }
}

#[test]
fn timestamp_shape_is_space_padded_date_and_time() {
    let mut out = String::new();
    render_local_timestamp(&mut out);
    assert_eq!(out.len(), 21, "rendered {out:?}");
    let bytes = out.as_bytes();
    assert_eq!(bytes[0], b' ');
    assert_eq!(bytes[5], b'-');
    assert_eq!(bytes[8], b'-');
    assert_eq!(bytes[11], b' ');
    assert_eq!(bytes[14], b':');
    assert_eq!(bytes[17], b':');
    assert_eq!(bytes[20], b' ');
}

#[test]
fn debug_reports_closure_count_not_contents() {
    let template = Template::builder().closure(|| "x").payload().build();
    let rendered = format!("{template:?}");
    assert!(rendered.contains("closures: 1"), "{rendered}");
}
