// ==============================================================================
// Shared Test Helpers
// ==============================================================================
//
// Each test file that imports this module compiles its own copy, so not every
// function is used in every binary.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use miette::{GraphicalReportHandler, GraphicalTheme};
use protogen::{
    CustomField, CustomMapField, Enum, EnumValue, MapField, Message, Reserved, ScalarField,
    ScalarType, Spec,
};

pub const FIXTURE_DIR: &str = "tests/fixtures";

/// Path to a file under `tests/fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join(FIXTURE_DIR)
        .join(name)
}

/// Read a fixture as text.
pub fn fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

/// Render a single diagnostic to a deterministic string. Uses the ASCII theme
/// at 80 columns so output has no color codes or box drawing.
pub fn render_diagnostic(report: &miette::Report) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::none()).with_width(80);
    let mut buf = String::new();
    handler
        .render_report(&mut buf, report.as_ref())
        .expect("render to String is infallible");
    buf
}

/// The `Beacon` tree from `tests/fixtures/beacon.json`, built in Rust.
pub fn beacon() -> Spec {
    let reserved = [
        Reserved::Tag(1),
        Reserved::Tag(2),
        Reserved::Tag(3),
        Reserved::Range { lower: 6, upper: 9 },
    ];

    let mut event = Message::new("Event")
        .field(CustomField::new("Habitat", 10, "string").comment("What am I?"))
        .field(ScalarField::new("Continent", 11, ScalarType::String).comment("Where am I?"))
        .field(
            MapField::new("LanguageMap", 12, ScalarType::String, ScalarType::String)
                .comment("Super essential"),
        );
    event.reserved.extend(reserved.iter().cloned());

    let mut beacon = Message::new("Beacon")
        .message(event)
        .field(CustomField::new("Habitat", 20, "string").comment("What am I?"))
        .field(ScalarField::new("Continent", 21, ScalarType::String).comment("Where am I?"))
        .field(
            MapField::new("LanguageMap", 22, ScalarType::String, ScalarType::String)
                .comment("Super essential"),
        )
        .field(CustomMapField::new("CustomMap", 23, ScalarType::String, "Event"))
        .enumeration(
            Enum::new("Country")
                .value(EnumValue::new("US", 0))
                .value(EnumValue::new("CA", 1).comment("Canada"))
                .value(EnumValue::new("GB", 2).comment("Great Britain"))
                .value(EnumValue::new("MX", 3).comment("Mexico")),
        )
        .enumeration(
            Enum::new("PlaybackState")
                .allow_alias()
                .value(EnumValue::new("Waiting", 0))
                .value(EnumValue::new("Playing", 1))
                .value(EnumValue::new("Started", 1))
                .value(EnumValue::new("Stopped", 2)),
        );
    beacon.reserved.extend(reserved);

    Spec::new("foo")
        .import("google/protobuf/timestamp.proto")
        .message(beacon)
}
