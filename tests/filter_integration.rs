//! Integration tests for label filtering.
//!
//! These tests drive `get_metadata` end to end: first against the in-memory
//! mock source, then against real EXIF data decoded from TIFF fixtures.

mod common;

use tempfile::TempDir;

use picmeta::core::filter::{get_metadata, FilterError};
use picmeta::core::types::{MetadataRecord, MetadataReport, TagValue};
use picmeta::source::mock::{MockFactory, MockFile};
use picmeta::source::{ExifFactory, ImageFile};

use common::{camera_photo, phone_photo, tag};

// =============================================================================
// Test Fixtures
// =============================================================================

fn factory() -> MockFactory {
    MockFactory::new()
        .with_file("abc.jpg", [("shared", "abc_shared"), ("abc_only", "abc only")])
        .with_file("def.jpg", [("shared", "def_shared"), ("def_only", "def only")])
        .with_file("hij.jpg", [("shared", "hij shared"), ("hij_only", "hij only")])
}

fn abc() -> MockFile {
    MockFile::new("abc.jpg")
}

fn def() -> MockFile {
    MockFile::new("def.jpg")
}

fn rec(tags: &[(&str, &str)]) -> MetadataRecord {
    tags.iter()
        .map(|(k, v)| (k.to_string(), TagValue::from(*v)))
        .collect()
}

fn report<const N: usize>(entries: [(&str, MetadataRecord); N]) -> MetadataReport {
    entries
        .into_iter()
        .map(|(file, record)| (file.to_string(), record))
        .collect()
}

const NO_LABELS: &[&str] = &[];

// =============================================================================
// Argument checks
// =============================================================================

#[test]
fn no_files_rejected() {
    let err = get_metadata(&factory(), &[] as &[MockFile], &["label"]).unwrap_err();
    assert!(matches!(err, FilterError::InvalidArgument(_)));

    let err = get_metadata(&factory(), &[] as &[MockFile], NO_LABELS).unwrap_err();
    assert!(matches!(err, FilterError::InvalidArgument(_)));
}

#[test]
fn file_not_found() {
    let factory = factory();
    let unknown = MockFile::new("xyz.jpg");

    let err = get_metadata(&factory, &[unknown.clone()], NO_LABELS).unwrap_err();
    assert!(matches!(err, FilterError::SourceConstruction { .. }));

    // Blank labels are rejected before the file is even looked at
    factory.clear_opened();
    let err = get_metadata(&factory, &[unknown], &[""]).unwrap_err();
    assert!(matches!(err, FilterError::InvalidArgument(_)));
    assert!(factory.opened().is_empty());
}

#[test]
fn failure_after_first_file_returns_nothing() {
    let factory = factory();
    let files = [abc(), MockFile::new("xyz.jpg"), def()];

    let result = get_metadata(&factory, &files, NO_LABELS);

    assert!(result.is_err());
    assert_eq!(
        factory.opened(),
        vec!["abc.jpg".to_string(), "xyz.jpg".to_string()]
    );
}

// =============================================================================
// Single file
// =============================================================================

#[test]
fn get_metadata_file_1() {
    let f = factory();

    assert_eq!(
        get_metadata(&f, &[abc()], NO_LABELS).unwrap(),
        report([("abc.jpg", rec(&[("abc_only", "abc only"), ("shared", "abc_shared")]))]),
        "expected all metadata for abc.jpg"
    );
    assert_eq!(
        get_metadata(&f, &[abc()], &["shared"]).unwrap(),
        report([("abc.jpg", rec(&[("shared", "abc_shared")]))]),
    );
    assert_eq!(
        get_metadata(&f, &[abc()], &["abc"]).unwrap(),
        report([("abc.jpg", rec(&[("abc_only", "abc only")]))]),
    );
    assert_eq!(
        get_metadata(&f, &[abc()], &["abc_only"]).unwrap(),
        report([("abc.jpg", rec(&[("abc_only", "abc only")]))]),
    );
    assert_eq!(
        get_metadata(&f, &[abc()], &["abc", "sh"]).unwrap(),
        report([("abc.jpg", rec(&[("abc_only", "abc only"), ("shared", "abc_shared")]))]),
    );
    assert_eq!(
        get_metadata(&f, &[abc()], &["not there"]).unwrap(),
        report([("abc.jpg", rec(&[]))]),
    );
    assert!(matches!(
        get_metadata(&f, &[abc()], &[""]),
        Err(FilterError::InvalidArgument(_))
    ));
}

#[test]
fn get_metadata_file_2() {
    let f = factory();

    assert_eq!(
        get_metadata(&f, &[def()], NO_LABELS).unwrap(),
        report([("def.jpg", rec(&[("def_only", "def only"), ("shared", "def_shared")]))]),
    );
    assert_eq!(
        get_metadata(&f, &[def()], &["def"]).unwrap(),
        report([("def.jpg", rec(&[("def_only", "def only")]))]),
    );
    assert_eq!(
        get_metadata(&f, &[def()], &["def", "sh"]).unwrap(),
        report([("def.jpg", rec(&[("def_only", "def only"), ("shared", "def_shared")]))]),
    );
    assert_eq!(
        get_metadata(&f, &[def()], &["not there"]).unwrap(),
        report([("def.jpg", rec(&[]))]),
    );
}

// =============================================================================
// Multiple files
// =============================================================================

#[test]
fn get_metadata_file_both() {
    let f = factory();
    let both = [abc(), def()];

    assert_eq!(
        get_metadata(&f, &both, NO_LABELS).unwrap(),
        report([
            ("abc.jpg", rec(&[("abc_only", "abc only"), ("shared", "abc_shared")])),
            ("def.jpg", rec(&[("def_only", "def only"), ("shared", "def_shared")])),
        ]),
    );
    assert_eq!(
        get_metadata(&f, &both, &["shared"]).unwrap(),
        report([
            ("abc.jpg", rec(&[("shared", "abc_shared")])),
            ("def.jpg", rec(&[("shared", "def_shared")])),
        ]),
    );
    assert_eq!(
        get_metadata(&f, &both, &["def"]).unwrap(),
        report([("abc.jpg", rec(&[])), ("def.jpg", rec(&[("def_only", "def only")]))]),
    );
    assert_eq!(
        get_metadata(&f, &both, &["def", "sh"]).unwrap(),
        report([
            ("abc.jpg", rec(&[("shared", "abc_shared")])),
            ("def.jpg", rec(&[("def_only", "def only"), ("shared", "def_shared")])),
        ]),
    );
    assert_eq!(
        get_metadata(&f, &both, &["not there"]).unwrap(),
        report([("abc.jpg", rec(&[])), ("def.jpg", rec(&[]))]),
    );
    assert!(matches!(
        get_metadata(&f, &both, &[""]),
        Err(FilterError::InvalidArgument(_))
    ));
}

#[test]
fn repeated_calls_are_identical() {
    let f = factory();
    let files = [abc(), def(), MockFile::new("hij.jpg")];

    let first = get_metadata(&f, &files, &["only"]).unwrap();
    let second = get_metadata(&f, &files, &["only"]).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

// =============================================================================
// Real EXIF data
// =============================================================================

#[test]
fn exif_repeated_calls_on_same_handles_are_identical() {
    let dir = TempDir::new().unwrap();
    let files = [
        ImageFile::open(camera_photo().write(dir.path(), "camera.tif")).unwrap(),
        ImageFile::open(phone_photo().write(dir.path(), "phone.tif")).unwrap(),
    ];

    let first = get_metadata(&ExifFactory::new(), &files, NO_LABELS).unwrap();
    let second = get_metadata(&ExifFactory::new(), &files, NO_LABELS).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn exif_tags_from_tiff() {
    let dir = TempDir::new().unwrap();
    let path = camera_photo().write(dir.path(), "camera.tif");
    let image = ImageFile::open(&path).unwrap();
    let key = path.display().to_string();

    let report = get_metadata(&ExifFactory::new(), &[image], NO_LABELS).unwrap();
    let record = &report[&key];

    assert_eq!(record["Make"], TagValue::from("Canon"));
    assert_eq!(record["Model"], TagValue::from("EOS 5D"));
    assert_eq!(record["DateTime"], TagValue::from("2020:06:01 12:30:00"));
    assert_eq!(record["ImageWidth"], TagValue::Unsigned(640));
}

#[test]
fn exif_labels_filter_real_tags() {
    let dir = TempDir::new().unwrap();
    let camera = ImageFile::open(camera_photo().write(dir.path(), "camera.tif")).unwrap();
    let phone = ImageFile::open(phone_photo().write(dir.path(), "phone.tif")).unwrap();
    let camera_key = camera.path().display().to_string();
    let phone_key = phone.path().display().to_string();

    let report = get_metadata(&ExifFactory::new(), &[camera, phone], &["Date", "Resolution"]).unwrap();

    let camera_tags: Vec<&String> = report[&camera_key].keys().collect();
    let phone_tags: Vec<&String> = report[&phone_key].keys().collect();
    assert_eq!(camera_tags, vec!["DateTime"]);
    assert_eq!(phone_tags, vec!["XResolution"]);
    assert_eq!(report[&phone_key]["XResolution"], TagValue::Float(72.0));
}

#[test]
fn exif_thumbnail_fields_are_prefixed() {
    let dir = TempDir::new().unwrap();
    let path = camera_photo()
        .thumbnail()
        .rational(tag::X_RESOLUTION, 96, 1)
        .write(dir.path(), "thumb.tif");
    let key = path.display().to_string();

    let image = ImageFile::open(&path).unwrap();
    let without = get_metadata(&ExifFactory::new(), std::slice::from_ref(&image), &["Resolution"]).unwrap();
    assert!(without[&key].is_empty());

    let factory = ExifFactory::new().with_thumbnail(true);
    let with = get_metadata(&factory, &[image], &["Resolution"]).unwrap();
    assert_eq!(with[&key]["ThumbnailXResolution"], TagValue::Float(96.0));
}

#[test]
fn exif_rejects_non_image() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "no metadata here").unwrap();
    let image = ImageFile::open(&path).unwrap();

    let err = get_metadata(&ExifFactory::new(), &[image], NO_LABELS).unwrap_err();
    assert!(matches!(err, FilterError::SourceConstruction { .. }));
}
