use rss_reader::ui;
use rss_reader::warning::ReaderWarning;

#[test]
fn test_version_not_found_display() {
    let warning = ReaderWarning::VersionNotFound {
        version: "9.9.9".to_string(),
        available: 2,
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("9.9.9"),
        "Message should contain the version, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("2 release(s)"),
        "Message should contain the release count, got: {}",
        display_msg
    );
}

#[test]
fn test_unreleased_version_display() {
    let warning = ReaderWarning::UnreleasedVersion {
        version: "0.0.1".to_string(),
    };
    assert_eq!(
        warning.to_string(),
        "Version '0.0.1' has not been released yet"
    );
}

#[test]
fn test_empty_document_display() {
    assert!(ReaderWarning::EmptyDocument
        .to_string()
        .contains("do not list any releases"));
}

#[test]
fn test_no_image_display() {
    let warning = ReaderWarning::NoImage {
        title: "Rust 2018".to_string(),
    };
    assert!(warning.to_string().contains("'Rust 2018'"));
}

#[test]
fn test_warnings_are_distinct() {
    let warnings = vec![
        ReaderWarning::VersionNotFound {
            version: "1.0.0".to_string(),
            available: 0,
        },
        ReaderWarning::UnreleasedVersion {
            version: "1.0.0".to_string(),
        },
        ReaderWarning::EmptyDocument,
        ReaderWarning::NoImage {
            title: "x".to_string(),
        },
    ];

    for (i, a) in warnings.iter().enumerate() {
        for (j, b) in warnings.iter().enumerate() {
            assert_eq!(i == j, a == b);
        }
        // Visual verification - printed to stderr
        ui::display_warning(a);
    }
}
