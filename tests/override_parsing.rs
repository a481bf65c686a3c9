use osmatch::catalog;
use osmatch::{OsMatchError, Platform};

#[test]
fn parses_os_and_architecture() {
    let result = Platform::parse_override(catalog::common(), "OS_X|X86_64").unwrap();

    assert_eq!(result.operating_system, "OS_X");
    assert_eq!(result.architecture, "X86_64");
    assert_eq!(result.distribution, None);
    assert_eq!(result.version, None);
}

#[test]
fn parses_distribution_and_version() {
    let result =
        Platform::parse_override(catalog::common(), "Linux|X86_32|CentOS|CentOS_7").unwrap();

    assert_eq!(result.operating_system, "Linux");
    assert_eq!(result.architecture, "X86_32");
    assert_eq!(result.distribution.as_deref(), Some("CentOS"));
    assert_eq!(result.version.as_deref(), Some("CentOS_7"));
}

#[test]
fn unresolved_token_names_the_offender_and_the_alternatives() {
    let result = Platform::parse_override(catalog::common(), "Linux|X86_32|Foo|CentOS_7");

    match result {
        Err(OsMatchError::UnknownOverrideToken {
            position,
            token,
            alternatives,
        }) => {
            assert_eq!(position, "distribution");
            assert_eq!(token, "Foo");
            assert!(alternatives.contains(&"CentOS".to_string()));
        }
        other => panic!("expected UnknownOverrideToken, got {other:?}"),
    }
}

#[test]
fn error_message_carries_the_offending_token() {
    let error = Platform::parse_override(catalog::common(), "Linux|X86_32|Foo|CentOS_7")
        .unwrap_err()
        .to_string();

    assert!(error.contains("Foo"), "message was: {error}");
    assert!(error.contains("distribution"), "message was: {error}");
}

#[test]
fn version_is_looked_up_inside_the_chosen_distribution() {
    // Ubuntu_18_10 exists, but not under CentOS.
    let result = Platform::parse_override(catalog::common(), "Linux|X86_64|CentOS|Ubuntu_18_10");

    assert!(matches!(
        result,
        Err(OsMatchError::UnknownOverrideToken {
            position: "version",
            ..
        })
    ));
}

#[test]
fn distribution_and_version_are_both_or_neither() {
    for text in ["Linux", "Linux|X86_64|CentOS", "Linux|X86_64|CentOS|CentOS_7|extra"] {
        let result = Platform::parse_override(catalog::common(), text);
        assert!(
            matches!(result, Err(OsMatchError::InvalidOverride(_))),
            "accepted {text:?}"
        );
    }
}

#[test]
fn architecture_token_is_scoped_to_the_chosen_os() {
    let result = Platform::parse_override(catalog::common(), "Linux|PDP_11");

    assert!(matches!(
        result,
        Err(OsMatchError::UnknownOverrideToken {
            position: "architecture",
            ..
        })
    ));
}
