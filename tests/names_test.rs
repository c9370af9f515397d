use twinstack::error::Error;
use twinstack::names::{split_app_name, to_camel_api, to_pascal_case, DerivedNames};

const SAMPLES: [&str; 6] = ["app", "test-app", "billing-core", "a-b-c", "x", "long-name-with-parts"];

#[test]
fn test_derive_scoped_identifier() {
    let names = DerivedNames::derive("@acme/test-app").unwrap();

    assert_eq!(names.organization, "acme");
    assert_eq!(names.application, "test-app");
    assert_eq!(names.pascal_application, "TestApp");
    assert_eq!(names.pascal_organization, "Acme");
    assert_eq!(names.camel_api_name, "testAppApi");
    assert_eq!(names.api_file_name, "testAppApi.ts");
}

#[test]
fn test_derive_unscoped_identifier() {
    let scoped = DerivedNames::derive("@acme/test-app").unwrap();
    let unscoped = DerivedNames::derive("acme/test-app").unwrap();
    assert_eq!(scoped, unscoped);
}

#[test]
fn test_derive_strips_one_at_sign_only() {
    let names = DerivedNames::derive("@@acme/app").unwrap();
    assert_eq!(names.organization, "@acme");
}

#[test]
fn test_derive_is_deterministic() {
    for sample in SAMPLES {
        let full = format!("@acme/{sample}");
        assert_eq!(DerivedNames::derive(&full).unwrap(), DerivedNames::derive(&full).unwrap());
    }
}

#[test]
fn test_derived_package_names() {
    let names = DerivedNames::derive("@acme/billing-core").unwrap();

    assert_eq!(names.backend_package(), "acme/billing-core-backend");
    assert_eq!(names.frontend_package(), "@acme/billing-core-frontend");
    assert_eq!(names.namespace(), "Acme\\BillingCore");
}

#[test]
fn test_missing_slash_is_rejected() {
    match DerivedNames::derive("@acme") {
        Err(Error::ValidationError(msg)) => assert!(msg.contains("@acme")),
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_empty_segments_are_rejected() {
    assert!(matches!(split_app_name("@/app"), Err(Error::ValidationError(_))));
    assert!(matches!(split_app_name("acme/"), Err(Error::ValidationError(_))));
    assert!(matches!(split_app_name(""), Err(Error::ValidationError(_))));
}

#[test]
fn test_nested_application_is_rejected() {
    assert!(matches!(split_app_name("acme/app/extra"), Err(Error::ValidationError(_))));
    assert!(matches!(split_app_name("acme/app\\extra"), Err(Error::ValidationError(_))));
    assert!(matches!(split_app_name("acme/."), Err(Error::ValidationError(_))));
    assert!(matches!(split_app_name("acme/.."), Err(Error::ValidationError(_))));
}

#[test]
fn test_relative_path_application_is_rejected() {
    for full in ["acme/.", "acme/..", "@acme/.", "@acme/.."] {
        match DerivedNames::derive(full) {
            Err(Error::ValidationError(msg)) => assert!(msg.contains("plain directory name")),
            other => panic!("Expected ValidationError for '{full}', got {other:?}"),
        }
    }
}

#[test]
fn test_dotted_application_is_accepted() {
    let names = DerivedNames::derive("@acme/app.v2").unwrap();
    assert_eq!(names.application, "app.v2");
}

#[test]
fn test_pascal_case() {
    assert_eq!(to_pascal_case("test-app"), "TestApp");
    assert_eq!(to_pascal_case("TEST-APP"), "TestApp");
    assert_eq!(to_pascal_case("test--app"), "TestApp");
    assert_eq!(to_pascal_case(""), "");
}

#[test]
fn test_pascal_case_properties() {
    for s in SAMPLES {
        let pascal = to_pascal_case(s);
        assert!(!pascal.contains('-'));
        for segment in s.split('-') {
            assert!(pascal.contains(&to_pascal_case(segment)));
        }
        assert!(pascal.chars().next().unwrap().is_uppercase());
    }

    for (s1, s2) in SAMPLES.iter().zip(SAMPLES.iter().rev()) {
        assert_eq!(
            to_pascal_case(&format!("{s1}-{s2}")),
            format!("{}{}", to_pascal_case(s1), to_pascal_case(s2))
        );
    }
}

#[test]
fn test_camel_api_properties() {
    for s in SAMPLES {
        let camel = to_camel_api(s);
        assert!(camel.ends_with("Api"));
        assert!(camel.chars().next().unwrap().is_lowercase());
        assert!(!camel.contains('-'));
    }
    assert_eq!(to_camel_api("billing-core"), "billingCoreApi");
    assert_eq!(to_camel_api("Billing-CORE"), "billingCoreApi");
}
