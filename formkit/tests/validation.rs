//! Tests for rule declaration and evaluation.

use formkit::validation::{FieldValues, Rule, RuleSet, ValidationResult};

fn values(pairs: &[(&str, &str)]) -> FieldValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn empty_rule_set_is_valid() {
    let rules = RuleSet::builder().build();
    assert!(rules.validate(&values(&[])).is_valid());
}

#[test]
fn required_fails_on_empty_value() {
    let rules = RuleSet::builder()
        .field("name")
        .required("Name is required")
        .build();

    let result = rules.validate(&values(&[("name", "")]));
    let error = result.first_error().expect("expected an error");
    assert_eq!(error.field, "name");
    assert_eq!(error.message, "Name is required");
}

#[test]
fn required_fails_on_missing_field() {
    let rules = RuleSet::builder()
        .field("name")
        .required("Name is required")
        .build();

    assert!(rules.validate(&values(&[])).is_invalid());
}

#[test]
fn first_failing_rule_wins() {
    let rules = RuleSet::builder()
        .field("password")
        .required("Password is required")
        .min_length(8, "Password must be at least 8 characters")
        .build();

    // Empty fails both rules; only the first message is reported.
    let result = rules.validate(&values(&[("password", "")]));
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].message, "Password is required");

    // Non-empty but short fails only the length rule.
    let result = rules.validate(&values(&[("password", "short")]));
    assert_eq!(result.errors().len(), 1);
    assert_eq!(
        result.errors()[0].message,
        "Password must be at least 8 characters"
    );
}

#[test]
fn min_length_counts_characters_not_bytes() {
    let rules = RuleSet::builder()
        .field("name")
        .min_length(2, "too short")
        .build();

    assert!(rules.validate(&values(&[("name", "éé")])).is_valid());
}

#[test]
fn pattern_rule_matches_regex() {
    let rules = RuleSet::builder()
        .field("code")
        .pattern(r"^[0-9]{4}$", "must be four digits")
        .build();

    assert!(rules.validate(&values(&[("code", "1234")])).is_valid());
    assert!(rules.validate(&values(&[("code", "12a4")])).is_invalid());
}

#[test]
fn matches_field_compares_sibling_value() {
    let rules = RuleSet::builder()
        .field("confirm")
        .matches_field("password", "Passwords do not match")
        .build();

    let ok = values(&[("password", "Passw0rd!"), ("confirm", "Passw0rd!")]);
    assert!(rules.validate(&ok).is_valid());

    let bad = values(&[("password", "Passw0rd!"), ("confirm", "Different1!")]);
    let result = rules.validate(&bad);
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].field, "confirm");
}

#[test]
fn matches_field_tracks_current_sibling_value() {
    let rules = RuleSet::builder()
        .field("confirm")
        .matches_field("password", "Passwords do not match")
        .build();

    let mut vals = values(&[("password", "Passw0rd!"), ("confirm", "Passw0rd!")]);
    assert!(rules.validate(&vals).is_valid());

    // Changing the sibling after the pair was equal invalidates the next pass.
    vals.insert("password".into(), "Changed1!".into());
    assert!(rules.validate(&vals).is_invalid());
}

#[test]
fn every_field_is_validated_with_one_error_each() {
    let rules = RuleSet::builder()
        .field("email")
        .required("Email is required")
        .field("password")
        .required("Password is required")
        .min_length(8, "Password must be at least 8 characters")
        .build();

    let result = rules.validate(&values(&[("email", ""), ("password", "")]));
    assert_eq!(result.errors().len(), 2);
    assert!(result.error_for("email").is_some());
    assert!(result.error_for("password").is_some());
}

#[test]
fn custom_rule_runs_predicate() {
    let rules = RuleSet::builder()
        .field("answer")
        .custom(|v| v == "42", "wrong answer")
        .build();

    assert!(rules.validate(&values(&[("answer", "42")])).is_valid());
    assert!(rules.validate(&values(&[("answer", "41")])).is_invalid());
}

#[test]
fn field_error_display_includes_field_and_message() {
    let rules = RuleSet::builder()
        .field("email")
        .required("Email is required")
        .build();

    let result = rules.validate(&values(&[]));
    let error = result.first_error().expect("expected an error");
    assert_eq!(error.to_string(), "email: Email is required");
}

#[test]
fn rule_check_is_usable_standalone() {
    let rule = Rule::min_length(3, "too short");
    let vals = values(&[]);
    assert!(rule.check("abc", &vals));
    assert!(!rule.check("ab", &vals));
    assert_eq!(rule.message(), "too short");
}

#[test]
fn validation_result_default_is_valid() {
    assert!(ValidationResult::default().is_valid());
    assert!(ValidationResult::default().first_error().is_none());
}
