//! Rule declarations and the rule set builder.

use std::collections::BTreeMap;

use super::result::{FieldError, ValidationResult};

/// Snapshot of all field values at validation time.
///
/// Cross-field rules read sibling values from here, so equality checks always
/// compare against the value the sibling holds at this validation pass.
pub type FieldValues = BTreeMap<String, String>;

/// Type alias for boxed rule predicates.
type Predicate = Box<dyn Fn(&str, &FieldValues) -> bool + Send + Sync>;

/// A single validation rule: a predicate plus its fixed failure message.
pub struct Rule {
    predicate: Predicate,
    message: String,
}

impl Rule {
    /// Rule from a custom predicate over the field value.
    pub fn custom<F>(f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(move |value, _| f(value)),
            message: msg.into(),
        }
    }

    /// Require the field to be non-empty.
    pub fn required(msg: impl Into<String>) -> Self {
        Self::custom(|value| !value.is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(min: usize, msg: impl Into<String>) -> Self {
        Self::custom(move |value| value.chars().count() >= min, msg)
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(pattern: &str, msg: impl Into<String>) -> Self {
        let re = regex::Regex::new(pattern).expect("Invalid rule pattern");
        Self::custom(move |value| re.is_match(value), msg)
    }

    /// Require byte-for-byte equality with another field's current value.
    pub fn matches_field(other: impl Into<String>, msg: impl Into<String>) -> Self {
        let other = other.into();
        Self {
            predicate: Box::new(move |value, values| {
                values.get(&other).map(String::as_str) == Some(value)
            }),
            message: msg.into(),
        }
    }

    /// Evaluate this rule against a value and the full value snapshot.
    pub fn check(&self, value: &str, values: &FieldValues) -> bool {
        (self.predicate)(value, values)
    }

    /// The message reported when this rule fails.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("message", &self.message).finish()
    }
}

/// Ordered mapping of field name to its ordered rules.
///
/// Fields are validated in registration order; within a field the first
/// failing rule wins and later rules are not evaluated.
#[derive(Debug, Default)]
pub struct RuleSet {
    fields: Vec<(String, Vec<Rule>)>,
}

impl RuleSet {
    /// Start building a rule set.
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Names of all registered fields, in registration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Validate every registered field against a value snapshot.
    ///
    /// Missing fields validate as empty strings.
    pub fn validate(&self, values: &FieldValues) -> ValidationResult {
        let mut errors = Vec::new();

        for (name, rules) in &self.fields {
            let value = values.get(name).map(String::as_str).unwrap_or_default();
            for rule in rules {
                if !rule.check(value, values) {
                    errors.push(FieldError::new(name, rule.message()));
                    break;
                }
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }
}

/// Builder for declaring rules field by field.
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    fields: Vec<(String, Vec<Rule>)>,
}

impl RuleSetBuilder {
    /// Start declaring rules for a field.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push((name.into(), Vec::new()));
        self
    }

    /// Add a rule to the current field.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.current().push(rule);
        self
    }

    /// Require the current field to be non-empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        let rule = Rule::required(msg);
        self.rule(rule)
    }

    /// Require minimum length (in characters) for the current field.
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        let rule = Rule::min_length(min, msg);
        self.rule(rule)
    }

    /// Require the current field to match a regex pattern.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Self {
        let rule = Rule::pattern(pattern, msg);
        self.rule(rule)
    }

    /// Require the current field to equal another field's value.
    pub fn matches_field(self, other: impl Into<String>, msg: impl Into<String>) -> Self {
        let rule = Rule::matches_field(other, msg);
        self.rule(rule)
    }

    /// Add a custom predicate rule to the current field.
    pub fn custom<F>(self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let rule = Rule::custom(f, msg);
        self.rule(rule)
    }

    /// Finalize the rule set.
    pub fn build(self) -> RuleSet {
        RuleSet { fields: self.fields }
    }

    fn current(&mut self) -> &mut Vec<Rule> {
        let (_, rules) = self
            .fields
            .last_mut()
            .expect("declare a field before adding rules");
        rules
    }
}
