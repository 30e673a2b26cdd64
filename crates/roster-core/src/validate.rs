use crate::{
    record::{FIELD_DEPARTMENT, FIELD_EMAIL, FIELD_NAME, FIELD_QUALIFICATION},
    value::Value,
};
use std::collections::BTreeMap;

///
/// Issues
///
/// Field-keyed validation issues. Validation is collecting, not
/// fail-fast: every rule runs and the caller renders each issue next to
/// its control.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Issues(Vec<(String, String)>);

impl Issues {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push((field.to_string(), message.into()));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages for one field, in rule order.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> {
        self.0
            .iter()
            .filter(move |(f, _)| f == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }
}

///
/// Rule
///
/// One declarative field-level check with its user-visible message.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rule {
    Required { message: &'static str },
    Email { message: &'static str },
}

impl Rule {
    fn check(self, field: &str, value: Option<&Value>, issues: &mut Issues) {
        match self {
            Self::Required { message } => {
                let missing = match value {
                    None => true,
                    Some(v) => v.is_null() || v.as_text().is_some_and(str::is_empty),
                };
                if missing {
                    issues.push(field, message);
                }
            }
            Self::Email { message } => {
                // only fires on a present, non-empty entry; absence is the
                // Required rule's concern
                if let Some(text) = value.and_then(Value::as_text)
                    && !text.is_empty()
                    && !is_email(text)
                {
                    issues.push(field, message);
                }
            }
        }
    }
}

///
/// RecordRules
///
/// The declarative rule set for the base record form. The conditional
/// idProof field and custom fields intentionally carry no rules: the form
/// marks idProof required without enforcing it, a gap kept as-is.
///

#[derive(Clone, Debug)]
pub struct RecordRules {
    rules: Vec<(&'static str, Rule)>,
}

impl RecordRules {
    #[must_use]
    pub fn base() -> Self {
        Self {
            rules: vec![
                (
                    FIELD_NAME,
                    Rule::Required {
                        message: "Name is required",
                    },
                ),
                (
                    FIELD_EMAIL,
                    Rule::Email {
                        message: "Invalid email address",
                    },
                ),
                (
                    FIELD_EMAIL,
                    Rule::Required {
                        message: "Email is required",
                    },
                ),
                (
                    FIELD_DEPARTMENT,
                    Rule::Required {
                        message: "Department is required",
                    },
                ),
                (
                    FIELD_QUALIFICATION,
                    Rule::Required {
                        message: "Qualification is required",
                    },
                ),
            ],
        }
    }

    /// Run every rule against the in-progress value map.
    #[must_use]
    pub fn validate(&self, values: &BTreeMap<String, Value>) -> Issues {
        let mut issues = Issues::default();
        for (field, rule) in &self.rules {
            rule.check(field, values.get(*field), &mut issues);
        }

        issues
    }
}

impl Default for RecordRules {
    fn default() -> Self {
        Self::base()
    }
}

/// Minimal well-formedness check: one '@', a non-empty local part, a
/// dotted domain, no whitespace.
fn is_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = s.split('@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };
    if parts.next().is_some() {
        return false;
    }

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(entries: &[(&str, &str)]) -> BTreeMap<String, Value> {
        entries
            .iter()
            .map(|(field, text)| ((*field).to_string(), Value::text(*text)))
            .collect()
    }

    fn complete() -> BTreeMap<String, Value> {
        values(&[
            (FIELD_NAME, "Vedang"),
            (FIELD_EMAIL, "test@example.com"),
            (FIELD_DEPARTMENT, "Government"),
            (FIELD_QUALIFICATION, "HSC"),
        ])
    }

    #[test]
    fn complete_values_pass() {
        assert!(RecordRules::base().validate(&complete()).is_empty());
    }

    #[test]
    fn missing_and_empty_fields_fail_required() {
        let mut entries = complete();
        entries.remove(FIELD_NAME);
        entries.insert(FIELD_QUALIFICATION.to_string(), Value::text(""));

        let issues = RecordRules::base().validate(&entries);

        assert_eq!(issues.len(), 2);
        assert_eq!(
            issues.for_field(FIELD_NAME).collect::<Vec<_>>(),
            vec!["Name is required"]
        );
        assert_eq!(
            issues.for_field(FIELD_QUALIFICATION).collect::<Vec<_>>(),
            vec!["Qualification is required"]
        );
    }

    #[test]
    fn malformed_email_fails_with_its_message() {
        let mut entries = complete();
        entries.insert(FIELD_EMAIL.to_string(), Value::text("not-an-email"));

        let issues = RecordRules::base().validate(&entries);
        assert_eq!(
            issues.for_field(FIELD_EMAIL).collect::<Vec<_>>(),
            vec!["Invalid email address"]
        );
    }

    #[test]
    fn empty_email_fails_required_not_format() {
        let mut entries = complete();
        entries.insert(FIELD_EMAIL.to_string(), Value::text(""));

        let issues = RecordRules::base().validate(&entries);
        assert_eq!(
            issues.for_field(FIELD_EMAIL).collect::<Vec<_>>(),
            vec!["Email is required"]
        );
    }

    #[test]
    fn id_proof_and_custom_fields_have_no_rules() {
        let mut entries = complete();
        entries.insert("idProof".to_string(), Value::text(""));
        entries.insert("customField_Color".to_string(), Value::text(""));

        assert!(RecordRules::base().validate(&entries).is_empty());
    }

    #[test]
    fn email_predicate_cases() {
        assert!(is_email("a@b.co"));
        assert!(is_email("first.last@sub.example.com"));

        assert!(!is_email("a"));
        assert!(!is_email("a@b"));
        assert!(!is_email("@b.co"));
        assert!(!is_email("a@b.co@c.co"));
        assert!(!is_email("a b@c.co"));
        assert!(!is_email("a@.co"));
        assert!(!is_email("a@co."));
    }
}
