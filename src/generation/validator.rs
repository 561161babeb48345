//! Shape validation of tagged elements.

use crate::model::{Mutator, TaggedElement, ValidationFailure};
use tracing::debug;

/// Message reported for every element that is not mutator-shaped.
pub const INVALID_MUTATOR_MESSAGE: &str =
    "annotated setter must have a single argument and a name beginning with the configured prefix";

/// Outcome of validating one round of tagged elements.
///
/// Every input element lands in exactly one of the two lists, in input order.
#[derive(Debug, Default)]
#[must_use = "validation failures should be reported"]
pub struct Validation {
    pub valid: Vec<Mutator>,
    pub invalid: Vec<ValidationFailure>,
}

/// Whether `element` has exactly one parameter and a name starting with
/// `prefix` (literal, case-sensitive).
pub fn is_mutator(element: &TaggedElement, prefix: &str) -> bool {
    element.parameters.len() == 1 && element.name.starts_with(prefix)
}

/// Partition `elements` into mutators and validation failures.
///
/// Never fails; rejected elements are returned for the caller to report.
pub fn validate<'a>(
    elements: impl IntoIterator<Item = &'a TaggedElement>,
    prefix: &str,
) -> Validation {
    let mut validation = Validation::default();

    for element in elements {
        match element.parameters.as_slice() {
            [parameter] if element.name.starts_with(prefix) => {
                validation.valid.push(Mutator::new(
                    element.owner.clone(),
                    element.name.clone(),
                    parameter.clone(),
                ));
            }
            _ => validation.invalid.push(ValidationFailure {
                element: element.clone(),
                message: INVALID_MUTATOR_MESSAGE,
            }),
        }
    }

    debug!(
        valid = validation.valid.len(),
        invalid = validation.invalid.len(),
        prefix,
        "Validated tagged elements"
    );

    validation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(name: &str, params: &[&str]) -> TaggedElement {
        TaggedElement::new("a.b.C", name, params.iter().copied())
    }

    #[test]
    fn single_argument_setter_is_valid() {
        assert!(is_mutator(&element("setX", &["int"]), "set"));
    }

    #[test]
    fn two_arguments_is_invalid() {
        assert!(!is_mutator(&element("setX", &["int", "int"]), "set"));
    }

    #[test]
    fn zero_arguments_is_invalid() {
        assert!(!is_mutator(&element("setX", &[]), "set"));
    }

    #[test]
    fn wrong_prefix_is_invalid() {
        assert!(!is_mutator(&element("getX", &["int"]), "set"));
    }

    #[test]
    fn prefix_is_case_sensitive() {
        assert!(!is_mutator(&element("SetX", &["int"]), "set"));
    }

    #[test]
    fn bare_prefix_name_is_valid() {
        assert!(is_mutator(&element("set", &["int"]), "set"));
    }

    #[test]
    fn empty_prefix_only_checks_arity() {
        assert!(is_mutator(&element("anything", &["int"]), ""));
        assert!(!is_mutator(&element("anything", &[]), ""));
    }

    #[test]
    fn partition_is_stable_and_exhaustive() {
        let elements = vec![
            element("setA", &["int"]),
            element("getB", &["int"]),
            element("setC", &["String"]),
            element("setD", &["int", "int"]),
        ];

        let validation = validate(&elements, "set");

        let valid: Vec<&str> = validation.valid.iter().map(Mutator::name).collect();
        let invalid: Vec<&str> = validation
            .invalid
            .iter()
            .map(|f| f.element.name.as_str())
            .collect();
        assert_eq!(valid, ["setA", "setC"]);
        assert_eq!(invalid, ["getB", "setD"]);
        assert_eq!(valid.len() + invalid.len(), elements.len());
        assert!(validation
            .invalid
            .iter()
            .all(|f| f.message == INVALID_MUTATOR_MESSAGE));
    }

    #[test]
    fn mutator_keeps_parameter_text() {
        let elements = vec![element("setItems", &["java.util.List<String>"])];
        let validation = validate(&elements, "set");
        assert_eq!(validation.valid[0].parameter(), "java.util.List<String>");
        assert_eq!(validation.valid[0].owner(), "a.b.C");
    }
}
