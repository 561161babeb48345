//! Metadata carried through a generation round.
//!
//! A [`TaggedElement`] is what the host toolchain hands in: a callable member
//! that carries the marker. Everything else here is derived from it by the
//! pipeline stages in [`crate::generation`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A tagged callable member, as extracted by the host toolchain.
///
/// ```json
/// {"owner": "com.acme.Pizza", "name": "setSize", "parameters": ["int"]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedElement {
    /// Fully-qualified name of the type declaring the member.
    pub owner: String,

    /// Simple member name.
    pub name: String,

    /// Parameter type names, in declaration order.
    #[serde(default)]
    pub parameters: Vec<String>,

    /// Opaque source position used when reporting diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl TaggedElement {
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        parameters: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
            location: None,
        }
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for TaggedElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}({})", self.owner, self.name, self.parameters.join(", "))
    }
}

/// A tagged element known to have exactly one parameter and a name with
/// the configured prefix.
///
/// Only the validator constructs these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutator {
    owner: String,
    name: String,
    parameter: String,
}

impl Mutator {
    pub(crate) fn new(owner: String, name: String, parameter: String) -> Self {
        Self {
            owner,
            name,
            parameter,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type text of the single parameter.
    pub fn parameter(&self) -> &str {
        &self.parameter
    }
}

/// A tagged element rejected by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub element: TaggedElement,
    pub message: &'static str,
}

impl ValidationFailure {
    /// Diagnostic to report for this failure.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            severity: Severity::Error,
            message: self.message.to_string(),
            element: self.element.clone(),
        }
    }
}

/// Diagnostic severity. Rejected elements are always errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
        })
    }
}

/// A message attached to a tagged element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub element: TaggedElement,
}

impl fmt::Display for Diagnostic {
    /// Compiler-style rendering:
    ///
    /// ```text
    /// error: annotated setter must have ...
    ///   --> Pizza.java:14
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.severity, self.message)?;
        match &self.element.location {
            Some(location) => write!(f, "  --> {location}"),
            None => write!(f, "  --> {}#{}", self.element.owner, self.element.name),
        }
    }
}

/// Rendered builder source, ready for the file sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSource {
    /// Fully-qualified name of the generated type, e.g. `a.b.CBuilder`.
    pub target: String,

    /// Full source text.
    pub text: String,
}

impl GeneratedSource {
    /// Package part of the target name, `None` for the unnamed package.
    pub fn package(&self) -> Option<&str> {
        self.target.rsplit_once('.').map(|(package, _)| package)
    }

    pub fn simple_name(&self) -> &str {
        self.target
            .rsplit_once('.')
            .map_or(self.target.as_str(), |(_, simple)| simple)
    }
}

/// Map a dotted type name to a relative source path, e.g.
/// `a/b/CBuilder.java` for `a.b.CBuilder`.
///
/// Every segment must be a single normal path component, so the result
/// always stays below the directory it is joined to. Anything else
/// (separators, roots, drive prefixes, empty segments) is `InvalidInput`.
pub fn relative_source_path(target: &str, extension: &str) -> std::io::Result<PathBuf> {
    let mut path = PathBuf::new();
    for segment in target.split('.') {
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if name == segment => path.push(name),
            _ => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("type name '{target}' has segment '{segment}' that is not a plain path component"),
                ))
            }
        }
    }
    path.set_extension(extension);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn element_deserializes_without_location() {
        let element: TaggedElement = serde_json::from_value(json!({
            "owner": "com.acme.Pizza",
            "name": "setSize",
            "parameters": ["int"]
        }))
        .unwrap();
        assert_eq!(element, TaggedElement::new("com.acme.Pizza", "setSize", ["int"]));
    }

    #[test]
    fn diagnostic_points_at_location() {
        let element = TaggedElement::new("a.B", "getX", ["int"]).at("B.java:3");
        let diagnostic = Diagnostic {
            severity: Severity::Error,
            message: "bad".into(),
            element,
        };
        assert_eq!(diagnostic.to_string(), "error: bad\n  --> B.java:3");
    }

    #[test]
    fn diagnostic_falls_back_to_member_name() {
        let diagnostic = Diagnostic {
            severity: Severity::Error,
            message: "odd".into(),
            element: TaggedElement::new("a.B", "setX", Vec::<String>::new()),
        };
        assert_eq!(diagnostic.to_string(), "error: odd\n  --> a.B#setX");
    }

    #[test]
    fn generated_source_names() {
        let source = GeneratedSource {
            target: "a.b.CBuilder".into(),
            text: String::new(),
        };
        assert_eq!(source.package(), Some("a.b"));
        assert_eq!(source.simple_name(), "CBuilder");
        assert_eq!(
            relative_source_path(&source.target, "java").unwrap(),
            PathBuf::from("a/b/CBuilder.java")
        );
    }

    #[test]
    fn generated_source_unnamed_package() {
        let source = GeneratedSource {
            target: "CBuilder".into(),
            text: String::new(),
        };
        assert_eq!(source.package(), None);
        assert_eq!(source.simple_name(), "CBuilder");
        assert_eq!(
            relative_source_path(&source.target, "java").unwrap(),
            PathBuf::from("CBuilder.java")
        );
    }

    #[test]
    fn relative_path_rejects_escaping_segments() {
        for target in ["/tmp/out.EvilBuilder", "a/b.CBuilder", "a.b/../CBuilder", "a..CBuilder", ""] {
            let err = relative_source_path(target, "java").unwrap_err();
            assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput, "{target}");
        }
    }
}
