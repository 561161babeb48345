//! Builder source rendering.
//!
//! Renders one Java companion type per owner:
//!
//! ```text
//! package com.acme;
//!
//! public class PizzaBuilder {
//!
//!     private Pizza object = new Pizza();
//!
//!     public Pizza build() {
//!         return object;
//!     }
//!
//!     public PizzaBuilder setSize(int value) {
//!         object.setSize(value);
//!         return this;
//!     }
//! }
//! ```

use crate::error::EmitError;
use crate::model::GeneratedSource;
use std::collections::BTreeMap;
use std::fmt::Write;

const INDENT: &str = "    ";

/// Split a fully-qualified owner name into `(package, simple name)`.
///
/// A name without `.` lives in the unnamed package. Empty names and names
/// with an empty segment (`".A"`, `"a."`, `"a..B"`) are rejected.
pub fn split_owner(owner: &str) -> Result<(Option<&str>, &str), EmitError> {
    let malformed = |reason| EmitError::MalformedOwner {
        owner: owner.to_string(),
        reason,
    };

    if owner.is_empty() {
        return Err(malformed("name is empty"));
    }
    if owner.split('.').any(str::is_empty) {
        return Err(malformed("name contains an empty segment"));
    }

    Ok(match owner.rsplit_once('.') {
        Some((package, simple)) => (Some(package), simple),
        None => (None, owner),
    })
}

/// Render the builder for `owner`, with one fluent method per entry of
/// `members` (method name to parameter type text), in map order.
pub fn emit(
    owner: &str,
    members: &BTreeMap<String, String>,
    builder_suffix: &str,
) -> Result<GeneratedSource, EmitError> {
    let (package, simple) = split_owner(owner)?;
    let builder = format!("{simple}{builder_suffix}");

    // Writing to a String cannot fail.
    let mut out = String::new();

    if let Some(package) = package {
        let _ = writeln!(out, "package {package};");
        out.push('\n');
    }

    let _ = writeln!(out, "public class {builder} {{");
    out.push('\n');
    let _ = writeln!(out, "{INDENT}private {simple} object = new {simple}();");
    out.push('\n');
    let _ = writeln!(out, "{INDENT}public {simple} build() {{");
    let _ = writeln!(out, "{INDENT}{INDENT}return object;");
    let _ = writeln!(out, "{INDENT}}}");

    for (method, parameter) in members {
        out.push('\n');
        let _ = writeln!(out, "{INDENT}public {builder} {method}({parameter} value) {{");
        let _ = writeln!(out, "{INDENT}{INDENT}object.{method}(value);");
        let _ = writeln!(out, "{INDENT}{INDENT}return this;");
        let _ = writeln!(out, "{INDENT}}}");
    }

    out.push_str("}\n");

    Ok(GeneratedSource {
        target: format!("{owner}{builder_suffix}"),
        text: out,
    })
}
