//! Snapshot tests for rendered builder text.

use setter_builder_gen::*;
use std::collections::BTreeMap;

fn members(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_packaged_builder_snapshot() {
    let source = emit(
        "com.acme.Pizza",
        &members(&[("setSize", "int"), ("setName", "String")]),
        "Builder",
    )
    .unwrap();

    let expected = r#"package com.acme;

public class PizzaBuilder {

    private Pizza object = new Pizza();

    public Pizza build() {
        return object;
    }

    public PizzaBuilder setName(String value) {
        object.setName(value);
        return this;
    }

    public PizzaBuilder setSize(int value) {
        object.setSize(value);
        return this;
    }
}
"#;
    assert_eq!(source.text, expected);
}

#[test]
fn test_unnamed_package_snapshot() {
    let source = emit("Point", &members(&[("setX", "double")]), "Builder").unwrap();

    let expected = r#"public class PointBuilder {

    private Point object = new Point();

    public Point build() {
        return object;
    }

    public PointBuilder setX(double value) {
        object.setX(value);
        return this;
    }
}
"#;
    assert_eq!(source.text, expected);
}

#[test]
fn test_generic_parameter_text_is_copied_verbatim() {
    let source = emit(
        "a.Bag",
        &members(&[("setTags", "java.util.Set<java.lang.String>")]),
        "Builder",
    )
    .unwrap();

    assert!(source
        .text
        .contains("    public BagBuilder setTags(java.util.Set<java.lang.String> value) {\n"));
}

#[test]
fn test_braces_are_balanced() {
    let source = emit(
        "a.b.C",
        &members(&[("setA", "int"), ("setB", "int"), ("setC", "int")]),
        "Builder",
    )
    .unwrap();

    assert_eq!(
        source.text.matches('{').count(),
        source.text.matches('}').count()
    );
    assert!(source.text.ends_with("}\n"));
}
