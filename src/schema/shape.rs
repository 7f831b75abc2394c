//! Required-field checks for emitted `Organization`, `WebSite`, `Product`
//! and `Service` nodes.
//!
//! Other types pass unchecked. Members of an `@graph` are checked without
//! requiring their own `@context`.

use std::fmt;

use serde_json::Value;

use super::SCHEMA_CONTEXT;
use crate::core::is_absolute_url;

/// A missing or malformed field on one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeIssue {
    pub node_type: &'static str,
    pub field: &'static str,
    pub problem: &'static str,
}

impl fmt::Display for ShapeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` {}", self.node_type, self.field, self.problem)
    }
}

#[derive(Debug, Clone, Copy)]
enum Expect {
    Text,
    Url,
    Price,
    Literal(&'static str),
    UrlList,
}

/// `path` is dot-separated. Optional rules pass when the first segment is
/// absent, but still check what is present below it.
#[derive(Debug, Clone, Copy)]
struct Rule {
    path: &'static str,
    expect: Expect,
    required: bool,
}

const fn req(path: &'static str, expect: Expect) -> Rule {
    Rule {
        path,
        expect,
        required: true,
    }
}

const fn opt(path: &'static str, expect: Expect) -> Rule {
    Rule {
        path,
        expect,
        required: false,
    }
}

const ORGANIZATION: &[Rule] = &[
    req("@id", Expect::Text),
    req("name", Expect::Text),
    req("url", Expect::Url),
    req("description", Expect::Text),
    req("logo", Expect::Url),
    opt("sameAs", Expect::UrlList),
];

const WEBSITE: &[Rule] = &[
    req("@id", Expect::Text),
    req("url", Expect::Url),
    req("name", Expect::Text),
    req("description", Expect::Text),
    req("publisher.@id", Expect::Text),
    opt("potentialAction.@type", Expect::Literal("SearchAction")),
    opt("potentialAction.target", Expect::Text),
    opt("potentialAction.query-input", Expect::Text),
];

const PRODUCT: &[Rule] = &[
    req("@id", Expect::Text),
    req("name", Expect::Text),
    req("description", Expect::Text),
    req("url", Expect::Url),
    req("brand.@type", Expect::Literal("Brand")),
    req("brand.name", Expect::Text),
    req("offers.@type", Expect::Literal("Offer")),
    req("offers.price", Expect::Price),
    req("offers.priceCurrency", Expect::Text),
];

const SERVICE: &[Rule] = &[
    req("@id", Expect::Text),
    req("name", Expect::Text),
    req("description", Expect::Text),
    req("url", Expect::Url),
    req("serviceType", Expect::Text),
    req("provider.@id", Expect::Text),
    opt("offers.@type", Expect::Literal("Offer")),
    opt("offers.price", Expect::Price),
    opt("offers.priceCurrency", Expect::Text),
];

const CHECKED: &[(&str, &[Rule])] = &[
    ("Organization", ORGANIZATION),
    ("WebSite", WEBSITE),
    ("Product", PRODUCT),
    ("Service", SERVICE),
];

/// Check one top-level node, descending into `@graph` when present.
pub fn check_node_shape(node: &Value) -> Vec<ShapeIssue> {
    let mut issues = Vec::new();
    match node.get("@graph").and_then(Value::as_array) {
        Some(members) => {
            if node.get("@context").and_then(Value::as_str) != Some(SCHEMA_CONTEXT) {
                issues.push(ShapeIssue {
                    node_type: "@graph",
                    field: "@context",
                    problem: "is not https://schema.org",
                });
            }
            for member in members {
                check_typed(member, false, &mut issues);
            }
        }
        None => check_typed(node, true, &mut issues),
    }
    issues
}

fn check_typed(node: &Value, top_level: bool, issues: &mut Vec<ShapeIssue>) {
    let Some((node_type, rules)) = CHECKED
        .iter()
        .find(|(name, _)| has_type(node, name))
        .copied()
    else {
        return;
    };

    if top_level && node.get("@context").and_then(Value::as_str) != Some(SCHEMA_CONTEXT) {
        issues.push(ShapeIssue {
            node_type,
            field: "@context",
            problem: "is not https://schema.org",
        });
    }

    for rule in rules {
        if !rule.required && node.get(first_segment(rule.path)).is_none() {
            continue;
        }
        let problem = match lookup(node, rule.path) {
            None => Some("is missing"),
            Some(value) => mismatch(value, rule.expect),
        };
        if let Some(problem) = problem {
            issues.push(ShapeIssue {
                node_type,
                field: rule.path,
                problem,
            });
        }
    }
}

/// `@type` is either a string or a list of strings.
fn has_type(node: &Value, name: &str) -> bool {
    match node.get("@type") {
        Some(Value::String(t)) => t == name,
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some(name)),
        _ => false,
    }
}

fn first_segment(path: &str) -> &str {
    path.split('.').next().unwrap_or(path)
}

fn lookup<'a>(node: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(node, |value, key| value.get(key))
}

fn mismatch(value: &Value, expect: Expect) -> Option<&'static str> {
    let ok = match expect {
        Expect::Text => value.as_str().is_some_and(|s| !s.trim().is_empty()),
        Expect::Url => value.as_str().is_some_and(is_absolute_url),
        Expect::Price => match value {
            Value::Number(_) => true,
            Value::String(s) => !s.trim().is_empty(),
            _ => false,
        },
        Expect::Literal(expected) => value.as_str() == Some(expected),
        Expect::UrlList => value
            .as_array()
            .is_some_and(|urls| urls.iter().all(|u| u.as_str().is_some_and(is_absolute_url))),
    };
    if ok {
        return None;
    }
    Some(match expect {
        Expect::Text => "must be a non-empty string",
        Expect::Url => "must be an absolute URL",
        Expect::Price => "must be a number or a non-empty string",
        Expect::Literal(_) => "has the wrong @type",
        Expect::UrlList => "must be a list of absolute URLs",
    })
}
