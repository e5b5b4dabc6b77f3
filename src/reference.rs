//! The resource-reference grammar.
//!
//! Raw attribute values are either opaque literals or references of the
//! forms `@null`, `@+id/name`, and `@[package:][type/]name`. This module
//! classifies a raw value into a [`ParsedReference`] without consulting any
//! namespace or resource table; qualifying unpackaged references against the
//! entry's owning package is the resolver's job.
//!
//! The grammar match is total: anything that does not fit a reference form
//! falls back to `Literal`, including malformed shapes such as `@+id/` with
//! an empty name. Parsing never fails and never panics.

use smol_str::SmolStr;

/// A raw attribute value after grammar classification.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParsedReference {
    /// Not a reference; the value is used verbatim.
    ///
    /// Carries the original string, untrimmed: whitespace is stripped only
    /// to *detect* references, literals keep the text exactly as supplied.
    Literal(SmolStr),
    /// The value was exactly `@null`.
    Null,
    /// A `@+id/name` (or `@+package:id/name`) local id definition.
    ///
    /// Signals that the id is defined here and should be allocated rather
    /// than looked up. A `None` package means "the entry's owning package".
    IdDefinition {
        package: Option<SmolStr>,
        name: SmolStr,
    },
    /// A `@[package:][type/]name` resource reference.
    ///
    /// `res_type` is already defaulted to `id` when the slash segment was
    /// omitted, so consumers never re-apply the default.
    Resource {
        package: Option<SmolStr>,
        res_type: SmolStr,
        name: SmolStr,
    },
}

impl ParsedReference {
    /// Check whether this value points at another resource.
    pub fn is_reference(&self) -> bool {
        matches!(
            self,
            ParsedReference::IdDefinition { .. } | ParsedReference::Resource { .. }
        )
    }
}

/// Classify a raw attribute value.
///
/// Checked in order against the whitespace-trimmed value:
/// 1. exactly `@null`
/// 2. `@+` prefix — local id definition
/// 3. `@` prefix — resource reference
/// 4. anything else — literal (returned untrimmed)
pub fn parse(raw: &str) -> ParsedReference {
    let trimmed = raw.trim();

    if trimmed == "@null" {
        return ParsedReference::Null;
    }

    if let Some(rest) = trimmed.strip_prefix("@+") {
        let (package, body) = split_qualifier(rest);
        // The body must look like `type/name`; only `id` is meaningful to
        // the engine but the name is extracted regardless of type.
        if let Some((_res_type, name)) = body.split_once('/') {
            if !name.is_empty() {
                return ParsedReference::IdDefinition {
                    package: package.map(SmolStr::new),
                    name: SmolStr::new(name),
                };
            }
        }
        return ParsedReference::Literal(SmolStr::new(raw));
    }

    if let Some(rest) = trimmed.strip_prefix('@') {
        let (package, body) = split_qualifier(rest);
        let (res_type, name) = match body.split_once('/') {
            Some((res_type, name)) => (res_type, name),
            None => ("id", body),
        };
        if res_type.is_empty() || name.is_empty() {
            return ParsedReference::Literal(SmolStr::new(raw));
        }
        return ParsedReference::Resource {
            package: package.map(SmolStr::new),
            res_type: SmolStr::new(res_type),
            name: SmolStr::new(name),
        };
    }

    ParsedReference::Literal(SmolStr::new(raw))
}

/// Split off an explicit `package:` qualifier, treating an empty qualifier
/// as absent.
fn split_qualifier(rest: &str) -> (Option<&str>, &str) {
    match rest.split_once(':') {
        Some((package, body)) if !package.is_empty() => (Some(package), body),
        Some((_, body)) => (None, body),
        None => (None, rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_null_reference() {
        assert_eq!(parse("@null"), ParsedReference::Null);
        assert_eq!(parse("  @null "), ParsedReference::Null);
    }

    #[test]
    fn test_unqualified_resource() {
        assert_eq!(
            parse("@string/ok"),
            ParsedReference::Resource {
                package: None,
                res_type: "string".into(),
                name: "ok".into(),
            }
        );
    }

    #[test]
    fn test_qualified_resource() {
        assert_eq!(
            parse("@android:string/ok"),
            ParsedReference::Resource {
                package: Some("android".into()),
                res_type: "string".into(),
                name: "ok".into(),
            }
        );
    }

    #[test]
    fn test_type_defaults_to_id() {
        assert_eq!(
            parse("@burritos"),
            ParsedReference::Resource {
                package: None,
                res_type: "id".into(),
                name: "burritos".into(),
            }
        );
        assert_eq!(
            parse("@com.app:burritos"),
            ParsedReference::Resource {
                package: Some("com.app".into()),
                res_type: "id".into(),
                name: "burritos".into(),
            }
        );
    }

    #[test]
    fn test_id_definition() {
        assert_eq!(
            parse("@+id/text1"),
            ParsedReference::IdDefinition {
                package: None,
                name: "text1".into(),
            }
        );
        assert_eq!(
            parse("@+com.app:id/text1"),
            ParsedReference::IdDefinition {
                package: Some("com.app".into()),
                name: "text1".into(),
            }
        );
    }

    #[test]
    fn test_leading_whitespace_tolerated_on_references() {
        assert_eq!(parse(" @android:string/ok"), parse("@android:string/ok"));
        assert_eq!(parse("\t@+id/text1"), parse("@+id/text1"));
    }

    #[test]
    fn test_literal_keeps_original_whitespace() {
        assert_eq!(
            parse("  oh heck yeah "),
            ParsedReference::Literal("  oh heck yeah ".into())
        );
    }

    #[rstest]
    #[case("@")]
    #[case("@+")]
    #[case("@+id/")]
    #[case("@+noslash")]
    #[case("@string/")]
    #[case("@/name")]
    #[case("@:")]
    fn test_malformed_shapes_fall_back_to_literal(#[case] raw: &str) {
        assert_eq!(parse(raw), ParsedReference::Literal(raw.into()));
    }

    #[test]
    fn test_empty_qualifier_treated_as_absent() {
        assert_eq!(
            parse("@:string/ok"),
            ParsedReference::Resource {
                package: None,
                res_type: "string".into(),
                name: "ok".into(),
            }
        );
    }

    #[test]
    fn test_plain_literals() {
        assert_eq!(parse("true"), ParsedReference::Literal("true".into()));
        assert_eq!(parse("100"), ParsedReference::Literal("100".into()));
        assert_eq!(parse(""), ParsedReference::Literal("".into()));
    }
}
