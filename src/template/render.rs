//! Placeholder substitution engine.
//!
//! Performs `%name%` substitution in contract source text. A placeholder is a
//! `%`, an identifier (`[A-Za-z_][A-Za-z0-9_]*`), and a closing `%`. Any other
//! `%` (for example the modulo operator in `a % b`) is left untouched.
//!
//! # Error Handling
//!
//! The engine is fail-safe: undefined variables cause an error rather than
//! silent substitution with empty strings. Substitution is single-pass, so
//! text inserted from a value is never rescanned for placeholders.

use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::LazyLock;

pub(crate) static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%([A-Za-z_][A-Za-z0-9_]*)%").expect("Invalid placeholder regex")
});

/// Error type for template rendering and instantiation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder was found but no value was provided for it.
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
        /// Byte offset of the placeholder in the template.
        position: usize,
    },
    /// A placeholder declared by the template has no supplied value.
    MissingPlaceholder {
        /// The declared placeholder name.
        name: String,
    },
    /// The same name was supplied both as a value and as a visibility token.
    AmbiguousPlaceholder {
        /// The doubly-supplied name.
        name: String,
    },
    /// A `%name%` token remained in the output after substitution.
    StrayPlaceholder {
        /// The token name found in the output.
        name: String,
        /// Byte offset of the token in the output.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, position } => {
                write!(
                    f,
                    "undefined placeholder '%{}%' at position {} in template",
                    name, position
                )
            }
            TemplateError::MissingPlaceholder { name } => {
                write!(f, "no value supplied for placeholder '%{}%'", name)
            }
            TemplateError::AmbiguousPlaceholder { name } => {
                write!(
                    f,
                    "placeholder '%{}%' supplied as both a value and a visibility token",
                    name
                )
            }
            TemplateError::StrayPlaceholder { name, position } => {
                write!(
                    f,
                    "unresolved placeholder '%{}%' at position {} in generated source",
                    name, position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Render a template string by substituting `%name%` placeholders.
///
/// # Returns
///
/// * `Ok(String)` - The rendered string with all placeholders substituted
/// * `Err(TemplateError::UndefinedVariable)` - If a placeholder has no value
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use invoicegen::template::render_template;
///
/// let mut vars = HashMap::new();
/// vars.insert("memo".to_string(), "rent".to_string());
///
/// let result = render_template("string m = \"%memo%\"; x = a % b;", &vars).unwrap();
/// assert_eq!(result, "string m = \"rent\"; x = a % b;");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut last = 0;

    for caps in PLACEHOLDER_REGEX.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        result.push_str(&template[last..whole.start()]);

        match variables.get(name.as_str()) {
            Some(value) => result.push_str(value),
            None => {
                return Err(TemplateError::UndefinedVariable {
                    name: name.as_str().to_string(),
                    position: whole.start(),
                });
            }
        }

        last = whole.end();
    }

    result.push_str(&template[last..]);
    Ok(result)
}

/// Collect the distinct placeholder names used in a template.
pub fn placeholder_names(template: &str) -> BTreeSet<String> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Locate the first `%name%` token in rendered text, if any.
pub fn find_placeholder(text: &str) -> Option<(String, usize)> {
    PLACEHOLDER_REGEX.captures(text).and_then(|caps| {
        let whole = caps.get(0)?;
        let name = caps.get(1)?;
        Some((name.as_str().to_string(), whole.start()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars<const N: usize>(pairs: [(&str, &str); N]) -> HashMap<String, String> {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_simple_substitution() {
        let vars = vars([("amount", "1000"), ("memo", "rent")]);
        let result = render_template("Invoice(%amount%, \"%memo%\")", &vars).unwrap();
        assert_eq!(result, "Invoice(1000, \"rent\")");
    }

    #[test]
    fn test_no_placeholders() {
        let vars = HashMap::new();
        let result = render_template("contract A { }", &vars).unwrap();
        assert_eq!(result, "contract A { }");
    }

    #[test]
    fn test_empty_template() {
        let vars = HashMap::new();
        assert_eq!(render_template("", &vars).unwrap(), "");
    }

    #[test]
    fn test_modulo_operator_is_not_a_placeholder() {
        let vars = HashMap::new();
        let text = "// assert(a == b * c + a % b); // holds";
        assert_eq!(render_template(text, &vars).unwrap(), text);
    }

    #[test]
    fn test_undefined_variable_error() {
        let vars = HashMap::new();
        let err = render_template("address %payer%;", &vars).unwrap_err();
        match err {
            TemplateError::UndefinedVariable { name, position } => {
                assert_eq!(name, "payer");
                assert_eq!(position, 8);
            }
            _ => panic!("unexpected error type: {:?}", err),
        }
    }

    #[test]
    fn test_multiple_occurrences() {
        let vars = vars([("x", "X")]);
        assert_eq!(render_template("%x%-%x%-%x%", &vars).unwrap(), "X-X-X");
    }

    #[test]
    fn test_adjacent_placeholders() {
        let vars = vars([("a", "A"), ("b", "B")]);
        assert_eq!(render_template("%a%%b%", &vars).unwrap(), "AB");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let vars = vars([("memo", "%payer%"), ("payer", "0x1")]);
        let result = render_template("%memo% %payer%", &vars).unwrap();
        assert_eq!(result, "%payer% 0x1");
    }

    #[test]
    fn test_empty_value_substitution() {
        let vars = vars([("code", "")]);
        assert_eq!(
            render_template("before%code%after", &vars).unwrap(),
            "beforeafter"
        );
    }

    #[test]
    fn test_placeholder_names() {
        let names = placeholder_names("%a% 5 % 3 %b% %a% %not valid%");
        assert_eq!(
            names.into_iter().collect::<Vec<_>>(),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_find_placeholder() {
        assert_eq!(find_placeholder("x % y"), None);
        assert_eq!(
            find_placeholder("ok %left% over"),
            Some(("left".to_string(), 3))
        );
    }

    #[test]
    fn test_error_display() {
        let err = TemplateError::UndefinedVariable {
            name: "foo".to_string(),
            position: 10,
        };
        assert_eq!(
            err.to_string(),
            "undefined placeholder '%foo%' at position 10 in template"
        );

        let err = TemplateError::MissingPlaceholder {
            name: "memo".to_string(),
        };
        assert_eq!(err.to_string(), "no value supplied for placeholder '%memo%'");
    }
}
