//! Expansion of the printf-style URL templates found in the config file.
//!
//! Templates use a small subset of printf verbs: `%s`, `%d` and `%v` each
//! consume the next positional argument and `%%` emits a literal percent
//! sign. Arguments are inserted as-is.

use crate::error::{Error, Result};

/// Expand `template` with `args`, in order.
///
/// `field` names the config key the template came from and is only used
/// for error messages.
pub fn expand(field: &str, template: &str, args: &[&str]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('%') => out.push('%'),
            Some('s' | 'd' | 'v') => {
                let arg = args.next().ok_or_else(|| Error::ConfigValidation {
                    field: field.to_string(),
                    message: format!("Template '{}' has more placeholders than values", template),
                })?;
                out.push_str(arg);
            }
            Some(verb) => {
                return Err(Error::ConfigValidation {
                    field: field.to_string(),
                    message: format!("Unsupported placeholder '%{}' in '{}'", verb, template),
                });
            }
            None => {
                return Err(Error::ConfigValidation {
                    field: field.to_string(),
                    message: format!("Template '{}' ends with a dangling '%'", template),
                });
            }
        }
    }

    if args.next().is_some() {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("Template '{}' has fewer placeholders than values", template),
        });
    }

    Ok(out)
}

/// Percent-encode a query string for use as a URL query value.
pub fn escape_query(query: &str) -> String {
    urlencoding::encode(query).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_positional() {
        let url = expand(
            "search_api",
            "https://api.example/search?q=%s&limit=%d",
            &["foo", "5"],
        )
        .unwrap();
        assert_eq!(url, "https://api.example/search?q=foo&limit=5");
    }

    #[test]
    fn test_expand_literal_percent() {
        let url = expand("download_api", "https://x/%v/100%%", &["abc"]).unwrap();
        assert_eq!(url, "https://x/abc/100%");
    }

    #[test]
    fn test_expand_missing_value() {
        let err = expand("search_api", "q=%s&limit=%d", &["foo"]).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { ref field, .. } if field == "search_api"));
    }

    #[test]
    fn test_expand_extra_value() {
        assert!(expand("download_api", "https://x/files", &["abc"]).is_err());
    }

    #[test]
    fn test_expand_bad_verb() {
        assert!(expand("download_api", "https://x/%x", &["abc"]).is_err());
        assert!(expand("download_api", "https://x/%", &[]).is_err());
    }

    #[test]
    fn test_escape_query() {
        assert_eq!(escape_query("a b"), "a%20b");
        assert_eq!(escape_query("p:10+ and x"), "p%3A10%2B%20and%20x");
        assert_eq!(escape_query("foo"), "foo");
    }
}
