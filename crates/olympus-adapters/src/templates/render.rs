//! `{{VARIABLE}}` substitution for template files.

use std::collections::HashMap;

use chrono::{Datelike, Utc};

/// Variables available to a template.
///
/// | Variable | Example |
/// |----------|---------|
/// | `PROJECT_NAME` | "My Awesome App" |
/// | `PROJECT_NAME_SNAKE` | "my_awesome_app" |
/// | `PROJECT_NAME_KEBAB` | "my-awesome-app" |
/// | `YEAR` | "2026" |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        let name = project_name.into();
        let mut variables = HashMap::new();

        variables.insert("PROJECT_NAME_SNAKE".to_string(), split_words(&name).join("_"));
        variables.insert("PROJECT_NAME_KEBAB".to_string(), split_words(&name).join("-"));
        variables.insert("PROJECT_NAME".to_string(), name);
        variables.insert("YEAR".to_string(), Utc::now().year().to_string());

        Self { variables }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every known `{{KEY}}` in one pass. Unknown placeholders are
    /// left as-is and substituted values are never scanned again.
    pub fn render(&self, template: &str) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            let Some(end) = after_open.find("}}") else {
                rest = &rest[start..];
                break;
            };

            let key = &after_open[..end];
            match self.variables.get(key) {
                Some(value) => {
                    result.push_str(value);
                    rest = &after_open[end + 2..];
                }
                None => {
                    result.push_str("{{");
                    rest = after_open;
                }
            }
        }

        result.push_str(rest);
        result
    }
}

/// Split on `_`, `-`, whitespace, camelCase and acronym boundaries.
///
/// `"XMLHttpRequest"` → `["xml", "http", "request"]`
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c == '.' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        current.push(c);

        if let Some(&next) = chars.peek() {
            let camel = c.is_lowercase() && next.is_uppercase();
            let acronym = c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(char::is_lowercase);
            if camel || acronym {
                words.push(current.to_lowercase());
                current.clear();
            }
        }
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }
    words
}
