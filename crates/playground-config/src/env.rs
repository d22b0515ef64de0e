use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `{{ env.VAR }}` or `{{ env.VAR | default("fallback") }}`
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
        .expect("placeholder pattern must be valid")
});

/// Expand environment placeholders in raw TOML text
///
/// Runs before deserialization so config structs can use plain `String`
/// and `SecretString` fields. TOML comment lines are left untouched so a
/// commented-out key never requires its variable to be set.
pub fn expand_env(input: &str) -> Result<String, String> {
    input.split_inclusive('\n').map(expand_line).collect()
}

fn expand_line(line: &str) -> Result<Cow<'_, str>, String> {
    if line.trim_start().starts_with('#') {
        return Ok(Cow::Borrowed(line));
    }

    let mut failure = None;
    let expanded = PLACEHOLDER.replace_all(line, |captures: &Captures<'_>| {
        let fallback = captures.get(2).map(|m| m.as_str());
        resolve(&captures[1], fallback).unwrap_or_else(|e| {
            failure.get_or_insert(e);
            String::new()
        })
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(expanded),
    }
}

fn resolve(key: &str, fallback: Option<&str>) -> Result<String, String> {
    let Some(var_name) = key.strip_prefix("env.").filter(|name| !name.contains('.')) else {
        return Err(format!("only variables scoped with 'env.' are supported: `{key}`"));
    };

    match (std::env::var(var_name), fallback) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(default)) => Ok(default.to_owned()),
        (Err(_), None) => Err(format!("environment variable not found: `{var_name}`")),
    }
}
