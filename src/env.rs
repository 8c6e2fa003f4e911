//! .env loading for the app directory.
//!
//! Base `.env` never overrides variables already set in the process; the
//! `.env.<environment>` overlay does. Values may reference other variables
//! with `${NAME}` or `${NAME:-default}`.

use std::path::Path;

/// Load `.env` and, when an environment is given, `.env.<environment>`.
/// Returns the file names actually loaded, for logging. Missing files are
/// not errors.
pub fn load_env(dir: &Path, environment: Option<&str>) -> Vec<String> {
    let mut loaded = Vec::new();

    let base = dir.join(".env");
    if base.exists() && dotenvy::from_path(&base).is_ok() {
        loaded.push(".env".to_string());
    }

    if let Some(env_name) = environment {
        let env_name = env_name.trim();
        if !env_name.is_empty() {
            let overlay = dir.join(format!(".env.{env_name}"));
            if overlay.exists() && dotenvy::from_path_override(&overlay).is_ok() {
                loaded.push(format!(".env.{env_name}"));
            }
        }
    }

    if !loaded.is_empty() {
        expand_process_env();
    }
    loaded
}

/// Expand `${NAME}` references across the process environment. Bounded
/// passes so chained references settle without looping on cycles.
fn expand_process_env() {
    for _ in 0..5 {
        let mut changes = 0;
        let vars: Vec<(String, String)> = std::env::vars().collect();

        for (key, val) in vars {
            if !val.contains("${") {
                continue;
            }
            let expanded = expand_value(&key, &val);
            if expanded != val {
                std::env::set_var(&key, expanded);
                changes += 1;
            }
        }
        if changes == 0 {
            break;
        }
    }
}

/// Replace `${NAME}` / `${NAME:-default}` in `input` from the process
/// environment. An unset reference without a default becomes empty;
/// self-references are left unresolved.
fn expand_value(current_key: &str, input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            // unterminated reference, keep literally
            out.push_str(&rest[start..]);
            return out;
        };

        let inner = &after[..end];
        let (name, default) = match inner.split_once(":-") {
            Some((n, d)) => (n, Some(d)),
            None => (inner, None),
        };

        let resolved = if name == current_key {
            None
        } else {
            std::env::var(name).ok().filter(|v| !v.is_empty())
        };

        match (resolved, default) {
            (Some(v), _) => out.push_str(&v),
            (None, Some(d)) => out.push_str(d),
            (None, None) => {}
        }

        rest = &after[end + 1..];
    }
    out.push_str(rest);
    out
}
