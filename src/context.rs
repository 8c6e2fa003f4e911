//! Context parameters for a single synthesis run.
//!
//! Values come from two places: the optional `infra.json` file next to the
//! app (its top-level `"context"` object), overridden by repeatable
//! `--context KEY=VALUE` arguments. Lookups never transform values; defaults
//! apply only when a key is absent or its value is the empty string.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const CONTEXT_FILE: &str = "infra.json";

#[derive(Debug, Clone, Default)]
pub struct Context {
    values: BTreeMap<String, String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the map from `<dir>/infra.json` if it exists.
    ///
    /// A missing file yields an empty context. A malformed file is logged and
    /// skipped so the bootstrap can still run on CLI context alone.
    pub fn from_app_dir(dir: &Path) -> Self {
        let mut ctx = Self::new();
        let path = dir.join(CONTEXT_FILE);
        if !path.exists() {
            return ctx;
        }

        match read_context_file(&path) {
            Ok(pairs) => {
                for (k, v) in pairs {
                    ctx.set(k, v);
                }
            }
            Err(e) => {
                tracing::warn!("ignoring {}: {e}", path.display());
            }
        }
        ctx
    }

    /// Apply one `KEY=VALUE` argument. The first `=` splits key from value,
    /// so values may themselves contain `=`.
    pub fn apply_arg(&mut self, raw: &str) -> Result<()> {
        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| Error::ContextArg(raw.to_string()))?;
        if key.is_empty() {
            return Err(Error::ContextArg(raw.to_string()));
        }
        self.set(key.to_string(), value.to_string());
        Ok(())
    }

    /// Last assignment wins.
    pub fn set(&mut self, key: String, value: String) {
        self.values.insert(key, value);
    }

    pub fn try_get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value for `key`, falling back to `default` when the key is absent or
    /// holds the empty string. Present non-empty values pass through
    /// byte-for-byte (no trimming, no case folding).
    pub fn get_or(&self, key: &str, default: &str) -> String {
        match self.try_get(key) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => default.to_string(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn read_context_file(path: &Path) -> Result<Vec<(String, String)>> {
    let err = |reason: String| Error::ContextFile {
        path: path.display().to_string(),
        reason,
    };

    let file = File::open(path).map_err(|e| err(e.to_string()))?;
    let v: serde_json::Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| err(e.to_string()))?;

    let mut pairs = Vec::new();
    if let Some(obj) = v.get("context").and_then(|c| c.as_object()) {
        for (key, value) in obj {
            // Context values are strings on the wire; tolerate scalars.
            let value = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Number(n) => n.to_string(),
                _ => {
                    return Err(err(format!("context key '{key}' must be a scalar")));
                }
            };
            pairs.push((key.clone(), value));
        }
    }
    Ok(pairs)
}
