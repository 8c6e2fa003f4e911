//! Construct tree and synthesis.
//!
//! An `App` owns the stacks registered for one invocation. Synthesis writes
//! the tree out as `manifest.json`; what each stack provisions internally is
//! the deployment provider's concern, so a stack carries only its logical id
//! and resolved properties.

use crate::config::StackProps;
use crate::error::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "manifest.json";

/// One named, deployable unit in the construct tree.
#[derive(Debug, Clone, Serialize)]
pub struct AppInfraStack {
    pub id: String,
    #[serde(flatten)]
    pub props: StackProps,
}

impl AppInfraStack {
    /// Register a stack under `id` in the app's construct tree.
    /// Logical ids must be non-empty and unique per invocation.
    pub fn new(app: &mut App, id: &str, props: StackProps) -> Result<()> {
        if id.is_empty() {
            return Err(Error::EmptyStackId);
        }
        app.add(AppInfraStack {
            id: id.to_string(),
            props,
        })
    }
}

/// Root of the construct tree for one invocation.
#[derive(Debug, Default)]
pub struct App {
    stacks: Vec<AppInfraStack>,
}

#[derive(Serialize)]
struct Manifest<'a> {
    version: &'a str,
    synthesized_at: String,
    stacks: &'a [AppInfraStack],
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stacks in registration order.
    pub fn stacks(&self) -> &[AppInfraStack] {
        &self.stacks
    }

    fn add(&mut self, stack: AppInfraStack) -> Result<()> {
        if self.stacks.iter().any(|s| s.id == stack.id) {
            return Err(Error::DuplicateStack(stack.id));
        }
        self.stacks.push(stack);
        Ok(())
    }

    /// Write the deployment manifest into `out_dir`, creating it as needed.
    /// Returns the manifest path.
    pub fn synth(&self, out_dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(out_dir)?;

        let manifest = Manifest {
            version: env!("CARGO_PKG_VERSION"),
            synthesized_at: chrono::Utc::now().to_rfc3339(),
            stacks: &self.stacks,
        };

        let path = out_dir.join(MANIFEST_FILE);
        fs::write(&path, serde_json::to_string_pretty(&manifest)?)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DeployEnv, StackProps};
    use crate::context::Context;

    fn default_props() -> StackProps {
        StackProps::resolve(&Context::new(), DeployEnv::from_vars(None, None))
    }

    #[test]
    fn registers_exactly_once() {
        let mut app = App::new();
        AppInfraStack::new(&mut app, "AppInfraStack", default_props()).unwrap();

        assert_eq!(app.stacks().len(), 1);
        assert_eq!(app.stacks()[0].id, "AppInfraStack");
    }

    #[test]
    fn rejects_duplicate_logical_id() {
        let mut app = App::new();
        AppInfraStack::new(&mut app, "AppInfraStack", default_props()).unwrap();

        let err = AppInfraStack::new(&mut app, "AppInfraStack", default_props()).unwrap_err();
        assert!(matches!(err, Error::DuplicateStack(id) if id == "AppInfraStack"));
        assert_eq!(app.stacks().len(), 1);
    }

    #[test]
    fn rejects_empty_logical_id() {
        let mut app = App::new();
        let err = AppInfraStack::new(&mut app, "", default_props()).unwrap_err();
        assert!(matches!(err, Error::EmptyStackId));
        assert!(app.stacks().is_empty());
    }

    #[test]
    fn synth_writes_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new();
        AppInfraStack::new(&mut app, "AppInfraStack", default_props()).unwrap();

        let path = app.synth(&dir.path().join("infra.out")).unwrap();
        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.contains("\"id\": \"AppInfraStack\""));
        assert!(body.contains("\"projectName\": \"minha-api\""));
        assert!(body.contains("\"region\": \"us-east-1\""));
        assert!(body.contains("\"synthesized_at\""));
    }
}
