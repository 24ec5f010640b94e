//! Partial and data registries.
//!
//! Two instances of the same shape: walk a root directory, derive a name for
//! each file with the first-dot rule, and build a name → value map.
//!
//! - **Partials** ([`load_partials`]) hold raw template text. Each partial is
//!   also registered with the engine as it is loaded, so pages can reference
//!   it with `{{> name}}` in addition to reading its text from the namespace.
//! - **Data** ([`load_data`]) holds strictly parsed JSON. A malformed data
//!   file aborts the build — there is no best-effort parsing.
//!
//! Both loaders prime the output tree as a side effect: a file at
//! `nav/menu.hbs` ensures `output_dir/nav/` exists. That mirroring keeps the
//! output directory structure in step with nested sources even before any
//! page writes into it.
//!
//! Duplicate derived names within one root resolve per
//! [`CollisionPolicy`](crate::config::CollisionPolicy); with the default
//! policy the file visited later wins, and traversal order is deterministic
//! (see [`crate::walk`]).

use crate::config::CollisionPolicy;
use crate::naming::stem;
use crate::walk;
use handlebars::Handlebars;
use log::debug;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name → value mapping built from one root directory.
pub type Registry = BTreeMap<String, Value>;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid partial template '{name}': {source}")]
    Template {
        name: String,
        source: Box<handlebars::TemplateError>,
    },
    #[error("duplicate entry name '{0}' (collision policy is 'error')")]
    Collision(String),
}

/// Load every partial under `dir`, registering each with `engine`.
///
/// Returns the name → raw text map that feeds the render namespace.
pub fn load_partials(
    dir: &Path,
    output_dir: &Path,
    policy: CollisionPolicy,
    engine: &mut Handlebars,
) -> Result<Registry, ContentError> {
    let mut partials = Registry::new();

    for rel in walk::walk(dir)? {
        let name = stem(&rel).to_string();
        prime_output_subdir(&rel, output_dir)?;

        let text = fs::read_to_string(dir.join(&rel))?;
        if !insert(&mut partials, &name, Value::String(text.clone()), policy)? {
            continue;
        }
        engine
            .register_template_string(&name, &text)
            .map_err(|e| ContentError::Template {
                name: name.clone(),
                source: Box::new(e),
            })?;
        debug!("registered partial '{name}' from {rel}");
    }

    Ok(partials)
}

/// Load every JSON data file under `dir`.
///
/// Returns the name → parsed value map that feeds the render namespace.
pub fn load_data(
    dir: &Path,
    output_dir: &Path,
    policy: CollisionPolicy,
) -> Result<Registry, ContentError> {
    let mut data = Registry::new();

    for rel in walk::walk(dir)? {
        let name = stem(&rel).to_string();
        prime_output_subdir(&rel, output_dir)?;

        let path = dir.join(&rel);
        let text = fs::read_to_string(&path)?;
        let value: Value =
            serde_json::from_str(&text).map_err(|source| ContentError::Json { path, source })?;
        insert(&mut data, &name, value, policy)?;
        debug!("loaded data file '{name}' from {rel}");
    }

    Ok(data)
}

/// Apply the collision policy. Returns whether `value` was stored.
fn insert(
    registry: &mut Registry,
    name: &str,
    value: Value,
    policy: CollisionPolicy,
) -> Result<bool, ContentError> {
    if registry.contains_key(name) {
        match policy {
            CollisionPolicy::Overwrite => {
                debug!("name '{name}' already present, overwriting");
            }
            CollisionPolicy::Skip => {
                debug!("name '{name}' already present, skipping");
                return Ok(false);
            }
            CollisionPolicy::Error => return Err(ContentError::Collision(name.to_string())),
        }
    }
    registry.insert(name.to_string(), value);
    Ok(true)
}

/// Mirror a source file's subdirectory under the output root.
fn prime_output_subdir(rel: &str, output_dir: &Path) -> std::io::Result<()> {
    if let Some((parent, _)) = rel.rsplit_once('/') {
        walk::ensure_dir(&output_dir.join(parent))?;
    }
    Ok(())
}
