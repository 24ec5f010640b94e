//! Helper script registry.
//!
//! Helpers are Rhai scripts, one file per helper, registered into the engine
//! under the first-dot stem of their relative path. A script receives the
//! call's positional arguments as `params` and named arguments as `hash`;
//! its final expression is the helper's output:
//!
//! ```text
//! helpers/upper.rhai:    params[0].to_upper()
//! pages/index.hbs:       {{upper site.title}}
//! ```
//!
//! Scripts are read from disk at registration time and the engine lives for
//! exactly one run, so edits to helper files are always picked up by the
//! next build — there is no cross-run caching to invalidate. A script that
//! fails to read or parse is fatal.
//!
//! Unlike partials and data, helper registration feeds nothing into the
//! render namespace; it only mutates engine state.

use crate::config::CollisionPolicy;
use crate::naming::stem;
use crate::walk;
use handlebars::Handlebars;
use log::debug;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to load helper script {path}: {source}")]
    Script {
        path: PathBuf,
        // handlebars 6 does not re-export `ScriptError`, so it can only be
        // held behind a trait object here.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("duplicate helper name '{0}' (collision policy is 'error')")]
    Collision(String),
}

/// Register every helper script under `dir` with `engine`.
///
/// Returns the number of helpers registered.
pub fn load_helpers(
    dir: &Path,
    policy: CollisionPolicy,
    engine: &mut Handlebars,
) -> Result<usize, HelperError> {
    let mut seen = BTreeSet::new();

    for rel in walk::walk(dir)? {
        let name = stem(&rel).to_string();
        if !seen.insert(name.clone()) {
            match policy {
                CollisionPolicy::Overwrite => {
                    debug!("helper '{name}' already registered, overwriting");
                }
                CollisionPolicy::Skip => {
                    debug!("helper '{name}' already registered, skipping");
                    continue;
                }
                CollisionPolicy::Error => return Err(HelperError::Collision(name)),
            }
        }

        let path = dir.join(&rel);
        engine
            .register_script_helper_file(&name, &path)
            .map_err(|source| HelperError::Script {
                path: path.clone(),
                source: Box::new(source),
            })?;
        debug!("registered helper '{name}' from {}", path.display());
    }

    debug!("finished helper registration: {} helpers", seen.len());
    Ok(seen.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_file;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn helper_script_registered_and_callable() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "upper.rhai", "params[0].to_upper()");

        let mut engine = Handlebars::new();
        let count = load_helpers(tmp.path(), CollisionPolicy::default(), &mut engine).unwrap();

        assert_eq!(count, 1);
        let rendered = engine
            .render_template("{{upper name}}", &json!({"name": "quiet"}))
            .unwrap();
        assert_eq!(rendered, "QUIET");
    }

    #[test]
    fn missing_helpers_dir_registers_nothing() {
        let tmp = TempDir::new().unwrap();
        let mut engine = Handlebars::new();

        let count = load_helpers(
            &tmp.path().join("nope"),
            CollisionPolicy::default(),
            &mut engine,
        )
        .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn unparseable_script_is_fatal() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "broken.rhai", "fn {{{ not rhai");

        let mut engine = Handlebars::new();
        let result = load_helpers(tmp.path(), CollisionPolicy::default(), &mut engine);

        assert!(matches!(result, Err(HelperError::Script { .. })));
    }

    #[test]
    fn nested_helper_name_includes_subdirectory() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "text/shout.rhai", r#"params[0] + "!""#);

        let mut engine = Handlebars::new();
        let count = load_helpers(tmp.path(), CollisionPolicy::default(), &mut engine).unwrap();

        // Registered under "text/shout" — the stem rule applies uniformly,
        // even though such names are awkward to reach from template syntax
        assert_eq!(count, 1);
    }

    #[test]
    fn duplicate_helper_name_fatal_under_error_policy() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "fmt.a.rhai", "params[0]");
        write_file(tmp.path(), "fmt.b.rhai", "params[0]");

        let mut engine = Handlebars::new();
        let result = load_helpers(tmp.path(), CollisionPolicy::Error, &mut engine);

        assert!(matches!(result, Err(HelperError::Collision(name)) if name == "fmt"));
    }

    #[test]
    fn duplicate_helper_skipped_under_skip_policy() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "fmt.a.rhai", r#"params[0] + "-a""#);
        write_file(tmp.path(), "fmt.b.rhai", r#"params[0] + "-b""#);

        let mut engine = Handlebars::new();
        let count = load_helpers(tmp.path(), CollisionPolicy::Skip, &mut engine).unwrap();

        assert_eq!(count, 1);
        let rendered = engine
            .render_template("{{fmt word}}", &json!({"word": "x"}))
            .unwrap();
        assert_eq!(rendered, "x-a");
    }
}
