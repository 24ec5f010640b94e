//! Build configuration.
//!
//! [`BuildConfig`] is an immutable value object describing one build: the
//! five root directories, the output extension, the exclusion set, and the
//! name-collision policy. The core pipeline only consumes it, never mutates
//! it.
//!
//! ## Resolution
//!
//! Every field falls back from an `HBT_*` environment variable to a hard
//! default:
//!
//! | Env var            | Default      |
//! |--------------------|--------------|
//! | `HBT_OUTPUT_DIR`   | `./public`   |
//! | `HBT_HELPERS_DIR`  | `./helpers`  |
//! | `HBT_JSON_DIR`     | `./content`  |
//! | `HBT_PARTIALS_DIR` | `./partials` |
//! | `HBT_PAGES_DIR`    | `./pages`    |
//! | `HBT_EXT`          | `.html`      |
//! | `HBT_EXCLUDES`     | empty        |
//! | `HBT_ON_COLLISION` | `overwrite`  |
//!
//! `HBT_EXCLUDES` is a comma-delimited list of exact root-relative page
//! paths to skip (`drafts/wip.hbs,secret.hbs`) — no glob expansion.
//!
//! Resolution is factored through a lookup closure ([`BuildConfig::resolve`])
//! so tests can exercise it without mutating the process environment.

use log::warn;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// What to do when two files under the same root derive the same name.
///
/// Traversal order is deterministic (see [`crate::walk`]), so "earlier" and
/// "later" are well defined and reproducible across builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Later file wins — the historical behavior.
    #[default]
    Overwrite,
    /// Earlier file wins; later duplicates are ignored.
    Skip,
    /// A duplicate name aborts the build.
    Error,
}

impl CollisionPolicy {
    /// Parse the `HBT_ON_COLLISION` value. Unknown values fall back to
    /// [`CollisionPolicy::Overwrite`] with a warning rather than failing the
    /// build over a typo in glue configuration.
    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Self::Overwrite,
            "skip" => Self::Skip,
            "error" => Self::Error,
            other => {
                warn!("unknown collision policy '{other}', using 'overwrite'");
                Self::Overwrite
            }
        }
    }
}

/// Resolved configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Where compiled pages are written.
    pub output_dir: PathBuf,
    /// Root of Rhai helper scripts.
    pub helpers_dir: PathBuf,
    /// Root of JSON data files.
    pub data_dir: PathBuf,
    /// Root of partial template fragments.
    pub partials_dir: PathBuf,
    /// Root of page templates.
    pub pages_dir: PathBuf,
    /// Extension appended to every output file, dot included.
    pub output_extension: String,
    /// Exact root-relative page paths excluded from compilation.
    pub excludes: BTreeSet<String>,
    /// Duplicate-name resolution within a single root.
    pub collision: CollisionPolicy,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./public"),
            helpers_dir: PathBuf::from("./helpers"),
            data_dir: PathBuf::from("./content"),
            partials_dir: PathBuf::from("./partials"),
            pages_dir: PathBuf::from("./pages"),
            output_extension: ".html".to_string(),
            excludes: BTreeSet::new(),
            collision: CollisionPolicy::default(),
        }
    }
}

impl BuildConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// `get` returns the value for an `HBT_*` key, or `None` to take the
    /// default. [`from_env`](Self::from_env) passes [`std::env::var`].
    pub fn resolve(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let dir = |key: &str, fallback: PathBuf| get(key).map(PathBuf::from).unwrap_or(fallback);

        Self {
            output_dir: dir("HBT_OUTPUT_DIR", defaults.output_dir),
            helpers_dir: dir("HBT_HELPERS_DIR", defaults.helpers_dir),
            data_dir: dir("HBT_JSON_DIR", defaults.data_dir),
            partials_dir: dir("HBT_PARTIALS_DIR", defaults.partials_dir),
            pages_dir: dir("HBT_PAGES_DIR", defaults.pages_dir),
            output_extension: get("HBT_EXT").unwrap_or(defaults.output_extension),
            excludes: get("HBT_EXCLUDES")
                .map(|raw| parse_excludes(&raw))
                .unwrap_or_default(),
            collision: get("HBT_ON_COLLISION")
                .map(|raw| CollisionPolicy::parse(&raw))
                .unwrap_or_default(),
        }
    }
}

/// Split a comma-delimited exclude list into a set of exact paths.
///
/// Entries are trimmed; empty entries (trailing commas, `""`) are dropped.
pub fn parse_excludes(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = BuildConfig::resolve(|_| None);

        assert_eq!(config.output_dir, PathBuf::from("./public"));
        assert_eq!(config.helpers_dir, PathBuf::from("./helpers"));
        assert_eq!(config.data_dir, PathBuf::from("./content"));
        assert_eq!(config.partials_dir, PathBuf::from("./partials"));
        assert_eq!(config.pages_dir, PathBuf::from("./pages"));
        assert_eq!(config.output_extension, ".html");
        assert!(config.excludes.is_empty());
        assert_eq!(config.collision, CollisionPolicy::Overwrite);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = BuildConfig::resolve(|key| match key {
            "HBT_OUTPUT_DIR" => Some("./dist".to_string()),
            "HBT_EXT" => Some(".hbs".to_string()),
            "HBT_JSON_DIR" => Some("./data".to_string()),
            _ => None,
        });

        assert_eq!(config.output_dir, PathBuf::from("./dist"));
        assert_eq!(config.output_extension, ".hbs");
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        // Untouched fields keep defaults
        assert_eq!(config.pages_dir, PathBuf::from("./pages"));
    }

    #[test]
    fn excludes_parsed_from_comma_list() {
        let config = BuildConfig::resolve(|key| match key {
            "HBT_EXCLUDES" => Some("drafts/wip.hbs, secret.hbs,".to_string()),
            _ => None,
        });

        assert_eq!(config.excludes.len(), 2);
        assert!(config.excludes.contains("drafts/wip.hbs"));
        assert!(config.excludes.contains("secret.hbs"));
    }

    #[test]
    fn empty_excludes_value_yields_empty_set() {
        assert!(parse_excludes("").is_empty());
        assert!(parse_excludes(" , ,").is_empty());
    }

    #[test]
    fn collision_policy_parsed() {
        let config = BuildConfig::resolve(|key| match key {
            "HBT_ON_COLLISION" => Some("error".to_string()),
            _ => None,
        });
        assert_eq!(config.collision, CollisionPolicy::Error);

        assert_eq!(CollisionPolicy::parse("Skip"), CollisionPolicy::Skip);
        assert_eq!(CollisionPolicy::parse(" overwrite "), CollisionPolicy::Overwrite);
    }

    #[test]
    fn unknown_collision_policy_falls_back_to_overwrite() {
        assert_eq!(CollisionPolicy::parse("merge"), CollisionPolicy::Overwrite);
    }
}
