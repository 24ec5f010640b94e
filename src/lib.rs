//! # hbt
//!
//! A minimal build tool that compiles local Handlebars templates into static
//! HTML. Your filesystem is the data source: partial fragments, JSON content
//! files, and Rhai helper scripts feed a flat render namespace, and every page
//! template becomes exactly one output file.
//!
//! # Architecture: One Linear Pass
//!
//! A build is a single synchronous pipeline with no intermediate state:
//!
//! ```text
//! 1. Partials   partials/  →  name → raw template text
//! 2. Data       content/   →  name → parsed JSON value
//! 3. Helpers    helpers/   →  registered into the engine
//! 4. Merge      partials ∪ data (data wins)
//! 5. Pages      pages/     →  public/<name>.html, one file per page
//! ```
//!
//! Each run starts cold — fresh directory walks, a fresh engine, helpers
//! re-read from disk — and ends when every page is written or the first error
//! unwinds to the caller. There is no partial-success state: pages already
//! written before a failure stay on disk.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `BuildConfig` value object, resolved from `HBT_*` env vars and defaults |
//! | [`walk`] | Recursive file discovery, exclusion filtering, directory creation |
//! | [`naming`] | Registry name derivation — the first-dot stem rule |
//! | [`content`] | Partial and data registries keyed by filename stem |
//! | [`helpers`] | Rhai helper scripts registered into the engine |
//! | [`namespace`] | The merged name → value mapping every page renders against |
//! | [`pages`] | Page compilation and output writing |
//! | [`build`] | Pipeline orchestration and the top-level error type |
//!
//! # Design Decisions
//!
//! ## Per-Run Engine
//!
//! Partial and helper registrations live in a [`handlebars::Handlebars`]
//! registry constructed inside [`build::build`] and dropped when it returns.
//! Nothing leaks between runs, so a long-lived host can invoke the pipeline
//! repeatedly and always observe current on-disk helpers and partials.
//!
//! ## First-Dot Naming
//!
//! A file's registry name is its root-relative path up to the first `.`:
//! `nested/deep.hbs` → `nested/deep`, `card.tmpl.hbs` → `card`. The rule is
//! deliberately simple and applies to the whole relative path, so a directory
//! name containing a dot truncates the derived name. See [`naming::stem`].
//!
//! ## Deterministic Walk Order
//!
//! Name collisions resolve by traversal order (last write wins by default),
//! so traversal order is pinned: entries sort lexicographically at each
//! level, and a directory's own files precede anything in its
//! subdirectories. Renaming files never changes namespace *membership*, only
//! which colliding value survives. The policy itself is configurable via
//! [`config::CollisionPolicy`].
//!
//! ## Unescaped Rendering
//!
//! Pages render with HTML escaping disabled. Pages routinely splice in
//! pre-rendered partial markup through the namespace, and escaping would
//! mangle it. Trust your inputs — this tool builds local sites from local
//! files.

pub mod build;
pub mod config;
pub mod content;
pub mod helpers;
pub mod namespace;
pub mod naming;
pub mod pages;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_helpers;
