//! Pipeline orchestration.
//!
//! [`build`] runs the whole pipeline once, synchronously, against a fresh
//! engine:
//!
//! 1. load partials (map + engine registration)
//! 2. load data
//! 3. register helpers
//! 4. merge partials and data into the namespace
//! 5. compile and write pages
//!
//! Partials and helpers are fully registered before any page renders — that
//! ordering is a correctness requirement, not an optimization, since page
//! rendering reads the engine state steps 1 and 3 wrote. The engine is local
//! to this function, so repeated in-process runs never see each other's
//! registrations.
//!
//! Errors are never caught or retried here; the first failure unwinds to the
//! caller with whatever output the run had already written left on disk.

use crate::config::BuildConfig;
use crate::content::{self, ContentError};
use crate::helpers::{self, HelperError};
use crate::namespace;
use crate::pages::{self, PageError};
use handlebars::{Handlebars, no_escape};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Helper(#[from] HelperError),
    #[error(transparent)]
    Page(#[from] PageError),
}

/// Counts and artifacts from one completed run.
#[derive(Debug)]
pub struct BuildReport {
    pub partials: usize,
    pub data_files: usize,
    pub helpers: usize,
    /// Output-relative paths of written pages, in compilation order.
    pub pages: Vec<String>,
}

/// Run the full pipeline for `config`.
pub fn build(config: &BuildConfig) -> Result<BuildReport, BuildError> {
    let mut engine = Handlebars::new();
    engine.register_escape_fn(no_escape);

    let partials = content::load_partials(
        &config.partials_dir,
        &config.output_dir,
        config.collision,
        &mut engine,
    )?;
    let data = content::load_data(&config.data_dir, &config.output_dir, config.collision)?;
    let helpers = helpers::load_helpers(&config.helpers_dir, config.collision, &mut engine)?;

    let partial_count = partials.len();
    let data_count = data.len();
    let namespace = namespace::merge(partials, data);

    let pages = pages::compile_pages(config, &namespace, &engine)?;

    Ok(BuildReport {
        partials: partial_count,
        data_files: data_count,
        helpers,
        pages,
    })
}
