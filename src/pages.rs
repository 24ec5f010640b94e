//! Page compilation and output writing.
//!
//! The final pipeline stage: discover page templates (honoring the exclusion
//! set), render each one against the merged namespace with the fully
//! registered engine, and write the result to the output tree, mirroring the
//! page's relative sub-path:
//!
//! ```text
//! pages/index.hbs        →  public/index.html
//! pages/nested/deep.hbs  →  public/nested/deep.html
//! ```
//!
//! Rendering happens with HTML escaping disabled (configured on the per-run
//! engine), since pages routinely inject pre-rendered partial markup from
//! the namespace. Missing parent directories are created recursively;
//! existing output files are overwritten. The first read, render, or write
//! failure aborts the remaining batch — pages written before the failure
//! stay on disk.

use crate::config::BuildConfig;
use crate::namespace::Namespace;
use crate::naming::stem;
use crate::walk;
use handlebars::Handlebars;
use log::debug;
use std::fs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render page '{name}': {source}")]
    Render {
        name: String,
        source: Box<handlebars::RenderError>,
    },
}

/// Compile every non-excluded page and write it to the output directory.
///
/// Returns the output-relative paths written, in compilation order.
pub fn compile_pages(
    config: &BuildConfig,
    namespace: &Namespace,
    engine: &Handlebars,
) -> Result<Vec<String>, PageError> {
    let pages = walk::filter(walk::walk(&config.pages_dir)?, &config.excludes);

    let mut written = Vec::with_capacity(pages.len());
    for page in pages {
        let name = stem(&page).to_string();

        let source = fs::read_to_string(config.pages_dir.join(&page))?;
        let rendered = engine
            .render_template(&source, namespace)
            .map_err(|source| PageError::Render {
                name: name.clone(),
                source: Box::new(source),
            })?;

        let out_rel = format!("{}{}", name, config.output_extension);
        let out_path = config.output_dir.join(&out_rel);
        if let Some(parent) = out_path.parent() {
            walk::ensure_dir(parent)?;
        }
        fs::write(&out_path, rendered)?;
        debug!("compiled {page} -> {}", out_path.display());

        written.push(out_rel);
    }

    Ok(written)
}
