//! The merged render namespace.
//!
//! Every page renders against one flat name → value mapping: the partial
//! registry shallow-merged with the data registry. On a name collision the
//! data entry wins — a JSON file named `header.json` shadows a partial named
//! `header.hbs` in the namespace (the partial stays reachable through
//! `{{> header}}`, which reads engine state, not the namespace). No deep
//! merging, no warning.

use crate::content::Registry;

/// The flat name → value mapping visible to every page at render time.
pub type Namespace = Registry;

/// Merge the partial and data registries. Data wins on collision.
pub fn merge(partials: Registry, data: Registry) -> Namespace {
    let mut namespace = partials;
    namespace.extend(data);
    namespace
}
