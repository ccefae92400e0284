//! Idempotent batch font registration.

use crate::fontspec::FontSpec;
use folio_traits::FontRegistry;
use log::{debug, error, info, warn};
use std::collections::HashSet;

/// Counts of what happened during one [`register_fonts`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationReport {
    /// Fonts newly registered with the engine.
    pub registered: usize,
    /// Specs skipped because an earlier spec in the same call used the name.
    pub duplicates: usize,
    /// Specs skipped because the engine already knew the name.
    pub already_registered: usize,
    /// Specs whose registration failed (logged and skipped).
    pub failed: usize,
}

/// Registers fonts with the engine's font table, in order, safely and
/// idempotently.
///
/// - duplicate names within `fonts` are skipped with a warning,
/// - names the registry already contains are skipped without an engine
///   call,
/// - a failed registration is logged and does not abort the rest.
///
/// Calling this repeatedly with the same input never conflicts: the second
/// call finds every name already registered.
pub fn register_fonts(registry: &dyn FontRegistry, fonts: &[FontSpec]) -> RegistrationReport {
    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut report = RegistrationReport::default();

    for spec in fonts {
        if !seen_names.insert(spec.name()) {
            warn!("Duplicate font in input: {} (skipped)", spec.name());
            report.duplicates += 1;
            continue;
        }

        if registry.contains(spec.name()) {
            debug!("Font {} already registered", spec.name());
            report.already_registered += 1;
            continue;
        }

        match registry.register(spec.name(), spec.path()) {
            Ok(()) => {
                info!(
                    "Successfully registered font: {} ({})",
                    spec.name(),
                    spec.path().display()
                );
                report.registered += 1;
            }
            Err(e) => {
                error!(
                    "Failed to register font {} from {}: {}",
                    spec.name(),
                    spec.path().display(),
                    e
                );
                report.failed += 1;
            }
        }
    }

    report
}
