//! An in-memory font registry.

use folio_traits::{FontRegistry, RegistryError};
use log::debug;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// A font registry that keeps registered font data in process memory.
///
/// Registering a name reads the font file into reference-counted bytes
/// keyed by logical name. The table is append-only: re-registering an
/// existing name replaces nothing and nothing is ever removed.
#[derive(Debug, Default)]
pub struct InMemoryFontRegistry {
    fonts: RwLock<HashMap<String, Arc<Vec<u8>>>>,
}

impl InMemoryFontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registered font data for a name, if present.
    ///
    /// Returns `None` if the lock is poisoned.
    pub fn data(&self, name: &str) -> Option<Arc<Vec<u8>>> {
        self.fonts.read().ok()?.get(name).cloned()
    }

    /// Get the number of registered fonts.
    ///
    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.fonts.read().map(|f| f.len()).unwrap_or(0)
    }

    /// Check if no fonts are registered.
    ///
    /// Returns `true` if the lock is poisoned (safe default).
    pub fn is_empty(&self) -> bool {
        self.fonts.read().map(|f| f.is_empty()).unwrap_or(true)
    }
}

impl FontRegistry for InMemoryFontRegistry {
    fn register(&self, name: &str, path: &Path) -> Result<(), RegistryError> {
        let data = std::fs::read(path).map_err(|e| RegistryError::LoadFailed {
            name: name.to_string(),
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        if data.is_empty() {
            return Err(RegistryError::InvalidFont(name.to_string()));
        }

        let mut fonts = self.fonts.write().map_err(|_| {
            RegistryError::Io("font table lock poisoned".to_string())
        })?;
        if fonts.contains_key(name) {
            debug!("Font '{}' already present in table; keeping existing data", name);
            return Ok(());
        }
        fonts.insert(name.to_string(), Arc::new(data));
        debug!("Font '{}' added to table ({} total)", name, fonts.len());
        Ok(())
    }

    fn contains(&self, name: &str) -> bool {
        self.fonts
            .read()
            .map(|f| f.contains_key(name))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryFontRegistry"
    }
}
