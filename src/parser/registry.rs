use super::{signature_of, BankLayout, ItauLayout, SIGNATURE_LEN};
use crate::error::{Result, ReturnError};
use crate::source;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Dispatch table from bank signature to layout
pub struct BankRegistry {
    /// Signature -> Layout mapping
    map: HashMap<String, Box<dyn BankLayout>>,
}

impl BankRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in layout
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.map.insert("341".to_string(), Box::new(ItauLayout));
        registry
    }

    /// Register a layout for a bank signature
    ///
    /// Replaces any layout previously registered for the same signature.
    ///
    /// # Example
    /// ```ignore
    /// registry.register("237", BradescoLayout)?;
    /// ```
    pub fn register(
        &mut self,
        signature: impl Into<String>,
        layout: impl BankLayout + 'static,
    ) -> Result<()> {
        let signature = signature.into();
        if signature.chars().count() != SIGNATURE_LEN {
            return Err(ReturnError::InvalidSignature(signature));
        }

        debug!(%signature, bank = layout.name(), "registering bank layout");
        self.map.insert(signature, Box::new(layout));
        Ok(())
    }

    /// Look up the layout for a signature
    pub fn select(&self, signature: &str) -> Result<&dyn BankLayout> {
        self.map
            .get(signature)
            .map(|l| &**l)
            .ok_or_else(|| ReturnError::UnsupportedBank(signature.to_string()))
    }

    /// Pick the layout for the file at `path` from its first line
    pub fn detect(&self, path: &Path) -> Result<&dyn BankLayout> {
        let first_line = source::read_first_line(path)?;
        let signature = signature_of(&first_line);
        let layout = self.select(&signature)?;

        debug!(path = %path.display(), %signature, bank = layout.name(), "detected bank");
        Ok(layout)
    }

    /// Use the layout for `signature` when given, otherwise detect it from `path`
    ///
    /// An explicit signature lets a caller recover from an unrecognised header.
    pub fn resolve(&self, path: &Path, signature: Option<&str>) -> Result<&dyn BankLayout> {
        match signature {
            Some(signature) => self.select(signature),
            None => self.detect(path),
        }
    }

    /// Get the number of registered layouts
    pub fn layout_count(&self) -> usize {
        self.map.len()
    }

    /// List all registered signatures
    pub fn signatures(&self) -> Vec<&str> {
        self.map.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for BankRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}
