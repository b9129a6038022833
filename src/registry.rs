//! Plugin name registry.
//!
//! Built once at startup by bulk-registering each platform family, then
//! handed to the dispatcher by value and never mutated again. Name
//! collisions are rejected outright rather than overwritten, so a later
//! family registration can never silently shadow an earlier one.

use crate::error::DispatchError;
use crate::plugins::{self, PluginSpec};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Platform families a plugin can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Windows,
    Linux,
    Mac,
    Common,
}

impl Family {
    pub const ALL: [Family; 4] = [Family::Windows, Family::Linux, Family::Mac, Family::Common];

    /// Registry namespace prefix; the cross-platform family registers bare
    /// names.
    fn prefix(self) -> Option<&'static str> {
        match self {
            Family::Windows => Some("windows"),
            Family::Linux => Some("linux"),
            Family::Mac => Some("mac"),
            Family::Common => None,
        }
    }

    fn plugins(self) -> &'static [PluginSpec] {
        match self {
            Family::Windows => plugins::windows::PLUGINS,
            Family::Linux => plugins::linux::PLUGINS,
            Family::Mac => plugins::mac::PLUGINS,
            Family::Common => plugins::common::PLUGINS,
        }
    }
}

/// Mapping from registered name (e.g. `"linux.PsList"`, `"Banners"`) to its
/// plugin spec.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: BTreeMap<String, &'static PluginSpec>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        PluginRegistry {
            plugins: BTreeMap::new(),
        }
    }

    /// Registry with all four platform families registered.
    pub fn with_all_families() -> Result<Self, DispatchError> {
        let mut registry = PluginRegistry::new();
        for family in Family::ALL {
            registry.register_family(family)?;
        }
        Ok(registry)
    }

    /// Insert one plugin under `key`; collisions are an error.
    pub fn register(
        &mut self,
        key: String,
        spec: &'static PluginSpec,
    ) -> Result<(), DispatchError> {
        match self.plugins.entry(key) {
            Entry::Occupied(e) => Err(DispatchError::DuplicateName(e.key().clone())),
            Entry::Vacant(e) => {
                e.insert(spec);
                Ok(())
            }
        }
    }

    /// Register every plugin of `family` under its namespaced name.
    pub fn register_family(&mut self, family: Family) -> Result<(), DispatchError> {
        for spec in family.plugins() {
            let key = match family.prefix() {
                Some(prefix) => format!("{}.{}", prefix, spec.name),
                None => spec.name.to_string(),
            };
            self.register(key, spec)?;
        }
        Ok(())
    }

    /// Look up a plugin by its registered name.
    pub fn resolve(&self, name: &str) -> Result<&'static PluginSpec, DispatchError> {
        self.plugins
            .get(name)
            .copied()
            .ok_or_else(|| DispatchError::UnknownPlugin(name.to_string()))
    }

    /// Registered `(name, summary)` pairs in sorted name order, stable
    /// across calls.
    pub fn list_all(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.plugins
            .iter()
            .map(|(name, spec)| (name.as_str(), spec.summary))
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
