//! Result accumulation for a single scan.

use cjscan_core::collections::{FxHashSet, FxMap, OrderedSet};
use serde::Serialize;

/// The statically detected export surface of one CommonJS module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleExports {
    /// Property names the module is known to export, in detection order.
    pub exports: Vec<String>,
    /// Specifiers of modules whose exports are forwarded wholesale.
    pub reexports: Vec<String>,
}

impl ModuleExports {
    /// Whether nothing at all was detected.
    pub fn is_empty(&self) -> bool {
        self.exports.is_empty() && self.reexports.is_empty()
    }
}

/// Scratch sets filled in while scanning and turned into [`ModuleExports`]
/// at the end. Names arrive already decoded; `None` means the source spelled
/// a name that could not be decoded, which is dropped.
#[derive(Debug, Default)]
pub(crate) struct ExportCollector {
    exports: OrderedSet<String>,
    unsafe_getters: FxHashSet<String>,
    reexports: OrderedSet<String>,
    /// Local binding name -> specifier it was `require`d from. A binding to
    /// an undecodable specifier is remembered as `None`.
    star_exports: FxMap<String, Option<String>>,
}

impl ExportCollector {
    pub fn add_export(&mut self, name: Option<String>) {
        if let Some(name) = name {
            self.exports.insert(name);
        }
    }

    /// Record a name whose accessor could not be proven side-effect free.
    pub fn add_unsafe_getter(&mut self, name: Option<String>) {
        if let Some(name) = name {
            self.unsafe_getters.insert(name);
        }
    }

    pub fn add_reexport(&mut self, specifier: Option<String>) {
        match specifier {
            Some(specifier) if !specifier.is_empty() => {
                self.reexports.insert(specifier);
            }
            _ => {}
        }
    }

    /// `module.exports = ...` replaces everything recorded so far.
    pub fn reassign(&mut self) {
        self.exports.clear();
        self.reexports.clear();
    }

    pub fn bind_star_export(&mut self, binding: String, specifier: Option<String>) {
        self.star_exports.insert(binding, specifier);
    }

    /// The specifier a binding was `require`d from, if known and non-empty.
    pub fn star_export_specifier(&self, binding: &str) -> Option<&str> {
        self.star_exports
            .get(binding)
            .and_then(|specifier| specifier.as_deref())
            .filter(|specifier| !specifier.is_empty())
    }

    pub fn clear(&mut self) {
        self.exports.clear();
        self.unsafe_getters.clear();
        self.reexports.clear();
        self.star_exports.clear();
    }

    /// Build the result and leave the collector empty for the next scan.
    pub fn finish(&mut self) -> ModuleExports {
        let unsafe_getters = std::mem::take(&mut self.unsafe_getters);
        let exports = self
            .exports
            .drain_to_vec()
            .into_iter()
            .filter(|name| !unsafe_getters.contains(name))
            .collect();
        let reexports = self.reexports.drain_to_vec();
        self.star_exports.clear();
        ModuleExports { exports, reexports }
    }
}
