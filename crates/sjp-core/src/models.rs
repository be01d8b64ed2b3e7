use serde::{Deserialize, Serialize};

/// Name of the packing-hall data resource.
pub const RESOURCE_PACKING: &str = "PackingSJP";

/// Name of the dispatch data resource.
pub const RESOURCE_DESPACHOS: &str = "DespachosSJP";

/// Identity and presentation metadata for a module.
///
/// Built once by the module and never mutated afterwards. Which profile
/// is *currently selected* is state of the module instance, not of this
/// descriptor; `available_profiles` only declares the names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleInfo {
    /// Stable unique identifier, never changes after creation.
    pub module_id: String,
    pub display_name: String,
    pub description: String,
    pub icon: String,
    /// Sort key for the shell menu; no uniqueness requirement.
    pub display_order: i32,
    /// The shell must not activate a disabled module.
    pub is_enabled: bool,
    /// Declared profile names, in presentation order. Empty means the
    /// module has a single fixed window and no profile picker.
    #[serde(default)]
    pub available_profiles: Vec<String>,
}

impl ModuleInfo {
    /// Whether the module has a profile concept at all.
    pub fn has_profiles(&self) -> bool {
        !self.available_profiles.is_empty()
    }
}

/// Declarative capability set for a module, fixed at construction.
///
/// The module only declares what it needs; checking the operator and
/// gating activation is the shell's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePermissions {
    pub read_packing: bool,
    pub write_packing: bool,
    pub read_despachos: bool,
    pub write_despachos: bool,
    /// When true the shell must verify operator elevation before
    /// activating the module.
    pub requires_super_user: bool,
}

impl ModulePermissions {
    /// Whether read access to the named resource is declared.
    /// Unknown resource names grant nothing.
    pub fn grants_read(&self, resource: &str) -> bool {
        match resource {
            RESOURCE_PACKING => self.read_packing,
            RESOURCE_DESPACHOS => self.read_despachos,
            _ => false,
        }
    }

    /// Whether write access to the named resource is declared.
    pub fn grants_write(&self, resource: &str) -> bool {
        match resource {
            RESOURCE_PACKING => self.write_packing,
            RESOURCE_DESPACHOS => self.write_despachos,
            _ => false,
        }
    }
}
