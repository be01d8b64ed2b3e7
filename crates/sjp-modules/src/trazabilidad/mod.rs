mod windows;

use std::fmt;

use once_cell::sync::OnceCell;
use sjp_core::module_trait::Module;
use sjp_core::window::ModuleWindow;
use sjp_core::{ModuleError, ModuleInfo, ModulePermissions, ModuleResult};

pub use windows::{RegistradorWindow, TesteadorWindow};

const MODULE_ID: &str = "Trazabilidad";

/// Operator profile of the traceability module. Each profile selects a
/// different main window; keeping this an enum makes the window dispatch
/// exhaustive instead of a string comparison chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Testeador,
    Registrador,
}

impl Profile {
    /// Declared profiles, in presentation order.
    pub const ALL: [Profile; 2] = [Profile::Testeador, Profile::Registrador];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Testeador => "Testeador",
            Self::Registrador => "Registrador",
        }
    }

    /// Look up a profile by its declared name.
    pub fn from_name(name: &str) -> Option<Profile> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Traceability module. Two operator profiles, each with its own main
/// window; the profile can be switched at runtime without rebuilding
/// the module.
#[derive(Debug)]
pub struct TrazabilidadModule {
    selected_profile: Profile,
    info: OnceCell<ModuleInfo>,
    permissions: OnceCell<ModulePermissions>,
}

impl TrazabilidadModule {
    /// Create the module with the default Registrador profile.
    pub fn new() -> Self {
        Self::with_initial_profile(Profile::Registrador)
    }

    /// Create the module with an explicit initial profile.
    pub fn with_initial_profile(profile: Profile) -> Self {
        Self {
            selected_profile: profile,
            info: OnceCell::new(),
            permissions: OnceCell::new(),
        }
    }

    /// Create the module from a profile name, as the shell passes it.
    pub fn with_profile(name: &str) -> ModuleResult<Self> {
        let profile = Profile::from_name(name).ok_or_else(|| ModuleError::UnknownProfile {
            module_id: MODULE_ID.to_string(),
            profile: name.to_string(),
        })?;
        Ok(Self::with_initial_profile(profile))
    }

    /// The currently selected profile.
    pub fn selected_profile(&self) -> Profile {
        self.selected_profile
    }

    /// Switch to another declared profile.
    ///
    /// Subsequent `create_main_window` calls reflect the new profile;
    /// recreating the window is the shell's job. On an unknown name the
    /// selected profile is left unchanged.
    pub fn switch_profile(&mut self, name: &str) -> ModuleResult<()> {
        let profile = Profile::from_name(name).ok_or_else(|| ModuleError::UnknownProfile {
            module_id: MODULE_ID.to_string(),
            profile: name.to_string(),
        })?;
        self.selected_profile = profile;
        Ok(())
    }
}

impl Default for TrazabilidadModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for TrazabilidadModule {
    fn info(&self) -> &ModuleInfo {
        self.info.get_or_init(|| ModuleInfo {
            module_id: MODULE_ID.to_string(),
            display_name: "Trazabilidad".to_string(),
            description: "Testeo y registro de trazabilidad de cajas".to_string(),
            icon: "resources/trazabilidad.png".to_string(),
            display_order: 2,
            is_enabled: true,
            available_profiles: Profile::ALL.iter().map(|p| p.as_str().to_string()).collect(),
        })
    }

    fn permissions(&self) -> &ModulePermissions {
        self.permissions.get_or_init(|| ModulePermissions {
            read_packing: true,
            write_packing: true,
            read_despachos: true,
            write_despachos: true,
            requires_super_user: true,
        })
    }

    fn create_main_window(&self, device_id: &str) -> ModuleResult<Box<dyn ModuleWindow>> {
        let window: Box<dyn ModuleWindow> = match self.selected_profile {
            Profile::Testeador => Box::new(TesteadorWindow::new(device_id)),
            Profile::Registrador => Box::new(RegistradorWindow::new(device_id)),
        };
        Ok(window)
    }
}
