use crate::error::ModuleResult;
use crate::models::{ModuleInfo, ModulePermissions};
use crate::window::ModuleWindow;

/// Trait that every shell module must implement.
///
/// Lifecycle, driven by the shell on a single thread:
/// construction → `initialize()` once → any number of
/// `create_main_window()` calls (one per activation or profile switch)
/// → `cleanup()` on teardown.
pub trait Module: Send + Sync {
    /// Identity and presentation descriptor.
    ///
    /// Built on first access and memoized; every subsequent call returns
    /// the same descriptor.
    fn info(&self) -> &ModuleInfo;

    /// Declared capability set.
    ///
    /// Same memoization contract as [`Module::info`]. Enforcement is the
    /// shell's responsibility; the module only declares.
    fn permissions(&self) -> &ModulePermissions;

    /// Build the main window for the module's current state.
    ///
    /// `device_id` is an opaque shell-owned string; modules may ignore
    /// it. Must be callable any number of times over the module's life
    /// and must not mutate module state.
    fn create_main_window(&self, device_id: &str) -> ModuleResult<Box<dyn ModuleWindow>>;

    /// One-time setup hook, called before first use.
    fn initialize(&mut self) {
        log::debug!("initializing module {}", self.info().module_id);
    }

    /// Teardown hook, called on deactivation or shell shutdown.
    fn cleanup(&mut self) {
        log::debug!("cleaning up module {}", self.info().module_id);
    }
}
