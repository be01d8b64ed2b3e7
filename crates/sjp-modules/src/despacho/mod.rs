mod window;

use once_cell::sync::OnceCell;
use sjp_core::module_trait::Module;
use sjp_core::window::ModuleWindow;
use sjp_core::{ModuleInfo, ModulePermissions, ModuleResult};

pub use window::DespachoWindow;

/// Pallet dispatch module. Single fixed window, no profiles.
#[derive(Default)]
pub struct DespachoModule {
    info: OnceCell<ModuleInfo>,
    permissions: OnceCell<ModulePermissions>,
}

impl DespachoModule {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Module for DespachoModule {
    fn info(&self) -> &ModuleInfo {
        self.info.get_or_init(|| ModuleInfo {
            module_id: "Despacho".to_string(),
            display_name: "Despacho de pallets".to_string(),
            description: "Registro y despacho de pallets terminados".to_string(),
            icon: "resources/despacho.png".to_string(),
            display_order: 1,
            is_enabled: true,
            available_profiles: vec![],
        })
    }

    fn permissions(&self) -> &ModulePermissions {
        self.permissions.get_or_init(|| ModulePermissions {
            read_packing: true,
            write_packing: false,
            read_despachos: true,
            write_despachos: true,
            requires_super_user: false,
        })
    }

    fn create_main_window(&self, device_id: &str) -> ModuleResult<Box<dyn ModuleWindow>> {
        Ok(Box::new(DespachoWindow::new(device_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_no_profiles() {
        let module = DespachoModule::new();
        assert_eq!(module.info().module_id, "Despacho");
        assert!(module.info().available_profiles.is_empty());
        assert!(!module.info().has_profiles());
        assert!(module.info().is_enabled);
    }

    #[test]
    fn declares_read_only_packing_and_full_despachos() {
        let module = DespachoModule::new();
        let perms = module.permissions();
        assert!(perms.read_packing);
        assert!(!perms.write_packing);
        assert!(perms.read_despachos);
        assert!(perms.write_despachos);
        assert!(!perms.requires_super_user);
    }

    #[test]
    fn descriptor_is_memoized() {
        let module = DespachoModule::new();
        let first = module.info() as *const ModuleInfo;
        let second = module.info() as *const ModuleInfo;
        assert!(std::ptr::eq(first, second));

        let p1 = module.permissions() as *const ModulePermissions;
        let p2 = module.permissions() as *const ModulePermissions;
        assert!(std::ptr::eq(p1, p2));
    }

    #[test]
    fn always_builds_the_dispatch_window() {
        let module = DespachoModule::new();
        for device in ["PLANTA-01", "", "???"] {
            let window = module.create_main_window(device).expect("create window");
            assert_eq!(window.view_id(), "despacho.main");
            assert_eq!(window.device_id(), device);
        }
    }

    #[test]
    fn lifecycle_hooks_are_callable() {
        let mut module = DespachoModule::new();
        module.initialize();
        let window = module.create_main_window("dev").expect("create window");
        assert_eq!(window.title(), "Despacho de pallets");
        module.cleanup();
    }
}
