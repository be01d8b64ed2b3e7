//! Concrete modules hosted by the SJP shell.

use sjp_core::module_trait::Module;

pub mod despacho;
pub mod trazabilidad;

/// All modules the shell can present, as boxed trait objects.
pub fn all_modules() -> Vec<Box<dyn Module>> {
    let mut modules: Vec<Box<dyn Module>> = vec![
        Box::new(despacho::DespachoModule::new()),
        Box::new(trazabilidad::TrazabilidadModule::new()),
    ];

    // Present modules in their declared menu order
    modules.sort_by_key(|m| m.info().display_order);
    modules
}

/// Look up a module by its stable identifier.
pub fn get_module(module_id: &str) -> Option<Box<dyn Module>> {
    all_modules()
        .into_iter()
        .find(|m| m.info().module_id == module_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_modules_in_display_order() {
        let modules = all_modules();
        let ids: Vec<&str> = modules.iter().map(|m| m.info().module_id.as_str()).collect();
        assert_eq!(ids, vec!["Despacho", "Trazabilidad"]);

        let orders: Vec<i32> = modules.iter().map(|m| m.info().display_order).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);
    }

    #[test]
    fn module_ids_are_unique() {
        let modules = all_modules();
        let mut ids: Vec<&str> = modules.iter().map(|m| m.info().module_id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), modules.len());
    }

    #[test]
    fn finds_modules_by_id() {
        assert!(get_module("Despacho").is_some());
        assert!(get_module("Trazabilidad").is_some());
        assert!(get_module("Bodega").is_none());
    }
}
