use sjp_core::ModuleWindow;

/// The single dispatch window. Stands in for the data-entry view the
/// window layer provides; the shell only ever sees it through the
/// [`ModuleWindow`] trait.
pub struct DespachoWindow {
    device_id: String,
}

impl DespachoWindow {
    pub fn new(device_id: &str) -> Self {
        Self {
            device_id: device_id.to_string(),
        }
    }
}

impl ModuleWindow for DespachoWindow {
    fn view_id(&self) -> &'static str {
        "despacho.main"
    }

    fn title(&self) -> &str {
        "Despacho de pallets"
    }

    fn device_id(&self) -> &str {
        &self.device_id
    }
}
