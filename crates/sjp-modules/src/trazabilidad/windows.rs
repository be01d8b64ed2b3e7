use sjp_core::ModuleWindow;

/// Main window for the Testeador profile.
pub struct TesteadorWindow {
    device_id: String,
}

impl TesteadorWindow {
    pub fn new(device_id: &str) -> Self {
        Self {
            device_id: device_id.to_string(),
        }
    }
}

impl ModuleWindow for TesteadorWindow {
    fn view_id(&self) -> &'static str {
        "trazabilidad.testeador"
    }

    fn title(&self) -> &str {
        "Testeo de trazabilidad"
    }

    fn device_id(&self) -> &str {
        &self.device_id
    }
}

/// Main window for the Registrador profile.
pub struct RegistradorWindow {
    device_id: String,
}

impl RegistradorWindow {
    pub fn new(device_id: &str) -> Self {
        Self {
            device_id: device_id.to_string(),
        }
    }
}

impl ModuleWindow for RegistradorWindow {
    fn view_id(&self) -> &'static str {
        "trazabilidad.registrador"
    }

    fn title(&self) -> &str {
        "Registro de trazabilidad"
    }

    fn device_id(&self) -> &str {
        &self.device_id
    }
}
