use thiserror::Error;

/// Errors raised by module operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleError {
    /// The requested profile is not in the module's declared profile list.
    #[error("unknown profile '{profile}' for module '{module_id}'")]
    UnknownProfile { module_id: String, profile: String },
}

/// Result type for module operations.
pub type ModuleResult<T> = Result<T, ModuleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_profile_names_the_offender() {
        let err = ModuleError::UnknownProfile {
            module_id: "Trazabilidad".to_string(),
            profile: "Bogus".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Bogus"));
        assert!(msg.contains("Trazabilidad"));
    }
}
