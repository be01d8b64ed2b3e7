//! Module contract for the SJP plant desktop shell.
//!
//! The shell hosts pluggable modules, one per business workflow. This
//! crate defines what a module *is*: its descriptor ([`ModuleInfo`]),
//! its declared capability set ([`ModulePermissions`]), the lifecycle
//! trait every module implements ([`Module`]), and the opaque window
//! handle its factory returns ([`ModuleWindow`]). The concrete modules
//! live in `sjp-modules`; the shell/host lives in `sjp-cli`.
//!
//! The crate never enforces permissions and never inspects windows —
//! both are the host's concern.

pub mod config;
pub mod error;
pub mod models;
pub mod module_trait;
pub mod window;

pub use error::{ModuleError, ModuleResult};
pub use models::{ModuleInfo, ModulePermissions, RESOURCE_DESPACHOS, RESOURCE_PACKING};
pub use module_trait::Module;
pub use window::ModuleWindow;
