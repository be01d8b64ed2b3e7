/// Opaque handle to a module's main window.
///
/// The shell never looks inside a window; it only displays whatever the
/// module's factory returned. The real views live in the window layer,
/// outside this crate.
pub trait ModuleWindow: Send {
    /// Stable identifier of the concrete view, used by the shell for
    /// window bookkeeping.
    fn view_id(&self) -> &'static str;

    /// Title the shell shows in the window chrome.
    fn title(&self) -> &str;

    /// Device the window was created for (opaque, shell-defined).
    fn device_id(&self) -> &str;
}
