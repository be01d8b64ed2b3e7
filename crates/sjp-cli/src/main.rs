use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use sjp_core::module_trait::Module;
use sjp_modules::despacho::DespachoModule;
use sjp_modules::trazabilidad::TrazabilidadModule;

mod output;

#[derive(Parser)]
#[command(name = "sjp", about = "sjp-shell — console host for the SJP plant modules")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all registered modules
    Status,

    /// Show a module's descriptor and declared permissions
    Info {
        /// Module identifier
        module: String,
    },

    /// Activate a module and report the window it would display
    Launch {
        /// Module identifier
        module: String,

        /// Device identifier to pass to the window factory
        #[arg(short, long)]
        device: Option<String>,

        /// Initial profile (for profile-capable modules)
        #[arg(short, long)]
        profile: Option<String>,

        /// Run as an elevated operator
        #[arg(long)]
        super_user: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Status) => cmd_status(),
        Some(Commands::Info { module }) => cmd_info(&module),
        Some(Commands::Launch {
            module,
            device,
            profile,
            super_user,
        }) => cmd_launch(&module, device.as_deref(), profile.as_deref(), super_user),
        None => cmd_status(),
    }
}

fn cmd_status() -> Result<()> {
    let modules = sjp_modules::all_modules();
    output::print_status_table(&modules);
    Ok(())
}

fn cmd_info(module_id: &str) -> Result<()> {
    match sjp_modules::get_module(module_id) {
        Some(module) => {
            output::print_module_info(module.as_ref());
            Ok(())
        }
        None => {
            eprintln!("Module not found: {module_id}");
            eprintln!("Run 'sjp status' to see available modules.");
            std::process::exit(1);
        }
    }
}

fn cmd_launch(
    module_id: &str,
    device: Option<&str>,
    profile: Option<&str>,
    super_user_flag: bool,
) -> Result<()> {
    let config = sjp_core::config::load_config();
    let device = device
        .map(str::to_string)
        .or(config.device_id)
        .unwrap_or_else(|| "CONSOLE".to_string());
    let super_user = super_user_flag || config.super_user;

    let mut module = build_module(module_id, profile)?;

    // Host-side gating: the module only declares, the shell enforces.
    let info = module.info();
    if !info.is_enabled {
        bail!("module '{}' is disabled", info.module_id);
    }
    if module.permissions().requires_super_user && !super_user {
        bail!(
            "module '{}' requires an elevated operator (pass --super-user)",
            module_id
        );
    }

    log::info!("launching module {module_id} for device {device}");

    module.initialize();
    let window = module.create_main_window(&device)?;
    output::print_window(window.as_ref());
    module.cleanup();

    Ok(())
}

/// Construct a module instance, applying the initial profile when the
/// module supports one.
fn build_module(module_id: &str, profile: Option<&str>) -> Result<Box<dyn Module>> {
    match module_id {
        "Despacho" => {
            if let Some(name) = profile {
                bail!("module 'Despacho' has no profiles (got '{name}')");
            }
            Ok(Box::new(DespachoModule::new()))
        }
        "Trazabilidad" => match profile {
            Some(name) => Ok(Box::new(TrazabilidadModule::with_profile(name)?)),
            None => Ok(Box::new(TrazabilidadModule::new())),
        },
        other => bail!("Module not found: {other}. Run 'sjp status' to see available modules."),
    }
}
