use comfy_table::{Cell, Color, Table};
use owo_colors::OwoColorize;
use sjp_core::module_trait::Module;
use sjp_core::window::ModuleWindow;
use sjp_core::{RESOURCE_DESPACHOS, RESOURCE_PACKING};

/// Print the module status table.
pub fn print_status_table(modules: &[Box<dyn Module>]) {
    println!();
    println!("  {}", "sjp-shell".bold());
    println!("  {}", "Module Status".dimmed());
    println!();

    let mut table = Table::new();
    table.set_header(vec![
        "Module",
        "Display Name",
        "Order",
        "Enabled",
        "Profiles",
        "Super User",
    ]);

    for module in modules {
        let info = module.info();
        let perms = module.permissions();

        let enabled_cell = if info.is_enabled {
            Cell::new("Yes").fg(Color::Green)
        } else {
            Cell::new("No").fg(Color::DarkGrey)
        };
        let profiles = if info.has_profiles() {
            info.available_profiles.join(", ")
        } else {
            "-".to_string()
        };
        let super_user_cell = if perms.requires_super_user {
            Cell::new("Yes").fg(Color::Red)
        } else {
            Cell::new("No").fg(Color::DarkGrey)
        };

        table.add_row(vec![
            Cell::new(&info.module_id),
            Cell::new(&info.display_name),
            Cell::new(info.display_order),
            enabled_cell,
            Cell::new(profiles),
            super_user_cell,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} modules registered", modules.len().to_string().bold());
    println!();
}

/// Print one module's descriptor and declared permissions.
pub fn print_module_info(module: &dyn Module) {
    let info = module.info();
    let perms = module.permissions();

    println!();
    println!("  {} {}", "▸".bold(), info.display_name.bold());
    println!("    {}", info.description.dimmed());
    println!();
    println!("    id:        {}", info.module_id);
    println!("    icon:      {}", info.icon);
    println!("    order:     {}", info.display_order);
    println!("    enabled:   {}", yes_no(info.is_enabled));
    if info.has_profiles() {
        println!("    profiles:  {}", info.available_profiles.join(", "));
    } else {
        println!("    profiles:  {}", "none".dimmed());
    }
    println!();

    let mut table = Table::new();
    table.set_header(vec!["Resource", "Read", "Write"]);
    for resource in [RESOURCE_PACKING, RESOURCE_DESPACHOS] {
        table.add_row(vec![
            Cell::new(resource),
            grant_cell(perms.grants_read(resource)),
            grant_cell(perms.grants_write(resource)),
        ]);
    }
    println!("{table}");
    println!();
    println!("    super user required: {}", yes_no(perms.requires_super_user));
    println!();
}

/// Print the window a launch produced.
pub fn print_window(window: &dyn ModuleWindow) {
    println!();
    println!(
        "  {} {} {}",
        "▸".bold(),
        window.title().bold(),
        format_args!("({})", window.view_id()).dimmed(),
    );
    println!("    device: {}", window.device_id());
    println!();
}

fn grant_cell(granted: bool) -> Cell {
    if granted {
        Cell::new("Yes").fg(Color::Green)
    } else {
        Cell::new("No").fg(Color::DarkGrey)
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
