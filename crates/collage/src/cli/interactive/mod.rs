//! Interactive mode — guided prompts for a bare `collage` invocation.
//!
//! Asks for the same inputs as `collage create` and delegates to it.

pub mod create;
pub mod theme;

use collage_core::Config;
use console::Style;
use dialoguer::Select;

/// Convert a dialoguer result into `Ok(Some(value))` on success, `Ok(None)` on
/// interrupt (Ctrl+C / terminal disconnect), and `Err` for other I/O failures.
fn handle_interrupt<T>(result: dialoguer::Result<T>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

const MENU_ITEMS: &[&str] = &["Create a collage", "Show configuration", "Exit"];

/// Entry point for interactive mode.
pub fn run(config: &Config) -> anyhow::Result<()> {
    theme::print_banner();

    let theme = theme::collage_theme();

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(MENU_ITEMS)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(0) => create::guided_create(config)?,
            Some(1) => show_config(config),
            Some(2) | None => break,
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// Print a summary of the current settings.
fn show_config(config: &Config) {
    let cyan = Style::new().for_stderr().cyan();
    let label = Style::new().for_stderr().bold();
    let dim = Style::new().for_stderr().dim();

    let config_path = Config::default_path();
    let path_note = if config_path.exists() {
        "(exists)"
    } else {
        "(using defaults)"
    };

    eprintln!();
    eprintln!("  {}", cyan.apply_to("Current configuration:"));
    eprintln!();
    eprintln!(
        "    {:<16} {} {}",
        label.apply_to("Config file:"),
        config_path.display(),
        dim.apply_to(path_note)
    );
    eprintln!(
        "    {:<16} {}x{} (height advisory)",
        label.apply_to("Size:"),
        config.collage.width,
        config.collage.height
    );
    eprintln!(
        "    {:<16} padding {}px, corners {}px",
        label.apply_to("Tiles:"),
        config.collage.padding,
        config.collage.corner_radius
    );
    eprintln!(
        "    {:<16} {}",
        label.apply_to("Formats:"),
        config.discovery.supported_formats.join(", ")
    );
    eprintln!(
        "    {:<16} {} (quality {})",
        label.apply_to("Output:"),
        config.output_path().display(),
        config.output.jpeg_quality
    );
    eprintln!();
}
