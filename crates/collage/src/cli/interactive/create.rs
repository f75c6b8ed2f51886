//! Guided collage flow: width → height → folder → confirm → build.

use collage_core::pipeline::FileDiscovery;
use collage_core::Config;
use console::Style;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;

use crate::cli::create::CreateArgs;

use super::theme::collage_theme;

/// Walk the user through one collage.
pub fn guided_create(config: &Config) -> anyhow::Result<()> {
    let theme = collage_theme();
    let warn = Style::new().for_stderr().yellow();

    // Non-numeric input is rejected by the parser and re-prompted.
    let Some(width) = super::handle_interrupt(
        Input::<u32>::with_theme(&theme)
            .with_prompt("Collage width")
            .default(config.collage.width)
            .validate_with(|w: &u32| if *w > 0 { Ok(()) } else { Err("must be > 0") })
            .interact_text(),
    )?
    else {
        return Ok(());
    };

    let Some(height) = super::handle_interrupt(
        Input::<u32>::with_theme(&theme)
            .with_prompt("Collage height")
            .default(config.collage.height)
            .validate_with(|h: &u32| if *h > 0 { Ok(()) } else { Err("must be > 0") })
            .interact_text(),
    )?
    else {
        return Ok(());
    };

    // Re-prompts on both "not a folder" and "no images found".
    let (input, count) = loop {
        let Some(raw_path) = super::handle_interrupt(
            Input::<String>::with_theme(&theme)
                .with_prompt("Folder with images")
                .interact_text(),
        )?
        else {
            return Ok(());
        };

        let path = PathBuf::from(shellexpand::tilde(&raw_path).into_owned());

        let discovery = FileDiscovery::new(config.discovery.clone());
        match discovery.discover(&path) {
            Ok(files) if files.is_empty() => {
                eprintln!(
                    "  {}",
                    warn.apply_to("No images found in the selected folder.")
                );
            }
            Ok(files) => break (path, files.len()),
            Err(_) => {
                eprintln!(
                    "  {}",
                    warn.apply_to(format!("Please select a valid folder: {}", path.display()))
                );
            }
        }
    };

    let dim = Style::new().for_stderr().dim();
    eprintln!(
        "  {}",
        dim.apply_to(format!(
            "{count} image(s) → {} ({width}px wide)",
            config.output_path().display()
        ))
    );

    let confirm = Confirm::with_theme(&theme)
        .with_prompt("Create collage?")
        .default(true)
        .interact_opt()?;
    if !matches!(confirm, Some(true)) {
        return Ok(());
    }

    let args = CreateArgs {
        input,
        width: Some(width),
        height: Some(height),
        ..CreateArgs::default()
    };

    if let Err(e) = crate::cli::create::execute(args, config.clone()) {
        let err = Style::new().for_stderr().red();
        eprintln!("  {} An error occurred: {e:#}", err.apply_to("✗"));
    }
    eprintln!();

    Ok(())
}
