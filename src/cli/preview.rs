//! Demo screen command handlers

use crate::core::config::Config;
use crate::core::registry::ThemeRegistry;
use crate::demo::render::render_screen;
use crate::demo::DemoScreen;
use crate::error::Result;

/// Handle `themekit preview`
pub fn handle_preview(config: &Config, theme: Option<&str>, styled: bool) -> Result<()> {
    let catalog = super::load_catalog(config)?;
    let selected = theme.map(|name| catalog.require(name)).transpose()?;

    let mut screen = DemoScreen::new(catalog, ThemeRegistry::new());
    if let Some(selected) = selected {
        screen.activate(selected);
    }

    print!("{}", render_screen(&screen, styled));
    Ok(())
}

/// Handle `themekit cycle`
pub fn handle_cycle(config: &Config, steps: Option<usize>, styled: bool) -> Result<()> {
    let catalog = super::load_catalog(config)?;
    let mut screen = DemoScreen::new(catalog, ThemeRegistry::new());
    let steps = steps.unwrap_or(screen.catalog().len());

    print!("{}", render_screen(&screen, styled));

    for _ in 0..steps {
        screen.step_forward();
        println!();
        print!("{}", render_screen(&screen, styled));
    }
    Ok(())
}
