//! Active theme registry
//!
//! [`ThemeRegistry`] is a plain handle that callers own and pass around.
//! For hosts that want a single shared instance there is also a
//! process-wide registry, which must be installed before use and can be
//! torn down again:
//!
//! ```
//! use themekit::core::registry::{self, ThemeRegistry};
//!
//! registry::install(ThemeRegistry::new()).unwrap();
//! assert_eq!(registry::active_theme().unwrap().name(), "dark");
//! registry::teardown();
//! ```

use std::fmt;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use crate::core::theme::Theme;
use crate::core::themes::DarkTheme;
use crate::error::{Result, ThemeError};

/// A theme shared between the registry and its readers
pub type SharedTheme = Arc<dyn Theme>;

// Process-wide registry:
//   - None = not installed
//   - Some(registry) = installed
static GLOBAL_REGISTRY: Lazy<RwLock<Option<ThemeRegistry>>> = Lazy::new(|| RwLock::new(None));

/// Holds the currently active theme
///
/// Changing the active theme restyles nothing by itself; callers re-run
/// their styling afterwards.
#[derive(Clone)]
pub struct ThemeRegistry {
    active: SharedTheme,
}

impl ThemeRegistry {
    /// A registry with the dark theme active
    pub fn new() -> Self {
        Self::with_theme(Arc::new(DarkTheme::default()))
    }

    pub fn with_theme(theme: SharedTheme) -> Self {
        Self { active: theme }
    }

    /// The active theme
    pub fn active(&self) -> SharedTheme {
        Arc::clone(&self.active)
    }

    /// Activate `theme`, returning the previously active one
    pub fn set_active(&mut self, theme: SharedTheme) -> SharedTheme {
        tracing::info!(
            "Switching theme from '{}' to '{}'",
            self.active.name(),
            theme.name()
        );
        std::mem::replace(&mut self.active, theme)
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeRegistry")
            .field("active", &self.active.name())
            .finish()
    }
}

/// Install the process-wide registry
pub fn install(registry: ThemeRegistry) -> Result<()> {
    let mut global = GLOBAL_REGISTRY
        .write()
        .map_err(|_| ThemeError::Config("Theme registry lock poisoned".into()))?;

    if global.is_some() {
        return Err(ThemeError::RegistryAlreadyInstalled);
    }
    *global = Some(registry);
    Ok(())
}

/// Remove the process-wide registry, returning it if one was installed
pub fn teardown() -> Option<ThemeRegistry> {
    match GLOBAL_REGISTRY.write() {
        Ok(mut global) => global.take(),
        Err(poisoned) => poisoned.into_inner().take(),
    }
}

/// The active theme of the process-wide registry
pub fn active_theme() -> Result<SharedTheme> {
    let global = GLOBAL_REGISTRY
        .read()
        .map_err(|_| ThemeError::Config("Theme registry lock poisoned".into()))?;

    global
        .as_ref()
        .map(ThemeRegistry::active)
        .ok_or(ThemeError::RegistryNotInstalled)
}

/// Activate `theme` in the process-wide registry
pub fn set_active_theme(theme: SharedTheme) -> Result<SharedTheme> {
    let mut global = GLOBAL_REGISTRY
        .write()
        .map_err(|_| ThemeError::Config("Theme registry lock poisoned".into()))?;

    global
        .as_mut()
        .map(|registry| registry.set_active(theme))
        .ok_or(ThemeError::RegistryNotInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::themes::DefaultTheme;

    #[test]
    fn test_default_is_dark() {
        let registry = ThemeRegistry::default();
        assert_eq!(registry.active().name(), "dark");
    }

    #[test]
    fn test_set_active_round_trip() {
        let mut registry = ThemeRegistry::new();
        let light: SharedTheme = Arc::new(DefaultTheme::default());

        let previous = registry.set_active(Arc::clone(&light));
        assert_eq!(previous.name(), "dark");
        assert!(Arc::ptr_eq(&registry.active(), &light));
    }

    // The only test touching the process-wide registry.
    #[test]
    fn test_global_lifecycle() {
        assert!(teardown().is_none());
        assert!(matches!(active_theme(), Err(ThemeError::RegistryNotInstalled)));

        install(ThemeRegistry::new()).unwrap();
        assert!(matches!(
            install(ThemeRegistry::new()),
            Err(ThemeError::RegistryAlreadyInstalled)
        ));
        assert_eq!(active_theme().unwrap().name(), "dark");

        set_active_theme(Arc::new(DefaultTheme::default())).unwrap();
        assert_eq!(active_theme().unwrap().name(), "default");

        let removed = teardown().unwrap();
        assert_eq!(removed.active().name(), "default");
        assert!(matches!(
            set_active_theme(Arc::new(DefaultTheme::default())),
            Err(ThemeError::RegistryNotInstalled)
        ));
    }
}
