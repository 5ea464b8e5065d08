//! UI theme context for components.
//!
//! The ambient theme is a read-only configuration value threaded down the
//! render tree: [`ThemeProvider`] establishes it once near the root and
//! [`ThemeScope`] narrows it for a single overlay subtree. Components with an
//! optional accent color prop default to the ambient value when the prop is
//! absent.

use crate::{class::Class, style::AccentScale};
use dioxus::prelude::*;
use std::fmt;

/// The mode of a theme, controlling the light or dark rendition of the
/// accent scales.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    /// Follows the nearest ancestor theme.
    #[default]
    Inherit,
    /// The `light` mode.
    Light,
    /// The `dark` mode.
    Dark,
}

impl ThemeMode {
    /// Returns `true` if the mode follows the ancestor theme.
    #[inline]
    pub fn is_inherit(&self) -> bool {
        self == &ThemeMode::Inherit
    }

    /// Returns the mode as `str`.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Inherit => "inherit",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Resolves `self` against an ancestor mode.
    #[inline]
    pub fn resolve(self, ancestor: ThemeMode) -> ThemeMode {
        if self.is_inherit() { ancestor } else { self }
    }
}

impl fmt::Display for ThemeMode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// The ambient theme configuration carried through context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeConfig {
    /// The theme mode.
    pub mode: ThemeMode,
    /// The ambient accent scale.
    pub accent_scale: AccentScale,
}

impl Default for ThemeConfig {
    #[inline]
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            accent_scale: AccentScale::default(),
        }
    }
}

/// Returns the nearest ambient [`ThemeConfig`], falling back to the default
/// configuration when no provider is mounted above the calling component.
pub fn use_ambient_theme() -> ThemeConfig {
    try_consume_context::<ThemeConfig>().unwrap_or_else(|| {
        tracing::debug!("no ambient theme provider found, using the default theme");
        ThemeConfig::default()
    })
}

/// Establishes the ambient theme for a render subtree.
pub fn ThemeProvider(props: ThemeProviderProps) -> Element {
    let mode = props.mode.resolve(ThemeMode::Light);
    let config = ThemeConfig {
        mode,
        accent_scale: props.accent_scale,
    };
    provide_context(config);
    rsx! {
        div {
            class: props.class,
            "data-theme-mode": "{mode}",
            "data-accent-scale": "{props.accent_scale}",
            ..props.attributes,
            { props.children }
        }
    }
}

/// The [`ThemeProvider`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct ThemeProviderProps {
    /// The class attribute for the component.
    #[props(into, default = "theme-root")]
    pub class: Class,
    /// The theme mode for the subtree.
    #[props(default)]
    pub mode: ThemeMode,
    /// The ambient accent scale for the subtree.
    #[props(default)]
    pub accent_scale: AccentScale,
    /// Spreading the props of the `div` element.
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
    /// The children to render within the component.
    children: Element,
}

/// Narrows the ambient theme for a single overlay subtree.
///
/// Unlike [`ThemeProvider`], the values are already resolved by the caller;
/// this component only re-publishes them and marks the wrapper element so
/// the stylesheet can re-anchor the theme.
pub fn ThemeScope(props: ThemeScopeProps) -> Element {
    let config = ThemeConfig {
        mode: props.mode,
        accent_scale: props.accent_scale,
    };
    provide_context(config);
    rsx! {
        div {
            class: props.class,
            "data-theme-mode": "{props.mode}",
            "data-accent-scale": "{props.accent_scale}",
            { props.children }
        }
    }
}

/// The [`ThemeScope`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct ThemeScopeProps {
    /// The class attribute for the component.
    #[props(into, default = "theme-scope")]
    pub class: Class,
    /// The resolved theme mode for the subtree.
    pub mode: ThemeMode,
    /// The resolved accent scale for the subtree.
    pub accent_scale: AccentScale,
    /// The children to render within the component.
    children: Element,
}
