//! Declarative style tokens for themed components.
//!
//! The tokens in this module are transient render-time configuration: each
//! component resolves them into a deterministic class list and data
//! attributes on every render, without validating or persisting anything.

use crate::class::Class;
use smallvec::SmallVec;
use std::fmt;

/// The size token controlling the density of a menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Size {
    /// Size `1`.
    One,
    /// Size `2`.
    #[default]
    Two,
    /// Size `3`.
    Three,
    /// Size `4`.
    Four,
}

impl Size {
    /// Returns the size as `u8`.
    #[inline]
    pub fn as_u8(&self) -> u8 {
        match self {
            Size::One => 1,
            Size::Two => 2,
            Size::Three => 3,
            Size::Four => 4,
        }
    }

    /// Returns the size as `str`.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::One => "1",
            Size::Two => "2",
            Size::Three => "3",
            Size::Four => "4",
        }
    }

    /// Returns the submenu alignment offset for this size.
    ///
    /// The horizontal inset of submenu content scales inversely with the
    /// size token of its parent content: `-4 × size` pixels.
    #[inline]
    pub fn align_offset(&self) -> i32 {
        -4 * i32::from(self.as_u8())
    }
}

impl From<u8> for Size {
    fn from(value: u8) -> Self {
        match value {
            0 | 1 => Size::One,
            2 => Size::Two,
            3 => Size::Three,
            _ => Size::Four,
        }
    }
}

impl fmt::Display for Size {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// A named breakpoint for responsive style values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// Phones in landscape.
    Xs,
    /// Tablets in portrait.
    Sm,
    /// Tablets in landscape.
    Md,
    /// Laptops.
    Lg,
    /// Desktops.
    Xl,
}

impl Breakpoint {
    /// Returns the breakpoint as `str`.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }
}

/// A style value that may vary per declared breakpoint.
///
/// Holds an initial value plus optional per-breakpoint overrides in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Responsive<T> {
    /// The value below the first declared breakpoint.
    initial: T,
    /// Per-breakpoint overrides.
    breakpoints: SmallVec<[(Breakpoint, T); 2]>,
}

impl<T: Copy> Responsive<T> {
    /// Creates a new instance with a single value for all breakpoints.
    pub fn new(initial: T) -> Self {
        Self {
            initial,
            breakpoints: SmallVec::new(),
        }
    }

    /// Declares an override for the given breakpoint.
    pub fn at(mut self, breakpoint: Breakpoint, value: T) -> Self {
        if let Some(entry) = self.breakpoints.iter_mut().find(|(bp, _)| *bp == breakpoint) {
            entry.1 = value;
        } else {
            self.breakpoints.push((breakpoint, value));
        }
        self
    }

    /// Returns the initial value.
    #[inline]
    pub fn initial(&self) -> T {
        self.initial
    }

    /// Returns `true` if no breakpoint overrides are declared.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.breakpoints.is_empty()
    }
}

impl<T: Copy + fmt::Display> Responsive<T> {
    /// Generates the class tokens for this value with the given prefix:
    /// `"{prefix}-{initial}"` followed by `"{bp}:{prefix}-{value}"` for each
    /// declared breakpoint.
    pub fn classes(&self, prefix: &str) -> Class {
        let mut class = Class::new(format!("{prefix}-{}", self.initial));
        for (breakpoint, value) in self.breakpoints.iter() {
            class.add(format!("{}:{prefix}-{value}", breakpoint.as_str()));
        }
        class
    }
}

impl<T: Copy + Default> Default for Responsive<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Copy> From<T> for Responsive<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl From<u8> for Responsive<Size> {
    #[inline]
    fn from(value: u8) -> Self {
        Self::new(value.into())
    }
}

/// The visual variant of menu content.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ContentVariant {
    /// The `solid` variant.
    #[default]
    Solid,
    /// The `soft` variant.
    Soft,
}

impl ContentVariant {
    /// Returns the variant as `str`.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentVariant::Solid => "solid",
            ContentVariant::Soft => "soft",
        }
    }
}

impl fmt::Display for ContentVariant {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// A named accent color ramp used for themed tinting.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AccentScale {
    /// The `tomato` scale.
    Tomato,
    /// The `red` scale.
    Red,
    /// The `crimson` scale.
    Crimson,
    /// The `pink` scale.
    Pink,
    /// The `plum` scale.
    Plum,
    /// The `purple` scale.
    Purple,
    /// The `violet` scale.
    Violet,
    /// The `indigo` scale.
    #[default]
    Indigo,
    /// The `blue` scale.
    Blue,
    /// The `sky` scale.
    Sky,
    /// The `cyan` scale.
    Cyan,
    /// The `teal` scale.
    Teal,
    /// The `mint` scale.
    Mint,
    /// The `green` scale.
    Green,
    /// The `grass` scale.
    Grass,
    /// The `lime` scale.
    Lime,
    /// The `yellow` scale.
    Yellow,
    /// The `amber` scale.
    Amber,
    /// The `orange` scale.
    Orange,
    /// The `brown` scale.
    Brown,
    /// The `gold` scale.
    Gold,
    /// The `bronze` scale.
    Bronze,
    /// The `gray` scale.
    Gray,
}

impl AccentScale {
    /// Returns the accent scale as `str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccentScale::Tomato => "tomato",
            AccentScale::Red => "red",
            AccentScale::Crimson => "crimson",
            AccentScale::Pink => "pink",
            AccentScale::Plum => "plum",
            AccentScale::Purple => "purple",
            AccentScale::Violet => "violet",
            AccentScale::Indigo => "indigo",
            AccentScale::Blue => "blue",
            AccentScale::Sky => "sky",
            AccentScale::Cyan => "cyan",
            AccentScale::Teal => "teal",
            AccentScale::Mint => "mint",
            AccentScale::Green => "green",
            AccentScale::Grass => "grass",
            AccentScale::Lime => "lime",
            AccentScale::Yellow => "yellow",
            AccentScale::Amber => "amber",
            AccentScale::Orange => "orange",
            AccentScale::Brown => "brown",
            AccentScale::Gold => "gold",
            AccentScale::Bronze => "bronze",
            AccentScale::Gray => "gray",
        }
    }
}

impl fmt::Display for AccentScale {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// Computes the deterministic class list for a themed menu element.
///
/// The output order is stable: the fixed role classes first, then the
/// responsive size classes, the variant class, the conditional high-contrast
/// class, and the caller-supplied override last. The override is never
/// dropped.
pub fn menu_classes(
    roles: &[&'static str],
    size: &Responsive<Size>,
    variant: ContentVariant,
    high_contrast: bool,
    custom: &Class,
) -> Class {
    let mut class = Class::default();
    for role in roles {
        class.add(*role);
    }
    class.append(size.classes("size"));
    class.add(format!("variant-{variant}"));
    if high_contrast {
        class.add("high-contrast");
    }
    class.append(custom.clone());
    class
}
