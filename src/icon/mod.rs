//! SVG glyph shells for decorative menu content.

use crate::class::Class;
use dioxus::prelude::*;
use dioxus_free_icons::icons::bs_icons::{BsCheck2, BsChevronRight, BsDot};
use dioxus_free_icons::IconShape;

/// A container for an SVG glyph.
pub fn MenuGlyph<T: IconShape + Clone + PartialEq + 'static>(props: MenuGlyphProps<T>) -> Element {
    let width = props.width;
    let height = props.height.unwrap_or(width);
    rsx! {
        span {
            class: props.class,
            dioxus_free_icons::Icon {
                icon: props.shape,
                width: width,
                height: height,
            }
        }
    }
}

/// The [`MenuGlyph`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct MenuGlyphProps<T: IconShape + Clone + PartialEq + 'static> {
    /// The class attribute for the component.
    #[props(into, default = "glyph")]
    pub class: Class,
    /// The icon shape to use.
    pub shape: T,
    /// The width of the `<svg>` element. Defaults to 16.
    #[props(default = 16)]
    pub width: u32,
    /// The height of the `<svg>` element.
    #[props(into)]
    pub height: Option<u32>,
}

/// The check mark glyph shown by a selected checkbox item.
pub fn CheckmarkGlyph() -> Element {
    rsx! {
        MenuGlyph { shape: BsCheck2 }
    }
}

/// The filled dot glyph shown by a selected radio item.
pub fn DotGlyph() -> Element {
    rsx! {
        MenuGlyph { shape: BsDot }
    }
}

/// The directional glyph shown by a submenu trigger.
pub fn ChevronRightGlyph() -> Element {
    rsx! {
        MenuGlyph { shape: BsChevronRight, width: 12 }
    }
}
