use crate::{
    class::Class,
    style::{menu_classes, AccentScale, ContentVariant, Responsive, Size},
    theme::{use_ambient_theme, ThemeMode, ThemeScope},
    SharedString,
};
use dioxus::prelude::*;

/// The class stack for top-level menu content.
const CONTENT_ROLES: [&str; 3] = ["popper-content", "base-menu-content", "dropdown-menu-content"];

/// The class stack for submenu content.
const SUB_CONTENT_ROLES: [&str; 5] = [
    "popper-content",
    "base-menu-content",
    "base-menu-sub-content",
    "dropdown-menu-content",
    "dropdown-menu-sub-content",
];

/// The root of a dropdown menu, anchoring the trigger and the content.
pub fn DropdownMenu(props: DropdownMenuProps) -> Element {
    rsx! {
        div {
            class: props.class,
            ..props.attributes,
            { props.children }
        }
    }
}

/// The [`DropdownMenu`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DropdownMenuProps {
    /// The class attribute for the component.
    #[props(into, default = "dropdown-menu")]
    pub class: Class,
    /// Spreading the props of the `div` element.
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
    /// The children to render within the component.
    children: Element,
}

/// The interactive element opening a dropdown menu.
///
/// The caller's content is rendered inside a single `button` element which
/// itself carries the menu wiring, so no extra wrapper sits between the
/// interactive element and its accessibility attributes.
pub fn DropdownMenuTrigger(props: DropdownMenuTriggerProps) -> Element {
    rsx! {
        button {
            class: props.class,
            aria_haspopup: "menu",
            ..props.attributes,
            { props.children }
        }
    }
}

/// The [`DropdownMenuTrigger`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DropdownMenuTriggerProps {
    /// The class attribute for the component.
    #[props(into, default = "dropdown-menu-trigger")]
    pub class: Class,
    /// Spreading the props of the `button` element.
    #[props(extends = GlobalAttributes, extends = button)]
    attributes: Vec<Attribute>,
    /// The children to render within the component.
    children: Element,
}

/// An out-of-tree render target for overlay content.
///
/// The wrapper only marks the subtree for the host's overlay layer: the
/// optional container becomes a `data-portal-container` attribute and
/// `force_mount` keeps the subtree in the output regardless of the menu
/// state tracked elsewhere.
pub fn MenuPortal(props: MenuPortalProps) -> Element {
    let container = props.container;
    rsx! {
        div {
            class: props.class,
            "data-portal-container": if !container.is_empty() { "{container}" },
            "data-force-mount": if props.force_mount { "true" },
            { props.children }
        }
    }
}

/// The [`MenuPortal`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct MenuPortalProps {
    /// The class attribute for the component.
    #[props(into, default = "menu-portal")]
    pub class: Class,
    /// The identifier of the container element hosting the overlay.
    #[props(into, default)]
    pub container: SharedString,
    /// A flag to keep the content mounted regardless of the menu state.
    #[props(default)]
    pub force_mount: bool,
    /// The children to render within the component.
    children: Element,
}

/// The style configuration published by [`DropdownMenuContent`] and consumed
/// by its descendants, so that submenu content and indicators inherit the
/// visual parameters without re-specifying them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MenuContentContext {
    /// The responsive size token.
    pub size: Responsive<Size>,
    /// The visual variant.
    pub variant: ContentVariant,
    /// The resolved accent scale.
    pub color: AccentScale,
    /// A flag to increase the foreground/background contrast.
    pub high_contrast: bool,
}

/// The overlay content of a dropdown menu.
///
/// An unset `color` resolves to the ambient theme accent before rendering;
/// the resolved style configuration is re-published for descendants on every
/// render.
pub fn DropdownMenuContent(props: DropdownMenuContentProps) -> Element {
    let theme = use_ambient_theme();
    let color = props.color.unwrap_or(theme.accent_scale);
    let mode = props.mode.resolve(theme.mode);
    let class = menu_classes(
        &CONTENT_ROLES,
        &props.size,
        props.variant,
        props.high_contrast,
        &props.class,
    );
    provide_context(MenuContentContext {
        size: props.size.clone(),
        variant: props.variant,
        color,
        high_contrast: props.high_contrast,
    });
    rsx! {
        MenuPortal {
            container: props.container.clone(),
            force_mount: props.force_mount,
            ThemeScope {
                mode: mode,
                accent_scale: color,
                div {
                    role: "menu",
                    class: class,
                    "data-accent-scale": "{color}",
                    "data-align": "{props.align}",
                    "data-side-offset": "{props.side_offset}",
                    ..props.attributes,
                    { props.children }
                }
            }
        }
    }
}

/// The [`DropdownMenuContent`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DropdownMenuContentProps {
    /// The class attribute for the component.
    #[props(into, default)]
    pub class: Class,
    /// The responsive size token of the content.
    #[props(into, default)]
    pub size: Responsive<Size>,
    /// The visual variant of the content.
    #[props(default)]
    pub variant: ContentVariant,
    /// The accent scale, defaulting to the ambient theme accent.
    #[props(into)]
    pub color: Option<AccentScale>,
    /// A flag to increase the foreground/background contrast.
    #[props(default)]
    pub high_contrast: bool,
    /// The theme mode override for this subtree.
    #[props(default)]
    pub mode: ThemeMode,
    /// The identifier of the container element hosting the overlay.
    #[props(into, default)]
    pub container: SharedString,
    /// A flag to keep the content mounted regardless of the menu state.
    #[props(default)]
    pub force_mount: bool,
    /// The alignment of the content against the trigger.
    #[props(into, default = "start")]
    pub align: SharedString,
    /// The distance between the content and the trigger in pixels.
    #[props(default = 4)]
    pub side_offset: i32,
    /// Spreading the props of the `div` element.
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
    /// The children to render within the component.
    children: Element,
}

/// The root of a nested submenu, anchoring its trigger and content.
pub fn DropdownMenuSub(props: DropdownMenuSubProps) -> Element {
    rsx! {
        div {
            class: props.class,
            ..props.attributes,
            { props.children }
        }
    }
}

/// The [`DropdownMenuSub`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DropdownMenuSubProps {
    /// The class attribute for the component.
    #[props(into, default = "dropdown-menu-sub")]
    pub class: Class,
    /// Spreading the props of the `div` element.
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
    /// The children to render within the component.
    children: Element,
}

/// The overlay content of a nested submenu.
///
/// Size, variant, color and contrast are read from the parent content
/// context rather than from props of its own, and the alignment offset
/// defaults to `-4 × size` so the submenu inset scales with the ambient
/// size token.
pub fn DropdownMenuSubContent(props: DropdownMenuSubContentProps) -> Element {
    let theme = use_ambient_theme();
    let context = try_consume_context::<MenuContentContext>().unwrap_or_default();
    let align_offset = props
        .align_offset
        .unwrap_or_else(|| context.size.initial().align_offset());
    let class = menu_classes(
        &SUB_CONTENT_ROLES,
        &context.size,
        context.variant,
        context.high_contrast,
        &props.class,
    );
    let color = context.color;
    rsx! {
        MenuPortal {
            container: props.container.clone(),
            force_mount: props.force_mount,
            ThemeScope {
                mode: theme.mode,
                accent_scale: color,
                div {
                    role: "menu",
                    class: class,
                    "data-accent-scale": "{color}",
                    "data-align-offset": "{align_offset}",
                    ..props.attributes,
                    { props.children }
                }
            }
        }
    }
}

/// The [`DropdownMenuSubContent`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DropdownMenuSubContentProps {
    /// The class attribute for the component.
    #[props(into, default)]
    pub class: Class,
    /// The horizontal inset against the submenu trigger, defaulting to
    /// `-4 × size` with the size drawn from the parent content context.
    #[props(into)]
    pub align_offset: Option<i32>,
    /// The identifier of the container element hosting the overlay.
    #[props(into, default)]
    pub container: SharedString,
    /// A flag to keep the content mounted regardless of the menu state.
    #[props(default)]
    pub force_mount: bool,
    /// Spreading the props of the `div` element.
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
    /// The children to render within the component.
    children: Element,
}
