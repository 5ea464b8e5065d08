use crate::{
    class::Class,
    icon::{CheckmarkGlyph, ChevronRightGlyph, DotGlyph},
    style::AccentScale,
    SharedString,
};
use dioxus::prelude::*;

const LABEL_ROLES: [&str; 2] = ["base-menu-label", "dropdown-menu-label"];
const ITEM_ROLES: [&str; 2] = ["base-menu-item", "dropdown-menu-item"];
const GROUP_ROLES: [&str; 2] = ["base-menu-group", "dropdown-menu-group"];
const RADIO_GROUP_ROLES: [&str; 2] = ["base-menu-radio-group", "dropdown-menu-radio-group"];
const RADIO_ITEM_ROLES: [&str; 4] = [
    "base-menu-item",
    "base-menu-radio-item",
    "dropdown-menu-item",
    "dropdown-menu-radio-item",
];
const CHECKBOX_ITEM_ROLES: [&str; 4] = [
    "base-menu-item",
    "base-menu-checkbox-item",
    "dropdown-menu-item",
    "dropdown-menu-checkbox-item",
];
const SUB_TRIGGER_ROLES: [&str; 4] = [
    "base-menu-item",
    "base-menu-sub-trigger",
    "dropdown-menu-item",
    "dropdown-menu-sub-trigger",
];
const SEPARATOR_ROLES: [&str; 2] = ["base-menu-separator", "dropdown-menu-separator"];
const SHORTCUT_ROLES: [&str; 2] = ["base-menu-shortcut", "dropdown-menu-shortcut"];
const INDICATOR_ROLES: [&str; 2] = ["base-menu-item-indicator", "dropdown-menu-item-indicator"];

/// Merges a fixed role class stack with the caller-supplied override.
fn role_classes(roles: &[&'static str], custom: &Class) -> Class {
    let mut class = Class::default();
    for role in roles {
        class.add(*role);
    }
    class.append(custom.clone());
    class
}

/// A non-interactive caption for a group of menu items.
pub fn DropdownMenuLabel(props: DropdownMenuLabelProps) -> Element {
    rsx! {
        div {
            class: role_classes(&LABEL_ROLES, &props.class),
            ..props.attributes,
            { props.children }
        }
    }
}

/// The [`DropdownMenuLabel`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DropdownMenuLabelProps {
    /// The class attribute for the component.
    #[props(into, default)]
    pub class: Class,
    /// Spreading the props of the `div` element.
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
    /// The children to render within the component.
    children: Element,
}

/// A single command in a dropdown menu.
pub fn DropdownMenuItem(props: DropdownMenuItemProps) -> Element {
    let class = role_classes(&ITEM_ROLES, &props.class);
    let accent = props.color.map(|color| color.as_str()).unwrap_or_default();
    let shortcut = props.shortcut;
    rsx! {
        div {
            role: "menuitem",
            class: class,
            "data-accent-scale": if !accent.is_empty() { "{accent}" },
            onclick: move |event| {
                if let Some(handler) = props.on_select.as_ref() {
                    handler.call(event);
                }
            },
            ..props.attributes,
            { props.children }
            if !shortcut.is_empty() {
                div {
                    class: Class::from(SHORTCUT_ROLES),
                    "{shortcut}"
                }
            }
        }
    }
}

/// The [`DropdownMenuItem`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DropdownMenuItemProps {
    /// The class attribute for the component.
    #[props(into, default)]
    pub class: Class,
    /// The accent scale for this item only.
    #[props(into)]
    pub color: Option<AccentScale>,
    /// The keyboard shortcut decoration rendered after the item content.
    #[props(into, default)]
    pub shortcut: SharedString,
    /// An event handler to be called when the item is activated.
    pub on_select: Option<EventHandler<MouseEvent>>,
    /// Spreading the props of the `div` element.
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
    /// The children to render within the component.
    children: Element,
}

/// A related set of menu items.
pub fn DropdownMenuGroup(props: DropdownMenuGroupProps) -> Element {
    rsx! {
        div {
            role: "group",
            class: role_classes(&GROUP_ROLES, &props.class),
            ..props.attributes,
            { props.children }
        }
    }
}

/// The [`DropdownMenuGroup`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DropdownMenuGroupProps {
    /// The class attribute for the component.
    #[props(into, default)]
    pub class: Class,
    /// Spreading the props of the `div` element.
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
    /// The children to render within the component.
    children: Element,
}

/// The selection published by [`DropdownMenuRadioGroup`] for its items.
#[derive(Clone, Default, PartialEq)]
pub struct MenuRadioGroupContext {
    /// The value of the selected radio item.
    pub value: SharedString,
    /// The handler called with the value of an activated item.
    pub on_value_change: Option<EventHandler<String>>,
}

/// A set of mutually exclusive radio items.
pub fn DropdownMenuRadioGroup(props: DropdownMenuRadioGroupProps) -> Element {
    provide_context(MenuRadioGroupContext {
        value: props.value.clone(),
        on_value_change: props.on_value_change,
    });
    rsx! {
        div {
            role: "group",
            class: role_classes(&RADIO_GROUP_ROLES, &props.class),
            ..props.attributes,
            { props.children }
        }
    }
}

/// The [`DropdownMenuRadioGroup`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DropdownMenuRadioGroupProps {
    /// The class attribute for the component.
    #[props(into, default)]
    pub class: Class,
    /// The value of the selected radio item.
    #[props(into, default)]
    pub value: SharedString,
    /// An event handler to be called with the value of an activated item.
    pub on_value_change: Option<EventHandler<String>>,
    /// Spreading the props of the `div` element.
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
    /// The children to render within the component.
    children: Element,
}

/// A menu item selecting one value out of its radio group.
///
/// The built-in dot indicator is always mounted; the stylesheet reveals it
/// based on the `data-state` attribute derived from the group selection.
pub fn DropdownMenuRadioItem(props: DropdownMenuRadioItemProps) -> Element {
    let group = try_consume_context::<MenuRadioGroupContext>().unwrap_or_default();
    let checked = !props.value.is_empty() && group.value == props.value;
    let state = if checked { "checked" } else { "unchecked" };
    let class = role_classes(&RADIO_ITEM_ROLES, &props.class);
    let value = props.value.clone();
    rsx! {
        div {
            role: "menuitemradio",
            class: class,
            aria_checked: "{checked}",
            "data-state": state,
            onclick: move |_| {
                if let Some(handler) = group.on_value_change.as_ref() {
                    handler.call(value.to_string());
                }
            },
            ..props.attributes,
            { props.children }
            span {
                class: Class::from(INDICATOR_ROLES),
                "data-state": state,
                DotGlyph {}
            }
        }
    }
}

/// The [`DropdownMenuRadioItem`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DropdownMenuRadioItemProps {
    /// The class attribute for the component.
    #[props(into, default)]
    pub class: Class,
    /// The value reported when this item is activated.
    #[props(into)]
    pub value: SharedString,
    /// Spreading the props of the `div` element.
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
    /// The children to render within the component.
    children: Element,
}

/// A menu item toggling an independent checked state.
///
/// The built-in check indicator is always mounted; the stylesheet reveals it
/// based on the `data-state` attribute derived from the `checked` prop.
pub fn DropdownMenuCheckboxItem(props: DropdownMenuCheckboxItemProps) -> Element {
    let checked = props.checked;
    let state = if checked { "checked" } else { "unchecked" };
    let class = role_classes(&CHECKBOX_ITEM_ROLES, &props.class);
    let shortcut = props.shortcut;
    rsx! {
        div {
            role: "menuitemcheckbox",
            class: class,
            aria_checked: "{checked}",
            "data-state": state,
            onclick: move |_| {
                if let Some(handler) = props.on_checked_change.as_ref() {
                    handler.call(!checked);
                }
            },
            ..props.attributes,
            { props.children }
            span {
                class: Class::from(INDICATOR_ROLES),
                "data-state": state,
                CheckmarkGlyph {}
            }
            if !shortcut.is_empty() {
                div {
                    class: Class::from(SHORTCUT_ROLES),
                    "{shortcut}"
                }
            }
        }
    }
}

/// The [`DropdownMenuCheckboxItem`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DropdownMenuCheckboxItemProps {
    /// The class attribute for the component.
    #[props(into, default)]
    pub class: Class,
    /// A flag to indicate whether the item is checked.
    #[props(default)]
    pub checked: bool,
    /// The keyboard shortcut decoration rendered after the item content.
    #[props(into, default)]
    pub shortcut: SharedString,
    /// An event handler to be called with the toggled state when the item
    /// is activated.
    pub on_checked_change: Option<EventHandler<bool>>,
    /// Spreading the props of the `div` element.
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
    /// The children to render within the component.
    children: Element,
}

/// A menu item opening a nested submenu, with a trailing directional glyph.
pub fn DropdownMenuSubTrigger(props: DropdownMenuSubTriggerProps) -> Element {
    rsx! {
        div {
            role: "menuitem",
            aria_haspopup: "menu",
            class: role_classes(&SUB_TRIGGER_ROLES, &props.class),
            ..props.attributes,
            { props.children }
            div {
                class: Class::from(SHORTCUT_ROLES),
                ChevronRightGlyph {}
            }
        }
    }
}

/// The [`DropdownMenuSubTrigger`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DropdownMenuSubTriggerProps {
    /// The class attribute for the component.
    #[props(into, default)]
    pub class: Class,
    /// Spreading the props of the `div` element.
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
    /// The children to render within the component.
    children: Element,
}

/// A visual separation between groups of menu items.
pub fn DropdownMenuSeparator(props: DropdownMenuSeparatorProps) -> Element {
    rsx! {
        div {
            role: "separator",
            aria_orientation: "horizontal",
            class: role_classes(&SEPARATOR_ROLES, &props.class),
            ..props.attributes,
        }
    }
}

/// The [`DropdownMenuSeparator`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DropdownMenuSeparatorProps {
    /// The class attribute for the component.
    #[props(into, default)]
    pub class: Class,
    /// Spreading the props of the `div` element.
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
}
