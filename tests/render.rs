use dioxus::prelude::*;
use dioxus_dropdown_menu::prelude::*;

/// Renders a component tree to its HTML string.
fn render(app: fn() -> Element) -> String {
    let mut vdom = VirtualDom::new(app);
    vdom.rebuild_in_place();
    dioxus_ssr::render(&vdom)
}

#[test]
fn content_resolves_ambient_accent() {
    fn app() -> Element {
        rsx! {
            ThemeProvider {
                accent_scale: AccentScale::Teal,
                DropdownMenuContent {
                    DropdownMenuItem { "Edit" }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-accent-scale="teal""#));
}

#[test]
fn content_color_prop_overrides_ambient_accent() {
    fn app() -> Element {
        rsx! {
            ThemeProvider {
                accent_scale: AccentScale::Teal,
                DropdownMenuContent {
                    color: AccentScale::Crimson,
                    DropdownMenuItem { "Edit" }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-accent-scale="crimson""#));
    // The content element no longer carries the ambient accent; only the
    // theme root does.
    assert_eq!(html.matches(r#"data-accent-scale="teal""#).count(), 1);
}

#[test]
fn content_without_provider_falls_back_to_default_accent() {
    fn app() -> Element {
        rsx! {
            DropdownMenuContent {
                DropdownMenuItem { "Edit" }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-accent-scale="indigo""#));
}

#[test]
fn content_class_list_includes_size_variant_and_contrast() {
    fn app() -> Element {
        rsx! {
            ThemeProvider {
                DropdownMenuContent {
                    class: "custom-menu",
                    size: Size::Two,
                    variant: ContentVariant::Soft,
                    high_contrast: true,
                    DropdownMenuItem { "Edit" }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("popper-content"));
    assert!(html.contains("base-menu-content"));
    assert!(html.contains("dropdown-menu-content"));
    assert!(html.contains("size-2"));
    assert!(html.contains("variant-soft"));
    assert!(html.contains("high-contrast"));
    assert!(html.contains("custom-menu"));
    assert!(html.contains(r#"data-accent-scale="indigo""#));
    assert!(html.contains(r#"data-align="start""#));
    assert!(html.contains(r#"data-side-offset="4""#));
}

#[test]
fn sub_content_align_offset_scales_with_ambient_size() {
    fn app() -> Element {
        rsx! {
            DropdownMenuContent {
                size: Size::Three,
                DropdownMenuSub {
                    DropdownMenuSubTrigger { "More" }
                    DropdownMenuSubContent {
                        DropdownMenuItem { "Nested" }
                    }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-align-offset="-12""#));
    // Submenu content inherits the size token from the parent content.
    assert!(html.contains("dropdown-menu-sub-content"));
    assert!(html.contains("size-3"));
}

#[test]
fn sub_content_inherits_style_from_content_context() {
    fn app() -> Element {
        rsx! {
            DropdownMenuContent {
                variant: ContentVariant::Soft,
                color: AccentScale::Plum,
                high_contrast: true,
                DropdownMenuSub {
                    DropdownMenuSubContent {
                        DropdownMenuItem { "Nested" }
                    }
                }
            }
        }
    }
    let html = render(app);
    let sub = html
        .split("base-menu-sub-content")
        .nth(1)
        .expect("submenu content should be rendered");
    // The submenu's own class attribute continues right after the
    // sub-content role classes.
    assert!(sub.starts_with(" dropdown-menu-content"));
    assert!(sub.contains("variant-soft"));
    assert!(sub.contains("high-contrast"));
    assert_eq!(html.matches("high-contrast").count(), 2);
    // Both theme scopes and both content elements carry the accent.
    assert_eq!(html.matches(r#"data-accent-scale="plum""#).count(), 4);
}

#[test]
fn radio_and_checkbox_items_always_mount_indicators() {
    fn app() -> Element {
        rsx! {
            DropdownMenuContent {
                DropdownMenuRadioGroup {
                    value: "medium",
                    DropdownMenuRadioItem { value: "small", "Small" }
                    DropdownMenuRadioItem { value: "medium", "Medium" }
                }
                DropdownMenuCheckboxItem { "Unchecked box" }
            }
        }
    }
    let html = render(app);
    assert_eq!(html.matches("base-menu-item-indicator").count(), 3);
    assert!(html.contains(r#"role="menuitemradio""#));
    assert!(html.contains(r#"role="menuitemcheckbox""#));
    assert!(html.contains("svg"));
}

#[test]
fn radio_item_checked_state_follows_group_selection() {
    fn app() -> Element {
        rsx! {
            DropdownMenuContent {
                DropdownMenuRadioGroup {
                    value: "medium",
                    DropdownMenuRadioItem { value: "small", "Small" }
                    DropdownMenuRadioItem { value: "medium", "Medium" }
                }
            }
        }
    }
    let html = render(app);
    assert_eq!(html.matches(r#"aria-checked="true""#).count(), 1);
    assert_eq!(html.matches(r#"aria-checked="false""#).count(), 1);
}

#[test]
fn shortcut_slot_renders_only_when_non_empty() {
    fn with_shortcut() -> Element {
        rsx! {
            DropdownMenuContent {
                DropdownMenuItem { shortcut: "⌘ D", "Duplicate" }
            }
        }
    }
    fn without_shortcut() -> Element {
        rsx! {
            DropdownMenuContent {
                DropdownMenuItem { "Duplicate" }
            }
        }
    }
    let html = render(with_shortcut);
    assert!(html.contains("base-menu-shortcut"));
    assert!(html.contains("⌘ D"));

    let html = render(without_shortcut);
    assert!(!html.contains("base-menu-shortcut"));
}

#[test]
fn checkbox_item_shortcut_slot_follows_prop() {
    fn app() -> Element {
        rsx! {
            DropdownMenuContent {
                DropdownMenuCheckboxItem { checked: true, shortcut: "⌘ H", "Hidden files" }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("⌘ H"));
    assert!(html.contains(r#"data-state="checked""#));
}

#[test]
fn sub_trigger_always_renders_directional_glyph() {
    fn app() -> Element {
        rsx! {
            DropdownMenuContent {
                DropdownMenuSub {
                    DropdownMenuSubTrigger { "More tools" }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("dropdown-menu-sub-trigger"));
    assert!(html.contains("base-menu-shortcut"));
    assert!(html.contains("svg"));
}

#[test]
fn trigger_renders_single_wired_button() {
    fn app() -> Element {
        rsx! {
            DropdownMenu {
                DropdownMenuTrigger { "Options" }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"aria-haspopup="menu""#));
    assert_eq!(html.matches("<button").count(), 1);
}

#[test]
fn content_mode_override_narrows_theme_subtree() {
    fn app() -> Element {
        rsx! {
            ThemeProvider {
                mode: ThemeMode::Light,
                DropdownMenuContent {
                    mode: ThemeMode::Dark,
                    DropdownMenuItem { "Edit" }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-theme-mode="light""#));
    assert!(html.contains(r#"data-theme-mode="dark""#));
}

#[test]
fn portal_marks_container_and_force_mount() {
    fn app() -> Element {
        rsx! {
            DropdownMenuContent {
                container: "overlay-layer",
                force_mount: true,
                DropdownMenuItem { "Edit" }
                DropdownMenuSub {
                    DropdownMenuSubContent {
                        container: "submenu-layer",
                        DropdownMenuItem { "Nested" }
                    }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("menu-portal"));
    assert!(html.contains(r#"data-portal-container="overlay-layer""#));
    assert!(html.contains(r#"data-portal-container="submenu-layer""#));
    assert!(html.contains(r#"data-force-mount="true""#));
}

#[test]
fn portal_omits_container_marker_by_default() {
    fn app() -> Element {
        rsx! {
            DropdownMenuContent {
                DropdownMenuItem { "Edit" }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("menu-portal"));
    assert!(!html.contains("data-portal-container"));
    assert!(!html.contains("data-force-mount"));
}

#[test]
fn item_color_prop_sets_local_accent_only_when_supplied() {
    fn app() -> Element {
        rsx! {
            DropdownMenuContent {
                DropdownMenuItem { color: AccentScale::Red, "Delete" }
                DropdownMenuItem { "Edit" }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-accent-scale="red""#));
    // Content + themed subtree + one item carry accents; the plain item
    // does not add a fourth.
    assert_eq!(html.matches("data-accent-scale").count(), 3);
}

#[test]
fn separator_and_label_render_role_classes() {
    fn app() -> Element {
        rsx! {
            DropdownMenuContent {
                DropdownMenuLabel { "Appearance" }
                DropdownMenuSeparator {}
                DropdownMenuGroup {
                    DropdownMenuItem { "Zoom" }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("dropdown-menu-label"));
    assert!(html.contains(r#"role="separator""#));
    assert!(html.contains(r#"aria-orientation="horizontal""#));
    assert!(html.contains("dropdown-menu-group"));
}

#[test]
fn responsive_size_emits_breakpoint_classes() {
    fn app() -> Element {
        rsx! {
            DropdownMenuContent {
                size: Responsive::new(Size::One).at(Breakpoint::Md, Size::Three),
                DropdownMenuItem { "Edit" }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("size-1"));
    assert!(html.contains("md:size-3"));
}
