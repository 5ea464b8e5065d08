//! Themed dropdown menu components.
//!
//! The family mirrors the usual anatomy of an accessible dropdown menu:
//! [`DropdownMenu`] anchors the [`DropdownMenuTrigger`] and the overlay
//! [`DropdownMenuContent`], which hosts items, groups, radio and checkbox
//! items, labels, separators and nested submenus. Every component forwards
//! unrecognized attributes to its rendered element and appends the caller's
//! `class` after its fixed class stack; interaction state (open/close,
//! keyboard navigation, focus, positioning) belongs to the host application's
//! behavior layer and stylesheet.

mod dropdown;
mod item;

pub use dropdown::{
    DropdownMenu, DropdownMenuContent, DropdownMenuContentProps, DropdownMenuProps,
    DropdownMenuSub, DropdownMenuSubContent, DropdownMenuSubContentProps, DropdownMenuSubProps,
    DropdownMenuTrigger, DropdownMenuTriggerProps, MenuContentContext, MenuPortal,
    MenuPortalProps,
};
pub use item::{
    DropdownMenuCheckboxItem, DropdownMenuCheckboxItemProps, DropdownMenuGroup,
    DropdownMenuGroupProps, DropdownMenuItem, DropdownMenuItemProps, DropdownMenuLabel,
    DropdownMenuLabelProps, DropdownMenuRadioGroup, DropdownMenuRadioGroupProps,
    DropdownMenuRadioItem, DropdownMenuRadioItemProps, DropdownMenuSeparator,
    DropdownMenuSeparatorProps, DropdownMenuSubTrigger, DropdownMenuSubTriggerProps,
    MenuRadioGroupContext,
};
