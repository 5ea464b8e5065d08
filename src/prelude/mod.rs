//! Re-exports of components and common types.

pub use crate::{
    class::Class,
    icon::{CheckmarkGlyph, ChevronRightGlyph, DotGlyph, MenuGlyph},
    menu::{
        DropdownMenu, DropdownMenuCheckboxItem, DropdownMenuContent, DropdownMenuGroup,
        DropdownMenuItem, DropdownMenuLabel, DropdownMenuRadioGroup, DropdownMenuRadioItem,
        DropdownMenuSeparator, DropdownMenuSub, DropdownMenuSubContent, DropdownMenuSubTrigger,
        DropdownMenuTrigger, MenuContentContext, MenuPortal, MenuRadioGroupContext,
    },
    style::{AccentScale, Breakpoint, ContentVariant, Responsive, Size},
    theme::{use_ambient_theme, ThemeConfig, ThemeMode, ThemeProvider, ThemeScope},
    SharedString,
};
