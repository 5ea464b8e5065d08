#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![allow(non_snake_case)]
#![forbid(unsafe_code)]

pub mod class;
pub mod icon;
pub mod menu;
pub mod prelude;
pub mod style;
pub mod theme;

/// A string type for the shared data.
pub type SharedString = std::borrow::Cow<'static, str>;
