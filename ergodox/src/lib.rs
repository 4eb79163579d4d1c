#![doc = include_str!("../../README.md")]
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub use ergodox_types as types;

pub mod boot;
pub mod channel;
pub mod config;
pub mod event;
pub mod function;
pub mod hid;
pub mod hid_state;
pub mod keyboard;
pub mod keyboard_macro;
pub mod keymap;
pub mod layer;
pub mod layout;
pub mod layout_macro;
pub mod resolver;

pub use keyboard::Keyboard;
pub use layout::fn_resolver;
