//! # ErgoDox Types
//!
//! Fundamental type definitions shared by the ErgoDox keymap crates.
//!
//! ## Modules
//!
//! - [`action`] - Actions bound to function slots (key presses, layer operations, macros, user functions)
//! - [`keycode`] - Keycodes stored in the keymap, including HID, consumer, system, mouse and function slot codes
//! - [`modifier`] - Modifier combinations and the HID modifier byte

#![cfg_attr(not(test), no_std)]

pub mod action;
pub mod keycode;
pub mod modifier;
