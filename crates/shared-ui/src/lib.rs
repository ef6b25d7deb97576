//! Shared UI components for the inspection app.
//!
//! Thin themed wrappers: plain elements for the simple form controls,
//! `dioxus-primitives` for the stateful pieces (alert dialog, toasts).

pub mod components;

pub use components::*;
