//! Core logic of the result browser.
//!
//! This module provides:
//! - [`BrowserState`] selection and content-loading state machine
//! - [`Controller`] driving it through a [`FileApi`]
//! - [`keyboard`] shortcuts and [`theme`] selection

pub mod api;
mod browser;
mod controller;
pub mod error;
pub mod keyboard;
pub mod theme;

pub use api::{FileApi, HttpFileApi};
pub use browser::{BrowserState, Direction};
pub use controller::{Controller, StateStore};
