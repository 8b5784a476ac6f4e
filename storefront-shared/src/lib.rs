#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]

//! Models and client-state logic shared by the storefront web client.

pub mod catalog;
pub mod config;
pub mod deletion;
pub mod errors;
pub mod forms;
pub mod image;
pub mod modal;
pub mod models;
pub mod notification;
pub mod session;
