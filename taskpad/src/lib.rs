//! `Taskpad` — terminal to-do list client library.

pub mod app;
pub mod config;
pub mod remote;
pub mod store;
pub mod sync;
pub mod ui;
