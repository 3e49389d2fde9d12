// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod forms;

pub mod gui;
pub mod report;
pub mod scheduler;
pub mod store;
pub mod sync;
