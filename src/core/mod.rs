// src/core/mod.rs

pub mod drive;
pub mod gviz;
pub mod net;
pub mod text;
