//! Core scanning and tag parsing

pub mod attributes;
pub mod entities;
pub(crate) mod scanner;
pub mod tag;
