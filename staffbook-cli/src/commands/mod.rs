//! CLI Commands

pub mod contacts;
