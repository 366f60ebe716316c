//! CLI module for the mds command-line interface

pub mod args;
pub mod commands;
