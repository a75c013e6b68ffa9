//! Core library components.
//!
//! Everything needed to seal and open a deployment's secrets file, free of
//! any terminal handling.

pub mod cipher;
pub mod codec;
pub mod config;
pub mod constants;
pub mod detect;
pub mod editor;
pub mod file;
pub mod keys;
pub mod provider;
pub mod secrets;
