//! # Gridhash Library
//!
//! Perceptual image hash comparison toolkit.
//! Provides the hash value type, Hamming-distance metrics, wire
//! serialization, and visual debug rendering.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod storage;
pub mod ui;
