//! Core types and definitions for the FORTDUEL battle simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! components, configuration, commands, state snapshots, events, and
//! constants. It has no simulation logic and no dependency on any
//! runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
