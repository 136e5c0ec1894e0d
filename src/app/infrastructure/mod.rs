//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - the host contract and its FLTK implementation
//! - JSON data file persistence
//! - FLTK buffer utilities
//! - Error types

pub mod buffer;
pub mod desktop;
pub mod error;
pub mod host;
pub mod storage;
