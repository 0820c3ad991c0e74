//! Centralized constants for the avi2ako project.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod api;
pub mod paths;
