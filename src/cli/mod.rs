//! CLI infrastructure for the noughts game
//!
//! This module provides the command-line interface for playing against the
//! computer opponent and for batch-simulating games between policies.

pub mod commands;
pub mod output;
