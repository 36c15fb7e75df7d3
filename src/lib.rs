//! Tic-tac-toe against a rule-based computer opponent
//!
//! This crate provides:
//! - Complete tic-tac-toe game state with win detection
//! - A four-tier heuristic opponent (win, block, center, random)
//! - An event-driven session shell with a cancellable thinking timer
//! - Ports for the authentication and rendering collaborators, with
//!   in-memory and terminal adapters
//! - A CLI for interactive play and batch simulation

pub mod adapters;
pub mod app;
pub mod board;
pub mod cli;
pub mod error;
pub mod policy;
pub mod ports;
pub mod session;
pub mod state;

pub use board::{Board, CENTER, Cell, Player, WINNING_LINES, winner_of};
pub use error::{Error, Result};
pub use policy::{HeuristicPolicy, MovePolicy, RandomPolicy};
pub use session::{Effect, Event, Session, TimerToken};
pub use state::{GameState, Status};
