#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, resolve_level, LOG_ENV};
pub use player::*;
pub use ship::*;
