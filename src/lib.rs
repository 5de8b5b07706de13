#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod console;
#[cfg(feature = "std")]
mod game;
#[cfg(feature = "std")]
mod logging;
mod observer;
mod player;
#[cfg(feature = "std")]
mod presenter;
mod symbol;

pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use console::*;
#[cfg(feature = "std")]
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use observer::*;
pub use player::*;
#[cfg(feature = "std")]
pub use presenter::*;
pub use symbol::*;
