//! Clicker - Cookie Clicker Strategy Simulator
//!
//! Discrete-event simulation of an incremental clicker game: cookies accrue
//! at a rate that grows with each upgrade purchased, and pluggable purchase
//! strategies decide what to buy next. The simulation loop jumps straight to
//! the next affordable purchase instead of ticking through every second, so
//! billion-second horizons run in milliseconds.

pub mod build_info;
pub mod shop;
pub mod simulator;
pub mod state;
pub mod strategy;

pub use shop::Shop;
pub use state::{GameState, PurchaseRecord};
