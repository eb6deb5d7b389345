//! # v3-sim-math
//!
//! Fixed-point primitives for simulating a Uniswap V3 style concentrated liquidity AMM.
//!
//! ## Features
//!
//! - Bit-exact [`get_sqrt_ratio_at_tick`](utils::get_sqrt_ratio_at_tick) and
//!   [`get_tick_at_sqrt_ratio`](utils::get_tick_at_sqrt_ratio) over
//!   [alloy-rs](https://github.com/alloy-rs) 256-bit integers
//! - Most and least significant bit scans
//! - Checked liquidity delta accumulation reporting overflow and underflow
//! - Max liquidity per tick for a given tick spacing
//!
//! Every function is pure. Errors are returned as [`Error`](error::Error) and never recovered
//! internally.

pub mod constants;
pub mod error;
pub mod utils;


pub mod prelude {
    pub use crate::{constants::*, error::*, utils::*};
}
