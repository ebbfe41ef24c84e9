//! CLI command implementations
//!
//! Each submodule implements a specific CLI command and returns a
//! [`Report`](crate::output::Report) for `main` to render.

pub mod check;
pub mod greeks;
pub mod hedge;
pub mod hedge_stats;
pub mod implied_vol;
pub mod price;
pub mod smile;
