//! Tidelock Economics Module
//!
//! Implements the dual-stake yield engine:
//! - Three-tier reward-split policy driven by the native staking ratio
//! - Deterministic APY calculation for native and bridged stakers
//! - Governance-controlled policy parameters
//! - Range sweeps over staking inputs for dashboards and planning tools
//!
//! Every calculation is a pure function of its arguments: same snapshot and
//! policy in, bit-identical rates out.

pub mod apy;
pub mod errors;
pub mod params;
pub mod split;
pub mod sweep;
pub mod types;

pub use apy::*;
pub use errors::*;
pub use params::*;
pub use split::*;
pub use sweep::*;
pub use types::*;

/// Module version for API introspection
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
