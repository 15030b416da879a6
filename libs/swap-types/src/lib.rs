#![no_std]

mod interfaces;
mod reserves;

pub use interfaces::*;
pub use reserves::*;

/// Seconds added to the current ledger timestamp when building a router deadline
pub const SWAP_DEADLINE_WINDOW: u64 = 1200;

// TTL constants shared by every contract in the workspace
pub const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
pub const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
pub const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
pub const PERSISTENT_TTL_EXTEND: u32 = 518400;
