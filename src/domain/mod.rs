//! Domain types for SSKR group configuration
//!
//! - [`GroupDescriptor`] - validated member threshold and count for one group
//! - [`count_shards`] - group-level validation and total shard count

mod config;
mod descriptor;

pub use config::count_shards;
pub use descriptor::GroupDescriptor;
