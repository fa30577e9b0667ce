//! Storage layer module.
//!
//! This module provides trait-based storage abstraction allowing different backends
//! to be used without changing business logic.

mod codec;
pub mod factory;
pub mod memory;
pub mod redis;
pub mod traits;

pub use factory::create_storage;
pub use memory::MemoryUserStore;
pub use redis::RedisUserStore;
pub use traits::UserStore;
