//! Core utilities for the NBA stats front end
//!
//! This module consolidates the transport-independent plumbing shared by
//! every command:
//! - `chunk`: splitting output into chat-sized, fenced messages
//! - `config`: runtime settings from defaults, environment and CLI
//! - `http`: request headers the stats API expects
//! - `pager`: interactive season-by-season navigation state
//! - `timeout`: bounded wait around provider calls

pub mod chunk;
pub mod config;
pub mod http;
pub mod pager;
pub mod timeout;

// Re-export commonly used items for convenience
pub use chunk::{chunk, fence, fence_chunks, DEFAULT_MESSAGE_BUDGET, NO_DATA_MESSAGE};
pub use config::Settings;
pub use pager::{Direction, SeasonPager};
pub use timeout::{with_timeout, DEFAULT_TIMEOUT};
