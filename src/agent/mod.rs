pub mod client;
pub mod normalize;
pub mod worker;

pub use client::{AgentClient, DispatchError};
pub use normalize::{NO_DATA_MESSAGE, NormalizedAnswer};
pub use worker::{AgentWorker, REQUEST_FAILED_MESSAGE};
