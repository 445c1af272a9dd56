pub mod cache;
pub mod filter;

pub use cache::MessageCache;
