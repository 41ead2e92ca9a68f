//! Cache backends, selected at compile time by feature flag.

#[cfg(feature = "memory")]
mod memory;
#[cfg(feature = "redis")]
mod redis_impl;

#[cfg(feature = "memory")]
pub use memory::MemoryCache;
#[cfg(feature = "redis")]
pub use redis_impl::RedisCache;

#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!("features \"memory\" and \"redis\" are mutually exclusive");

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!("one of the features \"memory\" or \"redis\" must be enabled");
