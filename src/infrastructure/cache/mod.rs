pub mod redis_page_cache;

pub use redis_page_cache::RedisPageCache;
