use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use crate::domain::invoice::PageCache;

/// Redis-backed cache of rendered page output, keyed by request path.
///
/// Invalidation deletes the key; the page layer repopulates it on the next
/// request for that path.
pub struct RedisPageCache {
  connection: ConnectionManager,
}

impl RedisPageCache {
  pub fn new(connection: ConnectionManager) -> Self {
    Self { connection }
  }

  fn key(path: &str) -> String {
    format!("page:{}", path)
  }
}

#[async_trait]
impl PageCache for RedisPageCache {
  async fn invalidate(&self, path: &str) -> anyhow::Result<()> {
    // ConnectionManager is a cheap handle; cloning per call keeps &self.
    let mut connection = self.connection.clone();
    let removed: u64 = connection.del(Self::key(path)).await?;
    tracing::debug!("Invalidated {} cached entries for {}", removed, path);
    Ok(())
  }
}
