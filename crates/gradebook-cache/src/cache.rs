//! Instrumented Redis cache
//!
//! A thin wrapper over a pooled Redis connection: values go in under fresh
//! UUID keys and come back out raw or through a decode function. The `store`
//! operation is wrapped by a call recorder, so every call bumps a counter
//! and lands in replayable input/output history lists.

use crate::error::CacheError;
use crate::record::{inputs_key, outputs_key, pair_calls, CallRecorder, CallReport};
use crate::value::CacheValue;
use deadpool_redis::{Config as PoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Redis URL (e.g., "redis://localhost:6379")
    pub url: String,
    /// Connection pool size
    pub pool_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            pool_size: 10,
        }
    }
}

/// Instrumented key-value cache over Redis
///
/// Construction flushes the target database: a `Cache` starts from an empty
/// store, and everything it holds lives exactly as long as the Redis side
/// keeps it. The pool is the single shared handle; concurrent callers
/// operate on the same key space with no coordination beyond Redis itself.
#[derive(Clone)]
pub struct Cache {
    pool: Pool,
    store_calls: CallRecorder,
}

impl Cache {
    /// Method name `store` is recorded under; doubles as its counter key.
    pub const STORE: &'static str = "Cache::store";

    /// Create a cache against a local Redis with default settings
    pub async fn new() -> Result<Self, CacheError> {
        Self::with_config(CacheConfig::default()).await
    }

    /// Create a cache with custom configuration
    pub async fn with_config(config: CacheConfig) -> Result<Self, CacheError> {
        debug!(
            "Creating cache: url={}, pool_size={}",
            config.url, config.pool_size
        );

        let pool_config = PoolConfig::from_url(&config.url);
        let pool = pool_config
            .builder()
            .map_err(|e| CacheError::Backend(format!("Failed to create pool builder: {}", e)))?
            .max_size(config.pool_size)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| CacheError::Backend(format!("Failed to create pool: {}", e)))?;

        let cache = Self {
            pool,
            store_calls: CallRecorder::new(Self::STORE),
        };

        // Fresh cache, fresh database
        let mut conn = cache.get_conn().await?;
        let _: () = redis::cmd("FLUSHDB")
            .query_async(&mut conn)
            .await
            .map_err(|e| CacheError::Backend(format!("Failed to flush database: {}", e)))?;

        debug!("Cache initialized, database flushed");
        Ok(cache)
    }

    /// Get a connection from the pool
    async fn get_conn(&self) -> Result<Connection, CacheError> {
        self.pool
            .get()
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to get connection: {}", e)))
    }

    /// Store a value under a freshly generated random key and return the key.
    ///
    /// The call is recorded: the `Cache::store` counter is incremented and
    /// the value's textual form and the returned key are appended to the
    /// input/output history before and after the write (see
    /// [`Cache::replay`]).
    pub async fn store(&self, value: impl Into<CacheValue>) -> Result<String, CacheError> {
        let value = value.into();
        let input = value.to_string();

        self.store_calls
            .record(&self.pool, input, || self.store_value(value))
            .await
    }

    /// The uninstrumented store operation: SET under a new UUID key.
    async fn store_value(&self, value: CacheValue) -> Result<String, CacheError> {
        let key = Uuid::new_v4().to_string();
        debug!("Storing value under key '{}'", key);

        let mut conn = self.get_conn().await?;
        conn.set::<_, _, ()>(&key, value)
            .await
            .map_err(|e| CacheError::Backend(format!("Failed to store value: {}", e)))?;

        Ok(key)
    }

    /// Read the raw bytes stored under `key`; `None` if the key is absent.
    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        debug!("Reading key '{}'", key);

        let mut conn = self.get_conn().await?;
        let raw: Option<Vec<u8>> = conn
            .get(key)
            .await
            .map_err(|e| CacheError::Backend(format!("Failed to read key '{}': {}", key, e)))?;

        Ok(raw)
    }

    /// Read `key` and apply `decode` to the raw bytes when present.
    ///
    /// The decode function is not called for absent keys; its errors
    /// propagate unchanged.
    pub async fn get_with<T, F>(&self, key: &str, decode: F) -> Result<Option<T>, CacheError>
    where
        F: FnOnce(Vec<u8>) -> Result<T, CacheError>,
    {
        match self.get(key).await? {
            Some(raw) => Ok(Some(decode(raw)?)),
            None => Ok(None),
        }
    }

    /// Read `key` as a UTF-8 string
    pub async fn get_str(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.get_with(key, |raw| {
            String::from_utf8(raw)
                .map_err(|e| CacheError::Decode(format!("Value is not valid UTF-8: {}", e)))
        })
        .await
    }

    /// Read `key` as a decimal integer
    pub async fn get_int(&self, key: &str) -> Result<Option<i64>, CacheError> {
        self.get_with(key, |raw| {
            let text = std::str::from_utf8(&raw)
                .map_err(|e| CacheError::Decode(format!("Value is not valid UTF-8: {}", e)))?;
            text.parse::<i64>()
                .map_err(|e| CacheError::Decode(format!("Value is not an integer: {}", e)))
        })
        .await
    }

    /// Read the call counter of an instrumented method; zero if absent.
    pub async fn call_count(&self, method: &str) -> Result<u64, CacheError> {
        let mut conn = self.get_conn().await?;

        let exists: bool = conn
            .exists(method)
            .await
            .map_err(|e| CacheError::Backend(format!("Failed to check counter: {}", e)))?;
        if !exists {
            return Ok(0);
        }

        let count: u64 = conn
            .get(method)
            .await
            .map_err(|e| CacheError::Backend(format!("Failed to read counter: {}", e)))?;
        Ok(count)
    }

    /// Assemble the recorded call history of an instrumented method.
    ///
    /// Inputs and outputs are paired in call order; if the lists differ in
    /// length the unmatched tail is dropped.
    pub async fn call_report(&self, method: &str) -> Result<CallReport, CacheError> {
        let count = self.call_count(method).await?;

        let mut conn = self.get_conn().await?;
        let inputs: Vec<String> = conn
            .lrange(inputs_key(method), 0, -1)
            .await
            .map_err(|e| CacheError::Backend(format!("Failed to read input history: {}", e)))?;
        let outputs: Vec<String> = conn
            .lrange(outputs_key(method), 0, -1)
            .await
            .map_err(|e| CacheError::Backend(format!("Failed to read output history: {}", e)))?;

        Ok(CallReport {
            method: method.to_string(),
            count,
            calls: pair_calls(inputs, outputs),
        })
    }

    /// Print the recorded call history of an instrumented method to stdout.
    pub async fn replay(&self, method: &str) -> Result<(), CacheError> {
        let report = self.call_report(method).await?;
        print!("{}", report);
        Ok(())
    }

    /// Round-trip a PING to the server
    pub async fn ping(&self) -> Result<String, CacheError> {
        let mut conn = self.get_conn().await?;
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| CacheError::Backend(format!("Ping failed: {}", e)))?;
        Ok(pong)
    }
}
