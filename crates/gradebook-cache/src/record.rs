//! Call counting and history recording
//!
//! Instrumentation is explicit composition: an operation is registered under
//! a fixed method-name string, and [`CallRecorder::record`] wraps each
//! invocation with the bookkeeping writes. Per method name, Redis holds a
//! counter under the name itself and two append-only lists under derived
//! keys:
//!
//! - `<method>`: call counter (INCR per call)
//! - `<method>:inputs`: textual argument of each call (RPUSH)
//! - `<method>:outputs`: textual result of each call (RPUSH)

use crate::error::CacheError;
use deadpool_redis::Pool;
use redis::AsyncCommands;
use std::fmt;
use std::future::Future;
use tracing::debug;

/// Key of the input-history list for a method
pub(crate) fn inputs_key(method: &str) -> String {
    format!("{}:inputs", method)
}

/// Key of the output-history list for a method
pub(crate) fn outputs_key(method: &str) -> String {
    format!("{}:outputs", method)
}

/// Pair up input and output history entries, truncating to the shorter list.
///
/// The lists can differ in length when a recorded call failed between the
/// input append and the output append; the unmatched tail is dropped.
pub(crate) fn pair_calls(inputs: Vec<String>, outputs: Vec<String>) -> Vec<(String, String)> {
    inputs.into_iter().zip(outputs).collect()
}

/// Wraps a cache operation with call counting and history logging.
///
/// The method name is fixed when the recorder is created; it doubles as the
/// counter key and the prefix of the history-list keys.
#[derive(Debug, Clone)]
pub(crate) struct CallRecorder {
    method: &'static str,
}

impl CallRecorder {
    pub(crate) fn new(method: &'static str) -> Self {
        Self { method }
    }

    /// Run `op` with bookkeeping around it.
    ///
    /// Order of writes: counter increment, input append, the operation
    /// itself, output append. Each write is an independent round-trip with
    /// no transaction across them; a failure partway leaves the counter
    /// ahead of the logs, and the logs possibly unequal in length.
    pub(crate) async fn record<T, F, Fut>(
        &self,
        pool: &Pool,
        input: String,
        op: F,
    ) -> Result<T, CacheError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, CacheError>>,
        T: fmt::Display,
    {
        debug!("Recording call to {}: input={}", self.method, input);

        let mut conn = pool
            .get()
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to get connection: {}", e)))?;

        let _: i64 = conn
            .incr(self.method, 1)
            .await
            .map_err(|e| CacheError::Backend(format!("Failed to increment counter: {}", e)))?;
        conn.rpush::<_, _, ()>(inputs_key(self.method), input)
            .await
            .map_err(|e| CacheError::Backend(format!("Failed to log input: {}", e)))?;
        drop(conn);

        let output = op().await?;

        let mut conn = pool
            .get()
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to get connection: {}", e)))?;
        conn.rpush::<_, _, ()>(outputs_key(self.method), output.to_string())
            .await
            .map_err(|e| CacheError::Backend(format!("Failed to log output: {}", e)))?;

        Ok(output)
    }
}

/// Recorded call history of one instrumented method
///
/// Produced by [`crate::Cache::call_report`]; printing it yields one header
/// line with the call count followed by one line per recorded call:
///
/// ```text
/// Cache::store was called 2 times:
/// Cache::store(foo) -> 8e3f0c5e-4f03-4cbe-8bfa-c94e600ec936
/// Cache::store(42) -> 5c1f2c9d-0086-4c6d-9c46-1d8ab21a0b25
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CallReport {
    /// Method name the history belongs to
    pub method: String,
    /// Value of the call counter (zero when the method was never called)
    pub count: u64,
    /// Matched (input, output) pairs in call order
    pub calls: Vec<(String, String)>,
}

impl fmt::Display for CallReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} was called {} times:", self.method, self.count)?;
        for (input, output) in &self.calls {
            writeln!(f, "{}({}) -> {}", self.method, input, output)?;
        }
        Ok(())
    }
}
