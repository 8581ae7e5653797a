//! Store, retrieve, and replay example for the instrumented cache
//!
//! Run this example with:
//! ```
//! # Terminal 1: Start Redis
//! redis-server
//!
//! # Terminal 2: Run the example
//! cargo run -p gradebook-cache --example cache_replay
//! ```

use gradebook_cache::Cache;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== Instrumented Cache Example ===\n");

    // Connect (this flushes the target database)
    println!("Connecting to redis://localhost:6379...");
    let cache = Cache::new().await?;
    let pong = cache.ping().await?;
    println!("Connected: {}\n", pong);

    // Store a string
    println!("1. Storing a string...");
    let key = cache.store("foo").await?;
    println!("   Stored 'foo' under {}", key);
    let value = cache.get_str(&key).await?;
    println!("   Read back: {:?}\n", value);

    // Store an integer
    println!("2. Storing an integer...");
    let key = cache.store(42).await?;
    println!("   Stored 42 under {}", key);
    let value = cache.get_int(&key).await?;
    println!("   Read back: {:?}\n", value);

    // Store raw bytes
    println!("3. Storing raw bytes...");
    let key = cache.store(vec![0xde_u8, 0xad, 0xbe, 0xef]).await?;
    let value = cache.get(&key).await?;
    println!("   Read back: {:?}\n", value);

    // Missing keys come back as None
    println!("4. Reading a missing key...");
    let value = cache.get("no-such-key").await?;
    println!("   Read back: {:?}\n", value);

    // Call accounting
    println!("5. Call accounting...");
    let count = cache.call_count(Cache::STORE).await?;
    println!("   {} was called {} times\n", Cache::STORE, count);

    // Replay the full history
    println!("6. Replaying the store history...");
    cache.replay(Cache::STORE).await?;

    println!("\n=== Example Complete ===");
    Ok(())
}
