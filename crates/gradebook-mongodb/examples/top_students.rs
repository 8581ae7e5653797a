//! Student ranking example: seed a collection, list it, rank by average score
//!
//! Run this example with:
//! ```
//! # Terminal 1: Start MongoDB
//! mongod
//!
//! # Terminal 2: Run the example
//! cargo run -p gradebook-mongodb --example top_students
//! ```

use gradebook_mongodb::{list_all, top_students, Connection};
use mongodb::bson::doc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== Top Students Example ===\n");

    println!("Connecting to mongodb://localhost:27017/gradebook_demo...");
    let connection = Connection::new("mongodb://localhost:27017/gradebook_demo").await?;
    connection.ping().await?;
    println!("Connected!\n");

    let students = connection.collection("students");

    println!("1. Seeding students...");
    students
        .insert_many(vec![
            doc! {
                "name": "Alice",
                "topics": [
                    { "title": "Algo", "score": 10.0 },
                    { "title": "DataStructures", "score": 8.0 },
                ],
            },
            doc! {
                "name": "Bob",
                "topics": [
                    { "title": "Algo", "score": 5.0 },
                    { "title": "DataStructures", "score": 7.0 },
                ],
            },
            doc! {
                "name": "Cara",
                "topics": [
                    { "title": "Algo", "score": 9.5 },
                ],
            },
        ])
        .await?;
    println!("   Inserted 3 students\n");

    println!("2. Listing all documents...");
    for student in list_all(&students).await? {
        println!("   {}", student);
    }
    println!();

    println!("3. Ranking by average score...");
    for student in top_students(&students).await? {
        let name = student.get_str("name")?;
        let average = student.get_f64("averageScore")?;
        println!("   {} => averageScore: {}", name, average);
    }
    println!();

    println!("Cleaning up...");
    connection.drop_database().await?;

    println!("=== Example Complete ===");
    Ok(())
}
