//! Student ranking by average topic score
//!
//! A fixed aggregation pipeline: unwind each student's `topics` array, group
//! back by `_id` keeping the first `name` and the mean of `topics.score`,
//! then sort descending by that mean. The computation happens server-side;
//! this module only ships the pipeline and drains the cursor.

use bson::{doc, Document as BsonDocument};
use gradebook_common::Result;
use mongodb::Collection;
use tracing::debug;

/// The pipeline run by [`top_students`], as literal stages.
///
/// Exposed so the stage shape can be inspected (and tested) without a server.
pub fn top_students_pipeline() -> Vec<BsonDocument> {
    vec![
        doc! { "$unwind": "$topics" },
        doc! { "$group": {
            "_id": "$_id",
            "name": { "$first": "$name" },
            "averageScore": { "$avg": "$topics.score" },
        }},
        doc! { "$sort": { "averageScore": -1 } },
    ]
}

/// Returns all students sorted descending by average topic score.
///
/// Each result document carries `_id`, `name`, and the computed
/// `averageScore`. Students without a `topics` array are dropped by the
/// `$unwind` stage. Read-only; no pagination or result bound, the whole
/// result set is materialized.
pub async fn top_students(collection: &Collection<BsonDocument>) -> Result<Vec<BsonDocument>> {
    debug!(
        "Running top-students aggregation on collection '{}'",
        collection.name()
    );

    let mut cursor = collection.aggregate(top_students_pipeline()).await?;

    let mut results = Vec::new();
    while cursor.advance().await? {
        results.push(cursor.deserialize_current()?);
    }

    debug!("Aggregation returned {} students", results.len());
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_shape() {
        let stages = top_students_pipeline();
        assert_eq!(stages.len(), 3);

        assert_eq!(stages[0], doc! { "$unwind": "$topics" });

        let group = stages[1].get_document("$group").unwrap();
        assert_eq!(group.get_str("_id").unwrap(), "$_id");
        assert_eq!(
            group.get_document("name").unwrap(),
            &doc! { "$first": "$name" }
        );
        assert_eq!(
            group.get_document("averageScore").unwrap(),
            &doc! { "$avg": "$topics.score" }
        );

        assert_eq!(stages[2], doc! { "$sort": { "averageScore": -1 } });
    }

    // Integration tests require a running MongoDB instance:
    // cargo test -p gradebook-mongodb -- --ignored

    #[tokio::test]
    #[ignore]
    async fn test_top_students_ranking() {
        let conn = crate::Connection::new("mongodb://localhost:27017/gradebook_agg_test")
            .await
            .unwrap();
        let collection = conn.collection("students");

        collection
            .insert_many(vec![
                doc! {
                    "name": "Alice",
                    "topics": [
                        { "title": "Algo", "score": 10.0 },
                        { "title": "C", "score": 8.0 },
                    ],
                },
                doc! {
                    "name": "Bob",
                    "topics": [
                        { "title": "Algo", "score": 7.0 },
                        { "title": "C", "score": 5.0 },
                        { "title": "Databases", "score": 6.0 },
                    ],
                },
                doc! {
                    "name": "Cara",
                    "topics": [
                        { "title": "Algo", "score": 9.5 },
                    ],
                },
            ])
            .await
            .unwrap();

        let ranked = top_students(&collection).await.unwrap();
        assert_eq!(ranked.len(), 3);

        // Averages are the arithmetic means of topics[].score
        assert_eq!(ranked[0].get_str("name").unwrap(), "Cara");
        assert_eq!(ranked[0].get_f64("averageScore").unwrap(), 9.5);
        assert_eq!(ranked[1].get_str("name").unwrap(), "Alice");
        assert_eq!(ranked[1].get_f64("averageScore").unwrap(), 9.0);
        assert_eq!(ranked[2].get_str("name").unwrap(), "Bob");
        assert_eq!(ranked[2].get_f64("averageScore").unwrap(), 6.0);

        // Non-increasing by averageScore
        let averages: Vec<f64> = ranked
            .iter()
            .map(|d| d.get_f64("averageScore").unwrap())
            .collect();
        assert!(averages.windows(2).all(|w| w[0] >= w[1]));

        conn.drop_database().await.unwrap();
    }

    #[tokio::test]
    #[ignore]
    async fn test_top_students_skips_students_without_topics() {
        let conn = crate::Connection::new("mongodb://localhost:27017/gradebook_agg_unwind_test")
            .await
            .unwrap();
        let collection = conn.collection("students");

        collection
            .insert_many(vec![
                doc! { "name": "NoTopics" },
                doc! { "name": "HasTopics", "topics": [ { "title": "Algo", "score": 4.0 } ] },
            ])
            .await
            .unwrap();

        let ranked = top_students(&collection).await.unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].get_str("name").unwrap(), "HasTopics");

        conn.drop_database().await.unwrap();
    }
}
