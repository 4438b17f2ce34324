//! Integration tests for the Cypher statements against a live Neo4j.
//!
//! Every test wipes the database it connects to, so they only run when
//! `SOCIAL_NEO4J_TESTS=1` is set and `NEO4J_URI` / `NEO4J_USER` /
//! `NEO4J_PASSWORD` / `NEO4J_DATABASE` point at a disposable instance.
//! Run with: SOCIAL_NEO4J_TESTS=1 cargo test -p social-graph --test neo4j_tests

use neo4rs::Query;
use social_graph::{GraphClient, SocialStore, TrendingHashtag, UNKNOWN_AUTHOR};
use tokio::sync::{Mutex, MutexGuard};

/// The tests share one database, so they run one at a time.
static DB_LOCK: Mutex<()> = Mutex::const_new(());

/// Connect to an empty test database, or `None` when tests are not enabled
/// or Neo4j is not reachable.
async fn test_client() -> Option<(GraphClient, MutexGuard<'static, ()>)> {
    if std::env::var("SOCIAL_NEO4J_TESTS").is_err() {
        eprintln!("Skipping test: SOCIAL_NEO4J_TESTS not set");
        return None;
    }

    let guard = DB_LOCK.lock().await;
    let client = match GraphClient::connect_from_env().await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Skipping test: Neo4j not available ({e:#})");
            return None;
        }
    };

    client
        .execute(Query::new("MATCH (n) DETACH DELETE n".to_string()))
        .await
        .unwrap();
    Some((client, guard))
}

async fn seed_users(client: &GraphClient, names: &[&str]) {
    for name in names {
        client.merge_user(name).await.unwrap();
    }
}

#[tokio::test]
async fn test_merge_user_is_idempotent() {
    let Some((client, _guard)) = test_client().await else { return };

    assert_eq!(client.merge_user("Alice").await.unwrap(), "Alice");
    assert_eq!(client.merge_user("Alice").await.unwrap(), "Alice");

    assert_eq!(client.list_users().await.unwrap(), vec!["Alice"]);
}

#[tokio::test]
async fn test_friendship_is_directed_and_removable() {
    let Some((client, _guard)) = test_client().await else { return };
    seed_users(&client, &["Alice", "Bob"]).await;

    assert!(!client.friendship_exists("Alice", "Bob").await.unwrap());

    client.add_friend("Alice", "Bob").await.unwrap();
    client.add_friend("Alice", "Bob").await.unwrap();
    assert!(client.friendship_exists("Alice", "Bob").await.unwrap());
    assert!(!client.friendship_exists("Bob", "Alice").await.unwrap());
    assert_eq!(client.counts().await.unwrap().relationships, 1);

    client.delete_friendship("Alice", "Bob").await.unwrap();
    assert!(!client.friendship_exists("Alice", "Bob").await.unwrap());
}

#[tokio::test]
async fn test_add_friend_with_missing_user_creates_nothing() {
    let Some((client, _guard)) = test_client().await else { return };
    seed_users(&client, &["Alice"]).await;

    client.add_friend("Alice", "Nobody").await.unwrap();

    let counts = client.counts().await.unwrap();
    assert_eq!(counts.nodes, 1);
    assert_eq!(counts.relationships, 0);
}

#[tokio::test]
async fn test_post_like_unlike_scenario() {
    let Some((client, _guard)) = test_client().await else { return };
    seed_users(&client, &["Alice", "Bob"]).await;

    client.create_post("Hi", "Alice").await.unwrap();
    client.tag_post("Hi", "fun").await.unwrap();
    client.tag_post("Hi", "test").await.unwrap();

    let posts = client.list_posts().await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].author, "Alice");
    assert_eq!(posts[0].likes, 0);
    let mut tags = posts[0].hashtags.clone();
    tags.sort();
    assert_eq!(tags, vec!["fun", "test"]);
    assert!(posts[0].liked_by.is_empty());

    client.like_post("Bob", "Hi").await.unwrap();
    client.like_post("Bob", "Hi").await.unwrap();
    let posts = client.list_posts().await.unwrap();
    assert_eq!(posts[0].likes, 1);
    assert_eq!(posts[0].liked_by, vec!["Bob"]);

    client.unlike_post("Bob", "Hi").await.unwrap();
    let posts = client.list_posts().await.unwrap();
    assert_eq!(posts[0].likes, 0);
    assert!(posts[0].liked_by.is_empty());
}

#[tokio::test]
async fn test_posts_ordered_by_title_and_orphaned_author_is_unknown() {
    let Some((client, _guard)) = test_client().await else { return };
    seed_users(&client, &["Alice", "Bob"]).await;

    client.create_post("b", "Alice").await.unwrap();
    client.create_post("a", "Bob").await.unwrap();
    client.delete_user("Bob").await.unwrap();

    let posts = client.list_posts().await.unwrap();
    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b"]);
    assert_eq!(posts[0].author, UNKNOWN_AUTHOR);
    assert_eq!(posts[1].author, "Alice");
}

#[tokio::test]
async fn test_create_post_without_author_creates_nothing() {
    let Some((client, _guard)) = test_client().await else { return };

    client.create_post("Ghost", "Nobody").await.unwrap();
    client.tag_post("Ghost", "boo").await.unwrap();

    assert!(client.list_posts().await.unwrap().is_empty());
    assert_eq!(client.counts().await.unwrap().nodes, 0);
}

#[tokio::test]
async fn test_delete_post_collects_orphan_tags() {
    let Some((client, _guard)) = test_client().await else { return };
    seed_users(&client, &["Alice", "Bob"]).await;

    client.create_post("One", "Alice").await.unwrap();
    client.tag_post("One", "x").await.unwrap();
    client.tag_post("One", "solo").await.unwrap();
    client.create_post("Two", "Bob").await.unwrap();
    client.tag_post("Two", "x").await.unwrap();

    // Only the author's POSTED edge matches.
    client.delete_post("Bob", "One").await.unwrap();
    assert_eq!(client.list_posts().await.unwrap().len(), 2);

    client.delete_post("Alice", "One").await.unwrap();
    assert_eq!(
        client.trending_hashtags(10).await.unwrap(),
        vec![TrendingHashtag { hashtag: "x".to_string(), post_count: 1 }]
    );
    // Alice, Bob, post "Two" and tag "x".
    assert_eq!(client.counts().await.unwrap().nodes, 4);

    client.delete_post("Bob", "Two").await.unwrap();
    assert!(client.trending_hashtags(10).await.unwrap().is_empty());
    assert_eq!(client.counts().await.unwrap().nodes, 2);
}

#[tokio::test]
async fn test_delete_untagged_post() {
    let Some((client, _guard)) = test_client().await else { return };
    seed_users(&client, &["Alice"]).await;

    client.create_post("Plain", "Alice").await.unwrap();
    client.delete_post("Alice", "Plain").await.unwrap();

    assert!(client.list_posts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_trending_is_capped_and_ordered() {
    let Some((client, _guard)) = test_client().await else { return };
    seed_users(&client, &["Alice"]).await;

    for i in 0..12 {
        let title = format!("post-{i}");
        client.create_post(&title, "Alice").await.unwrap();
        client.tag_post(&title, &format!("tag-{i:02}")).await.unwrap();
        client.tag_post(&title, "common").await.unwrap();
    }

    let trending = client.trending_hashtags(10).await.unwrap();
    assert_eq!(trending.len(), 10);
    assert_eq!(trending[0], TrendingHashtag { hashtag: "common".to_string(), post_count: 12 });
    assert_eq!(trending[1].hashtag, "tag-00");
    assert!(trending.iter().skip(1).all(|t| t.post_count == 1));
}

#[tokio::test]
async fn test_counts_cover_every_relationship_once() {
    let Some((client, _guard)) = test_client().await else { return };
    seed_users(&client, &["Alice", "Bob"]).await;

    client.add_friend("Alice", "Bob").await.unwrap();
    client.add_friend("Bob", "Alice").await.unwrap();
    client.create_post("Hi", "Alice").await.unwrap();
    client.tag_post("Hi", "x").await.unwrap();
    client.like_post("Bob", "Hi").await.unwrap();

    let counts = client.counts().await.unwrap();
    assert_eq!(counts.nodes, 4);
    // Two FRIEND, one POSTED, one HAS_TAG, one LIKES.
    assert_eq!(counts.relationships, 5);
}
