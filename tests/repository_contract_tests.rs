mod common;

use mongodb::bson::{oid::ObjectId, DateTime};

use learnforge_server::{
    errors::AppError,
    models::domain::{AnswerLetter, Quiz, QuizQuestion, User},
    repositories::{QuizRepository, UserRepository},
};

use common::{InMemoryQuizRepository, InMemoryUserRepository};

fn make_quiz(user_id: ObjectId, topic: &str) -> Quiz {
    Quiz::new_pending(
        user_id,
        topic,
        vec![QuizQuestion::new(
            "Which structure is LIFO?",
            ["Stack", "Queue", "Heap", "Graph"],
            AnswerLetter::A,
        )],
    )
}

#[tokio::test]
async fn quiz_repository_backlog_queries_and_error_paths() {
    let repo = InMemoryQuizRepository::new();
    let alice = ObjectId::new();
    let bob = ObjectId::new();

    let first = repo.insert(make_quiz(alice, "Algorithms")).await.expect("insert first");
    repo.insert(make_quiz(alice, "Testing")).await.expect("insert second");
    repo.insert(make_quiz(bob, "Algorithms")).await.expect("insert bob");

    assert_eq!(repo.count_incomplete_by_user(&alice).await.expect("count"), 2);
    assert_eq!(repo.list_by_user(&alice).await.expect("list").len(), 2);
    assert!(repo
        .list_completed_by_user(&alice)
        .await
        .expect("completed list")
        .is_empty());

    let owned = repo
        .find_by_id_for_user(&first, &alice)
        .await
        .expect("lookup should work");
    assert_eq!(owned.map(|q| q.topic), Some("Algorithms".to_string()));

    let foreign = repo
        .find_by_id_for_user(&first, &bob)
        .await
        .expect("lookup should work");
    assert!(foreign.is_none());

    repo.record_submission(&first, &["A".to_string()], 1)
        .await
        .expect("submission should be stored");

    assert_eq!(repo.count_incomplete_by_user(&alice).await.expect("count"), 1);
    let completed = repo.list_completed_by_user(&alice).await.expect("completed list");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].selected_answers, vec!["A"]);
    assert_eq!(completed[0].score, 1);

    let missing = repo.record_submission(&ObjectId::new(), &[], 0).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn quiz_listings_are_oldest_first() {
    let repo = InMemoryQuizRepository::new();
    let alice = ObjectId::new();

    let mut newer = make_quiz(alice, "Testing");
    newer.created_at = Some(DateTime::from_millis(2_000));
    let mut older = make_quiz(alice, "Algorithms");
    older.created_at = Some(DateTime::from_millis(1_000));

    repo.insert(newer).await.expect("insert newer");
    repo.insert(older).await.expect("insert older");

    let topics: Vec<String> = repo
        .list_by_user(&alice)
        .await
        .expect("list should work")
        .into_iter()
        .map(|q| q.topic)
        .collect();
    assert_eq!(topics, vec!["Algorithms", "Testing"]);
}

async fn find_user(repo: &InMemoryUserRepository, id: &ObjectId) -> User {
    repo.find_all()
        .await
        .expect("find all should work")
        .into_iter()
        .find(|user| user.id == Some(*id))
        .expect("user should exist")
}

#[tokio::test]
async fn user_repository_interest_updates_and_error_paths() {
    let repo = InMemoryUserRepository::new();

    let alice = repo.seed(User::new("alice", &["Algorithms"])).await;
    repo.seed(User::new("bob", &[])).await;

    assert_eq!(repo.find_all().await.expect("find all").len(), 2);

    repo.update_interests(&alice, &["Testing".to_string(), "Debugging".to_string()])
        .await
        .expect("update should work");
    let updated = find_user(&repo, &alice).await;
    assert_eq!(updated.interests, vec!["Testing", "Debugging"]);

    repo.update_interests(&alice, &[]).await.expect("clearing should work");
    let cleared = find_user(&repo, &alice).await;
    assert!(!cleared.has_interests());

    let missing = repo.update_interests(&ObjectId::new(), &[]).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}
