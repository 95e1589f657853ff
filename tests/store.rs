use minisocial::models::{NewComment, NewFollower, NewMessage, NewPost, NewUser};
use minisocial::utils::pagination::PaginationParams;
use minisocial::{Store, StoreError};

async fn store() -> Store {
    tracing_subscriber::fmt().with_test_writer().try_init().ok();
    Store::in_memory().await.expect("in-memory store")
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        password: "hashed".to_string(),
        is_active: true,
    }
}

#[tokio::test]
async fn user_round_trip() {
    let store = store().await;

    let created = store.create_user(&new_user("a@x.com")).await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.email, "a@x.com");
    assert_eq!(created.password, "hashed");
    assert!(created.is_active);

    let fetched = store.user(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    let by_email = store.user_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(by_email, created);

    assert!(store.user(999).await.unwrap().is_none());
}

#[tokio::test]
async fn serialized_user_has_only_id_and_email() {
    let store = store().await;
    let user = store.create_user(&new_user("a@x.com")).await.unwrap();

    let json = serde_json::to_value(user.serialize()).unwrap();
    let object = json.as_object().unwrap();
    assert!(!object.contains_key("password"));
    assert!(!object.contains_key("is_active"));
    assert_eq!(json["id"], user.id);
    assert_eq!(json["email"], "a@x.com");
}

#[tokio::test]
async fn duplicate_email_is_a_constraint_violation() {
    let store = store().await;
    store.create_user(&new_user("a@x.com")).await.unwrap();

    let err = store.create_user(&new_user("a@x.com")).await.unwrap_err();
    assert!(matches!(err, StoreError::ConstraintViolation(_)));
}

#[tokio::test]
async fn post_requires_an_existing_author() {
    let store = store().await;

    let err = store
        .create_post(&NewPost {
            user_id: 42,
            title: "hello".to_string(),
            image_url: "https://img.example/1.png".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::ConstraintViolation(_)));
}

#[tokio::test]
async fn over_length_title_is_a_constraint_violation() {
    let store = store().await;
    let user = store.create_user(&new_user("a@x.com")).await.unwrap();

    let err = store
        .create_post(&NewPost {
            user_id: user.id,
            title: "t".repeat(201),
            image_url: "https://img.example/1.png".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::ConstraintViolation(_)));
}

#[tokio::test]
async fn post_round_trip_and_update() {
    let store = store().await;
    let user = store.create_user(&new_user("a@x.com")).await.unwrap();

    let post = store
        .create_post(&NewPost {
            user_id: user.id,
            title: "first".to_string(),
            image_url: "https://img.example/1.png".to_string(),
        })
        .await
        .unwrap();

    let fetched = store.post(post.id).await.unwrap().unwrap();
    assert_eq!(fetched, post);

    let updated = store
        .update_post(
            post.id,
            &NewPost {
                user_id: user.id,
                title: "renamed".to_string(),
                image_url: post.image_url.clone(),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.id, post.id);

    let missing = store
        .update_post(
            999,
            &NewPost {
                user_id: user.id,
                title: "x".to_string(),
                image_url: "y".to_string(),
            },
        )
        .await
        .unwrap();
    assert!(missing.is_none());

    assert!(store.delete_post(post.id).await.unwrap());
    assert!(!store.delete_post(post.id).await.unwrap());
}

#[tokio::test]
async fn feed_is_paginated_newest_first() {
    let store = store().await;
    let user = store.create_user(&new_user("a@x.com")).await.unwrap();

    for i in 0..15 {
        store
            .create_post(&NewPost {
                user_id: user.id,
                title: format!("post {i}"),
                image_url: "https://img.example/p.png".to_string(),
            })
            .await
            .unwrap();
    }

    let first_page = store.posts(&PaginationParams::default()).await.unwrap();
    assert_eq!(first_page.len(), 10);
    assert_eq!(first_page[0].title, "post 14");

    let second_page = store
        .posts(&PaginationParams {
            offset: Some(10),
            limit: Some(10),
        })
        .await
        .unwrap();
    assert_eq!(second_page.len(), 5);
    assert_eq!(second_page[4].title, "post 0");

    let mine = store.posts_by_user(user.id).await.unwrap();
    assert_eq!(mine.len(), 15);
    assert!(store.posts_by_user(999).await.unwrap().is_empty());
}

#[tokio::test]
async fn comment_round_trip_and_navigation() {
    let store = store().await;
    let author = store.create_user(&new_user("a@x.com")).await.unwrap();
    let commenter = store.create_user(&new_user("b@x.com")).await.unwrap();
    let post = store
        .create_post(&NewPost {
            user_id: author.id,
            title: "a post".to_string(),
            image_url: "https://img.example/1.png".to_string(),
        })
        .await
        .unwrap();

    let comment = store
        .create_comment(&NewComment {
            user_id: commenter.id,
            post_id: post.id,
            text: "nice shot".to_string(),
        })
        .await
        .unwrap();

    let fetched = store.comment(comment.id).await.unwrap().unwrap();
    assert_eq!(fetched, comment);

    let on_post = store.comments_on_post(post.id).await.unwrap();
    assert_eq!(on_post, vec![comment.clone()]);
    let by_user = store.comments_by_user(commenter.id).await.unwrap();
    assert_eq!(by_user, vec![comment.clone()]);

    let json = serde_json::to_value(comment.serialize()).unwrap();
    assert_eq!(json["image_url"], "nice shot");
    assert_eq!(json["user_id"], commenter.id);
    assert_eq!(json["post_id"], post.id);

    let err = store
        .create_comment(&NewComment {
            user_id: commenter.id,
            post_id: 999,
            text: "dangling".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::ConstraintViolation(_)));

    assert!(store.delete_comment(comment.id).await.unwrap());
    assert!(store.comments_on_post(post.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_follow_edges_both_persist() {
    let store = store().await;
    let followed = store.create_user(&new_user("a@x.com")).await.unwrap();
    let follower = store.create_user(&new_user("b@x.com")).await.unwrap();

    let edge = NewFollower {
        followed_id: followed.id,
        follower_id: follower.id,
    };
    let first = store.create_follower(&edge).await.unwrap();
    let second = store.create_follower(&edge).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.followed_id, second.followed_id);
    assert_eq!(first.follower_id, second.follower_id);

    let followers = store.followers_of(followed.id).await.unwrap();
    assert_eq!(followers.len(), 2);
    let following = store.following_of(follower.id).await.unwrap();
    assert_eq!(following.len(), 2);
    assert!(store.followers_of(follower.id).await.unwrap().is_empty());

    assert!(store.delete_follower(first.id).await.unwrap());
    assert_eq!(store.followers_of(followed.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn follow_edge_requires_both_users() {
    let store = store().await;
    let user = store.create_user(&new_user("a@x.com")).await.unwrap();

    let err = store
        .create_follower(&NewFollower {
            followed_id: user.id,
            follower_id: 999,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::ConstraintViolation(_)));
}

#[tokio::test]
async fn conversation_collects_both_directions_in_order() {
    let store = store().await;
    let alice = store.create_user(&new_user("alice@x.com")).await.unwrap();
    let bob = store.create_user(&new_user("bob@x.com")).await.unwrap();
    let carol = store.create_user(&new_user("carol@x.com")).await.unwrap();

    let hello = store
        .create_message(&NewMessage {
            sender_id: alice.id,
            receiver_id: bob.id,
            content: "hello".to_string(),
        })
        .await
        .unwrap();
    let reply = store
        .create_message(&NewMessage {
            sender_id: bob.id,
            receiver_id: alice.id,
            content: "hi back".to_string(),
        })
        .await
        .unwrap();
    store
        .create_message(&NewMessage {
            sender_id: alice.id,
            receiver_id: carol.id,
            content: "unrelated".to_string(),
        })
        .await
        .unwrap();

    let thread = store.conversation(alice.id, bob.id).await.unwrap();
    assert_eq!(thread, vec![hello.clone(), reply.clone()]);
    let same_thread = store.conversation(bob.id, alice.id).await.unwrap();
    assert_eq!(same_thread, thread);

    assert_eq!(store.messages_sent(alice.id).await.unwrap().len(), 2);
    assert_eq!(store.messages_received(alice.id).await.unwrap().len(), 1);

    let fetched = store.message(hello.id).await.unwrap().unwrap();
    assert_eq!(fetched, hello);
    assert!(store.delete_message(hello.id).await.unwrap());
    assert!(store.message(hello.id).await.unwrap().is_none());
}

#[tokio::test]
async fn deleting_a_user_with_posts_is_blocked() {
    let store = store().await;
    let user = store.create_user(&new_user("a@x.com")).await.unwrap();
    store
        .create_post(&NewPost {
            user_id: user.id,
            title: "keeps the user referenced".to_string(),
            image_url: "https://img.example/1.png".to_string(),
        })
        .await
        .unwrap();

    let err = store.delete_user(user.id).await.unwrap_err();
    assert!(matches!(err, StoreError::ConstraintViolation(_)));

    let lonely = store.create_user(&new_user("b@x.com")).await.unwrap();
    assert!(store.delete_user(lonely.id).await.unwrap());
}

#[tokio::test]
async fn update_user_overwrites_every_column() {
    let store = store().await;
    let user = store.create_user(&new_user("a@x.com")).await.unwrap();

    let updated = store
        .update_user(
            user.id,
            &NewUser {
                email: "new@x.com".to_string(),
                password: "rehashed".to_string(),
                is_active: false,
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, user.id);
    assert_eq!(updated.email, "new@x.com");
    assert_eq!(updated.password, "rehashed");
    assert!(!updated.is_active);

    let fetched = store.user(user.id).await.unwrap().unwrap();
    assert_eq!(fetched, updated);
}
