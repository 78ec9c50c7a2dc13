//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Account Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/accounts/register/", &request).await.unwrap();
    let body: Envelope<UserResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body.message, "User registered successfully");
    assert_eq!(body.data.username, request.username);
    assert_eq!(body.data.first_name, "Test");
    assert_eq!(body.data.last_name, "Writer");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/accounts/register/", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/accounts/register/", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "USERNAME_TAKEN");
}

#[tokio::test]
async fn test_login_and_refresh() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::create(&server).await.unwrap();

    assert!(!user.access.is_empty());
    assert_ne!(user.access, user.refresh);

    let response = server
        .post("/accounts/token/refresh/", &json!({ "refresh": user.refresh }))
        .await
        .unwrap();
    let tokens: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // The new access token is usable
    let response = server.get_auth("/blogs/", &tokens.access).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::create(&server).await.unwrap();

    let wrong_password = LoginRequest {
        username: user.username.clone(),
        password: "Wr0ngPassword".to_string(),
    };
    let response = server.post("/accounts/login/", &wrong_password).await.unwrap();
    let wrong: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let unknown_user = LoginRequest {
        username: unique_username(),
        password: TEST_PASSWORD.to_string(),
    };
    let response = server.post("/accounts/login/", &unknown_user).await.unwrap();
    let unknown: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // Both failures look the same to the caller
    assert_eq!(wrong.error.code, unknown.error.code);
    assert_eq!(wrong.error.message, unknown.error.message);
}

#[tokio::test]
async fn test_access_token_rejected_for_refresh() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::create(&server).await.unwrap();

    let response = server
        .post("/accounts/token/refresh/", &json!({ "refresh": user.access }))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Blog Tests
// ============================================================================

#[tokio::test]
async fn test_blog_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::create(&server).await.unwrap();

    let blog = author.create_blog(&server, "First post").await.unwrap();
    assert_eq!(blog.title, "First post");
    assert_eq!(blog.user_id, author.id);
    assert_eq!(blog.created_by, author.username);
    assert_eq!(blog.total_likes, 0);
    assert_eq!(blog.total_dislikes, 0);
    assert!(blog.comments.is_empty());
    assert!(blog.main_image.is_none());

    let response = server
        .patch_auth(
            "/blogs/",
            &author.access,
            &json!({ "blog_id": blog.uid, "title": "Edited post" }),
        )
        .await
        .unwrap();
    let updated: Envelope<BlogResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.data.title, "Edited post");
    assert_eq!(updated.data.blog_text, blog.blog_text);

    let response = server.get_auth("/blogs/", &author.access).await.unwrap();
    let mine: Page<BlogResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.count, 1);
    assert_eq!(mine.results[0].uid, blog.uid);

    let response = server
        .delete_auth("/blogs/", &author.access, &json!({ "blog_id": blog.uid }))
        .await
        .unwrap();
    let deleted: Message = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deleted.message, "Blog deleted successfully");

    let response = server.get_auth("/blogs/", &author.access).await.unwrap();
    let mine: Page<BlogResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.count, 0);
}

#[tokio::test]
async fn test_blog_owner_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::create(&server).await.unwrap();
    let other = TestUser::create(&server).await.unwrap();
    let blog = author.create_blog(&server, "Mine").await.unwrap();

    let response = server
        .patch_auth("/blogs/", &other.access, &json!({ "blog_id": blog.uid, "title": "Theirs" }))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "FORBIDDEN");

    let response = server
        .delete_auth("/blogs/", &other.access, &json!({ "blog_id": blog.uid }))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth("/blogs/", &author.access, &json!({ "blog_id": Uuid::new_v4() }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_public_blogs_paginated() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::create(&server).await.unwrap();

    // Tag the titles so the search isolates this test's blogs
    let tag = Uuid::new_v4().simple().to_string();
    for i in 0..7 {
        author
            .create_blog(&server, &format!("{tag} post {i}"))
            .await
            .unwrap();
    }

    let response = server
        .get(&format!("/publicblogs/?search={tag}"))
        .await
        .unwrap();
    let first: Page<BlogResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.count, 7);
    assert_eq!(first.results.len(), 5);
    assert_eq!(first.next, Some(2));
    assert_eq!(first.previous, None);

    // Newest first
    assert_eq!(first.results[0].title, format!("{tag} post 6"));

    let response = server
        .get(&format!("/publicblogs/?search={tag}&page=2"))
        .await
        .unwrap();
    let second: Page<BlogResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(second.results.len(), 2);
    assert_eq!(second.next, None);
    assert_eq!(second.previous, Some(1));

    let response = server
        .get(&format!("/publicblogs/?search={tag}&page_size=10"))
        .await
        .unwrap();
    let all: Page<BlogResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all.results.len(), 7);
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comments_grouped() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::create(&server).await.unwrap();
    let reader = TestUser::create(&server).await.unwrap();

    let first = author.create_blog(&server, "Alpha").await.unwrap();
    let second = author.create_blog(&server, "Beta").await.unwrap();

    reader.comment(&server, first.uid, "nice").await.unwrap();
    reader.comment(&server, first.uid, "really nice").await.unwrap();
    let on_second = reader.comment(&server, second.uid, "also good").await.unwrap();
    assert_eq!(on_second.commented_by, reader.username);
    assert_eq!(on_second.total_likes, 0);

    let response = server
        .get_auth("/blogs/comments/", &reader.access)
        .await
        .unwrap();
    let mine: Envelope<Vec<BlogCommentGroup>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.message, "Your comments retrieved successfully");
    assert_eq!(mine.data.len(), 2);

    let alpha = mine
        .data
        .iter()
        .find(|group| group.blog_id == first.uid)
        .expect("group for first blog");
    assert_eq!(alpha.title, "Alpha");
    assert_eq!(alpha.commented_by, reader.username);
    assert_eq!(alpha.comments.len(), 2);

    let response = server.get_auth("/comments/", &author.access).await.unwrap();
    let all: Envelope<Vec<AuthorCommentGroup>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let readers = all
        .data
        .iter()
        .find(|group| group.user_id == reader.id)
        .expect("group for reader");
    assert_eq!(readers.comments.len(), 3);
    assert!(readers
        .comments
        .iter()
        .any(|c| c.blog_id == second.uid && c.blog_title == "Beta"));

    // Comments show up embedded in the blog
    let response = server.get_auth("/blogs/", &author.access).await.unwrap();
    let blogs: Page<BlogResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let alpha_blog = blogs
        .results
        .iter()
        .find(|blog| blog.uid == first.uid)
        .expect("first blog listed");
    assert_eq!(alpha_blog.comments.len(), 2);
}

#[tokio::test]
async fn test_comment_owner_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::create(&server).await.unwrap();
    let other = TestUser::create(&server).await.unwrap();
    let blog = author.create_blog(&server, "Open for comments").await.unwrap();
    let comment = author.comment(&server, blog.uid, "first").await.unwrap();

    let response = server
        .patch_auth(
            "/blogs/comments/",
            &other.access,
            &json!({ "comment_id": comment.uid, "comment_text": "hijacked" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .patch_auth(
            "/blogs/comments/",
            &author.access,
            &json!({ "comment_id": comment.uid, "comment_text": "edited" }),
        )
        .await
        .unwrap();
    let updated: Envelope<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.data.comment_text, "edited");

    let response = server
        .delete_auth("/blogs/comments/", &other.access, &json!({ "comment_id": comment.uid }))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth("/blogs/comments/", &author.access, &json!({ "comment_id": comment.uid }))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_comment_on_missing_blog() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::create(&server).await.unwrap();

    let response = server
        .post_auth(
            "/blogs/comments/",
            &user.access,
            &json!({ "blog_id": Uuid::new_v4(), "comment_text": "hello?" }),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "NOT_FOUND");
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_blog_toggle_scenario() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let a = TestUser::create(&server).await.unwrap();
    let c = TestUser::create(&server).await.unwrap();
    let blog = a.create_blog(&server, "Toggle me").await.unwrap();

    let first = a.toggle_blog(&server, blog.uid).await.unwrap();
    assert_eq!(first.message, "Blog like status updated");
    assert_eq!(first.status, "like");
    assert_eq!(first.like_count, 1);

    let second = a.toggle_blog(&server, blog.uid).await.unwrap();
    assert_eq!(second.status, "neutral");
    assert_eq!(second.like_count, 0);

    let third = c.toggle_blog(&server, blog.uid).await.unwrap();
    assert_eq!(third.status, "like");
    assert_eq!(third.like_count, 1);

    // The count is visible on the listing
    let response = server.get_auth("/blogs/", &a.access).await.unwrap();
    let page: Page<BlogResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let listed = page
        .results
        .iter()
        .find(|b| b.uid == blog.uid)
        .expect("blog listed");
    assert_eq!(listed.total_likes, 1);
    assert_eq!(listed.total_dislikes, 0);
}

#[tokio::test]
async fn test_comment_toggle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::create(&server).await.unwrap();
    let blog = user.create_blog(&server, "Commented").await.unwrap();
    let comment = user.comment(&server, blog.uid, "like me").await.unwrap();

    let liked = user.toggle_comment(&server, comment.uid).await.unwrap();
    assert_eq!(liked.message, "Comment like status updated");
    assert_eq!(liked.status, "like");
    assert_eq!(liked.like_count, 1);

    // Blog likes are a separate target kind
    let response = server.get_auth("/blogs/", &user.access).await.unwrap();
    let page: Page<BlogResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.results[0].total_likes, 0);
    assert_eq!(page.results[0].comments[0].total_likes, 1);
}

#[tokio::test]
async fn test_concurrent_toggles_same_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::create(&server).await.unwrap();
    let blog = user.create_blog(&server, "Race").await.unwrap();

    let (first, second) = tokio::join!(
        user.toggle_blog(&server, blog.uid),
        user.toggle_blog(&server, blog.uid),
    );
    let mut statuses = vec![first.unwrap().status, second.unwrap().status];
    statuses.sort();

    // Serialized: one created the like, the other cleared it
    assert_eq!(statuses, vec!["like".to_string(), "neutral".to_string()]);

    let response = server.get_auth("/blogs/", &user.access).await.unwrap();
    let page: Page<BlogResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.results[0].total_likes, 0);
}

#[tokio::test]
async fn test_concurrent_toggles_distinct_users() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::create(&server).await.unwrap();
    let blog = author.create_blog(&server, "Popular").await.unwrap();

    let mut users = Vec::new();
    for _ in 0..5 {
        users.push(TestUser::create(&server).await.unwrap());
    }

    let blog_id = blog.uid;
    let mut tasks = Vec::new();
    for user in users {
        let base = server.base_url();
        let client = server.client.clone();
        tasks.push(tokio::spawn(async move {
            client
                .post(format!("{base}/blogs/like/"))
                .header("Authorization", format!("Bearer {}", user.access))
                .json(&json!({ "blog_id": blog_id }))
                .send()
                .await
                .unwrap()
                .status()
        }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::OK);
    }

    let response = server.get_auth("/blogs/", &author.access).await.unwrap();
    let page: Page<BlogResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.results[0].total_likes, 5);
}

#[tokio::test]
async fn test_toggle_missing_target() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::create(&server).await.unwrap();

    let response = server
        .post_auth("/blogs/like/", &user.access, &json!({ "blog_id": Uuid::new_v4() }))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "NOT_FOUND");

    let response = server
        .post_auth("/comments/like/", &user.access, &json!({ "comment_id": Uuid::new_v4() }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_deleted_blog_forgets_reactions() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::create(&server).await.unwrap();
    let blog = user.create_blog(&server, "Short lived").await.unwrap();
    user.toggle_blog(&server, blog.uid).await.unwrap();

    let response = server
        .delete_auth("/blogs/", &user.access, &json!({ "blog_id": blog.uid }))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth("/blogs/like/", &user.access, &json!({ "blog_id": blog.uid }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
