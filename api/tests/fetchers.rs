//! Fetcher contract tests against a mock HTTP server.

use api::{ApiClient, ApiConfig, CachePolicy};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig::with_base_url(server.uri()))
}

fn user(friendly_id: &str, completed: bool) -> Value {
    json!({
        "id": format!("id-{friendly_id}"),
        "friendlyId": friendly_id,
        "username": friendly_id,
        "completedProfile": completed,
        "skills": ["design"],
    })
}

fn project(id: &str, owner_completed: bool) -> Value {
    json!({
        "id": id,
        "title": format!("Project {id}"),
        "description": "a project",
        "thumbnail": "https://cdn.example.com/thumb.png",
        "media": [{ "url": "https://cdn.example.com/1.png" }],
        "tags": [{ "id": "t1", "name": "web" }],
        "user": user("owner", owner_completed),
    })
}

#[tokio::test]
async fn get_users_filters_incomplete_profiles_and_reports_filtered_total() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "20"))
        .and(query_param("search", "design"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "users": [user("u1", true), user("u2", true), user("u3", false)],
                "pagination": { "total": 3 }
            }
        })))
        .mount(&server)
        .await;

    let listing = client_for(&server).get_users(1, 20, "design").await;

    assert_eq!(listing.users.len(), 2);
    assert!(listing.users.iter().all(|u| u.completed_profile));
    assert_eq!(listing.users[0].friendly_id, "u1");
    assert_eq!(listing.users[1].friendly_id, "u2");
    assert_eq!(listing.total, 2);
}

#[tokio::test]
async fn get_projects_never_exceeds_limit() {
    let server = MockServer::start().await;
    // Misbehaving server: returns more rows than the requested limit.
    let rows: Vec<Value> = (0..5).map(|i| project(&format!("p{i}"), true)).collect();
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "projects": rows, "pagination": { "total": 5 } }
        })))
        .mount(&server)
        .await;

    let listing = client_for(&server).get_projects(1, 3, "").await;

    assert!(listing.projects.len() <= 3);
}

#[tokio::test]
async fn over_returned_rows_do_not_deflate_the_total() {
    let server = MockServer::start().await;
    // Misbehaving server: 25 complete profiles at limit 20. The five
    // truncated rows were not filtered out and still count.
    let rows: Vec<Value> = (0..25).map(|i| user(&format!("u{i}"), true)).collect();
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "users": rows, "pagination": { "total": 100 } }
        })))
        .mount(&server)
        .await;

    let listing = client_for(&server).get_users(1, 20, "").await;

    assert_eq!(listing.users.len(), 20);
    assert_eq!(listing.total, 100);
}

#[tokio::test]
async fn get_projects_drops_projects_of_incomplete_owners() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "projects": [project("p1", true), project("p2", false)],
                "pagination": { "total": 2 }
            }
        })))
        .mount(&server)
        .await;

    let listing = client_for(&server).get_projects(1, 20, "").await;

    assert_eq!(listing.projects.len(), 1);
    assert_eq!(listing.projects[0].id, "p1");
    assert_eq!(listing.total_pages, 1);
}

#[tokio::test]
async fn fetchers_resolve_with_empty_defaults_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "message": "boom"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let users = client.get_users(1, 20, "").await;
    assert!(users.users.is_empty());
    assert_eq!(users.total, 0);

    let projects = client.get_projects(1, 20, "").await;
    assert!(projects.projects.is_empty());
    assert_eq!(projects.total_pages, 1);

    assert!(client.get_user_profile("jane").await.is_none());
    assert!(client.get_user_projects("jane").await.is_none());
}

#[tokio::test]
async fn fetchers_resolve_with_empty_defaults_on_transport_failure() {
    // Point at a server that is not listening.
    let client = ApiClient::new(ApiConfig::with_base_url("http://127.0.0.1:1"));

    let users = client.get_users(1, 20, "").await;
    assert_eq!(users, api::UserListing::default());

    let projects = client.get_projects(1, 20, "").await;
    assert!(projects.projects.is_empty());
    assert_eq!(projects.total_pages, 1);

    assert!(client.get_user_profile("jane").await.is_none());
    assert!(client.get_user_projects("jane").await.is_none());
}

#[tokio::test]
async fn get_user_profile_returns_the_embedded_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/jane"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "user": user("jane", true) }
        })))
        .mount(&server)
        .await;

    let profile = client_for(&server).get_user_profile("jane").await;

    assert_eq!(profile.unwrap().friendly_id, "jane");
}

#[tokio::test]
async fn get_user_projects_honors_the_success_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/user/jane"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "data": { "projects": [], "user": user("jane", true) }
        })))
        .mount(&server)
        .await;

    assert!(client_for(&server).get_user_projects("jane").await.is_none());
}

#[tokio::test]
async fn get_user_projects_returns_showcase_with_normalized_tags() {
    let server = MockServer::start().await;
    let mut p = project("p1", true);
    p["tags"] = json!([
        { "id": "t1", "name": "web" },
        { "id": "t1", "name": "web-dupe" },
        { "id": "t2", "name": "rust" }
    ]);
    Mock::given(method("GET"))
        .and(path("/projects/user/jane"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "projects": [p], "user": user("jane", true) }
        })))
        .mount(&server)
        .await;

    let showcase = client_for(&server)
        .get_user_projects("jane")
        .await
        .expect("showcase");

    assert_eq!(showcase.user.friendly_id, "jane");
    assert_eq!(showcase.projects[0].tags.len(), 2);
}

#[tokio::test]
async fn empty_slugs_short_circuit_without_a_request() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would 404 and be logged, but none
    // should be issued at all.
    let client = client_for(&server);

    assert!(client.get_user_profile("  ").await.is_none());
    assert!(client.get_user_projects("").await.is_none());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn cached_responses_are_served_within_the_ttl() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "users": [user("u1", true)], "pagination": { "total": 1 } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.get_users(1, 20, "").await;
    let second = client.get_users(1, 20, "").await;

    assert_eq!(first, second);
    server.verify().await;
}

#[tokio::test]
async fn cache_bypass_always_hits_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "users": [], "pagination": { "total": 0 } }
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let endpoint = client.endpoints().users();
    client
        .get_json(&endpoint, &[], CachePolicy::Bypass)
        .await
        .expect("first request");
    client
        .get_json(&endpoint, &[], CachePolicy::Bypass)
        .await
        .expect("second request");

    server.verify().await;
}
