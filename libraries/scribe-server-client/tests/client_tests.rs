//! Behavior tests for the Scribe panel client.
//!
//! These use a mock server to verify classification and endpoint behavior
//! without a real backend.

use scribe_server_client::{ClientConfig, ClientError, CredentialStrategy, PanelClient};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, credentials: CredentialStrategy) -> PanelClient {
    PanelClient::new(ClientConfig::with_credentials(server.uri(), credentials))
        .expect("valid mock server url")
}

// =============================================================================
// Users Endpoint
// =============================================================================

mod users {
    use super::*;

    #[tokio::test]
    async fn fetch_builds_directory_from_records() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "username": "alice", "email": "alice@example.com", "role": "admin"},
                {"id": 2, "username": "bob", "email": "bob@example.com", "role": "user"},
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server, CredentialStrategy::AmbientCookie);
        let directory = client.fetch_user_directory().await.unwrap();

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.username(1), Some("alice"));
        assert_eq!(directory.username(2), Some("bob"));
    }

    #[tokio::test]
    async fn refetch_fully_replaces_previous_directory() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "username": "alice"},
                {"id": 2, "username": "bob"},
            ])))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/users/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 3, "username": "carol"},
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server, CredentialStrategy::AmbientCookie);

        let first = client.fetch_user_directory().await.unwrap();
        assert_eq!(first.len(), 2);

        let second = client.fetch_user_directory().await.unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second.username(3), Some("carol"));
        // No stale entries survive the new fetch.
        assert_eq!(second.username(1), None);
        assert_eq!(second.username(2), None);
    }

    #[tokio::test]
    async fn expired_session_maps_to_unauthenticated() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = client_for(&server, CredentialStrategy::AmbientCookie);
        let result = client.fetch_user_directory().await;

        assert!(matches!(result, Err(ClientError::Unauthenticated)));
    }

    #[tokio::test]
    async fn server_failure_maps_to_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = client_for(&server, CredentialStrategy::AmbientCookie);

        match client.fetch_user_directory().await {
            Err(ClientError::Http { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_body_maps_to_malformed_response() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server, CredentialStrategy::AmbientCookie);
        let result = client.list_users().await;

        assert!(matches!(result, Err(ClientError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn bearer_strategy_sends_authorization_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/"))
            .and(header("authorization", "Bearer secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(
            &server,
            CredentialStrategy::BearerToken("secret-token".to_string()),
        );
        let directory = client.fetch_user_directory().await.unwrap();

        assert!(directory.is_empty());
    }

    #[tokio::test]
    async fn custom_header_strategy_sends_configured_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/"))
            .and(header("x-session-key", "abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(
            &server,
            CredentialStrategy::CustomHeaders(vec![(
                "x-session-key".to_string(),
                "abc123".to_string(),
            )]),
        );

        assert!(client.fetch_user_directory().await.is_ok());
    }

    #[tokio::test]
    async fn unreachable_server_maps_to_unreachable() {
        // Port 9 (discard) is not listening.
        let client = PanelClient::new(ClientConfig::new("http://127.0.0.1:9")).unwrap();
        let result = client.list_users().await;

        assert!(matches!(result, Err(ClientError::Unreachable(_))));
    }
}

// =============================================================================
// Identity Endpoint
// =============================================================================

mod current_user {
    use super::*;
    use scribe_core::types::Role;

    #[tokio::test]
    async fn me_returns_identity() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "username": "carol",
                "role": "admin",
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, CredentialStrategy::AmbientCookie);
        let identity = client.current_user().await.unwrap();

        assert_eq!(identity.username, "carol");
        assert_eq!(identity.role, Role::Admin);
    }

    #[tokio::test]
    async fn me_403_maps_to_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = client_for(&server, CredentialStrategy::AmbientCookie);

        match client.current_user().await {
            Err(ClientError::Http { status, .. }) => assert_eq!(status, 403),
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn me_401_maps_to_unauthenticated() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = client_for(&server, CredentialStrategy::AmbientCookie);

        assert!(matches!(
            client.current_user().await,
            Err(ClientError::Unauthenticated)
        ));
    }
}

// =============================================================================
// Login / Logout
// =============================================================================

mod auth {
    use super::*;

    #[tokio::test]
    async fn login_stores_token_for_subsequent_requests() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "tok-1",
                "username": "alice",
                "role": "admin",
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/me"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "username": "alice",
                "role": "admin",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, CredentialStrategy::None);

        let login = client.login("alice", "secret").await.unwrap();
        assert_eq!(login.username, "alice");
        assert_eq!(
            client.credentials().await,
            CredentialStrategy::BearerToken("tok-1".to_string())
        );

        // The stored token rides on the next request.
        let identity = client.current_user().await.unwrap();
        assert_eq!(identity.username, "alice");
    }

    #[tokio::test]
    async fn rejected_login_maps_to_login_failed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = client_for(&server, CredentialStrategy::None);
        let result = client.login("alice", "wrong").await;

        assert!(matches!(result, Err(ClientError::LoginFailed(_))));
        assert_eq!(client.credentials().await, CredentialStrategy::None);
    }

    #[tokio::test]
    async fn logout_discards_bearer_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/logout"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = client_for(
            &server,
            CredentialStrategy::BearerToken("tok-1".to_string()),
        );

        client.logout().await.unwrap();
        assert_eq!(client.credentials().await, CredentialStrategy::None);
    }

    #[tokio::test]
    async fn failed_logout_keeps_credentials() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/logout"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(
            &server,
            CredentialStrategy::BearerToken("tok-1".to_string()),
        );

        assert!(matches!(
            client.logout().await,
            Err(ClientError::Http { status: 500, .. })
        ));
        assert_eq!(
            client.credentials().await,
            CredentialStrategy::BearerToken("tok-1".to_string())
        );
    }
}

// =============================================================================
// Posts Endpoint
// =============================================================================

mod posts {
    use super::*;

    #[tokio::test]
    async fn list_posts_parses_records() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "title": "Hello", "content": "First post", "user_id": 1},
                {"id": 2, "title": "Again", "content": "Second post", "user_id": 2},
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server, CredentialStrategy::AmbientCookie);
        let posts = client.list_posts().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Hello");
        assert_eq!(posts[1].user_id, 2);
    }
}
