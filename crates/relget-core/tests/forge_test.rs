//! Integration tests for the GitLab forge client
//!
//! These run the client against a local HTTP server and check the request
//! paths, the token header and the error taxonomy.

mod common;

use common::{client, closed_port_url, Reply, TestServer};
use relget_core::{Forge, ForgeError, GitLabClient};

const RELEASE_JSON: &str = r#"{
    "name": "v1.0.0",
    "tag_name": "v1.0.0",
    "assets": {
        "count": 3,
        "sources": [
            {"format": "zip", "url": "https://gitlab.example.com/g/p/-/archive/v1.0.0/p-v1.0.0.zip"},
            {"format": "tar.gz", "url": "https://gitlab.example.com/g/p/-/archive/v1.0.0/p-v1.0.0.tar.gz"}
        ],
        "links": [
            {"id": 3, "name": "Installer", "url": "https://example.com/setup.exe", "link_type": "package"}
        ]
    }
}"#;

#[test]
fn test_project_lookup_encodes_full_path() {
    let server = TestServer::start(1, |_, _| {
        Reply::ok(r#"{"id": 42, "name": "proj", "path_with_namespace": "group/sub/proj"}"#)
    });
    let forge = GitLabClient::new(client(), &server.base_url).with_private_token("secret");

    let project = forge.project("group/sub/proj").unwrap();

    assert_eq!(project.id, 42);
    assert_eq!(project.name, "proj");

    let requests = server.finish();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "/api/v4/projects/group%2Fsub%2Fproj");
    assert_eq!(requests[0].token.as_deref(), Some("secret"));
}

#[test]
fn test_release_lookup() {
    let server = TestServer::start(1, |_, _| Reply::ok(RELEASE_JSON));
    let forge = GitLabClient::new(client(), &server.base_url).with_private_token("secret");

    let release = forge.release(42, "v1.0.0").unwrap();

    assert_eq!(release.project_id, 42);
    assert_eq!(release.tag, "v1.0.0");
    assert_eq!(release.assets.links.len(), 1);
    assert_eq!(release.assets.links[0].url, "https://example.com/setup.exe");
    assert_eq!(release.assets.sources.len(), 2);
    assert_eq!(release.assets.sources[0].format, "zip");

    let requests = server.finish();
    assert_eq!(requests[0].url, "/api/v4/projects/42/releases/v1.0.0");
}

#[test]
fn test_without_token_no_header_is_sent() {
    let server = TestServer::start(1, |_, _| Reply::ok(r#"{"id": 1, "name": "public"}"#));
    let forge = GitLabClient::new(client(), &server.base_url);

    forge.project("group/public").unwrap();

    let requests = server.finish();
    assert_eq!(requests[0].token, None);
}

#[test]
fn test_non_200_is_api_error_with_body() {
    let server = TestServer::start(1, |_, _| {
        Reply::status(404, r#"{"message":"404 Project Not Found"}"#)
    });
    let forge = GitLabClient::new(client(), &server.base_url).with_private_token("secret");

    let err = forge.project("group/missing").unwrap_err();

    match err {
        ForgeError::Api { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("404 Project Not Found"));
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[test]
fn test_unauthorized_is_api_error() {
    let server = TestServer::start(1, |_, _| {
        Reply::status(401, r#"{"message":"401 Unauthorized"}"#)
    });
    let forge = GitLabClient::new(client(), &server.base_url).with_private_token("wrong");

    let err = forge.release(1, "v1").unwrap_err();
    assert!(matches!(err, ForgeError::Api { status: 401, .. }));
    assert!(err.to_string().starts_with("HTTP 401"));
}

#[test]
fn test_malformed_body_is_decode_error() {
    let server = TestServer::start(1, |_, _| Reply::ok("<html>not json</html>"));
    let forge = GitLabClient::new(client(), &server.base_url);

    let err = forge.project("group/proj").unwrap_err();
    assert!(matches!(err, ForgeError::Decode(_)), "got {:?}", err);
}

#[test]
fn test_release_missing_required_field_is_decode_error() {
    let server = TestServer::start(1, |_, _| Reply::ok(r#"{"name": "no tag"}"#));
    let forge = GitLabClient::new(client(), &server.base_url);

    let err = forge.release(1, "v1").unwrap_err();
    assert!(matches!(err, ForgeError::Decode(_)), "got {:?}", err);
}

#[test]
fn test_connection_refused_is_transport_error() {
    let forge = GitLabClient::new(client(), closed_port_url());

    let err = forge.project("group/proj").unwrap_err();
    assert!(matches!(err, ForgeError::Transport(_)), "got {:?}", err);
}
