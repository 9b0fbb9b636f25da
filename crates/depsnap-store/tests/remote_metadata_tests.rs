//! Remote metadata fetcher against a local HTTP server.

use depsnap_core::errors::ExErrorKind;
use depsnap_core::model::{Repositories, Repository, ResolvedArtifact};
use depsnap_core::resolver::resolve_version;
use depsnap_store::metadata::{HttpMetadataFetcher, MavenMetadataSource, UrlPolicy};
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;
use tiny_http::{Response, Server};

const REMOTE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata modelVersion="1.1.0">
  <groupId>org.example</groupId>
  <artifactId>api</artifactId>
  <version>2.0.0-SNAPSHOT</version>
  <versioning>
    <snapshot>
      <timestamp>20240102.090000</timestamp>
      <buildNumber>1</buildNumber>
    </snapshot>
    <lastUpdated>20240102090000</lastUpdated>
  </versioning>
</metadata>
"#;

const LOCAL_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata>
  <version>2.0.0-SNAPSHOT</version>
  <versioning>
    <snapshot>
      <timestamp>20240101.120000</timestamp>
      <buildNumber>3</buildNumber>
    </snapshot>
  </versioning>
</metadata>
"#;

/// Serve exactly one request, returning the base URL and a handle yielding
/// the requested path.
fn serve_once(status: u16, body: &'static str) -> (String, thread::JoinHandle<String>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let handle = thread::spawn(move || {
        let request = server.recv().unwrap();
        let path = request.url().to_string();
        request
            .respond(Response::from_string(body).with_status_code(status))
            .unwrap();
        path
    });
    (format!("http://{}", addr), handle)
}

fn api_in(local_repo: &Path) -> ResolvedArtifact {
    let dir = local_repo.join("org/example/api/2.0.0-SNAPSHOT");
    fs::create_dir_all(&dir).unwrap();
    ResolvedArtifact::new(
        "org.example",
        "api",
        "2.0.0-SNAPSHOT",
        dir.join("api-2.0.0-SNAPSHOT.jar"),
    )
}

fn fetcher(local_repo: &Path, timeout: Duration) -> HttpMetadataFetcher {
    HttpMetadataFetcher::new(local_repo, UrlPolicy::Preserve, timeout).unwrap()
}

#[test]
fn test_fetch_parses_remote_metadata() {
    let temp = TempDir::new().unwrap();
    let artifact = api_in(temp.path());
    let (url, handle) = serve_once(200, REMOTE_XML);

    let metadata = fetcher(temp.path(), Duration::from_secs(5))
        .fetch(&artifact, &Repository::new("central", url))
        .unwrap()
        .unwrap();

    assert_eq!(
        metadata.snapshot_version("2.0.0-SNAPSHOT").as_deref(),
        Some("2.0.0-20240102.090000-1")
    );
    assert_eq!(
        handle.join().unwrap(),
        "/org/example/api/2.0.0-SNAPSHOT/maven-metadata.xml"
    );
}

#[test]
fn test_not_found_is_no_record() {
    let temp = TempDir::new().unwrap();
    let artifact = api_in(temp.path());
    let (url, handle) = serve_once(404, "not found");

    let result = fetcher(temp.path(), Duration::from_secs(5))
        .fetch(&artifact, &Repository::new("central", url))
        .unwrap();
    assert!(result.is_none());
    handle.join().unwrap();
}

#[test]
fn test_server_error_is_fetch_failure() {
    let temp = TempDir::new().unwrap();
    let artifact = api_in(temp.path());
    let (url, handle) = serve_once(503, "unavailable");

    let err = fetcher(temp.path(), Duration::from_secs(5))
        .fetch(&artifact, &Repository::new("central", url))
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::MetadataFetch);
    assert!(err.to_string().contains("503"));
    handle.join().unwrap();
}

#[test]
fn test_malformed_body_is_invalid_metadata() {
    let temp = TempDir::new().unwrap();
    let artifact = api_in(temp.path());
    let (url, handle) = serve_once(
        200,
        "<metadata><versioning><snapshot><timestamp>20240101.000000</timestamp><buildNumber>one</buildNumber></snapshot></versioning></metadata>",
    );

    let err = fetcher(temp.path(), Duration::from_secs(5))
        .fetch(&artifact, &Repository::new("central", url))
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidMetadata);
    handle.join().unwrap();
}

#[test]
fn test_connection_refused_is_fetch_failure() {
    let temp = TempDir::new().unwrap();
    let artifact = api_in(temp.path());
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let err = fetcher(temp.path(), Duration::from_secs(5))
        .fetch(
            &artifact,
            &Repository::new("central", format!("http://127.0.0.1:{}", port)),
        )
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::MetadataFetch);
}

#[test]
fn test_slow_server_times_out() {
    let temp = TempDir::new().unwrap();
    let artifact = api_in(temp.path());
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    thread::spawn(move || {
        if let Ok(request) = server.recv() {
            thread::sleep(Duration::from_secs(3));
            let _ = request.respond(Response::from_string(REMOTE_XML));
        }
    });

    let err = fetcher(temp.path(), Duration::from_millis(200))
        .fetch(
            &artifact,
            &Repository::new("central", format!("http://{}", addr)),
        )
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Timeout);
}

#[test]
fn test_resolution_through_maven_source_prefers_newer_remote() {
    let temp = TempDir::new().unwrap();
    let artifact = api_in(temp.path());
    fs::write(
        artifact.directory().unwrap().join("maven-metadata-central.xml"),
        LOCAL_XML,
    )
    .unwrap();
    let (url, handle) = serve_once(200, REMOTE_XML);

    let source = MavenMetadataSource::new(fetcher(temp.path(), Duration::from_secs(5)));
    let repositories = Repositories::new(vec![Repository::new("central", url)]);

    assert_eq!(
        resolve_version(&artifact, &repositories, &source).unwrap(),
        "2.0.0-20240102.090000-1"
    );
    handle.join().unwrap();
}

#[test]
fn test_local_only_source_uses_cached_metadata() {
    let temp = TempDir::new().unwrap();
    let artifact = api_in(temp.path());
    fs::write(
        artifact.directory().unwrap().join("maven-metadata-central.xml"),
        LOCAL_XML,
    )
    .unwrap();

    let source = MavenMetadataSource::local_only();
    let repositories = Repositories::new(vec![Repository::new(
        "central",
        "https://unreachable.invalid",
    )]);

    assert_eq!(
        resolve_version(&artifact, &repositories, &source).unwrap(),
        "2.0.0-20240101.120000-3"
    );
}
