//! Integration tests for content loading and graceful degradation

use skillmap_core::content::ContentLoader;
use skillmap_core::error::{ContentError, ErrorSeverity};
use skillmap_core::ContentStore;
use std::path::Path;
use tempfile::tempdir;

fn write_site(dir: &Path, json: &str) {
    std::fs::write(dir.join("site.json"), json).unwrap();
}

fn write_roadmap(dir: &Path, file: &str, json: &str) {
    let roadmaps = dir.join("roadmaps");
    std::fs::create_dir_all(&roadmaps).unwrap();
    std::fs::write(roadmaps.join(file), json).unwrap();
}

fn roadmap_json(id: &str, title: &str) -> String {
    format!(
        r#"{{"id": "{id}", "title": "{title}", "featuredTitle": "{title}", "description": "Step by step guide to becoming a {title} developer"}}"#
    )
}

#[test]
fn test_full_load() {
    let dir = tempdir().unwrap();
    write_site(
        dir.path(),
        r#"{
            "name": "skillmap",
            "tagline": "Community curated roadmaps",
            "issueUrl": "https://github.com/skillmap-dev/skillmap/issues/new",
            "signupFormAction": "https://newsletter.example.com/subscribe",
            "signupEmailField": "EMAIL"
        }"#,
    );
    write_roadmap(dir.path(), "frontend.json", &roadmap_json("frontend", "Frontend"));
    write_roadmap(dir.path(), "backend.json", &roadmap_json("backend", "Backend"));
    write_roadmap(dir.path(), "devops.json", &roadmap_json("devops", "DevOps"));

    let loader = ContentLoader::new(dir.path());
    let (content, report) = loader.load_all();

    assert!(!report.has_fatal_errors());
    assert!(report.site_loaded);
    assert_eq!(report.roadmaps_scanned, 3);
    assert_eq!(report.roadmaps_failed, 0);

    assert_eq!(content.site.name, "skillmap");
    assert_eq!(
        content.site.signup_form_action,
        "https://newsletter.example.com/subscribe"
    );

    // Sorted by id regardless of file discovery order
    let ids: Vec<_> = content.roadmaps.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["backend", "devops", "frontend"]);
}

#[test]
fn test_malformed_roadmap_is_skipped() {
    let dir = tempdir().unwrap();
    write_roadmap(dir.path(), "frontend.json", &roadmap_json("frontend", "Frontend"));
    write_roadmap(dir.path(), "broken.json", "{ not json at all");

    let loader = ContentLoader::new(dir.path());
    let (content, report) = loader.load_all();

    assert!(!report.has_fatal_errors());
    assert_eq!(report.roadmaps_scanned, 2);
    assert_eq!(report.roadmaps_failed, 1);
    assert_eq!(content.roadmaps.len(), 1);
    assert_eq!(content.roadmaps[0].id, "frontend");

    let (_, errors, _) = report.error_count();
    assert_eq!(errors, 1);
}

#[test]
fn test_invalid_roadmap_is_skipped() {
    let dir = tempdir().unwrap();
    write_roadmap(
        dir.path(),
        "empty-id.json",
        r#"{"id": "", "title": "Empty", "featuredTitle": "Empty", "description": "Invalid"}"#,
    );
    write_roadmap(dir.path(), "python.json", &roadmap_json("python", "Python"));

    let loader = ContentLoader::new(dir.path());
    let (content, report) = loader.load_all();

    assert_eq!(report.roadmaps_failed, 1);
    assert_eq!(content.roadmaps.len(), 1);
    assert_eq!(content.roadmaps[0].id, "python");
}

#[test]
fn test_duplicate_id_keeps_first_file() {
    let dir = tempdir().unwrap();
    // Files discovered in sorted order, so aaa.json wins over zzz.json
    write_roadmap(
        dir.path(),
        "aaa.json",
        r#"{"id": "frontend", "title": "First", "featuredTitle": "First", "description": "Guide"}"#,
    );
    write_roadmap(
        dir.path(),
        "zzz.json",
        r#"{"id": "frontend", "title": "Second", "featuredTitle": "Second", "description": "Guide"}"#,
    );

    let loader = ContentLoader::new(dir.path());
    let (content, report) = loader.load_all();

    assert_eq!(content.roadmaps.len(), 1);
    assert_eq!(content.roadmaps[0].title, "First");
    assert_eq!(report.roadmaps_failed, 1);
    assert!(report
        .errors
        .iter()
        .any(|e| e.severity == ErrorSeverity::Error && e.source == "roadmaps"));
}

#[test]
fn test_missing_site_config_uses_defaults() {
    let dir = tempdir().unwrap();
    write_roadmap(dir.path(), "golang.json", &roadmap_json("golang", "Go"));

    let loader = ContentLoader::new(dir.path());
    let (content, report) = loader.load_all();

    assert!(!report.site_loaded);
    assert!(!report.has_fatal_errors());
    assert!(report.warnings().any(|w| w.source == "site"));
    assert_eq!(content.site.name, "skillmap");
    assert_eq!(content.site.signup_email_field, "EMAIL");
}

#[test]
fn test_malformed_site_config_uses_defaults() {
    let dir = tempdir().unwrap();
    write_site(dir.path(), "{ nope");
    write_roadmap(dir.path(), "golang.json", &roadmap_json("golang", "Go"));

    let loader = ContentLoader::new(dir.path());
    let (content, report) = loader.load_all();

    assert!(!report.site_loaded);
    assert!(report.has_errors());
    assert_eq!(content.site.name, "skillmap");
}

#[test]
fn test_missing_roadmaps_dir_is_fatal() {
    let dir = tempdir().unwrap();
    write_site(dir.path(), r#"{"name": "skillmap"}"#);

    let loader = ContentLoader::new(dir.path());
    let (content, report) = loader.load_all();

    assert!(report.has_fatal_errors());
    assert!(content.roadmaps.is_empty());
}

#[test]
fn test_missing_content_dir_is_fatal() {
    let dir = tempdir().unwrap();

    let loader = ContentLoader::new(dir.path().join("nope"));
    let (content, report) = loader.load_all();

    assert!(report.has_fatal_errors());
    assert!(content.roadmaps.is_empty());
    assert_eq!(report.roadmaps_scanned, 0);
}

#[cfg(unix)]
#[test]
fn test_unreadable_roadmaps_dir_is_reported() {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    write_roadmap(dir.path(), "frontend.json", &roadmap_json("frontend", "Frontend"));

    let roadmaps = dir.path().join("roadmaps");
    std::fs::set_permissions(&roadmaps, Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not bind for privileged processes
    if std::fs::read_dir(&roadmaps).is_ok() {
        std::fs::set_permissions(&roadmaps, Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let loader = ContentLoader::new(dir.path());
    let (content, report) = loader.load_all();

    std::fs::set_permissions(&roadmaps, Permissions::from_mode(0o755)).unwrap();

    assert!(!report.has_fatal_errors());
    assert!(content.roadmaps.is_empty());
    assert!(report
        .errors
        .iter()
        .any(|e| e.severity == ErrorSeverity::Error && e.source == "roadmaps"));
}

#[test]
fn test_non_json_files_are_ignored() {
    let dir = tempdir().unwrap();
    write_roadmap(dir.path(), "frontend.json", &roadmap_json("frontend", "Frontend"));
    write_roadmap(dir.path(), "README.md", "# Not a roadmap");
    write_roadmap(dir.path(), "notes.txt", "scratch");

    let loader = ContentLoader::new(dir.path());
    let (content, report) = loader.load_all();

    assert_eq!(report.roadmaps_scanned, 1);
    assert_eq!(content.roadmaps.len(), 1);
}

#[test]
fn test_parse_roadmap_error_variants() {
    let dir = tempdir().unwrap();
    let roadmaps = dir.path().join("roadmaps");
    std::fs::create_dir_all(&roadmaps).unwrap();
    let loader = ContentLoader::new(dir.path());

    let missing = loader.parse_roadmap(&roadmaps.join("missing.json"));
    assert!(matches!(missing, Err(ContentError::FileRead { .. })));

    std::fs::write(roadmaps.join("bad.json"), "[1, 2").unwrap();
    let bad = loader.parse_roadmap(&roadmaps.join("bad.json"));
    assert!(matches!(bad, Err(ContentError::JsonParse { .. })));

    std::fs::write(
        roadmaps.join("invalid.json"),
        r#"{"id": "a/b", "title": "Bad", "featuredTitle": "Bad", "description": "d"}"#,
    )
    .unwrap();
    let invalid = loader.parse_roadmap(&roadmaps.join("invalid.json"));
    assert!(matches!(invalid, Err(ContentError::InvalidRoadmap { .. })));
}

#[test]
fn test_store_serves_degraded_content() {
    let dir = tempdir().unwrap();
    write_roadmap(dir.path(), "frontend.json", &roadmap_json("frontend", "Frontend"));
    write_roadmap(dir.path(), "broken.json", "{{{{");

    let store = ContentStore::new(dir.path());
    let report = store.load();

    assert!(!report.has_fatal_errors());
    assert!(store.degraded_state().is_degraded());

    // Healthy content is still served
    assert_eq!(store.roadmap_count(), 1);
    assert!(store.roadmap("frontend").is_some());
}
