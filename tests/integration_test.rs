//! Integration tests for wayfindr
//!
//! These tests drive the whole search component end to end: a seeded
//! catalog on disk, a session stepped with a hand-held clock, and a
//! recording navigator instead of a browser. Time never sleeps; the
//! debounce deadline is crossed by stepping the clock forward.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use wayfindr::Place;
use wayfindr::PlaceKind;
use wayfindr::catalog::{Catalog, import_json};
use wayfindr::nav::{RecordingNavigator, dispatch};
use wayfindr::search::{
    Phase, PlaceQuery, QueryRequest, SearchSession, SearchSpec, SearchWorker, SortOrder,
};

/// A comfortable step past the default 300ms debounce
const SETTLE: Duration = Duration::from_millis(350);

fn place(id: &str, name: &str, slug: &str, kind: PlaceKind) -> Place {
    Place::new(
        id.to_string(),
        name.to_string(),
        slug.to_string(),
        kind,
    )
}

/// Create a temporary catalog seeded with a small destination set
fn seeded_catalog() -> (TempDir, Catalog) {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::open(dir.path()).unwrap();

    let places = [
        place("1", "Tunis", "tunis", PlaceKind::City),
        place("2", "Carthage", "carthage", PlaceKind::City),
        place("3", "Sousse", "sousse", PlaceKind::City),
        place("4", "Bardo Museum", "bardo-museum", PlaceKind::Attraction),
        place("5", "El Jem Amphitheatre", "el-jem-amphitheatre", PlaceKind::Attraction),
        place("6", "Dar El Jeld", "dar-el-jeld", PlaceKind::Restaurant),
        place("7", "Medina Walking Guide", "medina-walking-guide", PlaceKind::Guide),
    ];
    for p in &places {
        catalog.insert(p).unwrap();
    }

    (dir, catalog)
}

/// Execute a pending request against the catalog, the way the event loop
/// would, and feed the response back into the session
fn run_lookup(session: &mut SearchSession, request: &QueryRequest, catalog: &Catalog) {
    let outcome = catalog.search(request.kind, &request.text, request.order, request.limit);
    session.on_response(request.seq, outcome);
}

/// Type a query and settle the debounce in one step
fn type_and_settle(
    session: &mut SearchSession,
    catalog: &Catalog,
    text: &str,
    now: Instant,
) -> Instant {
    session.on_input(text, now);
    let settled = now + SETTLE;
    if let Some(request) = session.poll(settled) {
        run_lookup(session, &request, catalog);
    }
    settled
}

#[test]
fn test_typing_burst_issues_single_lookup_for_final_text() {
    let (_dir, catalog) = seeded_catalog();
    let mut session = SearchSession::new(SearchSpec::general());
    let start = Instant::now();

    // "t", "tu", "tun" within the quiet window
    session.on_input("t", start);
    assert!(session.poll(start + Duration::from_millis(100)).is_none());
    session.on_input("tu", start + Duration::from_millis(100));
    assert!(session.poll(start + Duration::from_millis(200)).is_none());
    session.on_input("tun", start + Duration::from_millis(200));

    let request = session.poll(start + Duration::from_millis(600)).unwrap();
    assert_eq!(request.text, "tun");

    // Exactly one emission per settling
    assert!(session.poll(start + Duration::from_secs(5)).is_none());

    run_lookup(&mut session, &request, &catalog);
    assert_eq!(session.phase(), Phase::Displaying);
    assert!(session.results().iter().any(|p| p.name == "Tunis"));
}

#[test]
fn test_tunis_scenario_select_navigates_to_city_page() {
    let (_dir, catalog) = seeded_catalog();
    let navigator = RecordingNavigator::new();
    let mut session = SearchSession::new(SearchSpec::general());

    type_and_settle(&mut session, &catalog, "tunis", Instant::now());

    assert_eq!(session.results().len(), 1);
    assert_eq!(session.results()[0].name, "Tunis");

    let target = session.select(0).unwrap();
    assert!(dispatch(&navigator, &target));
    assert_eq!(navigator.visited(), vec!["/cities/tunis"]);
}

#[test]
fn test_carthage_scenario_submit_trims_whitespace() {
    let (_dir, catalog) = seeded_catalog();
    let navigator = RecordingNavigator::new();
    let mut session = SearchSession::new(SearchSpec::general());

    type_and_settle(&mut session, &catalog, "   Carthage   ", Instant::now());

    let target = session.submit().unwrap();
    assert!(dispatch(&navigator, &target));
    assert_eq!(navigator.visited(), vec!["/search?q=Carthage"]);
}

#[test]
fn test_empty_submit_never_navigates_or_queries() {
    let (_dir, catalog) = seeded_catalog();
    let navigator = RecordingNavigator::new();
    let mut session = SearchSession::new(SearchSpec::general());
    let start = Instant::now();

    for input in ["", "   ", "\t \t"] {
        session.on_input(input, start);
        // The debounce settles without producing a lookup
        assert!(session.poll(start + SETTLE).is_none(), "input {input:?}");
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.submit().is_none(), "input {input:?}");
    }

    assert!(navigator.visited().is_empty());
}

#[test]
fn test_stale_response_never_overwrites_newer_query() {
    let (_dir, catalog) = seeded_catalog();
    let mut session = SearchSession::new(SearchSpec::general());
    let start = Instant::now();

    // "s" is issued, then superseded by "so" before its response lands
    session.on_input("s", start);
    let first = session.poll(start + SETTLE).unwrap();

    session.on_input("so", start + SETTLE);
    let second = session.poll(start + SETTLE * 2).unwrap();

    // The late response for "s" arrives after the newer one
    run_lookup(&mut session, &second, &catalog);
    let outcome = catalog.search(first.kind, &first.text, first.order, first.limit);
    assert!(!session.on_response(first.seq, outcome));

    // Rendered results always reflect "so"
    assert_eq!(session.results().len(), 1);
    assert_eq!(session.results()[0].name, "Sousse");
}

#[test]
fn test_identical_query_twice_renders_identical_results() {
    let (_dir, catalog) = seeded_catalog();
    let mut session = SearchSession::new(SearchSpec::general());

    let now = type_and_settle(&mut session, &catalog, "ar", Instant::now());
    let first: Vec<Place> = session.results().to_vec();
    assert!(!first.is_empty());

    type_and_settle(&mut session, &catalog, "ar", now);
    assert_eq!(session.results(), first.as_slice());
}

#[test]
fn test_results_arrive_in_source_name_order() {
    let (_dir, catalog) = seeded_catalog();
    let mut session = SearchSession::new(SearchSpec::general());

    // "ar" hits Carthage, Bardo Museum and Dar El Jeld
    type_and_settle(&mut session, &catalog, "ar", Instant::now());

    let names: Vec<&str> = session.results().iter().map(|p| p.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_by_key(|n| n.to_lowercase());
    assert_eq!(names, sorted);
}

#[test]
fn test_general_spec_caps_results_at_limit() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::open(dir.path()).unwrap();
    for i in 0..10 {
        catalog
            .insert(&place(
                &format!("{i}"),
                &format!("Sahara Camp {i}"),
                &format!("sahara-camp-{i}"),
                PlaceKind::Attraction,
            ))
            .unwrap();
    }

    let mut session = SearchSession::new(SearchSpec::general());
    type_and_settle(&mut session, &catalog, "sahara", Instant::now());
    assert_eq!(session.results().len(), 5);

    // The city picker is uncapped but kind-filtered
    let mut cities = SearchSession::new(SearchSpec::cities());
    type_and_settle(&mut cities, &catalog, "sahara", Instant::now());
    assert!(cities.results().is_empty());
}

#[test]
fn test_failed_lookup_fails_soft_and_recovers_on_next_keystroke() {
    let (_dir, catalog) = seeded_catalog();
    let mut session = SearchSession::new(SearchSpec::general());
    let start = Instant::now();

    session.on_input("tunis", start);
    let request = session.poll(start + SETTLE).unwrap();
    session.on_response(
        request.seq,
        Err(wayfindr::search::QueryError::Unavailable(
            "connection reset".to_string(),
        )),
    );

    // Fails soft: empty results, error surfaced, nothing thrown
    assert_eq!(session.phase(), Phase::Error);
    assert!(session.results().is_empty());
    assert!(session.error().unwrap().contains("connection reset"));

    // The next keystroke naturally triggers a fresh attempt
    type_and_settle(&mut session, &catalog, "tunis", start + SETTLE);
    assert_eq!(session.phase(), Phase::Displaying);
    assert!(session.error().is_none());
    assert_eq!(session.results()[0].name, "Tunis");
}

#[test]
fn test_no_results_state_is_distinct_from_pending() {
    let (_dir, catalog) = seeded_catalog();
    let mut session = SearchSession::new(SearchSpec::general());
    let start = Instant::now();

    session.on_input("atlantis", start);
    assert!(!session.lookup_settled());

    let request = session.poll(start + SETTLE).unwrap();
    assert!(!session.lookup_settled());

    run_lookup(&mut session, &request, &catalog);
    assert!(session.lookup_settled());
    assert!(session.results().is_empty());
    assert!(session.error().is_none());
}

#[test]
fn test_worker_drives_catalog_lookups_off_the_loop() {
    let (_dir, catalog) = seeded_catalog();
    let worker = SearchWorker::spawn(Arc::new(catalog));
    let mut session = SearchSession::new(SearchSpec::general());
    let start = Instant::now();

    session.on_input("carthage", start);
    let request = session.poll(start + SETTLE).unwrap();
    worker.submit(request);

    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(response) = worker.try_recv() {
            assert!(session.on_response(response.seq, response.outcome));
            break;
        }
        assert!(Instant::now() < deadline, "worker response timed out");
        std::thread::sleep(Duration::from_millis(5));
    }

    assert_eq!(session.phase(), Phase::Displaying);
    assert_eq!(session.results()[0].slug, "carthage");
    assert_eq!(session.select(0).unwrap().path(), "/cities/carthage");
}

#[test]
fn test_import_then_search_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::open(dir.path().join("store")).unwrap();

    let seed_path = dir.path().join("places.json");
    std::fs::write(
        &seed_path,
        r#"[
            {"name": "Kairouan", "kind": "city"},
            {"name": "Great Mosque of Kairouan", "kind": "attraction"}
        ]"#,
    )
    .unwrap();

    let report = import_json(&catalog, &seed_path, None).unwrap();
    assert_eq!(report.imported, 2);

    let mut session = SearchSession::new(SearchSpec::general());
    type_and_settle(&mut session, &catalog, "kairouan", Instant::now());

    assert_eq!(session.results().len(), 2);
    // Derived slugs flow through to routes
    let routes: Vec<String> = (0..2)
        .map(|i| session.select(i).unwrap().path().to_string())
        .collect();
    assert!(routes.contains(&"/attractions/great-mosque-of-kairouan".to_string()));
    assert!(routes.contains(&"/cities/kairouan".to_string()));
}

#[test]
fn test_sort_order_flag_reverses_catalog_scan() {
    let (_dir, catalog) = seeded_catalog();

    let asc = catalog
        .search_name(None, "", SortOrder::NameAsc, None)
        .unwrap();
    let desc = catalog
        .search_name(None, "", SortOrder::NameDesc, None)
        .unwrap();

    let mut reversed = asc;
    reversed.reverse();
    assert_eq!(desc, reversed);
}

#[test]
fn test_unmount_mid_flight_ignores_late_response() {
    let (_dir, catalog) = seeded_catalog();
    let mut session = SearchSession::new(SearchSpec::general());
    let start = Instant::now();

    session.on_input("tunis", start);
    let request = session.poll(start + SETTLE).unwrap();

    // Teardown before the response lands
    session.reset();
    assert_eq!(session.phase(), Phase::Idle);

    let outcome = catalog.search(request.kind, &request.text, request.order, request.limit);
    assert!(!session.on_response(request.seq, outcome));
    assert!(session.results().is_empty());
}
