//! Listing integration tests: filters, ordering and pagination.

use super::helpers::{TestTracker, companies, seed_companies, tracker};
use jobtrack::job::domain::{JobQuery, JobSort, JobStatus};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn default_listing_is_newest_first(tracker: TestTracker) {
    seed_companies(&tracker).await;

    let jobs = tracker.list(&JobQuery::new()).await.expect("list should succeed");

    assert_eq!(companies(&jobs), vec!["Initech", "Globex", "Acme Labs", "Acme"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_filter_is_exact(tracker: TestTracker) {
    seed_companies(&tracker).await;

    let jobs = tracker
        .list(&JobQuery::new().with_status(JobStatus::Interview))
        .await
        .expect("list should succeed");

    assert_eq!(companies(&jobs), vec!["Acme Labs"]);
    assert!(jobs.iter().all(|job| job.status() == JobStatus::Interview));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn company_filter_matches_substrings(tracker: TestTracker) {
    seed_companies(&tracker).await;

    let jobs = tracker
        .list(&JobQuery::new().with_company("Acme").with_sort(JobSort::resolve("id")))
        .await
        .expect("list should succeed");

    assert_eq!(companies(&jobs), vec!["Acme", "Acme Labs"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn free_text_matches_company_without_company_filter(tracker: TestTracker) {
    seed_companies(&tracker).await;

    let jobs = tracker
        .list(&JobQuery::new().with_text("Glob"))
        .await
        .expect("list should succeed");

    assert_eq!(companies(&jobs), vec!["Globex"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pages_are_disjoint_and_consecutive(tracker: TestTracker) {
    let seeded = seed_companies(&tracker).await;
    let by_id = JobQuery::new().with_sort(JobSort::resolve("id")).with_limit(2);

    let first = tracker
        .list(&by_id.clone().with_offset(0))
        .await
        .expect("first page");
    let second = tracker
        .list(&by_id.clone().with_offset(2))
        .await
        .expect("second page");
    let beyond = tracker
        .list(&by_id.with_offset(10))
        .await
        .expect("page past the end");

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
    assert!(beyond.is_empty());
    let paged: Vec<_> = first.iter().chain(&second).map(|job| job.id()).collect();
    let expected: Vec<_> = seeded.iter().map(|job| job.id()).collect();
    assert_eq!(paged, expected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn title_sort_descending(tracker: TestTracker) {
    seed_companies(&tracker).await;

    let jobs = tracker
        .list(&JobQuery::new().with_sort(JobSort::resolve("-title")))
        .await
        .expect("list should succeed");

    let titles: Vec<_> = jobs.iter().map(|job| job.title().as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Site Reliability Engineer",
            "Frontend Engineer",
            "Data Engineer",
            "Backend Engineer",
        ]
    );
}
