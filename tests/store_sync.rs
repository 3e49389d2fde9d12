// tests/store_sync.rs
//
// Report Store semantics: every sync result leaves the store in either the
// previous valid report list or the documented fallback — never undefined.

use dairyscan::report::LabReport;
use dairyscan::store::{Phase, ReportStore};
use dairyscan::sync::SyncOutcome;

fn report(date: &str) -> LabReport {
    LabReport {
        date: date.into(),
        fat: "6.2%".into(),
        snf: "8.8%".into(),
        status: "PASS".into(),
        fssai: "APPROVED".into(),
        file_url: String::new(),
        file_name: "Daily_Quality_Report.pdf".into(),
    }
}

#[test]
fn first_failure_installs_fallback() {
    let mut store = ReportStore::default();
    assert_eq!(store.phase(), Phase::NeverSynced);

    store.apply(Err("connection refused".into()));

    assert_eq!(store.phase(), Phase::Ready);
    assert!(store.notice().is_some());
    let shown = store.current().expect("fallback record displayed");
    assert_eq!(shown.fat, "6.2%");
    assert_eq!(shown.status, "PASS");
}

#[test]
fn failure_never_clears_last_good_report() {
    let mut store = ReportStore::default();
    store.apply(Ok(SyncOutcome::Reports(vec![report("01 Feb"), report("02 Feb")])));
    assert_eq!(store.reports().len(), 2);
    assert!(store.notice().is_none());

    store.apply(Err("timed out".into()));

    // Previous reports retained, notice surfaced alongside them.
    assert_eq!(store.reports().len(), 2);
    assert_eq!(store.current().unwrap().date, "02 Feb");
    assert!(store.notice().unwrap().contains("timed out"));
}

#[test]
fn success_replaces_wholesale_and_selects_latest() {
    let mut store = ReportStore::default();
    store.apply(Ok(SyncOutcome::Reports(vec![report("01 Feb")])));
    store.select(0);

    store.apply(Ok(SyncOutcome::Reports(vec![
        report("01 Feb"),
        report("02 Feb"),
        report("03 Feb"),
    ])));

    assert_eq!(store.reports().len(), 3);
    assert_eq!(store.current().unwrap().date, "03 Feb");
    assert_eq!(store.latest().unwrap().date, "03 Feb");
}

#[test]
fn success_clears_previous_notice() {
    let mut store = ReportStore::default();
    store.apply(Err("down".into()));
    assert!(store.notice().is_some());

    store.apply(Ok(SyncOutcome::Reports(vec![report("02 Feb")])));
    assert!(store.notice().is_none());
}

#[test]
fn no_data_is_empty_state_not_error() {
    let mut store = ReportStore::default();
    store.apply(Ok(SyncOutcome::NoData));

    assert_eq!(store.phase(), Phase::Empty);
    assert!(store.notice().is_none());
    assert!(store.current().is_none());
}

#[test]
fn history_selection_snaps_into_range() {
    let mut store = ReportStore::default();
    store.apply(Ok(SyncOutcome::Reports(vec![report("01 Feb"), report("02 Feb")])));

    store.select(0);
    assert_eq!(store.current().unwrap().date, "01 Feb");

    store.select(99);
    assert_eq!(store.current().unwrap().date, "02 Feb");
}

#[test]
fn notice_is_dismissible() {
    let mut store = ReportStore::default();
    store.apply(Err("down".into()));
    store.dismiss_notice();
    assert!(store.notice().is_none());
    // dismissing does not touch the displayed record
    assert!(store.current().is_some());
}
