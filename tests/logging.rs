// tests/logging.rs

use dagprogress::logging::{LogLevel, init_logging};

#[test]
fn logging_installs_once() {
    init_logging(Some(LogLevel::Debug)).expect("first install should succeed");

    let second = init_logging(None);
    assert!(second.is_err(), "a second global subscriber must be refused");

    // Library events flow through the installed subscriber without issue.
    let progresses = dagprogress::compute_progress(&std::collections::BTreeMap::from([(
        "a",
        vec!["b"],
    )]))
    .unwrap();
    assert_eq!(progresses.len(), 2);
}
