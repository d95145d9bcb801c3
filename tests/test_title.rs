use subsystem_lint::rules::title::{check_title, TitleVerdict};

#[test]
fn well_formed_title_passes() {
    assert_eq!(
        check_title("ekf2: fix height fusion timeout"),
        TitleVerdict::Accepted
    );
}

#[test]
fn title_without_prefix_fails() {
    let verdict = check_title("fix stuff");
    assert!(!verdict.passed());
    assert_eq!(verdict, TitleVerdict::Malformed("fix stuff".to_string()));
}

#[test]
fn revert_title_passes_unconditionally() {
    let verdict = check_title("Revert \"ekf2: fix height fusion timeout\"");
    assert_eq!(verdict, TitleVerdict::Exempt);
    assert!(verdict.passed());
}

#[test]
fn merge_title_passes() {
    assert!(check_title("Merge branch 'release/1.15'").passed());
}

#[test]
fn description_needs_five_characters() {
    assert!(!check_title("ekf2: fix").passed());
    assert!(check_title("ekf2: fixes").passed());
}

#[test]
fn blank_title_is_empty() {
    let verdict = check_title("   ");
    assert_eq!(verdict, TitleVerdict::Empty);
    assert_eq!(verdict.diagnostic().as_deref(), Some("PR title is empty."));
}

#[test]
fn title_is_trimmed_before_matching() {
    assert!(check_title("  mavlink: add BATTERY_STATUS_V2 support \n").passed());
}

#[test]
fn rejection_diagnostic_shows_title_and_examples() {
    let diagnostic = check_title("  Update file ").diagnostic().unwrap();
    assert!(diagnostic.contains("  Title: Update file\n"));
    assert!(diagnostic.contains("Good examples:"));
    assert!(diagnostic.contains("ekf2: fix height fusion timeout"));
    assert!(diagnostic.contains("Bad examples:"));
}

#[test]
fn passing_title_has_no_diagnostic() {
    assert!(check_title("CI: migrate to reusable workflows")
        .diagnostic()
        .is_none());
}
