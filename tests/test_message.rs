use subsystem_lint::config::RuleSet;
use subsystem_lint::finding::Classification;
use subsystem_lint::rules::message::{self, check_commit, suggest_fix};

fn check(msg: &str) -> Classification {
    check_commit(msg, &RuleSet::default())
}

fn error_ids(result: &Classification) -> Vec<&'static str> {
    result.errors.iter().map(|f| f.rule_id).collect()
}

fn warning_ids(result: &Classification) -> Vec<&'static str> {
    result.warnings.iter().map(|f| f.rule_id).collect()
}

// --- Blocking rules ---

#[test]
fn fixup_prefixes_in_any_case_yield_one_unsquashed_error() {
    for msg in [
        "fixup! ekf2: fix height fusion timeout",
        "squash! anything",
        "amend! anything",
        "FIXUP! anything",
        "Squash! anything",
    ] {
        let result = check(msg);
        let unsquashed: Vec<_> = result
            .errors
            .iter()
            .filter(|f| f.rule_id == message::UNSQUASHED)
            .collect();
        assert_eq!(unsquashed.len(), 1, "for {msg:?}: {:?}", result.errors);
    }
}

#[test]
fn unsquashed_error_names_the_prefix() {
    let result = check("squash! mavlink: tweak");
    assert_eq!(
        result.errors[0].message,
        "Unsquashed commit: starts with \"squash!\""
    );
}

#[test]
fn wip_variants_are_blocked() {
    for msg in ["WIP: trying something", "wip more work", "Wip"] {
        let result = check(msg);
        assert!(
            error_ids(&result).contains(&message::WIP),
            "for {msg:?}: {:?}",
            result.errors
        );
    }
}

#[test]
fn wip_as_part_of_a_word_is_not_blocked() {
    let result = check("wipe: clear parameter storage");
    assert!(!error_ids(&result).contains(&message::WIP));
}

#[test]
fn bare_wip_fires_wip_and_throwaway_errors() {
    let result = check("wip");
    let ids = error_ids(&result);
    assert!(ids.contains(&message::WIP));
    assert!(ids.contains(&message::THROWAWAY));
    assert!(ids.contains(&message::TOO_SHORT));
}

#[test]
fn throwaway_words_match_case_insensitively() {
    for msg in ["fix", "Fixed", "UPDATE", "tmp", "oops", "cleanup", "  testing  "] {
        let result = check(msg);
        assert!(
            error_ids(&result).contains(&message::THROWAWAY),
            "for {msg:?}: {:?}",
            result.errors
        );
    }
}

#[test]
fn throwaway_message_quotes_the_subject() {
    let result = check("Cleanup");
    let finding = result
        .errors
        .iter()
        .find(|f| f.rule_id == message::THROWAWAY)
        .unwrap();
    assert_eq!(finding.message, "Single-word throwaway message: \"Cleanup\"");
}

#[test]
fn single_character_subject_has_only_length_error_and_prefix_warning() {
    let result = check("a");
    assert_eq!(error_ids(&result), vec![message::TOO_SHORT]);
    assert_eq!(result.errors[0].message, "Message too short (1 chars, minimum 5)");
    assert_eq!(warning_ids(&result), vec![message::MISSING_SUBSYSTEM]);
}

#[test]
fn empty_message_is_too_short_but_not_throwaway() {
    let result = check("");
    assert_eq!(error_ids(&result), vec![message::TOO_SHORT]);
}

#[test]
fn length_counts_characters_not_bytes() {
    let result = check("äöüß");
    assert!(result.errors[0].message.contains("(4 chars"));
}

#[test]
fn debug_leftover_is_blocked() {
    let result = check("ci: enable tmate session");
    assert_eq!(error_ids(&result), vec![message::DEBUG_LEFTOVER]);
    assert_eq!(
        result.errors[0].message,
        "Debug session leftover: contains \"tmate\""
    );
}

#[test]
fn min_length_is_configurable() {
    let rules = RuleSet {
        min_length: 12,
        ..RuleSet::default()
    };
    let result = check_commit("ekf2: fix it", &rules);
    assert!(result.is_clean(), "{result:?}");
    let result = check_commit("ekf2: fixes", &rules);
    assert_eq!(
        result.errors[0].message,
        "Message too short (11 chars, minimum 12)"
    );
}

// --- Advisory rules ---

#[test]
fn review_response_warns_once() {
    let result = check("Apply suggestions from code review");
    let review: Vec<_> = result
        .warnings
        .iter()
        .filter(|f| f.rule_id == message::REVIEW_RESPONSE)
        .collect();
    assert_eq!(review.len(), 1);
    assert!(result.errors.is_empty());
}

#[test]
fn formatter_only_warns_once() {
    let result = check("sensors: do make format");
    assert_eq!(warning_ids(&result), vec![message::FORMATTER_ONLY]);
}

#[test]
fn update_file_only_misses_subsystem_prefix() {
    let result = check("Update file");
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert_eq!(warning_ids(&result), vec![message::MISSING_SUBSYSTEM]);
}

#[test]
fn merge_and_revert_are_exempt_from_prefix_warning() {
    for msg in [
        "Merge pull request #1",
        "Merge branch 'main' into feature",
        "Revert \"ekf2: fix height fusion timeout\"",
    ] {
        let result = check(msg);
        assert!(
            !warning_ids(&result).contains(&message::MISSING_SUBSYSTEM),
            "for {msg:?}"
        );
    }
}

#[test]
fn lowercase_merge_is_not_exempt() {
    let result = check("merge stuff together");
    assert!(warning_ids(&result).contains(&message::MISSING_SUBSYSTEM));
}

#[test]
fn subsystem_prefix_accepts_paths_and_dots() {
    for msg in [
        "boards/px4_fmu-v6x: enable UAVCAN",
        "drivers/gps.ubx: parse NAV-PVT",
        "CI: migrate to reusable workflows",
    ] {
        assert!(check(msg).is_clean(), "for {msg:?}");
    }
}

#[test]
fn prefix_must_start_with_letter() {
    let result = check("1ekf2: fix height fusion timeout");
    assert_eq!(warning_ids(&result), vec![message::MISSING_SUBSYSTEM]);
}

// --- Whole-message behavior ---

#[test]
fn well_formed_subject_is_clean() {
    assert!(check("ekf2: fix height fusion timeout").is_clean());
}

#[test]
fn only_the_subject_line_is_checked() {
    let result = check("ekf2: fix height fusion timeout\n\nfixup! wip tmate make format");
    assert!(result.is_clean());
}

#[test]
fn subject_is_trimmed() {
    assert!(check("  ekf2: fix height fusion timeout  \r\nbody").is_clean());
}

#[test]
fn all_matching_rules_fire_in_order() {
    let result = check("fixup! tmate");
    assert_eq!(
        error_ids(&result),
        vec![message::UNSQUASHED, message::DEBUG_LEFTOVER]
    );
}

#[test]
fn classification_is_idempotent() {
    let rules = RuleSet::default();
    for msg in ["wip", "Update file", "ekf2: fix", "fixup! x", "address review"] {
        assert_eq!(check_commit(msg, &rules), check_commit(msg, &rules));
    }
}

// --- Suggestions ---

#[test]
fn suggestion_follows_rule_priority() {
    let rules = RuleSet::default();
    assert_eq!(
        suggest_fix("fixup! wip", &rules),
        Some("Squash this into the commit it fixes")
    );
    assert_eq!(
        suggest_fix("WIP: trying something", &rules),
        Some("Squash into parent or reword with a descriptive message")
    );
    assert_eq!(
        suggest_fix("oops", &rules),
        Some("Reword with a descriptive message (e.g. \"subsystem: what changed\")")
    );
    assert_eq!(
        suggest_fix("cleanup", &rules),
        Some("Reword with a descriptive message (e.g. \"subsystem: what changed\")")
    );
}

#[test]
fn no_suggestion_for_debug_leftover() {
    assert_eq!(suggest_fix("ci: enable tmate session", &RuleSet::default()), None);
}
