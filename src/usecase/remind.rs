use crate::domain::pr::{PullRequest, Recipient};

/// Keep only PRs that still have at least one pending reviewer or team.
pub fn with_pending_reviewers(prs: Vec<PullRequest>) -> Vec<PullRequest> {
    prs.into_iter()
        .filter(PullRequest::has_pending_reviewers)
        .collect()
}

/// Day difference between the PR creation time and now: ceil of a negative
/// quotient, so a PR open for 4.5 days yields -4 and one open for exactly
/// 5 days yields -5.
fn day_diff(created_at_unix: i64, now_unix: i64) -> f64 {
    ((created_at_unix - now_unix) as f64 / 86_400.0).ceil()
}

/// Whether the PR has been waiting long enough to warrant a reminder.
///
/// Compares the ceil'd negative day difference against
/// `(waiting_time - 1) * -1`; in effect a PR qualifies once it has been open
/// for `waiting_time` full days. An unparseable creation timestamp counts as
/// old enough.
fn is_waiting_long_enough(pr: &PullRequest, now_unix: i64, waiting_time_days: i64) -> bool {
    let Some(created) = pr.created_at_unix else {
        return true;
    };
    day_diff(created, now_unix) < ((waiting_time_days - 1) as f64) * -1.0
}

/// Drop PRs that carry the ignore label, are drafts, or are too young.
/// Order-preserving. An empty `ignore_label` matches nothing.
pub fn eligible(
    prs: Vec<PullRequest>,
    ignore_label: &str,
    waiting_time_days: i64,
    now_unix: i64,
) -> Vec<PullRequest> {
    prs.into_iter()
        .filter(|pr| ignore_label.is_empty() || pr.labels.iter().all(|l| l != ignore_label))
        .filter(|pr| !pr.is_draft)
        .filter(|pr| is_waiting_long_enough(pr, now_unix, waiting_time_days))
        .collect()
}

/// Flatten eligible PRs into one `Recipient` per pending reviewer, then one
/// per pending team, preserving PR order. No deduplication across PRs.
pub fn expand_recipients(prs: &[PullRequest]) -> Vec<Recipient> {
    let mut out = Vec::new();
    for pr in prs {
        for login in pr
            .requested_reviewers
            .iter()
            .chain(pr.requested_teams.iter())
        {
            out.push(Recipient {
                url: pr.url.clone(),
                title: pr.title.clone(),
                login: login.clone(),
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;
    const NOW: i64 = 1_700_000_000;

    fn pr(title: &str) -> PullRequest {
        PullRequest {
            title: title.to_string(),
            url: format!("https://github.com/o/r/pull/{title}"),
            created_at_unix: Some(NOW - 10 * DAY),
            is_draft: false,
            labels: Vec::new(),
            requested_reviewers: vec!["bob".to_string()],
            requested_teams: Vec::new(),
        }
    }

    #[test]
    fn drops_prs_with_no_pending_reviewers() {
        let mut quiet = pr("quiet");
        quiet.requested_reviewers.clear();
        let kept = with_pending_reviewers(vec![quiet, pr("loud")]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "loud");
    }

    #[test]
    fn team_request_alone_counts_as_pending() {
        let mut teamed = pr("teamed");
        teamed.requested_reviewers.clear();
        teamed.requested_teams.push("platform".to_string());
        assert_eq!(with_pending_reviewers(vec![teamed]).len(), 1);
    }

    #[test]
    fn ignore_label_excludes_regardless_of_age() {
        let mut labeled = pr("labeled");
        labeled.labels.push("no-reminder".to_string());
        assert!(eligible(vec![labeled], "no-reminder", 1, NOW).is_empty());
    }

    #[test]
    fn ignore_label_match_is_case_sensitive() {
        let mut labeled = pr("labeled");
        labeled.labels.push("No-Reminder".to_string());
        assert_eq!(eligible(vec![labeled], "no-reminder", 1, NOW).len(), 1);
    }

    #[test]
    fn empty_ignore_label_excludes_nothing() {
        let mut labeled = pr("labeled");
        labeled.labels.push("anything".to_string());
        assert_eq!(eligible(vec![labeled], "", 1, NOW).len(), 1);
    }

    #[test]
    fn drafts_are_excluded() {
        let mut draft = pr("draft");
        draft.is_draft = true;
        assert!(eligible(vec![draft], "", 1, NOW).is_empty());
    }

    #[test]
    fn young_prs_are_excluded() {
        let mut fresh = pr("fresh");
        fresh.created_at_unix = Some(NOW - 2 * DAY);
        assert!(eligible(vec![fresh], "", 5, NOW).is_empty());
    }

    #[test]
    fn pr_open_ten_days_passes_waiting_time_five() {
        assert_eq!(eligible(vec![pr("old")], "", 5, NOW).len(), 1);
    }

    #[test]
    fn threshold_boundary_matches_original_arithmetic() {
        // With waiting_time=5, 4.5 days rounds up to -4 (excluded) and a
        // full 5 days lands on -5 (included).
        let mut almost = pr("almost");
        almost.created_at_unix = Some(NOW - 4 * DAY - DAY / 2);
        assert!(eligible(vec![almost], "", 5, NOW).is_empty());

        let mut exact = pr("exact");
        exact.created_at_unix = Some(NOW - 5 * DAY);
        assert_eq!(eligible(vec![exact], "", 5, NOW).len(), 1);
    }

    #[test]
    fn unparseable_timestamp_counts_as_old_enough() {
        let mut dateless = pr("dateless");
        dateless.created_at_unix = None;
        assert_eq!(eligible(vec![dateless], "", 30, NOW).len(), 1);
    }

    #[test]
    fn eligibility_preserves_input_order() {
        let kept = eligible(vec![pr("a"), pr("b"), pr("c")], "", 1, NOW);
        let titles: Vec<_> = kept.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[test]
    fn expansion_cardinality_is_sum_of_reviewers_and_teams() {
        let mut one = pr("one");
        one.requested_reviewers = vec!["bob".to_string(), "ann".to_string()];
        one.requested_teams = vec!["platform".to_string()];
        let two = pr("two");
        let recipients = expand_recipients(&[one, two]);
        assert_eq!(recipients.len(), 4);
    }

    #[test]
    fn expansion_puts_reviewers_before_teams_within_a_pr() {
        let mut mixed = pr("mixed");
        mixed.requested_reviewers = vec!["bob".to_string()];
        mixed.requested_teams = vec!["platform".to_string()];
        let logins: Vec<_> = expand_recipients(&[mixed])
            .into_iter()
            .map(|r| r.login)
            .collect();
        assert_eq!(logins, ["bob", "platform"]);
    }

    #[test]
    fn same_login_across_prs_is_not_deduplicated() {
        let recipients = expand_recipients(&[pr("one"), pr("two")]);
        assert_eq!(recipients.len(), 2);
        assert!(recipients.iter().all(|r| r.login == "bob"));
    }

    #[test]
    fn full_filter_chain_keeps_exactly_the_waiting_pr() {
        let mut quiet = pr("quiet");
        quiet.requested_reviewers.clear();
        let mut draft = pr("draft");
        draft.is_draft = true;
        let waiting = pr("waiting");

        let prs = with_pending_reviewers(vec![quiet, draft, waiting]);
        let prs = eligible(prs, "", 5, NOW);
        let recipients = expand_recipients(&prs);
        assert_eq!(recipients.len(), 1);
        assert_eq!(recipients[0].title, "waiting");
        assert_eq!(recipients[0].login, "bob");
    }
}
