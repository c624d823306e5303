/// An open pull request, reduced to the fields the reminder cares about.
#[derive(Debug, Clone)]
pub struct PullRequest {
    pub title: String,
    pub url: String,
    /// Unix seconds; `None` when GitHub handed us an unparseable timestamp.
    pub created_at_unix: Option<i64>,
    pub is_draft: bool,
    pub labels: Vec<String>,
    /// Logins of users whose review is still pending.
    pub requested_reviewers: Vec<String>,
    /// Slugs of teams whose review is still pending.
    pub requested_teams: Vec<String>,
}

impl PullRequest {
    pub fn has_pending_reviewers(&self) -> bool {
        !self.requested_reviewers.is_empty() || !self.requested_teams.is_empty()
    }
}

/// One reminder target: a pending reviewer (or team) on one pull request.
/// A login that reviews several stale PRs appears once per PR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub url: String,
    pub title: String,
    pub login: String,
}
