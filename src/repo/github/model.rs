use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::domain::pr::PullRequest;

// Wire shapes for GET /repos/{owner}/{repo}/pulls. Only the fields the
// reminder reads; everything else in the payload is ignored.

#[derive(Debug, serde::Deserialize)]
pub struct UserNode {
    pub login: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct TeamNode {
    pub slug: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct LabelNode {
    pub name: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct PullRequestNode {
    pub title: String,
    pub html_url: String,
    pub created_at: Option<String>,
    pub draft: Option<bool>,
    #[serde(default)]
    pub labels: Vec<LabelNode>,
    #[serde(default)]
    pub requested_reviewers: Vec<UserNode>,
    #[serde(default)]
    pub requested_teams: Vec<TeamNode>,
}

fn parse_created_at(raw: &str) -> Option<i64> {
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .map(OffsetDateTime::unix_timestamp)
}

impl PullRequestNode {
    /// Lossy conversion into the domain type. A missing or malformed
    /// `created_at` becomes `None`, which the eligibility filter treats as
    /// old enough.
    pub fn into_pull_request(self) -> PullRequest {
        PullRequest {
            title: self.title,
            url: self.html_url,
            created_at_unix: self.created_at.as_deref().and_then(parse_created_at),
            is_draft: self.draft.unwrap_or(false),
            labels: self.labels.into_iter().map(|l| l.name).collect(),
            requested_reviewers: self
                .requested_reviewers
                .into_iter()
                .map(|u| u.login)
                .collect(),
            requested_teams: self.requested_teams.into_iter().map(|t| t.slug).collect(),
        }
    }
}
