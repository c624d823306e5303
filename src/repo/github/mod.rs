pub mod auth;
pub mod model;

use anyhow::{Result, anyhow};
use octocrab::Octocrab;

use crate::domain::pr::PullRequest;
use model::PullRequestNode;

#[derive(Debug, serde::Serialize)]
struct ListParams {
    state: &'static str,
    per_page: u8,
}

/// Fetch the open pull requests of one repository.
///
/// One page of up to 100 PRs; this tool deliberately does not paginate.
pub async fn fetch_open_prs(octo: &Octocrab, owner: &str, repo: &str) -> Result<Vec<PullRequest>> {
    let params = ListParams {
        state: "open",
        per_page: 100,
    };
    let nodes: Vec<PullRequestNode> = octo
        .get(format!("/repos/{owner}/{repo}/pulls"), Some(&params))
        .await
        .map_err(|e| anyhow!("GitHub open-PR listing for {owner}/{repo} failed: {e:?}"))?;

    Ok(nodes
        .into_iter()
        .map(PullRequestNode::into_pull_request)
        .collect())
}

/// Build the GitHub client from a personal token, pointing it at a GHES
/// instance when `api_base` is set.
pub fn build_client(token: String, api_base: Option<&str>) -> Result<Octocrab> {
    let mut builder = Octocrab::builder().personal_token(token);
    if let Some(api) = api_base {
        builder = builder
            .base_uri(api)
            .map_err(|e| anyhow!("invalid GitHub API base {api}: {e}"))?;
    }
    builder
        .build()
        .map_err(|e| anyhow!("failed to init GitHub client: {e}"))
}
