use folio_core::{sort_newest_first, Project};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

pub type LoadResult<T> = Result<T, LoadError>;

/// Single failure channel for the loading pipeline. Network, status and
/// decode failures all surface here; callers do not distinguish subtypes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadError {
    pub message: String,
}

impl LoadError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchPolicy {
    #[serde(default = "default_fetch_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_fetch_timeout_ms() -> u64 {
    5000
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            timeout_ms: default_fetch_timeout_ms(),
        }
    }
}

/// Canned response consulted before the network, keyed by URL.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

/// The project collection endpoint. Every fetch is a fresh request with
/// cache-bypass headers; nothing is retained between calls.
#[derive(Debug, Clone)]
pub struct ProjectSource {
    url: String,
    policy: FetchPolicy,
    mocks: HashMap<String, MockResponse>,
}

impl ProjectSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            policy: FetchPolicy::default(),
            mocks: HashMap::new(),
        }
    }

    pub fn with_policy(mut self, policy: FetchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.policy.timeout_ms = timeout_ms;
        self
    }

    pub fn with_mock(mut self, url: impl Into<String>, mock: MockResponse) -> Self {
        self.mocks.insert(url.into(), mock);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Display name of the data resource: the last path segment of the URL,
    /// with query and fragment stripped.
    pub fn resource_name(&self) -> &str {
        let without_query = self.url.split(['?', '#']).next().unwrap_or(&self.url);
        without_query
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or(without_query)
    }

    /// One GET against the origin, decoded as a project list and returned
    /// newest-first as a fresh vector.
    pub fn fetch_sorted(&self) -> LoadResult<Vec<Project>> {
        let body = self.fetch_body()?;
        let projects = Project::list_from_json(&body).map_err(|e| {
            LoadError::new(format!(
                "failed to parse {} as a project list: {e}",
                self.resource_name()
            ))
        })?;
        Ok(sort_newest_first(&projects))
    }

    fn fetch_body(&self) -> LoadResult<String> {
        if let Some(mock) = self.mocks.get(&self.url) {
            if (200..300).contains(&mock.status) {
                return Ok(mock.body.clone());
            }
            return Err(self.status_error(mock.status));
        }

        let timeout = Duration::from_millis(self.policy.timeout_ms.max(1));
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .build();

        // Always revalidate against the origin, never a stale cached copy.
        let response = agent
            .get(&self.url)
            .set("cache-control", "no-cache")
            .set("pragma", "no-cache")
            .call();

        match response {
            Ok(resp) => resp.into_string().map_err(|e| {
                LoadError::new(format!(
                    "failed to read {} response body: {e}",
                    self.resource_name()
                ))
            }),
            Err(ureq::Error::Status(code, _resp)) => Err(self.status_error(code)),
            Err(ureq::Error::Transport(err)) => Err(LoadError::new(format!(
                "http transport error for {}: {err}",
                self.url
            ))),
        }
    }

    fn status_error(&self, status: u16) -> LoadError {
        LoadError::new(format!(
            "could not load {} (status {status})",
            self.resource_name()
        ))
    }
}
