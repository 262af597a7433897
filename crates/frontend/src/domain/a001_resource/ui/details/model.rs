//! Data access for the resource page: API calls and example sources

use crate::shared::api_utils::api_base;
use contracts::domain::a001_resource::{
    CodeExample, ResourceDetails, ResourceQuery, ResourceVersion,
};
use gloo_net::http::Request;
use std::future::Future;

// ============================================================================
// API
// ============================================================================

/// Load a resource with its dynamic tabs
pub async fn fetch_details(id: &str, query: &ResourceQuery) -> Result<ResourceDetails, String> {
    let mut url = format!("{}/api/resources/{}", api_base(), urlencoding::encode(id));
    let query_string = serde_qs::to_string(query).map_err(|e| format!("Bad query: {}", e))?;
    if !query_string.is_empty() {
        url.push('?');
        url.push_str(&query_string);
    }

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == 404 {
        return Err(format!("Resource '{}' not found", id));
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Load the published versions of a resource
pub async fn fetch_versions(id: &str, database: &str) -> Result<Vec<ResourceVersion>, String> {
    let url = format!(
        "{}/api/resources/{}/versions?database={}",
        api_base(),
        urlencoding::encode(id),
        urlencoding::encode(database)
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// GET a URL and return its body as text
pub async fn fetch_text(url: &str) -> Result<String, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

// ============================================================================
// Raw GitHub content
// ============================================================================

/// Browser URL of a GitHub file -> URL of its raw content.
pub fn raw_url(url: &str) -> String {
    url.replacen("github.com", "raw.githubusercontent.com", 1)
        .replacen("tree/", "", 1)
}

/// Raw URL of `file` inside the directory a resource's source URL points to.
///
/// Repository roots carry no branch, so `HEAD` is used for them.
pub fn document_url(source_url: &str, file: &str) -> String {
    let base = source_url.trim_end_matches('/');
    if base.contains("/tree/") {
        format!("{}/{}", raw_url(base), file)
    } else {
        format!("{}/HEAD/{}", raw_url(base), file)
    }
}

// ============================================================================
// Example sources
// ============================================================================

/// Fetched source of one code example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleEntry {
    /// Original (browser) URL of the example
    pub url: String,
    pub content: String,
    pub tested: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleFailure {
    pub url: String,
    pub error: String,
}

/// Result of fetching every example of a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleBatch {
    pub entries: Vec<ExampleEntry>,
    pub failures: Vec<ExampleFailure>,
}

/// Where example sources come from.
pub trait ExampleSource {
    fn fetch_text(&self, url: &str) -> impl Future<Output = Result<String, String>>;
}

/// Fetches examples over HTTP from the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpExampleSource;

impl ExampleSource for HttpExampleSource {
    async fn fetch_text(&self, url: &str) -> Result<String, String> {
        fetch_text(url).await
    }
}

/// Fetch every example, one after another, in list order.
///
/// A failing example is recorded in `failures` and does not stop the
/// remaining ones.
pub async fn fetch_examples<S: ExampleSource>(source: &S, examples: &[CodeExample]) -> ExampleBatch {
    let mut batch = ExampleBatch::default();

    for example in examples {
        let url = raw_url(&example.example);
        match source.fetch_text(&url).await {
            Ok(content) => batch.entries.push(ExampleEntry {
                url: example.example.clone(),
                content,
                tested: example.tested,
            }),
            Err(error) => {
                log::warn!("example {} could not be fetched: {}", url, error);
                batch.failures.push(ExampleFailure {
                    url: example.example.clone(),
                    error,
                });
            }
        }
    }

    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeSource {
        responses: HashMap<String, Result<String, String>>,
        requested: RefCell<Vec<String>>,
    }

    impl FakeSource {
        fn with(mut self, url: &str, response: Result<&str, &str>) -> Self {
            self.responses.insert(
                url.to_string(),
                response.map(str::to_string).map_err(str::to_string),
            );
            self
        }
    }

    impl ExampleSource for FakeSource {
        async fn fetch_text(&self, url: &str) -> Result<String, String> {
            self.requested.borrow_mut().push(url.to_string());
            self.responses
                .get(url)
                .cloned()
                .unwrap_or_else(|| Err("HTTP error: 404".to_string()))
        }
    }

    fn example(url: &str, tested: bool) -> CodeExample {
        CodeExample {
            example: url.to_string(),
            tested,
            ..Default::default()
        }
    }

    #[test]
    fn test_raw_url() {
        assert_eq!(
            raw_url("https://github.com/org/repo/tree/main/ex1.py"),
            "https://raw.githubusercontent.com/org/repo/main/ex1.py"
        );
        // already raw
        assert_eq!(
            raw_url("https://raw.githubusercontent.com/org/repo/main/ex1.py"),
            "https://raw.githubusercontent.com/org/repo/main/ex1.py"
        );
    }

    #[test]
    fn test_document_url() {
        assert_eq!(
            document_url("https://github.com/org/repo/tree/main/modules/db/", "README.md"),
            "https://raw.githubusercontent.com/org/repo/main/modules/db/README.md"
        );
        assert_eq!(
            document_url("https://github.com/org/repo", "CHANGELOG.md"),
            "https://raw.githubusercontent.com/org/repo/HEAD/CHANGELOG.md"
        );
    }

    #[tokio::test]
    async fn test_fetch_examples_uses_raw_url_and_keeps_original() {
        let source = FakeSource::default().with(
            "https://raw.githubusercontent.com/org/repo/main/ex1.py",
            Ok("print('hi')"),
        );
        let examples = vec![example("https://github.com/org/repo/tree/main/ex1.py", true)];

        let batch = fetch_examples(&source, &examples).await;

        assert_eq!(
            source.requested.borrow().as_slice(),
            ["https://raw.githubusercontent.com/org/repo/main/ex1.py".to_string()]
        );
        assert_eq!(
            batch.entries,
            vec![ExampleEntry {
                url: "https://github.com/org/repo/tree/main/ex1.py".to_string(),
                content: "print('hi')".to_string(),
                tested: true,
            }]
        );
        assert!(batch.failures.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_examples_keeps_order_and_isolates_failures() {
        let source = FakeSource::default()
            .with("https://raw.githubusercontent.com/o/r/main/a.py", Ok("a"))
            .with("https://raw.githubusercontent.com/o/r/main/c.py", Ok("c"));
        let examples = vec![
            example("https://github.com/o/r/tree/main/a.py", true),
            example("https://github.com/o/r/tree/main/b.py", false),
            example("https://github.com/o/r/tree/main/c.py", false),
        ];

        let batch = fetch_examples(&source, &examples).await;

        assert_eq!(source.requested.borrow().len(), 3);
        let contents: Vec<_> = batch.entries.iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, ["a", "c"]);
        assert_eq!(batch.failures.len(), 1);
        assert_eq!(batch.failures[0].url, "https://github.com/o/r/tree/main/b.py");
    }

    #[tokio::test]
    async fn test_fetch_examples_without_examples_requests_nothing() {
        let source = FakeSource::default();
        let batch = fetch_examples(&source, &[]).await;
        assert!(source.requested.borrow().is_empty());
        assert_eq!(batch, ExampleBatch::default());
    }
}
