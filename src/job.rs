//! One search run: directory check, search, optional download.

use std::io::Write;
use std::path::PathBuf;

use crate::api::{SearchApi, SearchResults};
use crate::config::Config;
use crate::download::download_results;
use crate::error::Result;
use crate::fs::ensure_output_dir;
use crate::output::{create_spinner, print_search_stats, write_results};

/// What to search for and what to do with the hits.
#[derive(Debug, Clone)]
pub struct Job {
    pub query: String,
    /// Download every hit after searching.
    pub download: bool,
    pub output_dir: PathBuf,
    /// Show the spinner and summaries on the terminal.
    pub interactive: bool,
}

/// Result of a completed job.
#[derive(Debug)]
pub struct Outcome {
    pub results: SearchResults,
    /// Files written, in result order. Empty unless downloading.
    pub downloaded: Vec<PathBuf>,
}

/// Run `job` against the configured API.
///
/// The result listing (search only) or the progress bar (download) is
/// written to `out`.
pub async fn run<W: Write>(config: &Config, job: &Job, out: &mut W) -> Result<Outcome> {
    // Checked up front so a missing directory fails before any request.
    ensure_output_dir(&job.output_dir)?;

    let url = config.search_url(&job.query)?;
    let api = SearchApi::new(config.api_key.clone(), config.proxy())?;

    tracing::info!("Searching: {}", job.query);

    let results = if job.interactive {
        let spinner = create_spinner("Searching...");
        let results = api.search(&url).await;
        spinner.finish_and_clear();
        results?
    } else {
        api.search(&url).await?
    };

    if job.interactive {
        print_search_stats(&results);
    }

    let downloaded = if job.download {
        download_results(&api, config, &results, &job.output_dir, out).await?
    } else {
        write_results(out, &results)?;
        Vec::new()
    };

    Ok(Outcome {
        results,
        downloaded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::API_KEY_HEADER;
    use crate::error::Error;
    use tempfile::TempDir;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SEARCH_BODY: &str = r#"{
        "meta": {"cursor": "", "total_hits": 2, "allowed_orders": [], "days_back": 0},
        "data": [{"type": "file", "id": "abc"}, {"type": "file", "id": "def"}],
        "links": {"self": "", "next": ""}
    }"#;

    fn test_config(server: &MockServer) -> Config {
        Config {
            api_key: "secret".to_string(),
            search_api: format!("{}/search?q=%s&limit=%d", server.uri()),
            download_api: format!("{}/files/%s", server.uri()),
            limit: 5,
            proxy: None,
        }
    }

    fn job(output_dir: PathBuf, download: bool) -> Job {
        Job {
            query: "foo bar".to_string(),
            download,
            output_dir,
            interactive: false,
        }
    }

    async fn mount_search(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "foo bar"))
            .and(query_param("limit", "5"))
            .and(header(API_KEY_HEADER, "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_BODY))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_search_and_download() {
        let server = MockServer::start().await;
        mount_search(&server).await;
        for (id, body) in [("abc", "one"), ("def", "two")] {
            Mock::given(method("GET"))
                .and(path(format!("/files/{}", id)))
                .and(header(API_KEY_HEADER, "secret"))
                .respond_with(ResponseTemplate::new(200).set_body_string(body))
                .expect(1)
                .mount(&server)
                .await;
        }

        let temp = TempDir::new().unwrap();
        let output_dir = temp.path().join("download");
        std::fs::create_dir(&output_dir).unwrap();

        let mut out = Vec::new();
        let outcome = run(&test_config(&server), &job(output_dir.clone(), true), &mut out)
            .await
            .unwrap();

        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.downloaded.len(), 2);
        assert_eq!(std::fs::read_to_string(output_dir.join("abc")).unwrap(), "one");
        assert_eq!(std::fs::read_to_string(output_dir.join("def")).unwrap(), "two");
    }

    #[tokio::test]
    async fn test_search_only_lists_results() {
        let server = MockServer::start().await;
        mount_search(&server).await;

        let temp = TempDir::new().unwrap();
        let mut out = Vec::new();
        let outcome = run(
            &test_config(&server),
            &job(temp.path().to_path_buf(), false),
            &mut out,
        )
        .await
        .unwrap();

        assert!(outcome.downloaded.is_empty());
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "   1. abc (file)\n   2. def (file)\n"
        );
        // Only the search request was made.
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_directory_stops_before_search() {
        let server = MockServer::start().await;

        let temp = TempDir::new().unwrap();
        let err = run(
            &test_config(&server),
            &job(temp.path().join("download"), true),
            &mut Vec::new(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::MissingDirectory(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bad_proxy_is_fatal() {
        let server = MockServer::start().await;
        let mut config = test_config(&server);
        config.proxy = Some("::not a proxy::".to_string());

        let temp = TempDir::new().unwrap();
        let err = run(&config, &job(temp.path().to_path_buf(), false), &mut Vec::new())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::UrlParse(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
