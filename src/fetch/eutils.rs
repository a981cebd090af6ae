//! A blocking E-utilities client implementing the search/fetch
//! collaborator.

use std::io::Read;
use std::sync::LazyLock;

use nonempty::NonEmpty;
use regex::Regex;

use crate::fetch::Database;
use crate::fetch::Error;
use crate::fetch::Fetch;
use crate::fetch::OutputKind;
use crate::fetch::SearchPage;

/// The default service root.
const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Matches one identifier in a search response.
static ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<Id>(\d+)</Id>").unwrap());

/// Matches the total match count in a search response.
static COUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<Count>(\d+)</Count>").unwrap());

/// Matches the continuation key in a search response.
static WEB_ENV: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<WebEnv>([^<]+)</WebEnv>").unwrap());

/// A blocking E-utilities client.
///
/// Timeout and retry policy are whatever the underlying HTTP client
/// provides; no retries are attempted here.
#[derive(Debug)]
pub struct Client {
    /// The service root URL.
    base: String,

    /// The underlying HTTP client.
    http: reqwest::blocking::Client,
}

impl Client {
    /// Creates a client against the given service root.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            http: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Fetch for Client {
    fn search(
        &self,
        term: &str,
        database: Database,
        restart: u64,
        continuation: Option<&str>,
    ) -> Result<SearchPage, Error> {
        let url = format!("{}/esearch.fcgi", self.base);
        let restart = restart.to_string();

        let mut query = vec![
            ("db", database.as_str()),
            ("term", term),
            ("retstart", restart.as_str()),
            ("usehistory", "y"),
        ];

        if let Some(key) = continuation {
            query.push(("WebEnv", key));
        }

        tracing::debug!(%database, term, "searching");

        let body = self
            .http
            .get(url)
            .query(&query)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text)
            .map_err(|err| Error::Transport(Box::new(err)))?;

        let ids = ID
            .captures_iter(&body)
            .map(|captures| captures[1].to_string())
            .collect::<Vec<_>>();

        let count = COUNT
            .captures(&body)
            .and_then(|captures| captures[1].parse().ok())
            .unwrap_or(ids.len() as u64);

        let continuation = WEB_ENV
            .captures(&body)
            .map(|captures| captures[1].to_string());

        Ok(SearchPage::new(ids, continuation, count))
    }

    fn fetch(
        &self,
        ids: &NonEmpty<String>,
        database: Database,
        kind: OutputKind,
    ) -> Result<Box<dyn Read>, Error> {
        let url = format!("{}/efetch.fcgi", self.base);

        let (rettype, retmode) = match kind {
            OutputKind::Structured => ("gbc", "xml"),
            OutputKind::PlainSequence => ("fasta", "text"),
        };

        let id = ids
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",");

        tracing::debug!(%database, %kind, ids = ids.len(), "fetching");

        let response = self
            .http
            .get(url)
            .query(&[
                ("db", database.as_str()),
                ("id", id.as_str()),
                ("rettype", rettype),
                ("retmode", retmode),
            ])
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|err| Error::Transport(Box::new(err)))?;

        Ok(Box::new(response))
    }
}
