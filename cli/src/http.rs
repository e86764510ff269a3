//! HTTP catalog source backed by reqwest

use roster_core::{CatalogSource, Character, LoadError, parse_records};

pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    fn request_error(&self, e: reqwest::Error) -> LoadError {
        LoadError::Request {
            url: self.url.clone(),
            message: e.to_string(),
        }
    }
}

impl CatalogSource for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<Character>, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.request_error(e))?;
        parse_records(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::load_catalog;

    #[tokio::test]
    async fn unreachable_host_loads_empty_catalog() {
        // .invalid never resolves (RFC 2606)
        let source = HttpSource::new("http://catalog.invalid/data.json");
        let catalog = load_catalog(&source).await;
        assert!(catalog.is_empty());
        assert!(catalog.groups().is_empty());
    }
}
