use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::ContentConfig;

use super::documents::{AboutPage, CareersPage, ContactPage, ProjectsPage, ServicesPage};

/// Errors raised while fetching a page document from the content store.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("content store returned status {status} for page '{slug}'")]
    Status { slug: &'static str, status: u16 },
}

/// A source of page documents, one method per page.
///
/// The HTTP store implements this against the headless CMS; tests and the
/// offline demo use static implementations.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn about_page(&self) -> Result<AboutPage, ContentError>;
    async fn services_page(&self) -> Result<ServicesPage, ContentError>;
    async fn projects_page(&self) -> Result<ProjectsPage, ContentError>;
    async fn careers_page(&self) -> Result<CareersPage, ContentError>;
    async fn contact_page(&self) -> Result<ContactPage, ContentError>;
}

/// Content store client fetching `{base_url}/pages/<slug>` documents.
#[derive(Clone)]
pub struct HttpContentStore {
    http: reqwest::Client,
    base_url: String,
}

impl HttpContentStore {
    /// Build a store for the configured base URL, if one is set.
    pub fn from_config(config: &ContentConfig) -> Option<Self> {
        let base_url = config.base_url.clone()?;
        Some(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn fetch_page<T: DeserializeOwned>(
        &self,
        slug: &'static str,
    ) -> Result<T, ContentError> {
        let url = format!("{}/pages/{}", self.base_url, slug);
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ContentError::Status {
                slug,
                status: response.status().as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ContentSource for HttpContentStore {
    async fn about_page(&self) -> Result<AboutPage, ContentError> {
        self.fetch_page("about").await
    }

    async fn services_page(&self) -> Result<ServicesPage, ContentError> {
        self.fetch_page("services").await
    }

    async fn projects_page(&self) -> Result<ProjectsPage, ContentError> {
        self.fetch_page("projects").await
    }

    async fn careers_page(&self) -> Result<CareersPage, ContentError> {
        self.fetch_page("careers").await
    }

    async fn contact_page(&self) -> Result<ContactPage, ContentError> {
        self.fetch_page("contact").await
    }
}
