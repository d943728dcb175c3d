//! Page content with always-available fallbacks.
//!
//! Each content page is backed by a document in the headless content store.
//! When the store is unreachable, misconfigured, or simply absent, the
//! built-in default document is substituted so the page always renders.

pub mod defaults;
pub mod documents;
mod source;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

pub use documents::{
    AboutPage, ApplicationFormSettings, BenefitEntry, CareersPage, CertificationSection,
    CompanyBenefits, ContactFormSettings, ContactInfo, ContactPage, JobPosition, MapSettings,
    PageSection, PartnershipSection, ProjectCategory, ProjectEntry, ProjectsPage, SalaryRange,
    ServiceEntry, ServicesPage, SocialMedia,
};
pub use source::{ContentError, ContentSource, HttpContentStore};

use crate::forms::service::PositionDirectory;

/// Resolves page documents, substituting defaults on any failure.
#[derive(Clone)]
pub struct ContentCatalog {
    source: Option<Arc<dyn ContentSource>>,
}

impl ContentCatalog {
    /// Catalog backed by a live content source with fallback on failure.
    pub fn with_source(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Catalog that only ever serves the built-in defaults.
    pub fn fallback_only() -> Self {
        Self { source: None }
    }

    pub async fn about_page(&self) -> AboutPage {
        match &self.source {
            Some(source) => source.about_page().await.unwrap_or_else(|err| {
                warn!(%err, page = "about", "content store unavailable, serving default");
                defaults::about_page()
            }),
            None => defaults::about_page(),
        }
    }

    pub async fn services_page(&self) -> ServicesPage {
        match &self.source {
            Some(source) => source.services_page().await.unwrap_or_else(|err| {
                warn!(%err, page = "services", "content store unavailable, serving default");
                defaults::services_page()
            }),
            None => defaults::services_page(),
        }
    }

    pub async fn projects_page(&self) -> ProjectsPage {
        match &self.source {
            Some(source) => source.projects_page().await.unwrap_or_else(|err| {
                warn!(%err, page = "projects", "content store unavailable, serving default");
                defaults::projects_page()
            }),
            None => defaults::projects_page(),
        }
    }

    pub async fn careers_page(&self) -> CareersPage {
        match &self.source {
            Some(source) => source.careers_page().await.unwrap_or_else(|err| {
                warn!(%err, page = "careers", "content store unavailable, serving default");
                defaults::careers_page()
            }),
            None => defaults::careers_page(),
        }
    }

    pub async fn contact_page(&self) -> ContactPage {
        match &self.source {
            Some(source) => source.contact_page().await.unwrap_or_else(|err| {
                warn!(%err, page = "contact", "content store unavailable, serving default");
                defaults::contact_page()
            }),
            None => defaults::contact_page(),
        }
    }
}

/// The careers page is the canonical list of open positions, so the catalog
/// doubles as the application pipeline's position directory.
#[async_trait]
impl PositionDirectory for ContentCatalog {
    async fn open_positions(&self) -> Vec<String> {
        self.careers_page().await.open_position_titles()
    }
}
