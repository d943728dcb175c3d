//! Page document shapes served to the site front-end.
//!
//! Field names follow the headless-CMS contract (camelCase JSON), which is
//! an external interface: the front-end renders these documents as-is.

use serde::{Deserialize, Serialize};

/// A titled block of copy used by several pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSection {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPage {
    pub title: String,
    pub company_background: PageSection,
    pub mission: PageSection,
    pub vision: PageSection,
    pub certifications: CertificationSection,
    pub safety_standards: PageSection,
    pub experience: PageSection,
    pub partnerships: PartnershipSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationSection {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub certifications_list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnershipSection {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub quality_marks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesPage {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEntry {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub applications: Vec<String>,
    pub icon: String,
    #[serde(default)]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsPage {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub categories: Vec<ProjectCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub title: String,
    pub client: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub completion_date: Option<String>,
    #[serde(default)]
    pub project_duration: Option<String>,
    #[serde(default)]
    pub team_size: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCategory {
    pub name: String,
    pub slug: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareersPage {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub job_positions: Vec<JobPosition>,
    #[serde(default)]
    pub company_benefits: Option<CompanyBenefits>,
    pub application_form: ApplicationFormSettings,
}

impl CareersPage {
    /// Titles of the currently listed open positions. This is the valid
    /// value set for an application's `position` field.
    pub fn open_position_titles(&self) -> Vec<String> {
        self.job_positions
            .iter()
            .map(|position| position.title.clone())
            .collect()
    }
}

/// One advertised opening on the careers page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosition {
    pub title: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub experience: String,
    pub location: String,
    #[serde(default)]
    pub department: Option<String>,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub icon: String,
    #[serde(default)]
    pub salary: Option<SalaryRange>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub urgent: bool,
    #[serde(default)]
    pub application_deadline: Option<String>,
    #[serde(default)]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    #[serde(default)]
    pub min: Option<u32>,
    #[serde(default)]
    pub max: Option<u32>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyBenefits {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub benefits: Vec<BenefitEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitEntry {
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// Settings the careers page passes to the application form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationFormSettings {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub submit_button_text: String,
    #[serde(default)]
    pub success_message: Option<String>,
    #[serde(rename = "maxFileSize")]
    pub max_file_size_mb: u64,
    #[serde(default)]
    pub accepted_file_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPage {
    pub title: String,
    pub description: String,
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub social_media: Option<SocialMedia>,
    #[serde(default)]
    pub contact_tile: Option<PageSection>,
    pub map_settings: MapSettings,
    pub contact_form: ContactFormSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub chamber_of_commerce: Option<String>,
    #[serde(default)]
    pub vat_number: Option<String>,
    #[serde(default)]
    pub working_hours: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMedia {
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSettings {
    pub embed_url: String,
    pub map_height: u32,
}

/// Settings the contact page passes to the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormSettings {
    pub form_title: String,
    pub form_description: String,
    pub success_message: String,
}
