//! Built-in default documents.
//!
//! Served whenever the content store is unreachable or unconfigured so
//! every page always renders. The careers default also defines the valid
//! position set for job applications in that situation.

use super::documents::{
    AboutPage, ApplicationFormSettings, CareersPage, CertificationSection, ContactFormSettings,
    ContactInfo, ContactPage, JobPosition, MapSettings, PageSection, PartnershipSection,
    ProjectCategory, ProjectEntry, ProjectsPage, ServiceEntry, ServicesPage,
};

pub fn about_page() -> AboutPage {
    AboutPage {
        title: "About Meridian".to_string(),
        company_background: PageSection {
            title: "Who we are".to_string(),
            description: "Meridian Infrastructure Solutions designs, builds, and maintains \
                          telecommunications and utility infrastructure across the Netherlands."
                .to_string(),
        },
        mission: PageSection {
            title: "Our mission".to_string(),
            description: "Deliver reliable connectivity infrastructure with craftsmanship and \
                          care for the environment we build in."
                .to_string(),
        },
        vision: PageSection {
            title: "Our vision".to_string(),
            description: "A country where every home and business is connected through \
                          future-proof networks."
                .to_string(),
        },
        certifications: CertificationSection {
            title: "Certifications".to_string(),
            description: "We work to recognized industry standards.".to_string(),
            certifications_list: vec![
                "ISO 9001".to_string(),
                "VCA**".to_string(),
                "CKB Process Certificate".to_string(),
            ],
        },
        safety_standards: PageSection {
            title: "Safety first".to_string(),
            description: "Every site, every day: safe digging, verified utility locates, and \
                          certified crews."
                .to_string(),
        },
        experience: PageSection {
            title: "Experience".to_string(),
            description: "Over 15 years of fiber, copper, and civil works experience."
                .to_string(),
        },
        partnerships: PartnershipSection {
            title: "Partnerships".to_string(),
            description: "Long-term partner of national carriers and regional contractors."
                .to_string(),
            quality_marks: vec!["KOMO".to_string(), "BouwGarant".to_string()],
        },
    }
}

pub fn services_page() -> ServicesPage {
    ServicesPage {
        title: "Our Services".to_string(),
        subtitle: "From trench to termination: complete network infrastructure services."
            .to_string(),
        services: vec![
            ServiceEntry {
                title: "Fiber Network Construction".to_string(),
                description: "Design and realization of FTTH and backbone fiber routes, \
                              including directional drilling and micro-trenching."
                    .to_string(),
                applications: vec![
                    "FTTH rollouts".to_string(),
                    "Backbone routes".to_string(),
                    "Business parks".to_string(),
                ],
                icon: "tool".to_string(),
                order: Some(1),
            },
            ServiceEntry {
                title: "Network Maintenance".to_string(),
                description: "Preventive and corrective maintenance on active and passive \
                              network layers with agreed response times."
                    .to_string(),
                applications: vec![
                    "Fault resolution".to_string(),
                    "Splice and measurement work".to_string(),
                ],
                icon: "chart".to_string(),
                order: Some(2),
            },
            ServiceEntry {
                title: "Civil Engineering".to_string(),
                description: "Cable trenches, road crossings, and restoration work executed \
                              by certified crews."
                    .to_string(),
                applications: vec![
                    "Open trench work".to_string(),
                    "Road crossings".to_string(),
                    "Surface restoration".to_string(),
                ],
                icon: "building".to_string(),
                order: Some(3),
            },
        ],
    }
}

pub fn projects_page() -> ProjectsPage {
    ProjectsPage {
        title: "Projects".to_string(),
        subtitle: "A selection of recent infrastructure work.".to_string(),
        projects: vec![
            ProjectEntry {
                title: "FTTH Rollout Utrecht-West".to_string(),
                client: "Regional carrier".to_string(),
                category: "fiber".to_string(),
                description: "Connected 12,000 homes to a new fiber network across four \
                              districts, including all civil works."
                    .to_string(),
                results: vec![
                    "12,000 homes passed".to_string(),
                    "Zero lost-time incidents".to_string(),
                ],
                technologies: vec!["FTTH".to_string(), "Directional drilling".to_string()],
                featured: true,
                completion_date: Some("2025-03".to_string()),
                project_duration: Some("14 months".to_string()),
                team_size: Some(35),
            },
            ProjectEntry {
                title: "Business Park Backbone Almere".to_string(),
                client: "Municipal consortium".to_string(),
                category: "civil".to_string(),
                description: "Redundant fiber ring with dual entry for 60 commercial lots."
                    .to_string(),
                results: vec!["8 km redundant ring".to_string()],
                technologies: vec!["Micro-trenching".to_string()],
                featured: false,
                completion_date: Some("2024-11".to_string()),
                project_duration: Some("6 months".to_string()),
                team_size: Some(12),
            },
        ],
        categories: vec![
            ProjectCategory {
                name: "Fiber".to_string(),
                slug: "fiber".to_string(),
                icon: "tool".to_string(),
            },
            ProjectCategory {
                name: "Civil works".to_string(),
                slug: "civil".to_string(),
                icon: "building".to_string(),
            },
        ],
    }
}

pub fn careers_page() -> CareersPage {
    CareersPage {
        title: "Join Our Team".to_string(),
        subtitle: "Be part of a dynamic team building the future of telecommunications \
                   infrastructure. We offer competitive benefits, professional growth, and \
                   exciting projects."
            .to_string(),
        job_positions: vec![
            JobPosition {
                title: "Fiber Optic Technician".to_string(),
                employment_type: "Full-time".to_string(),
                experience: "2-5 years".to_string(),
                location: "Netherlands".to_string(),
                department: None,
                description: "Join our team of skilled technicians responsible for installing \
                              and maintaining fiber optic networks."
                    .to_string(),
                requirements: vec![
                    "Experience with fiber optic installation and maintenance".to_string(),
                    "Knowledge of fiber testing and troubleshooting".to_string(),
                    "Valid driver's license".to_string(),
                    "Ability to work independently and in teams".to_string(),
                    "Safety-conscious mindset".to_string(),
                ],
                responsibilities: Vec::new(),
                benefits: Vec::new(),
                icon: "tool".to_string(),
                salary: None,
                featured: false,
                urgent: false,
                application_deadline: None,
                order: Some(1),
            },
            JobPosition {
                title: "Project Supervisor".to_string(),
                employment_type: "Full-time".to_string(),
                experience: "5+ years".to_string(),
                location: "Netherlands".to_string(),
                department: None,
                description: "Lead and oversee telecommunications infrastructure projects from \
                              inception to completion."
                    .to_string(),
                requirements: vec![
                    "Proven experience in project supervision".to_string(),
                    "Strong leadership and communication skills".to_string(),
                    "Technical knowledge of telecommunications infrastructure".to_string(),
                    "Project management certification is a plus".to_string(),
                ],
                responsibilities: Vec::new(),
                benefits: Vec::new(),
                icon: "chart".to_string(),
                salary: None,
                featured: false,
                urgent: false,
                application_deadline: None,
                order: Some(2),
            },
            JobPosition {
                title: "Network Infrastructure Engineer".to_string(),
                employment_type: "Full-time".to_string(),
                experience: "3-7 years".to_string(),
                location: "Netherlands".to_string(),
                department: None,
                description: "Design and implement complex network infrastructure solutions \
                              for our clients."
                    .to_string(),
                requirements: vec![
                    "Bachelor's degree in relevant field".to_string(),
                    "Experience with network design and implementation".to_string(),
                    "Knowledge of current industry standards and technologies".to_string(),
                    "Strong problem-solving skills".to_string(),
                ],
                responsibilities: Vec::new(),
                benefits: Vec::new(),
                icon: "code".to_string(),
                salary: None,
                featured: false,
                urgent: false,
                application_deadline: None,
                order: Some(3),
            },
        ],
        company_benefits: None,
        application_form: ApplicationFormSettings {
            title: "Apply Now".to_string(),
            description: None,
            submit_button_text: "Submit Application".to_string(),
            success_message: Some("Application submitted successfully!".to_string()),
            max_file_size_mb: 5,
            accepted_file_types: vec![".pdf".to_string(), ".doc".to_string(), ".docx".to_string()],
        },
    }
}

pub fn contact_page() -> ContactPage {
    ContactPage {
        title: "Contact Us".to_string(),
        description: "Questions about a project or our services? We respond within 1-2 \
                      business days."
            .to_string(),
        contact_info: ContactInfo {
            phone: "+31 (0)20 123 4567".to_string(),
            email: "info@meridian-infra.nl".to_string(),
            address: "Spaklerweg 20, 1096 BA Amsterdam".to_string(),
            chamber_of_commerce: Some("KvK 87654321".to_string()),
            vat_number: Some("NL867530421B01".to_string()),
            working_hours: Some("Mon-Fri 08:00-17:00".to_string()),
        },
        social_media: None,
        contact_tile: Some(PageSection {
            title: "Visit our office".to_string(),
            description: "Walk-ins welcome during working hours.".to_string(),
        }),
        map_settings: MapSettings {
            embed_url: "https://www.openstreetmap.org/export/embed.html?bbox=4.90,52.33,4.94,52.35"
                .to_string(),
            map_height: 400,
        },
        contact_form: ContactFormSettings {
            form_title: "Send us a message".to_string(),
            form_description: "Fill in the form and we will get back to you.".to_string(),
            success_message: "Your message has been sent. We will get back to you within 1-2 \
                              business days."
                .to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn careers_default_lists_three_positions() {
        let page = careers_page();
        assert_eq!(page.job_positions.len(), 3);
        assert_eq!(
            page.open_position_titles(),
            vec![
                "Fiber Optic Technician",
                "Project Supervisor",
                "Network Infrastructure Engineer"
            ]
        );
    }

    #[test]
    fn careers_default_caps_resume_at_five_megabytes() {
        assert_eq!(careers_page().application_form.max_file_size_mb, 5);
    }

    #[test]
    fn contact_default_has_success_copy() {
        let page = contact_page();
        assert!(!page.contact_form.success_message.is_empty());
    }
}
