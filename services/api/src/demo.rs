use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use meridian_site::config::AppConfig;
use meridian_site::error::AppError;
use meridian_site::forms::{
    ApplicationSubmission, ContactSubmission, FormServiceError, PositionDirectory, ResumeUpload,
    SubmissionService,
};
use meridian_site::mail::Email;

use crate::infra::{build_catalog, RecordingMailer};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Attach this file as the sample resume instead of a generated one
    #[arg(long)]
    pub(crate) resume: Option<PathBuf>,
    /// Skip the application pipeline portion of the demo
    #[arg(long)]
    pub(crate) skip_application: bool,
}

/// Drive both pipelines end to end against a recording mailer and print
/// the messages that would have been sent.
pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = build_catalog(&config.content);
    let mailer = RecordingMailer::default();

    let service = SubmissionService::new(
        Arc::new(mailer.clone()),
        Arc::new(catalog.clone()),
        config.mail.from.clone(),
        config.recipients.clone(),
        config.uploads.max_resume_bytes(),
    );

    let positions = catalog.open_positions().await;
    println!("Meridian site pipeline demo");
    println!("Open positions: {}", positions.join(", "));

    println!("\n== Contact pipeline ==");
    let contact = ContactSubmission {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        subject: "Pricing".to_string(),
        message: "Please send me a quote for cabling work.".to_string(),
    };
    report_outcome(service.submit_contact(contact).await);

    if !args.skip_application {
        println!("\n== Application pipeline ==");
        let resume = load_resume(args.resume)?;
        let position = positions
            .first()
            .cloned()
            .unwrap_or_else(|| "Fiber Optic Technician".to_string());
        let application = ApplicationSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+31 6 1234 5678".to_string(),
            position,
            experience: "6 years".to_string(),
            message: "I have led fiber crews for six years.".to_string(),
            resume: Some(resume),
        };
        report_outcome(service.submit_application(application).await);
    }

    println!("\n== Recorded outbound mail ==");
    for email in mailer.sent() {
        render_email(&email);
    }

    Ok(())
}

/// Print the position list the application endpoint currently accepts.
pub(crate) async fn run_positions() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = build_catalog(&config.content);

    for position in catalog.open_positions().await {
        println!("{position}");
    }

    Ok(())
}

fn load_resume(path: Option<PathBuf>) -> Result<ResumeUpload, AppError> {
    match path {
        Some(path) => {
            let bytes = std::fs::read(&path)?;
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
            let content_type = mime_guess::from_path(&path)
                .first()
                .map(|mime| mime.essence_str().to_string());
            Ok(ResumeUpload::new(filename, content_type, bytes))
        }
        None => Ok(ResumeUpload::new(
            Some("jane-doe-cv.pdf".to_string()),
            Some("application/pdf".to_string()),
            b"%PDF-1.4\n% demo resume\n".to_vec(),
        )),
    }
}

fn report_outcome(result: Result<(), FormServiceError>) {
    match result {
        Ok(()) => println!("submission accepted, two messages dispatched"),
        Err(err) => println!("submission rejected: {err}"),
    }
}

fn render_email(email: &Email) {
    println!("- To: {}", email.to);
    println!("  Subject: {}", email.subject);
    if let Some(reply_to) = &email.reply_to {
        println!("  Reply-To: {reply_to}");
    }
    for attachment in &email.attachments {
        println!(
            "  Attachment: {} ({}, {} bytes)",
            attachment.filename,
            attachment.content_type,
            attachment.bytes.len()
        );
    }
}
