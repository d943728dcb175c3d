//! Message composition for both pipelines.
//!
//! Every submission produces exactly two messages: an internal notification
//! to the business inbox (reply-to set to the submitter) and an
//! acknowledgment back to the submitter. All builders are pure so tests can
//! assert on the exact messages the dispatcher will send.

use chrono::{DateTime, Local};

use crate::mail::{Email, MailError};

use super::application::{ApplicationSubmission, ResumeUpload};
use super::contact::ContactSubmission;

const COMPANY_NAME: &str = "Meridian Infrastructure Solutions";
const COMPANY_SHORT: &str = "Meridian";
const COMPANY_PHONE: &str = "+31 (0)20 123 4567";
const COMPANY_EMAIL: &str = "info@meridian-infra.nl";
const COMPANY_WEBSITE: &str = "www.meridian-infra.nl";

pub fn contact_notification(
    from_address: &str,
    business_inbox: &str,
    submission: &ContactSubmission,
    received: DateTime<Local>,
) -> Result<Email, MailError> {
    let text = format!(
        "New contact form submission\n\
         Received: {received}\n\
         \n\
         Name: {name}\n\
         Email: {email}\n\
         Subject: {subject}\n\
         \n\
         Message:\n\
         {message}\n",
        received = received.format("%Y-%m-%d %H:%M"),
        name = submission.name,
        email = submission.email,
        subject = submission.subject,
        message = submission.message,
    );

    let html = format!(
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px;\">\
         <h2>New Contact Form Submission</h2>\
         <table>\
         <tr><td><strong>Name:</strong></td><td>{name}</td></tr>\
         <tr><td><strong>Email:</strong></td><td><a href=\"mailto:{email}\">{email}</a></td></tr>\
         <tr><td><strong>Subject:</strong></td><td>{subject}</td></tr>\
         </table>\
         <h3>Message</h3>\
         <div style=\"white-space: pre-wrap;\">{message}</div>\
         <hr>\
         <p style=\"font-size: 12px; color: #6b7280;\">Sent from the {company} website contact \
         form. You can reply directly to this email to respond to {name}.</p>\
         </div>",
        name = escape_html(&submission.name),
        email = escape_html(&submission.email),
        subject = escape_html(&submission.subject),
        message = escape_html(&submission.message),
        company = COMPANY_SHORT,
    );

    Email::builder()
        .from(format!("{COMPANY_SHORT} Contact Form <{from_address}>"))
        .to(business_inbox)
        .reply_to(submission.email.clone())
        .subject(format!("Contact Form: {}", submission.subject))
        .text(text)
        .html(html)
        .build()
}

pub fn contact_acknowledgment(
    from_address: &str,
    submission: &ContactSubmission,
) -> Result<Email, MailError> {
    let text = format!(
        "Dear {name},\n\
         \n\
         Thank you for reaching out to {company}. We have received your message regarding \
         \"{subject}\" and appreciate you taking the time to contact us.\n\
         \n\
         Our team will review your inquiry and respond within 1-2 business days. If your \
         matter is urgent, please call us directly at {phone}.\n\
         \n\
         Here's a copy of your message for your records:\n\
         \n\
         Subject: {subject}\n\
         Message: {message}\n\
         \n\
         We look forward to assisting you.\n\
         \n\
         Best regards,\n\
         The {short} Team\n\
         \n\
         ---\n\
         {company}\n\
         Email: {company_email}\n\
         Phone: {phone}\n\
         Web: {website}\n",
        name = submission.name,
        subject = submission.subject,
        message = submission.message,
        company = COMPANY_NAME,
        short = COMPANY_SHORT,
        phone = COMPANY_PHONE,
        company_email = COMPANY_EMAIL,
        website = COMPANY_WEBSITE,
    );

    let html = format!(
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px;\">\
         <h2>Thank you for contacting us!</h2>\
         <p>Dear <strong>{name}</strong>,</p>\
         <p>Thank you for reaching out to {company}. We have received your message regarding \
         <strong>\"{subject}\"</strong> and will respond within 1-2 business days.</p>\
         <p>If your matter is urgent, please call us at <strong>{phone}</strong>.</p>\
         <h3>Your message</h3>\
         <p><strong>Subject:</strong> {subject}</p>\
         <div style=\"white-space: pre-wrap;\">{message}</div>\
         <p>Best regards,<br><strong>The {short} Team</strong></p>\
         <hr>\
         <p style=\"font-size: 12px; color: #6b7280;\">{company} | {company_email} | {phone} | \
         {website}</p>\
         </div>",
        name = escape_html(&submission.name),
        subject = escape_html(&submission.subject),
        message = escape_html(&submission.message),
        company = COMPANY_NAME,
        short = COMPANY_SHORT,
        phone = COMPANY_PHONE,
        company_email = COMPANY_EMAIL,
        website = COMPANY_WEBSITE,
    );

    Email::builder()
        .from(format!("{COMPANY_SHORT} <{from_address}>"))
        .to(submission.email.clone())
        .subject(format!("Thank you for contacting {COMPANY_SHORT}"))
        .text(text)
        .html(html)
        .build()
}

pub fn application_notification(
    from_address: &str,
    business_inbox: &str,
    submission: &ApplicationSubmission,
    resume: &ResumeUpload,
    received: DateTime<Local>,
) -> Result<Email, MailError> {
    let experience = if submission.experience.trim().is_empty() {
        "Not specified"
    } else {
        submission.experience.as_str()
    };

    let text = format!(
        "New job application received\n\
         Received: {received}\n\
         \n\
         Name: {name}\n\
         Email: {email}\n\
         Phone: {phone}\n\
         Position: {position}\n\
         Experience: {experience}\n\
         \n\
         Message:\n\
         {message}\n\
         \n\
         The resume is attached ({filename}).\n",
        received = received.format("%Y-%m-%d %H:%M"),
        name = submission.name,
        email = submission.email,
        phone = submission.phone,
        position = submission.position,
        message = submission.message,
        filename = resume.filename,
    );

    let message_block = if submission.message.trim().is_empty() {
        String::new()
    } else {
        format!(
            "<h3>Cover Letter / Additional Message</h3>\
             <div style=\"white-space: pre-wrap;\">{}</div>",
            escape_html(&submission.message)
        )
    };

    let html = format!(
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px;\">\
         <h2>New Job Application</h2>\
         <p><strong>Position applied for: {position}</strong></p>\
         <table>\
         <tr><td><strong>Full Name:</strong></td><td>{name}</td></tr>\
         <tr><td><strong>Email:</strong></td><td><a href=\"mailto:{email}\">{email}</a></td></tr>\
         <tr><td><strong>Phone:</strong></td><td>{phone}</td></tr>\
         <tr><td><strong>Experience:</strong></td><td>{experience}</td></tr>\
         </table>\
         {message_block}\
         <p><strong>CV/Resume attached:</strong> {filename}</p>\
         <hr>\
         <p style=\"font-size: 12px; color: #6b7280;\">Submitted through the {company} careers \
         page. You can reply directly to this email to contact the candidate.</p>\
         </div>",
        position = escape_html(&submission.position),
        name = escape_html(&submission.name),
        email = escape_html(&submission.email),
        phone = escape_html(&submission.phone),
        experience = escape_html(experience),
        filename = escape_html(&resume.filename),
        company = COMPANY_SHORT,
    );

    Email::builder()
        .from(format!("{COMPANY_SHORT} Recruitment <{from_address}>"))
        .to(business_inbox)
        .reply_to(submission.email.clone())
        .subject(format!("New Job Application: {}", submission.position))
        .text(text)
        .html(html)
        .attachment(resume.to_attachment())
        .build()
}

pub fn application_acknowledgment(
    from_address: &str,
    submission: &ApplicationSubmission,
) -> Result<Email, MailError> {
    let text = format!(
        "Dear {name},\n\
         \n\
         Thank you for your interest in the {position} position at {company}.\n\
         \n\
         We have successfully received your application and CV. Our recruitment team will \
         review your qualifications and experience carefully.\n\
         \n\
         What happens next:\n\
         - Our HR team will review your application within 5-7 business days\n\
         - If your profile matches our requirements, we will contact you to schedule an \
         interview\n\
         - We will keep you updated on the status of your application throughout the process\n\
         \n\
         If you have any questions about this position or the application process, please \
         don't hesitate to contact us.\n\
         \n\
         Best regards,\n\
         {short} HR Team\n\
         {company}\n",
        name = submission.name,
        position = submission.position,
        company = COMPANY_NAME,
        short = COMPANY_SHORT,
    );

    let html = format!(
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px;\">\
         <h2>Application Received Successfully</h2>\
         <p>Dear <strong>{name}</strong>,</p>\
         <p>Thank you for your interest in the <strong>{position}</strong> position at \
         {company}. We have received your application and CV.</p>\
         <h3>What happens next</h3>\
         <ul>\
         <li>Our HR team will review your application within <strong>5-7 business days</strong></li>\
         <li>If your profile matches our requirements, we will contact you to schedule an \
         interview</li>\
         <li>We will keep you updated throughout the process</li>\
         </ul>\
         <p>Best regards,<br><strong>{short} HR Team</strong><br>{company}</p>\
         <hr>\
         <p style=\"font-size: 12px; color: #6b7280;\">This is an automated confirmation. For \
         questions, please use our contact form or call our office.</p>\
         </div>",
        name = escape_html(&submission.name),
        position = escape_html(&submission.position),
        company = COMPANY_NAME,
        short = COMPANY_SHORT,
    );

    Email::builder()
        .from(format!("{COMPANY_SHORT} HR Team <{from_address}>"))
        .to(submission.email.clone())
        .subject(format!(
            "Application Received - {} Position at {COMPANY_SHORT}",
            submission.position
        ))
        .text(text)
        .html(html)
        .build()
}

/// Minimal HTML entity escaping for user-supplied values interpolated into
/// the HTML parts.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
