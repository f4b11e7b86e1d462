//! Page route handlers.
//!
//! Every page receives the resolved [`ThemePreference`] so the `<html>`
//! element carries the right class on first paint.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use portfolio_core::ThemePreference;
use tracing::instrument;

use crate::content::{self, ContactInfo, Project, SkillGroup, SocialLink, TimelineEntry};
use crate::filters;
use crate::middleware::Theme;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub theme: ThemePreference,
    pub active: &'static str,
    pub owner: &'static str,
    pub headline: &'static str,
    pub intro: &'static str,
    pub socials: &'static [SocialLink],
}

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub theme: ThemePreference,
    pub active: &'static str,
    pub owner: &'static str,
    pub skills: &'static [SkillGroup],
    pub experience: &'static [TimelineEntry],
    pub education: &'static [TimelineEntry],
}

/// Projects page template.
#[derive(Template, WebTemplate)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate {
    pub theme: ThemePreference,
    pub active: &'static str,
    pub owner: &'static str,
    pub projects: Vec<Project>,
}

/// Outcome shown above the contact form after a no-JS submission.
#[derive(Debug, Clone)]
pub struct Notice {
    pub success: bool,
    pub message: String,
}

/// Values echoed back into the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactFormValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub theme: ThemePreference,
    pub active: &'static str,
    pub owner: &'static str,
    pub info: &'static [ContactInfo],
    pub socials: &'static [SocialLink],
    pub notice: Option<Notice>,
    pub form: ContactFormValues,
}

impl ContactTemplate {
    /// Contact page with an empty form.
    #[must_use]
    pub fn new(theme: ThemePreference) -> Self {
        Self {
            theme,
            active: "contact",
            owner: content::OWNER_NAME,
            info: content::CONTACT_INFO,
            socials: content::SOCIAL_LINKS,
            notice: None,
            form: ContactFormValues::default(),
        }
    }
}

/// Display the home page.
#[instrument(skip_all)]
pub async fn home(Theme(theme): Theme) -> impl IntoResponse {
    HomeTemplate {
        theme,
        active: "home",
        owner: content::OWNER_NAME,
        headline: content::HEADLINE,
        intro: content::INTRO,
        socials: content::SOCIAL_LINKS,
    }
}

/// Display the about page.
#[instrument(skip_all)]
pub async fn about(Theme(theme): Theme) -> impl IntoResponse {
    AboutTemplate {
        theme,
        active: "about",
        owner: content::OWNER_NAME,
        skills: content::SKILLS,
        experience: content::EXPERIENCE,
        education: content::EDUCATION,
    }
}

/// Display the projects page.
#[instrument(skip_all)]
pub async fn projects(Theme(theme): Theme) -> impl IntoResponse {
    ProjectsTemplate {
        theme,
        active: "projects",
        owner: content::OWNER_NAME,
        projects: content::projects_featured_first(),
    }
}

/// Display the contact page.
#[instrument(skip_all)]
pub async fn contact(Theme(theme): Theme) -> impl IntoResponse {
    ContactTemplate::new(theme)
}
