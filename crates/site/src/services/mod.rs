//! Business logic services.

pub mod contact;
pub mod mailer;

pub use contact::{ContactService, SubmitError};
pub use mailer::{DisabledMailer, Mailer, MailerError, OutgoingEmail, ResendMailer};
