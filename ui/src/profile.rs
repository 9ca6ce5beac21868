// Site owner details shown in the navbar and used for the contact link.

pub const OWNER_NAME: &str = "Portfolio";
pub const CONTACT_EMAIL: &str = "hello@example.com";
pub const MAIL_SUBJECT: &str = "Inquiry from Portfolio";
pub const MAIL_BODY: &str = "Hello,\n\nI would like to discuss...";
