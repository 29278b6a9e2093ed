//! Contact-form submission record.

use serde::Deserialize;

/// A contact-form submission. Missing fields deserialize as blank and are
/// caught by [`ContactSubmission::is_complete`], so a partial body and a
/// blank field are rejected the same way.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub enquiry: String,
}

impl ContactSubmission {
    /// All three fields must be non-blank. No shape validation beyond that;
    /// the email field in particular is taken as-is.
    pub fn is_complete(&self) -> bool {
        !(self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.enquiry.trim().is_empty())
    }

    /// Confirmation text echoed back to the caller on success.
    pub fn confirmation(&self) -> String {
        format!(
            "SendEmailMessage name: {}, email: {}, enquiry: {}",
            self.name, self.email, self.enquiry
        )
    }
}
