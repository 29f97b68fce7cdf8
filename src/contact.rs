use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn id(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Full Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is empty", .0.label())]
    EmptyField(ContactField),
    #[error("`{0}` is not an email address")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Checks the fields the way the form's `required`/`type="email"`
    /// attributes do. Submission never waits on the result.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::EmptyField(field));
            }
        }
        let valid_email = self
            .email
            .split_once('@')
            .is_some_and(|(user, domain)| {
                !user.is_empty() && !domain.is_empty() && !domain.contains('@')
            });
        if !valid_email {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

/// Local state of the contact form. Focus only drives the border highlight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactSubmission,
    focused: Option<ContactField>,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.fields.name,
            ContactField::Email => &self.fields.email,
            ContactField::Message => &self.fields.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.fields.name = value,
            ContactField::Email => self.fields.email = value,
            ContactField::Message => self.fields.message = value,
        }
    }

    pub fn focus(&mut self, field: ContactField) {
        self.focused = Some(field);
    }

    pub fn blur(&mut self, field: ContactField) {
        if self.focused == Some(field) {
            self.focused = None;
        }
    }

    pub fn is_focused(&self, field: ContactField) -> bool {
        self.focused == Some(field)
    }

    /// Takes the current values and clears every field. There is no delivery
    /// backend; the submission is only logged.
    pub fn submit(&mut self) -> ContactSubmission {
        let submission = std::mem::take(&mut self.fields);
        match serde_json::to_string(&submission) {
            Ok(json) => log::info!("contact form submitted: {json}"),
            Err(e) => log::warn!("couldn't serialize contact submission: {e}"),
        }
        if let Err(e) = submission.validate() {
            log::warn!("contact submission accepted without validation: {e}");
        }
        submission
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, name.to_string());
        form.set(ContactField::Email, email.to_string());
        form.set(ContactField::Message, message.to_string());
        form
    }

    #[test]
    fn test_submit_clears_fields() {
        let mut form = filled("Jane", "j@x.com", "Hi");
        let submission = form.submit();
        assert_eq!(
            submission,
            ContactSubmission {
                name: "Jane".to_string(),
                email: "j@x.com".to_string(),
                message: "Hi".to_string(),
            }
        );
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn test_submit_clears_even_when_invalid() {
        let mut form = filled("", "nope", "");
        let submission = form.submit();
        assert_eq!(
            submission.validate(),
            Err(ContactError::EmptyField(ContactField::Name))
        );
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_focus_and_blur() {
        let mut form = ContactForm::default();
        form.focus(ContactField::Email);
        assert!(form.is_focused(ContactField::Email));
        assert!(!form.is_focused(ContactField::Name));

        form.blur(ContactField::Name);
        assert!(form.is_focused(ContactField::Email));

        form.focus(ContactField::Message);
        form.blur(ContactField::Message);
        assert!(!form.is_focused(ContactField::Message));
        assert!(!form.is_focused(ContactField::Email));
    }

    #[test]
    fn test_focus_survives_submit() {
        let mut form = filled("Jane", "j@x.com", "Hi");
        form.focus(ContactField::Message);
        form.submit();
        assert!(form.is_focused(ContactField::Message));
    }

    #[test]
    fn test_validate_email() {
        let ok = filled("Jane", "j@x.com", "Hi").submit();
        assert_eq!(ok.validate(), Ok(()));

        for bad in ["jx.com", "@x.com", "j@", "j@x@y"] {
            let sub = filled("Jane", bad, "Hi").submit();
            assert_eq!(
                sub.validate(),
                Err(ContactError::InvalidEmail(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::EmptyField(ContactField::Message).to_string(),
            "Message is empty"
        );
    }
}
