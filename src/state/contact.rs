#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

/// Values typed into the contact form. There is no transport behind the
/// form; submitting only hands this value to whoever handles `on:submit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_fields() {
        let mut draft = ContactDraft::default();
        assert!(!draft.is_complete());

        draft.set(ContactField::Name, "Ada".to_string());
        draft.set(ContactField::Email, "ada@example.com".to_string());
        draft.set(ContactField::Subject, "Hello".to_string());
        assert_eq!(draft.get(ContactField::Email), "ada@example.com");
        assert!(!draft.is_complete());

        draft.set(ContactField::Message, "   ".to_string());
        // whitespace only does not count
        assert!(!draft.is_complete());

        draft.set(ContactField::Message, "Let's talk".to_string());
        assert!(draft.is_complete());
    }
}
