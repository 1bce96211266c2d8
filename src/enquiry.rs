//! Enquiry form model: field validation, the formatted message body and the
//! payload/response types for the web3forms relay.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const PROGRAMS: &[&str] = &[
    "Foundation",
    "IIT-JEE",
    "NEET",
    "Crash Course",
    "Olympiad",
    "Board Prep",
];

pub const BOARDS: &[&str] = &["SSC", "CBSE"];

pub const STANDARDS: &[&str] = &[
    "Class 1", "Class 2", "Class 3", "Class 4", "Class 5", "Class 6", "Class 7", "Class 8",
    "Class 9", "Class 10",
];

pub const CITIES: &[&str] = &["Pune", "Mumbai", "Nagpur", "Kolhapur", "Nashik", "Other"];

const FROM_NAME: &str = "Rise N Shine Coaching Website";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub program: String,
    pub board: String,
    pub standard: String,
    pub city: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnquiryError {
    Incomplete,
    InvalidEmail,
    InvalidPhone,
}

impl fmt::Display for EnquiryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnquiryError::Incomplete => write!(f, "Please fill all fields correctly."),
            EnquiryError::InvalidEmail => write!(f, "Please enter a valid email address."),
            EnquiryError::InvalidPhone => write!(f, "Phone number must be exactly 10 digits."),
        }
    }
}

impl EnquiryForm {
    /// Checks run in the same order the form reports them: missing fields
    /// first, then email shape, then phone shape. Nothing is sent to the
    /// relay unless this returns `Ok`.
    pub fn validate(&self) -> Result<(), EnquiryError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.phone.is_empty()
            || self.program.is_empty()
            || self.board.is_empty()
            || self.standard.is_empty()
            || self.city.is_empty()
            || self.message.is_empty()
        {
            return Err(EnquiryError::Incomplete);
        }
        if !is_valid_email(&self.email) {
            return Err(EnquiryError::InvalidEmail);
        }
        if !is_valid_phone(&self.phone) {
            return Err(EnquiryError::InvalidPhone);
        }
        Ok(())
    }

    /// The plain-text body the relay forwards by email, with every field
    /// under its labeled section.
    pub fn formatted_message(&self) -> String {
        format!(
            "New Coaching Enquiry – Rise N Shine Coaching\n\
             \n\
             Student Details\n\
             Name: {}\n\
             Email: {}\n\
             Phone: {}\n\
             \n\
             Academic Details\n\
             Program: {}\n\
             Board: {}\n\
             Standard: {}\n\
             \n\
             Location\n\
             City: {}\n\
             \n\
             Message\n\
             {}\n",
            self.name,
            self.email,
            self.phone,
            self.program,
            self.board,
            self.standard,
            self.city,
            self.message
        )
    }
}

// local@domain.tld shape: no whitespace, something before the @, and a dot
// with something on both sides after it.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => match domain.rsplit_once('.') {
            Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
            None => false,
        },
        _ => false,
    }
}

fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
}

/// One web3forms submission. Built from a validated form right before the
/// POST and dropped with it; the selects only travel inside the formatted
/// message, matching what the live form has always sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnquiryPayload {
    pub access_key: String,
    pub subject: String,
    pub from_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub replyto: String,
    pub email_to: String,
    pub message: String,
}

impl EnquiryPayload {
    pub fn build(form: &EnquiryForm, access_key: &str, recipient: &str) -> Self {
        Self {
            access_key: access_key.to_string(),
            subject: format!("New Enquiry from {}", form.name),
            from_name: FROM_NAME.to_string(),
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            replyto: form.email.clone(),
            email_to: recipient.to_string(),
            message: form.formatted_message(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
}

/// Submission display state. One attempt moves Idle -> Submitting -> exactly
/// one of Success/Failure; the next attempt starts over from Submitting.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success(String),
    Failure(String),
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }

    /// Reopening the modal clears a finished attempt's banner; an attempt
    /// still in flight keeps its state until it resolves.
    pub fn clears_on_reopen(&self) -> bool {
        !self.is_submitting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> EnquiryForm {
        EnquiryForm {
            name: "Aarav Joshi".into(),
            email: "aarav.joshi@gmail.com".into(),
            phone: "8600504861".into(),
            program: "Foundation".into(),
            board: "SSC".into(),
            standard: "Class 7".into(),
            city: "Pune".into(),
            message: "Looking for maths coaching for my son.".into(),
        }
    }

    #[test]
    fn accepts_a_complete_enquiry() {
        assert_eq!(filled_form().validate(), Ok(()));
    }

    #[test]
    fn blocks_when_any_field_is_left_empty() {
        let clears: [fn(&mut EnquiryForm); 7] = [
            |f| f.name.clear(),
            |f| f.email.clear(),
            |f| f.phone.clear(),
            |f| f.program.clear(),
            |f| f.board.clear(),
            |f| f.standard.clear(),
            |f| f.city.clear(),
        ];
        for clear in clears {
            let mut form = filled_form();
            clear(&mut form);
            assert_eq!(form.validate(), Err(EnquiryError::Incomplete));
        }
    }

    #[test]
    fn free_text_message_is_required() {
        let mut form = filled_form();
        form.message.clear();
        assert_eq!(form.validate(), Err(EnquiryError::Incomplete));
    }

    #[test]
    fn blocks_phones_that_are_not_exactly_ten_digits() {
        for phone in [
            "860050486",
            "86005048611",
            "86oo504861",
            "860 050 486",
            "+918600504",
            "8600-50486",
        ] {
            let mut form = filled_form();
            form.phone = phone.into();
            assert_eq!(
                form.validate(),
                Err(EnquiryError::InvalidPhone),
                "phone {phone:?} should have been rejected"
            );
        }
    }

    #[test]
    fn blocks_emails_without_a_local_domain_tld_shape() {
        for email in [
            "aarav",
            "aarav@",
            "aarav@gmail",
            "@gmail.com",
            "aarav joshi@gmail.com",
            "aarav@gmail.",
            "aarav@.com",
        ] {
            let mut form = filled_form();
            form.email = email.into();
            assert_eq!(
                form.validate(),
                Err(EnquiryError::InvalidEmail),
                "email {email:?} should have been rejected"
            );
        }
    }

    #[test]
    fn accepts_dotted_and_subdomained_emails() {
        for email in ["a@b.c", "parent.one@mail.co.in", "mom+tag@example.org"] {
            let mut form = filled_form();
            form.email = email.into();
            assert_eq!(form.validate(), Ok(()), "email {email:?} should pass");
        }
    }

    #[test]
    fn missing_fields_are_reported_before_shape_checks() {
        let mut form = filled_form();
        form.email = "not-an-email".into();
        form.city.clear();
        assert_eq!(form.validate(), Err(EnquiryError::Incomplete));
    }

    #[test]
    fn validation_messages_name_the_problem() {
        assert_eq!(
            EnquiryError::Incomplete.to_string(),
            "Please fill all fields correctly."
        );
        assert_eq!(
            EnquiryError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
        assert_eq!(
            EnquiryError::InvalidPhone.to_string(),
            "Phone number must be exactly 10 digits."
        );
    }

    #[test]
    fn formats_the_relay_body_with_labeled_sections() {
        let body = filled_form().formatted_message();
        assert!(body.starts_with("New Coaching Enquiry – Rise N Shine Coaching"));
        for section in ["Student Details", "Academic Details", "Location", "Message"] {
            assert!(body.contains(section), "missing section {section:?}");
        }
        for line in [
            "Name: Aarav Joshi",
            "Email: aarav.joshi@gmail.com",
            "Phone: 8600504861",
            "Program: Foundation",
            "Board: SSC",
            "Standard: Class 7",
            "City: Pune",
            "Looking for maths coaching for my son.",
        ] {
            assert!(body.contains(line), "missing line {line:?}");
        }
    }

    #[test]
    fn builds_the_relay_payload_from_a_validated_form() {
        let form = filled_form();
        let payload = EnquiryPayload::build(&form, "test-access-key", "swapnalimore3020@gmail.com");

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["access_key"], "test-access-key");
        assert_eq!(value["subject"], "New Enquiry from Aarav Joshi");
        assert_eq!(value["from_name"], "Rise N Shine Coaching Website");
        assert_eq!(value["replyto"], "aarav.joshi@gmail.com");
        assert_eq!(value["email_to"], "swapnalimore3020@gmail.com");
        assert_eq!(value["phone"], "8600504861");
        assert_eq!(value["message"], form.formatted_message());
        // The selects ride along inside the message body only.
        assert!(value.get("program").is_none());
        assert!(value.get("city").is_none());
    }

    #[test]
    fn decodes_the_relay_success_flag() {
        let ok: SubmitResponse =
            serde_json::from_str(r#"{"success":true,"message":"Email sent"}"#).unwrap();
        assert!(ok.success);
        let failed: SubmitResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!failed.success);
    }

    #[test]
    fn only_the_in_flight_state_counts_as_submitting() {
        assert!(SubmitStatus::Submitting.is_submitting());
        assert!(!SubmitStatus::Idle.is_submitting());
        assert!(!SubmitStatus::Success("sent".into()).is_submitting());
        assert!(!SubmitStatus::Failure("network".into()).is_submitting());
    }

    #[test]
    fn reopening_clears_finished_attempts_but_never_an_in_flight_one() {
        assert!(!SubmitStatus::Submitting.clears_on_reopen());
        assert!(SubmitStatus::Idle.clears_on_reopen());
        assert!(SubmitStatus::Success("sent".into()).clears_on_reopen());
        assert!(SubmitStatus::Failure("network".into()).clears_on_reopen());
    }
}
