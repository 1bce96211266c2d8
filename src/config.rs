pub fn get_form_endpoint() -> &'static str {
    "https://api.web3forms.com/submit"
}

// Injected at build time (Trunk picks it up from the shell). Without it the
// relay rejects every submission, so the form shows "Form not configured"
// instead of attempting the POST.
pub fn get_access_key() -> Option<&'static str> {
    option_env!("WEB3FORMS_ACCESS_KEY")
}

// Enquiries are relayed to the founder's inbox.
pub fn get_enquiry_recipient() -> &'static str {
    CONTACT_EMAIL
}

pub const CONTACT_PHONE: &str = "8600504861";
pub const CONTACT_EMAIL: &str = "swapnalimore3020@gmail.com";
pub const WHATSAPP_NUMBER: &str = "918600504861";
