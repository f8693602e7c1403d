/// Spreadsheet-backed contact inbox. The deployment is owned outside this
/// repository; the site only ever POSTs the contact payload to it.
pub fn get_contact_endpoint() -> &'static str {
    "https://script.google.com/macros/s/AKfycbxbAcRkmw7HNz7Mp5KthZCfb2k-8FfHd6bJTZn0I7tjADvukQc1TZPwaMBQp9bokIVYwQ/exec"
}

/// External interest form linked from the pricing tiers.
pub fn get_interest_form_url() -> &'static str {
    "https://forms.gle/PExZuWjHidxUcRrh8"
}
