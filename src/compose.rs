use serde::{Deserialize, Serialize};

use crate::types::{ContactInfo, Stance};

/// Placeholder tokens a template may carry for the user's own words. All of
/// them are substituted; a template simply omits the ones it doesn't use.
pub const REASON_TOKENS: [&str; 3] = ["[YOUR REASON]", "[YOUR CONCERN]", "[YOUR COMMENTS]"];

const DEFAULT_SUPPORT: &str = "I am writing to express my strong support for this bill.\n\n\
[YOUR REASON]\n\n\
I urge you to support this legislation when it comes before you for a vote.";

const DEFAULT_OPPOSE: &str = "I am writing to express my opposition to this bill.\n\n\
[YOUR CONCERN]\n\n\
I urge you to vote against this legislation.";

const DEFAULT_NEUTRAL: &str = "I am writing to share my thoughts on this bill.\n\n\
[YOUR COMMENTS]\n\n\
Thank you for considering my input as you evaluate this legislation.";

/// The comment template for each stance. Defaults are built in; stored
/// overrides replace individual entries at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSet {
    pub support: String,
    pub oppose: String,
    pub neutral: String,
}

impl Default for TemplateSet {
    fn default() -> Self {
        TemplateSet {
            support: DEFAULT_SUPPORT.to_string(),
            oppose: DEFAULT_OPPOSE.to_string(),
            neutral: DEFAULT_NEUTRAL.to_string(),
        }
    }
}

impl TemplateSet {
    /// Merge stored overrides over the built-in defaults. A stored value
    /// replaces its entry per key; absent keys keep the default.
    pub fn with_overrides(overrides: &TemplateOverrides) -> Self {
        let mut set = TemplateSet::default();
        if let Some(support) = &overrides.support {
            set.support = support.clone();
        }
        if let Some(oppose) = &overrides.oppose {
            set.oppose = oppose.clone();
        }
        if let Some(neutral) = &overrides.neutral {
            set.neutral = neutral.clone();
        }
        set
    }

    pub fn template_for(&self, stance: Stance) -> &str {
        match stance {
            Stance::Support => &self.support,
            Stance::Oppose => &self.oppose,
            Stance::Neutral => &self.neutral,
        }
    }
}

/// Stored partial override of the template set. Only the entries the user
/// has customized are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oppose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutral: Option<String>,
}

impl TemplateOverrides {
    pub fn set(&mut self, stance: Stance, template: impl Into<String>) {
        let template = Some(template.into());
        match stance {
            Stance::Support => self.support = template,
            Stance::Oppose => self.oppose = template,
            Stance::Neutral => self.neutral = template,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.support.is_none() && self.oppose.is_none() && self.neutral.is_none()
    }
}

/// Assemble the full comment text for a bill.
///
/// The body is the stance's template with every reason token replaced by the
/// trimmed custom reason (when one was given). The signature block carries
/// only the contact fields that are actually filled in; missing data is
/// omitted outright, never replaced with placeholder text.
pub fn generate_comment(
    bill_number: &str,
    stance: Stance,
    custom_reason: &str,
    contact: &ContactInfo,
    templates: &TemplateSet,
) -> String {
    let mut body = templates.template_for(stance).to_string();

    let reason = custom_reason.trim();
    if !reason.is_empty() {
        for token in REASON_TOKENS {
            body = body.replace(token, reason);
        }
    }

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("RE: {}", bill_number));
    lines.push(String::new());
    lines.push(body);
    lines.push(String::new());
    lines.push("Sincerely,".to_string());

    let name = contact.full_name();
    if !name.is_empty() {
        lines.push(name);
    }

    let address = contact.address.trim();
    if !address.is_empty() {
        lines.push(address.to_string());
        // City/state/zip line only makes sense under an address line
        let mut locality = String::new();
        let city = contact.city.trim();
        if !city.is_empty() {
            locality.push_str(city);
            locality.push_str(", ");
        }
        locality.push_str("WA");
        let zip = contact.zip.trim();
        if !zip.is_empty() {
            locality.push(' ');
            locality.push_str(zip);
        }
        lines.push(locality);
    }

    let district = contact.district.trim();
    if !district.is_empty() {
        lines.push(format!("Legislative District {}", district));
    }
    let email = contact.email.trim();
    if !email.is_empty() {
        lines.push(email.to_string());
    }
    let phone = contact.phone.trim();
    if !phone.is_empty() {
        lines.push(phone.to_string());
    }

    lines.join("\n")
}
