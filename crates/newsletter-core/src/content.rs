//! Display copy for the signup section.

use serde::{Deserialize, Serialize};

/// Text content rendered around the form.
///
/// Defaults carry the stock marketing copy; in a CMS-driven page this is
/// deserialized from the content block instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterContent {
    pub headline: String,
    pub sub_headline: String,
    pub button_label: String,
    pub privacy_text: String,
    pub privacy_link_text: String,
    pub privacy_link_url: String,
}

impl Default for NewsletterContent {
    fn default() -> Self {
        Self {
            headline: "Want product news and updates?".to_string(),
            sub_headline: "Sign up for our newsletter.".to_string(),
            button_label: "Subscribe".to_string(),
            privacy_text: "We care about your data. Read our".to_string(),
            privacy_link_text: "privacy policy".to_string(),
            privacy_link_url: "/privacy".to_string(),
        }
    }
}

impl NewsletterContent {
    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = headline.into();
        self
    }

    pub fn with_sub_headline(mut self, sub_headline: impl Into<String>) -> Self {
        self.sub_headline = sub_headline.into();
        self
    }

    pub fn with_button_label(mut self, label: impl Into<String>) -> Self {
        self.button_label = label.into();
        self
    }

    pub fn with_privacy_text(mut self, text: impl Into<String>) -> Self {
        self.privacy_text = text.into();
        self
    }

    pub fn with_privacy_link(
        mut self,
        text: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        self.privacy_link_text = text.into();
        self.privacy_link_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_copy() {
        let content = NewsletterContent::default();
        assert_eq!(content.headline, "Want product news and updates?");
        assert_eq!(content.button_label, "Subscribe");
        assert_eq!(content.privacy_link_url, "/privacy");
    }

    #[test]
    fn test_builders_override_fields() {
        let content = NewsletterContent::default()
            .with_headline("Stay in the loop")
            .with_privacy_link("privacy notice", "/legal/privacy");
        assert_eq!(content.headline, "Stay in the loop");
        assert_eq!(content.privacy_link_text, "privacy notice");
        assert_eq!(content.privacy_link_url, "/legal/privacy");
        // Untouched fields keep their defaults.
        assert_eq!(content.sub_headline, "Sign up for our newsletter.");
    }

    #[test]
    fn test_deserializes_from_cms_block() {
        let json = r#"{
            "headline": "Get the changelog",
            "sub_headline": "Monthly, no spam.",
            "button_label": "Sign up",
            "privacy_text": "We care about your data. Read our",
            "privacy_link_text": "privacy policy",
            "privacy_link_url": "/privacy"
        }"#;
        let content: NewsletterContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.headline, "Get the changelog");
        assert_eq!(content.button_label, "Sign up");
    }
}
