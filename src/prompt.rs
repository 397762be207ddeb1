use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::errors::AssistantError;

/// Markup the model is told to use for section links.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LinkFormat {
    /// `<a href='safety.html'>Safety Page</a>`, returned as-is.
    Html,
    /// `[Safety Page](safety.html)`, rewritten to anchors before replying.
    #[default]
    Markdown,
}

static LINK_FORMATS: phf::Map<&'static str, LinkFormat> = phf_map! {
    "html" => LinkFormat::Html,
    "markdown" => LinkFormat::Markdown,
    "md" => LinkFormat::Markdown,
};

impl LinkFormat {
    pub fn parse(value: &str) -> Result<Self, AssistantError> {
        LINK_FORMATS
            .get(value.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| {
                AssistantError::ConfigError(format!(
                    "unknown link format {:?}, expected \"html\" or \"markdown\"",
                    value
                ))
            })
    }

    pub fn link(&self, label: &str, href: &str) -> String {
        match self {
            LinkFormat::Html => format!("<a href='{}'>{}</a>", href, label),
            LinkFormat::Markdown => format!("[{}]({})", label, href),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            LinkFormat::Html => "a direct, clickable HTML link",
            LinkFormat::Markdown => "a markdown link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub name: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SECTIONS: [Section; 4] = [
    Section {
        name: "Home",
        label: "Home Page",
        href: "index.html",
    },
    Section {
        name: "Safety",
        label: "Safety Page",
        href: "safety.html",
    },
    Section {
        name: "Dosage",
        label: "Dosage Page",
        href: "dosage.html",
    },
    Section {
        name: "Contact",
        label: "Contact Page",
        href: "contact.html",
    },
];

const SUMMARY_RULE: &str =
    "Your response MUST always include a brief, helpful summary related to the user's question.";

const EXAMPLE_LEAD: &str = "To contact us, please visit our ";
const EXAMPLE_TAIL: &str =
    " where you will find our contact form, address, phone numbers, email addresses, business hours, and social media links. We're here to help!";

const PROFESSIONAL_ADVICE_REMINDER: &str =
    "Always remember to emphasize that users should consult healthcare professionals for personalized medical advice.";

/// Composes the single text prompt sent upstream.
///
/// `context` is passed through verbatim; everything after the user question is
/// fixed instruction text for the chosen `format`.
pub fn build_prompt(context: &str, message: &str, format: LinkFormat) -> String {
    format!(
        "{}\n\nUser question: {}\n\n{}",
        context,
        message,
        instructions(format)
    )
}

/// The static instruction block that follows the user question.
pub fn instructions(format: LinkFormat) -> String {
    let names = SECTIONS
        .iter()
        .map(|s| s.name)
        .collect::<Vec<_>>()
        .join(", ");

    let mut block = format!(
        "{}\nIf the user's question clearly relates to one of the specific website pages ({}), you MUST include {} to that page within your summary, using exactly the link text and target listed below:\n",
        SUMMARY_RULE,
        names,
        format.describe()
    );
    for section in SECTIONS.iter() {
        block.push_str(&format!(
            "- {}: {}\n",
            section.name,
            format.link(section.label, section.href)
        ));
    }

    let contact = &SECTIONS[3];
    block.push_str(&format!(
        "\nExample, if the user asks about {}: \"{}{}{}\"\n\n{}\n",
        contact.name,
        EXAMPLE_LEAD,
        format.link(contact.label, contact.href),
        EXAMPLE_TAIL,
        PROFESSIONAL_ADVICE_REMINDER
    ));
    block
}
