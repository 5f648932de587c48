//! Canned replies per topic.

use std::collections::HashMap;

use strum::IntoEnumIterator;

use super::rules::Topic;
use crate::error::{ConciergeError, Result};

/// Company the built-in replies and persona speak for.
pub const COMPANY_NAME: &str = "Locomotive Express";

/// Address the contact replies point visitors to.
pub const CONTACT_EMAIL: &str = "hello@locomotiveexpress.com";

const GREETING: &[&str] = &[
    "Hello! I'm the AI assistant for Locomotive Express. How can I help you today?",
    "Hi there! Welcome to Locomotive Express. What would you like to know about our services?",
    "Greetings! I'm here to help you learn more about Locomotive Express and what we build.",
];

const SERVICES: &[&str] = &[
    "We specialize in modern web development, AI integration and smooth, animated interfaces.",
    "Our services include responsive web design, mobile apps, AI-powered features and e-commerce.",
    "We offer full-stack development, UI/UX design and custom AI integrations for your business.",
];

const PRICING: &[&str] = &[
    "Pricing depends on scope and complexity. Let's schedule a consultation to talk through your needs.",
    "Every project gets a custom quote. Contact us for a detailed estimate.",
    "Cost depends on features and timeline. We'd love to discuss your project in detail.",
];

const CONTACT: &[&str] = &[
    "You can reach us at hello@locomotiveexpress.com or use our contact form. We'd love to hear from you!",
    "Feel free to get in touch through the website form or email hello@locomotiveexpress.com.",
    "Drop us a line at hello@locomotiveexpress.com and we'll get back to you soon.",
];

const TECHNOLOGY: &[&str] = &[
    "We work with modern tools like React, Vue.js, Node.js, GSAP and AI/ML frameworks.",
    "Our stack includes JavaScript, Python, cloud platforms and current web tooling.",
    "We use current technology for AI integration, responsive design and performance tuning.",
];

const DEFAULT: &[&str] = &[
    "That's a great question! Let me help you with that.",
    "It sounds like you're interested in our services. We'd love to discuss your project!",
    "Thanks for reaching out! Our team specializes in modern web development and AI integration.",
    "I can tell you more about the web solutions we build.",
    "That sounds like an exciting project! We have experience with similar work.",
    "Ask me anything about our services, or schedule a consultation.",
    "Our team loves building smooth, animated web experiences.",
    "I'd be happy to connect you with our development team for more details.",
];

/// Topic to candidate replies. Every topic has at least one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackCatalog {
    entries: HashMap<Topic, Vec<String>>,
}

impl Default for FallbackCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FallbackCatalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        let entries = [
            (Topic::Greeting, GREETING),
            (Topic::Services, SERVICES),
            (Topic::Pricing, PRICING),
            (Topic::Contact, CONTACT),
            (Topic::Technology, TECHNOLOGY),
            (Topic::Default, DEFAULT),
        ]
        .into_iter()
        .map(|(topic, replies)| (topic, replies.iter().map(|s| s.to_string()).collect()))
        .collect();
        Self { entries }
    }

    /// Build a custom catalog. Every topic needs at least one reply and no
    /// reply may be blank.
    pub fn new(entries: HashMap<Topic, Vec<String>>) -> Result<Self> {
        for topic in Topic::iter() {
            let replies = entries.get(&topic).map(Vec::as_slice).unwrap_or_default();
            if replies.is_empty() {
                return Err(ConciergeError::Configuration(format!(
                    "fallback catalog has no replies for topic '{topic}'"
                )));
            }
            if let Some(index) = replies.iter().position(|r| r.trim().is_empty()) {
                return Err(ConciergeError::Configuration(format!(
                    "fallback catalog reply {index} for topic '{topic}' is blank"
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Candidates for `topic`, in catalog order.
    pub fn candidates(&self, topic: Topic) -> &[String] {
        self.entries.get(&topic).map(Vec::as_slice).unwrap_or_default()
    }

    /// Which topic a reply belongs to, if it is in the catalog.
    pub fn topic_of(&self, reply: &str) -> Option<Topic> {
        Topic::iter().find(|topic| self.candidates(*topic).iter().any(|c| c == reply))
    }
}
