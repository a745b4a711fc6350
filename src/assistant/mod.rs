//! Keyword-triggered HR help assistant
//!
//! Answers are canned: a message is lower-cased and searched for known
//! question fragments, first in the FAQ table and then in a short list of
//! small-talk triggers. Matching is plain substring containment, so
//! `"hi"` also fires inside words such as `"this"`.

pub mod faq;

use crate::error::{Result, ScreenerError};
use aho_corasick::AhoCorasick;
use log::debug;

pub struct FaqAssistant {
    faq_matcher: AhoCorasick,
}

impl FaqAssistant {
    pub fn new() -> Result<Self> {
        let faq_matcher = AhoCorasick::new(faq::FAQ_ENTRIES.iter().map(|(question, _)| *question))
            .map_err(|e| ScreenerError::Processing(format!("Failed to build FAQ matcher: {}", e)))?;

        Ok(Self { faq_matcher })
    }

    /// Opening message shown before the user says anything.
    pub fn greeting(&self) -> &'static str {
        faq::GREETING
    }

    pub fn respond(&self, message: &str) -> &'static str {
        let lower = message.to_lowercase();

        // Table order decides between overlapping questions, not position
        // in the message.
        let faq_hit = self
            .faq_matcher
            .find_overlapping_iter(&lower)
            .map(|m| m.pattern().as_usize())
            .min();

        if let Some(index) = faq_hit {
            debug!("FAQ entry {} matched", index);
            return faq::FAQ_ENTRIES[index].1;
        }

        for (triggers, reply) in faq::SMALL_TALK {
            if triggers.iter().any(|trigger| lower.contains(trigger)) {
                return *reply;
            }
        }

        faq::FALLBACK_REPLY
    }
}

impl Default for FaqAssistant {
    fn default() -> Self {
        Self::new().expect("Failed to create default FAQ assistant")
    }
}
