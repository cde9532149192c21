#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use crate::config::{COUNTER_THRESHOLD, MAX_DRAFT_CHARS};

/// Draft text and in-flight flag for the message composer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerState {
    draft: String,
    submitting: bool,
}

impl ComposerState {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    /// Replace the draft, truncating to `MAX_DRAFT_CHARS` UTF-16 units.
    ///
    /// Length is counted the way the textarea's `maxlength` counts it, so an
    /// astral character (emoji) costs two. The cut never splits a character.
    pub fn set_draft(&mut self, raw: &str) {
        let mut units = 0;
        let cut = raw
            .char_indices()
            .find(|&(_, c)| {
                units += c.len_utf16();
                units > MAX_DRAFT_CHARS
            })
            .map_or(raw.len(), |(idx, _)| idx);
        self.draft = raw[..cut].to_owned();
    }

    /// Whether a submit right now would reach the send callback.
    pub fn can_submit(&self, disabled: bool) -> bool {
        !disabled && !self.submitting && !self.draft.trim().is_empty()
    }

    /// Start a submission. Returns the trimmed text to send, or `None` when
    /// the submit is a no-op.
    pub fn begin_submit(&mut self, disabled: bool) -> Option<String> {
        if !self.can_submit(disabled) {
            return None;
        }
        self.submitting = true;
        Some(self.draft.trim().to_owned())
    }

    /// Settle a submission. The draft is cleared only on success.
    pub fn finish_submit(&mut self, outcome: &Result<(), String>) {
        self.submitting = false;
        if outcome.is_ok() {
            self.draft.clear();
        }
    }

    pub fn remaining(&self) -> usize {
        MAX_DRAFT_CHARS.saturating_sub(draft_len(&self.draft))
    }

    /// Remaining characters, when low enough to show the counter.
    pub fn counter(&self) -> Option<usize> {
        let remaining = self.remaining();
        (remaining <= COUNTER_THRESHOLD).then_some(remaining)
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting { "Sending..." } else { "Send" }
    }
}

/// Draft length in UTF-16 code units.
pub fn draft_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Enter submits; Shift+Enter is left to the textarea as a newline.
pub fn is_submit_gesture(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}
