//! Token-by-token reveal timing.
//!
//! Each token owns a reveal window of `delay` nominal seconds; the whole text spans
//! `tokens * delay`. The newest token is always included in the visible text while it fades in,
//! and only the very last token of the text ever renders partially transparent.

/// Nominal reveal window of one word.
pub const WORD_DELAY: f64 = 0.15;
/// Nominal reveal window of one character.
pub const LETTER_DELAY: f64 = 0.05;
/// Progress past which reveals are forced fully opaque.
pub const FORCE_OPAQUE_PROGRESS: f64 = 0.7;

/// Reveal granularity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tokenizer {
    /// Tokens are whitespace-separated words, re-joined with single spaces.
    Word,
    /// Tokens are individual characters, re-joined with nothing.
    Letter,
}

impl Tokenizer {
    /// Split `text` into reveal tokens.
    ///
    /// Word splitting treats each whitespace run as one separator, so leading or trailing
    /// whitespace yields an empty first or last token.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            Self::Word => split_whitespace_runs(text),
            Self::Letter => text
                .char_indices()
                .map(|(i, c)| &text[i..i + c.len_utf8()])
                .collect(),
        }
    }

    /// Separator placed between visible tokens.
    pub fn separator(&self) -> &'static str {
        match self {
            Self::Word => " ",
            Self::Letter => "",
        }
    }

    /// Nominal reveal window of one token.
    pub fn delay(&self) -> f64 {
        match self {
            Self::Word => WORD_DELAY,
            Self::Letter => LETTER_DELAY,
        }
    }
}

fn split_whitespace_runs(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_gap = false;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if !in_gap {
                out.push(&text[start..i]);
                in_gap = true;
            }
        } else if in_gap {
            start = i;
            in_gap = false;
        }
    }
    out.push(if in_gap { "" } else { &text[start..] });
    out
}

/// Visible text and terminal-token opacity for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealFrame {
    /// Tokens revealed so far, joined with the tokenizer's separator.
    pub visible_text: String,
    /// Number of tokens included in `visible_text`.
    pub visible_tokens: usize,
    /// Opacity of the rendered text in `[0, 1]`.
    pub terminal_opacity: f64,
}

impl RevealFrame {
    /// Return `true` when there is nothing worth drawing.
    pub fn is_blank(&self) -> bool {
        self.visible_text.trim().is_empty()
    }
}

/// Compute the revealed prefix of `tokens` at `progress`.
///
/// The visible count works out to `floor(progress * tokens.len())`; `delay` cancels there but
/// still scales the fractional progress of the newest token.
pub fn reveal(tokens: &[&str], separator: &str, delay: f64, progress: f64) -> RevealFrame {
    let n = tokens.len() as f64;
    let total_duration = n * delay;
    let visible = ((progress * total_duration) / delay).floor();

    // Negative progress shows nothing rather than wrapping around.
    let take = (visible + 1.0).clamp(0.0, n) as usize;
    let visible_text = tokens[..take].join(separator);

    let current_token_progress = (progress * total_duration - visible * delay) / delay;
    let terminal_opacity = if progress >= FORCE_OPAQUE_PROGRESS || visible < n - 1.0 {
        1.0
    } else {
        current_token_progress.clamp(0.0, 1.0)
    };

    RevealFrame {
        visible_text,
        visible_tokens: take,
        terminal_opacity,
    }
}

/// Progress fed to [`reveal`]: elapsed time over the animation duration when one is set,
/// otherwise the frame progress unchanged.
pub fn reveal_progress(progress: f64, elapsed: f64, animation_duration: Option<f64>) -> f64 {
    match animation_duration {
        Some(d) if d > 0.0 => (elapsed / d).clamp(0.0, 1.0),
        _ => progress,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/scheduler.rs"]
mod tests;
