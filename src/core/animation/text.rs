//! Typewriter text: a cyclic phrase index and the character blend used to
//! type one phrase over another.

use super::error::AnimationError;

/// Duration of typing one phrase
pub const DEFAULT_TYPING_MS: f64 = 2000.0;

/// Ordered phrases shown one after another, forever.
///
/// The index only moves forward and wraps modulo the phrase count.
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseCycle {
    prefix: String,
    phrases: Vec<String>,
    index: usize,
    typing_ms: f64,
}

impl PhraseCycle {
    pub fn new<I, S>(prefix: impl Into<String>, phrases: I) -> Result<Self, AnimationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(AnimationError::EmptySequence);
        }
        Ok(Self {
            prefix: prefix.into(),
            phrases,
            index: 0,
            typing_ms: DEFAULT_TYPING_MS,
        })
    }

    pub fn with_typing_ms(mut self, typing_ms: f64) -> Self {
        self.typing_ms = typing_ms.max(0.0);
        self
    }

    pub fn typing_ms(&self) -> f64 {
        self.typing_ms
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    /// Full text shown once the current phrase is typed
    pub fn current_text(&self) -> String {
        format!("{}{}", self.prefix, self.current_phrase())
    }

    /// Move to the next phrase, wrapping around
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.phrases.len();
        self.index
    }
}

/// Text shown at `progress` while typing `to` over `from`.
///
/// The first `n` characters come from `to` and the rest from `from`, where
/// `n` grows linearly with progress up to the length of `to`.
pub fn blend_text(from: &str, to: &str, progress: f64) -> String {
    let target: Vec<char> = to.chars().collect();
    let progress = progress.clamp(0.0, 1.0);
    if progress >= 1.0 {
        return to.to_string();
    }

    let typed = (target.len() as f64 * progress).round() as usize;
    let mut text: String = target[..typed].iter().collect();
    text.extend(from.chars().skip(typed));
    text
}
