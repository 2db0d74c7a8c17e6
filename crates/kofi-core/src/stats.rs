//! Naive text statistics used by the UI.
//!
//! These are display heuristics, not guarantees: whitespace and `'.'`
//! splitting miscounts abbreviations, trailing punctuation, and multiple
//! spaces. The backend runs its own (equally naive) checks and is the
//! authority — the client only uses these to gate the submit button and
//! to decorate the results screen.

// ---------------------------------------------------------------------------
// Action limits
// ---------------------------------------------------------------------------

/// Maximum number of words allowed in one action.
pub const MAX_ACTION_WORDS: usize = 50;

/// Maximum number of period-delimited segments (i.e. one sentence, with a
/// single optional trailing period).
pub const MAX_ACTION_SEGMENTS: usize = 2;

/// Words-per-minute constant for the "story length" statistic.
const READING_WPM: usize = 200;

/// Marker prefix the backend uses for action lines in the final story.
const ACTION_LINE_MARKER: &str = "Action";

/// Whitespace-delimited word count. Empty input counts zero.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of `'.'`-delimited segments.
///
/// `"I run."` has two segments (the second empty), `"I run. I hide."` has
/// three. Anything above [`MAX_ACTION_SEGMENTS`] means more than one
/// sentence.
pub fn sentence_segments(text: &str) -> usize {
    text.split('.').count()
}

/// UI-side counters for one action draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionCounts {
    pub words: usize,
    /// Displayed sentence count: number of periods in the draft.
    pub sentences: usize,
}

impl ActionCounts {
    pub fn of(text: &str) -> Self {
        Self {
            words: word_count(text),
            sentences: sentence_segments(text) - 1,
        }
    }

    /// Whether the draft passes the client-side affordance checks.
    ///
    /// An empty (whitespace-only) draft is never submittable.
    pub fn submittable(self, text: &str) -> bool {
        !text.trim().is_empty()
            && self.words <= MAX_ACTION_WORDS
            && sentence_segments(text) <= MAX_ACTION_SEGMENTS
    }
}

// ---------------------------------------------------------------------------
// Story statistics
// ---------------------------------------------------------------------------

/// Display statistics derived from the final story transcript.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoryStats {
    /// Lines starting with the `Action` marker.
    pub total_actions: usize,
    /// Word count divided by the reading rate, rounded to two decimals.
    pub reading_minutes: f64,
    /// Twice the action-line count.
    pub player_turns: usize,
}

impl StoryStats {
    pub fn of(story: &str) -> Self {
        let total_actions = story
            .lines()
            .filter(|line| line.starts_with(ACTION_LINE_MARKER))
            .count();
        let words = word_count(story);
        let reading_minutes = (words as f64 / READING_WPM as f64 * 100.0).round() / 100.0;
        Self {
            total_actions,
            reading_minutes,
            player_turns: total_actions * 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_simple_words() {
        assert_eq!(word_count("a b c"), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        // Naive splitting: double spaces don't create phantom words here,
        // but trailing punctuation sticks to its word.
        assert_eq!(word_count("stop.  now"), 2);
    }

    #[test]
    fn segment_counting() {
        assert_eq!(sentence_segments("I run"), 1);
        assert_eq!(sentence_segments("I run."), 2);
        assert_eq!(sentence_segments("I run. I hide."), 3);
    }

    #[test]
    fn submit_gating() {
        let ok = "I light the beacon.";
        assert!(ActionCounts::of(ok).submittable(ok));

        let empty = "   ";
        assert!(!ActionCounts::of(empty).submittable(empty));

        let two_sentences = "I run. I hide.";
        assert!(!ActionCounts::of(two_sentences).submittable(two_sentences));

        let long = ["word"; 51].join(" ");
        assert!(!ActionCounts::of(&long).submittable(&long));

        let at_limit = ["word"; 50].join(" ");
        assert!(ActionCounts::of(&at_limit).submittable(&at_limit));
    }

    #[test]
    fn displayed_sentence_count_is_period_count() {
        assert_eq!(ActionCounts::of("I run").sentences, 0);
        assert_eq!(ActionCounts::of("I run.").sentences, 1);
    }

    #[test]
    fn story_stats_from_transcript() {
        let story = "A fog-bound harbor at dusk tonight.\n\n\
                     Action 1: I light the beacon.\n\
                     Action 2: I douse the flame.\n";
        let stats = StoryStats::of(story);
        assert_eq!(stats.total_actions, 2);
        assert_eq!(stats.player_turns, 4);
        // 18 words / 200 wpm = 0.09.
        assert_eq!(stats.reading_minutes, 0.09);
    }

    #[test]
    fn story_stats_empty_story() {
        let stats = StoryStats::of("");
        assert_eq!(stats.total_actions, 0);
        assert_eq!(stats.player_turns, 0);
        assert_eq!(stats.reading_minutes, 0.0);
    }
}
