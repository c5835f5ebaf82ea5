//! Follow-up suggestions per mode.

use blueflame_core::types::Mode;

/// At most this many suggestions are returned.
pub const MAX_SUGGESTIONS: usize = 3;

fn bank(mode: Mode) -> &'static [&'static str] {
    match mode {
        Mode::Qa => &["Explain in simple terms", "Give key takeaways", "Add examples"],
        Mode::Writing => &["Draft an outline", "Expand to 1000 words", "Refine tone"],
        Mode::Translation => &["Detect language", "Back-translate", "Transliterate"],
        Mode::Summary => &["Bullet summary", "TL;DR", "Action items"],
        Mode::Student => &[
            "Create study notes",
            "Make quiz questions",
            "Explain like I'm 12",
        ],
        Mode::Professional => &[
            "Make an executive summary",
            "Draft an email",
            "Create a plan",
        ],
        Mode::Fun => &["Tell a pun", "Make it playful", "Add emojis"],
    }
}

/// Suggestions for `mode`, in table order.
pub fn suggestions(mode: Mode) -> Vec<String> {
    bank(mode)
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|s| s.to_string())
        .collect()
}

/// Suggestions for a raw mode label. Unknown or empty labels use the `qa` entry.
pub fn suggestions_for_label(label: &str) -> Vec<String> {
    suggestions(label.parse().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_has_at_most_three() {
        for mode in Mode::ALL {
            let s = suggestions(mode);
            assert!(s.len() <= MAX_SUGGESTIONS);
            assert_eq!(s.len(), 3);
        }
    }

    #[test]
    fn test_order_preserved() {
        assert_eq!(
            suggestions(Mode::Translation),
            vec!["Detect language", "Back-translate", "Transliterate"]
        );
        assert_eq!(
            suggestions(Mode::Student),
            vec!["Create study notes", "Make quiz questions", "Explain like I'm 12"]
        );
    }

    #[test]
    fn test_unknown_label_falls_back_to_qa() {
        assert_eq!(suggestions_for_label("unknown"), suggestions(Mode::Qa));
        assert_eq!(suggestions_for_label(""), suggestions(Mode::Qa));
        assert_eq!(suggestions_for_label("fun"), suggestions(Mode::Fun));
    }

    #[test]
    fn test_modes_have_distinct_banks() {
        let mut firsts: Vec<String> = Mode::ALL.iter().map(|m| suggestions(*m)[0].clone()).collect();
        firsts.sort();
        firsts.dedup();
        assert_eq!(firsts.len(), Mode::ALL.len());
    }
}
