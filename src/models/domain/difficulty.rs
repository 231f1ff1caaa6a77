/// The four tiers the prompt describes to the model.
///
/// Requests are not checked against this set; it only drives the guidance
/// text in the prompt and a log line for unrecognised values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::VeryHard,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::VeryHard => "Very hard",
        }
    }

    pub fn guidance(self) -> &'static str {
        match self {
            Difficulty::Easy => "basic, obvious facts, everyone knows.",
            Difficulty::Medium => "common knowledge, but not obvious.",
            Difficulty::Hard => "advanced details, less familiar.",
            Difficulty::VeryHard => "expert-only, highly specific, very difficult.",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_label_accepts_known_tiers() {
        assert_eq!(Difficulty::from_label("Easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_label("very hard"), Some(Difficulty::VeryHard));
        assert_eq!(Difficulty::from_label(" Medium "), Some(Difficulty::Medium));
    }

    #[test]
    fn from_label_rejects_unknown_tier() {
        assert_eq!(Difficulty::from_label("Impossible"), None);
        assert_eq!(Difficulty::from_label(""), None);
    }
}
