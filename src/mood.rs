use std::fmt;

/// The five moods a user can generate content for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Enthusiastic,
    Calm,
    Sad,
    Mysterious,
    Energetic,
}

/// A catalog entry as shown on a mood card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodEntry {
    pub mood: Mood,
    pub label: &'static str,
    pub icon: &'static str,
}

impl Mood {
    /// All moods in display order.
    pub const ALL: [Mood; 5] = [
        Mood::Enthusiastic,
        Mood::Calm,
        Mood::Sad,
        Mood::Energetic,
        Mood::Mysterious,
    ];

    /// Identifier sent to the model.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Enthusiastic => "enthusiastic",
            Mood::Calm => "calm",
            Mood::Sad => "sad",
            Mood::Mysterious => "mysterious",
            Mood::Energetic => "energetic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Enthusiastic => "Enthusiastic",
            Mood::Calm => "Calm",
            Mood::Sad => "Sad",
            Mood::Mysterious => "Mysterious",
            Mood::Energetic => "Energetic",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Mood::Enthusiastic => "🔥",
            Mood::Calm => "🧘",
            Mood::Sad => "😢",
            Mood::Mysterious => "🔮",
            Mood::Energetic => "⚡",
        }
    }

    pub fn entry(self) -> MoodEntry {
        MoodEntry {
            mood: self,
            label: self.label(),
            icon: self.icon(),
        }
    }

    /// Position in [`Mood::ALL`].
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|m| m == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Option<Mood> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Mood {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Mood {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ordered mood catalog.
pub fn catalog() -> [MoodEntry; 5] {
    Mood::ALL.map(Mood::entry)
}
