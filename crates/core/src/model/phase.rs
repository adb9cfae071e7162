/// Top-level state of a quiz attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QuizPhase {
    /// Questions are being requested; no session exists yet.
    #[default]
    Loading,
    Active,
    Finished,
}

impl QuizPhase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}
