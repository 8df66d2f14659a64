use crate::core::ranking::top_matches;
use crate::models::{Listing, SearchCriteria, SearchSession, SessionEvent, SessionState, SortKey};

impl SessionEvent {
    /// Build an event from its wire name (`input`, `submit`, `dismiss`)
    ///
    /// `input` without text is treated as clearing the field.
    pub fn parse(kind: &str, text: Option<String>) -> Option<Self> {
        match kind.to_lowercase().as_str() {
            "input" => Some(Self::Input(text.unwrap_or_default())),
            "submit" => Some(Self::Submit),
            "dismiss" => Some(Self::Dismiss),
            _ => None,
        }
    }
}

impl SearchSession {
    pub fn new(id: impl Into<String>, criteria: SearchCriteria, sort: SortKey) -> Self {
        Self {
            id: id.into(),
            state: SessionState::Idle,
            criteria,
            sort,
            updated_at: chrono::Utc::now(),
        }
    }

    /// Whether the live list should currently be driven by the typed text
    pub fn is_searching(&self) -> bool {
        !matches!(self.state, SessionState::Idle)
    }

    /// Apply one event
    ///
    /// ```text
    /// Idle --input--> Typing --submit--> Submitted(cards) --dismiss--> Idle
    /// ```
    ///
    /// Typing while cards are shown updates the text and keeps the cards up
    /// until they are dismissed or a new search is submitted. Submitting blank
    /// text clears the cards and returns to `Idle`. `listings` is only read on
    /// submit, to rank the cards.
    pub fn apply(&mut self, event: SessionEvent, listings: &[Listing], top_n: usize) {
        let next = match (std::mem::take(&mut self.state), event) {
            (SessionState::Submitted { cards }, SessionEvent::Input(text)) => {
                self.criteria.text = text;
                SessionState::Submitted { cards }
            }
            (_, SessionEvent::Input(text)) => {
                self.criteria.text = text;
                SessionState::Typing
            }
            (_, SessionEvent::Submit) if self.criteria.text.trim().is_empty() => SessionState::Idle,
            (_, SessionEvent::Submit) => SessionState::Submitted {
                cards: top_matches(listings, &self.criteria, top_n),
            },
            (_, SessionEvent::Dismiss) => SessionState::Idle,
        };

        tracing::debug!("Session {} -> {:?}", self.id, StateName(&next));
        self.state = next;
        self.updated_at = chrono::Utc::now();
    }
}

/// Debug view of a state without its cards
struct StateName<'a>(&'a SessionState);

impl std::fmt::Debug for StateName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            SessionState::Idle => f.write_str("Idle"),
            SessionState::Typing => f.write_str("Typing"),
            SessionState::Submitted { cards } => write!(f, "Submitted({} cards)", cards.len()),
        }
    }
}
