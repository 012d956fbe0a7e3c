//! Read model handed to front ends

use crate::core::{Code, Feedback, FeedbackMarker};

/// One attempt row as a front end sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView {
    pub code: Code,
    pub feedback: Option<Feedback>,
    /// The row the player is currently editing
    pub active: bool,
}

impl RowView {
    /// Ordered markers, empty for rows that have not been verified
    #[must_use]
    pub fn markers(&self) -> Vec<FeedbackMarker> {
        self.feedback
            .map(|f| f.markers().collect())
            .unwrap_or_default()
    }
}

/// Snapshot of a whole board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub rows: Vec<RowView>,
    pub over: bool,
    pub won: bool,
    /// Attempts not yet verified
    pub remaining: usize,
    /// Present only once the game is over
    pub secret: Option<Code>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unverified_row_has_no_markers() {
        let row = RowView {
            code: Code::EMPTY,
            feedback: None,
            active: true,
        };
        assert!(row.markers().is_empty());
    }

    #[test]
    fn verified_row_markers_exact_first() {
        let row = RowView {
            code: "RYGB".parse().unwrap(),
            feedback: Some(Feedback::new(1, 1)),
            active: false,
        };
        assert_eq!(
            row.markers(),
            [FeedbackMarker::ExactMatch, FeedbackMarker::PartialMatch]
        );
    }
}
