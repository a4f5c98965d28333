// common/src/messages.rs
use serde::{Deserialize, Serialize};

/// Event sent from the server to an open wall page over its note socket.
///
/// The page sends plain text frames; each one is a note body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NoteEvent {
    /// A note was appended; `html` is the rendered card
    Added { id: u64, html: String },
    /// The note was refused; `prompt` is shown to the user
    Rejected { prompt: String },
    /// The login token ran out; the page returns to the login form
    Expired { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_wire_shape() {
        let added = serde_json::to_value(NoteEvent::Added {
            id: 3,
            html: "<div></div>".to_string(),
        })
        .unwrap();
        assert_eq!(added["type"], "added");
        assert_eq!(added["id"], 3);

        let rejected = serde_json::to_value(NoteEvent::Rejected {
            prompt: "Please enter some text.".to_string(),
        })
        .unwrap();
        assert_eq!(rejected["type"], "rejected");
        assert_eq!(rejected["prompt"], "Please enter some text.");

        let expired = serde_json::to_value(NoteEvent::Expired {
            message: "Please log in again.".to_string(),
        })
        .unwrap();
        assert_eq!(expired["type"], "expired");
    }
}
