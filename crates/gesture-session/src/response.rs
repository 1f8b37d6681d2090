//! # Detection Response
//!
//! What the request layer sends back for every classified label.
//!
//! ```json
//! {
//!   "session_id": "default_user",
//!   "detected_class": "tambah",
//!   "state": { "current_state": "WAIT_SECOND_NUM", "number_1": 5, "operator": "+", ... },
//!   "message": "OK: 5 +. Now show the second number.",
//!   "expression": "5 +"
//! }
//! ```

use gesture_core::{status_message, CalculatorState};
use serde::{Deserialize, Serialize};

use crate::session::SessionId;

/// Response for one processed label (or reset).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResponse {
    /// Session the label was applied to.
    pub session_id: SessionId,

    /// The label as received from the classifier.
    pub detected_class: String,

    /// Calculator snapshot after applying the label.
    pub state: CalculatorState,

    /// Prompt for the next gesture.
    pub message: String,

    /// Rendered calculation so far, if any operand has been captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

impl DetectionResponse {
    /// Builds a response from a snapshot.
    pub fn new(session_id: SessionId, detected_class: impl Into<String>, state: CalculatorState) -> Self {
        DetectionResponse {
            session_id,
            detected_class: detected_class.into(),
            message: status_message(&state),
            expression: state.expression(),
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gesture_core::{GestureCalculator, OperatorTable};

    #[test]
    fn test_response_shape() {
        let table = OperatorTable::indonesian();
        let mut calc = GestureCalculator::new();
        calc.process("5", &table);
        let state = calc.process("tambah", &table);

        let response = DetectionResponse::new(SessionId::new("s1").unwrap(), "tambah", state);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["session_id"], "s1");
        assert_eq!(json["detected_class"], "tambah");
        assert_eq!(json["state"]["current_state"], "WAIT_SECOND_NUM");
        assert_eq!(json["message"], "OK: 5 +. Now show the second number.");
        assert_eq!(json["expression"], "5 +");
    }

    #[test]
    fn test_empty_state_has_no_expression() {
        let response =
            DetectionResponse::new(SessionId::new("s1").unwrap(), "Start", CalculatorState::new());
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("expression").is_none());
        assert_eq!(json["message"], "Please show the first number (0-9).");
    }
}
