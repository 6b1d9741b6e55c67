use serde::{Deserialize, Serialize};

/// Events that can happen on the setup page
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    // Initialization
    Initialize,

    // Network selection
    SsidSelected {
        value: String,
    },

    // Credential submission
    SubmitCredentials {
        manual_ssid: String,
        password: String,
    },

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    ScanResponse(Result<Vec<String>, String>),
    #[serde(skip)]
    SetupResponse(Result<String, String>),

    // UI actions
    ClearStatus,
}
