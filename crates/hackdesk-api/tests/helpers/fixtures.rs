use serde_json::{json, Value};

/// `n` words of filler text
pub fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
}

/// Submission that satisfies the extended required-field set
pub fn extended_submission(team_name: &str) -> Value {
    json!({
        "teamName": team_name,
        "teamLeadName": "Ada Lovelace",
        "teamLeadEmail": "ada@example.com",
        "teamLeadContact": "+1 555 0100",
        "projectTitle": "Analytical Engine",
        "projectDescription": "A general purpose mechanical computer.",
        "gitLink": "https://github.com/example/engine"
    })
}

/// Submission that satisfies the minimal required-field set
pub fn minimal_submission(team_name: &str) -> Value {
    json!({
        "teamName": team_name,
        "teamLeadName": "Grace Hopper",
        "email": "grace@example.com",
        "contact": "+1 555 0199"
    })
}

/// Smallest valid PNG (1x1 transparent pixel)
pub fn minimal_png() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ]
}
