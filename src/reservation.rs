use serde::{Deserialize, Serialize};

// Domain record exchanged with the reservation backend.
// Field names follow the backend's camelCase JSON wire format.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reservation {
    pub client_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub seat_id: i64,
    pub date: String,
    pub time: String,
    pub number_of_people: u32,
    pub message_id: i64,
    pub reminder: bool,
}

impl Default for Reservation {
    fn default() -> Self {
        Self {
            client_id: 0,
            first_name: String::new(),
            last_name: String::new(),
            phone_number: String::new(),
            seat_id: 0,
            date: String::new(),
            time: String::new(),
            number_of_people: 1,
            message_id: 0,
            reminder: false,
        }
    }
}

impl Reservation {
    // Create a draft for the given client with all business fields defaulted.
    // The caller (UI) fills in the rest before submission.
    pub fn draft(client_id: i64) -> Self {
        Self {
            client_id,
            ..Self::default()
        }
    }

    // A draft is only valid once the requesting party is known.
    pub fn has_valid_client(&self) -> bool {
        self.client_id != 0
    }
}
