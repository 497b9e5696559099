use serde::{Deserialize, Serialize};

// Identity of the party opening the widget, extracted from the embedding
// platform. The chat id takes precedence over the user id when both exist,
// so reservations made inside a group conversation are keyed to the chat.
#[derive(Debug, Clone, PartialEq)]
pub struct HostIdentity {
    pub chat_id: Option<i64>,
    pub user_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl HostIdentity {
    // Resolve the client id: prefer a non-zero chat id, fall back to a
    // non-zero user id. Zero ids are treated as absent.
    pub fn effective_id(&self) -> Option<i64> {
        self.chat_id
            .filter(|id| *id != 0)
            .or(Some(self.user_id).filter(|id| *id != 0))
    }
}

// Capability trait for host-platform context. Injected into the client so
// the widget logic never touches an ambient global and tests can supply
// fixed identities.
pub trait HostContextProvider: Send + Sync {
    // None means the widget is running outside the host platform or the
    // platform supplied no user.
    fn identity(&self) -> Option<HostIdentity>;
}

// Data structures for the mini-app platform's `initDataUnsafe` payload
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebAppUser {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebAppChat {
    pub id: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WebAppInitData {
    #[serde(default)]
    pub user: Option<WebAppUser>,
    #[serde(default)]
    pub chat: Option<WebAppChat>,
}

impl HostContextProvider for WebAppInitData {
    fn identity(&self) -> Option<HostIdentity> {
        let user = self.user.as_ref()?;
        Some(HostIdentity {
            chat_id: self.chat.as_ref().map(|chat| chat.id),
            user_id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Some(900), 100, Some(900); "#1 chat id wins over user id")]
    #[test_case(None, 100, Some(100); "#2 user id when no chat")]
    #[test_case(Some(0), 100, Some(100); "#3 zero chat id falls back to user")]
    #[test_case(None, 0, None; "#4 no resolvable id")]
    #[test_case(Some(0), 0, None; "#5 both ids zero")]
    fn test_effective_id(chat_id: Option<i64>, user_id: i64, expected: Option<i64>) {
        let identity = HostIdentity {
            chat_id,
            user_id,
            first_name: None,
            last_name: None,
        };
        assert_eq!(identity.effective_id(), expected);
    }

    #[test]
    fn test_init_data_with_user_and_chat() {
        let init_data: WebAppInitData = serde_json::from_str(
            r#"{
                "user": {"id": 100, "first_name": "Anna", "last_name": "Kovács"},
                "chat": {"id": -900}
            }"#,
        )
        .unwrap();

        let identity = init_data.identity().unwrap();
        assert_eq!(identity.chat_id, Some(-900));
        assert_eq!(identity.user_id, 100);
        assert_eq!(identity.first_name.as_deref(), Some("Anna"));
        assert_eq!(identity.last_name.as_deref(), Some("Kovács"));
        assert_eq!(identity.effective_id(), Some(-900));
    }

    #[test]
    fn test_init_data_user_only() {
        let init_data: WebAppInitData =
            serde_json::from_str(r#"{"user": {"id": 100}}"#).unwrap();

        let identity = init_data.identity().unwrap();
        assert_eq!(identity.chat_id, None);
        assert_eq!(identity.first_name, None);
        assert_eq!(identity.effective_id(), Some(100));
    }

    #[test]
    fn test_init_data_without_user_yields_no_identity() {
        let init_data: WebAppInitData =
            serde_json::from_str(r#"{"chat": {"id": -900}}"#).unwrap();
        assert!(init_data.identity().is_none());

        assert!(WebAppInitData::default().identity().is_none());
    }
}
