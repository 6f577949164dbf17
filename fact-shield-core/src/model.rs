use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Pending,
    True,
    False,
    EscalatedManual,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::True => "true",
            ClaimStatus::False => "false",
            ClaimStatus::EscalatedManual => "escalated_manual",
            ClaimStatus::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub id: String,
    // Some endpoints return `claim`, others `claim_text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_text: Option<String>,
    #[serde(default, deserialize_with = "status_or_unknown")]
    pub status: ClaimStatus,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub truth_count: Option<u32>,
    #[serde(default)]
    pub false_count: Option<u32>,
}

impl Claim {
    /// Text to show for the claim. `claim` wins over `claim_text` whenever it is present.
    pub fn display_text(&self) -> &str {
        self.claim
            .as_deref()
            .or(self.claim_text.as_deref())
            .unwrap_or_default()
    }
}

// `claims.status` is nullable server-side.
fn status_or_unknown<'de, D>(deserializer: D) -> Result<ClaimStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ClaimStatus>::deserialize(deserializer)?.unwrap_or_default())
}

/// `GET /claims` answers with either a bare list or a wrapped one.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ClaimListResponse {
    Bare(Vec<Claim>),
    Wrapped {
        #[serde(default)]
        items: Option<Vec<Claim>>,
    },
}

impl ClaimListResponse {
    pub fn into_items(self) -> Vec<Claim> {
        match self {
            ClaimListResponse::Bare(items) => items,
            ClaimListResponse::Wrapped { items } => items.unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct EscalatedQueueResponse {
    #[serde(default)]
    pub items: Option<Vec<Claim>>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
}

impl EscalatedQueueResponse {
    pub fn into_items(self) -> Vec<Claim> {
        self.items.unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub org: String,
    pub role: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInResponse {
    pub access_token: String,
    pub user: UserProfile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    True,
    False,
}

impl Vote {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vote::True => "true",
            Vote::False => "false",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_list(raw: &str) -> Vec<Claim> {
        serde_json::from_str::<ClaimListResponse>(raw)
            .expect("parse")
            .into_items()
    }

    #[test]
    fn bare_and_wrapped_lists_normalize_to_same_items() {
        let bare = parse_list(
            r#"[{"id":"1","claim":"a","status":"true"},{"id":"2","claim":"b","status":"true"}]"#,
        );
        let wrapped = parse_list(
            r#"{"items":[{"id":"1","claim":"a","status":"true"},{"id":"2","claim":"b","status":"true"}]}"#,
        );
        assert_eq!(bare, wrapped);
        assert_eq!(
            bare.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
            vec!["1", "2"]
        );
    }

    #[test]
    fn wrapped_list_without_items_is_empty() {
        assert!(parse_list("{}").is_empty());
        assert!(parse_list(r#"{"items":null}"#).is_empty());
    }

    #[test]
    fn display_text_prefers_claim_over_claim_text() {
        let both: Claim = serde_json::from_str(
            r#"{"id":"1","claim":"primary","claim_text":"secondary","status":"pending"}"#,
        )
        .expect("parse");
        assert_eq!(both.display_text(), "primary");

        let only_text: Claim =
            serde_json::from_str(r#"{"id":"2","claim_text":"secondary","status":"pending"}"#)
                .expect("parse");
        assert_eq!(only_text.display_text(), "secondary");

        let only_claim: Claim =
            serde_json::from_str(r#"{"id":"3","claim":"primary","status":"pending"}"#)
                .expect("parse");
        assert_eq!(only_claim.display_text(), "primary");

        let neither: Claim =
            serde_json::from_str(r#"{"id":"4","status":"pending"}"#).expect("parse");
        assert_eq!(neither.display_text(), "");
    }

    #[test]
    fn parses_backend_claim_with_tallies() {
        let claim: Claim = serde_json::from_str(
            r#"{"id":"c9","claim":"x","status":"escalated_manual","explanation":"no dataset match","truth_count":2,"false_count":1}"#,
        )
        .expect("parse");
        assert_eq!(claim.status, ClaimStatus::EscalatedManual);
        assert_eq!(claim.explanation.as_deref(), Some("no dataset match"));
        assert_eq!((claim.truth_count, claim.false_count), (Some(2), Some(1)));
    }

    #[test]
    fn unrecognized_status_maps_to_unknown() {
        let claim: Claim =
            serde_json::from_str(r#"{"id":"1","claim":"x","status":"retracted"}"#).expect("parse");
        assert_eq!(claim.status, ClaimStatus::Unknown);
    }

    #[test]
    fn null_or_missing_status_maps_to_unknown() {
        let items = parse_list(
            r#"[{"id":"1","claim":"a","status":"true"},{"id":"2","claim":"legacy","status":null},{"id":"3","claim":"bare"}]"#,
        );
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].status, ClaimStatus::True);
        assert_eq!(items[1].status, ClaimStatus::Unknown);
        assert_eq!(items[2].status, ClaimStatus::Unknown);
    }

    #[test]
    fn escalated_queue_ignores_paging_fields() {
        let resp: EscalatedQueueResponse = serde_json::from_str(
            r#"{"user_id":"u1","count":1,"limit":50,"offset":0,"items":[{"id":"e1","claim":"x","status":"escalated_manual"}]}"#,
        )
        .expect("parse");
        assert_eq!(resp.into_items().len(), 1);
    }

    #[test]
    fn vote_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Vote::True).expect("json"), r#""true""#);
        assert_eq!(Vote::False.as_str(), "false");
    }
}
