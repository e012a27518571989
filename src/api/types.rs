use serde::{Deserialize, Deserializer, Serialize};

/// A player as returned by the `/players` listing.
///
/// Only the fields the app displays are modelled. Anything else in the
/// payload is ignored, and everything but `id` and `name` may be missing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub age: Option<u16>,
    #[serde(default)]
    pub current_ability: Option<u16>,
    #[serde(default)]
    pub potential_ability: Option<u16>,
    #[serde(default)]
    pub positions: Vec<String>,
    #[serde(default)]
    pub club: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

impl Player {
    /// Positions joined for display, e.g. `"DM, MC"`.
    pub fn position_summary(&self) -> String {
        if self.positions.is_empty() {
            "-".to_string()
        } else {
            self.positions.join(", ")
        }
    }
}

/// Player ids come back as numbers on some endpoints and strings on others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Formats an optional attribute, `-` when unknown.
pub fn display_attr(value: Option<u16>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_deserializes_full_payload() {
        let json = r#"{
            "id": "1042",
            "name": "Joao Silva",
            "age": 19,
            "currentAbility": 120,
            "potentialAbility": 170,
            "positions": ["AMR", "ST"],
            "club": "Benfica",
            "nationality": "Portugal",
            "wage": 12000
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.id, "1042");
        assert_eq!(player.current_ability, Some(120));
        assert_eq!(player.position_summary(), "AMR, ST");
    }

    #[test]
    fn test_numeric_id_becomes_string() {
        let player: Player = serde_json::from_str(r#"{"id": 77, "name": "A"}"#).unwrap();
        assert_eq!(player.id, "77");
        assert_eq!(player.age, None);
        assert!(player.positions.is_empty());
        assert_eq!(player.position_summary(), "-");
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let result: Result<Player, _> = serde_json::from_str(r#"{"id": "1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display_attr() {
        assert_eq!(display_attr(Some(140)), "140");
        assert_eq!(display_attr(None), "-");
    }
}
