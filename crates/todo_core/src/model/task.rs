use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::macros::datetime;

/// Marker the legacy files use for an unset completion time.
pub(crate) const ZERO_TIMESTAMP: OffsetDateTime = datetime!(0001-01-01 00:00:00 UTC);

/// One to-do entry. The JSON key names keep the store files readable by the
/// tool's earlier incarnations, so exact casing matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "Task")]
    pub description: String,
    #[serde(rename = "Done")]
    pub done: bool,
    #[serde(rename = "CreatedAt", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(rename = "CompletedAt", with = "completed_at", default)]
    pub completed_at: Option<OffsetDateTime>,
}

impl Task {
    pub fn new<D: Into<String>>(description: D) -> Self {
        Self {
            description: description.into(),
            done: false,
            created_at: OffsetDateTime::now_utc(),
            completed_at: None,
        }
    }
}

/// `None` maps to the zero marker on the wire; a stored zero marker (or a
/// missing key) reads back as `None`.
mod completed_at {
    use super::ZERO_TIMESTAMP;
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::OffsetDateTime;
    use time::format_description::well_known::Rfc3339;

    pub fn serialize<S: Serializer>(
        value: &Option<OffsetDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let instant = (*value).unwrap_or(ZERO_TIMESTAMP);
        let formatted = instant.format(&Rfc3339).map_err(S::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<OffsetDateTime>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let parsed = OffsetDateTime::parse(&raw, &Rfc3339).map_err(D::Error::custom)?;
        if parsed == ZERO_TIMESTAMP {
            Ok(None)
        } else {
            Ok(Some(parsed))
        }
    }
}
