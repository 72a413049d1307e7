use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

#[cfg(feature = "database")]
use sea_orm::Value;

/// Lifecycle state of an appointment slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl SlotStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Display for SlotStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("unknown slot status: {other}")),
        }
    }
}

#[cfg(feature = "database")]
impl From<SlotStatus> for Value {
    fn from(status: SlotStatus) -> Self {
        Value::String(Some(Box::new(status.as_str().to_string())))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for SlotStatus {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let val: String = res.try_get_by(index)?;

        val.parse().map_err(|e| {
            sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!(
                "Failed to deserialize SlotStatus: {e}"
            )))
        })
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for SlotStatus {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => s.parse().map_err(|_| sea_orm::sea_query::ValueTypeErr),
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "SlotStatus".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::Text
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::Nullable for SlotStatus {
    fn null() -> Value {
        Value::String(None)
    }
}

#[cfg(test)]
mod tests {
    use super::SlotStatus;

    #[test]
    fn parses_known_statuses() {
        assert_eq!("scheduled".parse::<SlotStatus>(), Ok(SlotStatus::Scheduled));
        assert_eq!("completed".parse::<SlotStatus>(), Ok(SlotStatus::Completed));
        assert_eq!("cancelled".parse::<SlotStatus>(), Ok(SlotStatus::Cancelled));
    }

    #[test]
    fn rejects_free_text() {
        assert!("no-show".parse::<SlotStatus>().is_err());
        assert!("Scheduled".parse::<SlotStatus>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for status in [
            SlotStatus::Scheduled,
            SlotStatus::Completed,
            SlotStatus::Cancelled,
        ] {
            assert_eq!(status.to_string().parse::<SlotStatus>(), Ok(status));
        }
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&SlotStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
        let back: SlotStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SlotStatus::Cancelled);
    }
}
