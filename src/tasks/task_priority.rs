use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};
use utoipa::ToSchema;

/// Defines a task priority.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl Display for TaskPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "low"),
            TaskPriority::Medium => write!(f, "medium"),
            TaskPriority::High => write!(f, "high"),
        }
    }
}

impl FromStr for TaskPriority {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            _ => Err(anyhow::anyhow!("Unknown task priority: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tasks::TaskPriority;

    #[test]
    fn serialization() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_string(&TaskPriority::Low)?, r#""low""#);
        assert_eq!(serde_json::to_string(&TaskPriority::Medium)?, r#""medium""#);
        assert_eq!(serde_json::to_string(&TaskPriority::High)?, r#""high""#);
        Ok(())
    }

    #[test]
    fn conversion_to_and_from_string() -> anyhow::Result<()> {
        for priority in [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High] {
            assert_eq!(priority.to_string().parse::<TaskPriority>()?, priority);
        }
        assert!("urgent".parse::<TaskPriority>().is_err());
        Ok(())
    }
}
