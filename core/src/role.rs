use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role attached to every RushCrew account. The gateway forwards it as a
/// plain string, so parsing is forgiving about case and whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,
    Seller,
    Master,
}

impl UserRole {
    pub const fn description(self) -> &'static str {
        match self {
            UserRole::User => "일반 사용자",
            UserRole::Seller => "판매자",
            UserRole::Master => "마스터 관리자",
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err("권한은 필수입니다".to_string());
        }
        match trimmed.to_uppercase().as_str() {
            "USER" => Ok(UserRole::User),
            "SELLER" => Ok(UserRole::Seller),
            "MASTER" => Ok(UserRole::Master),
            _ => Err(format!("유효하지 않은 권한입니다: {trimmed}")),
        }
    }
}
