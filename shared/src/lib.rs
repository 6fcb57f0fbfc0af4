use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 会话标志在 Web Storage 中使用的键名
pub const AUTH_FLAG_KEY: &str = "authenticated";
/// 会话标志唯一认可的真值字面量
pub const AUTH_FLAG_TRUE: &str = "true";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 应用用户记录
///
/// 对应后端 `/api/users` 返回的 DTO。`password` 仅在创建新用户时
/// 由前端填写，后端响应中永远不会回传。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationUser {
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub login_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub version: i32,
    #[serde(default)]
    pub last_modified_timestamp: Option<NaiveDateTime>,
    #[serde(default)]
    pub user_profile: Option<String>,
}

/// 用户角色档案（参考数据）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_type: String,
}

/// 货币参考数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub currency: String,
}

/// 交易台参考数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Desk {
    pub desk_name: String,
}

/// 交易流水行（Blotter）
///
/// 后端汇总后的只读展示模型，字段均可能缺失。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeBlotterRow {
    pub trade_id: Option<i64>,
    pub version: Option<i32>,
    pub trade_status: Option<String>,
    pub trade_date: Option<NaiveDate>,
    pub counterparty_name: Option<String>,
    pub book_name: Option<String>,
    pub trade_type: Option<String>,
}

/// 下拉选项（value 提交给后端，label 展示给用户）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub value: String,
    pub label: String,
}

impl OptionItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

pub mod protocol;
