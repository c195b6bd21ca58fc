use serde::{Deserialize, Serialize};

pub mod date;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 后端统一的 Bearer 认证头
pub const HEADER_AUTHORIZATION: &str = "Authorization";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 活动审核状态
///
/// 状态只有这三种取值，且只会被管理员显式修改，没有自动流转。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EventStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Pending => "Pending",
            EventStatus::Approved => "Approved",
            EventStatus::Rejected => "Rejected",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(EventStatus::Pending),
            "Approved" => Some(EventStatus::Approved),
            "Rejected" => Some(EventStatus::Rejected),
            _ => None,
        }
    }
}

/// 活动记录
///
/// 字段名跟随后端 JSON（camelCase / `_id`），除 `_id` 和 `title` 外
/// 都允许缺省，后端不同接口返回的子集不完全一致。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "organizedBy")]
    pub organized_by: String,
    /// ISO 格式日期或日期时间字符串
    #[serde(default)]
    pub date: String,
    #[serde(default, rename = "eventTime")]
    pub event_time: String,
    /// 活动时长（小时）
    #[serde(default)]
    pub hour: f64,
    #[serde(default)]
    pub location: String,
    #[serde(default, rename = "ticketPrice")]
    pub ticket_price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub likes: i64,
}

/// 支付页使用的活动摘要（公开子集）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, rename = "eventDate")]
    pub event_date: String,
    #[serde(default, rename = "eventTime")]
    pub event_time: String,
    #[serde(default, rename = "ticketPrice")]
    pub ticket_price: f64,
}

impl PaymentSummary {
    /// 取日期部分（后端返回完整 ISO 时间戳）
    pub fn date_only(&self) -> &str {
        self.event_date
            .split_once('T')
            .map(|(d, _)| d)
            .unwrap_or(&self.event_date)
    }
}

/// 购票记录，支付成功后创建一次，之后不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketRecord {
    pub userid: String,
    pub eventid: String,
    #[serde(rename = "ticketDetails")]
    pub ticket_details: TicketDetails,
}

/// 票面信息快照，记录购票时刻的活动数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketDetails {
    pub name: String,
    pub email: String,
    pub eventname: String,
    pub eventdate: String,
    pub eventtime: String,
    pub ticketprice: f64,
    /// QR 码的 data URL
    pub qr: String,
}

// =========================================================
// 请求 / 响应定义 (Requests)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// 登录响应。token 缺失视为无效响应，由调用方处理。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// 用户侧 JSON 创建 / 更新活动的请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventBody {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub hour: f64,
}

/// 管理员编辑活动的请求体（PATCH）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminEventPatch {
    pub title: String,
    pub date: String,
    pub hour: f64,
    pub description: String,
    pub location: String,
    pub status: EventStatus,
}

// =========================================================
// 单元测试
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_record_uses_backend_field_names() {
        let json = r#"{
            "_id": "abc123",
            "title": "Rust Meetup",
            "description": "monthly meetup",
            "organizedBy": "Community",
            "date": "2026-09-01T18:00:00.000Z",
            "eventTime": "18:00",
            "hour": 2,
            "location": "Colombo",
            "ticketPrice": 500,
            "status": "Approved",
            "owner": "alice"
        }"#;

        let event: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, "abc123");
        assert_eq!(event.organized_by, "Community");
        assert_eq!(event.event_time, "18:00");
        assert_eq!(event.ticket_price, 500.0);
        assert_eq!(event.status, EventStatus::Approved);

        let back = serde_json::to_value(&event).unwrap();
        assert_eq!(back["_id"], "abc123");
        assert_eq!(back["organizedBy"], "Community");
        assert_eq!(back["ticketPrice"], 500.0);
    }

    #[test]
    fn event_record_tolerates_missing_optional_fields() {
        let json = r#"{ "_id": "x", "title": "Minimal" }"#;
        let event: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(event.status, EventStatus::Pending);
        assert_eq!(event.hour, 0.0);
        assert!(event.description.is_empty());
    }

    #[test]
    fn status_roundtrip() {
        for status in [
            EventStatus::Pending,
            EventStatus::Approved,
            EventStatus::Rejected,
        ] {
            assert_eq!(EventStatus::from_str(status.as_str()), Some(status));
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        assert_eq!(EventStatus::from_str("Cancelled"), None);
    }

    #[test]
    fn login_response_without_token_deserializes() {
        let res: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(res.token.is_none());
    }

    #[test]
    fn payment_summary_date_only_strips_time() {
        let summary = PaymentSummary {
            id: "e1".into(),
            title: "Concert".into(),
            event_date: "2026-09-05T19:30:00.000Z".into(),
            event_time: "19:30".into(),
            ticket_price: 1500.0,
        };
        assert_eq!(summary.date_only(), "2026-09-05");

        let date_only = PaymentSummary {
            event_date: "2026-09-05".into(),
            ..summary
        };
        assert_eq!(date_only.date_only(), "2026-09-05");
    }
}
