//! 后端 API 客户端
//!
//! 固定 base origin，按调用附带 Bearer token。每次调用都是一次性的：
//! 不重试、不超时、不缓存，也没有集中式错误拦截器；
//! 失败如何呈现给用户由各调用方自行决定。

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::FormData;

use evently_shared::{
    AdminEventPatch, EventBody, EventRecord, HEADER_AUTHORIZATION, LoginRequest, LoginResponse,
    PaymentSummary, RegisterRequest, TicketRecord,
};

/// 默认后端部署地址
pub const API_BASE: &str = "https://event-management-backend-oilv.onrender.com";

// =========================================================
// 错误类型
// =========================================================

/// API 调用失败分类
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 请求未到达后端（无响应）
    Network(String),
    /// 后端返回 4xx / 5xx
    Http { status: u16, body: String },
    /// 响应体无法解析
    Parse(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Http { status, .. } => write!(f, "request failed with status {status}"),
            ApiError::Parse(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl ApiError {
    /// 从 HTTP 错误体里取后端的 `message` 字段（如果有）
    pub fn server_message(&self) -> Option<String> {
        let ApiError::Http { body, .. } = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value.get("message")?.as_str().map(str::to_string)
    }
}

fn network_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// 响应成功时解析 JSON，否则转为 `ApiError::Http`
async fn read_json<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    if !res.ok() {
        let body = res.text().await.unwrap_or_default();
        return Err(ApiError::Http {
            status: res.status(),
            body,
        });
    }
    res.json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// 只关心成功与否的响应
async fn expect_ok(res: Response) -> Result<(), ApiError> {
    if !res.ok() {
        let body = res.text().await.unwrap_or_default();
        return Err(ApiError::Http {
            status: res.status(),
            body,
        });
    }
    Ok(())
}

// =========================================================
// 多部分上传表单
// =========================================================

/// `/createEvent` 的 multipart 表单字段
pub struct EventUpload {
    pub owner: String,
    pub title: String,
    pub optional: String,
    pub description: String,
    pub organized_by: String,
    pub event_date: String,
    pub event_time: String,
    pub location: String,
    pub ticket_price: String,
    pub image: web_sys::File,
}

impl EventUpload {
    fn to_form_data(&self) -> Result<FormData, ApiError> {
        let build = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
        let form = FormData::new().map_err(build)?;
        form.append_with_str("owner", &self.owner).map_err(build)?;
        form.append_with_str("title", &self.title).map_err(build)?;
        form.append_with_str("optional", &self.optional)
            .map_err(build)?;
        form.append_with_str("description", &self.description)
            .map_err(build)?;
        form.append_with_str("organizedBy", &self.organized_by)
            .map_err(build)?;
        form.append_with_str("eventDate", &self.event_date)
            .map_err(build)?;
        form.append_with_str("eventTime", &self.event_time)
            .map_err(build)?;
        form.append_with_str("location", &self.location)
            .map_err(build)?;
        form.append_with_str("ticketPrice", &self.ticket_price)
            .map_err(build)?;
        form.append_with_blob("image", &self.image).map_err(build)?;
        form.append_with_str("likes", "0").map_err(build)?;
        Ok(form)
    }
}

// =========================================================
// API 客户端
// =========================================================

#[derive(Clone, Debug, PartialEq)]
pub struct EventApi {
    pub base_url: String,
}

impl Default for EventApi {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl EventApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {token}")
    }

    // ---------- 注册 / 登录 ----------

    /// 用户注册
    pub async fn register(&self, req: &RegisterRequest) -> Result<(), ApiError> {
        let res = Request::post(&self.url("/api/users/register"))
            .json(req)
            .map_err(network_err)?
            .send()
            .await
            .map_err(network_err)?;
        expect_ok(res).await
    }

    /// 用户登录
    pub async fn user_login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let res = Request::post(&self.url("/api/users/login"))
            .json(req)
            .map_err(network_err)?
            .send()
            .await
            .map_err(network_err)?;
        read_json(res).await
    }

    /// 管理员登录
    pub async fn admin_login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let res = Request::post(&self.url("/api/admin/login"))
            .json(req)
            .map_err(network_err)?
            .send()
            .await
            .map_err(network_err)?;
        read_json(res).await
    }

    // ---------- 用户侧活动 ----------

    /// 获取当前用户的活动列表
    pub async fn user_events(&self, token: &str) -> Result<Vec<EventRecord>, ApiError> {
        let res = Request::get(&self.url("/api/users/events"))
            .header(HEADER_AUTHORIZATION, &Self::bearer(token))
            .send()
            .await
            .map_err(network_err)?;
        read_json(res).await
    }

    /// JSON 方式创建活动（不带图片时）
    pub async fn create_user_event(&self, token: &str, body: &EventBody) -> Result<(), ApiError> {
        let res = Request::post(&self.url("/api/users/events"))
            .header(HEADER_AUTHORIZATION, &Self::bearer(token))
            .json(body)
            .map_err(network_err)?
            .send()
            .await
            .map_err(network_err)?;
        expect_ok(res).await
    }

    /// 更新自己的活动
    pub async fn update_user_event(
        &self,
        token: &str,
        id: &str,
        body: &EventBody,
    ) -> Result<(), ApiError> {
        let res = Request::put(&self.url(&format!("/api/users/events/{id}")))
            .header(HEADER_AUTHORIZATION, &Self::bearer(token))
            .json(body)
            .map_err(network_err)?
            .send()
            .await
            .map_err(network_err)?;
        expect_ok(res).await
    }

    /// 删除自己的活动
    pub async fn delete_user_event(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let res = Request::delete(&self.url(&format!("/api/users/events/{id}")))
            .header(HEADER_AUTHORIZATION, &Self::bearer(token))
            .send()
            .await
            .map_err(network_err)?;
        expect_ok(res).await
    }

    /// 带图片的 multipart 创建活动
    pub async fn create_event_multipart(&self, upload: &EventUpload) -> Result<(), ApiError> {
        // Content-Type 交给浏览器生成（需要 boundary）
        let form = upload.to_form_data()?;
        let res = Request::post(&self.url("/createEvent"))
            .body(form)
            .map_err(network_err)?
            .send()
            .await
            .map_err(network_err)?;
        expect_ok(res).await
    }

    // ---------- 管理员侧活动 ----------

    /// 获取全部待管理的活动
    pub async fn admin_events(&self, token: &str) -> Result<Vec<EventRecord>, ApiError> {
        let res = Request::get(&self.url("/api/admin/events"))
            .header(HEADER_AUTHORIZATION, &Self::bearer(token))
            .send()
            .await
            .map_err(network_err)?;
        read_json(res).await
    }

    /// 管理员编辑活动（含审核状态），返回更新后的记录
    pub async fn admin_update_event(
        &self,
        token: &str,
        id: &str,
        patch: &AdminEventPatch,
    ) -> Result<EventRecord, ApiError> {
        let res = Request::patch(&self.url(&format!("/api/admin/events/{id}")))
            .header(HEADER_AUTHORIZATION, &Self::bearer(token))
            .json(patch)
            .map_err(network_err)?
            .send()
            .await
            .map_err(network_err)?;
        read_json(res).await
    }

    /// 管理员删除活动
    pub async fn admin_delete_event(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let res = Request::delete(&self.url(&format!("/api/admin/events/{id}")))
            .header(HEADER_AUTHORIZATION, &Self::bearer(token))
            .send()
            .await
            .map_err(network_err)?;
        expect_ok(res).await
    }

    // ---------- 购票 ----------

    /// 支付页的活动摘要（公开接口，无需 token）
    pub async fn payment_summary(&self, id: &str) -> Result<PaymentSummary, ApiError> {
        let res = Request::get(&self.url(&format!("/event/{id}/ordersummary/paymentsummary")))
            .send()
            .await
            .map_err(network_err)?;
        read_json(res).await
    }

    /// 提交购票记录
    pub async fn create_ticket(&self, ticket: &TicketRecord) -> Result<(), ApiError> {
        let res = Request::post(&self.url("/tickets"))
            .json(ticket)
            .map_err(network_err)?
            .send()
            .await
            .map_err(network_err)?;
        expect_ok(res).await
    }
}

// =========================================================
// 单元测试
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = EventApi::new("https://example.com/");
        assert_eq!(api.url("/api/users/events"), "https://example.com/api/users/events");
        assert_eq!(api.url("tickets"), "https://example.com/tickets");
    }

    #[test]
    fn default_points_at_deployed_backend() {
        assert_eq!(EventApi::default().base_url, API_BASE);
    }

    #[test]
    fn server_message_reads_http_body() {
        let err = ApiError::Http {
            status: 400,
            body: r#"{"message":"Email already registered"}"#.to_string(),
        };
        assert_eq!(err.server_message().as_deref(), Some("Email already registered"));

        let no_message = ApiError::Http {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(no_message.server_message(), None);
        assert_eq!(ApiError::Network("offline".into()).server_message(), None);
    }

    #[test]
    fn display_reports_failure_class() {
        assert_eq!(
            ApiError::Http { status: 401, body: String::new() }.to_string(),
            "request failed with status 401"
        );
        assert!(ApiError::Network("x".into()).to_string().starts_with("network error"));
        assert!(ApiError::Parse("y".into()).to_string().starts_with("malformed response"));
    }
}
