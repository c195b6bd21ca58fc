//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义应用的所有路由及其 path 解析 / 生成规则。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页（今日 / 即将到来的活动）
    #[default]
    Home,
    /// 用户登录
    UserLogin,
    /// 用户注册
    UserRegister,
    /// 用户活动列表
    Events,
    /// 创建活动
    EventCreate,
    /// 用户编辑活动
    EventUpdate(String),
    /// 用户控制面板
    Dashboard,
    /// 管理员登录
    AdminLogin,
    /// 管理员控制面板
    AdminDashboard,
    /// 管理员编辑活动
    AdminEditEvent(String),
    /// 订单支付摘要
    PaymentSummary(String),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["user", "login"] => Self::UserLogin,
            ["user", "register"] => Self::UserRegister,
            ["events"] => Self::Events,
            ["events", "create"] => Self::EventCreate,
            ["events", "update", id] => Self::EventUpdate((*id).to_string()),
            ["dashboard"] => Self::Dashboard,
            ["admin", "login"] => Self::AdminLogin,
            ["admin", "dashboard"] => Self::AdminDashboard,
            ["admin", "edit-event", id] => Self::AdminEditEvent((*id).to_string()),
            ["event", id, "ordersummary", "paymentsummary"] => {
                Self::PaymentSummary((*id).to_string())
            }
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::UserLogin => "/user/login".to_string(),
            Self::UserRegister => "/user/register".to_string(),
            Self::Events => "/events".to_string(),
            Self::EventCreate => "/events/create".to_string(),
            Self::EventUpdate(id) => format!("/events/update/{id}"),
            Self::Dashboard => "/dashboard".to_string(),
            Self::AdminLogin => "/admin/login".to_string(),
            Self::AdminDashboard => "/admin/dashboard".to_string(),
            Self::AdminEditEvent(id) => format!("/admin/edit-event/{id}"),
            Self::PaymentSummary(id) => format!("/event/{id}/ordersummary/paymentsummary"),
            Self::NotFound => "/404".to_string(),
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// 单元测试
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_paths_roundtrip() {
        for route in [
            AppRoute::Home,
            AppRoute::UserLogin,
            AppRoute::UserRegister,
            AppRoute::Events,
            AppRoute::EventCreate,
            AppRoute::Dashboard,
            AppRoute::AdminLogin,
            AppRoute::AdminDashboard,
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn param_routes_capture_the_id() {
        assert_eq!(
            AppRoute::from_path("/events/update/66b2f1"),
            AppRoute::EventUpdate("66b2f1".to_string())
        );
        assert_eq!(
            AppRoute::from_path("/admin/edit-event/66b2f1"),
            AppRoute::AdminEditEvent("66b2f1".to_string())
        );
        assert_eq!(
            AppRoute::from_path("/event/66b2f1/ordersummary/paymentsummary"),
            AppRoute::PaymentSummary("66b2f1".to_string())
        );
    }

    #[test]
    fn param_routes_print_their_id() {
        assert_eq!(
            AppRoute::EventUpdate("abc".to_string()).to_path(),
            "/events/update/abc"
        );
        assert_eq!(
            AppRoute::PaymentSummary("abc".to_string()).to_path(),
            "/event/abc/ordersummary/paymentsummary"
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(AppRoute::from_path("/wallet"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/events/update"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::NotFound);
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(AppRoute::from_path("/events/"), AppRoute::Events);
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
    }
}
