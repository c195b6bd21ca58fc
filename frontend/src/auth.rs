//! 认证模块
//!
//! 登录身份是单一的带标签值（游客 / 用户 / 管理员），通过 Context 共享，
//! 从 LocalStorage 初始化、变化时回写。存储层面仍沿用后端约定的
//! `userToken` / `adminToken` 两个槽位，但读写始终经由 `Identity`，
//! 保证存储状态与内存身份一一对应。

use crate::web::storage::LocalStorage;
use leptos::prelude::*;

pub const KEY_USER_TOKEN: &str = "userToken";
pub const KEY_USER_EMAIL: &str = "userEmail";
pub const KEY_USER_NAME: &str = "userName";
pub const KEY_ADMIN_TOKEN: &str = "adminToken";

/// 登录身份
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Identity {
    #[default]
    Guest,
    User {
        token: String,
        email: String,
        name: String,
    },
    Admin {
        token: String,
    },
}

impl Identity {
    pub fn is_logged_in(&self) -> bool {
        !matches!(self, Identity::Guest)
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Identity::User { .. })
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Identity::Admin { .. })
    }

    pub fn user_token(&self) -> Option<String> {
        match self {
            Identity::User { token, .. } => Some(token.clone()),
            _ => None,
        }
    }

    pub fn admin_token(&self) -> Option<String> {
        match self {
            Identity::Admin { token } => Some(token.clone()),
            _ => None,
        }
    }

    pub fn email(&self) -> Option<String> {
        match self {
            Identity::User { email, .. } => Some(email.clone()),
            _ => None,
        }
    }

    pub fn display_name(&self) -> Option<String> {
        match self {
            Identity::User { name, email, .. } => {
                if name.is_empty() {
                    Some(email.clone())
                } else {
                    Some(name.clone())
                }
            }
            _ => None,
        }
    }
}

/// 从四个存储槽位推导身份
///
/// 两个 token 同时残留时管理员优先（显式保留这一优先级）。
pub fn resolve_identity(
    user_token: Option<String>,
    user_email: Option<String>,
    user_name: Option<String>,
    admin_token: Option<String>,
) -> Identity {
    if let Some(token) = admin_token {
        return Identity::Admin { token };
    }
    if let Some(token) = user_token {
        return Identity::User {
            token,
            email: user_email.unwrap_or_default(),
            name: user_name.unwrap_or_default(),
        };
    }
    Identity::Guest
}

/// 会话上下文
///
/// 包含身份信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub identity: RwSignal<Identity>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            identity: RwSignal::new(Identity::Guest),
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 初始化会话：从 LocalStorage 加载身份，并注册回写 Effect
pub fn init_session(ctx: &SessionContext) {
    let loaded = resolve_identity(
        LocalStorage::get(KEY_USER_TOKEN),
        LocalStorage::get(KEY_USER_EMAIL),
        LocalStorage::get(KEY_USER_NAME),
        LocalStorage::get(KEY_ADMIN_TOKEN),
    );
    ctx.identity.set(loaded);

    // 身份变化时回写存储。写入某一侧 token 时清掉另一侧，
    // 避免残留的双 token 在下次加载时改变身份。
    let identity = ctx.identity;
    Effect::new(move |_| match identity.get() {
        Identity::Guest => {
            // 退出只清 token，邮箱与姓名保留方便下次登录
            LocalStorage::delete(KEY_USER_TOKEN);
            LocalStorage::delete(KEY_ADMIN_TOKEN);
        }
        Identity::User { token, email, name } => {
            LocalStorage::set(KEY_USER_TOKEN, &token);
            LocalStorage::set(KEY_USER_EMAIL, &email);
            LocalStorage::set(KEY_USER_NAME, &name);
            LocalStorage::delete(KEY_ADMIN_TOKEN);
        }
        Identity::Admin { token } => {
            LocalStorage::set(KEY_ADMIN_TOKEN, &token);
            LocalStorage::delete(KEY_USER_TOKEN);
        }
    });
}

/// 用户登录成功后写入身份（姓名沿用注册时存下的值）
pub fn login_user(ctx: &SessionContext, token: String, email: String) {
    let name = LocalStorage::get(KEY_USER_NAME).unwrap_or_default();
    ctx.identity.set(Identity::User { token, email, name });
}

/// 管理员登录成功后写入身份
pub fn login_admin(ctx: &SessionContext, token: String) {
    ctx.identity.set(Identity::Admin { token });
}

/// 注销并清除状态
pub fn logout(ctx: &SessionContext) {
    ctx.identity.set(Identity::Guest);
}

// =========================================================
// 单元测试
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_tokens_means_guest() {
        assert_eq!(resolve_identity(None, None, None, None), Identity::Guest);
    }

    #[test]
    fn user_token_resolves_to_user() {
        let identity = resolve_identity(
            Some("tok".into()),
            Some("a@b.c".into()),
            Some("Alice".into()),
            None,
        );
        assert_eq!(
            identity,
            Identity::User {
                token: "tok".into(),
                email: "a@b.c".into(),
                name: "Alice".into(),
            }
        );
        assert!(identity.is_user());
        assert_eq!(identity.user_token().as_deref(), Some("tok"));
        assert_eq!(identity.admin_token(), None);
    }

    #[test]
    fn missing_profile_slots_default_to_empty() {
        let identity = resolve_identity(Some("tok".into()), None, None, None);
        assert_eq!(identity.email().as_deref(), Some(""));
        // 没有姓名时退回邮箱（此处同为空）
        assert_eq!(identity.display_name().as_deref(), Some(""));
    }

    #[test]
    fn stale_dual_tokens_resolve_to_admin() {
        let identity = resolve_identity(
            Some("user-tok".into()),
            Some("a@b.c".into()),
            Some("Alice".into()),
            Some("admin-tok".into()),
        );
        assert_eq!(
            identity,
            Identity::Admin {
                token: "admin-tok".into()
            }
        );
        assert!(identity.is_admin());
        assert_eq!(identity.user_token(), None);
    }

    #[test]
    fn display_name_prefers_name_over_email() {
        let identity = resolve_identity(
            Some("tok".into()),
            Some("a@b.c".into()),
            Some("Alice".into()),
            None,
        );
        assert_eq!(identity.display_name().as_deref(), Some("Alice"));

        let unnamed = resolve_identity(Some("tok".into()), Some("a@b.c".into()), None, None);
        assert_eq!(unnamed.display_name().as_deref(), Some("a@b.c"));
    }
}
