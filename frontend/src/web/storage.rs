//! LocalStorage 封装模块
//!
//! 基于 `gloo-storage` 的原生接口，按原始字符串读写（不做 JSON 包装），
//! 键值与后端登录流程约定的存储键保持一致。

use gloo_storage::Storage as _;

/// 本地存储操作封装
///
/// 同步接口，作用域为浏览器 origin，跨页面刷新保留。
pub struct LocalStorage;

impl LocalStorage {
    /// 获取存储的字符串值，键不存在或出错时返回 `None`
    pub fn get(key: &str) -> Option<String> {
        gloo_storage::LocalStorage::raw().get_item(key).ok()?
    }

    /// 设置存储值，失败（如隐私模式下配额为零）时静默忽略
    pub fn set(key: &str, value: &str) {
        let _ = gloo_storage::LocalStorage::raw().set_item(key, value);
    }

    /// 删除存储的键值对
    pub fn delete(key: &str) {
        let _ = gloo_storage::LocalStorage::raw().remove_item(key);
    }
}
