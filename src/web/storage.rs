//! LocalStorage 封装模块
//!
//! 基于 `web_sys::Storage` 的简洁接口。仅用于存放便利性数据
//! （如上次登录的用户名），任何会话凭据都不落地。

/// 本地存储操作封装
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 读取存储的字符串值；键不存在或发生错误时返回 None
    pub fn read(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 写入存储值，返回操作是否成功
    pub fn write(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }
}
