//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义应用的所有路由、URL 映射以及每个守卫边界的访问要求声明。

use crate::access::{AccessRequirement, Role};
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 学习面板 (需要认证)
    Dashboard,
    /// 课程列表 (需要认证)
    Lessons,
    /// 课程详情，携带课程 ID
    Lesson(String),
    /// 测验页，携带测验 ID (仅教师与学生)
    Quiz(String),
    /// 教师工作台 (仅教师)
    TeacherPanel,
    /// 管理面板 (仅管理员)
    AdminPanel,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        // 统一去掉尾部斜杠再匹配
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        match path {
            "/" | "/login" => Self::Login,
            "/dashboard" => Self::Dashboard,
            "/lessons" => Self::Lessons,
            "/teacher" => Self::TeacherPanel,
            "/admin" => Self::AdminPanel,
            _ => {
                if let Some(id) = path.strip_prefix("/lessons/") {
                    if !id.is_empty() && !id.contains('/') {
                        return Self::Lesson(id.to_string());
                    }
                }
                if let Some(id) = path.strip_prefix("/quiz/") {
                    if !id.is_empty() && !id.contains('/') {
                        return Self::Quiz(id.to_string());
                    }
                }
                Self::NotFound
            }
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Lessons => "/lessons".to_string(),
            Self::Lesson(id) => format!("/lessons/{}", id),
            Self::Quiz(id) => format!("/quiz/{}", id),
            Self::TeacherPanel => "/teacher".to_string(),
            Self::AdminPanel => "/admin".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// 该路由是否为公开页面（不经过守卫）
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Login | Self::NotFound)
    }

    /// **守卫边界声明：该路由的访问要求**
    ///
    /// 仅对受保护路由求值；公开路由不会进入守卫。
    pub fn access_requirement(&self) -> AccessRequirement {
        match self {
            Self::Quiz(_) => AccessRequirement::AnyOf(&[Role::Teacher, Role::Student]),
            Self::TeacherPanel => AccessRequirement::SingleRole(Role::Teacher),
            Self::AdminPanel => AccessRequirement::SingleRole(Role::Admin),
            _ => AccessRequirement::Unrestricted,
        }
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 角色不足时（以及登录成功后）的默认重定向目标
    pub fn default_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests;
