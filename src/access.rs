//! 访问控制模块 - 领域模型
//!
//! 这是纯粹的决策层，不依赖 DOM、web_sys 或 Leptos。
//! 给定身份信号与访问要求，同步计算出唯一的导航结果。
//! 求值没有任何副作用，历史记录的写入由路由服务负责。

use serde::{Deserialize, Serialize};
use std::fmt::Display;

// =========================================================
// 角色 (Role)
// =========================================================

/// 用户角色
///
/// 封闭枚举。`Admin` 拥有全局覆盖权限：
/// 任何单项角色检查失败时，`Admin` 均可单独通过。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
        };
        write!(f, "{}", name)
    }
}

// =========================================================
// 身份信号 (Identity Signal)
// =========================================================

/// 身份信号快照
///
/// 由外部身份提供者（`auth` 模块）解析后注入，守卫只读。
/// `is_loading` 为 true 期间身份尚未解析完成。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentitySignal {
    /// 会话解析是否仍在进行中
    pub is_loading: bool,
    /// 是否已建立任何身份
    pub is_authenticated: bool,
    /// 已解析的角色。未认证或加载中时为 None；
    /// 已认证但尚未分配角色的账号同样为 None，属于合法状态。
    pub role: Option<Role>,
}

impl IdentitySignal {
    /// 解析中的身份（应用启动时的初始状态）
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            is_authenticated: false,
            role: None,
        }
    }

    /// 未认证的身份
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// 已解析且已认证的身份
    pub fn resolved(role: Option<Role>) -> Self {
        Self {
            is_loading: false,
            is_authenticated: true,
            role,
        }
    }
}

// =========================================================
// 访问要求 (Access Requirement)
// =========================================================

/// 守卫边界的访问要求
///
/// 每个受保护路由声明其中一种模式。三种模式构成和类型，
/// 因此"同时指定单一角色与角色集合"的歧义配置在类型上不可表达。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessRequirement {
    /// 无角色限制：任何已认证身份均可通过
    #[default]
    Unrestricted,
    /// 要求指定的单一角色
    SingleRole(Role),
    /// 角色集合：命中任意成员即可通过
    AnyOf(&'static [Role]),
}

// =========================================================
// 导航结果 (Navigation Outcome)
// =========================================================

/// 导航结果
///
/// 每次求值恰好产生一个结果。`L` 是不透明的位置类型，
/// 仅用于记录"用户原本要去哪里"，以便登录后返回。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome<L> {
    /// 身份解析中：渲染加载指示器，既不渲染子视图也不重定向
    Pending,
    /// 校验通过：渲染受保护的子视图
    Render,
    /// 未认证：重定向到登录页，携带原始位置
    RedirectToLogin { from: L },
    /// 已认证但角色不满足要求：重定向到默认页
    RedirectToDefault,
}

// =========================================================
// 守卫求值
// =========================================================

/// **核心守卫逻辑：计算导航结果**
///
/// 纯函数，按固定顺序求值：
/// 1. 身份解析中 → `Pending`
/// 2. 未认证 → `RedirectToLogin`（携带原始位置）
/// 3. 已认证但角色不满足要求（且非 Admin）→ `RedirectToDefault`
/// 4. 其余情况 → `Render`
///
/// 任何输入组合都映射到确定的结果，不存在错误分支。
/// 空的 `AnyOf` 集合不构成限制（等同 `Unrestricted`），
/// 调用方不得依赖空集合来拒绝访问。
pub fn evaluate<L>(
    identity: &IdentitySignal,
    requirement: &AccessRequirement,
    location: L,
) -> NavigationOutcome<L> {
    if identity.is_loading {
        return NavigationOutcome::Pending;
    }
    if !identity.is_authenticated {
        return NavigationOutcome::RedirectToLogin { from: location };
    }
    match requirement {
        AccessRequirement::Unrestricted => NavigationOutcome::Render,
        AccessRequirement::SingleRole(required) => match identity.role {
            // Admin 覆盖单一角色要求
            Some(Role::Admin) => NavigationOutcome::Render,
            Some(role) if role == *required => NavigationOutcome::Render,
            _ => NavigationOutcome::RedirectToDefault,
        },
        AccessRequirement::AnyOf(allowed) => {
            if allowed.is_empty() {
                // 空集合不构成限制
                return NavigationOutcome::Render;
            }
            match identity.role {
                // Admin 覆盖集合要求
                Some(Role::Admin) => NavigationOutcome::Render,
                Some(role) if allowed.contains(&role) => NavigationOutcome::Render,
                _ => NavigationOutcome::RedirectToDefault,
            }
        }
    }
}

#[cfg(test)]
mod tests;
