//! 认证模块
//!
//! 管理用户身份状态，与路由系统解耦。
//! 路由服务通过注入的身份信号读取加载、认证与角色信息，
//! 本模块从不直接触发导航。

use crate::access::{IdentitySignal, Role};
use crate::api::DurusApi;
use crate::model::UserProfile;
use crate::web::LocalStorage;
use leptos::prelude::*;
use leptos::task::spawn_local;

const STORAGE_USERNAME_KEY: &str = "durus_username";

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 当前用户（认证成功后存在）
    pub user: Option<UserProfile>,
    /// 会话解析是否进行中（应用启动时为 true，直到服务端确认）
    pub is_loading: bool,
    /// 上次登录的用户名（仅用于表单自动填充）
    pub last_username: String,
}

impl AuthState {
    /// 是否已建立身份
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// 当前用户的角色
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(|u| u.role)
    }
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文
    ///
    /// 初始状态为"解析中"，直到 `init_auth` 向服务端确认既有会话。
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState {
            is_loading: true,
            ..AuthState::default()
        });
        Self { state, set_state }
    }

    /// 获取身份信号（用于路由服务注入）
    pub fn identity_signal(&self) -> Signal<IdentitySignal> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| IdentitySignal {
                is_loading: s.is_loading,
                is_authenticated: s.is_authenticated(),
                role: s.role(),
            })
        })
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 从 LocalStorage 加载上次的用户名（方便输入），
/// 并异步向服务端确认既有的 Cookie 会话。
/// 在确认返回之前身份信号保持 `is_loading = true`。
pub fn init_auth(ctx: &AuthContext) {
    let set_state = ctx.set_state;

    set_state.update(|state| {
        if let Some(name) = LocalStorage::read(STORAGE_USERNAME_KEY) {
            state.last_username = name;
        }
    });

    spawn_local(async move {
        let user = DurusApi::default().current_session().await.ok().flatten();
        set_state.update(|state| {
            state.user = user;
            state.is_loading = false;
        });
    });
}

/// 登录并保存状态
///
/// # Arguments
/// * `ctx` - 认证上下文
/// * `username` - 用户名
/// * `password` - 密码
///
/// # Returns
/// 登录是否成功
pub async fn login(ctx: &AuthContext, username: String, password: String) -> bool {
    match DurusApi::default().login(&username, &password).await {
        Ok(user) => {
            // 只保存用户名以便下次自动填充，凭据由 Cookie 承载
            LocalStorage::write(STORAGE_USERNAME_KEY, &username);

            ctx.set_state.update(|state| {
                state.last_username = username;
                state.user = Some(user);
                state.is_loading = false;
            });
            true
        }
        Err(_) => false,
    }
}

/// 注销并清除状态
///
/// 导航将由路由服务的身份信号监听自动处理。
pub fn logout(ctx: &AuthContext) {
    spawn_local(async {
        // 服务端会话清理失败不影响本地登出
        let _ = DurusApi::default().logout().await;
    });
    ctx.set_state.update(|state| {
        state.user = None;
    });
    // 注意：不需要手动导航，路由服务会监听身份信号变化并自动重定向
}
