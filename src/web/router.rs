//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"请求 -> 守卫 -> 历史 -> 加载"的导航流程，
//! 守卫求值委托给 `access` 模块的纯函数，身份信号由外部注入。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;
use crate::access::{self, IdentitySignal, NavigationOutcome};

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

// =========================================================
// 纯求解层（可在宿主机上测试）
// =========================================================

/// 历史记录写入方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
}

/// 导航结果对应的历史记录写入方式
///
/// 重定向结果一律替换当前历史记录，保证重定向后按"后退"
/// 不会回到被拦截的页面；放行的导航沿用调用方请求的方式。
pub fn history_mode<L>(outcome: &NavigationOutcome<L>, requested: HistoryMode) -> HistoryMode {
    match outcome {
        NavigationOutcome::RedirectToLogin { .. } | NavigationOutcome::RedirectToDefault => {
            HistoryMode::Replace
        }
        NavigationOutcome::Pending | NavigationOutcome::Render => requested,
    }
}

/// 计算目标路由的导航结果
///
/// 结合路由层策略（公开页、登录页的反向重定向）与守卫求值。
pub fn resolve(identity: &IdentitySignal, target: &AppRoute) -> NavigationOutcome<AppRoute> {
    if target.is_public() {
        // 已认证用户访问登录页时送回默认页
        if target.should_redirect_when_authenticated()
            && !identity.is_loading
            && identity.is_authenticated
        {
            return NavigationOutcome::RedirectToDefault;
        }
        return NavigationOutcome::Render;
    }
    access::evaluate(identity, &target.access_requirement(), target.clone())
}

// =========================================================
// 路由器服务
// =========================================================

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入身份信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 身份信号（注入，实现解耦）
    identity: Signal<IdentitySignal>,
    /// 登录前被拦截的目标路由，登录成功后返回
    pending_redirect: RwSignal<Option<AppRoute>>,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// # Arguments
    /// * `identity` - 身份信号，由外部注入实现解耦
    fn new(identity: Signal<IdentitySignal>) -> Self {
        // 初始化当前路由（从 URL 解析）
        let path = current_path();
        let initial_route = AppRoute::from_path(&path);
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            identity,
            pending_redirect: RwSignal::new(None),
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 获取注入的身份信号（供路由出口求值守卫）
    pub fn identity(&self) -> Signal<IdentitySignal> {
        self.identity
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 守卫求值 -> 写入历史 -> 更新状态
    pub fn navigate(&self, path: &str) {
        let target = AppRoute::from_path(path);
        self.apply(target, HistoryMode::Push);
    }

    /// 将守卫求值的结果落实到历史记录与路由信号
    ///
    /// # Arguments
    /// * `target` - 目标路由
    /// * `requested` - 放行时的历史写入方式
    fn apply(&self, target: AppRoute, requested: HistoryMode) {
        let identity = self.identity.get_untracked();
        let outcome = resolve(&identity, &target);
        let mode = history_mode(&outcome, requested);

        let route = match outcome {
            // 身份未解析完成：先落到目标路由，出口渲染加载指示器；
            // 解析完成后身份监听会重新求值。
            NavigationOutcome::Pending | NavigationOutcome::Render => target,
            NavigationOutcome::RedirectToLogin { from } => {
                web_sys::console::log_1(&"[Router] Access denied. Redirecting to login.".into());
                // 记录原始目标，登录成功后返回
                self.pending_redirect.set(Some(from));
                AppRoute::auth_failure_redirect()
            }
            NavigationOutcome::RedirectToDefault => {
                web_sys::console::log_1(
                    &"[Router] Insufficient role. Redirecting to dashboard.".into(),
                );
                AppRoute::default_redirect()
            }
        };

        match mode {
            HistoryMode::Push => push_history_state(&route.to_path()),
            HistoryMode::Replace => replace_history_state(&route.to_path()),
        }
        self.set_route.set(route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            // popstate 时也执行守卫；放行时用 Replace，
            // 避免向浏览器刚恢复的历史记录再推一条
            router.apply(target, HistoryMode::Replace);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 设置身份信号变化时的自动重定向
    ///
    /// 处理三种时机：会话解析完成、登录成功、登出（或会话失效）。
    fn setup_identity_effect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let identity = router.identity.get();
            if identity.is_loading {
                return;
            }
            let route = router.current_route.get_untracked();

            if identity.is_authenticated && route.should_redirect_when_authenticated() {
                // 登录成功：优先返回被拦截的原始目标
                let target = router
                    .pending_redirect
                    .get_untracked()
                    .unwrap_or_else(AppRoute::default_redirect);
                router.pending_redirect.set(None);
                web_sys::console::log_1(&"[Router] Signed in. Leaving login page.".into());
                router.apply(target, HistoryMode::Push);
            } else if !route.is_public() {
                // 解析完成或登出：重新走一遍守卫。未认证会落到登录页
                // 并记录原始位置，角色不足会落到默认页。
                router.apply(route, HistoryMode::Replace);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(identity: Signal<IdentitySignal>) -> RouterService {
    let router = RouterService::new(identity);

    // 初始化监听器
    router.init_popstate_listener();
    router.setup_identity_effect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 身份信号
    identity: Signal<IdentitySignal>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    // 提供路由服务到 Context
    provide_router(identity);

    children()
}

/// 路由出口组件
///
/// 根据当前路由与守卫求值结果渲染对应的组件。
/// `Pending`（以及重定向 effect 落地前的一帧）渲染加载指示器。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        let identity = router.identity().get();
        match resolve(&identity, &current) {
            NavigationOutcome::Render => matcher(current),
            _ => view! {
                <div class="flex items-center justify-center min-h-screen bg-base-200">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
            .into_any(),
        }
    }
}

#[cfg(test)]
mod tests;
