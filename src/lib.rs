//! Durus 前端应用
//!
//! 面向阿拉伯语学习的 CSR 应用，采用 Context-Driven 的高内聚低耦合架构：
//! - `access`: 访问控制领域模型（角色、访问要求、守卫求值）
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 身份状态管理
//! - `components`: UI 组件层

pub mod access;
mod api;
mod auth;
mod components {
    pub mod dashboard;
    mod icons;
    pub mod lessons;
    pub mod login;
    pub mod panels;
}
mod model;

use crate::auth::{AuthContext, init_auth};
use crate::components::dashboard::DashboardPage;
use crate::components::lessons::{LessonPage, LessonsPage, QuizPage};
use crate::components::login::LoginPage;
use crate::components::panels::{AdminPanelPage, TeacherPanelPage};

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use http::HttpClient;
    pub use storage::LocalStorage;
    pub use timer::Interval;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
/// 守卫求值已由路由服务与路由出口完成，这里只做纯匹配。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Lessons => view! { <LessonsPage /> }.into_any(),
        AppRoute::Lesson(id) => view! { <LessonPage id=id /> }.into_any(),
        AppRoute::Quiz(id) => view! { <QuizPage id=id /> }.into_any(),
        AppRoute::TeacherPanel => view! { <TeacherPanelPage /> }.into_any(),
        AppRoute::AdminPanel => view! { <AdminPanelPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 初始化认证状态（确认既有会话，异步解析）
    let identity = auth_ctx.identity_signal();
    init_auth(&auth_ctx);

    view! {
        // 3. 路由器组件：注入身份信号实现守卫
        <Router identity=identity>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
