use crate::api::DurusApi;
use crate::model::{LessonSummary, ManagedUser};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 教师工作台
///
/// 仅 `Teacher` 可达（Admin 经由覆盖权限同样可达），
/// 路由守卫在进入前已完成校验。
#[component]
pub fn TeacherPanelPage() -> impl IntoView {
    let router = use_router();

    let (lessons, set_lessons) = signal(Vec::<LessonSummary>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new(move |_| {
        spawn_local(async move {
            match DurusApi::default().get_lessons().await {
                Ok(data) => set_lessons.set(data),
                Err(e) => set_error_msg.set(Some(format!("Failed to load lessons: {}", e))),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold">"Teacher workspace"</h1>
                    <button class="btn btn-ghost btn-sm" on:click=move |_| router.navigate("/dashboard")>
                        "Back to dashboard"
                    </button>
                </div>

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="flex justify-center p-12"><span class="loading loading-spinner loading-lg text-primary"></span></div> }
                >
                    <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Lesson"</th>
                                    <th>"Level"</th>
                                    <th>"Class progress"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || lessons.get().into_iter().map(|lesson| view! {
                                    <tr>
                                        <td>
                                            <div class="font-bold" dir="rtl">{lesson.title_ar.clone()}</div>
                                            <div class="text-sm text-base-content/70">{lesson.title_en.clone()}</div>
                                        </td>
                                        <td><span class="badge badge-outline">{lesson.level}</span></td>
                                        <td class="w-1/3">
                                            <progress class="progress progress-primary" value=lesson.progress.to_string() max="100"></progress>
                                        </td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>
        </div>
    }
}

/// 管理面板
///
/// 仅 `Admin` 可达，路由守卫在进入前已完成校验。
#[component]
pub fn AdminPanelPage() -> impl IntoView {
    let router = use_router();

    let (users, set_users) = signal(Vec::<ManagedUser>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new(move |_| {
        spawn_local(async move {
            match DurusApi::default().list_users().await {
                Ok(data) => set_users.set(data),
                Err(e) => set_error_msg.set(Some(format!("Failed to load users: {}", e))),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold">"Admin panel"</h1>
                    <button class="btn btn-ghost btn-sm" on:click=move |_| router.navigate("/dashboard")>
                        "Back to dashboard"
                    </button>
                </div>

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="flex justify-center p-12"><span class="loading loading-spinner loading-lg text-primary"></span></div> }
                >
                    <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"User"</th>
                                    <th>"Role"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || users.get().into_iter().map(|user| {
                                    let role_label = user
                                        .role
                                        .map(|r| r.to_string())
                                        .unwrap_or_else(|| "unassigned".to_string());
                                    view! {
                                        <tr>
                                            <td class="font-bold">{user.display_name.clone()}</td>
                                            <td><span class="badge badge-ghost">{role_label}</span></td>
                                            <td>
                                                {if user.active {
                                                    view! { <span class="badge badge-success badge-sm">"active"</span> }.into_any()
                                                } else {
                                                    view! { <span class="badge badge-error badge-sm">"disabled"</span> }.into_any()
                                                }}
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>
        </div>
    }
}
