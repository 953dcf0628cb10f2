use crate::access::Role;
use crate::api::DurusApi;
use crate::auth::{logout, use_auth};
use crate::components::icons::*;
use crate::model::{LessonSummary, ProgressSummary};
use crate::web::Interval;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 学习进度的刷新间隔（毫秒）
const PROGRESS_REFRESH_MILLIS: u32 = 60_000;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (lessons, set_lessons) = signal(Vec::<LessonSummary>::new());
    let (progress, set_progress) = signal(ProgressSummary::default());
    let (loading_lessons, set_loading_lessons) = signal(true);
    let (notification, set_notification) = signal(Option::<(String, bool)>::None); // 消息内容, 是否出错

    let load_lessons = move || {
        set_loading_lessons.set(true);
        spawn_local(async move {
            match DurusApi::default().get_lessons().await {
                Ok(data) => set_lessons.set(data),
                Err(e) => {
                    set_notification.set(Some((format!("Failed to load lessons: {}", e), true)));
                }
            }
            set_loading_lessons.set(false);
        });
    };

    let load_progress = move || {
        spawn_local(async move {
            if let Ok(summary) = DurusApi::default().get_progress().await {
                set_progress.set(summary);
            }
        });
    };

    // 初始加载
    Effect::new(move |_| {
        load_lessons();
        load_progress();
    });

    // 周期刷新学习进度
    let refresh =
        send_wrapper::SendWrapper::new(Interval::new(PROGRESS_REFRESH_MILLIS, move || {
            load_progress()
        }));
    on_cleanup(move || drop(refresh));

    let on_logout = move |_| {
        logout(&auth);
    };

    // 3秒后清除通知
    Effect::new(move |_| {
        if notification.get().is_some() {
            set_timeout(
                move || set_notification.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    let display_name = move || {
        auth.state
            .with(|s| s.user.as_ref().map(|u| u.display_name.clone()))
            .unwrap_or_default()
    };
    let role = move || auth.state.with(|s| s.role());
    let role_label = move || role().map(|r| r.to_string()).unwrap_or_else(|| "no role".to_string());
    let is_staff = move || matches!(role(), Some(Role::Teacher) | Some(Role::Admin));
    let is_admin = move || matches!(role(), Some(Role::Admin));

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                // 顶栏
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-3">
                        <div class="p-2 bg-primary/10 rounded-xl text-primary">
                            <BookOpen attr:class="h-7 w-7" />
                        </div>
                        <div>
                            <h1 class="text-2xl font-bold">"Durus "<span dir="rtl">"دروس"</span></h1>
                            <p class="text-sm text-base-content/70">
                                {display_name} " · " <span class="badge badge-ghost badge-sm">{role_label}</span>
                            </p>
                        </div>
                    </div>
                    <button class="btn btn-ghost btn-sm gap-2" on:click=on_logout>
                        <ArrowRightOnRectangle attr:class="h-5 w-5" />
                        "Sign out"
                    </button>
                </div>

                // 通知
                <Show when=move || notification.get().is_some()>
                    {move || {
                        let (msg, is_error) = notification.get().unwrap_or_default();
                        let class = if is_error { "alert alert-error" } else { "alert alert-success" };
                        view! { <div role="alert" class=class><span>{msg}</span></div> }
                    }}
                </Show>

                // 学习统计
                <div class="stats shadow w-full">
                    <div class="stat">
                        <div class="stat-figure text-primary"><GraduationCap attr:class="h-8 w-8" /></div>
                        <div class="stat-title">"Lessons completed"</div>
                        <div class="stat-value">{move || progress.get().lessons_completed}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-figure text-primary"><ChartBar attr:class="h-8 w-8" /></div>
                        <div class="stat-title">"Words learned"</div>
                        <div class="stat-value">{move || progress.get().words_learned}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Day streak"</div>
                        <div class="stat-value text-primary">{move || progress.get().streak_days}</div>
                    </div>
                </div>

                // 角色入口（Admin 同时可见教师工作台）
                <div class="flex flex-wrap gap-3">
                    <button class="btn btn-primary btn-sm" on:click=move |_| router.navigate("/lessons")>
                        "Browse lessons"
                    </button>
                    <Show when=is_staff>
                        <button class="btn btn-secondary btn-sm" on:click=move |_| router.navigate("/teacher")>
                            "Teacher workspace"
                        </button>
                    </Show>
                    <Show when=is_admin>
                        <button class="btn btn-accent btn-sm gap-2" on:click=move |_| router.navigate("/admin")>
                            <ShieldCheck attr:class="h-4 w-4" />
                            "Admin panel"
                        </button>
                    </Show>
                </div>

                // 继续学习
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">"Continue learning"</h2>
                        <Show
                            when=move || !loading_lessons.get()
                            fallback=|| view! { <span class="loading loading-spinner text-primary"></span> }
                        >
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                {move || lessons.get().into_iter().take(6).map(|lesson| {
                                    let path = format!("/lessons/{}", lesson.id);
                                    view! {
                                        <div
                                            class="card bg-base-200 cursor-pointer hover:bg-base-300 transition-colors"
                                            on:click=move |_| router.navigate(&path)
                                        >
                                            <div class="card-body p-4">
                                                <h3 class="font-bold" dir="rtl">{lesson.title_ar.clone()}</h3>
                                                <p class="text-sm text-base-content/70">{lesson.title_en.clone()}</p>
                                                <progress class="progress progress-primary" value=lesson.progress.to_string() max="100"></progress>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
