use crate::auth::{login, use_auth};
use crate::components::icons::BookOpen;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    let (username, set_username) = signal(auth.state.get_untracked().last_username);
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 会话解析完成前只显示加载指示器，避免已登录用户闪现登录页
    let is_loading = move || auth.state.get().is_loading;

    // 登录成功后的跳转由路由服务的身份监听自动完成，这里只负责表单
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if username.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please enter username and password".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let success = login(&auth, username.get_untracked(), password.get_untracked()).await;
            if !success {
                set_error_msg.set(Some("Sign-in failed. Check your credentials.".to_string()));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <Show when=move || !is_loading() fallback=|| view! { <div class="flex items-center justify-center min-h-screen"><span class="loading loading-spinner loading-lg text-primary"></span></div> }>
            <div class="hero min-h-screen bg-base-200">
                <div class="hero-content flex-col w-full max-w-md">
                    <div class="text-center mb-4">
                        <div class="flex flex-col items-center gap-2">
                            <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                                <BookOpen attr:class="h-8 w-8" />
                            </div>
                            <h1 class="text-3xl font-bold">"Durus "<span dir="rtl">"دروس"</span></h1>
                            <p class="text-base-content/70">
                                "Sign in to continue learning Arabic"
                            </p>
                        </div>
                    </div>

                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit>
                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            <div class="form-control">
                                <label class="label" for="username">
                                    <span class="label-text">"Username"</span>
                                </label>
                                <input
                                    id="username"
                                    type="text"
                                    placeholder="student@example.com"
                                    on:input=move |ev| set_username.set(event_target_value(&ev))
                                    prop:value=username
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="password">
                                    <span class="label-text">"Password"</span>
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="••••••••"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control mt-6">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                    } else {
                                        "Sign in".into_any()
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </Show>
    }
}
