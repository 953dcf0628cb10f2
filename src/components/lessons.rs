use crate::api::DurusApi;
use crate::model::{LessonDetail, LessonSummary, QuizQuestion};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 课程列表页
#[component]
pub fn LessonsPage() -> impl IntoView {
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
                    <h1 class="text-2xl font-bold">"Lessons "<span dir="rtl">"الدروس"</span></h1>
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
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {move || lessons.get().into_iter().map(|lesson| {
                            let path = format!("/lessons/{}", lesson.id);
                            view! {
                                <div
                                    class="card bg-base-100 shadow cursor-pointer hover:shadow-lg transition-shadow"
                                    on:click=move |_| router.navigate(&path)
                                >
                                    <div class="card-body">
                                        <div class="flex items-center justify-between">
                                            <h2 class="card-title" dir="rtl">{lesson.title_ar.clone()}</h2>
                                            <span class="badge badge-outline">"Level " {lesson.level}</span>
                                        </div>
                                        <p class="text-base-content/70">{lesson.title_en.clone()}</p>
                                        <progress class="progress progress-primary" value=lesson.progress.to_string() max="100"></progress>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </Show>
            </div>
        </div>
    }
}

/// 课程详情页
#[component]
pub fn LessonPage(
    /// 课程 ID
    id: String,
) -> impl IntoView {
    let router = use_router();

    let (lesson, set_lesson) = signal(Option::<LessonDetail>::None);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new({
        let id = id.clone();
        move |_| {
            let id = id.clone();
            spawn_local(async move {
                match DurusApi::default().get_lesson(&id).await {
                    Ok(data) => set_lesson.set(Some(data)),
                    Err(e) => set_error_msg.set(Some(format!("Failed to load lesson: {}", e))),
                }
            });
        }
    });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-3xl mx-auto space-y-6">
                <button class="btn btn-ghost btn-sm" on:click=move |_| router.navigate("/lessons")>
                    "Back to lessons"
                </button>

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                {move || lesson.get().map(|detail| {
                    let quiz_button = detail.quiz_id.clone().map(|quiz_id| {
                        let path = format!("/quiz/{}", quiz_id);
                        view! {
                            <button class="btn btn-primary" on:click=move |_| router.navigate(&path)>
                                "Take the quiz"
                            </button>
                        }
                    });
                    view! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body space-y-4">
                                <div>
                                    <h1 class="text-3xl font-bold" dir="rtl">{detail.title_ar.clone()}</h1>
                                    <p class="text-lg text-base-content/70">{detail.title_en.clone()}</p>
                                </div>
                                <p>{detail.description.clone()}</p>

                                <h2 class="text-xl font-bold">"Vocabulary"</h2>
                                <div class="overflow-x-auto">
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>"Arabic"</th>
                                                <th>"Transliteration"</th>
                                                <th>"Translation"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {detail.vocabulary.iter().map(|entry| view! {
                                                <tr>
                                                    <td dir="rtl" class="text-lg">{entry.arabic.clone()}</td>
                                                    <td class="italic">{entry.transliteration.clone()}</td>
                                                    <td>{entry.translation.clone()}</td>
                                                </tr>
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                </div>

                                <div class="card-actions justify-end">{quiz_button}</div>
                            </div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

/// 测验页
#[component]
pub fn QuizPage(
    /// 测验 ID
    id: String,
) -> impl IntoView {
    let router = use_router();

    let (questions, set_questions) = signal(Vec::<QuizQuestion>::new());
    let (answers, set_answers) = signal(Vec::<Option<usize>>::new());
    let (submitted, set_submitted) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new({
        let id = id.clone();
        move |_| {
            let id = id.clone();
            spawn_local(async move {
                match DurusApi::default().get_quiz(&id).await {
                    Ok(data) => {
                        set_answers.set(vec![None; data.len()]);
                        set_questions.set(data);
                    }
                    Err(e) => set_error_msg.set(Some(format!("Failed to load quiz: {}", e))),
                }
            });
        }
    });

    let score = move || {
        let questions = questions.get();
        let answers = answers.get();
        questions
            .iter()
            .zip(answers.iter())
            .filter(|(q, a)| **a == Some(q.answer_index))
            .count()
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-2xl mx-auto space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold">"Quiz"</h1>
                    <button class="btn btn-ghost btn-sm" on:click=move |_| router.navigate("/lessons")>
                        "Back to lessons"
                    </button>
                </div>

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                {move || questions.get().into_iter().enumerate().map(|(q_idx, question)| {
                    view! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h2 class="font-bold" dir="auto">{question.prompt.clone()}</h2>
                                <div class="space-y-2">
                                    {question.choices.iter().enumerate().map(|(c_idx, choice)| {
                                        let selected = move || answers.with(|a| a.get(q_idx).copied().flatten()) == Some(c_idx);
                                        let correct = c_idx == question.answer_index;
                                        let class = move || {
                                            if submitted.get() && selected() {
                                                if correct { "btn btn-success btn-block justify-start" }
                                                else { "btn btn-error btn-block justify-start" }
                                            } else if selected() {
                                                "btn btn-primary btn-block justify-start"
                                            } else {
                                                "btn btn-ghost btn-block justify-start"
                                            }
                                        };
                                        let choice = choice.clone();
                                        view! {
                                            <button
                                                class=class
                                                dir="auto"
                                                on:click=move |_| {
                                                    if !submitted.get_untracked() {
                                                        set_answers.update(|a| {
                                                            if let Some(slot) = a.get_mut(q_idx) {
                                                                *slot = Some(c_idx);
                                                            }
                                                        });
                                                    }
                                                }
                                            >
                                                {choice}
                                            </button>
                                        }
                                    }).collect_view()}
                                </div>
                            </div>
                        </div>
                    }
                }).collect_view()}

                <Show when=move || !questions.get().is_empty()>
                    <Show
                        when=move || submitted.get()
                        fallback=move || view! {
                            <button class="btn btn-primary btn-block" on:click=move |_| set_submitted.set(true)>
                                "Check answers"
                            </button>
                        }
                    >
                        <div role="alert" class="alert alert-info">
                            <span>{move || format!("Score: {} / {}", score(), questions.get().len())}</span>
                        </div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
