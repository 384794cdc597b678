use api::ApiError;
use dioxus::prelude::*;
use shop::catalog::{filter_articles, related_articles};
use ui::components::{ArticleCard, EmptyState, ErrorState, SkeletonGrid};
use ui::use_api;

use crate::Route;

#[component]
pub fn Articles() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut articles = use_resource(move || {
        let api = api.clone();
        async move { api.articles().await }
    });
    let mut search = use_signal(String::new);
    let mut category = use_signal(|| Option::<String>::None);

    let body = match &*articles.read() {
        None => rsx! { SkeletonGrid { count: 6 } },
        Some(Err(e)) => rsx! {
            ErrorState {
                message: "Gagal memuat artikel: {e}",
                on_retry: move |_| articles.restart(),
            }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState { title: "Belum ada artikel" }
        },
        Some(Ok(list)) => {
            let mut categories: Vec<String> = list.iter().filter_map(|a| a.category.clone()).collect();
            categories.sort();
            categories.dedup();
            let selected = category();
            let shown: Vec<_> = filter_articles(list, selected.as_deref(), &search.read())
                .into_iter()
                .cloned()
                .collect();

            rsx! {
                div {
                    class: "flex flex-wrap items-center gap-2 mb-6",
                    input {
                        class: "field max-w-xs",
                        r#type: "search",
                        placeholder: "Cari artikel...",
                        value: "{search}",
                        oninput: move |evt: FormEvent| search.set(evt.value()),
                    }
                    button {
                        class: if selected.is_none() { "btn btn-primary" } else { "btn btn-outline" },
                        onclick: move |_| category.set(None),
                        "Semua"
                    }
                    for c in categories {
                        button {
                            key: "{c}",
                            class: if selected.as_deref() == Some(c.as_str()) { "btn btn-primary" } else { "btn btn-outline" },
                            onclick: {
                                let c = c.clone();
                                move |_| category.set(Some(c.clone()))
                            },
                            "{c}"
                        }
                    }
                }
                if shown.is_empty() {
                    EmptyState { title: "Tidak ada artikel yang cocok" }
                } else {
                    div {
                        class: "grid grid-cols-2 md:grid-cols-3 gap-4",
                        for article in shown {
                            ArticleCard {
                                key: "{article.id}",
                                article: article.clone(),
                                onclick: move |id| {
                                    nav.push(Route::ArticleDetail { id });
                                },
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        h1 { class: "text-2xl font-bold mb-4", "Artikel" }
        {body}
    }
}

#[component]
pub fn ArticleDetail(id: String) -> Element {
    let api = use_api();
    let nav = use_navigator();

    let article_api = api.clone();
    let mut article = use_resource(use_reactive!(|id| {
        let api = article_api.clone();
        async move { api.article(&id).await }
    }));
    let all = use_resource(move || {
        let api = api.clone();
        async move { api.articles().await }
    });

    let body = match &*article.read() {
        None => rsx! { div { class: "skeleton h-96 rounded-lg" } },
        Some(Err(ApiError::NotFound)) => rsx! {
            EmptyState { title: "Artikel tidak ditemukan" }
        },
        Some(Err(e)) => rsx! {
            ErrorState {
                message: "Gagal memuat artikel: {e}",
                on_retry: move |_| article.restart(),
            }
        },
        Some(Ok(current)) => {
            let related: Vec<_> = match &*all.read() {
                Some(Ok(list)) => related_articles(list, current, 3).into_iter().cloned().collect(),
                _ => Vec::new(),
            };
            let authors = current
                .authors
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");

            rsx! {
                article {
                    class: "flex flex-col gap-4 max-w-3xl",
                    if let Some(category) = current.category.clone() {
                        span { class: "text-xs uppercase tracking-wide text-green-700", "{category}" }
                    }
                    h1 { class: "text-3xl font-bold", "{current.title}" }
                    span { class: "text-sm text-neutral-500", "{authors} · {current.views} kali dibaca" }
                    if let Some(cover) = current.cover_image.clone() {
                        img { class: "w-full rounded-lg", src: "{cover}", alt: "{current.title}" }
                    }
                    div { class: "article-content", dangerous_inner_html: "{current.content}" }
                }
                if !related.is_empty() {
                    h2 { class: "text-xl font-semibold mt-10 mb-4", "Artikel Terkait" }
                    div {
                        class: "grid grid-cols-2 md:grid-cols-3 gap-4",
                        for article in related {
                            ArticleCard {
                                key: "{article.id}",
                                article: article.clone(),
                                onclick: move |id| {
                                    nav.push(Route::ArticleDetail { id });
                                },
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Link { class: "text-sm text-green-700", to: Route::Articles {}, "← Semua artikel" }
        {body}
    }
}
