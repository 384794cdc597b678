use dioxus::prelude::*;
use shop::Article;

#[component]
pub fn ArticleCard(article: Article, onclick: EventHandler<String>) -> Element {
    let id = article.id.clone();
    let excerpt = article.excerpt(140);
    let author = article
        .authors
        .first()
        .map(|a| a.name.clone())
        .unwrap_or_default();
    let date = article
        .published_at
        .clone()
        .or_else(|| article.created_at.clone())
        .map(|d| d.chars().take(10).collect::<String>())
        .unwrap_or_default();

    rsx! {
        article {
            class: "flex flex-col rounded-lg border border-neutral-200 bg-white cursor-pointer overflow-hidden",
            onclick: move |_| onclick.call(id.clone()),
            if let Some(cover) = article.cover_image.clone() {
                img { class: "h-44 w-full object-cover", src: "{cover}", alt: "{article.title}" }
            }
            div {
                class: "flex flex-col gap-2 p-4",
                if let Some(category) = article.category.clone() {
                    span { class: "text-xs uppercase tracking-wide text-green-700", "{category}" }
                }
                h3 { class: "m-0 text-base font-semibold text-neutral-800", "{article.title}" }
                p { class: "m-0 text-sm text-neutral-600", "{excerpt}" }
                span { class: "text-xs text-neutral-500", "{author} · {date}" }
            }
        }
    }
}
