use leptos::prelude::*;

use crate::content;

/// Icons are shipped pre-sized, this is the square they are displayed in.
pub const ICON_SIZE: u32 = 32;

#[component]
pub fn Navigation() -> impl IntoView {
    view! {
        <nav class="navigation">
            <a href="/">"Home"</a>
        </nav>
    }
}

#[component]
pub fn DiffLine() -> impl IntoView {
    view! { <div class="diff-line"></div> }
}

/// Subheading shared by every section, its id makes the section linkable.
#[component]
pub fn SectionTitle(title: String) -> impl IntoView {
    let id = slug::slugify(&title);
    view! { <h2 class="section-title" id=id>{title}</h2> }
}

#[component]
pub fn Icon(image: content::ImageRef) -> impl IntoView {
    let size = ICON_SIZE.to_string();
    view! {
        <img class="icon" src=image.src alt=image.alt width=size.clone() height=size />
    }
}

#[component]
pub fn BriefIntroduction(data: content::BriefIntroduction) -> impl IntoView {
    view! {
        <header class="brief-introduction">
            <h1 class="name">{data.name}</h1>
            <p class="muted">{data.title}</p>
        </header>
    }
}

#[component]
pub fn Introduction(data: content::Introduction) -> impl IntoView {
    view! {
        <section class="introduction">
            <SectionTitle title=data.title />
            <p class="muted">{data.body}</p>
        </section>
    }
}

#[component]
pub fn MediumArticles(data: content::MediumArticles) -> impl IntoView {
    view! {
        <section class="articles">
            <SectionTitle title=data.title />
            {data
                .articles
                .into_iter()
                .map(|article| {
                    view! {
                        <a class="article-card" href=article.url>
                            <div class="article-icon">
                                <Icon image=article.icon />
                            </div>
                            <div>
                                <b>{article.headline}</b>
                                <p class="muted">{article.subtitle}</p>
                            </div>
                        </a>
                    }
                })
                .collect_view()}
        </section>
    }
}

// Entries have no identity of their own, they are rendered (and keyed) by
// their position in the list.
#[component]
pub fn WorkExperience(data: content::WorkExperience) -> impl IntoView {
    view! {
        <section class="work-experience">
            <SectionTitle title=data.title />
            {data
                .entries
                .into_iter()
                .map(|entry| {
                    let tech_stack = entry.tech_stack_line();
                    let company = format!("{} \u{2022} {}", entry.company, entry.country);
                    let role = format!("{} \u{2014} {}", entry.job_title, entry.tenure_span);
                    view! {
                        <div class="experience">
                            <a href=entry.url target="_blank" rel="noreferrer">{company}</a>
                            <p class="muted">{role}</p>
                            <p class="muted">{tech_stack}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
pub fn Connect(data: content::Connect) -> impl IntoView {
    view! {
        <section class="connect">
            <SectionTitle title=data.title />
            {data
                .links
                .into_iter()
                .map(|link| {
                    view! {
                        <div class="connect-link">
                            <a href=link.url target="_blank" rel="noreferrer">{link.name}</a>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
