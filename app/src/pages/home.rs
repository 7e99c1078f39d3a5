use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::{
    BriefIntroduction, Connect, DiffLine, Introduction, MediumArticles, Navigation,
    WorkExperience,
};
use crate::content::Content;

#[component]
pub fn Index() -> impl IntoView {
    match use_context::<Content>() {
        Some(content) => {
            let title = format!(
                "{} - {}",
                content.brief_introduction.name, content.brief_introduction.title
            );
            let description = content.introduction.body.clone();
            leptos::either::Either::Left(view! {
                <Title text=title />
                <Meta name="description" content=description />
                <Page content=content />
            })
        }
        None => leptos::either::Either::Right(view! {
            <main class="portfolio">
                <p>"Content unavailable."</p>
            </main>
        }),
    }
}

/// The whole page, sections in their fixed order with a divider in between.
#[component]
pub fn Page(content: Content) -> impl IntoView {
    let Content {
        brief_introduction,
        introduction,
        articles,
        work_experience,
        connect,
    } = content;

    view! {
        <div class="background">
            <main class="portfolio">
                <Navigation />
                <BriefIntroduction data=brief_introduction />
                <DiffLine />
                <Introduction data=introduction />
                <DiffLine />
                <MediumArticles data=articles />
                <DiffLine />
                <WorkExperience data=work_experience />
                <DiffLine />
                <Connect data=connect />
            </main>
        </div>
    }
}
