use leptos::prelude::LeptosOptions;

use crate::content::Content;

/// State shared by the axum handlers.
#[derive(Clone, Debug)]
pub struct Context {
    pub leptos_options: LeptosOptions,
    pub content: Content,
}

// Leptos handlers only need the options out of the router state.
impl axum::extract::FromRef<Context> for LeptosOptions {
    fn from_ref(value: &Context) -> Self {
        value.leptos_options.clone()
    }
}
