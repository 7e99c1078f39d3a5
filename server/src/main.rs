use anyhow::Context as _;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};

use portfolio::context::Context;
use portfolio::Content;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let conf = get_configuration(None).context("Could not read the Leptos configuration")?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;

    let content = Content::embedded().context("Could not parse the portfolio content")?;
    for finding in content.lint() {
        log::warn!("{}", finding);
    }

    let ctx = Context {
        leptos_options: leptos_options.clone(),
        content,
    };
    let app = router(ctx);

    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Could not bind {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}

fn router(ctx: Context) -> axum::Router {
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(portfolio::App);
    let ctx_fn = {
        let ctx = ctx.clone();
        move || provide_context(ctx.content.clone())
    };
    let app_fn = {
        let ctx = ctx.clone();
        move || portfolio::shell(ctx.leptos_options.clone())
    };

    axum::Router::new()
        .leptos_routes_with_context(&ctx, routes, ctx_fn, app_fn)
        // Serves the stylesheet and the icons out of the site root, renders the 404 page otherwise.
        .fallback(leptos_axum::file_and_error_handler::<Context, _>(portfolio::shell))
        .with_state(ctx)
}
