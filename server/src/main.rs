use leptos::prelude::*;

mod export;

#[tokio::main]
async fn main() {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    let conf = get_configuration(None).unwrap();
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;

    // The page trusts the literals (no clamping in the star renderer), so
    // refuse to serve anything if they are inconsistent.
    if let Err(error) = app::content::get().verify() {
        log::error!("invalid portfolio content: {}", error);
        std::process::exit(1);
    }

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    let app_fn = {
        let options = leptos_options.clone();
        move || app::shell(options.clone())
    };

    let export_method_router = axum::routing::get(export::handler);
    let app = axum::Router::new()
        .route(export::URL_PATH, export_method_router)
        .leptos_routes(&leptos_options, routes, app_fn)
        .fallback(leptos_axum::file_and_error_handler::<LeptosOptions, _>(
            app::shell,
        ))
        .with_state(leptos_options.clone());

    // run our app with hyper
    // `axum::Server` is a re-export of `hyper::Server`
    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
