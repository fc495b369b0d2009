//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guards::{Protected, Public};
use crate::components::session_provider::SessionProvider;
use crate::config::ApiConfig;
use crate::net::BlogClient;
use crate::net::transport::BrowserTransport;
use crate::pages::{
    create_blog::CreateBlogPage, edit_blog::EditBlogPage, home::HomePage, my_blogs::MyBlogsPage,
    sign_in::SignInPage, sign_up::SignUpPage, single_blog::SingleBlogPage, view_all::ViewAllPage,
};

/// Root application component.
///
/// Provides the API client and configuration, resolves the session, and
/// sets up client-side routing with every route behind a guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_env();
    let client = StoredValue::new_local(BlogClient::new(config.base_url.clone(), BrowserTransport));
    provide_context(client);
    provide_context(config);

    view! {
        <Title text="Inkwell"/>

        <SessionProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("signin") view=|| view! { <Public><SignInPage/></Public> }/>
                    <Route path=StaticSegment("signup") view=|| view! { <Public><SignUpPage/></Public> }/>
                    <Route path=StaticSegment("") view=|| view! { <Protected><HomePage/></Protected> }/>
                    <Route
                        path=(StaticSegment("view"), StaticSegment("blogs"))
                        view=|| view! { <Protected><ViewAllPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("my-blogs")
                        view=|| view! { <Protected><MyBlogsPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("blogs"), ParamSegment("id"))
                        view=|| view! { <Protected><SingleBlogPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("create"), StaticSegment("blog"))
                        view=|| view! { <Protected><CreateBlogPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("edit"), StaticSegment("blog"), ParamSegment("id"))
                        view=|| view! { <Protected><EditBlogPage/></Protected> }
                    />
                </Routes>
            </Router>
        </SessionProvider>
    }
}
