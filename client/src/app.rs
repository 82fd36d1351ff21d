//! Root application component with routing and context providers.

#[cfg(feature = "hydrate")]
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::{ProtectedRoute, PublicRoute};
use crate::components::site_header::SiteHeader;
use crate::config::AuthConfig;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, profile::ProfilePage, roadmap::RoadmapPage,
    signup::SignupPage,
};
use crate::state::auth::AuthState;

#[cfg(feature = "hydrate")]
type BrowserSessionHook = crate::state::session::SessionHook<crate::net::gotrue::GoTrueClient>;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `auth` is written into `<meta>` tags for `AuthConfig::from_document`.
pub fn shell(options: LeptosOptions, auth: AuthConfig) -> impl IntoView {
    let auth_meta = auth
        .meta_entries()
        .into_iter()
        .map(|(name, content)| view! { <meta name=name content=content/> })
        .collect_view();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {auth_meta}
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Handle to the app-wide session hook, provided via context.
///
/// Read `auth` for the current state. In the browser the hook itself lives
/// in local arena storage because it holds `Rc` provider state.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub auth: RwSignal<AuthState>,
    #[cfg(feature = "hydrate")]
    hook: StoredValue<Rc<BrowserSessionHook>, LocalStorage>,
}

impl SessionContext {
    /// Create the session hook, mirror it into `auth`, and start the
    /// initial session lookup. On the server this only wraps the signal,
    /// which stays in its loading state.
    pub(crate) fn install(auth: RwSignal<AuthState>) -> Self {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::gotrue::{GoTrueClient, SESSION_STORAGE_KEY};
            use crate::state::redirect::REDIRECT_AFTER_LOGIN_KEY;
            use crate::state::session::SessionHook;
            use crate::util::storage::BrowserStorage;

            let config = AuthConfig::from_document().unwrap_or_else(|| {
                log::warn!("auth provider config missing from document; visitors stay signed out");
                AuthConfig::default()
            });
            let client = Rc::new(GoTrueClient::new(config, Rc::new(BrowserStorage::local())));
            let hook = SessionHook::new(client, move |state: &AuthState| {
                let _ = auth.try_set(state.clone());
            })
            .clears(Rc::new(BrowserStorage::local()), &[SESSION_STORAGE_KEY])
            .clears(Rc::new(BrowserStorage::session()), &[REDIRECT_AFTER_LOGIN_KEY]);

            let hook = Rc::new(hook);
            let starter = Rc::clone(&hook);
            leptos::task::spawn_local(async move { starter.start().await });

            Self {
                auth,
                hook: StoredValue::new_local(hook),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self { auth }
        }
    }

    /// Sign out and navigate home; see `SessionHook::sign_out`.
    pub fn sign_out<F>(&self, navigate: F)
    where
        F: Fn(&str, NavigateOptions) + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let hook = self.hook.get_value();
            leptos::task::spawn_local(async move {
                hook.sign_out(|path| navigate(path, NavigateOptions::default())).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = navigate;
        }
    }

    #[cfg(feature = "hydrate")]
    pub fn provider(&self) -> Rc<crate::net::gotrue::GoTrueClient> {
        Rc::clone(self.hook.get_value().provider())
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(SessionContext::install(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/futurepath.css"/>
        <Title text="FuturePath"/>

        <Router>
            <SiteHeader/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }
                />
                <Route
                    path=StaticSegment("signup")
                    view=|| view! { <PublicRoute><SignupPage/></PublicRoute> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("view-roadmap")
                    view=|| view! { <ProtectedRoute><RoadmapPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
