//! Root application component with routing and context providers.
//!
//! STARTUP
//! =======
//! `App` builds the session holder, the interceptor-wrapped transport and the
//! services on top of it, then (in the browser) resolves the session once.
//! Until that resolution settles, protected routes stay pending instead of
//! asking the admission gate, which would otherwise deny a valid session that
//! simply has not been checked yet.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{ProtectedParentRoute, ProtectedRoute, Redirect, Route, Router, Routes};

use crate::components::checking_session::CheckingSession;
use crate::components::main_layout::MainLayout;
use crate::config::BffConfig;
use crate::net::api::ApiClient;
use crate::net::interceptor::AuthInterceptor;
use crate::net::resolver::SessionResolver;
use crate::net::transport::{FetchTransport, Transport};
use crate::pages::{
    confirm::ConfirmPage, dashboard::DashboardPage, login::LoginPage, orders::OrdersPage, profile::ProfilePage,
    register::RegisterPage,
};
use crate::routing::gate::{AdmissionGate, admission_condition};
use crate::routing::navigator::{RouterBridge, RouterBridgeListener};
use crate::routing::table::{self, HOME_PATH, LOGIN_PATH, RouteEntry};
use crate::state::boot::BootStatus;
use crate::state::session::SessionStore;

/// Browser transport behind the session interceptor.
pub type PortalHttp = AuthInterceptor<FetchTransport, RouterBridge>;
/// Resource client provided through context.
pub type PortalApi = ApiClient<PortalHttp>;
/// Session resolver provided through context.
pub type PortalResolver = SessionResolver<PortalHttp>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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

/// Every handle the views pull from context, wired to one session.
#[derive(Clone)]
pub struct Services {
    pub config: BffConfig,
    pub session: SessionStore,
    pub boot: BootStatus,
    pub bridge: RouterBridge,
    pub gate: AdmissionGate,
    pub api: PortalApi,
    pub resolver: PortalResolver,
}

impl Services {
    pub fn new(config: BffConfig) -> Self {
        let session = SessionStore::new();
        let bridge = RouterBridge::new();
        let http = AuthInterceptor::new(FetchTransport, session.clone(), bridge.clone());
        Self {
            api: ApiClient::new(http.clone(), config.clone()),
            resolver: SessionResolver::new(http, session.clone(), config.clone()),
            gate: AdmissionGate::new(session.clone()),
            boot: BootStatus::new(),
            bridge,
            session,
            config,
        }
    }

    fn provide(&self) {
        provide_context(self.config.clone());
        provide_context(self.session.clone());
        provide_context(self.boot.clone());
        provide_context(self.bridge.clone());
        provide_context(self.api.clone());
        provide_context(self.resolver.clone());
    }

    /// Route condition for `route`, pending until boot resolution settles.
    pub fn guard(&self, route: RouteEntry) -> impl Fn() -> Option<bool> + Send + Sync + Clone + use<> {
        let boot = self.boot.clone();
        let gate = self.gate.clone();
        move || admission_condition(&boot, &gate, &route)
    }
}

/// Resolve the session once, then open the gate for route conditions.
///
/// Returns whether a session was found. Boot becomes ready either way.
pub async fn run_startup<T: Transport>(resolver: &SessionResolver<T>, boot: &BootStatus) -> bool {
    let resolved = resolver.resolve().await.is_ok();
    boot.mark_ready();
    resolved
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let services = Services::new(BffConfig::from_build_env());
    services.provide();

    #[cfg(feature = "hydrate")]
    {
        let resolver = services.resolver.clone();
        let boot = services.boot.clone();
        leptos::task::spawn_local(async move {
            run_startup(&resolver, &boot).await;
        });
    }

    let login_redirect = || LOGIN_PATH;

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="SEC Microservice"/>

        <Router>
            <RouterBridgeListener/>
            <Routes fallback=|| view! { <Redirect path=HOME_PATH/> }>
                <Route path=StaticSegment(table::LOGIN.segment) view=LoginPage/>
                <Route path=StaticSegment(table::REGISTER.segment) view=RegisterPage/>
                <Route path=StaticSegment(table::CONFIRM.segment) view=ConfirmPage/>
                <ProtectedParentRoute
                    path=StaticSegment(table::SHELL.segment)
                    view=MainLayout
                    condition=services.guard(table::SHELL)
                    redirect_path=login_redirect
                    fallback=|| view! { <CheckingSession/> }
                >
                    <ProtectedRoute
                        path=StaticSegment(table::DASHBOARD.segment)
                        view=DashboardPage
                        condition=services.guard(table::DASHBOARD)
                        redirect_path=login_redirect
                    />
                    <ProtectedRoute
                        path=StaticSegment(table::PROFILE.segment)
                        view=ProfilePage
                        condition=services.guard(table::PROFILE)
                        redirect_path=login_redirect
                    />
                    <ProtectedRoute
                        path=StaticSegment(table::ORDERS.segment)
                        view=OrdersPage
                        condition=services.guard(table::ORDERS)
                        redirect_path=login_redirect
                    />
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                </ProtectedParentRoute>
            </Routes>
        </Router>
    }
}
