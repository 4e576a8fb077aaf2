//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::admin::{
    analytics::AdminAnalyticsPage, dashboard::AdminDashboardPage, documents::AdminDocumentsPage,
    login::AdminLoginPage, settings::AdminSettingsPage, signup::AdminSignupPage, users::AdminUsersPage,
};
use crate::pages::{
    dashboard::DashboardPage, forgot_password::ForgotPasswordPage, history::HistoryPage, landing::LandingPage,
    login::LoginPage, profile::ProfilePage, register::RegisterPage, reset_password::ResetPasswordPage,
    result::ResultPage,
};
use crate::state::{result::ResultState, session::SessionState, upload::UploadState};

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

/// Root application component.
///
/// Provides the session, upload, and result contexts and registers every
/// route. Stored sessions are read once hydration starts; until then guards
/// hold off redirecting.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    provide_context(RwSignal::new(UploadState::default()));
    provide_context(RwSignal::new(ResultState::default()));

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        session.set(SessionState::from_store(&crate::net::browser::LocalStorageSessions));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/plagiguard-web.css"/>
        <Title text="PlagiGuard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("result") view=ResultPage/>
                <Route path=StaticSegment("history") view=HistoryPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("signup")) view=AdminSignupPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=AdminDashboardPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("users")) view=AdminUsersPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("documents")) view=AdminDocumentsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("analytics")) view=AdminAnalyticsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("settings")) view=AdminSettingsPage/>
            </Routes>
        </Router>
    }
}
