//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

const FEATURES: [(&str, &str); 4] = [
    ("AI Detection", "Flags AI-generated passages word by word."),
    ("Instant Reports", "Pie charts and highlighted text for every upload."),
    ("Upload History", "Track scores across documents over time."),
    ("Common Formats", "Accepts .txt, .doc, .docx, and .pdf up to 10MB."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <div class="alert alert--info" role="alert">
                <strong>"About PlagiGuard: "</strong>
                "an AI-powered platform for detecting AI-generated and plagiarized content. "
                "The system may need a few minutes to warm up after periods of inactivity."
            </div>
            <section class="landing__hero">
                <h1>"PlagiGuard"</h1>
                <h2>"AI Content Detection Made Simple"</h2>
                <p>"Upload a document and see which parts read as machine-written."</p>
                <div class="landing__actions">
                    <A href="/register" attr:class="btn btn--primary">"Start Detection"</A>
                    <A href="/login" attr:class="btn btn--ghost">"Login"</A>
                </div>
            </section>
            <section class="landing__features">
                <h2>"Why Choose PlagiGuard?"</h2>
                <div class="card-grid">
                    {FEATURES
                        .iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="card">
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <footer class="landing__footer">
                <A href="/admin/login">"Administrator sign in"</A>
            </footer>
        </div>
    }
}
