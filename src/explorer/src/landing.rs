use std::{fmt::Display, sync::Arc};

use axum::{Router, extract::State, response::Html, routing::get};

use crate::{
    html::{Table, document, escape},
    preview::{PREVIEW_ROWS, PreviewOutcome, PreviewSource},
};

pub const DEFAULT_GRADIO_URL: &str = "https://your-gradio-demo-url.example";
pub const DEFAULT_STREAMLIT_URL: &str = "https://your-streamlit-dashboard.example";

/// Outbound links shown on the landing page. Fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingConfig {
    pub gradio_url: String,
    pub streamlit_url: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            gradio_url: DEFAULT_GRADIO_URL.to_string(),
            streamlit_url: DEFAULT_STREAMLIT_URL.to_string(),
        }
    }
}

/// View model for `GET /`.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingPage<'a> {
    pub config: &'a LandingConfig,
    pub preview: Option<Table>,
    pub message: Option<String>,
}

impl<'a> LandingPage<'a> {
    pub fn new(config: &'a LandingConfig, outcome: PreviewOutcome) -> Self {
        Self {
            config,
            preview: outcome.table,
            message: Some(outcome.message).filter(|m| !m.is_empty()),
        }
    }
}

#[derive(Clone)]
pub struct LandingState {
    pub config: Arc<LandingConfig>,
    pub source: Arc<PreviewSource>,
}

pub fn router(config: LandingConfig, source: PreviewSource) -> Router {
    let state = LandingState {
        config: Arc::new(config),
        source: Arc::new(source),
    };

    Router::new().route("/", get(index)).with_state(state)
}

async fn index(State(state): State<LandingState>) -> Html<String> {
    let outcome = state.source.load(PREVIEW_ROWS).await;
    Html(LandingPage::new(&state.config, outcome).to_string())
}

const STYLE: &str = r#"
body { font-family: Arial, sans-serif; margin: 0; padding: 0; background-color: #f5fafc; }
header { background: #024873; color: white; padding: 1.5rem 2rem; }
header h1 { margin: 0; }
header p { margin: 0.3rem 0 0 0; }
main { padding: 1.5rem 2rem; }
.section { margin-bottom: 2rem; background: white; border-radius: 8px; padding: 1.5rem; box-shadow: 0 2px 6px rgba(0,0,0,0.08); }
.cards { display: flex; flex-wrap: wrap; gap: 1rem; }
.card { flex: 1 1 260px; border-radius: 8px; padding: 1rem; border: 1px solid #dde7ee; background: #ffffff; }
.card h3 { margin-top: 0; }
.btn { display: inline-block; margin-top: 0.5rem; padding: 0.5rem 0.9rem; border-radius: 5px; text-decoration: none; color: white; background-color: #0277bd; font-size: 0.9rem; }
.btn-secondary { background-color: #00897b; }
.preview { max-height: 360px; overflow: auto; border: 1px solid #dde7ee; border-radius: 6px; margin-top: 0.5rem; }
table { width: 100%; border-collapse: collapse; font-size: 0.85rem; }
th, td { border: 1px solid #d0d7de; padding: 0.4rem 0.6rem; }
th { background-color: #e3f2fd; }
.note { font-size: 0.85rem; color: #555; }
footer { margin-top: 1rem; padding: 1rem 2rem; font-size: 0.8rem; color: #666; }
"#;

const HEADER: &str = r#"<header>
<h1>Coastal AI Explorer</h1>
<p>An NRT Coastal Resilience learning hub where students explore environmental data
and simple ML models using Hugging Face, Gradio, and Streamlit.</p>
</header>"#;

const OVERVIEW: &str = r#"<section class="section">
<h2>Overview</h2>
<p>This dashboard is a teaching example. In your NRT projects, you can plug in:</p>
<ul>
<li>Environmental and coastal datasets from <strong>Hugging Face</strong></li>
<li>Interactive model demos hosted in <strong>Gradio</strong></li>
<li>Data dashboards built with <strong>Streamlit</strong></li>
</ul>
<p class="note">Students: start by editing the dataset and links below to connect this page
to your own coastal AI experiments.</p>
</section>"#;

const NO_DATASET: &str = r#"<p class="note">No dataset loaded yet. Build with the <code>hf-preview</code>
feature and point <code>--hf-dataset</code> at your chosen Hugging Face dataset.</p>"#;

const FOOTER: &str =
    "<footer>Coastal AI Explorer · NRT Environmental Data &amp; ML Education</footer>";

impl Display for LandingPage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut body = String::new();
        body.push_str(HEADER);
        body.push_str("\n<main>\n");
        body.push_str(OVERVIEW);
        body.push('\n');
        body.push_str(&self.demo_links());
        body.push('\n');
        body.push_str(&self.preview_section());
        body.push_str("\n</main>\n");
        body.push_str(FOOTER);

        f.write_str(&document("Coastal AI Explorer", STYLE, &body))
    }
}

impl LandingPage<'_> {
    fn demo_links(&self) -> String {
        format!(
            r#"<section class="section">
<h2>Interactive Model Demos</h2>
<div class="cards">
<div class="card">
<h3>Gradio Model Demo</h3>
<p>Link this card to a Gradio app that runs a simple ML model
on coastal or environmental data (classification, regression, etc.).</p>
<a class="btn" href="{gradio}" target="_blank">Open Gradio Demo</a>
<p class="note">Set <code>GRADIO_DEMO_URL</code> when starting the server to use your own Gradio link.</p>
</div>
<div class="card">
<h3>Streamlit Data Explorer</h3>
<p>Link this card to a Streamlit dashboard that visualizes
environmental time series, maps, or other coastal indicators.</p>
<a class="btn btn-secondary" href="{streamlit}" target="_blank">Open Streamlit App</a>
<p class="note">Set <code>STREAMLIT_DEMO_URL</code> when starting the server to use your own Streamlit link.</p>
</div>
</div>
</section>"#,
            gradio = escape(&self.config.gradio_url),
            streamlit = escape(&self.config.streamlit_url),
        )
    }

    fn preview_section(&self) -> String {
        let mut out = String::from(
            r#"<section class="section">
<h2>Hugging Face Dataset Preview</h2>
<p>Below is a small preview of a dataset loaded from the Hugging Face Hub.
In your NRT coastal work, you can swap this for an ocean / climate / ecology dataset.</p>
"#,
        );

        if let Some(message) = &self.message {
            out.push_str(&format!("<p class=\"note\">{}</p>\n", escape(message)));
        }

        match &self.preview {
            Some(table) => {
                out.push_str("<div class=\"preview\">\n");
                out.push_str(&table.to_string());
                out.push_str("\n</div>\n");
            }
            None => {
                out.push_str(NO_DATASET);
                out.push('\n');
            }
        }

        out.push_str("</section>");
        out
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt as _;

    use super::*;

    async fn get_index(app: Router) -> (StatusCode, String) {
        let resp = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn assert_static_sections(body: &str) {
        assert!(body.starts_with("<!doctype html>"));
        assert!(body.contains("<h1>Coastal AI Explorer</h1>"));
        assert!(body.contains("<h2>Overview</h2>"));
        assert!(body.contains("<h2>Interactive Model Demos</h2>"));
        assert!(body.contains("<h2>Hugging Face Dataset Preview</h2>"));
        assert!(body.contains(DEFAULT_GRADIO_URL));
        assert!(body.contains(DEFAULT_STREAMLIT_URL));
        assert!(body.trim_end().ends_with("</html>"));
    }

    #[tokio::test]
    async fn missing_preview_support_still_renders_page() {
        let app = router(LandingConfig::default(), PreviewSource::NotInstalled);
        let (status, body) = get_index(app).await;

        assert_eq!(status, StatusCode::OK);
        assert_static_sections(&body);
        assert!(body.contains("not installed"));
        assert!(body.contains("No dataset loaded yet"));
        assert!(!body.contains("<table>"));
    }

    #[tokio::test]
    async fn disabled_preview_still_renders_page() {
        let app = router(LandingConfig::default(), PreviewSource::Disabled);
        let (status, body) = get_index(app).await;

        assert_eq!(status, StatusCode::OK);
        assert_static_sections(&body);
        assert!(body.contains("preview is disabled for this server"));
        assert!(body.contains("No dataset loaded yet"));
        assert!(!body.contains("<table>"));
    }

    #[cfg(feature = "hf-preview")]
    #[tokio::test]
    async fn unreachable_dataset_server_still_renders_page() {
        let source = PreviewSource::hub(crate::HubSettings {
            endpoint: "http://127.0.0.1:9".to_string(),
            timeout: std::time::Duration::from_secs(2),
            ..Default::default()
        })
        .unwrap();
        let (status, body) = get_index(router(LandingConfig::default(), source)).await;

        assert_eq!(status, StatusCode::OK);
        assert_static_sections(&body);
        assert!(body.contains("Could not load Hugging Face dataset. Error:"));
        assert!(!body.contains("<table>"));
    }

    #[test]
    fn preview_table_replaces_placeholder_note() {
        let config = LandingConfig::default();
        let mut table = Table::new(vec!["claim".to_string()]);
        table.push_row(vec!["Sea levels are rising".to_string()]);

        let page = LandingPage::new(
            &config,
            PreviewOutcome {
                table: Some(table),
                message: "Showing the first 1 rows of the Hugging Face 'climate_fever' dataset."
                    .to_string(),
            },
        );
        let html = page.to_string();

        assert!(html.contains("<td>Sea levels are rising</td>"));
        assert!(html.contains("Showing the first 1 rows"));
        assert!(!html.contains("No dataset loaded yet"));
    }

    #[test]
    fn configured_links_are_escaped() {
        let config = LandingConfig {
            gradio_url: "https://example.org/?a=1&b=\"2\"".to_string(),
            streamlit_url: "https://streamlit.example".to_string(),
        };
        let html = LandingPage::new(
            &config,
            PreviewOutcome {
                table: None,
                message: String::new(),
            },
        )
        .to_string();

        assert!(html.contains(r#"href="https://example.org/?a=1&amp;b=&quot;2&quot;""#));
        assert!(html.contains(r#"href="https://streamlit.example""#));
        assert!(!html.contains(r#"<p class="note"></p>"#));
    }
}
