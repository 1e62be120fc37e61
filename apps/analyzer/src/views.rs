// Page rendering with Askama.

use askama::Template;
use axum::response::Html;

use crate::analysis::sections::AnalysisSection;

/// The single page of the app: upload form, optional error banner, and the
/// analysis cards when there are any.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub error: Option<&'a str>,
    pub sections: &'a [AnalysisSection],
}

impl<'a> IndexPage<'a> {
    pub fn empty() -> Self {
        Self {
            error: None,
            sections: &[],
        }
    }

    pub fn with_error(message: &'a str) -> Self {
        Self {
            error: Some(message),
            sections: &[],
        }
    }

    pub fn with_sections(sections: &'a [AnalysisSection]) -> Self {
        Self {
            error: None,
            sections,
        }
    }

    pub fn render_html(&self) -> Html<String> {
        Html(
            self.render()
                .unwrap_or_else(|e| format!("Template error: {e}")),
        )
    }
}
