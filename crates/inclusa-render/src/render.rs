use serde::Serialize;
use tera::{Context, Tera};

use crate::error::RenderError;
use crate::view::{AcknowledgementView, PageView};

const PAGE: &str = "page.html";
const ACKNOWLEDGEMENT: &str = "acknowledgement.html";

static TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    (PAGE, include_str!("../templates/page.html")),
    ("dashboard.html", include_str!("../templates/dashboard.html")),
    ("transparency.html", include_str!("../templates/transparency.html")),
    (ACKNOWLEDGEMENT, include_str!("../templates/acknowledgement.html")),
    ("steps/consent.html", include_str!("../templates/steps/consent.html")),
    ("steps/demographics.html", include_str!("../templates/steps/demographics.html")),
    ("steps/medical_history.html", include_str!("../templates/steps/medical_history.html")),
    ("steps/symptoms.html", include_str!("../templates/steps/symptoms.html")),
    ("steps/research.html", include_str!("../templates/steps/research.html")),
    ("steps/completion.html", include_str!("../templates/steps/completion.html")),
];

/// The compiled page templates. Built once at startup and shared.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())
            .map_err(|e| RenderError::TemplateParse(e.to_string()))?;
        Ok(Self { tera })
    }

    pub fn render_page(&self, view: &PageView<'_>) -> Result<String, RenderError> {
        self.render(PAGE, view)
    }

    pub fn render_acknowledgement(
        &self,
        view: &AcknowledgementView<'_>,
    ) -> Result<String, RenderError> {
        self.render(ACKNOWLEDGEMENT, view)
    }

    fn render(&self, template_name: &str, view: &impl Serialize) -> Result<String, RenderError> {
        // The view becomes the template context via serde_json.
        let value = serde_json::to_value(view)?;
        let context = Context::from_value(value)
            .map_err(|e| RenderError::TemplateRender(e.to_string()))?;

        let rendered = self.tera.render(template_name, &context)?;
        Ok(rendered)
    }
}
