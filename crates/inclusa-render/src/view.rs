use inclusa_core::error::ValidationFailure;
use inclusa_core::models::demographics::{age_in_year, default_birth_date};
use inclusa_core::models::form_data::FormData;
use inclusa_core::models::language::Language;
use inclusa_core::models::medical_history::{
    DEFAULT_HBV_DURATION_YEARS, DEFAULT_TREATMENT_MONTHS, HBV_DURATION_YEARS_MAX,
    TREATMENT_MONTHS_MAX, TREATMENT_MONTHS_MIN,
};
use inclusa_core::models::step::WizardStep;
use inclusa_core::models::submission::Submission;
use inclusa_core::models::symptoms::{RATING_MAX, RATING_MIN, SymptomsInput};
use inclusa_core::session::SessionState;
use inclusa_dashboard::DashboardSnapshot;
use inclusa_i18n::{Dictionary, LocalizationTable};
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chart::{self, BarChart, LineChart, PieChart};
use crate::error::RenderError;

/// Which of the top-level tabs is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Questionnaire,
    Dashboard,
    Transparency,
}

/// Reported programme-wide figures, not derived from the session dataset.
pub const DATA_POINTS_COLLECTED: u32 = 15_642;
pub const RESEARCH_QUESTIONS_ANSWERED: u32 = 42;
pub const PUBLICATIONS_SUPPORTED: u32 = 3;
pub const IRB_APPROVAL: &str = "SYPHU-2025-IGEM-001";

#[derive(Debug, Clone, Serialize)]
pub struct LanguageToggle {
    pub target: Language,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepMarker {
    pub key: &'static str,
    pub label: String,
    pub done: bool,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Progress {
    /// 1-based, as displayed.
    pub current: usize,
    pub total: usize,
    pub percent: f64,
    pub steps: Vec<StepMarker>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingField {
    pub name: &'static str,
    pub label: String,
    pub value: u8,
}

/// Initial widget values. A re-presented step starts from these again.
#[derive(Debug, Clone, Serialize)]
pub struct FormDefaults {
    pub today: Date,
    pub birth_date: Date,
    pub age: i16,
    pub hbv_duration_years: u8,
    pub hbv_duration_max: u8,
    pub treatment_months: u16,
    pub treatment_months_min: u16,
    pub treatment_months_max: u16,
    pub rating_min: u8,
    pub rating_max: u8,
    pub ratings: Vec<RatingField>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummarySection {
    pub key: &'static str,
    pub title: String,
    /// The section as pretty-printed JSON.
    pub body: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub questionnaire_id: Option<String>,
    pub sections: Vec<SummarySection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub snapshot: DashboardSnapshot,
    pub pie: PieChart,
    pub bar: BarChart,
    pub line: LineChart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransparencyView {
    pub data_points_collected: u32,
    pub research_questions_answered: u32,
    pub publications_supported: u32,
    pub irb_approval: &'static str,
}

impl Default for TransparencyView {
    fn default() -> Self {
        Self {
            data_points_collected: DATA_POINTS_COLLECTED,
            research_questions_answered: RESEARCH_QUESTIONS_ANSWERED,
            publications_supported: PUBLICATIONS_SUPPORTED,
            irb_approval: IRB_APPROVAL,
        }
    }
}

/// Everything `page.html` needs to draw one screen.
#[derive(Debug, Clone, Serialize)]
pub struct PageView<'a> {
    pub session_id: Uuid,
    pub language: Language,
    pub toggle: LanguageToggle,
    pub tab: Tab,
    pub t: &'a Dictionary,
    pub step: WizardStep,
    pub progress: Progress,
    pub error: Option<String>,
    pub form: FormDefaults,
    pub summary: Option<Summary>,
    pub dashboard: Option<DashboardView>,
    pub transparency: Option<TransparencyView>,
}

impl<'a> PageView<'a> {
    pub fn build(
        session: &SessionState,
        table: &'a LocalizationTable,
        tab: Tab,
        error: Option<&ValidationFailure>,
        today: Date,
    ) -> Result<Self, RenderError> {
        let language = session.language();
        let step = session.step();

        let error = error
            .map(|failure| table.text(language, failure.message_key()))
            .transpose()?
            .map(str::to_string);

        let summary = if step == WizardStep::Completion {
            Some(build_summary(session.form_data(), table, language)?)
        } else {
            None
        };

        let dashboard = match tab {
            Tab::Dashboard => {
                let snapshot = DashboardSnapshot::from_records(session.participants(), today);
                Some(DashboardView {
                    pie: chart::pie_chart(&snapshot.regional),
                    bar: chart::bar_chart(&snapshot.tumor_stages),
                    line: chart::line_chart(&snapshot.daily),
                    snapshot,
                })
            }
            Tab::Questionnaire | Tab::Transparency => None,
        };
        let transparency = (tab == Tab::Transparency).then(TransparencyView::default);

        let target = language.other();
        Ok(Self {
            session_id: session.id(),
            language,
            toggle: LanguageToggle {
                target,
                label: target.native_name(),
            },
            tab,
            t: table.dictionary(language),
            step,
            progress: build_progress(step, table, language)?,
            error,
            form: build_form_defaults(table, language, today)?,
            summary,
            dashboard,
            transparency,
        })
    }
}

/// The page shown once a submission has been recorded.
#[derive(Debug, Clone, Serialize)]
pub struct AcknowledgementView<'a> {
    pub session_id: Uuid,
    pub language: Language,
    pub t: &'a Dictionary,
    pub submitted_at: String,
    pub summary: Summary,
}

impl<'a> AcknowledgementView<'a> {
    pub fn build(
        session_id: Uuid,
        language: Language,
        table: &'a LocalizationTable,
        submission: &Submission,
    ) -> Result<Self, RenderError> {
        Ok(Self {
            session_id,
            language,
            t: table.dictionary(language),
            submitted_at: submission
                .submitted_at
                .strftime("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            summary: build_summary(&submission.form_data, table, language)?,
        })
    }
}

fn step_label_key(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Consent => "consent",
        WizardStep::Demographics => "basic_info",
        WizardStep::MedicalHistory => "medical_history",
        WizardStep::Symptoms => "symptoms",
        WizardStep::Research => "research",
        WizardStep::Completion => "completion",
    }
}

fn build_progress(
    current: WizardStep,
    table: &LocalizationTable,
    language: Language,
) -> Result<Progress, RenderError> {
    let steps = WizardStep::ALL
        .iter()
        .map(|&step| -> Result<StepMarker, RenderError> {
            Ok(StepMarker {
                key: step.key(),
                label: table.text(language, step_label_key(step))?.to_string(),
                done: step < current,
                active: step == current,
            })
        })
        .collect::<Result<Vec<_>, RenderError>>()?;

    Ok(Progress {
        current: current.index() + 1,
        total: WizardStep::COUNT,
        percent: current.progress_percent(),
        steps,
    })
}

fn build_form_defaults(
    table: &LocalizationTable,
    language: Language,
    today: Date,
) -> Result<FormDefaults, RenderError> {
    let ratings = SymptomsInput::default()
        .ratings()
        .into_iter()
        .map(|(name, value)| -> Result<RatingField, RenderError> {
            let label = table.text(language, &format!("symptom_{name}"))?;
            Ok(RatingField {
                name,
                label: label.to_string(),
                value,
            })
        })
        .collect::<Result<Vec<_>, RenderError>>()?;

    let birth_date = default_birth_date();
    Ok(FormDefaults {
        today,
        birth_date,
        age: age_in_year(birth_date, today.year()),
        hbv_duration_years: DEFAULT_HBV_DURATION_YEARS,
        hbv_duration_max: HBV_DURATION_YEARS_MAX,
        treatment_months: DEFAULT_TREATMENT_MONTHS,
        treatment_months_min: TREATMENT_MONTHS_MIN,
        treatment_months_max: TREATMENT_MONTHS_MAX,
        rating_min: RATING_MIN,
        rating_max: RATING_MAX,
        ratings,
    })
}

/// The sections present in `form_data`, in questionnaire order.
pub fn build_summary(
    form_data: &FormData,
    table: &LocalizationTable,
    language: Language,
) -> Result<Summary, RenderError> {
    let value = serde_json::to_value(form_data)?;
    let mut sections = Vec::new();
    for key in form_data.section_names() {
        let Some(section) = value.get(key) else {
            continue;
        };
        sections.push(SummarySection {
            key,
            title: table.text(language, &format!("{key}_summary"))?.to_string(),
            body: serde_json::to_string_pretty(section)?,
        });
    }
    Ok(Summary {
        questionnaire_id: form_data.questionnaire_id.clone(),
        sections,
    })
}
