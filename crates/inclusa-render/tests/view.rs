mod common;

use common::{session_at, table, today};
use inclusa_core::error::ValidationFailure;
use inclusa_core::models::language::Language;
use inclusa_core::models::step::WizardStep;
use inclusa_render::view::{PageView, Tab};

#[test]
fn progress_tracks_the_current_step() {
    let table = table();
    let session = session_at(Language::En, 3);
    let view = PageView::build(&session, &table, Tab::Questionnaire, None, today()).unwrap();

    assert_eq!(view.step, WizardStep::Symptoms);
    assert_eq!(view.progress.current, 4);
    assert_eq!(view.progress.total, 6);
    assert_eq!(view.progress.percent, 60.0);

    let done: Vec<_> = view.progress.steps.iter().map(|m| m.done).collect();
    assert_eq!(done, [true, true, true, false, false, false]);
    let active: Vec<_> = view.progress.steps.iter().map(|m| m.active).collect();
    assert_eq!(active, [false, false, false, true, false, false]);
    assert_eq!(view.progress.steps[1].label, "Basic Information");
}

#[test]
fn error_message_is_localized() {
    let table = table();
    let session = session_at(Language::Zh, 0);
    let view = PageView::build(
        &session,
        &table,
        Tab::Questionnaire,
        Some(&ValidationFailure::ConsentRequired),
        today(),
    )
    .unwrap();
    assert_eq!(view.error.as_deref(), Some("请同意所有条款以继续"));
}

#[test]
fn toggle_offers_the_other_language() {
    let table = table();
    let zh = PageView::build(&session_at(Language::Zh, 0), &table, Tab::Questionnaire, None, today())
        .unwrap();
    assert_eq!(zh.toggle.target, Language::En);
    assert_eq!(zh.toggle.label, "English");

    let en = PageView::build(&session_at(Language::En, 0), &table, Tab::Questionnaire, None, today())
        .unwrap();
    assert_eq!(en.toggle.target, Language::Zh);
    assert_eq!(en.toggle.label, "中文");
}

#[test]
fn defaults_describe_a_fresh_form() {
    let table = table();
    let view = PageView::build(&session_at(Language::En, 1), &table, Tab::Questionnaire, None, today())
        .unwrap();
    assert_eq!(view.form.today, today());
    assert_eq!(view.form.age, 45);
    assert_eq!(view.form.hbv_duration_years, 5);
    assert_eq!(view.form.treatment_months, 6);
    let ratings: Vec<_> = view.form.ratings.iter().map(|r| (r.name, r.value)).collect();
    assert_eq!(
        ratings,
        [("fatigue", 5), ("pain", 3), ("nausea", 2), ("appetite", 4), ("sleep", 3), ("mobility", 2)]
    );
    assert_eq!(view.form.ratings[0].label, "Fatigue");
}

#[test]
fn summary_lists_sections_only_at_completion() {
    let table = table();
    let early = PageView::build(&session_at(Language::En, 2), &table, Tab::Questionnaire, None, today())
        .unwrap();
    assert!(early.summary.is_none());

    let done = PageView::build(&session_at(Language::En, 5), &table, Tab::Questionnaire, None, today())
        .unwrap();
    let summary = done.summary.expect("summary at completion");
    assert_eq!(summary.questionnaire_id.as_deref(), Some("Q-042"));
    let keys: Vec<_> = summary.sections.iter().map(|s| s.key).collect();
    assert_eq!(
        keys,
        ["survey", "demographics", "medical_history", "symptoms", "research"]
    );
    assert_eq!(summary.sections[1].title, "Demographic Information");
    assert!(summary.sections[4].body.contains("\"future_contact\": \"Yes\""));
}

#[test]
fn dashboard_is_computed_only_for_its_tab() {
    let table = table();
    let session = session_at(Language::Zh, 0);

    let questionnaire = PageView::build(&session, &table, Tab::Questionnaire, None, today()).unwrap();
    assert!(questionnaire.dashboard.is_none());

    let view = PageView::build(&session, &table, Tab::Dashboard, None, today()).unwrap();
    let dashboard = view.dashboard.expect("dashboard view");
    assert_eq!(dashboard.snapshot.metrics.total_participants, 3);
    assert_eq!(dashboard.snapshot.metrics.completed_today, 1);
    assert_eq!(dashboard.snapshot.regional[0].category, "华北");
    assert_eq!(dashboard.pie.slices.len(), 2);
    assert_eq!(dashboard.bar.bars.len(), 2);
    assert_eq!(dashboard.line.points.len(), 2);
}

#[test]
fn transparency_figures_are_built_only_for_their_tab() {
    let table = table();
    let session = session_at(Language::En, 0);

    let dashboard = PageView::build(&session, &table, Tab::Dashboard, None, today()).unwrap();
    assert!(dashboard.transparency.is_none());

    let view = PageView::build(&session, &table, Tab::Transparency, None, today()).unwrap();
    assert!(view.dashboard.is_none());
    let transparency = view.transparency.expect("transparency view");
    assert_eq!(transparency.irb_approval, "SYPHU-2025-IGEM-001");
    assert_eq!(transparency.data_points_collected, 15_642);
    assert_eq!(transparency.publications_supported, 3);
}
