use chrono::{Local, NaiveDate};
use deed_guidance::config::ReportConfig;
use deed_guidance::guidance::{
    build_report, certificate_gate, with_guidance_date, GuidanceOutcome, TransactionContext,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) report: Arc<ReportConfig>,
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Date the fact sheet unless it already names a guidance date.
///
/// `fallback` overrides the local calendar date.
pub(crate) fn dated(
    context: TransactionContext,
    fallback: Option<NaiveDate>,
) -> TransactionContext {
    with_guidance_date(context, fallback.unwrap_or_else(today))
}

/// Guidance for a validated fact sheet, gated on the certificate.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct GuidanceSheet {
    pub(crate) guidance_date: Option<NaiveDate>,
    pub(crate) eligible: bool,
    pub(crate) blocked: bool,
    pub(crate) outcomes: Vec<GuidanceOutcome>,
    pub(crate) narratives: Vec<String>,
}

pub(crate) fn guidance_sheet(context: &TransactionContext) -> GuidanceSheet {
    if let Some(notice) = certificate_gate(context) {
        return GuidanceSheet {
            guidance_date: context.guidance_date,
            eligible: false,
            blocked: false,
            outcomes: Vec::new(),
            narratives: vec![notice.to_string()],
        };
    }

    let report = build_report(context);
    GuidanceSheet {
        guidance_date: context.guidance_date,
        eligible: true,
        blocked: report.is_blocked(),
        outcomes: report.outcomes(),
        narratives: report.narratives(),
    }
}
