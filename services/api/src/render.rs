use clap::Args;
use report_insight::error::AppError;
use report_insight::insights::{
    LifestyleCategory, MedicalReport, ReportLoader, ReportOverview, RiskLevel,
};
use std::fmt::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ReportInsightsArgs {
    /// Report JSON file (full report or bare extracted data); `-` reads stdin
    #[arg(long, default_value = "-")]
    pub(crate) input: PathBuf,
    /// Print the overview as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_report_insights(args: ReportInsightsArgs) -> Result<(), AppError> {
    let ReportInsightsArgs { input, json } = args;

    let report = load_report(&input)?;
    let Some(overview) = report.overview() else {
        println!("Report has no extracted data; nothing to summarize.");
        return Ok(());
    };

    if json {
        match serde_json::to_string_pretty(&overview) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Overview payload unavailable: {err}"),
        }
    } else {
        print!("{}", render_overview(&overview));
    }

    Ok(())
}

fn load_report(input: &Path) -> Result<MedicalReport, AppError> {
    if input == Path::new("-") {
        let stdin = std::io::stdin();
        return ReportLoader::from_reader(stdin.lock()).map_err(AppError::from);
    }
    ReportLoader::from_path(input).map_err(AppError::from)
}

pub(crate) fn render_overview(overview: &ReportOverview) -> String {
    let mut out = String::new();
    match write_overview(&mut out, overview) {
        Ok(()) => out,
        Err(err) => format!("Overview unavailable: {err}\n"),
    }
}

fn write_overview(out: &mut impl Write, overview: &ReportOverview) -> fmt::Result {
    let insights = &overview.insights;

    writeln!(out, "Medical Report Overview")?;
    if let Some(id) = &overview.report_id {
        writeln!(out, "Report: {id}")?;
    }
    if let Some(date) = overview.report_date {
        writeln!(out, "Report date: {date}")?;
    }
    if let Some(created_at) = overview.created_at {
        writeln!(out, "Created: {}", created_at.format("%Y-%m-%d %H:%M UTC"))?;
    }
    writeln!(out, "Files uploaded: {}", overview.files_uploaded)?;
    if let Some(preview) = &overview.analysis_preview {
        writeln!(out, "Analysis: {preview}")?;
    }

    let counts = insights.risk_summary.counts();
    for level in RiskLevel::ordered() {
        writeln!(out, "\n{} ({})", level.label(), counts.get(level))?;
        for label in insights.risk_summary.bucket(level) {
            writeln!(out, "- {label}")?;
        }
    }

    writeln!(out, "\nRecommended specialists")?;
    for specialist in insights.specialists_or_placeholder() {
        writeln!(out, "- {specialist}")?;
    }

    writeln!(out, "\nLifestyle recommendations")?;
    for category in LifestyleCategory::ordered() {
        writeln!(out, "{}", category.label())?;
        let lines = insights.lifestyle.category(category);
        if lines.is_empty() {
            writeln!(out, "- {}", category.empty_placeholder())?;
        }
        for line in lines {
            writeln!(out, "- {line}")?;
        }
    }

    if let Some(pdf) = &overview.result_pdf {
        writeln!(out, "\nPDF: {pdf}")?;
    }

    Ok(())
}
