use eligibility_fit::error::AppError;
use eligibility_fit::scoring::BenchmarkTables;
use eligibility_fit::ScoreReport;
use serde::Serialize;

pub(crate) fn render_report(report: &ScoreReport) -> String {
    let mut lines = vec![
        format!(
            "Scheme {}: {:?} ({})",
            report.scheme,
            report.verdict,
            report.verdict.summary()
        ),
        format!(
            "Total {}/100 ({} of {} points)",
            report.total, report.total_raw, report.max_points
        ),
        "Breakdown:".to_string(),
    ];
    lines.extend(
        report
            .breakdown
            .entries()
            .map(|(kind, points)| format!("  - {kind}: {points}")),
    );
    lines.push("Notes:".to_string());
    lines.extend(report.notes.iter().map(|note| format!("  - {note}")));

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

pub(crate) fn render_benchmarks(tables: &BenchmarkTables) -> String {
    let default_band = tables.default_band();
    let mut lines = vec![format!(
        "Sector benchmarks (monthly SGD, early career / experienced), default {:.0} / {:.0}:",
        default_band.early_career, default_band.experienced
    )];
    lines.extend(tables.sectors().iter().map(|entry| {
        format!(
            "  - {}: {:.0} / {:.0}",
            entry.sector, entry.band.early_career, entry.band.experienced
        )
    }));
    lines.push(format!(
        "{} recognized institutions, {} recognized certifications, {} shortage occupations",
        tables.institutions().len(),
        tables.certifications().len(),
        tables.shortage_occupations().len()
    ));

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
