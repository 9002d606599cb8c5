use crate::entities::{DailyIntakeReport, IntakeLevel, QuantityStatus};

impl IntakeLevel {
    fn tag(&self) -> Option<&'static str> {
        match self {
            IntakeLevel::Low => None,
            IntakeLevel::Moderate => Some("moderate"),
            IntakeLevel::High => Some("high"),
            IntakeLevel::Exceeded => Some("exceeded"),
        }
    }
}

pub(crate) struct ReportPrinter;

impl ReportPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_report(&self, report: &DailyIntakeReport) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "Daily intake for {} ({} product{})\n\n",
            report.date,
            report.product_count,
            if report.product_count == 1 { "" } else { "s" }
        ));

        for status in &report.quantities {
            self.print_quantity(&mut out, status);
        }
        out.push_str(&format!(
            "{:<22}{} ({} color{}, {} preservative{})\n",
            "Artificial additives",
            report.total.additive_count(),
            report.total.artificial_color_count,
            if report.total.artificial_color_count == 1 { "" } else { "s" },
            report.total.preservative_count,
            if report.total.preservative_count == 1 { "" } else { "s" },
        ));
        out.push_str(&format!(
            "{:<22}{}\n",
            "Artificial sweeteners", report.total.artificial_sweetener_count
        ));

        if !report.warnings.is_empty() {
            out.push_str("\nDaily limit warnings:\n");
            for warning in &report.warnings {
                out.push_str(&format!("  ! {}\n", warning));
            }
        }

        out
    }

    fn print_quantity(&self, out: &mut String, status: &QuantityStatus) {
        let amount = format!(
            "{}{} / {}{}",
            status.total, status.limit.unit, status.limit.limit, status.limit.unit
        );
        out.push_str(&format!(
            "{:<22}{:<20}{:.1}% of {} limit",
            status.nutrient.label(),
            amount,
            status.percentage,
            status.limit.source
        ));
        if let Some(tag) = status.level.tag() {
            out.push_str(&format!("  [{}]", tag));
        }
        out.push('\n');
    }
}
