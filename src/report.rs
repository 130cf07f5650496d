use std::fmt::Write;

use wbenvelope::{LoadPoint, LoadSheet, SheetText};

/// Render the load sheet as plain text.
///
/// The profile breakdown comes first, followed by both loading conditions and
/// the combined verdict.
#[must_use]
pub fn render_report(sheet: &LoadSheet, text: &SheetText) -> String {
    let mut output = String::new();

    writeln!(&mut output, "{}", text.heading).expect("writing to string cannot fail");
    output.push('\n');
    for line in &text.lines {
        writeln!(&mut output, "{line}").expect("writing to string cannot fail");
    }
    output.push('\n');

    write_condition(
        &mut output,
        "Zero fuel",
        &sheet.zero_fuel,
        sheet.zero_fuel_within_limits,
    );
    write_condition(
        &mut output,
        "Takeoff",
        &sheet.takeoff,
        sheet.takeoff_within_limits,
    );

    if sheet.fuel_exceeds_capacity {
        output.push_str("Warning: planned fuel exceeds usable tank capacity\n");
    }

    write!(&mut output, "Verdict: {}", sheet.verdict()).expect("writing to string cannot fail");

    output
}

/// Append one loading condition with its arm and envelope check.
fn write_condition(output: &mut String, name: &str, point: &LoadPoint, within_limits: bool) {
    let status = if within_limits { "OK" } else { "OUT" };
    let arm = point
        .arm()
        .map_or_else(|| "n/a".to_owned(), |arm| format!("{:.0} mm", arm * 1000.0));
    writeln!(
        output,
        "{name:<10} weight = {:.1} kg, moment = {:.2} kg.m, arm = {arm} [{status}]",
        point.weight, point.moment
    )
    .expect("writing to string cannot fail");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wbenvelope::{parse_profile, EnvelopeConstants, LoadStations};

    fn sheet_for(empty_moment: f64) -> (LoadSheet, SheetText) {
        let mut profile = parse_profile(
            "title = \"Check\"\ncallsign = \"PH-KAT\"\nempty_weight = 500\n\
             empty_moment = 125\npilot_weight = 80\npax_weight = 70\n\
             baggage = 10\nfuel = 50\n",
        )
        .expect("profile parses");
        profile.empty_moment = empty_moment;
        let sheet = LoadSheet::evaluate(
            &profile,
            &EnvelopeConstants::katana(),
            &LoadStations::katana(),
        );
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
        let text = SheetText::new(&profile, &sheet, today);
        (sheet, text)
    }

    #[test]
    fn reports_failing_zero_fuel_condition() {
        let (sheet, text) = sheet_for(125.0);
        let report = render_report(&sheet, &text);
        assert!(report.starts_with("Check    PH-KAT    2024-5-1"));
        assert!(report.contains("Fuel: 50 litres, 36.0 kg"));
        assert!(report.contains("Zero fuel  weight = 660.0 kg, moment = 154.69 kg.m, arm = 234 mm [OUT]"));
        assert!(report.contains("Takeoff    weight = 696.0 kg, moment = 184.35 kg.m, arm = 265 mm [OK]"));
        assert!(report.ends_with("Verdict: OUT OF LIMITS"));
    }

    #[test]
    fn reports_passing_sheet() {
        let (sheet, text) = sheet_for(150.0);
        let report = render_report(&sheet, &text);
        assert!(!report.contains("[OUT]"));
        assert!(!report.contains("Warning"));
        assert!(report.ends_with("Verdict: within limits"));
    }
}
