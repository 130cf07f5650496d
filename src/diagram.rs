use std::path::{Path, PathBuf};

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle, FontTransform};
use tracing::debug;
use wbenvelope::{EnvelopeConstants, LoadSheet, SheetText, Verdict, DEFAULT_PLOT_MARGIN};

/// Pixel size of the whole diagram.
const DIAGRAM_SIZE: (u32, u32) = (700, 700);

/// Height of the envelope panel; the text panel takes the rest (3:2).
const ENVELOPE_PANEL_HEIGHT: i32 = 420;

/// Shade of the region outside the envelope.
const OFF_LIMITS: RGBColor = RGBColor(204, 204, 204);

/// Shade of the constant-arm guide lines.
const ARM_LINE: RGBColor = RGBColor(153, 153, 153);

/// Everything the diagram needs from a computed load sheet.
pub struct DiagramInput<'a> {
    /// Envelope to draw.
    pub envelope: &'a EnvelopeConstants,
    /// Loading conditions and their checks.
    pub sheet: &'a LoadSheet,
    /// Strings for the text panel.
    pub text: &'a SheetText,
}

/// Location of the diagram written for `profile`.
pub fn diagram_path(profile: &Path) -> PathBuf {
    profile.with_extension("svg")
}

/// Colour of the load line for a verdict.
fn verdict_color(verdict: Verdict) -> RGBColor {
    match verdict {
        Verdict::WithinLimits => RGBColor(0, 128, 0),
        Verdict::OutOfLimits => RED,
    }
}

/// Write the envelope diagram and text panel to an SVG file.
pub fn render_diagram(input: &DiagramInput<'_>, path: &Path) -> Result<()> {
    debug!(path = %path.display(), "rendering envelope diagram");
    let root = SVGBackend::new(path, DIAGRAM_SIZE).into_drawing_area();
    draw_diagram(&root, input)?;
    root.present()?;
    Ok(())
}

/// Draw both panels onto `root`.
fn draw_diagram<DB>(root: &DrawingArea<DB, Shift>, input: &DiagramInput<'_>) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let (upper, lower) = root.split_vertically(ENVELOPE_PANEL_HEIGHT);
    draw_envelope(&upper, input)?;
    draw_text_panel(&lower, input)?;
    Ok(())
}

/// Draw the envelope, the arm lines and the load line.
fn draw_envelope<DB>(area: &DrawingArea<DB, Shift>, input: &DiagramInput<'_>) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let envelope = input.envelope;
    let bounds = envelope.plot_bounds(DEFAULT_PLOT_MARGIN);

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(
            bounds.moment_min..bounds.moment_max,
            bounds.weight_min..bounds.weight_max,
        )?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Moment (kg.m)")
        .y_desc("Weight (kg)")
        .draw()?;

    chart.plotting_area().fill(&OFF_LIMITS)?;

    let corners: Vec<(f64, f64)> = envelope
        .boundary()
        .iter()
        .map(|vertex| (vertex.moment, vertex.weight))
        .collect();
    chart.draw_series(std::iter::once(Polygon::new(
        corners.clone(),
        WHITE.filled(),
    )))?;

    // Quarter turns are the only rotations the backends support; reading upward
    // keeps the labels roughly parallel to the steep arm lines.
    let label_font = FontDesc::new(FontFamily::SansSerif, 10.0, FontStyle::Normal)
        .transform(FontTransform::Rotate270);
    for line in envelope.arm_lines() {
        chart.draw_series(LineSeries::new(
            [
                (line.lower.moment, line.lower.weight),
                (line.upper.moment, line.upper.weight),
            ],
            ARM_LINE.stroke_width(1),
        ))?;
        chart.draw_series(std::iter::once(Text::new(
            line.label,
            (line.upper.moment, line.upper.weight + 3.0),
            label_font.clone(),
        )))?;
    }

    // Closed outline of the permitted region.
    let mut outline = corners;
    outline.push(outline[0]);
    chart.draw_series(LineSeries::new(outline, BLACK.stroke_width(1)))?;

    let color = verdict_color(input.sheet.verdict());
    let load_line = [
        (input.sheet.zero_fuel.moment, input.sheet.zero_fuel.weight),
        (input.sheet.takeoff.moment, input.sheet.takeoff.weight),
    ];
    chart.draw_series(LineSeries::new(load_line, color.stroke_width(2)))?;
    chart.draw_series(
        load_line
            .iter()
            .map(|point| Circle::new(*point, 3, color.filled())),
    )?;

    Ok(())
}

/// Draw the profile summary below the envelope.
fn draw_text_panel<DB>(area: &DrawingArea<DB, Shift>, input: &DiagramInput<'_>) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let style: TextStyle<'_> = FontDesc::new(FontFamily::SansSerif, 15.0, FontStyle::Normal).into();
    let line_height = 24;
    let mut y = 20;

    area.draw_text(&input.text.heading, &style, (30, y))?;
    y += 2 * line_height;
    for line in &input.text.lines {
        area.draw_text(line, &style, (30, y))?;
        y += line_height;
    }

    let verdict = input.sheet.verdict();
    let verdict_rgb = verdict_color(verdict);
    let verdict_style = style.color(&verdict_rgb);
    area.draw_text(&format!("Verdict: {verdict}"), &verdict_style, (30, y + line_height))?;

    Ok(())
}
