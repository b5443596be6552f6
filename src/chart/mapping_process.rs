use anyhow::Result;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{pt, Figure};
use crate::color::POSTER_PALETTE;

/// Figure geometry (inches).
pub const SIZE_IN: (f64, f64) = (12.0, 5.0);

const LABEL_FONT_PT: f64 = 14.0;

// Diagram geometry in layout units. The search flow runs left to right on
// the top row; analysis sits below, fed by the selected articles and the
// research questions.
const BOX_W: f64 = 2.0;
const BOX_H: f64 = 1.0;
const X_RANGE: (f64, f64) = (-7.0, 6.0);
const Y_RANGE: (f64, f64) = (-1.8, 2.0);

const DATABASES: (f64, f64) = (-5.0, 1.0);
const INITIAL_RESULTS: (f64, f64) = (-2.0, 1.0);
const SCREENING: (f64, f64) = (1.0, 1.0);
const SELECTED: (f64, f64) = (4.0, 1.0);
const RESEARCH_QUESTIONS: (f64, f64) = (-2.0, -1.0);
const ANALYSIS: (f64, f64) = (1.0, -1.0);
const FINDINGS: (f64, f64) = (4.0, -1.0);

const SEARCH_COLOR: RGBColor = POSTER_PALETTE[0];
const ANALYSIS_COLOR: RGBColor = POSTER_PALETTE[2];
const RESULTS_COLOR: RGBColor = POSTER_PALETTE[5];

struct StepBox {
    pos: (f64, f64),
    text: &'static str,
    color: RGBColor,
}

const STEPS: [StepBox; 7] = [
    StepBox {
        pos: DATABASES,
        text: "Databases:\n\nWoS\nScopus",
        color: SEARCH_COLOR,
    },
    StepBox {
        pos: INITIAL_RESULTS,
        text: "559 Papers",
        color: SEARCH_COLOR,
    },
    StepBox {
        pos: SCREENING,
        text: "Two-phase\nscreening\nprocess",
        color: SEARCH_COLOR,
    },
    StepBox {
        pos: SELECTED,
        text: "16 Articles",
        color: SEARCH_COLOR,
    },
    StepBox {
        pos: RESEARCH_QUESTIONS,
        text: "Research\nQuestions",
        color: ANALYSIS_COLOR,
    },
    StepBox {
        pos: ANALYSIS,
        text: "Detailed\nanalysis",
        color: ANALYSIS_COLOR,
    },
    StepBox {
        pos: FINDINGS,
        text: "Findings",
        color: RESULTS_COLOR,
    },
];

fn right_edge(p: (f64, f64)) -> (f64, f64) {
    (p.0 + BOX_W / 2.0, p.1)
}

fn left_edge(p: (f64, f64)) -> (f64, f64) {
    (p.0 - BOX_W / 2.0, p.1)
}

fn top_edge(p: (f64, f64)) -> (f64, f64) {
    (p.0, p.1 + BOX_H / 2.0)
}

fn bottom_edge(p: (f64, f64)) -> (f64, f64) {
    (p.0, p.1 - BOX_H / 2.0)
}

type DiagramArea<'a> = DrawingArea<BitMapBackend<'a>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Static flow diagram of the systematic mapping methodology: translucent
/// color-coded boxes connected by black arrows, no axes, no data.
pub fn render(figure: &Figure) -> Result<()> {
    figure.render(|root| {
        let (width, height) = root.dim_in_pixel();
        let x_per_px = (X_RANGE.1 - X_RANGE.0) / width as f64;
        let y_per_px = (Y_RANGE.1 - Y_RANGE.0) / height as f64;

        let chart = ChartBuilder::on(root)
            .build_cartesian_2d(X_RANGE.0..X_RANGE.1, Y_RANGE.0..Y_RANGE.1)?;
        let area = chart.plotting_area();

        for step in &STEPS {
            draw_box(area, step)?;
            draw_label(area, step, y_per_px)?;
        }

        // Arrowhead size in layout units, derived from point sizes so the
        // heads keep their shape at any raster scale.
        let head = (pt(6.0) as f64 * x_per_px, pt(6.0) as f64 * y_per_px);
        let arrow_stroke = pt(2.0).max(1) as u32;

        let arrows = [
            (right_edge(DATABASES), left_edge(INITIAL_RESULTS)),
            (right_edge(INITIAL_RESULTS), left_edge(SCREENING)),
            (right_edge(SCREENING), left_edge(SELECTED)),
            (right_edge(ANALYSIS), left_edge(FINDINGS)),
            (bottom_edge(SELECTED), top_edge(ANALYSIS)),
            (right_edge(RESEARCH_QUESTIONS), left_edge(ANALYSIS)),
        ];
        for (from, to) in arrows {
            draw_arrow(area, from, to, head, arrow_stroke)?;
        }

        Ok(())
    })
}

fn draw_box(area: &DiagramArea<'_>, step: &StepBox) -> Result<()> {
    let (cx, cy) = step.pos;
    let corners = [
        (cx - BOX_W / 2.0, cy - BOX_H / 2.0),
        (cx + BOX_W / 2.0, cy + BOX_H / 2.0),
    ];

    area.draw(&Rectangle::new(corners, step.color.mix(0.15).filled()))?;
    area.draw(&Rectangle::new(
        corners,
        step.color.mix(0.15).stroke_width(pt(1.0).max(1) as u32),
    ))?;
    Ok(())
}

fn draw_label(area: &DiagramArea<'_>, step: &StepBox, y_per_px: f64) -> Result<()> {
    let (cx, cy) = step.pos;
    let style = ("sans-serif", pt(LABEL_FONT_PT))
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    // Each line is drawn separately, centered as a block on the box.
    let lines: Vec<&str> = step.text.split('\n').collect();
    let line_step = pt(LABEL_FONT_PT) as f64 * 1.3 * y_per_px;
    let first_y = cy + (lines.len() as f64 - 1.0) / 2.0 * line_step;

    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        area.draw(&Text::new(
            *line,
            (cx, first_y - i as f64 * line_step),
            style.clone(),
        ))?;
    }
    Ok(())
}

/// An axis-aligned arrow: a shaft up to the head base plus a filled
/// triangular head whose tip touches `to`.
fn draw_arrow(
    area: &DiagramArea<'_>,
    from: (f64, f64),
    to: (f64, f64),
    head: (f64, f64),
    stroke: u32,
) -> Result<()> {
    let (head_x, head_y) = head;
    let (tip_x, tip_y) = to;

    let (base, wing_a, wing_b) = if (to.1 - from.1).abs() < f64::EPSILON {
        // Horizontal arrow.
        let dir = (to.0 - from.0).signum();
        let base_x = tip_x - dir * head_x;
        (
            (base_x, tip_y),
            (base_x, tip_y + head_y * 0.6),
            (base_x, tip_y - head_y * 0.6),
        )
    } else {
        // Vertical arrow.
        let dir = (to.1 - from.1).signum();
        let base_y = tip_y - dir * head_y;
        (
            (tip_x, base_y),
            (tip_x + head_x * 0.6, base_y),
            (tip_x - head_x * 0.6, base_y),
        )
    };

    area.draw(&PathElement::new(
        vec![from, base],
        BLACK.stroke_width(stroke),
    ))?;
    area.draw(&Polygon::new(
        vec![(tip_x, tip_y), wing_a, wing_b],
        BLACK.filled(),
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_fixed_diagram() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("process.png");

        render(&Figure::new(&path, SIZE_IN)).unwrap();

        assert_eq!(image::image_dimensions(&path).unwrap(), (3600, 1500));
    }
}
