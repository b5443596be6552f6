use anyhow::Result;
use plotters::chart::SeriesLabelPosition;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{pt, Figure};
use crate::color::series_colors;
use crate::data::aggregate::year_kind_counts;
use crate::data::model::Dataset;

/// Figure geometry (inches).
pub const SIZE_IN: (f64, f64) = (16.0, 9.0);

const LABEL_FONT_PT: f64 = 14.0;
const TICK_FONT_PT: f64 = 12.0;
const LEGEND_FONT_PT: f64 = 10.0;

/// Grouped bar chart of publication counts per year, one colored bar per
/// publication type. Years without a type show an empty slot (explicit
/// zero), not a missing group.
pub fn render(data: &Dataset, figure: &Figure) -> Result<()> {
    let grid = year_kind_counts(&data.records);

    figure.render(|root| {
        if grid.is_empty() {
            return Ok(());
        }

        let years = grid.row_labels();
        let kinds = grid.col_labels();
        let colors = series_colors(kinds.len());

        let n = years.len();
        let y_max = ((grid.max_count() as f64) * 1.1).ceil().max(1.0) as u64;

        let mut chart = ChartBuilder::on(root)
            .margin(pt(8.0))
            .x_label_area_size(pt(34.0))
            .y_label_area_size(pt(40.0))
            .build_cartesian_2d(-0.6..(n as f64 - 0.4), 0u64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(0)
            .x_desc("Year")
            .y_desc("Number of Publications")
            .axis_desc_style(("sans-serif", pt(LABEL_FONT_PT)).into_font().color(&BLACK))
            .label_style(("sans-serif", pt(TICK_FONT_PT)).into_font().color(&BLACK))
            .draw()?;

        // One series per publication type so each gets a legend entry.
        let bar_w = 0.8 / kinds.len() as f64;
        for (t, kind) in kinds.iter().enumerate() {
            let color = colors[t];
            chart
                .draw_series((0..n).map(|j| {
                    let x0 = j as f64 - 0.4 + t as f64 * bar_w;
                    Rectangle::new(
                        [(x0, 0u64), (x0 + bar_w, grid.count(j, t))],
                        color.filled(),
                    )
                }))?
                .label(kind.clone())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - pt(2.0)), (x + pt(5.0), y + pt(2.0))], color.filled())
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.filled())
            .border_style(&BLACK)
            .label_font(("sans-serif", pt(LEGEND_FONT_PT)).into_font().color(&BLACK))
            .draw()?;

        // Horizontal year labels centered under each group.
        let tick_style = ("sans-serif", pt(TICK_FONT_PT))
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Top));
        for (j, year) in years.iter().enumerate() {
            let (x, y) = chart.backend_coord(&(j as f64, 0u64));
            root.draw(&Text::new(
                year.to_string(),
                (x, y + pt(2.0)),
                tick_style.clone(),
            ))?;
        }

        Ok(())
    })
}
