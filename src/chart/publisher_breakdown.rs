use anyhow::Result;
use plotters::chart::SeriesLabelPosition;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{pt, Figure};
use crate::color::series_colors;
use crate::data::aggregate::kind_publisher_counts;
use crate::data::model::Dataset;

/// Figure geometry (inches).
pub const SIZE_IN: (f64, f64) = (16.0, 9.0);

const LABEL_FONT_PT: f64 = 14.0;
const TICK_FONT_PT: f64 = 12.0;
const LEGEND_FONT_PT: f64 = 10.0;

/// Stacked bar chart of publication counts per type, one color segment per
/// publisher group (IEEE, Springer, Nature, Other).
///
/// Derives the publisher group of every record first; the derivation is
/// cached on the dataset, so rendering twice does not recompute it.
pub fn render(data: &mut Dataset, figure: &Figure) -> Result<()> {
    data.ensure_publisher_groups();
    let grid = kind_publisher_counts(&data.records);

    figure.render(|root| {
        if grid.is_empty() {
            return Ok(());
        }

        let kinds = grid.row_labels();
        let groups = grid.col_labels();
        let colors = series_colors(groups.len());

        let n = kinds.len();
        let y_max = ((grid.max_row_total() as f64) * 1.1).ceil().max(1.0) as u64;

        let mut chart = ChartBuilder::on(root)
            .margin(pt(8.0))
            .x_label_area_size(pt(24.0))
            .y_label_area_size(pt(40.0))
            .build_cartesian_2d(-0.6..(n as f64 - 0.4), 0u64..y_max)?;

        // No x-axis description: the poster supplies the caption.
        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(0)
            .y_desc("Number of Publications")
            .axis_desc_style(("sans-serif", pt(LABEL_FONT_PT)).into_font().color(&BLACK))
            .label_style(("sans-serif", pt(TICK_FONT_PT)).into_font().color(&BLACK))
            .draw()?;

        // Segments stack bottom-up in publisher-group order.
        for (g, group) in groups.iter().enumerate() {
            let color = colors[g];
            chart
                .draw_series((0..n).map(|j| {
                    let base: u64 = (0..g).map(|k| grid.count(j, k)).sum();
                    let top = base + grid.count(j, g);
                    Rectangle::new(
                        [(j as f64 - 0.4, base), (j as f64 + 0.4, top)],
                        color.filled(),
                    )
                }))?
                .label(group.to_string())
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

        // Horizontal type labels under each stack.
        let tick_style = ("sans-serif", pt(TICK_FONT_PT))
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Top));
        for (j, kind) in kinds.iter().enumerate() {
            let (x, y) = chart.backend_coord(&(j as f64, 0u64));
            root.draw(&Text::new(
                kind.clone(),
                (x, y + pt(2.0)),
                tick_style.clone(),
            ))?;
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{PublisherGroup, Record};

    fn record(kind: &str, publisher: &str) -> Record {
        Record {
            kind: kind.to_string(),
            year: 2020,
            publisher: publisher.to_string(),
            keywords: None,
            publisher_group: None,
        }
    }

    #[test]
    fn renders_stacked_bars_and_caches_groups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("by_editor.png");

        let mut data = Dataset {
            records: vec![
                record("Article", "IEEE Press"),
                record("Article", "Springer"),
                record("Conference", "Elsevier"),
            ],
        };
        render(&mut data, &Figure::new(&path, (4.0, 3.0))).unwrap();

        assert_eq!(image::image_dimensions(&path).unwrap(), (1200, 900));
        assert_eq!(
            data.records[0].publisher_group,
            Some(PublisherGroup::Ieee)
        );

        // A second render over the same dataset is a no-op on the cache.
        let groups_before: Vec<_> =
            data.records.iter().map(|r| r.publisher_group).collect();
        render(&mut data, &Figure::new(&path, (4.0, 3.0))).unwrap();
        let groups_after: Vec<_> =
            data.records.iter().map(|r| r.publisher_group).collect();
        assert_eq!(groups_before, groups_after);
    }
}
