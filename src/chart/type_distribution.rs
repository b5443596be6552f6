use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{pt, Figure};
use crate::color::{POSTER_PALETTE, TEXT_PRIMARY};
use crate::data::aggregate::kind_counts;
use crate::data::model::Dataset;

/// Figure geometry (inches).
pub const SIZE_IN: (f64, f64) = (10.0, 6.0);

const TITLE_FONT_PT: f64 = 16.0;
const LABEL_FONT_PT: f64 = 12.0;
const TICK_FONT_PT: f64 = 10.0;

/// Column chart of record counts per publication type, most frequent
/// first, with the count printed above each bar.
pub fn render(data: &Dataset, figure: &Figure) -> Result<()> {
    let counts = kind_counts(&data.records);

    figure.render(|root| {
        if counts.is_empty() {
            return Ok(());
        }

        let n = counts.len();
        let max = counts[0].1; // sorted descending
        let y_max = ((max as f64) * 1.15).ceil().max(1.0) as u64;

        let mut chart = ChartBuilder::on(root)
            .caption(
                "Distribution of Types",
                ("sans-serif", pt(TITLE_FONT_PT))
                    .into_font()
                    .color(&TEXT_PRIMARY),
            )
            .margin(pt(8.0))
            .x_label_area_size(pt(30.0))
            .y_label_area_size(pt(36.0))
            .build_cartesian_2d(-0.6..(n as f64 - 0.4), 0u64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(0)
            .x_desc("Type")
            .y_desc("Count")
            .axis_desc_style(
                ("sans-serif", pt(LABEL_FONT_PT))
                    .into_font()
                    .color(&TEXT_PRIMARY),
            )
            .label_style(
                ("sans-serif", pt(TICK_FONT_PT))
                    .into_font()
                    .color(&TEXT_PRIMARY),
            )
            .draw()?;

        chart.draw_series(counts.iter().enumerate().map(|(i, &(_, count))| {
            Rectangle::new(
                [(i as f64 - 0.4, 0u64), (i as f64 + 0.4, count)],
                POSTER_PALETTE[0].filled(),
            )
        }))?;

        // Category names under the axis and counts above the bars, placed
        // through backend coordinates so neither is clipped by the plot area.
        let tick_style = ("sans-serif", pt(TICK_FONT_PT))
            .into_font()
            .color(&TEXT_PRIMARY)
            .pos(Pos::new(HPos::Center, VPos::Top));
        let count_style = ("sans-serif", pt(TICK_FONT_PT))
            .into_font()
            .color(&TEXT_PRIMARY)
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        for (i, (kind, count)) in counts.iter().enumerate() {
            let (x, y) = chart.backend_coord(&(i as f64, 0u64));
            root.draw(&Text::new(
                kind.clone(),
                (x, y + pt(2.0)),
                tick_style.clone(),
            ))?;

            let (x, y) = chart.backend_coord(&(i as f64, *count));
            root.draw(&Text::new(
                count.to_string(),
                (x, y - pt(1.0)),
                count_style.clone(),
            ))?;
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn dataset(kinds: &[&str]) -> Dataset {
        Dataset {
            records: kinds
                .iter()
                .map(|k| Record {
                    kind: k.to_string(),
                    year: 2020,
                    publisher: "IEEE".to_string(),
                    keywords: None,
                    publisher_group: None,
                })
                .collect(),
        }
    }

    #[test]
    fn renders_bars_for_each_kind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("types.png");

        let data = dataset(&["Article", "Article", "Conference"]);
        render(&data, &Figure::new(&path, (4.0, 3.0))).unwrap();

        assert_eq!(image::image_dimensions(&path).unwrap(), (1200, 900));
    }

    #[test]
    fn empty_dataset_renders_blank_without_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");

        render(&Dataset::default(), &Figure::new(&path, (2.0, 2.0))).unwrap();
        assert!(path.exists());
    }
}
