use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{pt, Figure};
use crate::color::POSTER_PALETTE;
use crate::data::aggregate::top_keywords;
use crate::data::model::Dataset;

/// Figure geometry (inches).
pub const SIZE_IN: (f64, f64) = (16.0, 9.0);

/// How many keywords the poster shows.
pub const DEFAULT_TOP_N: usize = 15;

const LABEL_FONT_PT: f64 = 14.0;
const TICK_FONT_PT: f64 = 12.0;

/// Horizontal bar chart of the `top_n` most frequent keywords, highest
/// count at the top, with the count annotated at the end of each bar.
///
/// A dataset without any keywords still produces a (blank) figure.
pub fn render(data: &Dataset, top_n: usize, figure: &Figure) -> Result<()> {
    let counts = top_keywords(&data.records, top_n);
    if counts.is_empty() {
        log::warn!("no keywords in dataset, keyword chart left blank");
    }

    figure.render(|root| {
        if counts.is_empty() {
            return Ok(());
        }

        let n = counts.len();
        let max = counts[0].1; // sorted descending
        let x_max = ((max as f64) * 1.15).ceil().max(1.0) as u64;

        // Reserve enough room on the left for the longest keyword.
        let tick_px = pt(TICK_FONT_PT);
        let longest = counts.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
        let y_area = longest as i32 * tick_px * 11 / 20 + pt(18.0);

        let mut chart = ChartBuilder::on(root)
            .margin(pt(8.0))
            .x_label_area_size(pt(34.0))
            .y_label_area_size(y_area)
            .build_cartesian_2d(0u64..x_max, -0.6..(n as f64 - 0.4))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .y_labels(0)
            .x_desc("Frequency")
            .y_desc("Keywords")
            .axis_desc_style(("sans-serif", pt(LABEL_FONT_PT)).into_font().color(&BLACK))
            .label_style(("sans-serif", pt(TICK_FONT_PT)).into_font().color(&BLACK))
            .draw()?;

        // Rank 0 sits at the top of the axis.
        let slot = |rank: usize| (n - 1 - rank) as f64;

        chart.draw_series(counts.iter().enumerate().map(|(rank, &(_, count))| {
            Rectangle::new(
                [(0u64, slot(rank) - 0.4), (count, slot(rank) + 0.4)],
                POSTER_PALETTE[3].filled(),
            )
        }))?;

        // Keyword names left of the axis, counts just past each bar end.
        let name_style = ("sans-serif", tick_px)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Right, VPos::Center));
        let count_style = ("sans-serif", tick_px)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Left, VPos::Center));

        for (rank, (keyword, count)) in counts.iter().enumerate() {
            let (x, y) = chart.backend_coord(&(0u64, slot(rank)));
            root.draw(&Text::new(
                keyword.clone(),
                (x - pt(2.0), y),
                name_style.clone(),
            ))?;

            let (x, y) = chart.backend_coord(&(*count, slot(rank)));
            root.draw(&Text::new(
                count.to_string(),
                (x + pt(2.0), y),
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

    fn dataset(keywords: &[Option<&str>]) -> Dataset {
        Dataset {
            records: keywords
                .iter()
                .map(|kw| Record {
                    kind: "Article".to_string(),
                    year: 2020,
                    publisher: "IEEE".to_string(),
                    keywords: kw.map(str::to_string),
                    publisher_group: None,
                })
                .collect(),
        }
    }

    #[test]
    fn renders_top_keywords() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keywords.png");

        let data = dataset(&[
            Some("security; iot; machine learning"),
            Some("Security; IoT"),
            Some("security"),
        ]);
        render(&data, DEFAULT_TOP_N, &Figure::new(&path, (4.0, 3.0))).unwrap();

        assert_eq!(image::image_dimensions(&path).unwrap(), (1200, 900));
    }

    #[test]
    fn zero_keywords_still_writes_a_figure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_keywords.png");

        let data = dataset(&[None, Some(" ; ; ")]);
        render(&data, DEFAULT_TOP_N, &Figure::new(&path, (2.0, 2.0))).unwrap();

        assert_eq!(image::image_dimensions(&path).unwrap(), (600, 600));
    }
}
