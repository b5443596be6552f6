mod chart;
mod color;
mod data;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use chart::{
    keyword_frequency, mapping_process, publisher_breakdown, type_distribution, types_per_year,
    Figure,
};
use data::loader;

/// Source database and output directory, fixed by the poster layout.
const DATABASE: &str = "database.csv";
const OUTPUT_DIR: &str = "poster";

fn main() -> Result<()> {
    env_logger::init();

    let mut data = loader::load_file(Path::new(DATABASE))?;
    info!("loaded {} records from {DATABASE}", data.len());

    fs::create_dir_all(OUTPUT_DIR).with_context(|| format!("creating {OUTPUT_DIR}/"))?;
    let out = Path::new(OUTPUT_DIR);

    types_per_year::render(
        &data,
        &Figure::new(out.join("by_year.png"), types_per_year::SIZE_IN),
    )?;

    publisher_breakdown::render(
        &mut data,
        &Figure::new(out.join("conf_by_editor.png"), publisher_breakdown::SIZE_IN),
    )?;

    mapping_process::render(&Figure::new(
        out.join("systematic_mapping_process.png"),
        mapping_process::SIZE_IN,
    ))?;

    keyword_frequency::render(
        &data,
        keyword_frequency::DEFAULT_TOP_N,
        &Figure::new(out.join("keyword_distribution.png"), keyword_frequency::SIZE_IN),
    )?;

    type_distribution::render(
        &data,
        &Figure::new(out.join("type_distribution.png"), type_distribution::SIZE_IN),
    )?;

    Ok(())
}
