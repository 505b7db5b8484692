/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use annomap_common::{fs::ensure_writable_dir, info, log::init_tracing, warn};
use annomap::{AnnoMapConfig, ConfigOverrides, MapPipeline, PngMapWriter};

/// command line values override config file values, which override defaults
#[derive(Parser, Debug)]
#[command(version, about = "draw annotation maps from the geometry of attentional regions that is output by the annotation tool")]
pub struct Args {
    /// optional RON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: ConfigOverrides,
}

impl Args {
    fn into_config (self)->Result<AnnoMapConfig> {
        let config = match &self.config {
            Some(path) => AnnoMapConfig::from_ron_file( path)?,
            None => AnnoMapConfig::default()
        };
        Ok( config.with_overrides( self.overrides)? )
    }
}

fn main ()->Result<()> {
    init_tracing("info");

    let config = Args::parse().into_config()?;
    ensure_writable_dir( &config.output_dir)?;

    let writer = PngMapWriter::new( &config.output_dir, config.output_format);
    let mut pipeline = MapPipeline::new( config, writer)?;
    let summary = pipeline.run()?;

    for (key, e) in &summary.failures {
        warn!("{key}: {e}");
    }
    summary.ensure_complete()?;

    info!("all {} maps written to {:?}", summary.n_written, pipeline.sink().output_dir());
    Ok(())
}
