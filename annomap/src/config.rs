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

use std::{fs, path::{Path, PathBuf}};
use serde::{Deserialize, Serialize};
use crate::{aggregate::Selection, ellipse::DEFAULT_SEGMENTS, errors::{Result, invalid_config}};

/// pixel format of stored maps. All channels of `Rgb` maps carry the same value
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize,Default,clap::ValueEnum)]
pub enum MapFormat {
    Gray,
    #[default]
    Rgb,
}

/// what to do with images that have fewer annotations than the selection refers to
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize,Default)]
pub enum SelectionPolicy {
    /// report the image and continue with the next one
    #[default]
    Skip,
    /// stop the run on the first such image
    Abort,
}

/// configuration for a map generation run, usually read from a RON file such as:
/// ```ron
/// AnnoMapConfig(
///     input_path: "./stl10_nara.csv",
///     output_dir: "./maps",
///     map_size: 96,
///     annotations: [1, 2, 3],
/// )
/// ```
/// fields that are not specified get their default values
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct AnnoMapConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    /// canvas side in pixels, normally the size of the annotated images
    pub map_size: u32,
    pub annotations: Selection,
    /// positive values replace all annotated radii, other values keep them
    pub fixed_radius: f64,
    pub segments: usize,
    pub output_format: MapFormat,
    pub on_selection_error: SelectionPolicy,
}

impl Default for AnnoMapConfig {
    fn default()->Self {
        AnnoMapConfig {
            input_path: PathBuf::from("./stl10_nara.csv"),
            output_dir: PathBuf::from("./maps"),
            map_size: 96,
            annotations: Selection::default(),
            fixed_radius: -1.0,
            segments: DEFAULT_SEGMENTS,
            output_format: MapFormat::default(),
            on_selection_error: SelectionPolicy::default(),
        }
    }
}

impl AnnoMapConfig {
    pub fn from_ron_str (s: &str)->Result<Self> {
        let config: AnnoMapConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_ron_file<P: AsRef<Path>> (path: P)->Result<Self> {
        let s = fs::read_to_string( path.as_ref())?;
        Self::from_ron_str( &s)
    }

    pub fn validate (&self)->Result<()> {
        if self.map_size == 0 {
            return Err( invalid_config!("map_size has to be positive"))
        }
        if self.segments < 3 {
            return Err( invalid_config!("need at least 3 polygon segments, got {}", self.segments))
        }
        if !self.fixed_radius.is_finite() {
            return Err( invalid_config!("fixed_radius has to be a finite number"))
        }
        Ok(())
    }

    pub fn fixed_radius (&self)->Option<f64> {
        (self.fixed_radius > 0.0).then_some( self.fixed_radius)
    }

    /// apply command line values on top of this config. Unset options keep their current value
    pub fn with_overrides (mut self, overrides: ConfigOverrides)->Result<Self> {
        let ConfigOverrides { input_name, output_dir, map_size, annotations, fixed_radius, segments, output_format, abort_on_missing } = overrides;

        if let Some(v) = input_name { self.input_path = v }
        if let Some(v) = output_dir { self.output_dir = v }
        if let Some(v) = map_size { self.map_size = v }
        if let Some(v) = annotations { self.annotations = Selection::new(v)? }
        if let Some(v) = fixed_radius { self.fixed_radius = v }
        if let Some(v) = segments { self.segments = v }
        if let Some(v) = output_format { self.output_format = v }
        if abort_on_missing { self.on_selection_error = SelectionPolicy::Abort }

        self.validate()?;
        Ok(self)
    }
}

/// command line options that override config values
#[derive(clap::Args,Debug,Clone,Default)]
pub struct ConfigOverrides {
    /// CSV list of attentional region geometries (default: ./stl10_nara.csv)
    #[arg(long)]
    pub input_name: Option<PathBuf>,

    /// output directory (default: ./maps)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// size of the annotation maps, usually the size of the original images (default: 96)
    #[arg(long)]
    pub map_size: Option<u32>,

    /// 1-based annotation indices to average (default: 1 2 3)
    #[arg(long, num_args = 1..)]
    pub annotations: Option<Vec<usize>>,

    /// overwrite annotated radii, negative numbers use annotated radii (default: -1)
    #[arg(long, allow_hyphen_values = true)]
    pub fixed_radius: Option<f64>,

    /// number of polygon segments per ellipse (default: 360)
    #[arg(long)]
    pub segments: Option<usize>,

    /// pixel format of stored maps (default: rgb)
    #[arg(long, value_enum)]
    pub output_format: Option<MapFormat>,

    /// stop on the first image with fewer annotations than selected
    #[arg(long)]
    pub abort_on_missing: bool,
}
