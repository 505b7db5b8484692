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

use std::path::{Path, PathBuf};
use image::{DynamicImage, ImageFormat};
use annomap_common::fs::ensure_dir;
use crate::{Raster, config::MapFormat, errors::{AnnoMapError, Result}, group::ImageGroupKey};

/// where finished annotation maps go
pub trait MapSink {
    fn write_map (&mut self, key: &ImageGroupKey, map: &Raster)->Result<()>;
}

/// stores maps as `<output_dir>/<split>/<image_id:05>.png`, replacing existing files
#[derive(Debug,Clone)]
pub struct PngMapWriter {
    output_dir: PathBuf,
    format: MapFormat,
}

impl PngMapWriter {
    pub fn new (output_dir: impl AsRef<Path>, format: MapFormat)->Self {
        PngMapWriter { output_dir: output_dir.as_ref().to_path_buf(), format }
    }

    pub fn output_dir (&self)->&Path { &self.output_dir }

    pub fn map_path (&self, key: &ImageGroupKey)->PathBuf {
        self.output_dir.join( &key.split).join( format!("{:05}.png", key.image_id))
    }
}

impl MapSink for PngMapWriter {
    fn write_map (&mut self, key: &ImageGroupKey, map: &Raster)->Result<()> {
        let path = self.map_path( key);
        let output_write = |reason: String| AnnoMapError::OutputWrite( path.clone(), reason);

        if let Some(dir) = path.parent() {
            ensure_dir( dir).map_err( |e| output_write( e.to_string()))?;
        }

        let res = match self.format {
            MapFormat::Gray => map.save_with_format( &path, ImageFormat::Png),
            MapFormat::Rgb => {
                let rgb = DynamicImage::ImageLuma8( map.clone()).to_rgb8();
                rgb.save_with_format( &path, ImageFormat::Png)
            }
        };
        res.map_err( |e| output_write( e.to_string()))
    }
}

/// keeps maps in memory, in the order they were written
#[derive(Debug,Default)]
pub struct MemoryMapSink {
    pub maps: Vec<(ImageGroupKey, Raster)>,
}

impl MemoryMapSink {
    pub fn new ()->Self { MemoryMapSink { maps: Vec::new() } }

    pub fn get (&self, key: &ImageGroupKey)->Option<&Raster> {
        self.maps.iter().find( |(k,_)| k == key).map( |(_,m)| m)
    }
}

impl MapSink for MemoryMapSink {
    fn write_map (&mut self, key: &ImageGroupKey, map: &Raster)->Result<()> {
        self.maps.push( (key.clone(), map.clone()));
        Ok(())
    }
}
