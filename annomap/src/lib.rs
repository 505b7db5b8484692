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

//! annotation maps from elliptical attention region annotations.
//!
//! Each row of the input table describes one ellipse that an annotator placed on an image. All
//! ellipses of an image are rasterized into binary masks, and a selection of these masks (by
//! annotation order) is averaged into one grayscale map per image:
//! ```text
//!   read_records -> group_annotations -> EllipseRasterizer::rasterize (per annotation)
//!                -> aggregate (per image) -> MapSink::write_map
//! ```

use image::GrayImage;

pub mod errors;
pub use errors::{Result, AnnoMapError};

pub mod record;
pub use record::{AnnotationRecord, RawAnnotationRecord, parse_image_id, read_records, read_records_from_file};

pub mod group;
pub use group::{AnnotationGroups, ImageGroupKey, group_annotations};

pub mod ellipse;
pub use ellipse::{Ellipse, EllipseRasterizer, DEFAULT_SEGMENTS};

pub mod aggregate;
pub use aggregate::{Selection, aggregate, select};

pub mod config;
pub use config::{AnnoMapConfig, ConfigOverrides, MapFormat, SelectionPolicy};

pub mod writer;
pub use writer::{MapSink, MemoryMapSink, PngMapWriter};

pub mod pipeline;
pub use pipeline::{MapPipeline, RunSummary};

/// single channel 8 bit raster - binary (0/255) for annotation masks, mean values for maps
pub type Raster = GrayImage;
