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

/// extraction of typed annotation records from the rows of an annotation table

use std::{fs::File, io::Read, path::Path};
use serde::Deserialize;
use crate::errors::{AnnoMapError, Result, malformed_record};

/// raw row as it comes out of the annotation tool export.
/// Columns we don't know about are ignored, `WorkTime` is optional
#[derive(Deserialize,Debug,Clone)]
pub struct RawAnnotationRecord {
    #[serde(rename = "Split")]
    pub split: String,
    #[serde(rename = "Image")]
    pub image: String, // filename, e.g. "00001.png"
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "CenterX")]
    pub center_x: f64,
    #[serde(rename = "CenterY")]
    pub center_y: f64,
    #[serde(rename = "RadiusX")]
    pub radius_x: f64,
    #[serde(rename = "RadiusY")]
    pub radius_y: f64,
    #[serde(rename = "Angle")]
    pub angle: f64, // radians
    #[serde(rename = "WorkTime", default)]
    pub work_time: Option<f64>, // seconds
}

/// the validated, immutable representation of one annotation
#[derive(Debug,Clone,PartialEq)]
pub struct AnnotationRecord {
    pub split: String,
    pub image_id: u64,
    pub category: String, // not used for map generation
    pub center_x: f64,
    pub center_y: f64,
    pub radius_x: f64,
    pub radius_y: f64,
    pub angle: f64,
    pub work_time: Option<f64>,
}

impl AnnotationRecord {
    /// convert a raw row. If `fixed_radius` is set it replaces both annotated radii
    pub fn from_raw (raw: RawAnnotationRecord, fixed_radius: Option<f64>)->Result<Self> {
        let image_id = parse_image_id( &raw.image)?;

        let (radius_x, radius_y) = match fixed_radius {
            Some(r) => (r, r),
            None => (raw.radius_x, raw.radius_y)
        };

        Ok( AnnotationRecord {
            split: raw.split,
            image_id,
            category: raw.category,
            center_x: raw.center_x,
            center_y: raw.center_y,
            radius_x,
            radius_y,
            angle: raw.angle,
            work_time: raw.work_time,
        })
    }
}

/// the image id is the integer prefix of the image filename up to the first '.'
pub fn parse_image_id (image: &str)->Result<u64> {
    let (prefix, _) = image.split_once('.')
        .ok_or_else(|| malformed_record!("image name {:?} has no extension", image))?;

    prefix.trim().parse::<u64>()
        .map_err(|_| malformed_record!("image name {:?} does not start with a non-negative integer id", image))
}

/// read all annotation rows in input order. Any unreadable row or malformed image name fails the whole read
pub fn read_records (reader: impl Read, fixed_radius: Option<f64>)->Result<Vec<AnnotationRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records: Vec<AnnotationRecord> = Vec::new();

    for (i, res) in csv_reader.deserialize::<RawAnnotationRecord>().enumerate() {
        let raw = res?;
        let rec = AnnotationRecord::from_raw( raw, fixed_radius)
            .map_err(|e| match e {
                AnnoMapError::MalformedRecord(msg) => malformed_record!("data row {}: {}", i+1, msg),
                other => other
            })?;
        records.push( rec);
    }

    Ok( records )
}

pub fn read_records_from_file<P: AsRef<Path>> (path: P, fixed_radius: Option<f64>)->Result<Vec<AnnotationRecord>> {
    let file = File::open( path.as_ref())?;
    read_records( file, fixed_radius)
}
