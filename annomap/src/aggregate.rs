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

/// combination of per-annotation rasters into averaged annotation maps

use image::GrayImage;
use serde::{Deserialize, Serialize};
use crate::{Raster, errors::{AnnoMapError, Result}};

/// 1-based indices into the annotations of an image, in annotation order.
/// Indices can repeat, which increases the weight of the respective raster
#[derive(Debug,Clone,PartialEq,Eq,Serialize,Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Selection(Vec<usize>);

impl Selection {
    pub fn new (indices: Vec<usize>)->Result<Self> {
        if indices.is_empty() {
            Err( AnnoMapError::InvalidArgument("empty annotation selection".into()))
        } else if indices.contains(&0) {
            Err( AnnoMapError::InvalidArgument("annotation selection indices are 1-based".into()))
        } else {
            Ok( Selection(indices) )
        }
    }

    pub fn indices (&self)->&[usize] { &self.0 }

    pub fn len (&self)->usize { self.0.len() }

    /// minimum number of annotations an image needs for this selection
    pub fn max_index (&self)->usize {
        self.0.iter().copied().max().unwrap_or(0)
    }
}

impl Default for Selection {
    fn default()->Self { Selection( vec![1, 2, 3]) }
}

impl TryFrom<Vec<usize>> for Selection {
    type Error = AnnoMapError;
    fn try_from (v: Vec<usize>)->Result<Self> { Selection::new(v) }
}

impl From<Selection> for Vec<usize> {
    fn from (s: Selection)->Self { s.0 }
}

/// pick the selected rasters (index i refers to rasters[i-1])
pub fn select<'a> (rasters: &'a [Raster], selection: &[usize])->Result<Vec<&'a Raster>> {
    selection.iter().map( |&i| {
        if i >= 1 && i <= rasters.len() {
            Ok( &rasters[i-1] )
        } else {
            Err( AnnoMapError::SelectionOutOfRange( i, rasters.len()))
        }
    }).collect()
}

/// pixel-wise arithmetic mean of the selected rasters, truncated toward zero
pub fn aggregate (rasters: &[Raster], selection: &[usize])->Result<Raster> {
    if selection.is_empty() {
        return Err( AnnoMapError::InvalidArgument("empty annotation selection".into()))
    }

    let selected = select( rasters, selection)?;
    let (width, height) = selected[0].dimensions();
    if let Some(r) = selected.iter().find( |r| r.dimensions() != (width,height)) {
        return Err( AnnoMapError::InvalidDimensions(
            format!("raster dimensions differ: {:?} vs {:?}", (width,height), r.dimensions())))
    }

    let mut sums = vec![0u64; (width * height) as usize];
    for r in &selected {
        for (s, v) in sums.iter_mut().zip( r.as_raw().iter()) {
            *s += *v as u64;
        }
    }

    let n = selected.len() as u64;
    let data: Vec<u8> = sums.into_iter().map( |s| (s / n) as u8).collect();

    GrayImage::from_raw( width, height, data)
        .ok_or_else(|| AnnoMapError::InvalidDimensions("aggregated buffer does not match dimensions".into()))
}

