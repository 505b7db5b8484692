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
use annomap_common::define_error;
use crate::group::ImageGroupKey;

pub type Result<T> = std::result::Result<T, AnnoMapError>;

define_error!{ pub AnnoMapError =
    IOError(#[from] std::io::Error) : "IO error: {0}",
    CsvError(#[from] csv::Error) : "CSV error: {0}",
    ImageError(#[from] image::ImageError) : "image error: {0}",
    RonError(#[from] ron::de::SpannedError) : "config error: {0}",
    MalformedRecord(String) : "malformed record: {0}",
    SelectionOutOfRange(usize, usize) : "selection index {0} out of range, image has {1} annotation(s)",
    InvalidArgument(String) : "illegal argument: {0}",
    InvalidDimensions(String) : "invalid dimension error: {0}",
    InvalidConfig(String) : "invalid config: {0}",
    OutputWrite(PathBuf, String) : "failed to write map {0:?}: {1}",
    GroupFailed(ImageGroupKey, Box<AnnoMapError>) : "image {0}: {1}",
    IncompleteRun(usize, usize, usize) : "{0} of {1} images have no map ({2} with fewer annotations than selected)"
}

impl AnnoMapError {
    /// the innermost error, i.e. without the `GroupFailed` context
    pub fn root (&self)->&AnnoMapError {
        match self {
            AnnoMapError::GroupFailed(_, e) => e.root(),
            _ => self
        }
    }

    pub fn is_selection_out_of_range (&self)->bool {
        matches!( self.root(), AnnoMapError::SelectionOutOfRange(..))
    }
}

macro_rules! malformed_record {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::AnnoMapError::MalformedRecord( format!( $fmt $(, $arg)* ))
    };
}
pub(crate) use malformed_record;

macro_rules! invalid_config {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::AnnoMapError::InvalidConfig( format!( $fmt $(, $arg)* ))
    };
}
pub(crate) use invalid_config;
