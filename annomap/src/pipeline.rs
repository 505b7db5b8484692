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

use annomap_common::{MinMaxAvg, debug, error, info, warn};
use crate::{
    Raster,
    aggregate::aggregate,
    config::{AnnoMapConfig, SelectionPolicy},
    ellipse::EllipseRasterizer,
    errors::{AnnoMapError, Result},
    group::{AnnotationGroups, ImageGroupKey, group_annotations},
    record::{AnnotationRecord, read_records_from_file},
    writer::MapSink,
};

/// outcome of a map generation run
#[derive(Debug,Default)]
pub struct RunSummary {
    pub n_records: usize,
    pub n_groups: usize,
    pub n_written: usize,
    /// images for which no map was written, in processing order
    pub failures: Vec<(ImageGroupKey, AnnoMapError)>,
    /// annotations per image
    pub group_sizes: MinMaxAvg,
}

impl RunSummary {
    pub fn is_complete (&self)->bool {
        self.failures.is_empty()
    }

    pub fn n_skipped_selections (&self)->usize {
        self.failures.iter().filter( |(_,e)| e.is_selection_out_of_range()).count()
    }

    /// turn a run with missing maps into an error
    pub fn ensure_complete (&self)->Result<()> {
        if self.is_complete() {
            Ok(())
        } else {
            Err( AnnoMapError::IncompleteRun( self.failures.len(), self.n_groups, self.n_skipped_selections()))
        }
    }
}

/// the driver: rasterizes and aggregates the annotations of each image and hands the maps to a sink
pub struct MapPipeline<S: MapSink> {
    config: AnnoMapConfig,
    rasterizer: EllipseRasterizer,
    sink: S,
}

impl <S: MapSink> MapPipeline<S> {
    pub fn new (config: AnnoMapConfig, sink: S)->Result<Self> {
        config.validate()?;
        let rasterizer = EllipseRasterizer::with_segments( config.map_size, config.segments);
        Ok( MapPipeline { config, rasterizer, sink } )
    }

    pub fn config (&self)->&AnnoMapConfig { &self.config }

    pub fn sink (&self)->&S { &self.sink }

    pub fn into_sink (self)->S { self.sink }

    /// read, group and process all annotations of the configured input table.
    /// Malformed input is fatal, before any map gets written
    pub fn run (&mut self)->Result<RunSummary> {
        info!("reading annotations from {:?}", self.config.input_path);
        let records = read_records_from_file( &self.config.input_path, self.config.fixed_radius())?;
        let groups = group_annotations( records);
        info!("{} annotations for {} images", groups.n_records(), groups.len());

        self.process_groups( &groups)
    }

    /// the map of a single image: one raster per annotation, averaged over the selection
    pub fn render_group (&self, records: &[AnnotationRecord])->Result<Raster> {
        let rasters: Vec<Raster> = records.iter().map( |rec| self.rasterizer.rasterize_record(rec)).collect();
        aggregate( &rasters, self.config.annotations.indices())
    }

    fn process_group (&mut self, key: &ImageGroupKey, records: &[AnnotationRecord])->Result<()> {
        let map = self.render_group( records)?;
        self.sink.write_map( key, &map)
    }

    /// process groups in first-seen order. Failures of one image don't affect others unless the
    /// selection policy is `Abort`
    pub fn process_groups (&mut self, groups: &AnnotationGroups)->Result<RunSummary> {
        let mut summary = RunSummary {
            n_records: groups.n_records(),
            n_groups: groups.len(),
            ..RunSummary::default()
        };

        for (i, (key, records)) in groups.iter().enumerate() {
            summary.group_sizes.add( records.len() as f64);
            debug!("[{}/{}] {} with {} annotations", i+1, groups.len(), key, records.len());

            match self.process_group( key, records) {
                Ok(()) => summary.n_written += 1,

                Err(e) if e.is_selection_out_of_range() => {
                    if self.config.on_selection_error == SelectionPolicy::Abort {
                        return Err( AnnoMapError::GroupFailed( key.clone(), Box::new(e)))
                    }
                    warn!("skipping {}: {}", key, e);
                    summary.failures.push( (key.clone(), e));
                }

                Err(e) => {
                    error!("no map for {}: {}", key, e);
                    summary.failures.push( (key.clone(), e));
                }
            }
        }

        info!("wrote {} of {} maps, annotations per image: {}", summary.n_written, summary.n_groups, summary.group_sizes);
        Ok(summary)
    }
}
