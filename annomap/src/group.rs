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

use std::{collections::HashMap, fmt};
use crate::record::AnnotationRecord;

/// identifies the source image of an annotation and hence the output map
#[derive(Debug,Clone,PartialEq,Eq,Hash,PartialOrd,Ord)]
pub struct ImageGroupKey {
    pub split: String,
    pub image_id: u64,
}

impl ImageGroupKey {
    pub fn new (split: impl ToString, image_id: u64)->Self {
        ImageGroupKey { split: split.to_string(), image_id }
    }

    pub fn of (rec: &AnnotationRecord)->Self {
        ImageGroupKey { split: rec.split.clone(), image_id: rec.image_id }
    }
}

impl fmt::Display for ImageGroupKey {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "{}/{:05}", self.split, self.image_id)
    }
}

/// annotations grouped by image. Both the groups and the annotations within a group are kept
/// in the order in which they were first encountered - selection indices refer to this order
#[derive(Debug,Default)]
pub struct AnnotationGroups {
    groups: Vec<(ImageGroupKey, Vec<AnnotationRecord>)>,
    index: HashMap<ImageGroupKey, usize>,
}

impl AnnotationGroups {
    pub fn new ()->Self {
        AnnotationGroups { groups: Vec::new(), index: HashMap::new() }
    }

    pub fn push (&mut self, rec: AnnotationRecord) {
        let key = ImageGroupKey::of( &rec);
        match self.index.get( &key) {
            Some(&i) => self.groups[i].1.push( rec),
            None => {
                self.index.insert( key.clone(), self.groups.len());
                self.groups.push( (key, vec![rec]));
            }
        }
    }

    pub fn len (&self)->usize { self.groups.len() }

    pub fn is_empty (&self)->bool { self.groups.is_empty() }

    /// total number of annotations over all groups
    pub fn n_records (&self)->usize {
        self.groups.iter().map( |(_,g)| g.len()).sum()
    }

    pub fn get (&self, key: &ImageGroupKey)->Option<&[AnnotationRecord]> {
        self.index.get( key).map( |&i| self.groups[i].1.as_slice())
    }

    /// iterate groups in first-seen order
    pub fn iter (&self)->impl Iterator<Item=(&ImageGroupKey,&[AnnotationRecord])> {
        self.groups.iter().map( |(k,g)| (k, g.as_slice()))
    }

    pub fn keys (&self)->impl Iterator<Item=&ImageGroupKey> {
        self.groups.iter().map( |(k,_)| k)
    }
}

impl FromIterator<AnnotationRecord> for AnnotationGroups {
    fn from_iter<I: IntoIterator<Item=AnnotationRecord>> (iter: I)->Self {
        let mut groups = AnnotationGroups::new();
        for rec in iter { groups.push( rec) }
        groups
    }
}

/// build the complete grouping in a single pass. No sorting, de-duplication or size checks
pub fn group_annotations (records: impl IntoIterator<Item=AnnotationRecord>)->AnnotationGroups {
    records.into_iter().collect()
}
