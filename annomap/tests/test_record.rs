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

use anyhow::Result;
use annomap::{AnnoMapError, parse_image_id, read_records};

// run with "cargo test -p annomap --test test_record -- --nocapture"

const HEADER: &str = "Split,Image,Category,CenterX,CenterY,RadiusX,RadiusY,Angle,WorkTime\n";

#[test]
fn test_parse_image_id()->Result<()> {
    assert_eq!( parse_image_id("00001.png")?, 1);
    assert_eq!( parse_image_id("42.jpg")?, 42);
    assert_eq!( parse_image_id("00007.tar.gz")?, 7); // everything after the first '.' is ignored
    Ok(())
}

#[test]
fn test_malformed_image_id() {
    for name in ["00001", "img_01.png", "-3.png", ".png", ""] {
        match parse_image_id(name) {
            Err(AnnoMapError::MalformedRecord(msg)) => println!("{name:?} -> {msg}"),
            other => panic!("expected malformed record for {name:?}, got {other:?}")
        }
    }
}

#[test]
fn test_read_records()->Result<()> {
    let input = format!("{HEADER}\
        train,00001.png,airplane,48,48,10,12,0.5,3.2\n\
        test,00002.png,bird,10.5,20.25,3,4,0,\n");

    let recs = read_records( input.as_bytes(), None)?;
    assert_eq!( recs.len(), 2);

    let r0 = &recs[0];
    assert_eq!( r0.split, "train");
    assert_eq!( r0.image_id, 1);
    assert_eq!( r0.category, "airplane");
    assert_eq!( (r0.center_x, r0.center_y), (48.0, 48.0));
    assert_eq!( (r0.radius_x, r0.radius_y), (10.0, 12.0));
    assert_eq!( r0.angle, 0.5);
    assert_eq!( r0.work_time, Some(3.2));

    let r1 = &recs[1];
    assert_eq!( (r1.split.as_str(), r1.image_id), ("test", 2));
    assert_eq!( (r1.center_x, r1.center_y), (10.5, 20.25));
    assert_eq!( r1.work_time, None);
    Ok(())
}

#[test]
fn test_optional_and_extra_columns()->Result<()> {
    let input = "Id,Split,Image,Category,CenterX,CenterY,RadiusX,RadiusY,Angle,Annotator\n\
                 0,train,00003.png,cat,1,2,3,4,0,7\n";

    let recs = read_records( input.as_bytes(), None)?;
    assert_eq!( recs.len(), 1);
    assert_eq!( recs[0].image_id, 3);
    assert_eq!( recs[0].work_time, None);
    Ok(())
}

#[test]
fn test_fixed_radius()->Result<()> {
    let input = format!("{HEADER}\
        train,00001.png,cat,48,48,10,12,0.3,1\n\
        train,00001.png,cat,48,48,25,3,0.3,1\n");

    let recs = read_records( input.as_bytes(), Some(7.0))?;
    for r in &recs {
        assert_eq!( (r.radius_x, r.radius_y), (7.0, 7.0));
    }
    // geometry other than the radii is preserved
    assert_eq!( recs[0], recs[1]);
    Ok(())
}

#[test]
fn test_malformed_row_is_fatal() {
    let input = format!("{HEADER}\
        train,00001.png,cat,48,48,10,12,0,1\n\
        train,image.png,cat,48,48,10,12,0,1\n");

    match read_records( input.as_bytes(), None) {
        Err(AnnoMapError::MalformedRecord(msg)) => {
            println!("{msg}");
            assert!( msg.contains("data row 2"));
        }
        other => panic!("expected malformed record, got {other:?}")
    }
}

#[test]
fn test_unparsable_number_is_fatal() {
    let input = format!("{HEADER}train,00001.png,cat,abc,48,10,12,0,1\n");
    assert!( matches!( read_records( input.as_bytes(), None), Err(AnnoMapError::CsvError(_))));
}
