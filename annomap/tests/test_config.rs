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
use annomap::{AnnoMapConfig, AnnoMapError, ConfigOverrides, MapFormat, SelectionPolicy, DEFAULT_SEGMENTS};

#[test]
fn test_resource_config()->Result<()> {
    let config = AnnoMapConfig::from_ron_file("resources/annomap.ron")?;
    println!("{config:#?}");

    assert_eq!( config.input_path, PathBuf::from("./stl10_nara.csv"));
    assert_eq!( config.output_dir, PathBuf::from("./maps"));
    assert_eq!( config.map_size, 96);
    assert_eq!( config.annotations.indices(), &[1,2,3]);
    assert_eq!( config.fixed_radius(), None);
    assert_eq!( config.segments, DEFAULT_SEGMENTS);
    assert_eq!( config.output_format, MapFormat::Rgb);
    assert_eq!( config.on_selection_error, SelectionPolicy::Skip);
    Ok(())
}

#[test]
fn test_partial_config()->Result<()> {
    let input = r#"
    AnnoMapConfig(
        map_size: 128,
        annotations: [2, 4],
        fixed_radius: 9.5,
        output_format: Gray,
        on_selection_error: Abort,
    )
    "#;
    let config = AnnoMapConfig::from_ron_str( input)?;

    assert_eq!( config.map_size, 128);
    assert_eq!( config.annotations.indices(), &[2,4]);
    assert_eq!( config.fixed_radius(), Some(9.5));
    assert_eq!( config.output_format, MapFormat::Gray);
    assert_eq!( config.on_selection_error, SelectionPolicy::Abort);
    assert_eq!( config.output_dir, PathBuf::from("./maps")); // default
    Ok(())
}

#[test]
fn test_fixed_radius_sentinel() {
    for (r, expected) in [(-1.0, None), (0.0, None), (0.5, Some(0.5)), (12.0, Some(12.0))] {
        let config = AnnoMapConfig { fixed_radius: r, ..AnnoMapConfig::default() };
        assert_eq!( config.fixed_radius(), expected);
    }
}

#[test]
fn test_invalid_config() {
    assert!( matches!( AnnoMapConfig::from_ron_str("(map_size: 0)"), Err(AnnoMapError::InvalidConfig(_))));
    assert!( matches!( AnnoMapConfig::from_ron_str("(segments: 2)"), Err(AnnoMapError::InvalidConfig(_))));
    assert!( matches!( AnnoMapConfig::from_ron_str("(annotations: [])"), Err(AnnoMapError::RonError(_))));
    assert!( matches!( AnnoMapConfig::from_ron_str("(annotations: [0, 1])"), Err(AnnoMapError::RonError(_))));
}

#[derive(Parser)]
struct Cli {
    #[command(flatten)]
    overrides: ConfigOverrides,
}

fn overrides (args: &[&str])->Result<ConfigOverrides> {
    let mut argv = vec!["draw_annotation_maps"];
    argv.extend_from_slice( args);
    Ok( Cli::try_parse_from( argv)?.overrides )
}

const FILE_CONFIG: &str = r#"
    AnnoMapConfig(
        output_dir: "./file_maps",
        map_size: 128,
        annotations: [2, 4],
        fixed_radius: 9.5,
        output_format: Gray,
    )
"#;

#[test]
fn test_override_precedence()->Result<()> {
    let file_config = AnnoMapConfig::from_ron_str( FILE_CONFIG)?;

    // no command line values: file values, then defaults
    let config = file_config.clone().with_overrides( overrides( &[])?)?;
    assert_eq!( config.map_size, 128);
    assert_eq!( config.annotations.indices(), &[2,4]);
    assert_eq!( config.fixed_radius(), Some(9.5));
    assert_eq!( config.input_path, PathBuf::from("./stl10_nara.csv"));

    // command line values win over file values
    let config = file_config.with_overrides( overrides( &["--fixed-radius", "-1", "--map-size", "64", "--annotations", "1", "3"])?)?;
    assert_eq!( config.map_size, 64);
    assert_eq!( config.annotations.indices(), &[1,3]);
    assert_eq!( config.fixed_radius, -1.0);
    assert_eq!( config.fixed_radius(), None);
    assert_eq!( config.output_format, MapFormat::Gray); // from file
    assert_eq!( config.output_dir, PathBuf::from("./file_maps")); // from file
    assert_eq!( config.on_selection_error, SelectionPolicy::Skip);
    Ok(())
}

#[test]
fn test_override_options()->Result<()> {
    let config = AnnoMapConfig::default().with_overrides( overrides( &[
        "--input-name", "annotations.csv", "--output-dir", "out", "--segments", "90",
        "--output-format", "gray", "--abort-on-missing"
    ])?)?;

    assert_eq!( config.input_path, PathBuf::from("annotations.csv"));
    assert_eq!( config.output_dir, PathBuf::from("out"));
    assert_eq!( config.segments, 90);
    assert_eq!( config.output_format, MapFormat::Gray);
    assert_eq!( config.on_selection_error, SelectionPolicy::Abort);
    assert_eq!( config.map_size, 96); // default
    Ok(())
}

#[test]
fn test_invalid_overrides()->Result<()> {
    let res = AnnoMapConfig::default().with_overrides( overrides( &["--annotations", "0"])?);
    assert!( matches!( res, Err(AnnoMapError::InvalidArgument(_))));

    let res = AnnoMapConfig::default().with_overrides( overrides( &["--map-size", "0"])?);
    assert!( matches!( res, Err(AnnoMapError::InvalidConfig(_))));

    let res = AnnoMapConfig::default().with_overrides( overrides( &["--segments", "2"])?);
    assert!( matches!( res, Err(AnnoMapError::InvalidConfig(_))));

    assert!( overrides( &["--output-format", "cmyk"]).is_err());
    Ok(())
}
