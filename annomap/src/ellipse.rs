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

/// rasterization of rotated ellipses as filled polygons

use image::{GrayImage, Luma};
use imageproc::{drawing::{draw_line_segment_mut, draw_polygon_mut}, point::Point};
use annomap_common::{cos, sin, TWO_PI};
use crate::{Raster, record::AnnotationRecord};

/// number of boundary samples, i.e. 1 degree steps
pub const DEFAULT_SEGMENTS: usize = 360;

pub const BACKGROUND: Luma<u8> = Luma([0]);
pub const FOREGROUND: Luma<u8> = Luma([255]);

/// ellipse geometry in canvas pixel coordinates. `angle` rotates the ellipse axes (radians, counter-clockwise
/// in a y-up frame, which is clockwise on screen)
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Ellipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
    pub angle: f64,
}

impl Ellipse {
    pub fn new (center: (f64,f64), radius: (f64,f64), angle: f64)->Self {
        Ellipse { cx: center.0, cy: center.1, rx: radius.0, ry: radius.1, angle }
    }

    /// the sampled boundary: point i is at parameter angle i*2π/segments, scaled by the radii,
    /// rotated by `angle` and translated to the center
    pub fn boundary_points (&self, segments: usize)->Vec<(f64,f64)> {
        let (cos_a, sin_a) = (cos(self.angle), sin(self.angle));
        let n = segments as f64;

        (0..segments).map( |i| {
            let theta = i as f64 * TWO_PI / n;
            let x = cos(theta) * self.rx;
            let y = sin(theta) * self.ry;
            ( cos_a * x - sin_a * y + self.cx,
              sin_a * x + cos_a * y + self.cy )
        }).collect()
    }
}

impl From<&AnnotationRecord> for Ellipse {
    fn from (rec: &AnnotationRecord)->Self {
        Ellipse { cx: rec.center_x, cy: rec.center_y, rx: rec.radius_x, ry: rec.radius_y, angle: rec.angle }
    }
}

#[derive(Debug,Clone)]
pub struct EllipseRasterizer {
    canvas_size: u32,
    segments: usize,
}

impl EllipseRasterizer {
    pub fn new (canvas_size: u32)->Self {
        EllipseRasterizer { canvas_size, segments: DEFAULT_SEGMENTS }
    }

    pub fn with_segments (canvas_size: u32, segments: usize)->Self {
        EllipseRasterizer { canvas_size, segments: segments.max(3) }
    }

    pub fn canvas_size (&self)->u32 { self.canvas_size }

    pub fn segments (&self)->usize { self.segments }

    /// a black square canvas with the ellipse filled white.
    /// Vertices outside the canvas are not clipped, the fill only paints pixels inside the canvas. Vertex
    /// coordinates are clamped to `[-canvas_size, 2*canvas_size]` so that arbitrarily large ellipses still
    /// give bounded polygon edges. This only changes the result for ellipses that extend more than one
    /// canvas size beyond the canvas
    pub fn rasterize (&self, ellipse: &Ellipse)->Raster {
        let mut canvas = GrayImage::from_pixel( self.canvas_size, self.canvas_size, BACKGROUND);
        let vertices = polygon_vertices( &ellipse.boundary_points( self.segments), self.canvas_size);
        fill_polygon( &mut canvas, &vertices);
        canvas
    }

    pub fn rasterize_record (&self, rec: &AnnotationRecord)->Raster {
        self.rasterize( &Ellipse::from(rec))
    }
}

/// round to pixel positions within one canvas size around the canvas and drop repeated vertices.
/// imageproc does not accept polygons that are explicitly closed (first == last), and its line
/// iteration overflows for coordinates close to the i32 limits
fn polygon_vertices (points: &[(f64,f64)], canvas_size: u32)->Vec<Point<i32>> {
    let size = canvas_size as f64;
    let (lo, hi) = (-size, 2.0 * size);
    let mut vertices: Vec<Point<i32>> = Vec::with_capacity( points.len());

    for &(x,y) in points {
        let p = Point::new( x.round().clamp(lo, hi) as i32, y.round().clamp(lo, hi) as i32);
        if vertices.last() != Some(&p) {
            vertices.push( p);
        }
    }

    while vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }

    vertices
}

fn fill_polygon (canvas: &mut GrayImage, vertices: &[Point<i32>]) {
    match vertices {
        [] => {}
        [p] => {
            if p.x >= 0 && p.y >= 0 && (p.x as u32) < canvas.width() && (p.y as u32) < canvas.height() {
                canvas.put_pixel( p.x as u32, p.y as u32, FOREGROUND);
            }
        }
        [p0, p1] => {
            draw_line_segment_mut( canvas, (p0.x as f32, p0.y as f32), (p1.x as f32, p1.y as f32), FOREGROUND);
        }
        _ => draw_polygon_mut( canvas, vertices, FOREGROUND)
    }
}
