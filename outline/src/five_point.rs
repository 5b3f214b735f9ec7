// Copyright 2022 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

// Traced from `star-five-point.svg`. Do not edit by hand.

use crate::{Point, Segment};

const fn pt(x: f32, y: f32) -> Point {
    Point::from_xy(x, y)
}

/// A five-point star with rounded tips.
pub(crate) const SEGMENTS: &[Segment] = &[
    Segment::MoveTo(pt(48.47, 9.20)),
    Segment::CubicTo(pt(49.11, 7.55), pt(50.15, 7.54), pt(50.82, 9.18)),
    Segment::CubicTo(pt(54.13, 17.34), pt(57.39, 25.38), pt(60.60, 33.31)),
    Segment::CubicTo(pt(61.14, 34.64), pt(62.74, 35.78), pt(64.17, 35.87)),
    Segment::CubicTo(pt(72.85, 36.39), pt(81.64, 36.91), pt(90.55, 37.44)),
    Segment::CubicTo(pt(92.31, 37.55), pt(92.62, 38.53), pt(91.24, 39.63)),
    Segment::CubicTo(pt(84.21, 45.26), pt(77.24, 50.83), pt(70.36, 56.33)),
    Segment::CubicTo(pt(69.23, 57.23), pt(68.63, 59.08), pt(69.01, 60.47)),
    Segment::CubicTo(pt(71.30, 68.80), pt(73.61, 77.19), pt(75.92, 85.64)),
    Segment::CubicTo(pt(76.39, 87.34), pt(75.57, 87.94), pt(74.09, 86.97)),
    Segment::CubicTo(pt(66.93, 82.27), pt(59.68, 77.51), pt(52.36, 72.71)),
    Segment::CubicTo(pt(51.16, 71.92), pt(49.21, 71.91), pt(48.00, 72.69)),
    Segment::CubicTo(pt(40.56, 77.47), pt(33.03, 82.31), pt(25.42, 87.20)),
    Segment::CubicTo(pt(23.93, 88.15), pt(23.12, 87.55), pt(23.61, 85.85)),
    Segment::CubicTo(pt(26.03, 77.48), pt(28.47, 69.07), pt(30.92, 60.60)),
    Segment::CubicTo(pt(31.32, 59.22), pt(30.74, 57.36), pt(29.63, 56.45)),
    Segment::CubicTo(pt(22.60, 50.68), pt(15.63, 44.96), pt(8.74, 39.30)),
    Segment::CubicTo(pt(7.37, 38.18), pt(7.69, 37.21), pt(9.46, 37.13)),
    Segment::CubicTo(pt(18.11, 36.77), pt(26.85, 36.41), pt(35.67, 36.04)),
    Segment::CubicTo(pt(37.10, 35.98), pt(38.68, 34.85), pt(39.20, 33.51)),
    Segment::CubicTo(pt(42.30, 25.39), pt(45.39, 17.28), pt(48.47, 9.20)),
    Segment::Close,
];
