// Copyright 2022 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

// Traced from `star-burst.svg`. Do not edit by hand.

use crate::{Point, Segment};

const fn pt(x: f32, y: f32) -> Point {
    Point::from_xy(x, y)
}

/// A twelve-ray seal with scalloped edges.
pub(crate) const SEGMENTS: &[Segment] = &[
    Segment::MoveTo(pt(50.00, 2.58)),
    Segment::CubicTo(pt(55.40, 2.58), pt(55.10, 13.21), pt(59.54, 14.40)),
    Segment::CubicTo(pt(63.98, 15.59), pt(69.02, 6.26), pt(73.70, 8.96)),
    Segment::CubicTo(pt(78.37, 11.66), pt(72.32, 21.17), pt(75.57, 24.43)),
    Segment::CubicTo(pt(78.83, 27.68), pt(88.08, 21.78), pt(90.78, 26.45)),
    Segment::CubicTo(pt(93.48, 31.13), pt(84.01, 36.13), pt(85.20, 40.57)),
    Segment::CubicTo(pt(86.39, 45.01), pt(97.03, 44.60), pt(97.03, 50.00)),
    Segment::CubicTo(pt(97.03, 55.40), pt(86.16, 54.93), pt(84.97, 59.37)),
    Segment::CubicTo(pt(83.78, 63.81), pt(93.14, 68.67), pt(90.44, 73.35)),
    Segment::CubicTo(pt(87.74, 78.02), pt(79.03, 72.53), pt(75.78, 75.78)),
    Segment::CubicTo(pt(72.53, 79.03), pt(78.04, 87.76), pt(73.36, 90.46)),
    Segment::CubicTo(pt(68.68, 93.16), pt(63.88, 84.03), pt(59.44, 85.22)),
    Segment::CubicTo(pt(54.99, 86.41), pt(55.40, 96.52), pt(50.00, 96.52)),
    Segment::CubicTo(pt(44.60, 96.52), pt(45.08, 86.13), pt(40.64, 84.94)),
    Segment::CubicTo(pt(36.20, 83.75), pt(31.07, 93.59), pt(26.39, 90.89)),
    Segment::CubicTo(pt(21.72, 88.19), pt(27.49, 79.02), pt(24.24, 75.76)),
    Segment::CubicTo(pt(20.98, 72.51), pt(11.99, 78.18), pt(9.29, 73.51)),
    Segment::CubicTo(pt(6.59, 68.83), pt(15.75, 63.94), pt(14.56, 59.50)),
    Segment::CubicTo(pt(13.37, 55.05), pt(3.14, 55.40), pt(3.14, 50.00)),
    Segment::CubicTo(pt(3.14, 44.60), pt(13.90, 45.09), pt(15.09, 40.64)),
    Segment::CubicTo(pt(16.28, 36.20), pt(6.35, 31.03), pt(9.05, 26.36)),
    Segment::CubicTo(pt(11.75, 21.68), pt(20.89, 27.39), pt(24.14, 24.14)),
    Segment::CubicTo(pt(27.39, 20.89), pt(21.74, 11.86), pt(26.42, 9.16)),
    Segment::CubicTo(pt(31.10, 6.46), pt(36.08, 15.84), pt(40.53, 14.65)),
    Segment::CubicTo(pt(44.97, 13.46), pt(44.60, 2.58), pt(50.00, 2.58)),
    Segment::Close,
];
