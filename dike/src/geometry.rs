//! Characteristic points of the two faces of a dike.
//!
//! x = 0 is the waterside edge of the crest. Every sloped leg is offset
//! horizontally by its drop in height times the slope; berms are flat
//! and offset by their width.

use crate::{Param, ProfileInput};
use geo::{CoordFloat, Point};

/// Horizontal run of a leg dropping `rise` at `slope`.
fn run<C: CoordFloat>(rise: C, slope: C) -> C {
    rise * slope
}

/// Waterside points, ordered toe to crest.
pub(crate) fn waterside<C: CoordFloat>(input: &ProfileInput<C>) -> [Point<C>; 4] {
    let ground = input.get(Param::OuterGroundLevel);
    let slope = input.get(Param::OuterSlope);
    let berm_height = input.get(Param::OuterBermHeight);
    let berm_width = input.get(Param::OuterBermWidth);
    let crest_height = input.get(Param::CrestHeight);

    let crest = Point::new(C::zero(), crest_height);
    let berm_end = Point::new(crest.x() - run(crest_height - berm_height, slope), berm_height);
    let berm_start = Point::new(berm_end.x() - berm_width, berm_height);
    let toe = Point::new(berm_start.x() - run(berm_height - ground, slope), ground);

    [toe, berm_start, berm_end, crest]
}

/// Landside points, ordered crest to toe.
pub(crate) fn landside<C: CoordFloat>(input: &ProfileInput<C>) -> [Point<C>; 4] {
    let crest_height = input.get(Param::CrestHeight);
    let crest_width = input.get(Param::CrestWidth);
    let slope = input.get(Param::InnerSlope);
    let berm_height = input.get(Param::InnerBermHeight);
    let berm_width = input.get(Param::InnerBermWidth);
    let ground = input.get(Param::InnerGroundLevel);

    let crest = Point::new(crest_width, crest_height);
    let berm_start = Point::new(crest.x() + run(crest_height - berm_height, slope), berm_height);
    let berm_end = Point::new(berm_start.x() + berm_width, berm_height);
    let toe = Point::new(berm_end.x() + run(berm_height - ground, slope), ground);

    [crest, berm_start, berm_end, toe]
}
