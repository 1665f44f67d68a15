use crate::{
    geometry::{landside, waterside},
    DikeError, ProfileInput,
};
use geo::{CoordFloat, LineString, Point};
use log::debug;
use std::fmt;

/// Label attached to a profile.
///
/// Both variants share the same geometry; downstream consumers use the
/// variant to pick labels and colors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    #[default]
    Standard,
    Reinforced,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Standard => f.write_str("Dike Profile"),
            Variant::Reinforced => f.write_str("Reinforced Profile"),
        }
    }
}

/// Cross-section silhouette of a dike.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile<C: CoordFloat = f64> {
    variant: Variant,

    /// Characteristic points, from the waterside toe to the landside
    /// toe.
    points: Vec<Point<C>>,
}

impl<C: CoordFloat> Default for Profile<C> {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl<C: CoordFloat> Profile<C> {
    pub fn builder() -> ProfileBuilder<C> {
        ProfileBuilder {
            input: None,
            variant: Variant::default(),
        }
    }

    /// Returns an empty profile.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            points: Vec::new(),
        }
    }

    /// Returns a profile through the given `(x, y)` points, kept in
    /// the order given.
    pub fn from_points<I, P>(variant: Variant, points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point<C>>,
    {
        Self {
            variant,
            points: points.into_iter().map(Into::into).collect(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn points(&self) -> &[Point<C>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Highest y coordinate of all points, NaN when empty.
    ///
    /// A NaN coordinate anywhere makes the height NaN.
    pub fn height(&self) -> C {
        self.points
            .iter()
            .map(|point| point.y())
            .reduce(|max, y| if y > max || y.is_nan() { y } else { max })
            .unwrap_or_else(C::nan)
    }

    /// x coordinate of the last point, NaN when empty.
    ///
    /// This is the position of the landside toe, not a maximum over
    /// all points.
    pub fn width(&self) -> C {
        self.points.last().map_or_else(C::nan, |point| point.x())
    }

    /// Returns the silhouette as a polyline.
    pub fn line_string(&self) -> LineString<C> {
        self.points.iter().map(|point| point.0).collect()
    }
}

impl<C: CoordFloat> From<&Profile<C>> for LineString<C> {
    fn from(profile: &Profile<C>) -> Self {
        profile.line_string()
    }
}

/// Computes the profile of `input`.
pub fn build<C: CoordFloat>(input: &ProfileInput<C>, variant: Variant) -> Profile<C> {
    let mut points = Vec::with_capacity(8);
    points.extend(waterside(input));
    points.extend(landside(input));
    Profile { variant, points }
}

pub struct ProfileBuilder<C: CoordFloat = f64> {
    /// Design parameters (required).
    input: Option<ProfileInput<C>>,

    /// Label of the resulting profile (defaults to `Standard`).
    variant: Variant,
}

impl<C: CoordFloat> ProfileBuilder<C> {
    pub fn from_input(input: ProfileInput<C>) -> Self {
        Profile::builder().input(input)
    }

    /// Design parameters (required).
    #[must_use]
    pub fn input(mut self, input: ProfileInput<C>) -> Self {
        self.input = Some(input);
        self
    }

    /// Label of the resulting profile (defaults to `Standard`).
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn build(&self) -> Result<Profile<C>, DikeError> {
        let input = self.input.as_ref().ok_or(DikeError::MissingInput)?;

        let profile = build(input, self.variant);

        debug!(
            "profile; variant: {}, len: {}, complete_input: {}",
            self.variant,
            profile.len(),
            input.is_complete()
        );

        Ok(profile)
    }
}
