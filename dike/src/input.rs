use crate::DikeError;
use geo::CoordFloat;
use std::fmt;

/// One of the ten design parameters of a dike cross-section.
///
/// Slopes are horizontal run per unit of vertical rise, every other
/// parameter is a length or a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    OuterGroundLevel,
    OuterSlope,
    OuterBermHeight,
    OuterBermWidth,
    CrestHeight,
    CrestWidth,
    InnerSlope,
    InnerBermHeight,
    InnerBermWidth,
    InnerGroundLevel,
}

impl Param {
    /// All parameters, in the order `ProfileInput::from_values`
    /// expects them.
    pub const ALL: [Param; 10] = [
        Param::OuterGroundLevel,
        Param::OuterSlope,
        Param::OuterBermHeight,
        Param::OuterBermWidth,
        Param::CrestHeight,
        Param::CrestWidth,
        Param::InnerSlope,
        Param::InnerBermHeight,
        Param::InnerBermWidth,
        Param::InnerGroundLevel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Param::OuterGroundLevel => "outer_ground_level",
            Param::OuterSlope => "outer_slope",
            Param::OuterBermHeight => "outer_berm_height",
            Param::OuterBermWidth => "outer_berm_width",
            Param::CrestHeight => "crest_height",
            Param::CrestWidth => "crest_width",
            Param::InnerSlope => "inner_slope",
            Param::InnerBermHeight => "inner_berm_height",
            Param::InnerBermWidth => "inner_berm_width",
            Param::InnerGroundLevel => "inner_ground_level",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Design parameters of a dike cross-section.
///
/// A `None` field is unset and reads as NaN, which then propagates
/// through the profile geometry. No range checks are made.
///
/// With the `serde` feature, an explicit NaN value serializes as
/// `null` and reads back as unset; `get` returns NaN either way.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileInput<C: CoordFloat = f64> {
    /// Ground level in front of the waterside toe.
    pub outer_ground_level: Option<C>,

    /// Waterside slope (run per unit rise).
    pub outer_slope: Option<C>,

    /// Level of the waterside berm.
    pub outer_berm_height: Option<C>,

    /// Horizontal extent of the waterside berm.
    pub outer_berm_width: Option<C>,

    /// Level of the crest.
    pub crest_height: Option<C>,

    /// Horizontal extent of the crest.
    pub crest_width: Option<C>,

    /// Landside slope (run per unit rise).
    pub inner_slope: Option<C>,

    /// Level of the landside berm.
    pub inner_berm_height: Option<C>,

    /// Horizontal extent of the landside berm.
    pub inner_berm_width: Option<C>,

    /// Ground level behind the landside toe.
    pub inner_ground_level: Option<C>,
}

impl<C: CoordFloat> Default for ProfileInput<C> {
    fn default() -> Self {
        Self {
            outer_ground_level: None,
            outer_slope: None,
            outer_berm_height: None,
            outer_berm_width: None,
            crest_height: None,
            crest_width: None,
            inner_slope: None,
            inner_berm_height: None,
            inner_berm_width: None,
            inner_ground_level: None,
        }
    }
}

impl<C: CoordFloat> ProfileInput<C> {
    /// Number of values `from_values` expects.
    pub const COUNT: usize = Param::ALL.len();

    /// Returns an input with `values` assigned, in order, to the
    /// parameters listed in [`Param::ALL`].
    pub fn from_values(values: &[C]) -> Result<Self, DikeError> {
        if values.len() != Self::COUNT {
            return Err(DikeError::InvalidArgument {
                expected: Self::COUNT,
                actual: values.len(),
            });
        }
        Ok(Self::assign(values))
    }

    fn assign(values: &[C]) -> Self {
        let mut input = Self::default();
        for (&param, &value) in Param::ALL.iter().zip(values) {
            input.set(param, value);
        }
        input
    }

    /// Returns the value of `param`, or NaN when unset.
    pub fn get(&self, param: Param) -> C {
        self.field(param).unwrap_or_else(C::nan)
    }

    pub fn is_set(&self, param: Param) -> bool {
        self.field(param).is_some()
    }

    /// Returns `true` when all ten parameters are set.
    pub fn is_complete(&self) -> bool {
        Param::ALL.iter().all(|&param| self.is_set(param))
    }

    pub fn set(&mut self, param: Param, value: C) {
        *self.field_mut(param) = Some(value);
    }

    #[must_use]
    pub fn with(mut self, param: Param, value: C) -> Self {
        self.set(param, value);
        self
    }

    /// Returns all ten values in declared order, NaN for unset ones.
    pub fn to_values(&self) -> [C; 10] {
        Param::ALL.map(|param| self.get(param))
    }

    fn field(&self, param: Param) -> Option<C> {
        match param {
            Param::OuterGroundLevel => self.outer_ground_level,
            Param::OuterSlope => self.outer_slope,
            Param::OuterBermHeight => self.outer_berm_height,
            Param::OuterBermWidth => self.outer_berm_width,
            Param::CrestHeight => self.crest_height,
            Param::CrestWidth => self.crest_width,
            Param::InnerSlope => self.inner_slope,
            Param::InnerBermHeight => self.inner_berm_height,
            Param::InnerBermWidth => self.inner_berm_width,
            Param::InnerGroundLevel => self.inner_ground_level,
        }
    }

    fn field_mut(&mut self, param: Param) -> &mut Option<C> {
        match param {
            Param::OuterGroundLevel => &mut self.outer_ground_level,
            Param::OuterSlope => &mut self.outer_slope,
            Param::OuterBermHeight => &mut self.outer_berm_height,
            Param::OuterBermWidth => &mut self.outer_berm_width,
            Param::CrestHeight => &mut self.crest_height,
            Param::CrestWidth => &mut self.crest_width,
            Param::InnerSlope => &mut self.inner_slope,
            Param::InnerBermHeight => &mut self.inner_berm_height,
            Param::InnerBermWidth => &mut self.inner_berm_width,
            Param::InnerGroundLevel => &mut self.inner_ground_level,
        }
    }
}

impl ProfileInput<f64> {
    /// Values of the default design, in [`Param::ALL`] order: a 6 m
    /// high dike with a 5 m crest, 1:3 slopes and no berms.
    pub const DEFAULT_DESIGN: [f64; 10] = [0.0, 3.0, 0.0, 0.0, 6.0, 5.0, 3.0, 0.0, 0.0, 0.0];

    pub fn default_design() -> Self {
        Self::assign(&Self::DEFAULT_DESIGN)
    }
}
