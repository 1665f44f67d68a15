//! # Dike profiles
//!
//! `dike` computes the cross-sectional silhouette of an earthen
//! flood-defense embankment from ten design parameters.
//!
//! ```
//! use dike::{Profile, ProfileInput, Variant};
//!
//! let input = ProfileInput::from_values(&[0.0, 3.0, 0.0, 0.0, 6.0, 5.0, 3.0, 0.0, 0.0, 0.0])?;
//! let profile = Profile::builder()
//!     .input(input)
//!     .variant(Variant::Reinforced)
//!     .build()?;
//! assert_eq!(profile.len(), 8);
//! assert_eq!(profile.height(), 6.0);
//! # Ok::<(), dike::DikeError>(())
//! ```

mod error;
mod geometry;
mod input;
mod profile;

pub use {
    crate::{
        error::DikeError,
        input::{Param, ProfileInput},
        profile::{build, Profile, ProfileBuilder, Variant},
    },
    geo,
};
