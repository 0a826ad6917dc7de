//! Survey-level context: where a survey's layers live and what its HiPS
//! metadata says.
//!
//! - [`layout`]: [`SurveyLayout`] URL construction for layers and data products
//! - [`properties`]: reading and writing the HiPS `properties` file
//! - [`tree`]: creating the `Norder*/Dir*` directories of a new survey

pub mod layout;
pub mod properties;
pub mod tree;

pub use layout::SurveyLayout;
pub use properties::{HipsProperties, ImageSurvey};
pub use tree::create_hips_tree;
