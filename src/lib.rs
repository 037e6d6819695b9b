pub mod domain;
pub mod utils;

pub use domain::model::{
    Courier, CourierDetectList, CourierDetectRequest, CourierDetectTracking, CourierList,
    CourierTracking, SlugFilter,
};
pub use utils::error::{CourierError, Result};
pub use utils::validation::Validate;
