//! Wok range configurator core: burner layout, pricing and kitchen-fit
//! checks. Pure functions over plain values; nothing here touches a window,
//! a DOM or the filesystem.

pub mod burner;
pub mod constants;
pub mod error;
pub mod fit;
pub mod layout;
pub mod options;
pub mod pricing;
pub mod report;
pub mod scene;
pub mod units;
pub mod warnings;

pub use burner::*;
pub use constants::*;
pub use error::*;
pub use fit::*;
pub use layout::*;
pub use options::*;
pub use pricing::*;
pub use report::*;
pub use scene::*;
pub use units::*;
pub use warnings::*;
