pub mod dashboard;
pub mod error;
pub mod farm_work;
pub mod feature_flags;
pub mod requests;
pub mod session;
pub mod withdrawal;

pub use dashboard::*;
pub use error::*;
pub use farm_work::*;
pub use feature_flags::*;
pub use requests::*;
pub use session::*;
pub use withdrawal::*;
