pub mod farm_work;
pub mod user;
