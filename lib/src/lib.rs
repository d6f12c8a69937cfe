pub mod controller;
pub mod exec;
pub mod files;
pub mod render;
pub mod section;
pub mod types;
pub mod unit;
pub mod validate;

pub use controller::{Action, DryRun, ServiceController};
pub use files::Level;
pub use render::render;
pub use types::{Restart, ServiceType, SystemdBool, Target};
pub use unit::{Install, Service, ServiceSection, Unit};
