pub mod cool_warm;
pub mod errors;
pub mod factory;
pub mod fire_gradient;
pub mod kinds;
