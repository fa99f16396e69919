pub mod command;
pub mod errors;
pub mod navigator;
pub mod settings;

pub use command::{NavigationCommand, PanDirection};
pub use errors::NavigationError;
pub use navigator::Navigator;
pub use settings::NavigationSettings;
