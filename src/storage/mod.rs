pub mod parameter_store;
pub mod render_parameters;

pub use parameter_store::{ParameterStore, ParameterStoreError, StoredParameters};
pub use render_parameters::{Clamped, RenderLimits, RenderLimitsError, RenderParameters};
