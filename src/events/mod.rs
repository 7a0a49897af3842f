mod settings;
mod touch;

pub use settings::*;
pub use touch::*;
