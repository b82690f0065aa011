//! Player profile handlers.

mod clear_profile;
mod load_profile;
mod save_result;

pub use clear_profile::ClearProfileHandler;
pub use load_profile::LoadProfileHandler;
pub use save_result::SaveResultHandler;
