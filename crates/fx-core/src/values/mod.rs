mod profile;
mod window;

pub use profile::Profile;
pub use window::DayWindow;

/// Exchange rate as quoted by clients
pub type Rate = f64;
