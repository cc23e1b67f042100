//! Platform-specific audio players.

mod afplay;
mod aplay;
mod ffplay;
mod paplay;

pub use afplay::Afplay;
pub use aplay::Aplay;
pub use ffplay::Ffplay;
pub use paplay::Paplay;

use super::tool::PlayerTool;

/// Get the platform-appropriate players in priority order.
pub fn platform_tools() -> Vec<Box<dyn PlayerTool>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(Afplay::new()), Box::new(Ffplay::new())]
    }

    #[cfg(target_os = "linux")]
    {
        vec![
            Box::new(Paplay::new()),
            Box::new(Ffplay::new()),
            Box::new(Aplay::new()),
        ]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        vec![Box::new(Ffplay::new())]
    }
}
