// Client-side service library for the reservation mini-app widget

pub mod client;
pub mod host_context;
pub mod reservation;

// Re-export key types for convenience
pub use client::{
    ClientConfig, ClientError, ConfigError, DraftSource, ReservationApi, ReservationClient,
};
pub use host_context::{HostContextProvider, HostIdentity, WebAppChat, WebAppInitData, WebAppUser};
pub use reservation::Reservation;
