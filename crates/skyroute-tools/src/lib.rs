//! Data-layer tools for SkyRoute.
//!
//! The orchestrator reaches the flight backend only through these traits:
//! inventory lookup for searches and reservation commit for bookings.

pub mod error;
pub mod inventory;
pub mod reservation;

pub use error::ToolError;
pub use inventory::{FlightInventory, MockFlightInventory};
pub use reservation::{MockReservationService, ReservationService};
