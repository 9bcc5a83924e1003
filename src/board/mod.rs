//! The board: pits, layout and the sowing algorithm.
//!
//! - `pit`: `Pit` and `PitKind`, the per-hole stone counter
//! - `layout`: `Board`, its geometry and read-only queries
//! - `view`: `Player`, a borrowed per-player view of the board
//! - `sowing`: `Board::make_move`, captures and end-of-game collection

pub mod pit;
pub mod layout;
pub mod view;
pub mod sowing;

pub use pit::{Pit, PitKind};
pub use layout::Board;
pub use view::Player;
pub use sowing::{Capture, Sowing};
