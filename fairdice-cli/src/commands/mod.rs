pub mod play;
pub mod table;
pub mod verify;

pub use play::play;
pub use table::{probability_table, show_table};
pub use verify::verify;
