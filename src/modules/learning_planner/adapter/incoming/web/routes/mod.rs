pub mod toggle_phase;

pub use toggle_phase::toggle_phase_handler;
