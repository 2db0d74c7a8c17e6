pub mod lobby_screen;
pub mod results_screen;
pub mod session_screen;
