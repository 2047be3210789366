pub mod errors;
pub mod hex;
pub mod kinds;
pub mod palette;
