pub mod pairing;
pub mod standings;
pub mod types;

pub use pairing::swiss_pairings;
pub use standings::rank_standings;
pub use types::{Pairing, PlayerId, Standing};
