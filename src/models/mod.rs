pub mod lookup;
pub mod match_result;
pub mod roster;
pub mod session;
