pub mod answers;
pub mod candidate;
pub mod recommendation;
pub mod scale;
pub mod session;
