pub mod crop;
pub mod lunar;
pub mod recommendation;
pub mod weather;

pub use crop::*;
pub use lunar::*;
pub use recommendation::*;
pub use weather::*;
