pub mod greyscale;
pub mod histogram;
pub mod loader;
pub mod mask;

pub use greyscale::*;
pub use histogram::*;
pub use loader::*;
pub use mask::*;
