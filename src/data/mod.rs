pub mod label;
pub mod loader;
pub mod sample;

pub use label::Label;
pub use loader::load_samples;
pub use sample::Sample;
