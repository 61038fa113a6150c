pub mod feature;
pub mod normalizer;
pub mod point;
pub mod store;

pub use feature::FeatureVector;
pub use normalizer::GestureNormalizer;
pub use point::Point;
pub use store::GestureStore;
