pub mod classifier;
pub mod data;
pub mod error;
pub mod gesture;
pub mod network;
pub mod train;

// Convenience re-exports
pub use classifier::Classifier;
pub use data::label::Label;
pub use data::loader::load_samples;
pub use data::sample::Sample;
pub use error::NnError;
pub use gesture::feature::FeatureVector;
pub use gesture::normalizer::GestureNormalizer;
pub use gesture::point::Point;
pub use gesture::store::GestureStore;
pub use network::arch::parse_architecture;
pub use network::network::Network;
pub use train::train_config::TrainConfig;
pub use train::trainer::{train, TrainSummary};
pub use train::update::UpdateDiscipline;
