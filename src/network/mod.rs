pub mod arch;
pub mod layer;
pub mod network;
pub mod unit;

pub use arch::parse_architecture;
pub use layer::Layer;
pub use network::Network;
pub use unit::Unit;
