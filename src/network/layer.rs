use crate::network::unit::Unit;

/// An ordered, fixed-size group of units at one depth of the network.
#[derive(Debug, Clone)]
pub struct Layer {
    pub units: Vec<Unit>,
}

impl Layer {
    pub fn new(units: Vec<Unit>) -> Layer {
        Layer { units }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Current activations of every unit, in order.
    pub fn activations(&self) -> Vec<f64> {
        self.units.iter().map(|unit| unit.activation).collect()
    }
}
