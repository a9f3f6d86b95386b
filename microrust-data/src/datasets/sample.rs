use microrust_core::Value;

/// One labelled example: a feature row and its target.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub features: Vec<f64>,
    pub label: f64,
}

impl Sample {
    pub fn new(features: Vec<f64>, label: f64) -> Self {
        Sample { features, label }
    }

    /// Lifts the features into fresh leaves, ready to feed a network.
    pub fn to_values(&self) -> Vec<Value> {
        self.features.iter().map(|&x| Value::new(x)).collect()
    }

    /// The label as a fresh leaf.
    pub fn label_value(&self) -> Value {
        Value::new(self.label)
    }
}
