use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One labelled training pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl Example {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Self {
        Example { input, target }
    }
}

/// An ordered list of training examples. Serialized as a bare JSON array of
/// `{ "input": [...], "target": [...] }` objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    pub examples: Vec<Example>,
}

impl Dataset {
    pub fn new(examples: Vec<Example>) -> Self {
        Dataset { examples }
    }

    /// Features `[x², x, 1]` mapped to `x² + 2x + 3` for x in -2..=2. A
    /// single identity layer of three weights can fit it exactly.
    pub fn quadratic() -> Self {
        let target = |x: f64| 1.0 * x * x + 2.0 * x + 3.0;
        [-2.0, -1.0, 0.0, 1.0, 2.0]
            .into_iter()
            .map(|x| Example::new(vec![x * x, x, 1.0], vec![target(x)]))
            .collect()
    }

    /// XOR of the first two inputs. The third input is always 1.0 and
    /// stands in for a bias, which the network itself does not have.
    pub fn xor() -> Self {
        [
            ([0.0, 0.0], 0.0),
            ([0.0, 1.0], 1.0),
            ([1.0, 0.0], 1.0),
            ([1.0, 1.0], 0.0),
        ]
        .into_iter()
        .map(|([a, b], target)| Example::new(vec![a, b, 1.0], vec![target]))
        .collect()
    }

    /// Reads a dataset previously written as JSON.
    pub fn load_json(path: impl AsRef<Path>) -> crate::error::Result<Dataset> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// `(input size, target size)` of the first example.
    pub fn shape(&self) -> Option<(usize, usize)> {
        self.examples.first().map(|e| (e.input.len(), e.target.len()))
    }
}

impl FromIterator<Example> for Dataset {
    fn from_iter<I: IntoIterator<Item = Example>>(iter: I) -> Self {
        Dataset::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_matches_its_formula() {
        let data = Dataset::quadratic();
        assert_eq!(data.len(), 5);
        assert_eq!(data.shape(), Some((3, 1)));
        assert_eq!(data.examples()[0], Example::new(vec![4.0, -2.0, 1.0], vec![3.0]));
        assert_eq!(data.examples()[4], Example::new(vec![4.0, 2.0, 1.0], vec![11.0]));
    }

    #[test]
    fn collecting_examples_keeps_their_order() {
        let examples = vec![
            Example::new(vec![1.0], vec![2.0]),
            Example::new(vec![3.0], vec![4.0]),
        ];
        let collected: Dataset = examples.clone().into_iter().collect();
        assert_eq!(collected, Dataset::new(examples));
        assert_eq!(collected.examples()[1].target, vec![4.0]);
    }

    #[test]
    fn xor_carries_a_constant_input() {
        let data = Dataset::xor();
        assert_eq!(data.shape(), Some((3, 1)));
        assert!(data.examples().iter().all(|e| e.input[2] == 1.0));
        let ones: f64 = data.examples().iter().map(|e| e.target[0]).sum();
        assert_eq!(ones, 2.0);
    }

    #[test]
    fn json_is_a_plain_array() {
        let data: Dataset = serde_json::from_str(
            r#"[{ "input": [0.0, 1.0], "target": [1.0] }, { "input": [1.0, 1.0], "target": [0.0] }]"#,
        )
        .unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.examples()[1].input, vec![1.0, 1.0]);
        assert_eq!(serde_json::to_string(&Dataset::default()).unwrap(), "[]");
    }

    #[test]
    fn load_json_reports_missing_files() {
        let err = Dataset::load_json("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, crate::error::NnError::Io(_)));
    }
}
