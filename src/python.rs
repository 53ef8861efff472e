use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::MinerConfig;
use crate::error::MiningError;
use crate::fp::streaming::{
    build_pass, count_pass, finalize_building, finalize_counts, mine_patterns,
};
use crate::fp::{group_by_size, mine, FrequentPattern, ItemSupportList, StreamingState};

impl From<MiningError> for PyErr {
    fn from(err: MiningError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// One list of `(items, support)` per item set size.
type PyLevels = Vec<Vec<(Vec<String>, f64)>>;

fn to_transactions(
    transactions: Vec<Vec<String>>,
    weights: Option<Vec<f64>>,
) -> PyResult<Vec<ItemSupportList>> {
    if let Some(weights) = &weights {
        if weights.len() != transactions.len() {
            return Err(PyValueError::new_err(format!(
                "got {} weights for {} transactions",
                weights.len(),
                transactions.len()
            )));
        }
    }

    Ok(transactions
        .into_iter()
        .enumerate()
        .map(|(i, items)| {
            let weight = weights.as_ref().map_or(1.0, |weights| weights[i]);
            ItemSupportList::transaction("", items, weight)
        })
        .collect())
}

fn to_levels(patterns: &[FrequentPattern]) -> PyLevels {
    group_by_size(patterns)
        .into_iter()
        .map(|level| {
            level
                .patterns
                .into_iter()
                .map(|pattern| (pattern.items, pattern.support))
                .collect()
        })
        .collect()
}

#[pyfunction]
#[pyo3(name = "fp_growth", signature = (transactions, min_support, weights = None))]
fn fp_growth_py(
    py: Python<'_>,
    transactions: Vec<Vec<String>>,
    min_support: i64,
    weights: Option<Vec<f64>>,
) -> PyResult<PyLevels> {
    let transactions = to_transactions(transactions, weights)?;
    let patterns = py.allow_threads(|| mine(&transactions, min_support))?;
    Ok(to_levels(&patterns))
}

/// Two-pass miner: count every batch, finalize, then build from the same batches.
#[pyclass(name = "StreamingMiner")]
struct PyStreamingMiner {
    state: StreamingState,
}

#[pymethods]
impl PyStreamingMiner {
    #[new]
    fn new() -> Self {
        Self {
            state: StreamingState::new(),
        }
    }

    #[pyo3(signature = (transactions, weights = None))]
    fn count_pass(
        &mut self,
        transactions: Vec<Vec<String>>,
        weights: Option<Vec<f64>>,
    ) -> PyResult<()> {
        let transactions = to_transactions(transactions, weights)?;
        count_pass(&mut self.state, &transactions)?;
        Ok(())
    }

    fn finalize_counts(&mut self, min_support: i64) -> PyResult<()> {
        finalize_counts(&mut self.state, MinerConfig::new(min_support))?;
        Ok(())
    }

    #[pyo3(signature = (transactions, weights = None))]
    fn build_pass(
        &mut self,
        transactions: Vec<Vec<String>>,
        weights: Option<Vec<f64>>,
    ) -> PyResult<()> {
        let transactions = to_transactions(transactions, weights)?;
        build_pass(&mut self.state, &transactions)?;
        Ok(())
    }

    fn finalize_building(&mut self) -> PyResult<()> {
        finalize_building(&mut self.state)?;
        Ok(())
    }

    fn mine_patterns(&self) -> PyResult<PyLevels> {
        let patterns = mine_patterns(&self.state)?;
        Ok(to_levels(&patterns))
    }
}

#[pymodule]
fn itemset_miner(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fp_growth_py, m)?)?;
    m.add_class::<PyStreamingMiner>()?;
    Ok(())
}
