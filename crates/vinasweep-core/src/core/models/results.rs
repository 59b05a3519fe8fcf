use serde::Serialize;
use std::collections::BTreeMap;

/// Binding-mode energies of one job, in the order the engine reported them.
pub type EnergySeries = Vec<f64>;

/// A single binding mode that passed the energy threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedResult {
    #[serde(rename = "File")]
    pub job_name: String,
    #[serde(rename = "Index")]
    pub mode_index: usize,
    #[serde(rename = "Energy")]
    pub energy: f64,
}

/// Keeps every mode with `energy < threshold`, sorted by job name.
///
/// Job names compare lexicographically, so `"10"` sorts before `"2"`. The sort is
/// stable and modes of the same job keep their reported order.
pub fn aggregate(energies: &BTreeMap<String, EnergySeries>, threshold: f64) -> Vec<AggregatedResult> {
    let mut results: Vec<AggregatedResult> = energies
        .iter()
        .flat_map(|(job_name, series)| {
            series
                .iter()
                .enumerate()
                .filter(|(_, energy)| **energy < threshold)
                .map(|(mode_index, &energy)| AggregatedResult {
                    job_name: job_name.clone(),
                    mode_index,
                    energy,
                })
        })
        .collect();
    results.sort_by(|a, b| a.job_name.cmp(&b.job_name));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(job: &str, mode: usize, energy: f64) -> AggregatedResult {
        AggregatedResult {
            job_name: job.to_string(),
            mode_index: mode,
            energy,
        }
    }

    #[test]
    fn keeps_modes_strictly_below_threshold_sorted_by_job() {
        let mut energies = BTreeMap::new();
        energies.insert("b".to_string(), vec![-200.0]);
        energies.insert("a".to_string(), vec![-150.0, -50.0]);

        let results = aggregate(&energies, -100.0);
        assert_eq!(results, vec![result("a", 0, -150.0), result("b", 0, -200.0)]);
    }

    #[test]
    fn energy_equal_to_threshold_is_excluded() {
        let mut energies = BTreeMap::new();
        energies.insert("0".to_string(), vec![-7.0, -7.5]);
        assert_eq!(aggregate(&energies, -7.0), vec![result("0", 1, -7.5)]);
    }

    #[test]
    fn modes_of_one_job_keep_reported_order() {
        let mut energies = BTreeMap::new();
        energies.insert("3".to_string(), vec![-9.1, -8.0, -9.5, -1.0]);
        let results = aggregate(&energies, -5.0);
        let modes: Vec<_> = results.iter().map(|r| r.mode_index).collect();
        assert_eq!(modes, vec![0, 1, 2]);
    }

    #[test]
    fn job_names_sort_lexicographically() {
        let mut energies = BTreeMap::new();
        for name in ["2", "10", "1"] {
            energies.insert(name.to_string(), vec![-10.0]);
        }
        let names: Vec<_> = aggregate(&energies, 0.0)
            .into_iter()
            .map(|r| r.job_name)
            .collect();
        assert_eq!(names, vec!["1", "10", "2"]);
    }

    #[test]
    fn empty_input_yields_empty_report() {
        assert!(aggregate(&BTreeMap::new(), 0.0).is_empty());
    }
}
