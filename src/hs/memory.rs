//! Harmony memory: the fitness-sorted population.

/// A harmony together with its fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonyRecord<S> {
    /// The candidate solution.
    pub harmony: S,
    /// Fitness of `harmony`. Lower is better.
    pub fitness: f64,
}

impl<S> HarmonyRecord<S> {
    /// Pairs a harmony with its fitness.
    pub fn new(harmony: S, fitness: f64) -> Self {
        Self { harmony, fitness }
    }
}

/// Fixed-size population of harmonies, kept sorted ascending by fitness.
///
/// The first record is the best, the last is the worst and therefore the
/// only replacement candidate. The size never changes after construction.
///
/// Ordering uses [`f64::total_cmp`], so a `NaN` fitness sorts after every
/// finite value and `+inf`.
#[derive(Debug, Clone)]
pub struct HarmonyMemory<S> {
    records: Vec<HarmonyRecord<S>>,
}

impl<S> HarmonyMemory<S> {
    /// Builds a memory from unsorted records.
    pub fn from_records(mut records: Vec<HarmonyRecord<S>>) -> Self {
        records.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the memory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The best (lowest fitness) record.
    pub fn best(&self) -> Option<&HarmonyRecord<S>> {
        self.records.first()
    }

    /// The worst (highest fitness) record.
    pub fn worst(&self) -> Option<&HarmonyRecord<S>> {
        self.records.last()
    }

    /// Record at `index` in fitness order.
    pub fn get(&self, index: usize) -> Option<&HarmonyRecord<S>> {
        self.records.get(index)
    }

    /// All records, best first.
    pub fn records(&self) -> &[HarmonyRecord<S>] {
        &self.records
    }

    /// Iterates over the records, best first.
    pub fn iter(&self) -> std::slice::Iter<'_, HarmonyRecord<S>> {
        self.records.iter()
    }

    /// Consumes the memory, returning the records best first.
    pub fn into_records(self) -> Vec<HarmonyRecord<S>> {
        self.records
    }

    /// Replaces the worst record with `candidate` if the candidate is
    /// strictly better, keeping the memory sorted.
    ///
    /// The candidate is inserted after any records of equal fitness, so
    /// older records win ties. Returns whether the memory changed.
    ///
    /// # Complexity
    /// O(log n) search plus O(n) shift.
    pub fn try_replace_worst(&mut self, candidate: HarmonyRecord<S>) -> bool {
        let improves = match self.records.last() {
            Some(worst) => candidate.fitness < worst.fitness,
            None => false,
        };
        if !improves {
            return false;
        }

        self.records.pop();
        let pos = self
            .records
            .partition_point(|r| r.fitness.total_cmp(&candidate.fitness).is_le());
        self.records.insert(pos, candidate);
        true
    }
}

impl<'a, S> IntoIterator for &'a HarmonyMemory<S> {
    type Item = &'a HarmonyRecord<S>;
    type IntoIter = std::slice::Iter<'a, HarmonyRecord<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn memory_of(fitnesses: &[f64]) -> HarmonyMemory<usize> {
        HarmonyMemory::from_records(
            fitnesses
                .iter()
                .enumerate()
                .map(|(i, &f)| HarmonyRecord::new(i, f))
                .collect(),
        )
    }

    fn is_sorted(memory: &HarmonyMemory<usize>) -> bool {
        memory
            .records()
            .windows(2)
            .all(|w| w[0].fitness <= w[1].fitness)
    }

    #[test]
    fn test_from_records_sorts() {
        let memory = memory_of(&[5.0, 1.0, 3.0, f64::INFINITY, 2.0]);
        assert!(is_sorted(&memory));
        assert_eq!(memory.best().map(|r| r.harmony), Some(1));
        assert_eq!(memory.worst().map(|r| r.fitness), Some(f64::INFINITY));
    }

    #[test]
    fn test_replace_worst_accepts_strictly_better() {
        let mut memory = memory_of(&[1.0, 2.0, 3.0]);
        assert!(memory.try_replace_worst(HarmonyRecord::new(99, 1.5)));
        let fitnesses: Vec<f64> = memory.iter().map(|r| r.fitness).collect();
        assert_eq!(fitnesses, vec![1.0, 1.5, 2.0]);
        assert_eq!(memory.len(), 3);
    }

    #[test]
    fn test_replace_worst_rejects_equal() {
        let mut memory = memory_of(&[1.0, 2.0, 3.0]);
        assert!(!memory.try_replace_worst(HarmonyRecord::new(99, 3.0)));
        assert!(memory.iter().all(|r| r.harmony != 99));
    }

    #[test]
    fn test_replace_worst_new_best() {
        let mut memory = memory_of(&[1.0, 2.0, 3.0]);
        assert!(memory.try_replace_worst(HarmonyRecord::new(99, 0.0)));
        assert_eq!(memory.best().map(|r| r.harmony), Some(99));
    }

    #[test]
    fn test_ties_keep_older_record_first() {
        let mut memory = memory_of(&[1.0, 2.0, 3.0]);
        assert!(memory.try_replace_worst(HarmonyRecord::new(99, 1.0)));
        assert_eq!(memory.get(0).map(|r| r.harmony), Some(0));
        assert_eq!(memory.get(1).map(|r| r.harmony), Some(99));
    }

    #[test]
    fn test_single_record_memory() {
        let mut memory = memory_of(&[4.0]);
        assert!(memory.try_replace_worst(HarmonyRecord::new(7, 2.0)));
        assert_eq!(memory.len(), 1);
        assert_eq!(memory.best().map(|r| r.harmony), Some(7));
    }

    #[test]
    fn test_empty_memory_never_accepts() {
        let mut memory: HarmonyMemory<usize> = HarmonyMemory::from_records(Vec::new());
        assert!(!memory.try_replace_worst(HarmonyRecord::new(0, 0.0)));
        assert!(memory.is_empty());
        assert!(memory.best().is_none());
    }

    #[test]
    fn test_nan_candidate_rejected() {
        let mut memory = memory_of(&[1.0, 2.0]);
        assert!(!memory.try_replace_worst(HarmonyRecord::new(9, f64::NAN)));
    }

    proptest! {
        #[test]
        fn prop_size_and_order_invariant(
            initial in prop::collection::vec(0.0f64..100.0, 1..20),
            candidates in prop::collection::vec(0.0f64..100.0, 0..200),
        ) {
            let mut memory = memory_of(&initial);
            let size = memory.len();
            let mut best = memory.best().map(|r| r.fitness).unwrap_or(f64::INFINITY);

            for (i, f) in candidates.into_iter().enumerate() {
                let worst = memory.worst().map(|r| r.fitness).unwrap_or(f64::INFINITY);
                let changed = memory.try_replace_worst(HarmonyRecord::new(1000 + i, f));
                prop_assert_eq!(changed, f < worst);
                prop_assert_eq!(memory.len(), size);
                prop_assert!(is_sorted(&memory));

                let new_best = memory.best().map(|r| r.fitness).unwrap_or(f64::INFINITY);
                prop_assert!(new_best <= best);
                best = new_best;
            }
        }
    }
}
