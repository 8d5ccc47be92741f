use rustc_hash::FxHashMap;

pub type ProcessId = u64;
pub type Ticks = u64;

/// Editable timing field of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessField {
    ArrivalTime,
    BurstTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
}

impl ProcessSpec {
    pub fn name(&self) -> String {
        format!("P{}", self.id)
    }
}

/// Input set for the simulator: an id-keyed process collection that
/// iterates in insertion order.
///
/// Mutation is only meaningful while no playback is running; gating writes
/// on the controller's phase is the caller's responsibility, as is keeping
/// the table non-empty when removal would drain it.
#[derive(Debug)]
pub struct ProcessTable {
    specs: FxHashMap<ProcessId, ProcessSpec>,
    order: Vec<ProcessId>,
    // Increment upon process creation; never reused, even across removals
    next_id: ProcessId,
}

impl Default for ProcessTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTable {
    pub fn new() -> Self {
        Self {
            specs: FxHashMap::default(),
            order: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a fresh process with default timings and return its id.
    pub fn add(&mut self) -> ProcessId {
        let id = self.next_id;
        self.next_id += 1;

        self.specs.insert(
            id,
            ProcessSpec {
                id,
                arrival_time: 0,
                burst_time: 1,
            },
        );
        self.order.push(id);

        id
    }

    /// Remove a process, reporting whether it existed.
    pub fn remove(&mut self, id: ProcessId) -> bool {
        if self.specs.remove(&id).is_none() {
            return false;
        }
        self.order.retain(|&p| p != id);
        true
    }

    /// Set one timing field, clamping out-of-range input: arrival time
    /// floors at 0, burst time at 1. Unknown ids are ignored.
    pub fn update(&mut self, id: ProcessId, field: ProcessField, value: i64) -> bool {
        let spec = match self.specs.get_mut(&id) {
            Some(spec) => spec,
            None => return false,
        };

        match field {
            ProcessField::ArrivalTime => spec.arrival_time = value.max(0) as Ticks,
            ProcessField::BurstTime => spec.burst_time = value.max(1) as Ticks,
        }
        true
    }

    pub fn get(&self, id: ProcessId) -> Option<&ProcessSpec> {
        self.specs.get(&id)
    }

    /// Processes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ProcessSpec> {
        self.order.iter().map(|id| &self.specs[id])
    }

    /// Insertion-ordered snapshot, as planner input.
    pub fn snapshot(&self) -> Vec<ProcessSpec> {
        self.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let mut table = ProcessTable::new();
        let a = table.add();
        let b = table.add();
        assert_eq!((a, b), (1, 2));

        assert!(table.remove(b));
        let c = table.add();
        assert_eq!(c, 3);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn add_uses_default_timings() {
        let mut table = ProcessTable::new();
        let id = table.add();
        let spec = table.get(id).unwrap();
        assert_eq!(spec.arrival_time, 0);
        assert_eq!(spec.burst_time, 1);
        assert_eq!(spec.name(), "P1");
    }

    #[test]
    fn update_clamps_out_of_range_input() {
        let mut table = ProcessTable::new();
        let id = table.add();

        assert!(table.update(id, ProcessField::ArrivalTime, -5));
        assert_eq!(table.get(id).unwrap().arrival_time, 0);

        assert!(table.update(id, ProcessField::BurstTime, -3));
        assert_eq!(table.get(id).unwrap().burst_time, 1);

        assert!(table.update(id, ProcessField::BurstTime, 0));
        assert_eq!(table.get(id).unwrap().burst_time, 1);

        assert!(table.update(id, ProcessField::ArrivalTime, 7));
        assert_eq!(table.get(id).unwrap().arrival_time, 7);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let mut table = ProcessTable::new();
        assert!(!table.remove(42));
        assert!(!table.update(42, ProcessField::BurstTime, 3));
    }

    #[test]
    fn iteration_follows_insertion_order_across_removals() {
        let mut table = ProcessTable::new();
        let a = table.add();
        let b = table.add();
        let c = table.add();
        table.remove(b);
        let d = table.add();

        let order: Vec<ProcessId> = table.iter().map(|spec| spec.id).collect();
        assert_eq!(order, vec![a, c, d]);
    }
}
