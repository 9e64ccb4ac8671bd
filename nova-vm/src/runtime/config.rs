/// What the machine does when an operand fails to resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OperandPolicy {
    /// Abandon the instruction and keep running.
    #[default]
    Lenient,
    /// Treat the failure as a fault and halt.
    Strict,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineConfig {
    pub operand_policy: OperandPolicy,
    /// Maximum stack depth; `None` lets the stack grow freely.
    pub stack_limit: Option<usize>,
    /// Stop after this many executed instructions.
    pub cycle_limit: Option<u64>,
}

impl MachineConfig {
    pub fn with_operand_policy(mut self, policy: OperandPolicy) -> Self {
        self.operand_policy = policy;
        self
    }

    pub fn with_stack_limit(mut self, limit: usize) -> Self {
        self.stack_limit = Some(limit);
        self
    }

    pub fn with_cycle_limit(mut self, limit: u64) -> Self {
        self.cycle_limit = Some(limit);
        self
    }
}
