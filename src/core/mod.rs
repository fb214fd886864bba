pub mod assembler;
pub mod carryforward;
pub mod insights;
pub mod selector;
