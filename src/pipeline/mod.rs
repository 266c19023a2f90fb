pub mod stage1_load;
pub mod stage2_targets;
pub mod stage3_report;
