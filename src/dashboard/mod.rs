//! Dashboard-level concerns: naming resolution and page assembly.

pub mod assembler;
pub mod naming;

pub use assembler::DashboardAssembler;
pub use naming::NamingStrategy;
