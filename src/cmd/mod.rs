/// Merge command.
pub mod merge;
/// Container dump command.
pub mod show;
/// Subset query command.
pub mod subset;
/// Shared command helpers.
pub mod util;
