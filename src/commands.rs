//! CLI command definitions
//!
//! Defines the clap subcommands for the bug lab, one per exercise.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// JSON round-trip using the wrong serializer entry points
    #[command(alias = "ser")]
    Serialization,

    /// Element-wise transform with an off-by-one loop bound
    #[command(alias = "xform")]
    Transform,

    /// Nested-field extraction that crashes on missing data
    #[command(alias = "email")]
    Extraction,

    /// Tax application lost to a shadowed helper parameter
    #[command(alias = "tax")]
    Taxation,

    /// Maximum-finding with a wrong accumulator seed
    #[command(alias = "max")]
    Reduction,

    /// Run every exercise demo in sequence
    All,
}
