//! pro2cmake Core Library
//!
//! Merge model for converting project-file variable assignments into
//! build-system variables, plus the line-continuation fixup applied to raw
//! project text.

pub mod config;
pub mod convert;
pub mod fixup;
pub mod normalize;
pub mod operation;
pub mod reconcile;
pub mod scope;

/// Re-exports of commonly used types
pub mod prelude {
    // Operations
    pub use crate::operation::{Operation, OperationKind, ParseOperationError};

    // Evaluation
    pub use crate::normalize::{ValueMap, identity};
    pub use crate::reconcile::{Reconciled, partition_removals};
    pub use crate::scope::{Scope, VariableState};

    // Conversion
    pub use crate::config::{Assignment, ConversionConfig};
    pub use crate::convert::{ConversionReport, VariableReport, convert};

    // Text
    pub use crate::fixup::fixup_line_continuation;
}
