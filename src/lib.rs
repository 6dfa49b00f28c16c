//! Diagnostic probe for AWS Bedrock inference profiles.
//!

pub use probe_core::*;

/// AWS SDK backed collaborators.
pub mod aws {
    pub use probe_aws::*;
}
