// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Errors reported by the opt-in checked quaternion operations.

use super::Quaternion;
use thiserror::Error;

/// Reasons a checked operation refused to produce a value.
///
/// The unchecked operations never return these; they let NaN and infinity
/// propagate instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// The rotation axis has zero or non-finite length, so it has no direction.
    #[error("rotation axis has no direction (length {length})")]
    DegenerateAxis {
        /// The length of the rejected axis.
        length: f32,
    },
    /// The quaternion has zero magnitude and therefore no inverse.
    #[error("quaternion {0} has zero magnitude and cannot be inverted")]
    ZeroMagnitude(Quaternion),
    /// An operation produced NaN or infinite components.
    #[error("{operation} produced a non-finite quaternion: {value}")]
    NonFinite {
        /// The name of the operation that produced the value.
        operation: &'static str,
        /// The offending result.
        value: Quaternion,
    },
}
