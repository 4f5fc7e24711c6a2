// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Error types for filter sizing and capacity enforcement.

use thiserror::Error;

/// Errors that can occur when sizing or inserting into a filter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The requested false positive rate is outside of `[0.0, 1.0]`.
    #[error("false positive rate {rate} is outside of the range [0.0, 1.0]")]
    InvalidRate {
        /// The rejected rate.
        rate: f64,
    },

    /// The filter has reached its insert capacity. Further inserts would
    /// push the false positive rate past what the filter was sized for.
    #[error("filter capacity of {capacity} inserts reached")]
    CapacityExceeded {
        /// The filter's configured capacity.
        capacity: usize,
    },
}
