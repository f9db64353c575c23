//! Error types.
//!
//! - [`InstanceError`]: invalid instance inputs, raised by
//!   [`InstanceBuilder::build`](crate::model::InstanceBuilder::build).
//! - [`FormatError`]: problems reading or parsing the text format.
//! - [`SolveError`]: failures surfaced by the construction and local search
//!   runners.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::ProviderId;

/// Errors raised while validating instance inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstanceError {
    /// Tax rates must be finite, non-negative and strictly ascending.
    #[error("tax rates must satisfy 0 <= rate1 < rate2 < rate3, got ({rate1}, {rate2}, {rate3})")]
    TaxRates {
        /// First bracket rate.
        rate1: f64,
        /// Second bracket rate.
        rate2: f64,
        /// Third bracket rate.
        rate3: f64,
    },
    /// A provider's contract cost is negative or not finite.
    #[error("provider {provider} has invalid contract cost {value}")]
    ContractCost {
        /// Offending provider.
        provider: ProviderId,
        /// Value supplied.
        value: f64,
    },
    /// A provider's per-worker rate is negative or not finite.
    #[error("provider {provider} has invalid worker rate {value}")]
    WorkerRate {
        /// Offending provider.
        provider: ProviderId,
        /// Value supplied.
        value: f64,
    },
    /// A provider offers no workers.
    #[error("provider {provider} has zero capacity")]
    ZeroCapacity {
        /// Offending provider.
        provider: ProviderId,
    },
    /// A provider's region is zero; regions are numbered from 1.
    #[error("provider {provider} has region 0, regions start at 1")]
    ZeroRegion {
        /// Offending provider.
        provider: ProviderId,
    },
    /// The generator configuration failed validation.
    #[error("invalid generator configuration: {0}")]
    Generator(String),
}

/// Errors raised while reading the `key=value;` instance format.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A non-empty line is not of the form `key=value;`.
    #[error("line {line}: expected `key=value;`, got {content:?}")]
    MalformedLine {
        /// One-based line number.
        line: usize,
        /// Trimmed line content.
        content: String,
    },
    /// The key is not part of the format.
    #[error("line {line}: unknown key `{key}`")]
    UnknownKey {
        /// One-based line number.
        line: usize,
        /// Key found.
        key: String,
    },
    /// The key was already defined on an earlier line.
    #[error("line {line}: duplicate key `{key}`")]
    DuplicateKey {
        /// One-based line number.
        line: usize,
        /// Key found.
        key: String,
    },
    /// A required key never appeared.
    #[error("missing key `{0}`")]
    MissingKey(&'static str),
    /// A scalar or array element could not be parsed.
    #[error("line {line}: invalid value {value:?} for `{key}`")]
    InvalidValue {
        /// One-based line number.
        line: usize,
        /// Key being parsed.
        key: String,
        /// Offending token.
        value: String,
    },
    /// An array does not have `num_providers` elements.
    #[error("`{key}` has {found} entries, expected {expected}")]
    LengthMismatch {
        /// Array key.
        key: &'static str,
        /// Declared provider count.
        expected: usize,
        /// Elements found.
        found: usize,
    },
    /// Reading the instance file failed.
    #[error("failed to read instance file {path}")]
    Read {
        /// Requested path.
        path: PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Writing the instance file failed.
    #[error("failed to write instance file {path}")]
    Write {
        /// Target path.
        path: PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The parsed values do not form a valid instance.
    #[error("invalid instance")]
    Instance(#[from] InstanceError),
}

/// Errors surfaced by the solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// Local search was requested before any construction produced a cost.
    #[error("no base solution: run construction before local search")]
    NoBaseSolution,
    /// The rollback chain was exhausted without any provider qualifying.
    #[error("no feasible provider left: hired {hired} of {required} required workers")]
    Infeasible {
        /// Workers committed when construction gave up.
        hired: u32,
        /// Required workforce.
        required: u32,
    },
    /// A configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
