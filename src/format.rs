//! Flat `key=value;` instance format.
//!
//! ```text
//! wr=14;
//! num_providers=3;
//! cost_worker=[5 5 5];
//! available_workers=[10 20 40];
//! cost_contract=[100 100 100];
//! country=[1 2 3];
//! cost_1=10;
//! cost_2=20;
//! cost_3=30;
//! ```
//!
//! One statement per line, keys in any order, blank lines ignored. Arrays
//! hold one value per provider, in provider order.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::FormatError;
use crate::model::{Instance, TaxBrackets};

const KEYS: [&str; 9] = [
    "wr",
    "num_providers",
    "cost_worker",
    "available_workers",
    "cost_contract",
    "country",
    "cost_1",
    "cost_2",
    "cost_3",
];

#[derive(Default)]
struct Fields {
    required: Option<u32>,
    providers: Option<usize>,
    worker_rate: Option<Vec<f64>>,
    capacity: Option<Vec<u32>>,
    contract_cost: Option<Vec<f64>>,
    region: Option<Vec<u32>>,
    rate1: Option<f64>,
    rate2: Option<f64>,
    rate3: Option<f64>,
}

/// Parses an instance from text.
///
/// # Examples
///
/// ```
/// use u_workforce::format::parse_instance;
///
/// let text = "wr=14;\nnum_providers=2;\ncost_worker=[5 6];\navailable_workers=[10 20];\n\
///             cost_contract=[100 200];\ncountry=[1 2];\ncost_1=10;\ncost_2=20;\ncost_3=30;\n";
/// let instance = parse_instance(text).unwrap();
/// assert_eq!(instance.required_workforce(), 14);
/// assert_eq!(instance.providers()[1].capacity(), 20);
/// ```
pub fn parse_instance(text: &str) -> Result<Instance, FormatError> {
    let mut fields = Fields::default();
    let mut seen = [false; KEYS.len()];

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let statement = trimmed.strip_suffix(';').unwrap_or(trimmed);
        let Some((key, value)) = statement.split_once('=') else {
            return Err(FormatError::MalformedLine {
                line,
                content: trimmed.to_string(),
            });
        };
        let key = key.trim();
        let value = value.trim();

        let Some(slot) = KEYS.iter().position(|k| *k == key) else {
            return Err(FormatError::UnknownKey {
                line,
                key: key.to_string(),
            });
        };
        if std::mem::replace(&mut seen[slot], true) {
            return Err(FormatError::DuplicateKey {
                line,
                key: key.to_string(),
            });
        }

        match key {
            "wr" => fields.required = Some(scalar(line, key, value)?),
            "num_providers" => fields.providers = Some(scalar(line, key, value)?),
            "cost_worker" => fields.worker_rate = Some(array(line, key, value)?),
            "available_workers" => fields.capacity = Some(array(line, key, value)?),
            "cost_contract" => fields.contract_cost = Some(array(line, key, value)?),
            "country" => fields.region = Some(array(line, key, value)?),
            "cost_1" => fields.rate1 = Some(scalar(line, key, value)?),
            "cost_2" => fields.rate2 = Some(scalar(line, key, value)?),
            _ => fields.rate3 = Some(scalar(line, key, value)?),
        }
    }

    fields.into_instance()
}

/// Reads and parses an instance file.
pub fn read_instance(path: impl AsRef<Path>) -> Result<Instance, FormatError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| FormatError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_instance(&text)
}

/// Renders an instance in the text format.
pub fn write_instance(instance: &Instance) -> String {
    let providers = instance.providers();
    let (r1, r2, r3) = instance.tax().rates();
    let list = |values: Vec<String>| format!("[{}]", values.join(" "));

    let lines = [
        format!("wr={};", instance.required_workforce()),
        format!("num_providers={};", providers.len()),
        format!(
            "cost_worker={};",
            list(providers.iter().map(|p| p.worker_rate().to_string()).collect())
        ),
        format!(
            "available_workers={};",
            list(providers.iter().map(|p| p.capacity().to_string()).collect())
        ),
        format!(
            "cost_contract={};",
            list(providers.iter().map(|p| p.contract_cost().to_string()).collect())
        ),
        format!(
            "country={};",
            list(providers.iter().map(|p| p.region().0.to_string()).collect())
        ),
        format!("cost_1={r1};"),
        format!("cost_2={r2};"),
        format!("cost_3={r3};"),
    ];

    let mut out = String::new();
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Writes an instance file.
pub fn write_instance_file(path: impl AsRef<Path>, instance: &Instance) -> Result<(), FormatError> {
    let path = path.as_ref();
    fs::write(path, write_instance(instance)).map_err(|source| FormatError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn scalar<T: FromStr>(line: usize, key: &str, value: &str) -> Result<T, FormatError> {
    value.parse().map_err(|_| FormatError::InvalidValue {
        line,
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn array<T: FromStr>(line: usize, key: &str, value: &str) -> Result<Vec<T>, FormatError> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .ok_or_else(|| FormatError::InvalidValue {
            line,
            key: key.to_string(),
            value: value.to_string(),
        })?;
    inner
        .split_whitespace()
        .map(|token| scalar(line, key, token))
        .collect()
}

impl Fields {
    fn into_instance(self) -> Result<Instance, FormatError> {
        let required = self.required.ok_or(FormatError::MissingKey("wr"))?;
        let n = self.providers.ok_or(FormatError::MissingKey("num_providers"))?;
        let worker_rate = checked_len("cost_worker", self.worker_rate, n)?;
        let capacity = checked_len("available_workers", self.capacity, n)?;
        let contract_cost = checked_len("cost_contract", self.contract_cost, n)?;
        let region = checked_len("country", self.region, n)?;
        let tax = TaxBrackets::new(
            self.rate1.ok_or(FormatError::MissingKey("cost_1"))?,
            self.rate2.ok_or(FormatError::MissingKey("cost_2"))?,
            self.rate3.ok_or(FormatError::MissingKey("cost_3"))?,
        )?;

        let mut builder = Instance::builder(required, tax);
        for i in 0..n {
            builder = builder.provider(contract_cost[i], worker_rate[i], capacity[i], region[i]);
        }
        Ok(builder.build()?)
    }
}

fn checked_len<T>(key: &'static str, values: Option<Vec<T>>, expected: usize) -> Result<Vec<T>, FormatError> {
    let values = values.ok_or(FormatError::MissingKey(key))?;
    if values.len() != expected {
        return Err(FormatError::LengthMismatch {
            key,
            expected,
            found: values.len(),
        });
    }
    Ok(values)
}
