//! Input/output formats and named outputs as job properties.

use super::configuration::JobConfiguration;
use super::error::JobError;

pub const INPUT_FORMAT_CLASS_KEY: &str = "mapreduce.job.inputformat.class";
pub const OUTPUT_FORMAT_CLASS_KEY: &str = "mapreduce.job.outputformat.class";
pub const LAZY_OUTPUT_FORMAT_KEY: &str = "mapreduce.output.lazyoutputformat.outputformat";
pub const LAZY_OUTPUT_FORMAT_CLASS: &str =
    "org.apache.hadoop.mapreduce.lib.output.LazyOutputFormat";
pub const MULTIPLE_OUTPUTS_KEY: &str = "mapreduce.multipleoutputs";

const MULTIPLE_OUTPUTS_PREFIX: &str = "mapreduce.multipleoutputs.namedOutput.";

/// Formats shipped in the job jar rather than by the framework.
const BUNDLED_FORMATS: &[&str] = &["CombinedTextInputFormat"];
const BUNDLED_PACKAGE: &str = "hadoop_kit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

impl Direction {
    fn name(self) -> &'static str {
        match self {
            Direction::Input => "input",
            Direction::Output => "output",
        }
    }
}

/// Resolve a format given as a symbolic name or a class name.
///
/// Names containing a `.` are taken as class names. Symbolic names are
/// camel cased and suffixed with the direction, so `sequence_file` as an
/// output format becomes
/// `org.apache.hadoop.mapreduce.lib.output.SequenceFileOutputFormat`.
pub fn resolve_format_class(name: &str, direction: Direction) -> Result<String, JobError> {
    if name.contains('.') {
        return Ok(name.to_string());
    }
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(JobError::InvalidFormat {
            direction: direction.name(),
            name: name.to_string(),
        });
    }
    let class = format!("{}{}Format", camel_case(name), camel_case(direction.name()));
    if BUNDLED_FORMATS.contains(&class.as_str()) {
        Ok(format!("{}.{}", BUNDLED_PACKAGE, class))
    } else {
        Ok(format!(
            "org.apache.hadoop.mapreduce.lib.{}.{}",
            direction.name(),
            class
        ))
    }
}

fn camel_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// An extra output a task can write to besides its main output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedOutput {
    pub name: String,
    pub format_class: String,
    pub key_class: String,
    pub value_class: String,
}

impl NamedOutput {
    fn property(name: &str, field: &str) -> String {
        format!("{}{}.{}", MULTIPLE_OUTPUTS_PREFIX, name, field)
    }

    /// Names of the outputs declared in `conf`, in declaration order.
    pub fn names(conf: &JobConfiguration) -> Vec<&str> {
        conf.get(MULTIPLE_OUTPUTS_KEY)
            .map(|v| v.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn from_configuration(conf: &JobConfiguration, name: &str) -> Option<Self> {
        if !Self::names(conf).contains(&name) {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            format_class: conf.get(&Self::property(name, "format"))?.to_string(),
            key_class: conf.get(&Self::property(name, "key"))?.to_string(),
            value_class: conf.get(&Self::property(name, "value"))?.to_string(),
        })
    }

    /// Declare this output in `conf`.
    ///
    /// Output names are restricted to ASCII letters and digits, since they
    /// become part of file names.
    pub fn write_to(&self, conf: &mut JobConfiguration) -> Result<(), JobError> {
        if self.name.is_empty() || !self.name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(JobError::InvalidOutputName(self.name.clone()));
        }
        if Self::names(conf).contains(&self.name.as_str()) {
            return Err(JobError::DuplicateNamedOutput(self.name.clone()));
        }
        let names = match conf.get(MULTIPLE_OUTPUTS_KEY) {
            Some(existing) => format!("{} {}", existing, self.name),
            None => format!(" {}", self.name),
        };
        conf.set(MULTIPLE_OUTPUTS_KEY, names);
        conf.set(Self::property(&self.name, "format"), &self.format_class);
        conf.set(Self::property(&self.name, "key"), &self.key_class);
        conf.set(Self::property(&self.name, "value"), &self.value_class);
        Ok(())
    }
}
