//! Builder for job configurations.

use std::path::Path;

use super::configuration::JobConfiguration;
use super::error::JobError;
use super::outputs::{
    resolve_format_class, Direction, NamedOutput, INPUT_FORMAT_CLASS_KEY, LAZY_OUTPUT_FORMAT_CLASS,
    LAZY_OUTPUT_FORMAT_KEY, OUTPUT_FORMAT_CLASS_KEY,
};
use crate::convert::{ConverterRegistry, WireType};
use crate::logging::{info, warn};
use crate::slice::SecondarySort;
use crate::task::ProcessorTypes;

pub const JOB_NAME_KEY: &str = "mapreduce.job.name";
pub const MAP_CLASS_KEY: &str = "mapreduce.job.map.class";
pub const COMBINE_CLASS_KEY: &str = "mapreduce.job.combine.class";
pub const REDUCE_CLASS_KEY: &str = "mapreduce.job.reduce.class";
pub const NUM_REDUCES_KEY: &str = "mapreduce.job.reduces";
pub const MAP_OUTPUT_KEY_CLASS_KEY: &str = "mapreduce.map.output.key.class";
pub const MAP_OUTPUT_VALUE_CLASS_KEY: &str = "mapreduce.map.output.value.class";
pub const OUTPUT_KEY_CLASS_KEY: &str = "mapreduce.job.output.key.class";
pub const OUTPUT_VALUE_CLASS_KEY: &str = "mapreduce.job.output.value.class";
pub const INPUT_DIR_KEY: &str = "mapreduce.input.fileinputformat.inputdir";
pub const OUTPUT_DIR_KEY: &str = "mapreduce.output.fileoutputformat.outputdir";
pub const CACHE_FILES_KEY: &str = "mapreduce.job.cache.files";
pub const FRAMEWORK_NAME_KEY: &str = "mapreduce.framework.name";
pub const JOB_TRACKER_KEY: &str = "mapred.job.tracker";

const GZIP_CODEC: &str = "org.apache.hadoop.io.compress.GzipCodec";

/// Printed whenever a job reads its input with `combined_text`.
pub const COMBINED_TEXT_WARNING: &str = "Warning! Using `format: :combined_text` will not work \
with remote input paths (e.g. S3) and Hadoop 1.x. \
Cf. https://issues.apache.org/jira/browse/MAPREDUCE-1806";

/// Which generation of property names the cluster understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    /// `mapreduce.*` properties.
    Mapreduce,
    /// Legacy `mapred.*` properties.
    Mapred,
}

/// Options for [`JobBuilder::named_output`]. Unset fields default to the
/// job's own output format and output key/value types.
#[derive(Debug, Clone, Default)]
pub struct NamedOutputOptions {
    pub format: Option<String>,
    /// Converter name of the key, e.g. `"text"`.
    pub output_key: Option<String>,
    /// Converter name of the value.
    pub output_value: Option<String>,
}

/// A finished job description.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDefinition {
    pub name: String,
    pub configuration: JobConfiguration,
    /// Warnings raised while building, in the order they occurred.
    pub warnings: Vec<String>,
}

/// Describes a job as framework configuration properties.
///
/// ```
/// use hadoop_kit::job::JobBuilder;
/// use hadoop_kit::task::ProcessorTypes;
/// use hadoop_kit::convert::ConverterKind;
///
/// let types = ProcessorTypes::new().output(ConverterKind::Text, ConverterKind::Long);
/// let job = JobBuilder::new("visits")
///     .input(["logs/2024-*"], Some("text"))?
///     .mapper("VisitMapper", &types)
///     .reducer("VisitReducer", &types)
///     .secondary_sort(0, -21)
///     .output("out/visits", None, false)?
///     .build()?;
/// assert_eq!(
///     job.configuration.get("mapreduce.partition.binarypartitioner.right.offset"),
///     Some("-21")
/// );
/// # Ok::<(), hadoop_kit::job::JobError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JobBuilder {
    name: String,
    conf: JobConfiguration,
    warnings: Vec<String>,
}

impl JobBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_configuration(name, JobConfiguration::new())
    }

    /// Start from an existing configuration, e.g. one loaded from the
    /// cluster's site files.
    pub fn with_configuration(name: impl Into<String>, mut conf: JobConfiguration) -> Self {
        let name = name.into();
        conf.set(JOB_NAME_KEY, &name);
        Self {
            name,
            conf,
            warnings: Vec::new(),
        }
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.conf.set(key, value);
        self
    }

    /// Use `class` as the mapper; its output types become the map output
    /// key and value classes.
    pub fn mapper(mut self, class: impl Into<String>, types: &ProcessorTypes) -> Self {
        self.conf.set(MAP_CLASS_KEY, class);
        self.conf.set(
            MAP_OUTPUT_KEY_CLASS_KEY,
            types.output_key().wire_type().class_name(),
        );
        self.conf.set(
            MAP_OUTPUT_VALUE_CLASS_KEY,
            types.output_value().wire_type().class_name(),
        );
        self
    }

    pub fn combiner(mut self, class: impl Into<String>) -> Self {
        self.conf.set(COMBINE_CLASS_KEY, class);
        self
    }

    /// Use `class` as the reducer; its output types become the job's output
    /// key and value classes.
    pub fn reducer(mut self, class: impl Into<String>, types: &ProcessorTypes) -> Self {
        self.conf.set(REDUCE_CLASS_KEY, class);
        self.conf
            .set(OUTPUT_KEY_CLASS_KEY, types.output_key().wire_type().class_name());
        self.conf.set(
            OUTPUT_VALUE_CLASS_KEY,
            types.output_value().wire_type().class_name(),
        );
        self
    }

    pub fn reduce_tasks(mut self, count: u32) -> Self {
        self.conf.set(NUM_REDUCES_KEY, count.to_string());
        self
    }

    /// Add input paths (globs allowed) and optionally set the input format.
    pub fn input<I, S>(mut self, paths: I, format: Option<&str>) -> Result<Self, JobError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for path in paths {
            self.conf.append(INPUT_DIR_KEY, path.as_ref());
        }
        if let Some(format) = format {
            if format == "combined_text" {
                warn!("{}", COMBINED_TEXT_WARNING);
                self.warnings.push(COMBINED_TEXT_WARNING.to_string());
            }
            let class = resolve_format_class(format, Direction::Input)?;
            self.conf.set(INPUT_FORMAT_CLASS_KEY, class);
        }
        Ok(self)
    }

    /// Set the output directory and optionally the output format.
    ///
    /// A lazy output only creates files once something is written to it,
    /// which keeps empty part files out of jobs that write exclusively to
    /// named outputs.
    pub fn output(
        mut self,
        dir: impl Into<String>,
        format: Option<&str>,
        lazy: bool,
    ) -> Result<Self, JobError> {
        self.conf.set(OUTPUT_DIR_KEY, dir);
        let class = resolve_format_class(format.unwrap_or("text"), Direction::Output)?;
        if lazy {
            self.conf.set(OUTPUT_FORMAT_CLASS_KEY, LAZY_OUTPUT_FORMAT_CLASS);
            self.conf.set(LAZY_OUTPUT_FORMAT_KEY, class);
        } else {
            self.conf.set(OUTPUT_FORMAT_CLASS_KEY, class);
        }
        Ok(self)
    }

    /// Partition and group on `key[start_index..=end_index]` while sorting
    /// on the whole key. Negative indexes count from the end of the key.
    pub fn secondary_sort(mut self, start_index: i64, end_index: i64) -> Self {
        SecondarySort::new(start_index, end_index).apply_to(&mut self.conf);
        self
    }

    /// Declare an extra output tasks can write to with
    /// [`Emitter::emit_named`](crate::task::Emitter::emit_named).
    ///
    /// The format and key/value types default to the job's, so
    /// [`JobBuilder::output`] and [`JobBuilder::reducer`] should come first.
    pub fn named_output(
        mut self,
        name: impl Into<String>,
        options: NamedOutputOptions,
    ) -> Result<Self, JobError> {
        let name = name.into();
        let format_class = match options.format.as_deref() {
            Some(format) => resolve_format_class(format, Direction::Output)?,
            None => self
                .job_output_format()
                .ok_or_else(|| JobError::MissingOutputFormat(name.clone()))?
                .to_string(),
        };
        let registry = ConverterRegistry::new();
        let key_class = match options.output_key.as_deref() {
            Some(kind) => registry.resolve(kind)?.wire_type().class_name(),
            None => self
                .conf
                .get(OUTPUT_KEY_CLASS_KEY)
                .map(str::to_string)
                .unwrap_or_else(|| WireType::LongWritable.class_name()),
        };
        let value_class = match options.output_value.as_deref() {
            Some(kind) => registry.resolve(kind)?.wire_type().class_name(),
            None => self
                .conf
                .get(OUTPUT_VALUE_CLASS_KEY)
                .map(str::to_string)
                .unwrap_or_else(|| WireType::Text.class_name()),
        };
        NamedOutput {
            name,
            format_class,
            key_class,
            value_class,
        }
        .write_to(&mut self.conf)?;
        Ok(self)
    }

    /// Ship `file` to every task, linked into its working directory as
    /// `symlink` (default: the file's base name).
    pub fn cache_file(mut self, file: &str, symlink: Option<&str>) -> Self {
        let link = match symlink {
            Some(link) => link.to_string(),
            None => Path::new(file)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.to_string()),
        };
        self.conf
            .append(CACHE_FILES_KEY, &format!("{}#{}", file, link));
        self
    }

    /// Gzip map output and job output in blocks. Does nothing in local mode.
    pub fn enable_compression(mut self) -> Self {
        if self.is_local_mode() {
            return self;
        }
        let keys: [&str; 5] = match self.framework() {
            Framework::Mapreduce => [
                "mapreduce.map.output.compress",
                "mapreduce.output.fileoutputformat.compress",
                "mapreduce.map.output.compress.codec",
                "mapreduce.output.fileoutputformat.compress.codec",
                "mapreduce.output.fileoutputformat.compress.type",
            ],
            Framework::Mapred => [
                "mapred.compress.map.output",
                "mapred.output.compress",
                "mapred.map.output.compression.codec",
                "mapred.output.compression.codec",
                "mapred.output.compression.type",
            ],
        };
        let [map_compress, output_compress, map_codec, output_codec, output_type] = keys;
        self.conf.set_bool(map_compress, true);
        self.conf.set_bool(output_compress, true);
        self.conf.set(map_codec, GZIP_CODEC);
        self.conf.set(output_codec, GZIP_CODEC);
        self.conf.set(output_type, "BLOCK");
        self
    }

    pub fn framework(&self) -> Framework {
        if self.conf.contains(FRAMEWORK_NAME_KEY) {
            Framework::Mapreduce
        } else {
            Framework::Mapred
        }
    }

    /// Whether the job runs in-process rather than on a cluster.
    pub fn is_local_mode(&self) -> bool {
        let property = match self.framework() {
            Framework::Mapreduce => FRAMEWORK_NAME_KEY,
            Framework::Mapred => JOB_TRACKER_KEY,
        };
        self.conf.get(property) == Some("local")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn configuration(&self) -> &JobConfiguration {
        &self.conf
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Finish the job. A job needs a mapper, at least one input path and
    /// an output directory.
    pub fn build(self) -> Result<JobDefinition, JobError> {
        for (key, what) in [
            (MAP_CLASS_KEY, "mapper"),
            (INPUT_DIR_KEY, "input"),
            (OUTPUT_DIR_KEY, "output"),
        ] {
            if !self.conf.contains(key) {
                return Err(JobError::Incomplete(what));
            }
        }
        info!(job = %self.name, properties = self.conf.len(), "job defined");
        Ok(JobDefinition {
            name: self.name,
            configuration: self.conf,
            warnings: self.warnings,
        })
    }

    /// The job's effective output format, looking through a lazy wrapper.
    fn job_output_format(&self) -> Option<&str> {
        match self.conf.get(OUTPUT_FORMAT_CLASS_KEY)? {
            class if class.ends_with("LazyOutputFormat") => self.conf.get(LAZY_OUTPUT_FORMAT_KEY),
            class => Some(class),
        }
    }
}
