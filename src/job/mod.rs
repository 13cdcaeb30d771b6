//! Job definition: the properties handed to the framework at submission.
//!
//! The framework's job object is modelled as a [`JobConfiguration`]
//! property map. [`JobBuilder`] writes the standard properties for mappers,
//! reducers, inputs and outputs, plus the extended operations this crate
//! adds on top: secondary sort, named outputs, cache files and compression.

mod builder;
mod configuration;
mod error;
mod outputs;

pub use builder::{
    Framework, JobBuilder, JobDefinition, NamedOutputOptions, CACHE_FILES_KEY, COMBINED_TEXT_WARNING,
    COMBINE_CLASS_KEY, FRAMEWORK_NAME_KEY, INPUT_DIR_KEY, JOB_NAME_KEY, JOB_TRACKER_KEY,
    MAP_CLASS_KEY, MAP_OUTPUT_KEY_CLASS_KEY, MAP_OUTPUT_VALUE_CLASS_KEY, NUM_REDUCES_KEY,
    OUTPUT_DIR_KEY, OUTPUT_KEY_CLASS_KEY, OUTPUT_VALUE_CLASS_KEY, REDUCE_CLASS_KEY,
};
pub use configuration::JobConfiguration;
pub use error::JobError;
pub use outputs::{
    resolve_format_class, Direction, NamedOutput, INPUT_FORMAT_CLASS_KEY, LAZY_OUTPUT_FORMAT_CLASS,
    LAZY_OUTPUT_FORMAT_KEY, MULTIPLE_OUTPUTS_KEY, OUTPUT_FORMAT_CLASS_KEY,
};
