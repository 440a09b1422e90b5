mod completion_value_policy;

pub use completion_value_policy::CompletionValuePolicy;
