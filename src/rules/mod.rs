mod file;
mod project;
mod violation;

pub use file::{
    check_banned_suffix, check_encoding, check_file_length, check_function_lengths, evaluate_file,
    SourceFile,
};
pub use project::{
    check_credential_pairing, check_ignore_file, check_layout, check_stray_temp_files,
    evaluate_project, ProjectChecks,
};
pub use violation::{Severity, Violation, ViolationKind};
