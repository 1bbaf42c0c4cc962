/// Separator between prefix letters, keywords, and suffix: "alpha-foo-bar"
pub(crate) const SEPARATOR: &str = "-";

/// Delimiter for the `--inputs` keyword list
pub(crate) const KEYWORD_DELIMITER: char = ',';

/// State file name, relative to the home directory
pub(crate) const STATE_FILE_NAME: &str = ".gran_state";

/// Environment variable overriding the state file location
pub(crate) const STATE_FILE_ENV: &str = "GRAN_STATE_FILE";

pub(crate) const EXIT_FAILURE: u8 = 1;

/// Target path already existed; nothing was created or recorded
pub(crate) const EXIT_ALREADY_EXISTS: u8 = 3;
