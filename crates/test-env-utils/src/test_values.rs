//! Fixed values for deterministic tests.

// Tokens
pub const TEST_FILE_TOKEN: &str = "FILE-TOKEN-0000-1111";
pub const TEST_DEPLOY_TOKEN: &str = "DEPLOY-TOKEN-9999-8888";

// Environment names
pub const TEST_ENV_STAGING: &str = "staging";
pub const TEST_ENV_CI: &str = "ci";

// Definition file contents
pub const DEFINITION_PARTIAL: &str = "APP_ENV=staging\n";
pub const DEFINITION_TOKEN_ONLY: &str = "API_TOKEN=XYZ\n";
pub const DEFINITION_FULL: &str = "\
# Full test environment
API_TOKEN=FILE-TOKEN-0000-1111
APP_ENV=ci
CACHE_DRIVER=file
SESSION_DRIVER=cookie
QUEUE_DRIVER=database
";
