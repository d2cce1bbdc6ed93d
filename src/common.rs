// Default URLs
pub static DEFAULT_BASE_URL: &str = "https://api.ddex.io/v2/";

// Header names
pub static HYDRO_AUTHENTICATION_HEADER: &str = "Hydro-Authentication";

// Authentication message format
pub static HYDRO_AUTHENTICATION_MESSAGE: &str = "HYDRO-AUTHENTICATION";
pub static MESSAGE_DELIMITER: char = '@';
pub static FIELD_DELIMITER: char = '#';

/// Stand-in written into the account field when the client has no account configured.
pub static MISSING_ACCOUNT: &str = "undefined";
