//! Type aliases for domain concepts.

/// A Codemagic environment variable name (e.g., FIREBASE_ENV_FILE).
pub type VariableName = String;

/// A variable value as sent to the API: env file text or base64.
pub type VariableValue = String;

/// A Codemagic application identifier.
pub type AppId = String;
