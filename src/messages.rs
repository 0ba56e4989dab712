// User-visible notices. Validator diagnostics live on `validate::Rejection`.

pub const DUPLICATE_ID: &str = "The Car ID already exists. Please provide a different ID.";
pub const ABSENT_ON_DELETE: &str = "The Car ID is absent in Database. Please provide a different ID.";
pub const ABSENT_ON_UPDATE: &str = "The Car ID doesn't exists. Please provide a different ID.";

pub const COMMUNICATION_ERROR: &str = "Communication error";
pub const CONNECTION_FAILED: &str = "Error: Connection Failed.";
pub const RESOURCE_NOT_FOUND: &str = "Resource not found";
pub const SERVER_ERROR: &str = "Server error";
pub const EMPTY_DATABASE: &str = "Info: The Vintage Cars Database is empty.";

pub const CHOICE_NOT_INTEGER: &str = "Your Choice is not an Integer. Please re-try.";
pub const CHOICE_OUT_OF_RANGE: &str = "Your Choice entered is not in the range 1 to 5. Please re-try.";

pub const FAREWELL: &str = "The application is Exiting. Bye!";
pub const SERVER_UNREACHABLE: &str = "Server is not responding - quitting!";

pub fn unexpected_status(code: u16) -> String {
    format!("Server responded with Status Code: {}", code)
}

pub fn rejected_status(code: u16) -> String {
    format!("Error: Server responded with Status Code: {}", code)
}

pub fn console_failure(err: &std::io::Error) -> String {
    format!("Unknown Error Occurred. Error Details: {}", err)
}

pub fn added(code: u16) -> String {
    format!("Status: New car added Successfully. Status Code={}", code)
}

pub fn deleted(id: i64, code: u16) -> String {
    format!("Status: Car ID: {} deleted Successfully. Status Code={}", id, code)
}

pub fn updated(id: i64, code: u16) -> String {
    format!("Status: Car ID: {} updated Successfully. Status Code={}", id, code)
}
