// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

#[derive(Debug)]
pub struct ErrorReport {
    message: String,
}

impl ErrorReport {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

impl Error for ErrorReport {}

pub type Fallible<T> = Result<T, ErrorReport>;

pub fn fail<T>(message: impl Into<String>) -> Fallible<T> {
    Err(ErrorReport {
        message: message.into(),
    })
}

impl From<std::io::Error> for ErrorReport {
    fn from(value: std::io::Error) -> Self {
        ErrorReport::new(&format!("I/O error: {value}"))
    }
}

impl From<toml::de::Error> for ErrorReport {
    fn from(value: toml::de::Error) -> Self {
        ErrorReport::new(&format!("invalid configuration: {value}"))
    }
}

impl From<serde_json::Error> for ErrorReport {
    fn from(value: serde_json::Error) -> Self {
        ErrorReport::new(&format!("invalid JSON: {value}"))
    }
}

impl From<chrono::ParseError> for ErrorReport {
    fn from(value: chrono::ParseError) -> Self {
        ErrorReport::new(&format!("invalid timestamp: {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefix() {
        let err = ErrorReport::new("something broke");
        assert_eq!(err.to_string(), "error: something broke");
    }

    #[test]
    fn test_fail() {
        let result: Fallible<()> = fail(format!("bad value: {}", 3));
        assert_eq!(result.unwrap_err().to_string(), "error: bad value: 3");
    }
}
